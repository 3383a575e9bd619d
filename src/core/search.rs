//! Live text filtering for the category browser

use super::catalog::{CategoryRecord, ProductRecord};

impl ProductRecord {
    /// Whether this product matches an already-lowercased query
    pub fn matches_lowercase(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(query))
    }
}

/// Normalize user input into the form matched against products.
///
/// Returns `None` when the query is blank, meaning "no filter". Otherwise the
/// query is lowercased as typed; surrounding spaces stay part of the needle.
pub fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// Products of `category` matching `query`, in catalog order.
///
/// A product matches when the lowercase query is a substring of its title,
/// its description, or any of its tags. A blank query returns every product.
pub fn filter_products<'a>(category: &'a CategoryRecord, query: &str) -> Vec<&'a ProductRecord> {
    match normalize_query(query) {
        None => category.products.iter().collect(),
        Some(needle) => category
            .products
            .iter()
            .filter(|product| product.matches_lowercase(&needle))
            .collect(),
    }
}
