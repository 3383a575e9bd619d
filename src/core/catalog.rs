//! Product catalog store
//!
//! Read-only mapping from category id to category metadata and its products.
//! The served site uses a procedurally generated demo catalog; a real dataset
//! can be loaded with [`Catalog::from_json`] without changing the lookup contract.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Number of images in every generated product gallery
pub const GALLERY_SIZE: usize = 3;

/// Path of a static image under the public `/images` tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub primary_image: ImageRef,
    pub gallery_images: Vec<ImageRef>,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// A top-level product grouping with its own product list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub products: Vec<ProductRecord>,
}

impl CategoryRecord {
    /// Find a product by id within this category
    pub fn product(&self, product_id: &str) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

/// Overview tile shown on the home and products pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub cover: ImageRef,
    pub blurb: String,
}

/// The full catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<CategoryRecord>,
    #[serde(default)]
    summaries: Vec<CategorySummary>,
}

impl Catalog {
    /// Build a catalog from explicit records
    pub fn new(categories: Vec<CategoryRecord>, summaries: Vec<CategorySummary>) -> Self {
        Self {
            categories,
            summaries,
        }
    }

    /// Load a catalog dataset from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Generate the demo catalog
    pub fn demo() -> Self {
        let categories = SEEDS.iter().map(CategorySeed::generate).collect();
        let summaries = SEEDS.iter().map(CategorySeed::summary).collect();
        Self::new(categories, summaries)
    }

    /// Look up a category. `None` is an expected outcome for stale or mistyped ids.
    pub fn category(&self, category_id: &str) -> Option<&CategoryRecord> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Look up a product within a category
    pub fn product(&self, category_id: &str, product_id: &str) -> Option<&ProductRecord> {
        self.category(category_id)?.product(product_id)
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    pub fn summaries(&self) -> &[CategorySummary] {
        &self.summaries
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::demo);

/// The catalog served by the site, built once on first access
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Generation template for one demo category
struct CategorySeed {
    id: &'static str,
    name: &'static str,
    blurb: &'static str,
    count: usize,
    prefix: &'static str,
    product_shot: &'static str,
    lifestyle_shot: Option<&'static str>,
    title: fn(usize) -> String,
    description: fn(usize) -> String,
    tags: fn(usize) -> [&'static str; 3],
}

impl CategorySeed {
    fn generate(&self) -> CategoryRecord {
        let products = (0..self.count).map(|i| self.product(i)).collect();
        CategoryRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            products,
        }
    }

    fn product(&self, index: usize) -> ProductRecord {
        let product_shot = ImageRef::from(self.product_shot);
        // Alternate lifestyle/product shots on the grid where a lifestyle shot exists
        let (primary, lifestyle) = match self.lifestyle_shot {
            Some(lifestyle) => {
                let lifestyle = ImageRef::from(lifestyle);
                let primary = if index % 2 == 0 {
                    lifestyle.clone()
                } else {
                    product_shot.clone()
                };
                (primary, lifestyle)
            }
            None => (product_shot.clone(), product_shot.clone()),
        };

        ProductRecord {
            id: format!("{}-{}", self.prefix, index + 1),
            gallery_images: vec![primary.clone(), product_shot, lifestyle],
            primary_image: primary,
            title: (self.title)(index),
            description: (self.description)(index),
            tags: (self.tags)(index).iter().map(|t| t.to_string()).collect(),
        }
    }

    fn summary(&self) -> CategorySummary {
        CategorySummary {
            id: self.id.to_string(),
            name: self.name.to_string(),
            cover: ImageRef::from(self.product_shot),
            blurb: self.blurb.to_string(),
        }
    }
}

const SEEDS: [CategorySeed; 8] = [
    CategorySeed {
        id: "rugs",
        name: "Rugs",
        blurb: "Handwoven rugs for every space",
        count: 42,
        prefix: "rug",
        product_shot: "/images/products/rug.png",
        lifestyle_shot: Some("/images/lifestyle/rug.jpg"),
        title: |i| format!("Handwoven Rug Type {}", i + 1),
        description: |i| {
            format!(
                "Premium quality handwoven rug with unique design pattern {}. Crafted with precision \
                 and care using traditional weaving techniques passed down through generations. Each \
                 piece is unique and adds warmth and character to any space.",
                i + 1
            )
        },
        tags: |i| {
            let room = match i % 3 {
                0 => "living room",
                1 => "bedroom",
                _ => "dining",
            };
            ["handwoven", "natural", room]
        },
    },
    CategorySeed {
        id: "placemats",
        name: "Placemats",
        blurb: "Elegant table settings for dining",
        count: 20,
        prefix: "placemat",
        product_shot: "/images/products/placemat.png",
        lifestyle_shot: Some("/images/lifestyle/placemat.jpg"),
        title: |i| format!("Elegant Placemat Set {}", i + 1),
        description: |i| {
            format!(
                "Beautiful placemat set perfect for dining occasions. Set of {} pieces with elegant \
                 design, for daily use or special occasions.",
                4 + (i % 3)
            )
        },
        tags: |i| ["dining", "elegant", if i % 2 == 0 { "set" } else { "individual" }],
    },
    CategorySeed {
        id: "runners",
        name: "Table Runners",
        blurb: "Beautiful runners for your tables",
        count: 15,
        prefix: "runner",
        product_shot: "/images/products/runner.png",
        lifestyle_shot: Some("/images/lifestyle/runner.jpg"),
        title: |i| format!("Table Runner Design {}", i + 1),
        description: |_| {
            "Elegant table runner to enhance your dining table. Available in various lengths and \
             patterns, in premium quality fabric."
                .to_string()
        },
        tags: |_| ["dining", "elegant", "table decor"],
    },
    CategorySeed {
        id: "cushions",
        name: "Cushions",
        blurb: "Comfortable cushions",
        count: 30,
        prefix: "cushion",
        product_shot: "/images/products/cushion.jpg",
        lifestyle_shot: None,
        title: |i| format!("Decorative Cushion {}", i + 1),
        description: |_| {
            "Comfortable and stylish cushion perfect for your living space. Available in multiple \
             sizes and designs with removable covers."
                .to_string()
        },
        tags: |_| ["decorative", "comfort", "living room"],
    },
    CategorySeed {
        id: "throws",
        name: "Throws",
        blurb: "Soft throws and blankets",
        count: 18,
        prefix: "throw",
        product_shot: "/images/products/throw.jpg",
        lifestyle_shot: None,
        title: |i| format!("Cozy Throw Blanket {}", i + 1),
        description: |_| {
            "Soft and warm throw blanket for ultimate comfort. Lightweight yet warm, and machine \
             washable."
                .to_string()
        },
        tags: |_| ["soft", "cozy", "blanket"],
    },
    CategorySeed {
        id: "bedding",
        name: "Premium Bedding",
        blurb: "Luxury bedding collections",
        count: 25,
        prefix: "bedding",
        product_shot: "/images/products/bedding.jpg",
        lifestyle_shot: Some("/images/lifestyle/bedding.jpg"),
        title: |i| format!("Premium Bedding Set {}", i + 1),
        description: |_| {
            "Luxury bedding collection for a comfortable night's sleep. High thread count and \
             premium materials in breathable fabric."
                .to_string()
        },
        tags: |_| ["luxury", "bedroom", "comfortable"],
    },
    CategorySeed {
        id: "bathmats",
        name: "Bath Mats",
        blurb: "Spa-quality bath mats",
        count: 12,
        prefix: "bathmat",
        product_shot: "/images/products/bathmat.jpg",
        lifestyle_shot: Some("/images/lifestyle/bathmat.jpg"),
        title: |i| format!("Spa Bath Mat {}", i + 1),
        description: |_| {
            "Highly absorbent and quick-drying bath mat. Soft on feet with non-slip backing."
                .to_string()
        },
        tags: |_| ["spa", "bathroom", "absorbent"],
    },
    CategorySeed {
        id: "chairpads",
        name: "Chair Pads",
        blurb: "Comfortable seating solutions",
        count: 10,
        prefix: "chairpad",
        product_shot: "/images/products/chairpad.jpg",
        lifestyle_shot: Some("/images/lifestyle/chairpad.jpg"),
        title: |i| format!("Chair Pad Set {}", i + 1),
        description: |_| {
            "Comfortable chair pads for your dining chairs. Available in various colors and \
             patterns, with tie fasteners and reversible designs."
                .to_string()
        },
        tags: |_| ["dining", "comfortable", "cushion"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_has_all_categories_in_order() {
        let catalog = Catalog::demo();
        let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "rugs",
                "placemats",
                "runners",
                "cushions",
                "throws",
                "bedding",
                "bathmats",
                "chairpads"
            ]
        );
        assert_eq!(catalog.summaries().len(), 8);
    }

    #[test]
    fn test_rugs_generated_titles() {
        let catalog = Catalog::demo();
        let rugs = catalog.category("rugs").unwrap();

        assert_eq!(rugs.name, "Rugs");
        assert_eq!(rugs.products.len(), 42);
        assert_eq!(rugs.products[0].id, "rug-1");
        assert_eq!(rugs.products[0].title, "Handwoven Rug Type 1");
        assert_eq!(rugs.products[41].title, "Handwoven Rug Type 42");
    }

    #[test]
    fn test_rug_room_tags_cycle() {
        let catalog = Catalog::demo();
        let rugs = catalog.category("rugs").unwrap();

        assert!(rugs.products[0].tags.contains(&"living room".to_string()));
        assert!(rugs.products[1].tags.contains(&"bedroom".to_string()));
        assert!(rugs.products[2].tags.contains(&"dining".to_string()));
    }

    #[test]
    fn test_every_product_has_full_gallery() {
        let catalog = Catalog::demo();
        for category in catalog.categories() {
            for product in &category.products {
                assert_eq!(product.gallery_images.len(), GALLERY_SIZE, "{}", product.id);
                assert_eq!(product.gallery_images[0], product.primary_image);
            }
        }
    }

    #[test]
    fn test_primary_image_alternates() {
        let catalog = Catalog::demo();
        let rugs = catalog.category("rugs").unwrap();

        assert_eq!(rugs.products[0].primary_image.as_str(), "/images/lifestyle/rug.jpg");
        assert_eq!(rugs.products[1].primary_image.as_str(), "/images/products/rug.png");

        let cushions = catalog.category("cushions").unwrap();
        assert_eq!(
            cushions.products[0].primary_image,
            cushions.products[1].primary_image
        );
    }

    #[test]
    fn test_product_ids_unique_within_category() {
        let catalog = Catalog::demo();
        for category in catalog.categories() {
            let mut ids: Vec<&str> = category.products.iter().map(|p| p.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), category.products.len());
        }
    }

    #[test]
    fn test_placemat_piece_count_in_description() {
        let catalog = Catalog::demo();
        let placemats = catalog.category("placemats").unwrap();

        assert!(placemats.products[0].description.contains("Set of 4 pieces"));
        assert!(placemats.products[2].description.contains("Set of 6 pieces"));
        assert!(placemats.products[3].description.contains("Set of 4 pieces"));
    }

    #[test]
    fn test_unknown_category_is_none() {
        let catalog = Catalog::demo();
        assert!(catalog.category("curtains").is_none());
        assert!(catalog.product("curtains", "rug-1").is_none());
    }

    #[test]
    fn test_unknown_product_is_none() {
        let catalog = Catalog::demo();
        assert!(catalog.product("rugs", "rug-43").is_none());
        // Ids are scoped to their category
        assert!(catalog.product("throws", "rug-1").is_none());
        assert!(catalog.product("rugs", "rug-42").is_some());
    }

    #[test]
    fn test_global_catalog_is_shared() {
        let a = catalog() as *const Catalog;
        let b = catalog() as *const Catalog;
        assert_eq!(a, b);
        assert_eq!(catalog().categories().len(), 8);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "categories": [{
                "id": "throws",
                "name": "Throws",
                "products": [{
                    "id": "t-1",
                    "primary_image": "/images/a.jpg",
                    "gallery_images": ["/images/a.jpg", "/images/b.jpg"],
                    "title": "Wool Throw",
                    "description": "Warm",
                    "tags": ["wool"]
                }]
            }]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        let product = catalog.product("throws", "t-1").unwrap();
        assert_eq!(product.gallery_images.len(), 2);
        assert_eq!(product.primary_image, ImageRef::from("/images/a.jpg"));
        assert!(catalog.summaries().is_empty());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Catalog::from_json("{\"categories\": 3}").is_err());
    }
}
