//! Application pages module
//!
//! One component per route, plus the not-found states.

mod about;
mod category;
mod contact;
mod home;
mod not_found;
mod product_detail;
mod products;

pub use about::AboutPage;
pub use category::CategoryPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::{MissingEntry, NotFoundPage};
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
