//! Page sections reused across routes

mod about;
mod category_grid;
mod contact;
mod quality;

pub use about::AboutSection;
pub use category_grid::CategoryGrid;
pub use contact::{ContactDetail, ContactSection, LOCATION, SALES_EMAIL, SALES_PHONE};
pub use quality::QualitySection;
