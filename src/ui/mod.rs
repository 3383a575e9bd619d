pub mod common;
pub mod contact_form;
pub mod gallery;
pub mod icon;
pub mod nav;
pub mod pages;
pub mod reveal;
pub mod sections;

pub use contact_form::{ContactForm, ContactFormModal};
pub use gallery::ProductGallery;
pub use icon::{Icon, icons};
pub use nav::{SiteFooter, SiteHeader};
