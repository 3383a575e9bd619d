//! Core domain models and business logic for the showroom

pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact_form;
pub mod lead;
#[cfg(feature = "ssr")]
pub mod leads;
pub mod reveal;
pub mod rotator;
pub mod search;
#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CategoryRecord, CategorySummary, ImageRef, ProductRecord, catalog};
pub use contact_form::{ContactFormState, FormPhase, FormVariant};
pub use lead::{FieldError, LeadField, LeadReceipt, LeadSubmission, LeadValidationErrors};
pub use rotator::{RotationMode, Rotator, TimerRequest, TimerToken};
pub use search::filter_products;
