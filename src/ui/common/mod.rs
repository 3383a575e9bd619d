//! Common reusable UI components

pub mod form;
pub mod message;
pub mod modal;

pub use form::{FormField, TextAreaField};
pub use message::{ErrorMessage, SuccessMessage};
pub use modal::BaseModal;
