//! Shared types for the parts storefront
//!
//! Product and gallery records as served by the storefront API, the closed
//! generation/category tag sets, and the common error type.

pub mod error;
pub mod models;

pub use error::{CatalogError, Result};
pub use models::{Category, GalleryEntry, Generation, Product, ProductId, PLACEHOLDER_IMAGE};
