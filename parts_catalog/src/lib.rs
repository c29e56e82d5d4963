//! Parts Catalog - storefront catalog and community gallery
//!
//! Loads the product list and gallery from the storefront API, derives the
//! filtered/sorted product view from the visitor's criteria, and submits
//! gallery entries.

pub mod api;
pub mod filter;
pub mod formatters;
pub mod gallery;
pub mod session;
pub mod store;

pub use api::StorefrontClient;
pub use filter::{apply, FilterCriteria, SortMode};
pub use gallery::{GalleryField, GalleryForm, SubmissionError};
pub use parts_common::{CatalogError, Category, GalleryEntry, Generation, Product, Result};
pub use session::Storefront;
pub use store::{Action, CatalogState, SubmissionOutcome};
