//! Catalog page state and the reducer that updates it
//!
//! Every change goes through [`CatalogState::dispatch`]. Each action replaces
//! a single slot; the visible product list is recomputed from scratch when
//! an action reports [`Action::affects_visible`].

use crate::filter::{self, FilterCriteria, SortMode};
use crate::gallery::{
    GalleryField, GalleryForm, SUBMISSION_ACCEPTED_MESSAGE, SUBMISSION_ERROR_MESSAGE,
};
use parts_common::{Category, GalleryEntry, Generation, Product, ProductId};

/// Result of a gallery submission as seen by the page
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Accepted. `refreshed` is the re-fetched gallery, or `None` when the
    /// re-fetch failed and the current list should stay.
    Accepted { refreshed: Option<Vec<GalleryEntry>> },
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetQuery(String),
    SetGeneration(Option<Generation>),
    SetCategory(Option<Category>),
    SetSort(SortMode),
    ProductsLoaded(Vec<Product>),
    GalleryLoaded(Vec<GalleryEntry>),
    GallerySubmitted(SubmissionOutcome),
    EditGalleryForm(GalleryField, String),
    OpenDetails(ProductId),
    CloseDetails,
}

impl Action {
    /// Inputs of the visible product list: the products and each criterion
    pub fn affects_visible(&self) -> bool {
        matches!(
            self,
            Action::SetQuery(_)
                | Action::SetGeneration(_)
                | Action::SetCategory(_)
                | Action::SetSort(_)
                | Action::ProductsLoaded(_)
        )
    }
}

#[derive(Debug, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    criteria: FilterCriteria,
    visible: Vec<Product>,
    gallery: Vec<GalleryEntry>,
    gallery_form: GalleryForm,
    gallery_message: Option<String>,
    details: Option<Product>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) {
        let recompute = action.affects_visible();

        match action {
            Action::SetQuery(query) => self.criteria.query = query,
            Action::SetGeneration(generation) => self.criteria.generation = generation,
            Action::SetCategory(category) => self.criteria.category = category,
            Action::SetSort(sort) => self.criteria.sort = sort,
            Action::ProductsLoaded(products) => {
                log::debug!("Loaded {} products into catalog", products.len());
                self.products = products;
            }
            Action::GalleryLoaded(gallery) => self.gallery = gallery,
            Action::GallerySubmitted(SubmissionOutcome::Accepted { refreshed }) => {
                self.gallery_message = Some(SUBMISSION_ACCEPTED_MESSAGE.to_string());
                self.gallery_form.clear();
                if let Some(gallery) = refreshed {
                    self.gallery = gallery;
                }
            }
            Action::GallerySubmitted(SubmissionOutcome::Failed) => {
                self.gallery_message = Some(SUBMISSION_ERROR_MESSAGE.to_string());
            }
            Action::EditGalleryForm(field, value) => self.gallery_form.set(field, value),
            Action::OpenDetails(id) => match self.products.iter().find(|p| p.id == id) {
                Some(product) => self.details = Some(product.clone()),
                None => log::warn!("No product with id {} to show details for", id),
            },
            Action::CloseDetails => self.details = None,
        }

        if recompute {
            self.visible = filter::apply(&self.products, &self.criteria);
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Products to render for the current criteria
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn gallery(&self) -> &[GalleryEntry] {
        &self.gallery
    }

    pub fn gallery_form(&self) -> &GalleryForm {
        &self.gallery_form
    }

    pub fn gallery_message(&self) -> Option<&str> {
        self.gallery_message.as_deref()
    }

    /// Product shown in the details panel, if open
    pub fn details(&self) -> Option<&Product> {
        self.details.as_ref()
    }
}
