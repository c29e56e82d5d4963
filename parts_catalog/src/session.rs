//! A visitor's session: the storefront client plus page state

use crate::api::StorefrontClient;
use crate::gallery::{self, SubmissionError};
use crate::store::{Action, CatalogState, SubmissionOutcome};

pub struct Storefront {
    client: StorefrontClient,
    state: CatalogState,
}

impl Storefront {
    pub fn new(client: StorefrontClient) -> Self {
        Self {
            client,
            state: CatalogState::new(),
        }
    }

    pub fn client(&self) -> &StorefrontClient {
        &self.client
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state.dispatch(action);
    }

    /// Initial load of products and gallery.
    ///
    /// Both requests run concurrently. A failed request leaves its list empty
    /// and does not affect the other.
    pub async fn load(&mut self) {
        let (products, gallery) =
            tokio::join!(self.client.fetch_products(), self.client.fetch_gallery());

        match products {
            Ok(products) => self.state.dispatch(Action::ProductsLoaded(products)),
            Err(e) => log::warn!("Failed to load products: {}", e),
        }

        match gallery {
            Ok(gallery) => self.state.dispatch(Action::GalleryLoaded(gallery)),
            Err(e) => log::warn!("Failed to load gallery: {}", e),
        }
    }

    /// Submit the current gallery form.
    ///
    /// On success the form is cleared and the gallery re-fetched; on failure
    /// form and gallery stay as they were. An incomplete form is not sent.
    pub async fn submit_gallery(&mut self) -> Result<(), SubmissionError> {
        let fields = self.state.gallery_form().to_fields();

        match gallery::submit(&self.client, &fields).await {
            Ok(()) => {
                let refreshed = match self.client.fetch_gallery().await {
                    Ok(gallery) => Some(gallery),
                    Err(e) => {
                        log::warn!("Failed to refresh gallery after submission: {}", e);
                        None
                    }
                };
                self.state
                    .dispatch(Action::GallerySubmitted(SubmissionOutcome::Accepted { refreshed }));
                Ok(())
            }
            // Blocked before sending, the page shows no message
            Err(e @ SubmissionError::Incomplete(_)) => Err(e),
            Err(e) => {
                log::error!("Gallery submission failed: {}", e);
                self.state
                    .dispatch(Action::GallerySubmitted(SubmissionOutcome::Failed));
                Err(e)
            }
        }
    }
}
