//! Community gallery submissions
//!
//! A submission is posted once. There is no retry and no optimistic insert;
//! the gallery only changes when it is re-fetched after an accepted post.

use crate::api::StorefrontClient;
use parts_common::CatalogError;
use std::collections::BTreeMap;
use thiserror::Error;

pub const SUBMISSION_ACCEPTED_MESSAGE: &str = "Thanks! Your submission will be reviewed.";
pub const SUBMISSION_ERROR_MESSAGE: &str = "Submission error.";

/// Form field keys as posted to the API
pub const FIELD_NAME: &str = "name";
pub const FIELD_CAR: &str = "car";
pub const FIELD_IMAGE_URL: &str = "imageUrl";

const REQUIRED_FIELDS: [&str; 3] = [FIELD_NAME, FIELD_CAR, FIELD_IMAGE_URL];

/// Why a submission did not go through. Users only ever see
/// [`SUBMISSION_ERROR_MESSAGE`]; the variants exist for logging.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// A required field is blank; nothing was sent
    #[error("Missing required field: {0}")]
    Incomplete(&'static str),
    /// The server answered with a non-2xx status
    #[error("Submission rejected: HTTP {0}")]
    Rejected(reqwest::StatusCode),
    /// The request never completed
    #[error("Submission failed: {0}")]
    Transport(CatalogError),
}

impl SubmissionError {
    pub fn user_message(&self) -> &'static str {
        SUBMISSION_ERROR_MESSAGE
    }
}

impl From<CatalogError> for SubmissionError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::HttpStatus(status) => SubmissionError::Rejected(status),
            other => SubmissionError::Transport(other),
        }
    }
}

/// Editable field of the gallery form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryField {
    Name,
    Car,
    ImageUrl,
}

/// Gallery form contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryForm {
    pub name: String,
    pub car: String,
    pub image_url: String,
}

impl GalleryForm {
    pub fn new(name: &str, car: &str, image_url: &str) -> Self {
        Self {
            name: name.to_string(),
            car: car.to_string(),
            image_url: image_url.to_string(),
        }
    }

    pub fn set(&mut self, field: GalleryField, value: String) {
        match field {
            GalleryField::Name => self.name = value,
            GalleryField::Car => self.car = value,
            GalleryField::ImageUrl => self.image_url = value,
        }
    }

    /// True when every required field has content
    pub fn is_complete(&self) -> bool {
        missing_field(&self.to_fields()).is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Form fields keyed by their wire names
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (FIELD_NAME.to_string(), self.name.clone()),
            (FIELD_CAR.to_string(), self.car.clone()),
            (FIELD_IMAGE_URL.to_string(), self.image_url.clone()),
        ])
    }
}

fn missing_field(fields: &BTreeMap<String, String>) -> Option<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .find(|key| fields.get(*key).map_or(true, |v| v.trim().is_empty()))
}

/// Post form fields to the gallery endpoint as a JSON object.
///
/// Blank required fields block the submission before any request is made.
pub async fn submit(
    client: &StorefrontClient,
    fields: &BTreeMap<String, String>,
) -> Result<(), SubmissionError> {
    if let Some(field) = missing_field(fields) {
        log::debug!("Gallery submission blocked, {} is empty", field);
        return Err(SubmissionError::Incomplete(field));
    }

    client.post_gallery(fields).await?;
    log::info!("Gallery submission accepted");
    Ok(())
}
