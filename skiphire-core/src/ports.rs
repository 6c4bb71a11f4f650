//! Traits describing offer sources and the errors they report.

use async_trait::async_trait;
use serde_json::Error as JsonError;
use std::io::Error as IoError;

use crate::model::{Location, SkipOffer};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while loading offers from a provider.
pub enum PortError {
    /// Reading the catalogue failed.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
    /// Catalogue contents could not be decoded, e.g. a record lacks a required field.
    #[error("Decode error: {0}")]
    Decode(#[from] JsonError),
    /// The source holds no offers for the requested location.
    #[error("No offers for location {0}")]
    LocationNotServed(String),
    /// Internal provider error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Trait for collaborators that load raw offers for a location.
pub trait OfferPort: Send + Sync {
    /// Short human-readable name of the source, used in logs and the UI.
    fn name(&self) -> &str;

    /// Load every offer available at the location, in provider order.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the source cannot be read or decoded, or serves
    /// nothing at the location.
    async fn offers(&self, location: &Location) -> Result<Vec<SkipOffer>, PortError>;
}
