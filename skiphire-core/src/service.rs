//! High-level service facade combining an offer source with catalogue processing.

use std::sync::Arc;

use tracing::info;

use crate::catalog::{CatalogProcessor, offer_ids};
use crate::model::{DisplayOffer, Location};
use crate::ports::{OfferPort, PortError};
use crate::selection::SelectionController;

/// Public entry point for loading the catalogue shown to users.
pub struct SkipHireService {
    port: Arc<dyn OfferPort>,
}

impl SkipHireService {
    /// Create a new service bound to the provided offer source.
    #[must_use]
    pub fn new(port: Arc<dyn OfferPort>) -> Self {
        Self { port }
    }

    /// Name of the underlying offer source.
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.port.name()
    }

    /// Load offers for a location and turn them into the ordered, priced catalogue.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the provider call fails.
    pub async fn catalogue(&self, location: &Location) -> Result<Vec<DisplayOffer>, PortError> {
        let offers = self.port.offers(location).await?;
        let catalogue = CatalogProcessor::process(&offers);
        info!(
            source = self.port.name(),
            %location,
            offers = catalogue.len(),
            "loaded skip catalogue"
        );
        Ok(catalogue)
    }

    /// Reload the catalogue and drop a selection that no longer refers to an offer.
    ///
    /// On error the selection is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the provider call fails.
    pub async fn refresh(
        &self,
        location: &Location,
        selection: &mut SelectionController,
    ) -> Result<Vec<DisplayOffer>, PortError> {
        let catalogue = self.catalogue(location).await?;
        selection.reconcile(&offer_ids(&catalogue));
        Ok(catalogue)
    }
}
