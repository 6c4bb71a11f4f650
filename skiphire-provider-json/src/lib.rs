//! Provider implementation reading skip offers from a JSON catalogue file.
//!
//! The file holds a JSON array of offer records in the snake_case shape served by
//! skip hire APIs, e.g. `[{"id": 17933, "size": 4, "hire_period_days": 14, ...}]`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use skiphire_core::{
    model::{Location, SkipOffer},
    ports::{OfferPort, PortError},
    service::SkipHireService,
};

/// Offer source backed by a JSON file on disk.
///
/// The file is re-read on every call so a refreshed catalogue is picked up.
#[derive(Debug, Clone)]
pub struct JsonFileOfferPort {
    path: PathBuf,
    name: String,
}

impl JsonFileOfferPort {
    /// Create a new port reading from the given file.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |file| file.to_string_lossy().into_owned(),
        );
        Self { path, name }
    }

    /// Path of the catalogue file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OfferPort for JsonFileOfferPort {
    fn name(&self) -> &str {
        &self.name
    }

    async fn offers(&self, location: &Location) -> Result<Vec<SkipOffer>, PortError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let records = decode_offers(&bytes)?;
        let total = records.len();

        let served: Vec<SkipOffer> = records
            .into_iter()
            .filter(|offer| location.serves(offer))
            .collect();

        debug!(
            path = %self.path.display(),
            total,
            served = served.len(),
            "read offer catalogue"
        );

        if served.is_empty() && total > 0 {
            warn!(%location, "catalogue has no offers for location");
            return Err(PortError::LocationNotServed(location.to_string()));
        }

        Ok(served)
    }
}

/// Build a service reading its offers from the given JSON file.
#[must_use]
pub fn service<P: Into<PathBuf>>(path: P) -> SkipHireService {
    SkipHireService::new(Arc::new(JsonFileOfferPort::new(path)))
}

/// Decode a JSON array of offers.
///
/// # Errors
///
/// Returns [`PortError::Decode`] when the payload is not an array of complete offer records.
pub fn decode_offers(bytes: &[u8]) -> Result<Vec<SkipOffer>, PortError> {
    serde_json::from_slice(bytes).map_err(PortError::from)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use skiphire_core::model::OfferId;
    use tempfile::NamedTempFile;

    use super::*;

    const CATALOGUE: &str = r#"[
        {
            "id": 11554, "size": 8, "hire_period_days": 14,
            "transport_cost": null, "per_tonne_cost": null,
            "price_before_vat": 375, "vat": 20,
            "postcode": "NR32", "area": "Lowestoft", "forbidden": false,
            "created_at": "2025-04-03T13:51:46.897146", "updated_at": "2025-04-07T13:16:52.813",
            "allowed_on_road": true, "allows_heavy_waste": true
        },
        {
            "id": 11553, "size": 4, "hire_period_days": 14,
            "transport_cost": null, "per_tonne_cost": null,
            "price_before_vat": 278, "vat": 20,
            "postcode": "NR32", "area": "Lowestoft", "forbidden": false,
            "created_at": "2025-04-03T13:51:46.897146", "updated_at": "2025-04-07T13:16:52.813",
            "allowed_on_road": true, "allows_heavy_waste": true
        },
        {
            "id": 22001, "size": 6, "hire_period_days": 7,
            "transport_cost": 45, "per_tonne_cost": 120,
            "price_before_vat": 305, "vat": 20,
            "postcode": "LE10", "area": "Hinckley", "forbidden": false,
            "created_at": "2025-04-03T13:51:46", "updated_at": "2025-04-03T13:51:46",
            "allowed_on_road": false, "allows_heavy_waste": false
        }
    ]"#;

    fn catalogue_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write catalogue");
        file
    }

    #[tokio::test]
    async fn reads_offers_for_postcode_in_file_order() {
        let file = catalogue_file(CATALOGUE);
        let port = JsonFileOfferPort::new(file.path());

        let offers = port
            .offers(&Location::new("nr32", None::<String>))
            .await
            .expect("offers should load");

        let ids: Vec<OfferId> = offers.iter().map(|offer| offer.id).collect();
        assert_eq!(ids, vec![OfferId(11554), OfferId(11553)]);
    }

    #[tokio::test]
    async fn empty_postcode_reads_everything() {
        let file = catalogue_file(CATALOGUE);
        let port = JsonFileOfferPort::new(file.path());

        let offers = port
            .offers(&Location::new("", None::<String>))
            .await
            .expect("offers should load");

        assert_eq!(offers.len(), 3);
        assert_eq!(offers.get(2).and_then(|offer| offer.transport_cost), Some(45.0));
    }

    #[tokio::test]
    async fn unknown_location_is_reported() {
        let file = catalogue_file(CATALOGUE);
        let port = JsonFileOfferPort::new(file.path());

        let result = port.offers(&Location::new("NR32", Some("Norwich"))).await;

        assert!(matches!(result, Err(PortError::LocationNotServed(_))));
    }

    #[tokio::test]
    async fn empty_catalogue_is_not_an_error() {
        let file = catalogue_file("[]");
        let port = JsonFileOfferPort::new(file.path());

        let offers = port
            .offers(&Location::new("NR32", None::<String>))
            .await
            .expect("empty catalogue should load");

        assert!(offers.is_empty());
    }

    #[tokio::test]
    async fn record_missing_required_field_fails_decoding() {
        let file = catalogue_file(r#"[{"id": 1, "size": 4}]"#);
        let port = JsonFileOfferPort::new(file.path());

        let result = port.offers(&Location::new("", None::<String>)).await;

        assert!(matches!(result, Err(PortError::Decode(_))));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let port = JsonFileOfferPort::new(dir.path().join("absent.json"));

        let result = port.offers(&Location::new("NR32", None::<String>)).await;

        assert!(matches!(result, Err(PortError::Io(_))));
        assert_eq!(port.name(), "absent.json");
    }

    #[tokio::test]
    async fn service_returns_priced_catalogue() {
        let file = catalogue_file(CATALOGUE);
        let skip_service = service(file.path());

        let catalogue = skip_service
            .catalogue(&Location::new("NR32", Some("Lowestoft")))
            .await
            .expect("catalogue should load");

        let summary: Vec<(OfferId, i64)> = catalogue
            .iter()
            .map(|display| (display.id(), display.final_price))
            .collect();
        assert_eq!(summary, vec![(OfferId(11553), 334), (OfferId(11554), 450)]);
    }
}
