//! Domain data structures for skip offers, locations, and priced display records.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier for a skip offer, unique within a single catalogue.
pub struct OfferId(pub i64);

impl fmt::Display for OfferId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Raw skip offer as delivered by a provider.
pub struct SkipOffer {
    /// Unique identifier, stable across renders.
    pub id: OfferId,
    /// Capacity in yards.
    pub size: f64,
    /// Rental duration in days.
    pub hire_period_days: u32,
    /// Optional transport surcharge.
    #[serde(default)]
    pub transport_cost: Option<f64>,
    /// Optional per-tonne surcharge. Not part of the displayed price.
    #[serde(default)]
    pub per_tonne_cost: Option<f64>,
    /// Base tariff before VAT.
    pub price_before_vat: f64,
    /// VAT as a percentage.
    pub vat: f64,
    /// Postcode the offer is served in.
    #[serde(default)]
    pub postcode: String,
    /// Area the offer is served in.
    #[serde(default)]
    pub area: String,
    /// Excludes the offer from display when set.
    #[serde(default)]
    pub forbidden: bool,
    /// Whether the skip may be placed on a public road without a permit.
    #[serde(default)]
    pub allowed_on_road: bool,
    /// Whether heavy waste (soil, rubble) is accepted.
    #[serde(default)]
    pub allows_heavy_waste: bool,
    /// Creation timestamp at the provider.
    pub created_at: NaiveDateTime,
    /// Last update timestamp at the provider.
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Offer that passed catalogue filtering, together with its displayed price.
pub struct DisplayOffer {
    /// The underlying offer.
    pub offer: SkipOffer,
    /// Price including VAT, rounded to whole currency units.
    pub final_price: i64,
}

impl DisplayOffer {
    /// Identifier of the underlying offer.
    #[must_use]
    pub fn id(&self) -> OfferId {
        self.offer.id
    }

    /// Capacity in yards.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.offer.size
    }

    /// True when the skip needs a road permit.
    #[must_use]
    pub fn requires_permit(&self) -> bool {
        !self.offer.allowed_on_road
    }

    /// True when a non-zero transport surcharge applies.
    #[must_use]
    pub fn has_transport_surcharge(&self) -> bool {
        self.offer
            .transport_cost
            .is_some_and(|cost| cost.abs() > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Where the customer wants the skip delivered.
pub struct Location {
    /// Postcode or postcode district, e.g. `NR32`. Empty matches every offer.
    pub postcode: String,
    /// Optional area name narrowing the postcode.
    pub area: Option<String>,
}

impl Location {
    /// Construct a new location query.
    #[must_use]
    pub fn new<P: Into<String>, A: Into<String>>(postcode: P, area: Option<A>) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.map(Into::into),
        }
    }

    /// Check whether an offer is served at this location.
    #[must_use]
    pub fn serves(&self, offer: &SkipOffer) -> bool {
        let postcode = self.postcode.trim();
        let postcode_matches =
            postcode.is_empty() || offer.postcode.trim().eq_ignore_ascii_case(postcode);

        let area_matches = self
            .area
            .as_deref()
            .map(str::trim)
            .filter(|area| !area.is_empty())
            .is_none_or(|area| offer.area.trim().eq_ignore_ascii_case(area));

        postcode_matches && area_matches
    }
}

impl fmt::Display for Location {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.area {
            Some(area) if !area.is_empty() => write!(formatter, "{} ({area})", self.postcode),
            _ => write!(formatter, "{}", self.postcode),
        }
    }
}
