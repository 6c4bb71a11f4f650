//! Filtering, ordering, and pricing of raw skip offers.

use std::collections::HashSet;

use tracing::debug;

use crate::model::{DisplayOffer, OfferId, SkipOffer};

/// Stateless stage turning provider records into the list shown to users.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogProcessor;

impl CatalogProcessor {
    /// Drop forbidden and sizeless offers, order by size, and attach the final price.
    ///
    /// Offers of equal size keep their input order.
    #[must_use]
    pub fn process(offers: &[SkipOffer]) -> Vec<DisplayOffer> {
        let mut visible: Vec<DisplayOffer> = offers
            .iter()
            .filter(|offer| Self::is_displayable(offer))
            .map(|offer| DisplayOffer {
                offer: offer.clone(),
                final_price: Self::final_price(offer.price_before_vat, offer.vat),
            })
            .collect();

        // `sort_by` is stable
        visible.sort_by(|left, right| left.size().total_cmp(&right.size()));

        debug!(
            received = offers.len(),
            displayed = visible.len(),
            "processed skip catalogue"
        );

        visible
    }

    /// Whether an offer survives filtering.
    #[must_use]
    pub fn is_displayable(offer: &SkipOffer) -> bool {
        !offer.forbidden && offer.size > 0.0
    }

    /// Price including VAT, rounded half up to whole currency units.
    ///
    /// Negative inputs are not corrected; the arithmetic result is returned.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is already integral after rounding"
    )]
    pub fn final_price(price_before_vat: f64, vat: f64) -> i64 {
        round_half_up(price_before_vat * (1.0 + vat / 100.0)) as i64
    }
}

/// Collect the ids of a processed catalogue, as consumed by
/// [`SelectionController::reconcile`](crate::selection::SelectionController::reconcile).
#[must_use]
pub fn offer_ids(offers: &[DisplayOffer]) -> HashSet<OfferId> {
    offers.iter().map(DisplayOffer::id).collect()
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // exact for every finite f64
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
