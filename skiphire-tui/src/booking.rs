use std::cell::Cell;
use std::rc::Rc;

use skiphire_core::{DisplayOffer, OfferId, SelectionObserver};
use tracing::info;

/// Booking step that follows the selection. Continuing is a stub for now.
#[derive(Debug, Clone, Default)]
pub(crate) struct BookingStep {
    chosen: Rc<Cell<Option<OfferId>>>,
}

impl BookingStep {
    pub(crate) fn chosen(&self) -> Option<OfferId> {
        self.chosen.get()
    }

    /// Message shown when the user asks to continue with the chosen offer.
    pub(crate) fn proceed(&self, offers: &[DisplayOffer]) -> String {
        let Some(offer) = self
            .chosen()
            .and_then(|id| offers.iter().find(|offer| offer.id() == id))
        else {
            return "Select a skip before continuing".to_owned();
        };

        info!(id = %offer.id(), price = offer.final_price, "continue with skip");
        format!(
            "{} yard skip (£{}) chosen · online booking is not available yet",
            offer.size(),
            offer.final_price
        )
    }
}

impl SelectionObserver for BookingStep {
    fn selection_changed(&mut self, selected: Option<OfferId>) {
        self.chosen.set(selected);
    }
}
