use skiphire_core::{
    model::{DisplayOffer, Location},
    selection::SelectionController,
    service::SkipHireService,
};

use crate::booking::BookingStep;

pub(crate) struct App {
    pub service: SkipHireService,
    pub location: Location,

    pub offers: Vec<DisplayOffer>,
    pub cursor: usize,
    pub selection: SelectionController,
    pub booking: BookingStep,

    pub is_loading: bool,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: SkipHireService, location: Location) -> Self {
        let booking = BookingStep::default();
        let mut selection = SelectionController::new();
        selection.set_observer(booking.clone());

        Self {
            service,
            location,
            offers: Vec::new(),
            cursor: 0,
            selection,
            booking,
            is_loading: false,
            status_message: None,
            error_message: None,
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self) {
        if self.cursor + 1 < self.offers.len() {
            self.cursor += 1;
        }
    }

    pub(crate) fn select_under_cursor(&mut self) {
        if let Some(offer) = self.offers.get(self.cursor) {
            self.selection.select(offer.id());
            self.status_message = None;
        }
    }

    pub(crate) fn cancel_selection(&mut self) {
        if self.selection.current_selection().is_some() {
            self.selection.deselect();
        }
        self.status_message = None;
    }

    pub(crate) fn continue_with_selection(&mut self) {
        self.status_message = Some(self.booking.proceed(&self.offers));
    }

    pub(crate) fn selected_offer(&self) -> Option<&DisplayOffer> {
        let id = self.selection.current_selection()?;
        self.offers.iter().find(|offer| offer.id() == id)
    }

    /// Install a freshly loaded catalogue. The selection must already be reconciled.
    pub(crate) fn replace_offers(&mut self, offers: Vec<DisplayOffer>) {
        self.offers = offers;
        self.cursor = self
            .selection
            .current_selection()
            .and_then(|id| self.offers.iter().position(|offer| offer.id() == id))
            .unwrap_or_else(|| self.cursor.min(self.offers.len().saturating_sub(1)));
    }
}
