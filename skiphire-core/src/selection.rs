//! Single-item selection state for one browsing session.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::model::OfferId;

/// Downstream consumer told about every selection change.
pub trait SelectionObserver {
    /// Receive the selection after a state-mutating call.
    fn selection_changed(&mut self, selected: Option<OfferId>);
}

impl<F> SelectionObserver for F
where
    F: FnMut(Option<OfferId>),
{
    fn selection_changed(&mut self, selected: Option<OfferId>) {
        self(selected);
    }
}

/// Holds at most one selected offer and notifies a single observer.
///
/// Ids passed to [`select`](Self::select) are not checked against any catalogue;
/// callers only hand out ids taken from the current display list.
#[derive(Default)]
pub struct SelectionController {
    selected: Option<OfferId>,
    observer: Option<Box<dyn SelectionObserver>>,
}

impl SelectionController {
    /// Create a controller with nothing selected and no observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the observer, replacing any earlier one.
    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: SelectionObserver + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Select an offer. Selecting the current offer again keeps it selected.
    pub fn select(&mut self, id: OfferId) {
        debug!(%id, previous = ?self.selected, "select offer");
        self.selected = Some(id);
        self.notify();
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        debug!(previous = ?self.selected, "deselect offer");
        self.selected = None;
        self.notify();
    }

    /// Currently selected offer, if any.
    #[must_use]
    pub fn current_selection(&self) -> Option<OfferId> {
        self.selected
    }

    /// Whether the given offer is the selected one.
    #[must_use]
    pub fn is_selected(&self, id: OfferId) -> bool {
        self.selected == Some(id)
    }

    /// Re-validate the selection against a replaced catalogue.
    ///
    /// Clears the selection when its id is missing from `offer_ids`; the observer
    /// is only notified in that case.
    pub fn reconcile(&mut self, offer_ids: &HashSet<OfferId>) {
        let Some(selected) = self.selected else {
            return;
        };

        if !offer_ids.contains(&selected) {
            debug!(%selected, "selected offer left the catalogue; clearing");
            self.selected = None;
            self.notify();
        }
    }

    fn notify(&mut self) {
        let selected = self.selected;
        if let Some(observer) = self.observer.as_mut() {
            observer.selection_changed(selected);
        }
    }
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SelectionController")
            .field("selected", &self.selected)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recording(controller: &mut SelectionController) -> Rc<RefCell<Vec<Option<OfferId>>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.set_observer(move |selected: Option<OfferId>| sink.borrow_mut().push(selected));
        seen
    }

    fn id_set(ids: &[i64]) -> HashSet<OfferId> {
        ids.iter().copied().map(OfferId).collect()
    }

    #[test]
    fn starts_empty() {
        assert_eq!(SelectionController::new().current_selection(), None);
    }

    #[test]
    fn select_then_read_back() {
        let mut controller = SelectionController::new();
        controller.select(OfferId(3));

        assert_eq!(controller.current_selection(), Some(OfferId(3)));
        assert!(controller.is_selected(OfferId(3)));
        assert!(!controller.is_selected(OfferId(1)));
    }

    #[test]
    fn reselecting_does_not_toggle() {
        let mut controller = SelectionController::new();
        controller.select(OfferId(3));
        controller.select(OfferId(3));

        assert_eq!(controller.current_selection(), Some(OfferId(3)));
    }

    #[test]
    fn deselect_clears_from_any_state() {
        let mut controller = SelectionController::new();
        controller.deselect();
        assert_eq!(controller.current_selection(), None);

        controller.select(OfferId(8));
        controller.deselect();
        assert_eq!(controller.current_selection(), None);
    }

    #[test]
    fn observer_sees_every_change_in_order() {
        let mut controller = SelectionController::new();
        let seen = recording(&mut controller);

        controller.select(OfferId(3));
        controller.select(OfferId(1));
        controller.deselect();

        assert_eq!(controller.current_selection(), None);
        assert_eq!(
            *seen.borrow(),
            vec![Some(OfferId(3)), Some(OfferId(1)), None]
        );
    }

    #[test]
    fn later_observer_replaces_earlier_one() {
        let mut controller = SelectionController::new();
        let first = recording(&mut controller);
        controller.select(OfferId(1));
        let second = recording(&mut controller);
        controller.select(OfferId(2));

        assert_eq!(*first.borrow(), vec![Some(OfferId(1))]);
        assert_eq!(*second.borrow(), vec![Some(OfferId(2))]);
    }

    #[test]
    fn reconcile_clears_missing_selection() {
        let mut controller = SelectionController::new();
        controller.select(OfferId(3));
        let seen = recording(&mut controller);

        controller.reconcile(&id_set(&[1, 2]));

        assert_eq!(controller.current_selection(), None);
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn reconcile_keeps_present_selection_quietly() {
        let mut controller = SelectionController::new();
        controller.select(OfferId(2));
        let seen = recording(&mut controller);

        controller.reconcile(&id_set(&[1, 2]));

        assert_eq!(controller.current_selection(), Some(OfferId(2)));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn reconcile_without_selection_is_a_no_op() {
        let mut controller = SelectionController::new();
        let seen = recording(&mut controller);

        controller.reconcile(&HashSet::new());

        assert_eq!(controller.current_selection(), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn custom_observer_type() {
        #[derive(Default)]
        struct Booking {
            last: Rc<RefCell<Option<OfferId>>>,
        }

        impl SelectionObserver for Booking {
            fn selection_changed(&mut self, selected: Option<OfferId>) {
                *self.last.borrow_mut() = selected;
            }
        }

        let booking = Booking::default();
        let last = Rc::clone(&booking.last);
        let mut controller = SelectionController::new();
        controller.set_observer(booking);
        controller.select(OfferId(11));

        assert_eq!(*last.borrow(), Some(OfferId(11)));
    }
}
