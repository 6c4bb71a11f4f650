use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.refresh`(...) and install the new catalogue
    ReloadCatalogue,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Char, Down, Enter, Esc, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    match key.code {
        Up | Char('k') => app.move_up(),
        Down | Char('j') => app.move_down(),
        // re-selecting the highlighted skip keeps it selected
        Enter | Char(' ') => app.select_under_cursor(),
        Esc | Char('x') => app.cancel_selection(),
        Char('c') => app.continue_with_selection(),
        Char('r') => return Action::ReloadCatalogue,
        _ => {}
    }
    Action::None
}
