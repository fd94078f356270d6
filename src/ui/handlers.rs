use crossterm::event::KeyCode;

use super::state::{AppState, ConnectField, Screen, Transition, WizardAction, WizardState, WizardStep};

/// True while a text field owns the keyboard, so plain characters (including
/// `q`) must be typed, not treated as shortcuts.
pub(super) fn is_text_input_active(state: &AppState) -> bool {
    match state.screen {
        Screen::Host => false,
        Screen::Wizard => state.wizard.as_ref().is_some_and(|w| {
            w.step == WizardStep::Connect
                && matches!(w.connect_field, ConnectField::RepoUrl | ConnectField::FileEntry)
        }),
    }
}

pub(super) fn handle_key(state: &mut AppState, key: KeyCode) {
    match state.screen {
        Screen::Host => handle_host_key(state, key),
        Screen::Wizard => handle_wizard_key(state, key),
    }
}

fn handle_host_key(state: &mut AppState, key: KeyCode) {
    if key == KeyCode::Enter {
        state.open_wizard();
    }
}

fn handle_wizard_key(state: &mut AppState, key: KeyCode) {
    let Some(wizard) = state.wizard.as_mut() else {
        return;
    };

    match wizard.step {
        WizardStep::Welcome => match key {
            KeyCode::Enter => {
                let _ = wizard.apply(WizardAction::Start);
            }
            KeyCode::Esc => state.close_wizard(),
            _ => {}
        },
        WizardStep::Connect => handle_connect_key(state, key),
        WizardStep::Consent => match key {
            KeyCode::Enter => {
                let _ = wizard.apply(WizardAction::ConsentAnalyze);
            }
            KeyCode::Esc | KeyCode::Backspace => {
                let _ = wizard.apply(WizardAction::Back);
            }
            _ => {}
        },
        // Cosmetic only: there is no cancel, the call must settle.
        WizardStep::Processing => {}
        WizardStep::Review => match key {
            KeyCode::Enter => {
                if let Some(Transition::Finish) = wizard.apply(WizardAction::Finalize) {
                    state.complete_wizard();
                }
            }
            KeyCode::Esc => state.close_wizard(),
            _ => {}
        },
    }
}

fn handle_connect_key(state: &mut AppState, key: KeyCode) {
    let Some(wizard) = state.wizard.as_mut() else {
        return;
    };
    wizard.notice = None;

    if key == KeyCode::Tab {
        wizard.connect_field = next_connect_field(wizard);
        return;
    }

    match wizard.connect_field {
        ConnectField::RepoUrl => match key {
            KeyCode::Enter => wizard.connect_field = ConnectField::FileEntry,
            KeyCode::Esc => state.close_wizard(),
            KeyCode::Char(c) => wizard.repo_url.insert(c),
            KeyCode::Backspace => wizard.repo_url.backspace(),
            KeyCode::Left => wizard.repo_url.move_left(),
            KeyCode::Right => wizard.repo_url.move_right(),
            _ => {}
        },
        ConnectField::FileEntry => match key {
            KeyCode::Enter => {
                if wizard.file_entry.is_empty() {
                    // Empty entry means the form is done: review the list if
                    // there is one, otherwise try to continue.
                    if wizard.files.is_empty() {
                        try_continue(wizard);
                    } else {
                        wizard.connect_field = ConnectField::FileList;
                    }
                } else {
                    let name = wizard.file_entry.value.trim().to_string();
                    wizard.files.push(name);
                    wizard.file_entry.clear();
                }
            }
            KeyCode::Esc => wizard.connect_field = ConnectField::RepoUrl,
            KeyCode::Char(c) => wizard.file_entry.insert(c),
            KeyCode::Backspace => wizard.file_entry.backspace(),
            KeyCode::Left => wizard.file_entry.move_left(),
            KeyCode::Right => wizard.file_entry.move_right(),
            _ => {}
        },
        ConnectField::FileList => match key {
            KeyCode::Up => wizard.files.up(),
            KeyCode::Down => wizard.files.down(),
            KeyCode::Backspace | KeyCode::Delete => wizard.remove_selected_file(),
            KeyCode::Enter => try_continue(wizard),
            KeyCode::Esc => wizard.connect_field = ConnectField::FileEntry,
            _ => {}
        },
    }
}

fn next_connect_field(wizard: &WizardState) -> ConnectField {
    match wizard.connect_field {
        ConnectField::RepoUrl => ConnectField::FileEntry,
        ConnectField::FileEntry if !wizard.files.is_empty() => ConnectField::FileList,
        ConnectField::FileEntry | ConnectField::FileList => ConnectField::RepoUrl,
    }
}

fn try_continue(wizard: &mut WizardState) {
    if wizard.apply(WizardAction::Continue).is_none() {
        wizard.notice = Some("Add at least one evidence source to continue.".to_string());
    }
}
