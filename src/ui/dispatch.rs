//! Event dispatch table.
//!
//! Each [`UiEvent`] maps to one handler on [`UiSession`]; after the handler
//! runs the dispatcher returns a fresh [`UiSnapshot`]. Events arrive one at a
//! time, in order.

use super::session::{MENU_TOAST, Services, UiSession, UiSnapshot};
use crate::error::{FormgateError, Result};
use crate::validate::Field;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Entries of the dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    Toast,
    OpenModal,
    Copy,
}

/// Something the user did on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    ToggleTheme,
    Click,
    Type {
        value: String,
    },
    Hover {
        active: bool,
    },
    Increase {
        #[serde(default)]
        shift: bool,
    },
    Decrease {
        #[serde(default)]
        shift: bool,
    },
    ResetCounter,
    Randomize,
    Like,
    ToggleDropdown,
    Menu {
        action: MenuAction,
    },
    OutsideClick,
    Escape,
    CopyText {
        value: String,
    },
    Copy,
    SelectTab {
        tab: String,
    },
    OpenModal,
    CloseModal,
    BackdropClick,
    DismissToast,
    Input {
        field: Field,
        value: String,
    },
    Terms {
        accepted: bool,
    },
    TogglePassword,
    Enter {
        field: Field,
    },
    Submit,
}

impl UiEvent {
    /// The `event` tag, for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::ToggleTheme => "toggle_theme",
            UiEvent::Click => "click",
            UiEvent::Type { .. } => "type",
            UiEvent::Hover { .. } => "hover",
            UiEvent::Increase { .. } => "increase",
            UiEvent::Decrease { .. } => "decrease",
            UiEvent::ResetCounter => "reset_counter",
            UiEvent::Randomize => "randomize",
            UiEvent::Like => "like",
            UiEvent::ToggleDropdown => "toggle_dropdown",
            UiEvent::Menu { .. } => "menu",
            UiEvent::OutsideClick => "outside_click",
            UiEvent::Escape => "escape",
            UiEvent::CopyText { .. } => "copy_text",
            UiEvent::Copy => "copy",
            UiEvent::SelectTab { .. } => "select_tab",
            UiEvent::OpenModal => "open_modal",
            UiEvent::CloseModal => "close_modal",
            UiEvent::BackdropClick => "backdrop_click",
            UiEvent::DismissToast => "dismiss_toast",
            UiEvent::Input { .. } => "input",
            UiEvent::Terms { .. } => "terms",
            UiEvent::TogglePassword => "toggle_password",
            UiEvent::Enter { .. } => "enter",
            UiEvent::Submit => "submit",
        }
    }

    /// A click that lands outside the dropdown button and its menu.
    ///
    /// Such clicks close the dropdown in addition to their own effect.
    pub fn clicks_outside_dropdown(&self) -> bool {
        matches!(
            self,
            UiEvent::ToggleTheme
                | UiEvent::Click
                | UiEvent::Increase { .. }
                | UiEvent::Decrease { .. }
                | UiEvent::ResetCounter
                | UiEvent::Randomize
                | UiEvent::Like
                | UiEvent::OutsideClick
                | UiEvent::Copy
                | UiEvent::SelectTab { .. }
                | UiEvent::OpenModal
                | UiEvent::CloseModal
                | UiEvent::BackdropClick
                | UiEvent::Terms { .. }
                | UiEvent::TogglePassword
                | UiEvent::Submit
        )
    }
}

/// Run the handler for `event` and return the resulting snapshot.
pub fn dispatch(
    session: &mut UiSession,
    event: &UiEvent,
    services: &mut Services<'_>,
) -> Result<UiSnapshot> {
    match event {
        UiEvent::ToggleTheme => {
            session.toggle_theme(&mut *services.store)?;
        }
        UiEvent::Click => session.click(),
        UiEvent::Type { value } => session.typed(value),
        UiEvent::Hover { active } => session.hover(*active),
        UiEvent::Increase { shift } => {
            session.increase(*shift);
        }
        UiEvent::Decrease { shift } => {
            session.decrease(*shift);
        }
        UiEvent::ResetCounter => {
            session.reset_counter();
        }
        UiEvent::Randomize => {
            session.randomize(&mut *services.rng);
        }
        UiEvent::Like => {
            session.toggle_like();
        }
        UiEvent::ToggleDropdown => session.toggle_dropdown(),
        UiEvent::Menu { action } => {
            match action {
                MenuAction::Toast => session.show_toast(MENU_TOAST),
                MenuAction::OpenModal => session.open_modal(),
                MenuAction::Copy => {
                    session.copy(&mut *services.clipboard);
                }
            }
            session.close_dropdown();
        }
        UiEvent::OutsideClick => {}
        UiEvent::Escape => session.escape(),
        UiEvent::CopyText { value } => session.set_copy_text(value),
        UiEvent::Copy => {
            session.copy(&mut *services.clipboard);
        }
        UiEvent::SelectTab { tab } => session.select_tab(tab)?,
        UiEvent::OpenModal => session.open_modal(),
        UiEvent::CloseModal | UiEvent::BackdropClick => session.close_modal(),
        UiEvent::DismissToast => session.dismiss_toast(),
        UiEvent::Input { field, value } => {
            session.input(*field, value)?;
        }
        UiEvent::Terms { accepted } => session.set_terms(*accepted),
        UiEvent::TogglePassword => {
            session.toggle_password_visibility();
        }
        UiEvent::Enter { field } => {
            session.enter(*field);
        }
        UiEvent::Submit => {
            session.submit();
        }
    }

    if event.clicks_outside_dropdown() {
        session.close_dropdown();
    }

    Ok(session.snapshot())
}

/// Parse an event script.
///
/// `.yaml`/`.yml` files hold a YAML sequence of events. Anything else is
/// NDJSON: one JSON event per line, blank lines and `#` comments skipped.
pub fn parse_script(path: &Path, content: &str) -> Result<Vec<UiEvent>> {
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    if is_yaml {
        return serde_yaml::from_str(content).map_err(|e| {
            FormgateError::UserError(format!(
                "failed to parse event script '{}': {}",
                path.display(),
                e
            ))
        });
    }

    let mut events = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event = serde_json::from_str(trimmed).map_err(|e| {
            FormgateError::UserError(format!(
                "failed to parse event on line {} of '{}': {}",
                index + 1,
                path.display(),
                e
            ))
        })?;
        events.push(event);
    }
    Ok(events)
}
