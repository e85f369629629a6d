//! Headless page state.
//!
//! Every piece of mutable page state lives on [`UiSession`]; handlers take it
//! by `&mut self` and the dispatcher hands out a [`UiSnapshot`] afterwards.

use super::clipboard::Clipboard;
use super::counter::Counter;
use super::store::KeyValueStore;
use super::theme::{Theme, load_theme, save_theme};
use crate::config::Config;
use crate::error::{FormgateError, Result};
use crate::form::{FormSession, FormView, SubmitOutcome};
use crate::validate::{Field, ValidationResult};
use rand::RngCore;
use serde::Serialize;

pub const CLICK_MESSAGE: &str = "🎉 Button clicked!";
pub const HOVER_MESSAGE: &str = "✨ Hover ON (also works with keyboard focus)";
pub const MENU_TOAST: &str = "Here’s your toast 🍞";
pub const COPY_OK_TOAST: &str = "Copied to clipboard ✅";
pub const COPY_FAILED_TOAST: &str = "Copy failed ❌";

/// A transient notification. A new toast replaces the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub duration_ms: u64,
}

/// Collaborators a handler may reach outside the session.
pub struct Services<'a> {
    pub store: &'a mut dyn KeyValueStore,
    pub clipboard: &'a mut dyn Clipboard,
    pub rng: &'a mut dyn RngCore,
}

#[derive(Debug, Clone)]
pub struct UiSession {
    theme: Theme,
    click_message: &'static str,
    typed: Option<String>,
    hovering: bool,
    counter: Counter,
    liked: bool,
    like_message: &'static str,
    dropdown_open: bool,
    modal_open: bool,
    tabs: Vec<String>,
    active_tab: String,
    copy_text: String,
    focused: Option<Field>,
    toast: Option<Toast>,
    toast_duration_ms: u64,
    form: FormSession,
}

impl UiSession {
    /// Build a session from config, restoring the saved theme from `store`.
    pub fn new(config: &Config, store: &dyn KeyValueStore) -> Result<Self> {
        let theme = load_theme(store, config.default_theme)?;
        let active_tab = config.tabs.first().cloned().ok_or_else(|| {
            FormgateError::UserError(
                "config validation failed: tabs must list at least one tab id".to_string(),
            )
        })?;

        Ok(Self {
            theme,
            click_message: "",
            typed: None,
            hovering: false,
            counter: Counter::from_config(config),
            liked: false,
            like_message: "",
            dropdown_open: false,
            modal_open: false,
            tabs: config.tabs.clone(),
            active_tab,
            copy_text: String::new(),
            focused: None,
            toast: None,
            toast_duration_ms: config.toast_duration_ms,
            form: FormSession::new(),
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    // =========================================================================
    // Theme
    // =========================================================================

    pub fn toggle_theme(&mut self, store: &mut dyn KeyValueStore) -> Result<Theme> {
        let next = self.theme.toggled();
        save_theme(store, next)?;
        self.theme = next;
        Ok(next)
    }

    // =========================================================================
    // Event basics
    // =========================================================================

    pub fn click(&mut self) {
        self.click_message = CLICK_MESSAGE;
        self.show_toast("Button clicked");
    }

    pub fn typed(&mut self, value: &str) {
        self.typed = Some(value.to_string());
    }

    pub fn hover(&mut self, active: bool) {
        self.hovering = active;
    }

    // =========================================================================
    // Interactive elements
    // =========================================================================

    pub fn increase(&mut self, shift: bool) -> i64 {
        self.counter.increase(shift)
    }

    pub fn decrease(&mut self, shift: bool) -> i64 {
        self.counter.decrease(shift)
    }

    pub fn reset_counter(&mut self) -> i64 {
        self.show_toast("Counter reset");
        self.counter.reset()
    }

    pub fn randomize(&mut self, rng: &mut dyn RngCore) -> i64 {
        self.counter.randomize(rng)
    }

    pub fn toggle_like(&mut self) -> bool {
        self.liked = !self.liked;
        self.like_message = if self.liked {
            "Thanks for the like!"
        } else {
            "You unliked this."
        };
        self.liked
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Escape closes the dropdown and, when open, the modal.
    pub fn escape(&mut self) {
        self.close_dropdown();
        self.modal_open = false;
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn set_copy_text(&mut self, value: &str) {
        self.copy_text = value.to_string();
    }

    /// Copy the copy-box text. Success and failure both end in a toast.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        match clipboard.write_text(&self.copy_text) {
            Ok(()) => {
                self.show_toast(COPY_OK_TOAST);
                true
            }
            Err(_) => {
                self.show_toast(COPY_FAILED_TOAST);
                false
            }
        }
    }

    pub fn select_tab(&mut self, tab: &str) -> Result<()> {
        if !self.tabs.iter().any(|t| t == tab) {
            return Err(FormgateError::UserError(format!(
                "unknown tab '{}' (known tabs: {})",
                tab,
                self.tabs.join(", ")
            )));
        }
        self.active_tab = tab.to_string();
        Ok(())
    }

    // =========================================================================
    // Form
    // =========================================================================

    pub fn input(&mut self, field: Field, value: &str) -> Result<ValidationResult> {
        let result = self.form.input(field, value).ok_or_else(|| {
            FormgateError::UserError(
                "terms is a checkbox; use the `terms` event instead of `input`".to_string(),
            )
        })?;
        self.focused = Some(field);
        Ok(result)
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.form.set_terms(accepted);
    }

    pub fn toggle_password_visibility(&mut self) -> bool {
        self.form.toggle_password_visibility()
    }

    /// Enter moves focus name -> email -> phone -> password.
    pub fn enter(&mut self, field: Field) -> Option<Field> {
        let next = match field {
            Field::Name => Some(Field::Email),
            Field::Email => Some(Field::Phone),
            Field::Phone => Some(Field::Password),
            _ => None,
        };
        if next.is_some() {
            self.focused = next;
        }
        next
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit();
        self.show_toast(outcome.toast_message());
        outcome
    }

    // =========================================================================
    // Output
    // =========================================================================

    pub fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast {
            message: message.to_string(),
            duration_ms: self.toast_duration_ms,
        });
    }

    /// Drop the current toast (its timer ran out).
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    pub fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            theme: self.theme,
            theme_toggle_label: self.theme.toggle_label(),
            theme_pressed: self.theme.pressed(),
            click_message: self.click_message,
            typed_message: self
                .typed
                .as_ref()
                .map(|v| format!("You typed: \"{}\"", v))
                .unwrap_or_default(),
            hover_message: if self.hovering { HOVER_MESSAGE } else { "" },
            counter: self.counter.value,
            liked: self.liked,
            like_label: if self.liked { "♥ Liked" } else { "♡ Like" },
            like_message: self.like_message,
            dropdown_open: self.dropdown_open,
            modal_open: self.modal_open,
            active_tab: self.active_tab.clone(),
            focused: self.focused,
            toast: self.toast.clone(),
            password_toggle_label: self.form.visibility_label(),
            form: self.form.view(),
        }
    }
}

/// Derived, serializable state of the page after one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiSnapshot {
    pub theme: Theme,
    pub theme_toggle_label: &'static str,
    pub theme_pressed: bool,
    pub click_message: &'static str,
    pub typed_message: String,
    pub hover_message: &'static str,
    pub counter: i64,
    pub liked: bool,
    pub like_label: &'static str,
    pub like_message: &'static str,
    pub dropdown_open: bool,
    pub modal_open: bool,
    pub active_tab: String,
    pub focused: Option<Field>,
    pub toast: Option<Toast>,
    pub password_toggle_label: &'static str,
    pub form: FormView,
}
