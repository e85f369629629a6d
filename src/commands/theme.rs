//! Implementation of the `formgate theme` subcommands.
//!
//! The theme lives in `prefs.json` under the `theme` key. When nothing is
//! stored the configured `default_theme` applies.

use crate::cli::ThemeSetArgs;
use crate::context::StateContext;
use crate::error::{FormgateError, Result};
use crate::events::{self, Event, EventAction};
use crate::ui::{FileStore, Theme, load_theme, save_theme};
use serde_json::json;

pub fn cmd_theme_get(ctx: &StateContext) -> Result<()> {
    let config = ctx.load_config()?;
    let store = FileStore::new(ctx.prefs_path());
    println!("{}", load_theme(&store, config.default_theme)?);
    Ok(())
}

pub fn cmd_theme_set(ctx: &StateContext, args: ThemeSetArgs) -> Result<()> {
    let theme = Theme::from_str(&args.theme).ok_or_else(|| {
        FormgateError::UserError(format!(
            "unknown theme '{}' (expected 'light' or 'dark')",
            args.theme
        ))
    })?;

    change_theme(ctx, |_| theme)
}

pub fn cmd_theme_toggle(ctx: &StateContext) -> Result<()> {
    change_theme(ctx, Theme::toggled)
}

/// Store the theme derived from the current one and log the change.
fn change_theme(ctx: &StateContext, next: impl FnOnce(Theme) -> Theme) -> Result<()> {
    let config = ctx.load_config()?;
    let mut store = FileStore::new(ctx.prefs_path());

    let current = load_theme(&store, config.default_theme)?;
    let theme = next(current);
    save_theme(&mut store, theme)?;

    events::record(
        ctx,
        config.log_events,
        Event::new(EventAction::ThemeChange).with_details(json!({
            "from": current,
            "to": theme,
        })),
    );

    println!("Theme: {} ({})", theme, theme.toggle_label());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::read_events;
    use crate::test_support::temp_state;
    use std::fs;

    fn stored_theme(ctx: &StateContext) -> Theme {
        load_theme(&FileStore::new(ctx.prefs_path()), Theme::Light).unwrap()
    }

    #[test]
    fn set_persists_theme() {
        let (_temp_dir, ctx) = temp_state();

        cmd_theme_set(
            &ctx,
            ThemeSetArgs {
                theme: "dark".to_string(),
            },
        )
        .unwrap();

        assert_eq!(stored_theme(&ctx), Theme::Dark);
    }

    #[test]
    fn set_rejects_unknown_theme() {
        let (_temp_dir, ctx) = temp_state();

        let err = cmd_theme_set(
            &ctx,
            ThemeSetArgs {
                theme: "sepia".to_string(),
            },
        )
        .unwrap_err();

        assert!(matches!(err, FormgateError::UserError(_)));
        assert!(!ctx.prefs_path().exists());
    }

    #[test]
    fn toggle_flips_and_persists() {
        let (_temp_dir, ctx) = temp_state();

        cmd_theme_toggle(&ctx).unwrap();
        assert_eq!(stored_theme(&ctx), Theme::Dark);

        cmd_theme_toggle(&ctx).unwrap();
        assert_eq!(stored_theme(&ctx), Theme::Light);
    }

    #[test]
    fn toggle_starts_from_configured_default() {
        let (_temp_dir, ctx) = temp_state();
        fs::create_dir_all(&ctx.state_dir).unwrap();
        fs::write(ctx.config_path(), "default_theme: dark\n").unwrap();

        cmd_theme_toggle(&ctx).unwrap();

        assert_eq!(stored_theme(&ctx), Theme::Light);
    }

    #[test]
    fn change_is_logged() {
        let (_temp_dir, ctx) = temp_state();

        cmd_theme_toggle(&ctx).unwrap();

        let events = read_events(&ctx).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, EventAction::ThemeChange);
        assert_eq!(events[0].details["from"], "light");
        assert_eq!(events[0].details["to"], "dark");
    }
}
