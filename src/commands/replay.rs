//! Implementation of the `formgate replay` command.
//!
//! Feeds an event script into a fresh [`UiSession`] and prints the snapshot
//! after every event as one JSON line. Theme changes go to `prefs.json` and
//! copied text to `clipboard.txt`, unless `--no-persist` keeps both in memory.

use crate::cli::ReplayArgs;
use crate::config::Config;
use crate::context::StateContext;
use crate::error::{FormgateError, Result};
use crate::events::{self, Event, EventAction};
use crate::ui::{
    FileClipboard, FileStore, KeyValueStore, MemoryClipboard, MemoryStore, Services, THEME_KEY,
    UiEvent, UiSession, UiSnapshot, dispatch, parse_script,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use std::fs;

pub fn cmd_replay(ctx: &StateContext, args: ReplayArgs) -> Result<()> {
    let config = ctx.load_config()?;

    let content = fs::read_to_string(&args.script).map_err(|e| {
        FormgateError::UserError(format!(
            "failed to read event script '{}': {}",
            args.script.display(),
            e
        ))
    })?;
    let script = parse_script(&args.script, &content)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut file_store = FileStore::new(ctx.prefs_path());
    let snapshots = if args.no_persist {
        let mut store = MemoryStore::new();
        if let Some(theme) = file_store.get(THEME_KEY)? {
            store.set(THEME_KEY, &theme)?;
        }
        let mut clipboard = MemoryClipboard::new();
        run_script(
            &config,
            &script,
            &mut Services {
                store: &mut store,
                clipboard: &mut clipboard,
                rng: &mut rng,
            },
        )?
    } else {
        let mut clipboard = FileClipboard::new(ctx.clipboard_path());
        run_script(
            &config,
            &script,
            &mut Services {
                store: &mut file_store,
                clipboard: &mut clipboard,
                rng: &mut rng,
            },
        )?
    };

    events::record(
        ctx,
        config.log_events,
        Event::new(EventAction::Replay).with_details(json!({
            "events": script.len(),
            "persisted": !args.no_persist,
        })),
    );

    let shown = if args.final_only {
        snapshots.last().into_iter().collect::<Vec<_>>()
    } else {
        snapshots.iter().collect()
    };
    for snapshot in shown {
        let line = serde_json::to_string(snapshot).map_err(|e| {
            FormgateError::UserError(format!("failed to serialize snapshot: {}", e))
        })?;
        println!("{}", line);
    }

    Ok(())
}

/// Dispatch every event in order, collecting the snapshot after each one.
///
/// The first failing event stops the replay; its position is in the error.
fn run_script(
    config: &Config,
    script: &[UiEvent],
    services: &mut Services<'_>,
) -> Result<Vec<UiSnapshot>> {
    let mut session = UiSession::new(config, &*services.store)?;
    let mut snapshots = Vec::with_capacity(script.len());

    for (index, event) in script.iter().enumerate() {
        let snapshot = dispatch(&mut session, event, services).map_err(|e| {
            FormgateError::UserError(format!(
                "event {} ({}) failed: {}",
                index + 1,
                event.name(),
                e
            ))
        })?;
        snapshots.push(snapshot);
    }

    Ok(snapshots)
}
