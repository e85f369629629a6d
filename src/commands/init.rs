//! Implementation of the `formgate init` command.
//!
//! Creates the state directory, writes a default `config.yaml` and prepares
//! the `events/` directory. Running it again leaves an existing config alone
//! unless `--force` is given.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::context::StateContext;
use crate::error::{FormgateError, Result};
use crate::events::{self, Event, EventAction};
use crate::fs::atomic_write_file;
use serde_json::json;
use std::fs;
use std::path::Path;

const CONFIG_HEADER: &str = "\
# formgate configuration
#
# Every key is optional; missing keys use the defaults shown here.
# Unknown keys are ignored.

";

pub fn cmd_init(ctx: &StateContext, args: InitArgs) -> Result<()> {
    create_dir(&ctx.state_dir)?;
    create_dir(&ctx.events_dir())?;

    let config_path = ctx.config_path();
    let write_config = args.force || !config_path.exists();
    if write_config {
        atomic_write_file(&config_path, &config_template()?)?;
    }

    // An existing config must still be valid.
    let config = ctx.load_config()?;

    events::record(
        ctx,
        config.log_events,
        Event::new(EventAction::Init).with_details(json!({ "config_written": write_config })),
    );

    println!("Initialized formgate state.");
    println!();
    println!("State directory: {}", ctx.state_dir.display());
    if write_config {
        println!("Wrote:           {}", config_path.display());
    } else {
        println!("Kept:            {}", config_path.display());
    }

    Ok(())
}

fn config_template() -> Result<String> {
    Ok(format!("{}{}", CONFIG_HEADER, Config::default().to_yaml()?))
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        FormgateError::UserError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}
