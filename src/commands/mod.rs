//! Command implementations for formgate.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every handler receives the resolved [`StateContext`], so
//! tests can point a command at a temporary state directory.

mod check;
mod gate;
mod init;
mod input;
mod log;
mod replay;
mod strength;
mod submit;
mod theme;

use crate::cli::{Cli, Command, ThemeAction, ThemeCommand};
use crate::context::StateContext;
use crate::error::{FormgateError, Result};
use serde::Serialize;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The state directory
/// is resolved once here and handed to the handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = StateContext::resolve(cli.state_dir.as_deref())?;

    match cli.command {
        Command::Init(args) => init::cmd_init(&ctx, args),
        Command::Check(args) => check::cmd_check(&ctx, args),
        Command::Strength(args) => strength::cmd_strength(args),
        Command::Gate(args) => gate::cmd_gate(&ctx, args),
        Command::Submit(args) => submit::cmd_submit(&ctx, args),
        Command::Replay(args) => replay::cmd_replay(&ctx, args),
        Command::Theme(theme_cmd) => dispatch_theme(&ctx, theme_cmd),
        Command::Log(args) => log::cmd_log(&ctx, args),
    }
}

/// Dispatch theme subcommands.
fn dispatch_theme(ctx: &StateContext, theme_cmd: ThemeCommand) -> Result<()> {
    match theme_cmd.action {
        ThemeAction::Get => theme::cmd_theme_get(ctx),
        ThemeAction::Set(args) => theme::cmd_theme_set(ctx, args),
        ThemeAction::Toggle => theme::cmd_theme_toggle(ctx),
    }
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| FormgateError::UserError(format!("failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}
