//! CLI argument parsing for formgate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Formgate: live form validation engine with a headless UI session.
///
/// Validates sign-up form fields (name, email, phone, password, confirm,
/// terms), scores password strength, decides whether submission is allowed,
/// and replays recorded UI event scripts against a session model.
#[derive(Parser, Debug)]
#[command(name = "formgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// State directory (default: .formgate in the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for formgate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the state directory with a default config.yaml.
    Init(InitArgs),

    /// Validate a single field.
    ///
    /// Exits with code 2 when the value is invalid.
    Check(CheckArgs),

    /// Score a password against the five strength criteria.
    Strength(StrengthArgs),

    /// Report whether the form as given may be submitted.
    ///
    /// Exits with code 2 when submission is blocked.
    Gate(GateArgs),

    /// Run the submit flow on a form.
    ///
    /// Validates every field, logs the attempt, and exits with code 2 when
    /// the submission is rejected.
    Submit(SubmitArgs),

    /// Replay a UI event script against a fresh session.
    ///
    /// Prints one JSON snapshot per event (NDJSON).
    Replay(ReplayArgs),

    /// Read or change the stored theme.
    Theme(ThemeCommand),

    /// Show recent entries from the event log.
    Log(LogArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config.yaml with defaults.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Field to validate (name, email, phone, password, confirm, terms).
    pub field: String,

    /// Value to validate. Ignored for `terms`.
    #[arg(default_value = "")]
    pub value: String,

    /// Password to compare against when checking `confirm`.
    #[arg(long)]
    pub password: Option<String>,

    /// Mark the terms as accepted when checking `terms`.
    #[arg(long)]
    pub accepted: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `strength` command.
#[derive(Parser, Debug)]
pub struct StrengthArgs {
    /// Password to score.
    #[arg(default_value = "")]
    pub password: String,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Form values shared by `gate` and `submit`.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Read form values from a YAML or JSON file; flags override it.
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub confirm: Option<String>,

    /// The terms checkbox is ticked.
    #[arg(long)]
    pub terms: bool,
}

/// Arguments for the `gate` command.
#[derive(Parser, Debug)]
pub struct GateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `submit` command.
#[derive(Parser, Debug)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Print the outcome as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `replay` command.
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Event script: NDJSON, or a YAML list for .yaml/.yml files.
    pub script: PathBuf,

    /// Only print the snapshot after the last event.
    #[arg(long)]
    pub final_only: bool,

    /// Keep theme and clipboard changes in memory instead of the state directory.
    #[arg(long)]
    pub no_persist: bool,

    /// Seed for the randomize button, for reproducible replays.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Theme subcommands.
#[derive(Parser, Debug)]
pub struct ThemeCommand {
    #[command(subcommand)]
    pub action: ThemeAction,
}

/// Available theme actions.
#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Print the current theme.
    Get,

    /// Store a theme (light or dark).
    Set(ThemeSetArgs),

    /// Switch between light and dark.
    Toggle,
}

/// Arguments for the `theme set` command.
#[derive(Parser, Debug)]
pub struct ThemeSetArgs {
    /// Theme to store: light or dark.
    pub theme: String,
}

/// Arguments for the `log` command.
#[derive(Parser, Debug)]
pub struct LogArgs {
    /// Show the last N events (0 shows all).
    #[arg(long, default_value_t = 20)]
    pub tail: usize,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init() {
        let cli = Cli::try_parse_from(["formgate", "init"]).unwrap();
        if let Command::Init(args) = cli.command {
            assert!(!args.force);
        } else {
            panic!("Expected Init command");
        }
        assert!(cli.state_dir.is_none());
    }

    #[test]
    fn parse_global_state_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["formgate", "init", "--state-dir", "/tmp/fg"]).unwrap();
        assert_eq!(cli.state_dir, Some(PathBuf::from("/tmp/fg")));
    }

    #[test]
    fn parse_check_with_value() {
        let cli = Cli::try_parse_from(["formgate", "check", "email", "jane@example.com"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.field, "email");
            assert_eq!(args.value, "jane@example.com");
            assert!(!args.json);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_confirm_with_password() {
        let cli = Cli::try_parse_from([
            "formgate",
            "check",
            "confirm",
            "Abc123!!",
            "--password",
            "Abc123!!",
            "--json",
        ])
        .unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.password.as_deref(), Some("Abc123!!"));
            assert!(args.json);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_terms_without_value() {
        let cli = Cli::try_parse_from(["formgate", "check", "terms", "--accepted"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.value, "");
            assert!(args.accepted);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_gate_flags() {
        let cli = Cli::try_parse_from([
            "formgate",
            "gate",
            "--name",
            "Jane",
            "--phone",
            "1234567",
            "--terms",
        ])
        .unwrap();
        if let Command::Gate(args) = cli.command {
            assert_eq!(args.form.name.as_deref(), Some("Jane"));
            assert_eq!(args.form.phone.as_deref(), Some("1234567"));
            assert!(args.form.email.is_none());
            assert!(args.form.terms);
        } else {
            panic!("Expected Gate command");
        }
    }

    #[test]
    fn parse_submit_from_file() {
        let cli = Cli::try_parse_from(["formgate", "submit", "--from", "form.yaml"]).unwrap();
        if let Command::Submit(args) = cli.command {
            assert_eq!(args.form.from, Some(PathBuf::from("form.yaml")));
        } else {
            panic!("Expected Submit command");
        }
    }

    #[test]
    fn parse_replay() {
        let cli = Cli::try_parse_from([
            "formgate",
            "replay",
            "events.ndjson",
            "--final-only",
            "--seed",
            "9",
        ])
        .unwrap();
        if let Command::Replay(args) = cli.command {
            assert_eq!(args.script, PathBuf::from("events.ndjson"));
            assert!(args.final_only);
            assert!(!args.no_persist);
            assert_eq!(args.seed, Some(9));
        } else {
            panic!("Expected Replay command");
        }
    }

    #[test]
    fn parse_theme_set() {
        let cli = Cli::try_parse_from(["formgate", "theme", "set", "dark"]).unwrap();
        if let Command::Theme(cmd) = cli.command {
            if let ThemeAction::Set(args) = cmd.action {
                assert_eq!(args.theme, "dark");
            } else {
                panic!("Expected Set action");
            }
        } else {
            panic!("Expected Theme command");
        }
    }

    #[test]
    fn parse_theme_toggle() {
        let cli = Cli::try_parse_from(["formgate", "theme", "toggle"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Theme(ThemeCommand {
                action: ThemeAction::Toggle
            })
        ));
    }

    #[test]
    fn parse_log_default_tail() {
        let cli = Cli::try_parse_from(["formgate", "log"]).unwrap();
        if let Command::Log(args) = cli.command {
            assert_eq!(args.tail, 20);
        } else {
            panic!("Expected Log command");
        }
    }

    #[test]
    fn check_requires_field() {
        assert!(Cli::try_parse_from(["formgate", "check"]).is_err());
    }

    #[test]
    fn unknown_command_fails() {
        assert!(Cli::try_parse_from(["formgate", "explode"]).is_err());
    }
}
