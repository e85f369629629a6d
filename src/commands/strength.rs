//! Implementation of the `formgate strength` command.

use super::print_json;
use crate::cli::StrengthArgs;
use crate::error::Result;
use crate::validate::{PasswordStrength, compute_strength};

/// Print the strength meter for a password. Never logged.
pub fn cmd_strength(args: StrengthArgs) -> Result<()> {
    let strength = compute_strength(&args.password);

    if args.json {
        print_json(&strength)
    } else {
        print!("{}", render(&strength));
        Ok(())
    }
}

fn render(strength: &PasswordStrength) -> String {
    let mut out = format!(
        "{} ({}/5, {}%)\n",
        strength.label(),
        strength.score,
        strength.percent
    );
    for (label, met) in strength.criteria.labeled() {
        let mark = if met { "x" } else { " " };
        out.push_str(&format!("  [{}] {}\n", mark, label));
    }
    out
}
