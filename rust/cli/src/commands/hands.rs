//! Hand reference table, strongest first.

use std::io::Write;

use cloudpoker_engine::hand::HandKind;

use crate::error::CliError;
use crate::formatters::format_hand_kind;

pub fn handle_hands_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, " {:<18} {:<24} {}", "Hand", "Score", "Requirement")?;
    for kind in HandKind::ALL {
        writeln!(out, "{}", format_hand_kind(kind))?;
    }
    writeln!(out, "* special hand")?;
    Ok(())
}
