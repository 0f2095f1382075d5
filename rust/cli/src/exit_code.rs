//! Process exit codes returned by [`run`](crate::run).

use crate::error::CliError;

pub const SUCCESS: i32 = 0;

/// Any failed command, including bad arguments.
pub const ERROR: i32 = 2;

/// Input ended before a session could finish.
pub const INTERRUPTED: i32 = 130;

pub fn for_error(error: &CliError) -> i32 {
    match error {
        CliError::Interrupted(_) => INTERRUPTED,
        _ => ERROR,
    }
}
