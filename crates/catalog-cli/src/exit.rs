//! Process exit codes.

/// Every usage passed, or a listing command succeeded.
pub const SUCCESS: i32 = 0;
/// At least one usage failed validation.
pub const INVALID: i32 = 1;
/// Catalog or input could not be loaded.
pub const ERROR: i32 = 2;

/// Exit code for a command outcome; `Ok(false)` means some usage was invalid.
pub fn code_for(outcome: &anyhow::Result<bool>) -> i32 {
    match outcome {
        Ok(true) => SUCCESS,
        Ok(false) => INVALID,
        Err(_) => ERROR,
    }
}
