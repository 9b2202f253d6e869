//! Process-wide constants for the binary.

/// Default filename of the preference store under the data directory.
pub const STORE_FILE_NAME: &str = "momentum.json";

/// Exit statuses the binary uses on purpose.
///
/// 0 is success and 1 is what anyhow-propagated errors become; 2 is
/// left to clap for usage errors. Our own statuses start at 3.
pub mod exit_codes {
    /// The tracker has nothing for the command to act on.
    pub const NOTHING_TO_DO: i32 = 3;

    /// Unusable user input, like a blank name.
    pub const INVALID_INPUT: i32 = 4;
}
