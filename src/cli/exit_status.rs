use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, every configured input was processed
/// - `Skipped` (1): Command completed but at least one input file was missing
/// - `Error` (2): Command failed due to internal error (config error, IO error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, every configured input was processed.
    Success,
    /// Command completed but at least one input file was missing.
    Skipped,
    /// Command failed due to internal error (config error, IO error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Skipped => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
