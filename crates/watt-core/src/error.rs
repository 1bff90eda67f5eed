/// Errors surfaced by billing operations.
///
/// Every variant is recoverable at the session boundary; none is fatal to
/// the process, and none is folded into a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    /// Malformed submission input: negative unit count or empty consumer id.
    /// Nothing is committed when this is raised.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The blocking wait for a billing worker failed. The worker is not
    /// cancelled; if its commit still succeeds it lands in the ledger.
    #[error("wait for billing worker interrupted: {0}")]
    Interrupted(String),

    /// The export sink could not be written. Lines appended before the
    /// failure point remain in the file.
    #[error("export failed: {0}")]
    ExportIo(#[from] std::io::Error),
}
