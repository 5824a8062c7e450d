use thiserror::Error;

/// The core's few failure conditions. Lookups never fail (a miss interns),
/// and a mismatch during enactment is normal control flow, so what remains
/// are programming-invariant and configuration violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The anticipation seed guarantees at least one entry whenever a
    /// primitive-rooted experiment is registered, so an empty set means the
    /// agent was built without any.
    #[error("selection requires at least one anticipation; no primitive-rooted experiment is registered")]
    NoAnticipations,

    /// An experiment in the configuration names a primitive that was never
    /// declared.
    #[error("experiment intent `{label}` does not name a configured primitive")]
    UnknownIntent { label: String },
}
