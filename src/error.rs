use crate::types::DataSource;
use thiserror::Error;

/// Why a report command produced no report.
///
/// These map one-to-one onto the user-facing error strings the command
/// layer prints; nothing here is process-fatal.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to fetch {0} data from the Hypixel API")]
    SourceUnavailable(DataSource),

    #[error("the recipe catalog is still loading, try again in a bit")]
    CatalogNotReady,

    #[error("no flip candidates could be computed from the current data")]
    NoCandidates,
}
