/// Errors produced by the change-proposal engine.
///
/// These arise only from UI-state desync (approving a version that does not
/// exist, proposing against a name the session never saw); the facade layer
/// treats them as logged no-ops rather than surfacing failures to the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("dataset {name} has no version at index {index}")]
    UnknownVersion { name: String, index: usize },

    #[error("version index 0 addresses the baseline, which is not a proposal")]
    NotAProposal,
}
