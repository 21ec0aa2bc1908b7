//! Error taxonomy for host interactions.
//!
//! Nothing here is shown to the visitor. Callers either log and continue or
//! skip the affected behavior, so each variant carries enough context for a
//! useful console line.

/// Failure talking to the page, its storage, or its configuration block.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The origin's storage object could not be obtained (disabled by policy).
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    /// Reading a key threw.
    #[error("failed to read storage key {key}: {reason}")]
    StorageRead { key: String, reason: String },
    /// Writing a key threw (quota, private mode).
    #[error("failed to write storage key {key}: {reason}")]
    StorageWrite { key: String, reason: String },
    /// Adding or removing a class marker failed.
    #[error("failed to update class {class}: {reason}")]
    ClassList { class: String, reason: String },
    /// Registering an event listener threw.
    #[error("failed to listen for {event}: {reason}")]
    Listener { event: String, reason: String },
    /// An element required to mount was not found.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// The inline configuration block was not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}
