//! Error types for inventory lookups and classification.

use thiserror::Error;

/// Failures raised while querying the cloud inventory.
///
/// A missing explicit route table association is *not* an error, it is
/// reported as [`crate::models::Lookup::NotFound`]. Everything in here aborts
/// the classification call it occurs in.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The VPC identifier was empty or blank.
    #[error("Invalid VPC id: '{0}'")]
    InvalidVpcId(String),

    /// The command could not be started at all.
    #[error("Failed to execute command '{cmd}': {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited non-zero.
    #[error("ERROR running '{cmd}' (code={code:?}): {stderr}")]
    Command {
        cmd: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The command did not finish inside the lookup timeout.
    #[error("Command timed out after {secs}s: {cmd}")]
    Timeout { cmd: String, secs: u64 },

    /// The command produced more output than allowed.
    #[error("Response too large: {len} bytes (limit {limit}) for command: {cmd}")]
    OutputTooLarge { cmd: String, len: usize, limit: usize },

    /// JSON from the collaborator did not match the expected shape.
    #[error("Error parsing {context}: path={path} error={message}")]
    Parse {
        context: String,
        path: String,
        message: String,
    },

    /// Every VPC has a main route table; not finding one breaks classification.
    #[error("No main route table found for VPC {0}")]
    MainRouteTableMissing(String),

    /// Snapshot cache could not be used.
    #[error("Cache error: {0}")]
    Cache(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    /// Build a [`InventoryError::Parse`] from a `serde_path_to_error` failure.
    pub fn parse(context: impl Into<String>, e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        InventoryError::Parse {
            context: context.into(),
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    }
}
