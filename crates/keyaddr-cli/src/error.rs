//! Errors surfaced to the user by the command-line tool.

use keyaddr_core::AddressError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing public key")]
    MissingPubkey,

    #[error("unknown network: '{0}'")]
    UnknownNetwork(String),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
