use std::path::PathBuf;

use alloy::{primitives::B256, signers::local::LocalSignerError};
use thiserror::Error;

/// Failures raised at the contract boundary.
#[derive(Debug, Error)]
pub enum StackUpError {
    #[error("Private key error: {0}")]
    InvalidPrivateKey(String),

    #[error("Failed to read contract artifact {path}: {source}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed contract artifact {path}: {source}")]
    ArtifactFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Contract artifact {0} has no deployable bytecode")]
    EmptyBytecode(PathBuf),

    #[error("Failed to sign or send transaction: {0}")]
    TransportFailure(#[from] alloy::transports::TransportError),

    #[error("Contract call failed: {0}")]
    ContractCall(#[from] alloy::contract::Error),

    #[error("Pending transaction failed: {0}")]
    PendingTxFailure(String),

    #[error("Transaction {0} reverted")]
    Reverted(B256),

    #[error("Deployment transaction {0} produced no contract address")]
    MissingContractAddress(B256),
}

// `.parse::<PrivateKeySigner>()?`
impl From<LocalSignerError> for StackUpError {
    fn from(e: LocalSignerError) -> Self {
        StackUpError::InvalidPrivateKey(e.to_string())
    }
}

// `pending.get_receipt().await?`
impl From<alloy::providers::PendingTransactionError> for StackUpError {
    fn from(e: alloy::providers::PendingTransactionError) -> Self {
        StackUpError::PendingTxFailure(e.to_string())
    }
}

/// A boundary failure attributed to the bootstrap step it interrupted.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("deployment failed: {0}")]
    Deployment(#[source] StackUpError),

    #[error("reading admin address failed: {0}")]
    AdminRead(#[source] StackUpError),

    #[error("createQuest #{index} ({title:?}) failed: {source}")]
    CreateQuest {
        index: usize,
        title: String,
        #[source]
        source: StackUpError,
    },
}
