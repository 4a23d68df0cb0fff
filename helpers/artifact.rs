//! Compiled contract artifacts as emitted by Hardhat
//! (`artifacts/contracts/<Source>.sol/<Name>.json`).

use std::path::{Path, PathBuf};

use alloy::primitives::Bytes;
use log::debug;
use serde::Deserialize;

use crate::error::StackUpError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    #[serde(default)]
    pub source_name: Option<String>,
    /// Creation bytecode.
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StackUpError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| StackUpError::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })?;

        let artifact = Self::parse(&raw, path)?;
        debug!(
            "loaded artifact {} ({} bytes of creation code) from {}",
            artifact.contract_name,
            artifact.bytecode.len(),
            path.display()
        );
        Ok(artifact)
    }

    fn parse(raw: &[u8], path: &Path) -> Result<Self, StackUpError> {
        let artifact: ContractArtifact =
            serde_json::from_slice(raw).map_err(|source| StackUpError::ArtifactFormat {
                path: path.to_path_buf(),
                source,
            })?;

        // interfaces and abstract contracts compile to "0x"
        if artifact.bytecode.is_empty() {
            return Err(StackUpError::EmptyBytecode(PathBuf::from(path)));
        }
        Ok(artifact)
    }
}
