//! Common helper functions for the StackUp deployment script and its tests

pub mod artifact;
pub mod bootstrap;
pub mod clock;
pub mod config;
pub mod contract;
pub mod error;
pub mod quest;

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use log::info;

pub use artifact::ContractArtifact;
pub use bootstrap::{exit_code, run_bootstrap, BootstrapReport, Stage};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use contract::{EvmStackUpDeployer, QuestReceipt, StackUpContract, StackUpDeployer};
pub use error::{BootstrapError, StackUpError};
pub use quest::{QuestParams, QuestSeed, QuestWindow, QUEST_WINDOW_SECS, STACKUP_QUESTS};

/// Signer address and a deployer connected through it
pub struct ClientSetup {
    pub deployer_address: Address,
    pub deployer: EvmStackUpDeployer,
}

/// Connect to the configured network and load the contract artifact
pub async fn setup_client(config: &AppConfig) -> Result<ClientSetup, StackUpError> {
    let network = &config.network_config;

    let signer: PrivateKeySigner = network.private_key.parse()?;
    let deployer_address = signer.address();
    let wallet = EthereumWallet::new(signer);

    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(&network.rpc_url)
        .await?
        .erased();

    let chain_id = provider.get_chain_id().await?;
    let latest_block = provider.get_block_number().await?;
    info!("Connected to chain {chain_id} at block {latest_block}");

    let artifact = ContractArtifact::load(&config.deploy_config.artifact_path)?;
    let deployer = EvmStackUpDeployer::new(provider, artifact, network.confirmations);

    Ok(ClientSetup {
        deployer_address,
        deployer,
    })
}
