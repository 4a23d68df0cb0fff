//! The StackUp contract as seen from the deploying side: a deployer that
//! creates an instance, and the instance's `admin()` / `createQuest(..)` calls.

use alloy::{
    network::{ReceiptResponse, TransactionBuilder},
    primitives::{Address, B256, U256},
    providers::{DynProvider, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
    sol,
};
use async_trait::async_trait;
use log::{debug, info};

use crate::{artifact::ContractArtifact, error::StackUpError, quest::QuestParams};

sol! {
    #[sol(rpc)]
    interface IStackUp {
        function admin() external view returns (address);

        function createQuest(
            string title_,
            uint8 reward_,
            uint256 numberOfRewards_,
            uint256 startTime_,
            uint256 endTime_
        ) external;
    }
}

/// A confirmed `createQuest` transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestReceipt {
    pub title: String,
    pub tx_hash: B256,
    pub block_number: Option<u64>,
}

#[async_trait]
pub trait StackUpDeployer: Send + Sync {
    type Contract: StackUpContract;

    /// Deploys a fresh instance and waits for the creation transaction to confirm.
    async fn deploy(&self) -> Result<Self::Contract, StackUpError>;
}

#[async_trait]
pub trait StackUpContract: Send + Sync {
    fn address(&self) -> Address;

    fn deploy_tx(&self) -> B256;

    async fn admin(&self) -> Result<Address, StackUpError>;

    /// Sends `createQuest` and waits for its receipt.
    async fn create_quest(&self, quest: &QuestParams) -> Result<QuestReceipt, StackUpError>;
}

fn ensure_success(receipt: &TransactionReceipt) -> Result<(), StackUpError> {
    if receipt.status() {
        Ok(())
    } else {
        Err(StackUpError::Reverted(receipt.transaction_hash))
    }
}

fn deployed_address(receipt: &TransactionReceipt) -> Result<Address, StackUpError> {
    ensure_success(receipt)?;
    receipt
        .contract_address
        .ok_or(StackUpError::MissingContractAddress(receipt.transaction_hash))
}

pub struct EvmStackUpDeployer {
    provider: DynProvider,
    artifact: ContractArtifact,
    confirmations: u64,
}

impl EvmStackUpDeployer {
    pub fn new(provider: DynProvider, artifact: ContractArtifact, confirmations: u64) -> Self {
        Self {
            provider,
            artifact,
            confirmations: confirmations.max(1),
        }
    }
}

#[async_trait]
impl StackUpDeployer for EvmStackUpDeployer {
    type Contract = EvmStackUp;

    async fn deploy(&self) -> Result<EvmStackUp, StackUpError> {
        let tx = TransactionRequest::default().with_deploy_code(self.artifact.bytecode.clone());

        let pending = self.provider.send_transaction(tx).await?;
        debug!(
            "{} creation tx {:?} sent, awaiting {} confirmation(s)",
            self.artifact.contract_name,
            pending.tx_hash(),
            self.confirmations
        );

        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await?;
        let address = deployed_address(&receipt)?;

        info!(
            "{} deployment confirmed in tx {:?} (block {:?})",
            self.artifact.contract_name, receipt.transaction_hash, receipt.block_number
        );

        Ok(EvmStackUp {
            contract: IStackUp::IStackUpInstance::new(address, self.provider.clone()),
            deploy_tx: receipt.transaction_hash,
            confirmations: self.confirmations,
        })
    }
}

pub struct EvmStackUp {
    contract: IStackUp::IStackUpInstance<DynProvider>,
    deploy_tx: B256,
    confirmations: u64,
}

#[async_trait]
impl StackUpContract for EvmStackUp {
    fn address(&self) -> Address {
        *self.contract.address()
    }

    fn deploy_tx(&self) -> B256 {
        self.deploy_tx
    }

    async fn admin(&self) -> Result<Address, StackUpError> {
        let admin = self.contract.admin().call().await?;
        Ok(admin)
    }

    async fn create_quest(&self, quest: &QuestParams) -> Result<QuestReceipt, StackUpError> {
        let tx = self.contract.createQuest(
            quest.title.clone(),
            quest.tier,
            U256::from(quest.reward_count),
            U256::from(quest.start_time),
            U256::from(quest.end_time),
        );

        let receipt = tx
            .send()
            .await?
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await?;
        ensure_success(&receipt)?;

        info!(
            "createQuest({:?}) confirmed in tx {:?}",
            quest.title, receipt.transaction_hash
        );
        Ok(QuestReceipt {
            title: quest.title.clone(),
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}
