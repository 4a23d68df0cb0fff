//! Deploy StackUp, read its admin, then create the initial quests, one
//! confirmed transaction at a time.

use std::fmt;

use alloy::primitives::{Address, B256};
use log::{debug, info};

use crate::{
    clock::Clock,
    contract::{QuestReceipt, StackUpContract, StackUpDeployer},
    error::BootstrapError,
    quest::{QuestSeed, QuestWindow},
};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NotStarted,
    Deploying,
    Deployed,
    /// 1-based position in the quest list.
    CreatingQuest(usize),
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::NotStarted => write!(f, "not started"),
            Stage::Deploying => write!(f, "deploying"),
            Stage::Deployed => write!(f, "deployed"),
            Stage::CreatingQuest(n) => write!(f, "creating quest {n}"),
            Stage::Done => write!(f, "done"),
            Stage::Failed => write!(f, "failed"),
        }
    }
}

impl BootstrapError {
    /// The stage that was in progress when this error was raised.
    pub fn stage(&self) -> Stage {
        match self {
            BootstrapError::Deployment(_) => Stage::Deploying,
            BootstrapError::AdminRead(_) => Stage::Deployed,
            BootstrapError::CreateQuest { index, .. } => Stage::CreatingQuest(*index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub contract: Address,
    pub deploy_tx: B256,
    pub admin: Address,
    pub window: QuestWindow,
    pub quests: Vec<QuestReceipt>,
}

struct Progress {
    stage: Stage,
}

impl Progress {
    fn new() -> Self {
        Self {
            stage: Stage::NotStarted,
        }
    }

    fn advance(&mut self, next: Stage) {
        info!("bootstrap stage: {} -> {}", self.stage, next);
        self.stage = next;
    }
}

pub async fn run_bootstrap<D: StackUpDeployer>(
    deployer: &D,
    clock: &dyn Clock,
    quests: &[QuestSeed],
) -> Result<BootstrapReport, BootstrapError> {
    let mut progress = Progress::new();

    match execute(deployer, clock, quests, &mut progress).await {
        Ok(report) => {
            progress.advance(Stage::Done);
            info!(
                "bootstrap complete: {} quest(s) created on {}",
                report.quests.len(),
                report.contract
            );
            Ok(report)
        }
        Err(err) => {
            progress.advance(Stage::Failed);
            Err(err)
        }
    }
}

async fn execute<D: StackUpDeployer>(
    deployer: &D,
    clock: &dyn Clock,
    quests: &[QuestSeed],
    progress: &mut Progress,
) -> Result<BootstrapReport, BootstrapError> {
    progress.advance(Stage::Deploying);
    let contract = deployer.deploy().await.map_err(BootstrapError::Deployment)?;
    progress.advance(Stage::Deployed);

    println!("stackUp deployed to: {}", contract.address());

    let admin = contract.admin().await.map_err(BootstrapError::AdminRead)?;
    println!("admin address: {admin}");

    let window = QuestWindow::from_clock(clock);
    info!("quest window: {} .. {}", window.start, window.end);

    let mut receipts = Vec::with_capacity(quests.len());
    for (i, seed) in quests.iter().enumerate() {
        let index = i + 1;
        progress.advance(Stage::CreatingQuest(index));

        let params = seed.with_window(window);
        debug!("createQuest #{index}: {params:?}");

        let receipt =
            contract
                .create_quest(&params)
                .await
                .map_err(|source| BootstrapError::CreateQuest {
                    index,
                    title: seed.title.to_string(),
                    source,
                })?;
        receipts.push(receipt);
    }

    Ok(BootstrapReport {
        contract: contract.address(),
        deploy_tx: contract.deploy_tx(),
        admin,
        window,
        quests: receipts,
    })
}

/// Process exit status for a finished run.
pub fn exit_code<T, E>(result: &Result<T, E>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}
