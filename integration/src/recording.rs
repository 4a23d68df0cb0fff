use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use helpers::{QuestParams, QuestReceipt, StackUpContract, StackUpDeployer, StackUpError};

/// One remote call as observed by the recording contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Deploy,
    Admin,
    CreateQuest(QuestParams),
}

/// Which call should fail, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Failure {
    #[default]
    Never,
    Deploy,
    Admin,
    /// 1-based `createQuest` position.
    CreateQuest(usize),
}

pub const CONTRACT_ADDRESS: Address = Address::repeat_byte(0x5a);
pub const ADMIN_ADDRESS: Address = Address::repeat_byte(0xad);

type CallLog = Arc<Mutex<Vec<Call>>>;

/// Tracks whether a `createQuest` started while another one was still pending.
#[derive(Debug, Default)]
struct InFlight {
    busy: AtomicBool,
    overlapped: AtomicBool,
}

/// Deployer that logs every call it (and the contract it hands out) receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingDeployer {
    calls: CallLog,
    in_flight: Arc<InFlight>,
    failure: Failure,
}

impl RecordingDeployer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            failure,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// True if two `createQuest` calls were ever pending at the same time.
    pub fn overlap_seen(&self) -> bool {
        self.in_flight.overlapped.load(Ordering::SeqCst)
    }

    pub fn created_quests(&self) -> Vec<QuestParams> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateQuest(params) => Some(params),
                _ => None,
            })
            .collect()
    }
}

fn record(calls: &CallLog, call: Call) -> usize {
    let mut calls = calls.lock().unwrap();
    calls.push(call);
    calls.len()
}

fn rejected(what: &str) -> StackUpError {
    StackUpError::PendingTxFailure(format!("{what} rejected by recording contract"))
}

#[async_trait]
impl StackUpDeployer for RecordingDeployer {
    type Contract = RecordingContract;

    async fn deploy(&self) -> Result<RecordingContract, StackUpError> {
        record(&self.calls, Call::Deploy);
        if self.failure == Failure::Deploy {
            return Err(rejected("deployment"));
        }

        Ok(RecordingContract {
            calls: self.calls.clone(),
            in_flight: self.in_flight.clone(),
            failure: self.failure,
            quests_sent: Mutex::new(0),
        })
    }
}

#[derive(Debug)]
pub struct RecordingContract {
    calls: CallLog,
    in_flight: Arc<InFlight>,
    failure: Failure,
    quests_sent: Mutex<usize>,
}

#[async_trait]
impl StackUpContract for RecordingContract {
    fn address(&self) -> Address {
        CONTRACT_ADDRESS
    }

    fn deploy_tx(&self) -> B256 {
        B256::with_last_byte(0x01)
    }

    async fn admin(&self) -> Result<Address, StackUpError> {
        record(&self.calls, Call::Admin);
        if self.failure == Failure::Admin {
            return Err(rejected("admin()"));
        }
        Ok(ADMIN_ADDRESS)
    }

    async fn create_quest(&self, quest: &QuestParams) -> Result<QuestReceipt, StackUpError> {
        let position = {
            let mut sent = self.quests_sent.lock().unwrap();
            *sent += 1;
            *sent
        };
        if self.in_flight.busy.swap(true, Ordering::SeqCst) {
            self.in_flight.overlapped.store(true, Ordering::SeqCst);
        }
        let seq = record(&self.calls, Call::CreateQuest(quest.clone()));

        // stay pending across a scheduler turn, like a real confirmation wait
        tokio::task::yield_now().await;
        self.in_flight.busy.store(false, Ordering::SeqCst);

        if self.failure == Failure::CreateQuest(position) {
            return Err(rejected("createQuest"));
        }

        Ok(QuestReceipt {
            title: quest.title.clone(),
            tx_hash: B256::with_last_byte(seq as u8),
            block_number: Some(seq as u64),
        })
    }
}
