//! Quest descriptors and the validity window shared by one bootstrap run.

use crate::clock::Clock;

/// Length of every quest's validity window: 10 hours.
pub const QUEST_WINDOW_SECS: u64 = 10 * 3600;

/// The literal part of a `createQuest` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestSeed {
    pub title: &'static str,
    pub tier: u8,
    pub reward_count: u64,
}

impl QuestSeed {
    pub const fn new(title: &'static str, tier: u8, reward_count: u64) -> Self {
        Self {
            title,
            tier,
            reward_count,
        }
    }

    pub fn with_window(&self, window: QuestWindow) -> QuestParams {
        QuestParams {
            title: self.title.to_string(),
            tier: self.tier,
            reward_count: self.reward_count,
            start_time: window.start,
            end_time: window.end,
        }
    }
}

/// Quests created right after deployment, in issue order.
pub const STACKUP_QUESTS: [QuestSeed; 3] = [
    QuestSeed::new("Introduction to Hardhat", 2, 600),
    QuestSeed::new("Unit Testing with Hardhat", 4, 500),
    QuestSeed::new("Debugging and Deploying with Hardhat", 5, 400),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestWindow {
    pub start: u64,
    pub end: u64,
}

impl QuestWindow {
    pub fn starting_at(start: u64) -> Self {
        Self {
            start,
            end: start.saturating_add(QUEST_WINDOW_SECS),
        }
    }

    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::starting_at(clock.now_unix())
    }

    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// Full argument list of one `createQuest` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestParams {
    pub title: String,
    pub tier: u8,
    pub reward_count: u64,
    pub start_time: u64,
    pub end_time: u64,
}
