//! In-process stand-ins for the StackUp contract, used by the integration tests.

pub mod recording;
