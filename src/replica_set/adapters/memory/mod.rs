//! In-memory adapters for deterministic bootstrap tests.

mod node;
mod sleeper;

pub use node::{InMemoryReplicaSetNode, NodeCallCounts};
pub use sleeper::RecordingSleeper;
