//! Adapter implementations for replica-set bootstrap ports.

pub mod memory;
pub mod mongo;

mod runtime;

pub use mongo::MongoReplicaSetAdmin;
pub use runtime::TokioSleeper;
