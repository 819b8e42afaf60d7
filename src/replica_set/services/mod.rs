//! Application services for replica-set bootstrap.

mod bootstrap;

pub use bootstrap::ReplicaSetBootstrapper;
