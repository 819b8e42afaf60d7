//! Behaviour tests for single-node replica-set bootstrap.

mod replica_set_bootstrap_steps;

use replica_set_bootstrap_steps::world::{BootstrapWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/replica_set_bootstrap.feature",
    name = "Cold start becomes writable primary on the third poll"
)]
#[tokio::test(flavor = "multi_thread")]
async fn cold_start_becomes_primary(world: BootstrapWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/replica_set_bootstrap.feature",
    name = "Node never becomes writable primary"
)]
#[tokio::test(flavor = "multi_thread")]
async fn never_primary_times_out(world: BootstrapWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/replica_set_bootstrap.feature",
    name = "Re-running against a healthy primary changes nothing"
)]
#[tokio::test(flavor = "multi_thread")]
async fn rerun_is_idempotent(world: BootstrapWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/replica_set_bootstrap.feature",
    name = "Transient hello failures are retried"
)]
#[tokio::test(flavor = "multi_thread")]
async fn transient_failures_are_retried(world: BootstrapWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/replica_set_bootstrap.feature",
    name = "Strict initiation stops on a rejected configuration"
)]
#[tokio::test(flavor = "multi_thread")]
async fn strict_initiation_stops(world: BootstrapWorld) {
    let _ = world;
}
