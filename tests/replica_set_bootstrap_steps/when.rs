//! When steps for replica-set bootstrap BDD scenarios.

use std::sync::Arc;

use super::world::{BootstrapWorld, run_async};
use eyre::WrapErr;
use mongo_rs_bootstrap::replica_set::{
    domain::{MemberHost, ReplicaSetConfig, ReplicaSetName},
    services::ReplicaSetBootstrapper,
};
use rstest_bdd_macros::when;

fn run_bootstrap(world: &mut BootstrapWorld) -> Result<(), eyre::Report> {
    let config = world
        .config
        .clone()
        .ok_or_else(|| eyre::eyre!("missing replica set configuration in scenario world"))?;
    let bootstrapper = ReplicaSetBootstrapper::new(
        Arc::new(world.node.clone()),
        world.sleeper.clone(),
        config,
    )
    .with_initiation_policy(world.initiation_policy);

    let report = run_async(bootstrapper.run());
    world.reports.push(report);
    Ok(())
}

#[when(r#"the bootstrapper runs for replica set "{name}" with member host "{host}""#)]
fn run_for_replica_set(
    world: &mut BootstrapWorld,
    name: String,
    host: String,
) -> Result<(), eyre::Report> {
    world.config = Some(ReplicaSetConfig::single_member(
        ReplicaSetName::new(name).wrap_err("valid replica set name expected")?,
        MemberHost::new(host).wrap_err("valid member host expected")?,
    ));
    run_bootstrap(world)
}

#[when("the bootstrapper runs again")]
fn run_again(world: &mut BootstrapWorld) -> Result<(), eyre::Report> {
    run_bootstrap(world)
}
