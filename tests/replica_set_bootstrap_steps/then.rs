//! Then steps for replica-set bootstrap BDD scenarios.

use std::time::Duration;

use super::world::BootstrapWorld;
use rstest_bdd_macros::then;

#[then("the run exits with code {code:u8}")]
fn run_exits_with(world: &BootstrapWorld, code: u8) -> Result<(), eyre::Report> {
    let report = world.last_report()?;
    if report.exit_code() != code {
        return Err(eyre::eyre!(
            "expected exit code {code}, run ended with {} ({})",
            report.exit_code(),
            report.outcome()
        ));
    }
    Ok(())
}

#[then("every run exits with code {code:u8}")]
fn every_run_exits_with(world: &BootstrapWorld, code: u8) -> Result<(), eyre::Report> {
    if world.reports.is_empty() {
        return Err(eyre::eyre!("no bootstrap run recorded in scenario world"));
    }
    if let Some(report) = world.reports.iter().find(|report| report.exit_code() != code) {
        return Err(eyre::eyre!(
            "expected every run to exit with {code}, one ended with {}",
            report.outcome()
        ));
    }
    Ok(())
}

#[then("the node received {count:u32} initiation requests")]
fn initiation_request_count(world: &BootstrapWorld, count: u32) -> Result<(), eyre::Report> {
    let received = world.node.calls().initiate;
    if received != count {
        return Err(eyre::eyre!(
            "expected {count} initiation requests, node received {received}"
        ));
    }
    Ok(())
}

#[then(r#"the initiation named member 0 at "{host}" in replica set "{name}""#)]
fn initiation_document(
    world: &BootstrapWorld,
    host: String,
    name: String,
) -> Result<(), eyre::Report> {
    let config = world
        .node
        .initiated_config()
        .ok_or_else(|| eyre::eyre!("node has not accepted an initiation"))?;

    if config.member_id() != 0
        || config.member_host().as_str() != host
        || config.name().as_str() != name
    {
        return Err(eyre::eyre!("unexpected initiation document: {config:?}"));
    }
    Ok(())
}

#[then("the node answered {count:u32} hello queries")]
fn hello_query_count(world: &BootstrapWorld, count: u32) -> Result<(), eyre::Report> {
    let answered = world.node.calls().hello;
    if answered != count {
        return Err(eyre::eyre!(
            "expected {count} hello queries, node saw {answered}"
        ));
    }
    Ok(())
}

#[then("the bootstrapper paused for {seconds:u64} seconds in total")]
fn total_pause(world: &BootstrapWorld, seconds: u64) -> Result<(), eyre::Report> {
    let total = world.sleeper.total();
    if total != Duration::from_secs(seconds) {
        return Err(eyre::eyre!("expected {seconds}s of pauses, recorded {total:?}"));
    }
    Ok(())
}
