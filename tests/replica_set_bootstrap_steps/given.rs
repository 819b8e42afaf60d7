//! Given steps for replica-set bootstrap BDD scenarios.

use super::world::BootstrapWorld;
use mongo_rs_bootstrap::replica_set::{
    adapters::memory::InMemoryReplicaSetNode, domain::InitiationPolicy, ports::AdminError,
};
use rstest_bdd_macros::given;

#[given("a freshly started node with no replica set configuration")]
fn fresh_node(world: &mut BootstrapWorld) {
    world.node = InMemoryReplicaSetNode::uninitialized();
}

#[given(r#"a node that is already writable primary of replica set "{name}""#)]
fn healthy_primary(world: &mut BootstrapWorld, name: String) {
    world.node = InMemoryReplicaSetNode::healthy_primary(name);
}

#[given("the node becomes writable primary on poll {polls:u32}")]
fn promoted_on_poll(world: &mut BootstrapWorld, polls: u32) {
    world.node = world.node.clone().promote_after(polls);
}

#[given("the first {count:u32} hello queries fail to connect")]
fn unreachable_hellos(world: &mut BootstrapWorld, count: u32) {
    world.node = world.node.clone().with_unreachable_hellos(count);
}

#[given("the node rejects initiation with code {code:i32}")]
fn rejects_initiation(world: &mut BootstrapWorld, code: i32) {
    world.node = world.node.clone().with_initiate_error(AdminError::command(
        code,
        "InvalidReplicaSetConfig",
        "rejected by scenario",
    ));
}

#[given("strict initiation is enabled")]
fn strict_initiation(world: &mut BootstrapWorld) {
    world.initiation_policy = InitiationPolicy::Strict;
}
