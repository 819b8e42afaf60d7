//! MongoDB driver adapter for the administrative port.

use crate::replica_set::{
    domain::{HelloReply, ReplicaSetConfig, ReplicaSetStatus},
    ports::{AdminError, AdminResult, ReplicaSetAdmin},
};
use async_trait::async_trait;
use mongodb::{
    Client, Database,
    bson::{Document, doc, from_document},
    error::{Error as MongoError, ErrorKind},
    options::ClientOptions,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Application name reported to the server in the connection handshake.
const APP_NAME: &str = "mongo-rs-init";

/// Time the driver may spend finding a usable server for one command.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(3);

/// Time the driver may spend opening one socket.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Administrative adapter issuing commands on the node's `admin` database.
///
/// The client always connects directly to the configured host: before
/// initiation the node is not a set member, so replica-set discovery would
/// never select it.
#[derive(Debug, Clone)]
pub struct MongoReplicaSetAdmin {
    admin: Database,
}

impl MongoReplicaSetAdmin {
    /// Connects to the node at `uri` and sends a `ping`.
    ///
    /// A failed ping is logged and tolerated: the node may still be
    /// starting, and the bootstrap procedure treats that as "not ready".
    ///
    /// # Errors
    ///
    /// Returns [`AdminError`] when the URI cannot be parsed or the client
    /// cannot be built from it.
    pub async fn connect(uri: &str) -> AdminResult<Self> {
        let options = client_options(uri).await?;
        let client = Client::with_options(options).map_err(map_driver_error)?;
        let adapter = Self::from_client(&client);
        if let Err(err) = adapter.run(doc! { "ping": 1 }).await {
            warn!(error = %err, "mongo ping failed; continuing");
        }
        Ok(adapter)
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn from_client(client: &Client) -> Self {
        Self {
            admin: client.database("admin"),
        }
    }

    async fn run(&self, command: Document) -> AdminResult<Document> {
        self.admin.run_command(command).await.map_err(map_driver_error)
    }

    async fn run_decoded<T: DeserializeOwned>(&self, command: Document) -> AdminResult<T> {
        let reply = self.run(command).await?;
        from_document(reply).map_err(AdminError::transport)
    }
}

#[async_trait]
impl ReplicaSetAdmin for MongoReplicaSetAdmin {
    async fn replica_set_status(&self) -> AdminResult<ReplicaSetStatus> {
        self.run_decoded(doc! { "replSetGetStatus": 1 }).await
    }

    async fn hello(&self) -> AdminResult<HelloReply> {
        self.run_decoded(doc! { "hello": 1 }).await
    }

    async fn initiate(&self, config: &ReplicaSetConfig) -> AdminResult<()> {
        let command = initiate_command(config);
        debug!(command = %command, "sending replSetInitiate");
        self.run(command).await.map(drop)
    }
}

/// Parses `uri` and pins the options the bootstrap relies on.
///
/// Direct connection, timeouts and application name override whatever the
/// URI sets.
async fn client_options(uri: &str) -> AdminResult<ClientOptions> {
    let mut options = ClientOptions::parse(uri).await.map_err(map_driver_error)?;
    options.direct_connection = Some(true);
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
    options.connect_timeout = Some(CONNECT_TIMEOUT);
    options.app_name = Some(APP_NAME.to_owned());
    Ok(options)
}

/// Builds the `replSetInitiate` command for a one-member set.
fn initiate_command(config: &ReplicaSetConfig) -> Document {
    doc! {
        "replSetInitiate": {
            "_id": config.name().as_str(),
            "members": [
                { "_id": config.member_id(), "host": config.member_host().as_str() }
            ]
        }
    }
}

fn map_driver_error(err: MongoError) -> AdminError {
    match err.kind.as_ref() {
        ErrorKind::Command(command) => AdminError::command(
            command.code,
            command.code_name.clone(),
            command.message.clone(),
        ),
        _ => AdminError::transport(err),
    }
}
