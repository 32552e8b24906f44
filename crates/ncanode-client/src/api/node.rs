//! Server information endpoint.

use crate::NcaNodeClient;
use ncanode_core::Result;
use serde_json::Value;

/// Server information endpoint
pub struct NodeApi<'a> {
    client: &'a NcaNodeClient,
}

impl<'a> NodeApi<'a> {
    pub(crate) const fn new(client: &'a NcaNodeClient) -> Self {
        Self { client }
    }

    /// Get information about the NCANode server (`NODE.info`)
    pub async fn info(&self) -> Result<Value> {
        self.client.call("NODE.info", None).await
    }
}
