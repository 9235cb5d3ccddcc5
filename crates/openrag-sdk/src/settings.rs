use crate::client::OpenRagClient;
use crate::error::Result;
use crate::types::SettingsResponse;

/// Client for the read-only settings endpoint
pub struct SettingsClient<'a> {
    client: &'a OpenRagClient,
}

impl<'a> SettingsClient<'a> {
    pub(crate) fn new(client: &'a OpenRagClient) -> Self {
        Self { client }
    }

    /// Fetch the current server configuration
    pub async fn get(&self) -> Result<SettingsResponse> {
        self.client.get_json("/api/v1/settings").await
    }
}
