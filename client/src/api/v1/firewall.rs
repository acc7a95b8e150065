use common::FirewallRule;
use common::wrapped::Envelope;
use tracing::debug;
use uuid::Uuid;

use crate::{UpCloudClient, UpCloudError};

/// Per-server firewall rules, addressed by 1-based position.
pub struct FirewallApi<'a> {
    client: &'a UpCloudClient,
}

impl<'a> FirewallApi<'a> {
    pub(crate) const fn new(client: &'a UpCloudClient) -> Self {
        Self { client }
    }

    pub fn list(&self, server: &Uuid) -> Result<Vec<FirewallRule>, UpCloudError> {
        self.client.get(
            &format!("/server/{server}/firewall_rule"),
            "/firewall_rules/firewall_rule",
        )
    }

    pub fn get(&self, server: &Uuid, position: u32) -> Result<FirewallRule, UpCloudError> {
        self.client.get(
            &format!("/server/{server}/firewall_rule/{position}"),
            "/firewall_rule",
        )
    }

    pub fn create(&self, server: &Uuid, rule: &FirewallRule) -> Result<FirewallRule, UpCloudError> {
        self.client.post(
            &format!("/server/{server}/firewall_rule"),
            Some(&Envelope::new("firewall_rule", rule)),
            "/firewall_rule",
        )
    }

    pub fn delete(&self, server: &Uuid, position: u32) -> Result<(), UpCloudError> {
        self.client
            .delete(&format!("/server/{server}/firewall_rule/{position}"))
    }

    /// Creates `rules` one after another. Stops at the first failure; rules
    /// created before it stay in place.
    pub fn configure(
        &self,
        server: &Uuid,
        rules: &[FirewallRule],
    ) -> Result<Vec<FirewallRule>, UpCloudError> {
        debug!(%server, count = rules.len(), "configuring firewall");
        rules.iter().map(|rule| self.create(server, rule)).collect()
    }
}
