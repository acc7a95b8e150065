use common::{Account, Host, Plan, PriceZone, ServerSize, Timezone, Zone};

use crate::{UpCloudClient, UpCloudError};

impl UpCloudClient {
    /// Checks the credentials by fetching the account they belong to.
    pub fn authenticate(&self) -> Result<Account, UpCloudError> {
        self.get_account()
    }

    pub fn get_account(&self) -> Result<Account, UpCloudError> {
        self.get("/account", "/account")
    }

    pub fn get_zones(&self) -> Result<Vec<Zone>, UpCloudError> {
        self.get("/zone", "/zones/zone")
    }

    pub fn get_timezones(&self) -> Result<Vec<Timezone>, UpCloudError> {
        self.get("/timezone", "/timezones/timezone")
    }

    /// Prices per zone, each listing its billable items.
    pub fn get_prices(&self) -> Result<Vec<PriceZone>, UpCloudError> {
        self.get("/price", "/prices/zone")
    }

    pub fn get_server_sizes(&self) -> Result<Vec<ServerSize>, UpCloudError> {
        self.get("/server_size", "/server_sizes/server_size")
    }

    pub fn get_plans(&self) -> Result<Vec<Plan>, UpCloudError> {
        self.get("/plan", "/plans/plan")
    }

    /// Same as `hosts().list()`.
    pub fn get_hosts(&self) -> Result<Vec<Host>, UpCloudError> {
        self.hosts().list()
    }

    /// Same as `hosts().get(id)`.
    pub fn get_host(&self, id: u64) -> Result<Host, UpCloudError> {
        self.hosts().get(id)
    }
}
