use std::collections::BTreeMap;

use serde::Deserialize;

/// Prices for a single zone.
///
/// Every key other than `name` is a priced resource (`server_core`,
/// `storage_maxiops`, `ipv4_address`, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceZone {
    pub name: String,
    #[serde(flatten)]
    pub items: BTreeMap<String, PriceItem>,
}

impl PriceZone {
    #[must_use]
    pub fn item(&self, resource: &str) -> Option<&PriceItem> {
        self.items.get(resource)
    }
}

/// Price in cents per hour for `amount` units of the resource.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PriceItem {
    pub amount: u64,
    pub price: f64,
}
