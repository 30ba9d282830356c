use std::sync::Mutex;

use stockroom_auth::{UserDirectory, UserProfile};
use stockroom_core::{DomainResult, ItemId};
use stockroom_inventory::{InventoryItem, InventoryStore};

/// Shared in-memory state behind the HTTP handlers.
///
/// The store and directory are single-writer; each operation locks, runs to
/// completion, and unlocks, so two requests racing on the same item cannot
/// interleave reads and writes.
#[derive(Debug)]
pub struct AppServices {
    inventory: Mutex<InventoryStore>,
    users: Mutex<UserDirectory>,
}

impl AppServices {
    pub fn new(inventory: InventoryStore, users: UserDirectory) -> Self {
        Self {
            inventory: Mutex::new(inventory),
            users: Mutex::new(users),
        }
    }

    /// State preloaded with the mock dataset (four items, one user).
    pub fn seeded() -> Self {
        Self::new(InventoryStore::seeded(), UserDirectory::seeded())
    }

    pub fn get_inventory(&self) -> Vec<InventoryItem> {
        self.inventory.lock().unwrap().items().to_vec()
    }

    pub fn add_item(&self, description: &str, quantity: u32) -> DomainResult<InventoryItem> {
        let result = self.inventory.lock().unwrap().add_item(description, quantity);
        match &result {
            Ok(item) => tracing::info!(id = %item.id_typed(), quantity, "item added"),
            Err(err) => tracing::warn!(%err, "add_item rejected"),
        }
        result
    }

    pub fn add_item_loan(&self, id: ItemId, units: u32) -> DomainResult<InventoryItem> {
        let result = self.inventory.lock().unwrap().add_item_loan(id, units);
        match &result {
            Ok(item) => {
                tracing::info!(%id, units, available = item.available(), "item loaned");
            }
            Err(err) => tracing::warn!(%id, units, %err, "loan rejected"),
        }
        result
    }

    pub fn end_item_loan(&self, id: ItemId, units: u32) -> DomainResult<InventoryItem> {
        let result = self.inventory.lock().unwrap().end_item_loan(id, units);
        match &result {
            Ok(item) => {
                tracing::info!(%id, units, available = item.available(), "item returned");
            }
            Err(err) => tracing::warn!(%id, units, %err, "return rejected"),
        }
        result
    }

    pub fn login(&self, username: &str, password: &str) -> DomainResult<UserProfile> {
        let result = self.users.lock().unwrap().login(username, password);
        if result.is_err() {
            tracing::warn!(username, "login failed");
        }
        result
    }

    pub fn signup(&self, username: &str, email: &str, password: &str) -> DomainResult<UserProfile> {
        let result = self.users.lock().unwrap().signup(username, email, password);
        match &result {
            Ok(profile) => tracing::info!(id = %profile.id, username, "user signed up"),
            Err(err) => tracing::warn!(username, %err, "signup rejected"),
        }
        result
    }
}
