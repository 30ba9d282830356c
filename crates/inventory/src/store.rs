//! In-memory inventory store: the system of record for items and loans.

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::item::InventoryItem;

/// Insertion-ordered item store with sequential id assignment.
///
/// Single-writer by construction: callers that share a store across tasks
/// wrap it in a lock and run each operation to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
    next_id: ItemId,
}

impl InventoryStore {
    /// An empty store; the first item gets id 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: ItemId::new(1),
        }
    }

    /// The dataset the mock backend ships with, partially out on loan.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (description, quantity, available) in [
            ("Blue pens", 50, 45),
            ("Red markers", 30, 28),
            ("Notebooks", 100, 95),
            ("Erasers", 75, 70),
        ] {
            let id = store
                .add_item(description, quantity)
                .expect("seed data is valid")
                .id_typed();
            store
                .add_item_loan(id, quantity - available)
                .expect("seed loans fit availability");
        }
        store
    }

    /// Create an item with the next sequential id and full availability.
    pub fn add_item(&mut self, description: &str, quantity: u32) -> DomainResult<InventoryItem> {
        let item = InventoryItem::new(self.next_id, description, quantity)?;
        self.next_id = self.next_id.next();
        self.items.push(item.clone());
        Ok(item)
    }

    /// Loan `units` of an item, reducing its availability.
    pub fn add_item_loan(&mut self, id: ItemId, units: u32) -> DomainResult<InventoryItem> {
        let item = self.find_mut(id)?;
        item.loan(units)?;
        Ok(item.clone())
    }

    /// Return `units` of an item; availability is capped at the total owned.
    pub fn end_item_loan(&mut self, id: ItemId, units: u32) -> DomainResult<InventoryItem> {
        let item = self.find_mut(id)?;
        item.end_loan(units);
        Ok(item.clone())
    }

    /// The full item list, insertion order preserved.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id_typed() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: ItemId) -> DomainResult<&mut InventoryItem> {
        self.items
            .iter_mut()
            .find(|item| item.id_typed() == id)
            .ok_or(DomainError::NotFound)
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}
