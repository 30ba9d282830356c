use serde::Serialize;

use stockroom_core::{DomainError, Entity, ItemId};

/// An inventory record: total owned quantity plus the share currently on hand.
///
/// # Invariants
/// - `0 <= available <= quantity` at all times.
/// - `quantity` (total owned) never changes after creation; loans and returns
///   only move `available`.
///
/// Serializes to the wire shape `{ id, description, quantity, available }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    id: ItemId,
    description: String,
    quantity: u32,
    available: u32,
}

impl InventoryItem {
    /// Create a new item with everything available.
    ///
    /// Fails validation when the description is blank or the quantity is zero
    /// (a missing quantity on the wire decodes as zero and is rejected the
    /// same way).
    pub(crate) fn new(id: ItemId, description: &str, quantity: u32) -> Result<Self, DomainError> {
        if description.trim().is_empty() || quantity == 0 {
            return Err(DomainError::validation(
                "Description and quantity are required",
            ));
        }
        Ok(Self {
            id,
            description: description.to_string(),
            quantity,
            available: quantity,
        })
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Total owned.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Currently not on loan.
    pub fn available(&self) -> u32 {
        self.available
    }

    /// Derived: units currently out on loan.
    pub fn loaned(&self) -> u32 {
        self.quantity - self.available
    }

    /// Take `units` out on loan, reducing availability.
    pub(crate) fn loan(&mut self, units: u32) -> Result<(), DomainError> {
        if units == 0 {
            return Err(DomainError::validation("Quantity must be greater than zero"));
        }
        if self.available < units {
            return Err(DomainError::insufficient("Not enough items available"));
        }
        self.available -= units;
        Ok(())
    }

    /// Return `units` from loan. A return can never push availability past
    /// the total owned, so the result is capped at `quantity`. The sum
    /// saturates first so an oversized `units` cannot overflow past the cap.
    pub(crate) fn end_loan(&mut self, units: u32) {
        self.available = self.available.saturating_add(units).min(self.quantity);
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
