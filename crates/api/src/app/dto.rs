use serde::Deserialize;

use stockroom_auth::UserProfile;
use stockroom_core::ItemId;
use stockroom_inventory::InventoryItem;

// -------------------------
// Request DTOs
// -------------------------
//
// Fields default when absent so that a missing field takes the same
// validation path as an empty/zero one, per the wire contract (the backend
// answers 400/404 with an `{ error }` body, never a deserialization error).

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    #[serde(default = "absent_item_id")]
    pub item_id: ItemId,
    #[serde(default)]
    pub quantity: u32,
    /// Recorded nowhere yet; accepted so loan forms can send it.
    #[serde(default)]
    pub borrower: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    #[serde(default = "absent_item_id")]
    pub item_id: ItemId,
    #[serde(default)]
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Id 0 is never assigned, so an absent `itemId` resolves to "not found".
fn absent_item_id() -> ItemId {
    ItemId::new(0)
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// `{ message, item }` success envelope for the inventory mutations.
pub fn item_envelope(message: &str, item: &InventoryItem) -> serde_json::Value {
    serde_json::json!({
        "message": message,
        "item": item,
    })
}

/// Public profile as the client expects it: the user id travels as a string.
pub fn user_to_json(profile: &UserProfile) -> serde_json::Value {
    serde_json::json!({
        "id": profile.id.to_string(),
        "name": profile.name,
        "email": profile.email,
    })
}
