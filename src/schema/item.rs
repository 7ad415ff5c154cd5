use serde::{Deserialize, Serialize};

/// Newtype wrapper for item IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

/// An object an actor can own and lose.
///
/// `value` doubles as the believability of stealing the item: a worthless
/// trinket makes for a worthless theft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub value: f64,
}
