use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::item::Item;
use super::place::PlaceId;

/// Newtype wrapper for actor IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u64);

/// A character in the story world.
///
/// Everything that can change over the course of a story — location,
/// health, inventory, grudges — lives here, inside whichever snapshot owns
/// the record. There is no global mutable registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub home: PlaceId,
    pub place: PlaceId,
    /// 0 means dead; unsigned, so it can never go negative.
    pub health: u32,
    /// Ordered inventory; ownership is exclusive to this actor.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Grudges toward other actors. Absent entries read as 0.
    #[serde(default)]
    pub anger: FxHashMap<ActorId, i64>,
}

impl Actor {
    /// An actor is alive while any health remains.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Stored anger toward another actor, 0 when no entry exists.
    pub fn anger_toward(&self, other: ActorId) -> i64 {
        self.anger.get(&other).copied().unwrap_or(0)
    }
}
