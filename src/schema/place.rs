use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Newtype wrapper for place IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlaceId(pub u64);

/// A location actors can occupy.
///
/// `distances` is optional adjacency data consulted by the move
/// believability formula; an absent entry means the distance between the
/// two places is simply unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    #[serde(default)]
    pub distances: FxHashMap<PlaceId, f64>,
}

impl Place {
    /// Distance to another place, if the catalog records one.
    pub fn distance_to(&self, other: PlaceId) -> Option<f64> {
        self.distances.get(&other).copied()
    }
}
