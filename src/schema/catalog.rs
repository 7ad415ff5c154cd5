//! Catalog loading — the closed world definition a search is seeded from.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::actor::{Actor, ActorId};
use super::item::{Item, ItemId};
use super::place::{Place, PlaceId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("actor {actor:?} references unknown place {place:?}")]
    UnknownPlace { actor: ActorId, place: PlaceId },
    #[error("place {place:?} lists a distance to unknown place {other:?}")]
    UnknownNeighbor { place: PlaceId, other: PlaceId },
}

/// The fixed cast, map, and prop list for a story world.
///
/// The engine only ever reads the catalog; all mutable story state lives
/// in the per-snapshot actor records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub actors: FxHashMap<ActorId, Actor>,
    pub places: FxHashMap<PlaceId, Place>,
    pub items: FxHashMap<ItemId, Item>,
}

impl Catalog {
    /// Parse a catalog from RON text and validate its references.
    pub fn parse_ron(input: &str) -> Result<Catalog, CatalogError> {
        let catalog: Catalog = ron::from_str(input)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Catalog, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Every place an actor stands in or calls home must exist, as must
    /// both endpoints of every distance entry.
    fn validate(&self) -> Result<(), CatalogError> {
        for actor in self.actors.values() {
            for place in [actor.home, actor.place] {
                if !self.places.contains_key(&place) {
                    return Err(CatalogError::UnknownPlace {
                        actor: actor.id,
                        place,
                    });
                }
            }
        }
        for place in self.places.values() {
            for other in place.distances.keys() {
                if !self.places.contains_key(other) {
                    return Err(CatalogError::UnknownNeighbor {
                        place: place.id,
                        other: *other,
                    });
                }
            }
        }
        Ok(())
    }
}
