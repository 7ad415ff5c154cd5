use serde::{Deserialize, Serialize};

use super::actor::ActorId;
use super::place::PlaceId;

/// One candidate story transition: an action type plus its participants.
///
/// Actions are descriptors, not effects. Applying one is the transition
/// engine's job, and a descriptor whose preconditions fail is still valid —
/// it just produces a believability-0 state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// `actor` travels to `to`.
    Move { actor: ActorId, to: PlaceId },
    /// `thief` takes the first item held by `victim`.
    Steal { thief: ActorId, victim: ActorId },
    /// `a` and `b` spend time together, lowering mutual anger.
    Play { a: ActorId, b: ActorId },
    /// `a` kills `b`.
    Kill { a: ActorId, b: ActorId },
}
