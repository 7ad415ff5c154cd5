//! Story state snapshots and the action transition engine.
//!
//! Every action is a pure function from one snapshot to a new one; the
//! input snapshot and everything reachable from it stays untouched. A
//! failed precondition is a normal outcome, reported as believability 0 on
//! the produced state. Errors are reserved for unknown ids, which indicate
//! a caller bug and propagate.

use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::schema::action::Action;
use crate::schema::actor::{Actor, ActorId};
use crate::schema::catalog::Catalog;
use crate::schema::item::{Item, ItemId};
use crate::schema::place::{Place, PlaceId};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown actor id: {0:?}")]
    UnknownActor(ActorId),
    #[error("unknown place id: {0:?}")]
    UnknownPlace(PlaceId),
}

/// Believability of a successful `play`.
const PLAY_BELIEVABILITY: f64 = 1.0;

/// An immutable snapshot of the story world.
///
/// Actor records are owned per snapshot and deep-copied by every
/// transition; the place and item catalogs never change, so all snapshots
/// share one copy.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryState {
    pub actors: FxHashMap<ActorId, Actor>,
    pub places: Arc<FxHashMap<PlaceId, Place>>,
    pub items: Arc<FxHashMap<ItemId, Item>>,
    /// Narration of the transition that produced this snapshot.
    pub label: String,
    /// Plausibility of that transition; exactly 0 marks a failed action.
    pub believability: f64,
    /// Turn counter, 1 at the root.
    pub depth: u32,
}

impl StoryState {
    pub fn new(
        actors: FxHashMap<ActorId, Actor>,
        places: FxHashMap<PlaceId, Place>,
        items: FxHashMap<ItemId, Item>,
        label: impl Into<String>,
        depth: u32,
    ) -> Self {
        Self {
            actors,
            places: Arc::new(places),
            items: Arc::new(items),
            label: label.into(),
            believability: 0.0,
            depth,
        }
    }

    /// Seed a root snapshot from a catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(
            catalog.actors.clone(),
            catalog.places.clone(),
            catalog.items.clone(),
            "",
            1,
        )
    }

    fn actor(&self, id: ActorId) -> Result<&Actor, WorldError> {
        self.actors.get(&id).ok_or(WorldError::UnknownActor(id))
    }

    fn place(&self, id: PlaceId) -> Result<&Place, WorldError> {
        self.places.get(&id).ok_or(WorldError::UnknownPlace(id))
    }

    /// Copy of this snapshot advanced one turn.
    fn successor(&self, label: String, believability: f64) -> StoryState {
        StoryState {
            actors: self.actors.clone(),
            places: Arc::clone(&self.places),
            items: Arc::clone(&self.items),
            label,
            believability,
            depth: self.depth + 1,
        }
    }

    /// Failed-precondition outcome: same world, believability forced to 0.
    fn failed(&self, label: String) -> StoryState {
        self.successor(label, 0.0)
    }

    /// `actor` travels to `to`.
    ///
    /// Requires the actor alive and the destination different from their
    /// current place. Believability falls off with catalog distance and is
    /// 1 between places with no recorded distance.
    pub fn move_to(&self, actor: ActorId, to: PlaceId) -> Result<StoryState, WorldError> {
        let subject = self.actor(actor)?;
        let destination = self.place(to)?;
        let label = format!("{} moves to {}.", subject.name, destination.name);

        if !subject.is_alive() || subject.place == to {
            return Ok(self.failed(label));
        }

        let believability = match self.place(subject.place)?.distance_to(to) {
            Some(distance) => 1.0 / (1.0 + distance),
            None => 1.0,
        };

        let mut next = self.successor(label, believability);
        if let Some(subject) = next.actors.get_mut(&actor) {
            subject.place = to;
        }
        Ok(next)
    }

    /// `thief` takes the first item held by `victim`.
    ///
    /// The thief must be alive and co-located with the victim, and the
    /// victim must hold something. The victim being dead is no obstacle.
    /// Believability is the stolen item's value.
    pub fn steal(&self, thief: ActorId, victim: ActorId) -> Result<StoryState, WorldError> {
        let taker = self.actor(thief)?;
        let target = self.actor(victim)?;
        let label = format!("{} steals from {}.", taker.name, target.name);

        if !taker.is_alive() || taker.place != target.place || target.items.is_empty() {
            return Ok(self.failed(label));
        }

        let mut next = self.successor(label, target.items[0].value);
        let item = next.actors.get_mut(&victim).map(|v| v.items.remove(0));
        if let (Some(item), Some(taker)) = (item, next.actors.get_mut(&thief)) {
            taker.items.push(item);
        }
        Ok(next)
    }

    /// `a` and `b` spend time together, each warming to the other.
    ///
    /// Requires co-location only. Both anger entries drop by 1,
    /// independently; a missing entry counts as 0 before the decrement.
    pub fn play(&self, a: ActorId, b: ActorId) -> Result<StoryState, WorldError> {
        let first = self.actor(a)?;
        let second = self.actor(b)?;
        let label = format!("{} plays with {}.", first.name, second.name);

        if first.place != second.place {
            return Ok(self.failed(label));
        }

        let mut next = self.successor(label, PLAY_BELIEVABILITY);
        if let Some(first) = next.actors.get_mut(&a) {
            *first.anger.entry(b).or_insert(0) -= 1;
        }
        if let Some(second) = next.actors.get_mut(&b) {
            *second.anger.entry(a).or_insert(0) -= 1;
        }
        Ok(next)
    }

    /// `a` kills `b` outright.
    ///
    /// Requires co-location only; the victim's prior health is irrelevant.
    /// A grudge makes the killing more believable.
    pub fn kill(&self, a: ActorId, b: ActorId) -> Result<StoryState, WorldError> {
        let killer = self.actor(a)?;
        let victim = self.actor(b)?;
        let label = format!("{} kills {}.", killer.name, victim.name);

        if killer.place != victim.place {
            return Ok(self.failed(label));
        }

        let believability = 1.0 + killer.anger_toward(b).max(0) as f64;
        let mut next = self.successor(label, believability);
        if let Some(victim) = next.actors.get_mut(&b) {
            victim.health = 0;
        }
        Ok(next)
    }

    /// Apply any action descriptor to this snapshot.
    pub fn apply(&self, action: &Action) -> Result<StoryState, WorldError> {
        match *action {
            Action::Move { actor, to } => self.move_to(actor, to),
            Action::Steal { thief, victim } => self.steal(thief, victim),
            Action::Play { a, b } => self.play(a, b),
            Action::Kill { a, b } => self.kill(a, b),
        }
    }

    /// Every candidate action over this snapshot's roster, in a stable
    /// order: all actor × place moves, then steal/play/kill for every
    /// ordered pair of distinct actors. Feasibility is not checked —
    /// actions that would fail their preconditions still appear and expand
    /// into believability-0 children.
    pub fn action_space(&self) -> Vec<Action> {
        let mut actor_ids: Vec<ActorId> = self.actors.keys().copied().collect();
        actor_ids.sort();
        let mut place_ids: Vec<PlaceId> = self.places.keys().copied().collect();
        place_ids.sort();

        let mut actions = Vec::new();
        for &actor in &actor_ids {
            for &to in &place_ids {
                actions.push(Action::Move { actor, to });
            }
        }
        for &a in &actor_ids {
            for &b in &actor_ids {
                if a == b {
                    continue;
                }
                actions.push(Action::Steal {
                    thief: a,
                    victim: b,
                });
                actions.push(Action::Play { a, b });
                actions.push(Action::Kill { a, b });
            }
        }
        actions
    }
}
