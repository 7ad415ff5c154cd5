//! Story-tree tests — node construction and lazy expansion.

use rustc_hash::FxHashMap;
use story_engine::core::state::StoryState;
use story_engine::core::tree::{Tree, TreeNode};
use story_engine::schema::action::Action;
use story_engine::schema::actor::{Actor, ActorId};
use story_engine::schema::item::{Item, ItemId};
use story_engine::schema::place::{Place, PlaceId};

fn make_root_state() -> StoryState {
    let mut actors = FxHashMap::default();
    for (id, name, place) in [(1, "Alice", 1), (2, "Bob", 2), (3, "Charlie", 2)] {
        actors.insert(
            ActorId(id),
            Actor {
                id: ActorId(id),
                name: name.to_string(),
                home: PlaceId(place),
                place: PlaceId(place),
                health: 10,
                items: vec![Item {
                    id: ItemId(id),
                    name: format!("trinket {id}"),
                    value: id as f64,
                }],
                anger: FxHashMap::default(),
            },
        );
    }

    let mut places = FxHashMap::default();
    for (id, name) in [(1, "Alice's house"), (2, "Bob's house")] {
        places.insert(
            PlaceId(id),
            Place {
                id: PlaceId(id),
                name: name.to_string(),
                distances: FxHashMap::default(),
            },
        );
    }

    StoryState::new(actors, places, FxHashMap::default(), "", 1)
}

#[test]
fn children_empty_when_initialized() {
    let node = TreeNode::new(make_root_state());
    assert!(node.edges.is_empty());
}

#[test]
fn expand_child_adds_one_node() {
    let mut node = TreeNode::new(make_root_state());
    node.expand_child().unwrap();
    assert_eq!(node.edges.len(), 1);
}

#[test]
fn expand_all_children_adds_every_action() {
    let mut node = TreeNode::new(make_root_state());
    let total = node.action_count();
    node.expand_all_children().unwrap();

    // 3 actors x 2 places moves, plus 6 ordered pairs x 3 binary actions.
    assert_eq!(total, 24);
    assert_eq!(node.edges.len(), total);

    for (i, edge) in node.edges.iter().enumerate() {
        for other in &node.edges[i + 1..] {
            assert_ne!(edge.action, other.action, "duplicate edge at {i}");
        }
    }
}

#[test]
fn expansion_does_not_mutate_the_state() {
    let mut node = TreeNode::new(make_root_state());
    let original = node.state.clone();
    node.expand_all_children().unwrap();
    assert_eq!(node.state, original);
}

#[test]
fn expansion_does_not_mutate_siblings() {
    let mut node = TreeNode::new(make_root_state());
    node.expand_child().unwrap();
    let first_sibling = node.edges[0].child.state.clone();
    node.expand_all_children().unwrap();
    assert_eq!(node.edges[0].child.state, first_sibling);
}

#[test]
fn infeasible_actions_become_zero_believability_children() {
    let mut node = TreeNode::new(make_root_state());
    node.expand_all_children().unwrap();

    // Alice moving to her current place is in the space but unbelievable.
    let stay_put = node
        .edges
        .iter()
        .find(|edge| {
            edge.action
                == Action::Move {
                    actor: ActorId(1),
                    to: PlaceId(1),
                }
        })
        .expect("full expansion must include infeasible moves");
    assert_eq!(stay_put.child.state.believability, 0.0);
}

#[test]
fn tree_owns_its_root() {
    let mut tree = Tree::new(make_root_state());
    assert_eq!(tree.root.state.depth, 1);
    tree.root.expand_child().unwrap();
    assert_eq!(tree.root.edges[0].child.state.depth, 2);
}
