/// Heist example — searches for a believable burglary plot.
///
/// A tiny cast: Alice nurses a grudge, Bob guards the silver at home, and
/// Charlie is an innocent bystander. The search decides who goes where and
/// what they do when they get there.
///
/// Run with: cargo run --example heist

use story_engine::core::search::SearchConfig;
use story_engine::core::state::StoryState;
use story_engine::core::tree::Tree;
use story_engine::schema::catalog::Catalog;

const WORLD: &str = r#"(
    actors: {
        ActorId(1): (
            id: ActorId(1),
            name: "Alice",
            home: PlaceId(1),
            place: PlaceId(1),
            health: 10,
            anger: {ActorId(2): 4},
        ),
        ActorId(2): (
            id: ActorId(2),
            name: "Bob",
            home: PlaceId(2),
            place: PlaceId(2),
            health: 10,
            items: [(id: ItemId(1), name: "the family silver", value: 6.0)],
        ),
        ActorId(3): (
            id: ActorId(3),
            name: "Charlie",
            home: PlaceId(3),
            place: PlaceId(3),
            health: 10,
            items: [(id: ItemId(2), name: "a dented kettle", value: 0.5)],
        ),
    },
    places: {
        PlaceId(1): (
            id: PlaceId(1),
            name: "Alice's flat",
            distances: {PlaceId(2): 1.0, PlaceId(3): 4.0},
        ),
        PlaceId(2): (
            id: PlaceId(2),
            name: "Bob's townhouse",
            distances: {PlaceId(1): 1.0, PlaceId(3): 2.0},
        ),
        PlaceId(3): (
            id: PlaceId(3),
            name: "Charlie's shed",
            distances: {PlaceId(1): 4.0, PlaceId(2): 2.0},
        ),
    },
    items: {
        ItemId(1): (id: ItemId(1), name: "the family silver", value: 6.0),
        ItemId(2): (id: ItemId(2), name: "a dented kettle", value: 0.5),
    },
)"#;

fn main() {
    let catalog = Catalog::parse_ron(WORLD).expect("Failed to parse world catalog");

    let mut tree = Tree::new(StoryState::from_catalog(&catalog));
    let config = SearchConfig::builder()
        .iterations(20_000)
        .exploration(1.0)
        .rollout_depth(2)
        .seed(2026)
        .build();

    let narrative = tree.search(&config).expect("Search failed");

    println!("A story in {} acts:", narrative.steps.len());
    for (turn, step) in narrative.steps.iter().enumerate() {
        println!(
            "  {}. {} (believability {:.2})",
            turn + 1,
            step.label,
            step.believability
        );
    }
    println!("Total believability: {:.2}", narrative.believability);
}
