//! Integration tests for the grocery list flow
//!
//! Covers the list operations end to end through the service layer:
//! adding from entered text, toggling, archiving, and the notification
//! reports the host renders.

use std::collections::HashSet;

use basket::{GroceryStore, ListService, Notification, parse_item_names};
use proptest::prelude::*;
use uuid::Uuid;

use super::common::fixtures::{add_checked, CoreFixture};

#[tokio::test]
async fn test_add_toggle_archive_flow() {
    let mut fixture = CoreFixture::ephemeral();
    let core = &fixture.core;

    ListService::add_items_from_text(core, "Milk\nEggs");
    let items = core.store().items();
    assert_eq!(items.len(), 2);

    // Check off Milk only
    ListService::toggle_item(core, items[0].id);

    let archive = ListService::archive_purchased(core).expect("one item checked");
    assert_eq!(archive.items.len(), 1);
    assert_eq!(archive.items[0].name, "Milk");

    let remaining = core.store().items();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Eggs");

    let archived = core.store().archived();
    assert_eq!(archived[0].items[0].name, "Milk");

    assert!(matches!(
        fixture.updates.try_recv(),
        Ok(Notification::ItemsArchived { count: 1 })
    ));
}

#[tokio::test]
async fn test_archive_preserves_id_union() {
    let fixture = CoreFixture::ephemeral();
    let core = &fixture.core;

    ListService::add_items_from_text(core, "Milk\nEggs\nBread\nButter");
    let items = core.store().items();
    let before: HashSet<Uuid> = items.iter().map(|i| i.id).collect();
    ListService::toggle_item(core, items[1].id);
    ListService::toggle_item(core, items[3].id);

    ListService::archive_purchased(core).expect("two items checked");

    assert_eq!(core.store().items().len(), 2);
    assert_eq!(core.store().archived()[0].items.len(), 2);

    let after: HashSet<Uuid> = core
        .store()
        .items()
        .iter()
        .chain(core.store().archived()[0].items.iter())
        .map(|i| i.id)
        .collect();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_archive_with_nothing_checked_changes_nothing() {
    let fixture = CoreFixture::ephemeral();
    let core = &fixture.core;

    ListService::add_items_from_text(core, "Milk\nEggs");
    assert!(ListService::archive_purchased(core).is_none());

    assert_eq!(core.store().items().len(), 2);
    assert!(core.store().archived().is_empty());
}

#[tokio::test]
async fn test_toggle_twice_round_trips() {
    let fixture = CoreFixture::ephemeral();
    let core = &fixture.core;

    ListService::add_items_from_text(core, "Milk");
    let id = core.store().items()[0].id;
    let original = core.store().items()[0].updated_at;

    ListService::toggle_item(core, id);
    let toggled = core.store().items()[0].clone();
    assert!(toggled.is_checked);
    assert!(toggled.updated_at >= original);

    ListService::toggle_item(core, id);
    assert!(!core.store().items()[0].is_checked);
}

#[tokio::test]
async fn test_mark_all_then_archive_takes_everything() {
    let fixture = CoreFixture::ephemeral();
    let core = &fixture.core;

    add_checked(core, "Milk\nEggs\nBread");
    let archive = ListService::archive_purchased(core).expect("all checked");

    assert_eq!(archive.items.len(), 3);
    assert!(core.store().items().is_empty());
}

proptest! {
    /// For any sequence of add calls, the item count equals the number of
    /// non-empty trimmed lines, and all ids are pairwise distinct.
    #[test]
    fn prop_add_items_matches_nonblank_line_count(
        blocks in prop::collection::vec(
            prop::collection::vec("[ \\t]*[A-Za-z0-9 ]{0,12}[ \\t]*", 0..6),
            0..4,
        )
    ) {
        let store = GroceryStore::new();
        for lines in &blocks {
            let text = lines.join("\n");
            store.add_items(parse_item_names(&text));
        }

        let expected = blocks
            .iter()
            .flat_map(|lines| lines.iter())
            .filter(|line| !line.trim().is_empty())
            .count();
        prop_assert_eq!(store.items().len(), expected);

        let ids: HashSet<Uuid> = store.items().iter().map(|i| i.id).collect();
        prop_assert_eq!(ids.len(), expected);
    }
}
