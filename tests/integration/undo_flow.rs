//! Integration tests for the timed undo flow
//!
//! These run on tokio's paused clock: the countdown advances only when the
//! runtime is otherwise idle, so expiry timing is deterministic.

use basket::{ListService, Notification, UndoKind};
use uuid::Uuid;

use super::common::fixtures::{add_checked, CoreFixture};

#[tokio::test(start_paused = true)]
async fn test_clear_then_undo_restores_names_with_fresh_ids() {
    let mut fixture = CoreFixture::ephemeral();
    let core = &fixture.core;

    ListService::add_items_from_text(core, "Milk\nEggs");
    let old_ids: Vec<Uuid> = core.store().items().iter().map(|i| i.id).collect();

    let cleared = ListService::clear_list(core);
    assert_eq!(cleared.len(), 2);
    assert!(core.store().items().is_empty());

    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::ItemsCleared { count: 2 })
    ));
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::UndoAvailable {
            kind: UndoKind::Clear,
            count: 2
        })
    ));

    ListService::undo(core);
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::UndoApplied {
            kind: UndoKind::Clear,
            count: 2
        })
    ));

    let restored = core.store().items();
    let names: Vec<&str> = restored.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Milk", "Eggs"]);
    assert!(restored.iter().all(|i| !old_ids.contains(&i.id)));

    // A second undo has nothing to reverse
    ListService::undo(core);
    tokio::task::yield_now().await;
    assert_eq!(core.store().items().len(), 2);
    assert!(fixture.updates.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_undo_after_expiry_is_noop() {
    let mut fixture = CoreFixture::ephemeral();
    let core = &fixture.core;

    ListService::add_items_from_text(core, "Milk\nEggs");
    ListService::clear_list(core);

    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::ItemsCleared { .. })
    ));
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::UndoAvailable { .. })
    ));

    // Nothing else to do: the clock runs out and the clear becomes permanent
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::UndoExpired)
    ));

    ListService::undo(core);
    tokio::task::yield_now().await;
    assert!(core.store().items().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_archive_then_undo_removes_batch_and_restores() {
    let mut fixture = CoreFixture::ephemeral();
    let core = &fixture.core;

    ListService::add_items_from_text(core, "Milk\nEggs");
    let milk_id = core.store().items()[0].id;
    ListService::toggle_item(core, milk_id);

    let archive = ListService::archive_purchased(core).expect("Milk checked");
    assert_eq!(archive.items.len(), 1);
    assert_eq!(core.store().items()[0].name, "Eggs");
    assert_eq!(core.store().archived()[0].items[0].name, "Milk");

    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::ItemsArchived { count: 1 })
    ));
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::UndoAvailable {
            kind: UndoKind::Archive,
            count: 1
        })
    ));

    ListService::undo(core);
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::UndoApplied {
            kind: UndoKind::Archive,
            count: 1
        })
    ));

    // The batch is gone and Milk is back on the list with a fresh identity
    assert!(core.store().archived().is_empty());
    let items = core.store().items();
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Eggs", "Milk"]);
    let milk = &core.store().items()[1];
    assert_ne!(milk.id, milk_id);
    assert!(!milk.is_checked);
}

#[tokio::test(start_paused = true)]
async fn test_newer_action_supersedes_pending_undo() {
    let mut fixture = CoreFixture::ephemeral();
    let core = &fixture.core;

    add_checked(core, "Milk");
    ListService::archive_purchased(core).expect("Milk checked");
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::ItemsArchived { .. })
    ));
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::UndoAvailable {
            kind: UndoKind::Archive,
            ..
        })
    ));

    ListService::add_items_from_text(core, "Eggs");
    ListService::clear_list(core);
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::ItemsCleared { count: 1 })
    ));
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::UndoAvailable {
            kind: UndoKind::Clear,
            ..
        })
    ));

    // Undo reverses only the clear; the archive stays archived
    ListService::undo(core);
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::UndoApplied {
            kind: UndoKind::Clear,
            ..
        })
    ));

    let items = core.store().items();
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Eggs"]);
    assert_eq!(core.store().archived().len(), 1);

    // And nothing further is undoable
    ListService::undo(core);
    tokio::task::yield_now().await;
    assert!(fixture.updates.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_keeps_action_and_forfeits_undo() {
    let mut fixture = CoreFixture::ephemeral();
    let core = &fixture.core;

    ListService::add_items_from_text(core, "Milk");
    ListService::clear_list(core);
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::ItemsCleared { .. })
    ));
    assert!(matches!(
        fixture.updates.recv().await,
        Some(Notification::UndoAvailable { .. })
    ));

    ListService::dismiss_undo(core);
    ListService::undo(core);
    tokio::task::yield_now().await;

    assert!(core.store().items().is_empty());
    assert!(fixture.updates.try_recv().is_err());
}
