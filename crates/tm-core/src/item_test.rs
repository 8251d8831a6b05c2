//! Tests for migration item ordering and duplicate detection.

use super::*;

fn item(id: &str) -> MigrationItem {
    MigrationItem::new(id, "SELECT 1")
}

#[test]
fn orders_items_lexicographically() {
    let items = vec![item("001_init"), item("002_add_users"), item("000_setup")];
    let ordered = order_items(items).unwrap();
    let ids: Vec<&str> = ordered.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["000_setup", "001_init", "002_add_users"]);
}

#[test]
fn empty_set_is_fine() {
    assert!(order_items(Vec::new()).unwrap().is_empty());
}

#[test]
fn single_item_passes_through() {
    let ordered = order_items(vec![item("a.sql")]).unwrap();
    assert_eq!(ordered.len(), 1);
    assert_eq!(ordered[0].id, "a.sql");
}

#[test]
fn duplicate_ids_rejected() {
    let err = order_items(vec![item("a.sql"), item("b.sql"), item("a.sql")]).unwrap_err();
    match err {
        CoreError::DuplicateScript { id } => assert_eq!(id, "a.sql"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ordering_is_bytewise_not_numeric() {
    // "10_" sorts before "2_" lexicographically; callers are expected to
    // zero-pad their filenames.
    let ordered = order_items(vec![item("2_b"), item("10_a")]).unwrap();
    let ids: Vec<&str> = ordered.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["10_a", "2_b"]);
}

#[test]
fn content_preserved_through_ordering() {
    let items = vec![
        MigrationItem::new("b.sql", "INSERT INTO t VALUES (1);"),
        MigrationItem::new("a.sql", "CREATE TABLE t(x int);"),
    ];
    let ordered = order_items(items).unwrap();
    assert_eq!(ordered[0].sql, "CREATE TABLE t(x int);");
    assert_eq!(ordered[1].sql, "INSERT INTO t VALUES (1);");
}
