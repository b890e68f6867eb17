//! The filter is one predicate with two execution strategies: an in-memory
//! scan and a generated SQL `WHERE` clause. For the same data and the same
//! condition, both must return identical result sets in identical order.

use rusqlite::Connection;
use stockbook_core::db::open_db_in_memory;
use stockbook_core::{
    ItemFilter, ItemRepository, MemoryItemRepository, NewItem, SqliteItemRepository,
};

fn fixture_items() -> Vec<NewItem> {
    vec![
        NewItem::new("apple", 1500, 5),
        NewItem::new("pineapple", 2000, 3),
        NewItem::new("Apple Pie", 1500, 2),
        NewItem::new("beer", 1000, 10),
        NewItem::new("pale ale", 1200, 6),
        NewItem {
            item_name: None,
            price: Some(300),
            quantity: Some(1),
        },
        NewItem {
            item_name: Some("unpriced".to_string()),
            price: None,
            quantity: Some(4),
        },
        NewItem::default(),
    ]
}

fn filter_grid() -> Vec<ItemFilter> {
    vec![
        ItemFilter::default(),
        ItemFilter::named("apple"),
        ItemFilter::named("Apple"),
        ItemFilter::named("a"),
        ItemFilter::named("e P"),
        ItemFilter::named(""),
        ItemFilter::named("   "),
        ItemFilter::named("no such item"),
        ItemFilter::priced_at_most(0),
        ItemFilter::priced_at_most(1000),
        ItemFilter::priced_at_most(1500),
        ItemFilter::priced_at_most(5000),
        ItemFilter {
            item_name: Some("apple".to_string()),
            max_price: Some(1500),
        },
        ItemFilter {
            item_name: Some("ale".to_string()),
            max_price: Some(1200),
        },
        ItemFilter {
            item_name: Some("beer".to_string()),
            max_price: Some(1),
        },
    ]
}

fn seeded_pair() -> (MemoryItemRepository, Connection) {
    let memory = MemoryItemRepository::new();
    let conn = open_db_in_memory().unwrap();
    {
        let sqlite = SqliteItemRepository::try_new(&conn).unwrap();
        for item in fixture_items() {
            let in_memory = memory.save(item.clone()).unwrap();
            let in_sqlite = sqlite.save(item).unwrap();
            // Both stores count from 1 in insertion order, so whole records
            // stay comparable across strategies.
            assert_eq!(in_memory, in_sqlite);
        }
    }
    (memory, conn)
}

#[test]
fn in_memory_scan_and_sql_clause_select_identical_rows() {
    let (memory, conn) = seeded_pair();
    let sqlite = SqliteItemRepository::try_new(&conn).unwrap();

    for filter in filter_grid() {
        let from_memory = memory.find_all(&filter).unwrap();
        let from_sqlite = sqlite.find_all(&filter).unwrap();

        assert_eq!(
            from_memory, from_sqlite,
            "strategies disagree for filter {filter:?}"
        );
    }
}

#[test]
fn both_strategies_agree_after_updates() {
    use stockbook_core::ItemUpdate;

    let (memory, conn) = seeded_pair();
    let sqlite = SqliteItemRepository::try_new(&conn).unwrap();

    let update = ItemUpdate::new("cider", 900, 8);
    memory.update(4, &update).unwrap();
    sqlite.update(4, &update).unwrap();

    for filter in [
        ItemFilter::default(),
        ItemFilter::named("cider"),
        ItemFilter::named("beer"),
        ItemFilter::priced_at_most(1000),
    ] {
        assert_eq!(
            memory.find_all(&filter).unwrap(),
            sqlite.find_all(&filter).unwrap(),
            "strategies disagree for filter {filter:?}"
        );
    }
}
