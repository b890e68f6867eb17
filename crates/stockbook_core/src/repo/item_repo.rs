//! Item repository contract plus in-memory and SQLite implementations.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical item storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Ids are assigned on save, monotonically, and never reassigned.
//! - Listing applies [`ItemFilter`] and returns ascending-id order in every
//!   implementation, so execution strategy never changes the result set.

use crate::db::DbError;
use crate::model::item::{Item, ItemId, ItemUpdate, NewItem};
use crate::query::filter::ItemFilter;
use log::debug;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

const ITEM_SELECT_SQL: &str = "SELECT
    id,
    item_name,
    price,
    quantity
FROM items";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for item persistence and query operations.
///
/// `NotFound` is the only domain-level failure; the remaining variants are
/// infrastructure conditions propagated unchanged to the caller.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ItemId),
    Unavailable(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::Unavailable(message) => write!(f, "item store unavailable: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}; apply migrations before constructing a repository"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_)
            | Self::Unavailable(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for item CRUD operations.
///
/// There is deliberately no delete: records live for the store's lifetime.
pub trait ItemRepository {
    /// Assigns an id to the request, stores the record, returns it.
    fn save(&self, item: NewItem) -> RepoResult<Item>;
    /// Overwrites the mutable fields of an existing record wholesale.
    ///
    /// Fails with [`RepoError::NotFound`] when `id` was never assigned.
    fn update(&self, id: ItemId, update: &ItemUpdate) -> RepoResult<()>;
    /// Looks up one record; a missing id is a normal `None`, not an error.
    fn find_by_id(&self, id: ItemId) -> RepoResult<Option<Item>>;
    /// Lists every record matching the filter, ascending by id.
    fn find_all(&self, filter: &ItemFilter) -> RepoResult<Vec<Item>>;
}

#[derive(Debug, Default)]
struct MemoryStore {
    items: BTreeMap<ItemId, Item>,
    last_id: ItemId,
}

/// Reference in-memory item repository.
///
/// A single mutex serializes every operation, so writers never interleave
/// and readers observe either the pre- or post-state of a mutation, never a
/// half-written record. The `BTreeMap` keeps ascending-id (= insertion)
/// iteration order.
#[derive(Debug, Default)]
pub struct MemoryItemRepository {
    inner: Mutex<MemoryStore>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, MemoryStore>> {
        self.inner
            .lock()
            .map_err(|_| RepoError::Unavailable("item store mutex poisoned".to_string()))
    }
}

impl ItemRepository for MemoryItemRepository {
    fn save(&self, item: NewItem) -> RepoResult<Item> {
        let mut store = self.lock()?;
        store.last_id += 1;

        let stored = Item {
            id: store.last_id,
            item_name: item.item_name,
            price: item.price,
            quantity: item.quantity,
        };
        store.items.insert(stored.id, stored.clone());

        Ok(stored)
    }

    fn update(&self, id: ItemId, update: &ItemUpdate) -> RepoResult<()> {
        let mut store = self.lock()?;
        let item = store.items.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        item.apply(update);
        Ok(())
    }

    fn find_by_id(&self, id: ItemId) -> RepoResult<Option<Item>> {
        Ok(self.lock()?.items.get(&id).cloned())
    }

    fn find_all(&self, filter: &ItemFilter) -> RepoResult<Vec<Item>> {
        let store = self.lock()?;
        Ok(store
            .items
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }
}

/// SQLite-backed item repository.
///
/// Borrows a migrated connection; transaction boundaries beyond single
/// statements belong to the caller.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// Rejects connections whose schema has not been brought up to the
    /// version this binary expects, instead of failing later mid-query.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn save(&self, item: NewItem) -> RepoResult<Item> {
        self.conn.execute(
            "INSERT INTO items (item_name, price, quantity) VALUES (?1, ?2, ?3);",
            params![item.item_name.as_deref(), item.price, item.quantity],
        )?;

        Ok(Item {
            id: self.conn.last_insert_rowid(),
            item_name: item.item_name,
            price: item.price,
            quantity: item.quantity,
        })
    }

    fn update(&self, id: ItemId, update: &ItemUpdate) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE items
             SET
                item_name = ?1,
                price = ?2,
                quantity = ?3
             WHERE id = ?4;",
            params![
                update.item_name.as_deref(),
                update.price,
                update.quantity,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn find_by_id(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self, filter: &ItemFilter) -> RepoResult<Vec<Item>> {
        let (predicate, binds) = filter.sql_where();

        let mut sql = String::from(ITEM_SELECT_SQL);
        if !predicate.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicate);
        }
        sql.push_str(" ORDER BY id ASC");

        debug!("event=item_list module=repo sql={}", sql.replace('\n', " "));

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(binds))?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = crate::db::migrations::latest_version();

    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let items_table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'items'
        );",
        [],
        |row| row.get(0),
    )?;
    if items_table_exists == 0 {
        return Err(RepoError::MissingRequiredTable("items"));
    }

    Ok(())
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    Ok(Item {
        id: row.get("id")?,
        item_name: row.get("item_name")?,
        price: row.get("price")?,
        quantity: row.get("quantity")?,
    })
}
