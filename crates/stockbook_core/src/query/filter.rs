//! Search condition and predicate construction.
//!
//! # Responsibility
//! - Hold the optional name-substring and max-price sub-conditions.
//! - Build both execution forms of the predicate: an in-memory item check
//!   and a dynamically constructed SQL `WHERE` fragment.
//!
//! # Invariants
//! - Sub-conditions combine with logical AND; an absent or blank field
//!   contributes no constraint.
//! - Both execution forms select the same rows for the same data, provided
//!   the name input contains no SQL `LIKE` metacharacters (`%`, `_` pass
//!   through unescaped in the SQL form).

use crate::model::item::Item;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// Optional filter pair applied by the store's list operation.
///
/// `Default` yields the unconstrained filter, which matches every item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    /// Case-sensitive substring to look for in `item_name`.
    ///
    /// Empty or all-whitespace input is treated the same as `None`.
    pub item_name: Option<String>,
    /// Inclusive upper bound on `price`.
    pub max_price: Option<i64>,
}

impl ItemFilter {
    /// Creates a name-only filter.
    pub fn named(item_name: impl Into<String>) -> Self {
        Self {
            item_name: Some(item_name.into()),
            ..Self::default()
        }
    }

    /// Creates a price-only filter.
    pub fn priced_at_most(max_price: i64) -> Self {
        Self {
            max_price: Some(max_price),
            ..Self::default()
        }
    }

    /// Decides whether one item satisfies this filter.
    ///
    /// An item whose `item_name` is unset fails a present name condition,
    /// and an item whose `price` is unset fails a present price condition.
    /// This mirrors how SQL comparisons against NULL exclude the row, so
    /// filtering in memory and filtering in the database agree.
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(needle) = self.name_condition() {
            match item.item_name.as_deref() {
                Some(name) if name.contains(needle) => {}
                _ => return false,
            }
        }

        if let Some(max_price) = self.max_price {
            match item.price {
                Some(price) if price <= max_price => {}
                _ => return false,
            }
        }

        true
    }

    /// Builds the SQL form of this predicate.
    ///
    /// Returns a `WHERE`-body fragment (without the keyword) plus its
    /// positional bind values, or an empty fragment when no sub-condition
    /// is present. Bind order matches `?` order in the fragment.
    pub fn sql_where(&self) -> (String, Vec<Value>) {
        let mut clauses: Vec<&'static str> = Vec::new();
        let mut binds: Vec<Value> = Vec::new();

        if let Some(needle) = self.name_condition() {
            clauses.push("item_name LIKE '%' || ? || '%'");
            binds.push(Value::Text(needle.to_string()));
        }

        if let Some(max_price) = self.max_price {
            clauses.push("price <= ?");
            binds.push(Value::Integer(max_price));
        }

        (clauses.join(" AND "), binds)
    }

    /// Returns the active name sub-condition, if any.
    ///
    /// Blank input (empty or all-whitespace) is inactive; when active, the
    /// original untrimmed value is matched against.
    fn name_condition(&self) -> Option<&str> {
        self.item_name
            .as_deref()
            .filter(|needle| !needle.trim().is_empty())
    }
}
