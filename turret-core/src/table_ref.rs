use crate::{
    DeleteQuery, HNil, InsertQuery, ParamList, QueryBuilder, QueryText, SelectQuery, TruncateQuery,
    UpdateQuery,
    clause::{
        delete_clause,
        typed_clause::{self, Projection, Star},
    },
};
use std::borrow::Cow;

/// Table reference.
#[derive(Default, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TableRef {
    /// Table name.
    pub name: Cow<'static, str>,
    /// Keyspace name, empty to use the session keyspace.
    pub keyspace: Cow<'static, str>,
}

impl TableRef {
    /// New table reference.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            keyspace: Cow::Borrowed(""),
        }
    }
    /// New table reference inside `keyspace`.
    pub const fn with_keyspace(keyspace: &'static str, name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            keyspace: Cow::Borrowed(keyspace),
        }
    }
    /// Get the display name.
    pub fn full_name(&self) -> String {
        let mut result = String::new();
        if !self.keyspace.is_empty() {
            result.push_str(&self.keyspace);
            result.push('.');
        }
        result.push_str(&self.name);
        result
    }
    /// Keyspace qualified name ready to be written in a statement.
    pub fn qb(&self) -> QueryText {
        QueryBuilder::keyspace(&self.keyspace, &self.name)
    }
    /// True if empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.keyspace.is_empty()
    }
}

impl From<&'static str> for TableRef {
    fn from(value: &'static str) -> Self {
        TableRef::new(value)
    }
}

/// Table definition: a struct holding its [`TableRef`] and one [`Column`](crate::Column) per
/// column.
///
/// ```
/// use turret_core::{Column, PartitionKey, Regular, Statement, Table, TableRef};
/// struct Users {
///     table: TableRef,
///     id: Column<String, PartitionKey>,
///     city: Column<String, Regular>,
/// }
/// impl Table for Users {
///     fn table_ref(&self) -> &TableRef {
///         &self.table
///     }
/// }
/// let users = Users {
///     table: TableRef::with_keyspace("app", "users"),
///     id: Column::new("id"),
///     city: Column::new("city"),
/// };
/// let query = users.select(|t| t.city).where_(users.id.eq("test")).limit(1);
/// assert_eq!(
///     query.query_text().as_str(),
///     "SELECT city FROM app.users WHERE id = 'test' LIMIT 1"
/// );
/// ```
pub trait Table: Sized {
    fn table_ref(&self) -> &TableRef;

    /// `SELECT` of the projection returned by `f`.
    fn select<R, F>(&self, f: F) -> SelectQuery<'_, Self, R>
    where
        R: Projection,
        F: FnOnce(&Self) -> R,
    {
        SelectQuery::new(self, f(self))
    }
    /// `SELECT *`
    fn select_all(&self) -> SelectQuery<'_, Self, Star> {
        SelectQuery::new(self, Star)
    }
    /// `SELECT COUNT(*)`
    fn count(&self) -> SelectQuery<'_, Self, typed_clause::Condition<i64>> {
        SelectQuery::new(self, typed_clause::count())
    }
    fn update(&self) -> UpdateQuery<'_, Self> {
        UpdateQuery::new(self)
    }
    fn insert(&self) -> InsertQuery<'_, Self> {
        InsertQuery::new(self)
    }
    /// `DELETE` of whole rows.
    fn delete(&self) -> DeleteQuery<'_, Self> {
        DeleteQuery::new(self, delete_clause::Condition::<HNil>::new(QueryText::empty()))
    }
    /// `DELETE` of the columns or elements returned by `f`.
    fn delete_column<D, F>(&self, f: F) -> DeleteQuery<'_, Self, D>
    where
        D: ParamList,
        F: FnOnce(&Self) -> delete_clause::Condition<D>,
    {
        DeleteQuery::new(self, f(self))
    }
    fn truncate(&self) -> TruncateQuery<'_, Self> {
        TruncateQuery::new(self)
    }
}

impl Table for TableRef {
    fn table_ref(&self) -> &TableRef {
        self
    }
}
