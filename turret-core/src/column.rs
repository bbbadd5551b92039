use crate::{
    AsValue, Counter, QueryBuilder, QueryText, Result, RowLabeled, TokenizerKey, Value,
    clause::{
        cas_clause, delete_clause,
        operator_clause::{Operation, Operator},
        ordering_clause, typed_clause::Projection, update_clause, where_clause,
    },
    hlist,
};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Debug},
    marker::PhantomData,
};

/// Indicates if and how a column participates in the primary key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKeyType {
    /// Member of the partition key.
    PartitionKey,
    /// Member of the clustering key.
    ClusteringKey,
    /// Not part of the primary key.
    #[default]
    None,
}

/// Role of a column in its table.
pub trait ColumnKind {
    const PRIMARY_KEY: PrimaryKeyType;
}

/// Kinds that belong to the primary key, the only ones allowed in `WHERE`.
pub trait PrimaryKeyColumn: ColumnKind {}

/// Kinds outside the primary key, the only ones that can be assigned, deleted or used in
/// compare and set conditions.
pub trait ModifiableColumn: ColumnKind {}

#[derive(Default, Clone, Copy, Debug)]
pub struct PartitionKey;
#[derive(Default, Clone, Copy, Debug)]
pub struct ClusteringKey;
#[derive(Default, Clone, Copy, Debug)]
pub struct Regular;
/// Column shared by every row of a partition.
#[derive(Default, Clone, Copy, Debug)]
pub struct Static;

impl ColumnKind for PartitionKey {
    const PRIMARY_KEY: PrimaryKeyType = PrimaryKeyType::PartitionKey;
}
impl ColumnKind for ClusteringKey {
    const PRIMARY_KEY: PrimaryKeyType = PrimaryKeyType::ClusteringKey;
}
impl ColumnKind for Regular {
    const PRIMARY_KEY: PrimaryKeyType = PrimaryKeyType::None;
}
impl ColumnKind for Static {
    const PRIMARY_KEY: PrimaryKeyType = PrimaryKeyType::None;
}

impl PrimaryKeyColumn for PartitionKey {}
impl PrimaryKeyColumn for ClusteringKey {}
impl ModifiableColumn for Regular {}
impl ModifiableColumn for Static {}

/// Typed column accessor.
///
/// `T` is the Rust type of the values and `K` the role of the column, together they decide
/// which conditions the column can produce.
///
/// ```
/// use turret_core::{ClusteringKey, Column, Regular};
/// let at: Column<i64, ClusteringKey> = Column::new("at");
/// assert_eq!(at.asc().qb(), at.ascending().qb());
/// assert_eq!(at.lt(10).qb().as_str(), "at < 10");
/// let city: Column<String, Regular> = Column::new("city");
/// assert_eq!(city.set("London").qb().as_str(), "city = 'London'");
/// ```
pub struct Column<T, K = Regular> {
    name: &'static str,
    _p: PhantomData<fn() -> (T, K)>,
}

impl<T, K> Column<T, K> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _p: PhantomData,
        }
    }
    /// Column name as declared.
    pub const fn name(&self) -> &'static str {
        self.name
    }
    /// Column name ready to be written in a statement.
    pub fn identifier(&self) -> QueryText {
        QueryBuilder::identifier(self.name)
    }
    pub fn primary_key(&self) -> PrimaryKeyType
    where
        K: ColumnKind,
    {
        K::PRIMARY_KEY
    }
    fn compare(&self, operator: Operator, rhs: impl AsRef<str>) -> QueryText {
        QueryBuilder::compare(self.identifier(), operator, rhs)
    }
}

impl<T, K> Clone for Column<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K> Copy for Column<T, K> {}

impl<T, K> Debug for Column<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Column").field(&self.name).finish()
    }
}

fn literal<T: AsValue>(value: impl Into<T>) -> QueryText {
    QueryBuilder::value(&value.into().as_value())
}

fn collection<E: AsValue, V: Into<E>>(
    values: impl IntoIterator<Item = V>,
    wrap: fn(Option<Vec<Value>>, Box<Value>) -> Value,
) -> QueryText {
    let values = values.into_iter().map(|v| v.into().as_value()).collect();
    QueryBuilder::value(&wrap(Some(values), Box::new(E::as_empty_value())))
}

impl<T: AsValue, K: PrimaryKeyColumn> Column<T, K> {
    /// `column = ?`
    pub fn eq_param(&self) -> where_clause::ParametricCondition<T> {
        let qb = self.compare(Operator::Equal, QueryBuilder::marker());
        where_clause::ParametricCondition::new(qb)
    }
    /// `column IN (a, b, ..)`
    pub fn in_<V: Into<T>>(&self, values: impl IntoIterator<Item = V>) -> where_clause::Condition {
        let values = values.into_iter().map(literal::<T>);
        where_clause::Condition::new(self.compare(Operator::In, QueryBuilder::tuple(values)))
    }
    /// `column IN ?`, bound to the whole list of values.
    pub fn in_param(&self) -> where_clause::ParametricCondition<Vec<T>> {
        where_clause::ParametricCondition::new(self.compare(Operator::In, QueryBuilder::marker()))
    }
}

impl<T: AsValue> Column<T, PartitionKey> {
    /// `column = value`, the value is kept for token aware routing.
    pub fn eq(&self, value: impl Into<T>) -> where_clause::PartitionCondition {
        let value = value.into().as_value();
        let qb = self.compare(Operator::Equal, QueryBuilder::value(&value));
        where_clause::PartitionCondition::new(qb, TokenizerKey::new(self.name, value))
    }
    /// `token(column) op token(value)`, used to scan the token ring.
    pub fn token(&self, operator: Operator, value: impl Into<T>) -> where_clause::Condition {
        let key = TokenizerKey::new(self.name, value.into().as_value());
        where_clause::Condition::new(QueryBuilder::compare(
            key.token_expression(),
            operator,
            key.token_value(),
        ))
    }
}

impl<T: AsValue> Column<T, ClusteringKey> {
    /// Any operator from [`operator_clause`](crate::clause::operator_clause).
    ///
    /// Partition keys only accept equality and `IN`:
    /// ```compile_fail
    /// use turret_core::{Column, PartitionKey, clause::operator_clause};
    /// let id: Column<String, PartitionKey> = Column::new("id");
    /// id.cmp(operator_clause::lt("m"));
    /// ```
    pub fn cmp<O: Operation<T>>(&self, operation: O) -> where_clause::HListCondition<O::Params> {
        where_clause::HListCondition::new(self.compare(operation.operator(), operation.operand()))
    }
    pub fn eq(&self, value: impl Into<T>) -> where_clause::Condition {
        where_clause::Condition::new(self.compare(Operator::Equal, literal::<T>(value)))
    }
    pub fn lt(&self, value: impl Into<T>) -> where_clause::Condition {
        where_clause::Condition::new(self.compare(Operator::Less, literal::<T>(value)))
    }
    pub fn lte(&self, value: impl Into<T>) -> where_clause::Condition {
        where_clause::Condition::new(self.compare(Operator::LessEqual, literal::<T>(value)))
    }
    pub fn gt(&self, value: impl Into<T>) -> where_clause::Condition {
        where_clause::Condition::new(self.compare(Operator::Greater, literal::<T>(value)))
    }
    pub fn gte(&self, value: impl Into<T>) -> where_clause::Condition {
        where_clause::Condition::new(self.compare(Operator::GreaterEqual, literal::<T>(value)))
    }
    /// `column ASC`
    pub fn asc(&self) -> ordering_clause::Condition {
        ordering_clause::Condition::new(QueryBuilder::ascending(self.name))
    }
    /// Same as [`asc`](Self::asc).
    pub fn ascending(&self) -> ordering_clause::Condition {
        self.asc()
    }
    /// `column DESC`
    pub fn desc(&self) -> ordering_clause::Condition {
        ordering_clause::Condition::new(QueryBuilder::descending(self.name))
    }
    /// Same as [`desc`](Self::desc).
    pub fn descending(&self) -> ordering_clause::Condition {
        self.desc()
    }
}

impl<T: AsValue, K: ModifiableColumn> Column<T, K> {
    /// `IF column = value`
    pub fn is(&self, value: impl Into<T>) -> cas_clause::Condition {
        cas_clause::Condition::new(self.compare(Operator::Equal, literal::<T>(value)))
    }
    pub fn is_not(&self, value: impl Into<T>) -> cas_clause::Condition {
        cas_clause::Condition::new(self.compare(Operator::NotEqual, literal::<T>(value)))
    }
    pub fn is_lt(&self, value: impl Into<T>) -> cas_clause::Condition {
        cas_clause::Condition::new(self.compare(Operator::Less, literal::<T>(value)))
    }
    pub fn is_lte(&self, value: impl Into<T>) -> cas_clause::Condition {
        cas_clause::Condition::new(self.compare(Operator::LessEqual, literal::<T>(value)))
    }
    pub fn is_gt(&self, value: impl Into<T>) -> cas_clause::Condition {
        cas_clause::Condition::new(self.compare(Operator::Greater, literal::<T>(value)))
    }
    pub fn is_gte(&self, value: impl Into<T>) -> cas_clause::Condition {
        cas_clause::Condition::new(self.compare(Operator::GreaterEqual, literal::<T>(value)))
    }
    /// `IF column = null`
    pub fn is_null(&self) -> cas_clause::Condition {
        cas_clause::Condition::new(self.compare(Operator::Equal, QueryBuilder::value(&Value::Null)))
    }
    /// `IF column = ?`
    pub fn is_param(&self) -> cas_clause::ParametricCondition<T> {
        cas_clause::ParametricCondition::new(self.compare(Operator::Equal, QueryBuilder::marker()))
    }
    pub fn is_cmp<O: Operation<T>>(&self, operation: O) -> cas_clause::HListCondition<O::Params> {
        cas_clause::HListCondition::new(self.compare(operation.operator(), operation.operand()))
    }
    /// `column = value`
    pub fn set(&self, value: impl Into<T>) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::set_to(self.name, literal::<T>(value)))
    }
    /// `column = ?`
    pub fn set_param(&self) -> update_clause::Condition<hlist![T]> {
        update_clause::Condition::new(QueryBuilder::set_to(self.name, QueryBuilder::marker()))
    }
    /// `column = value`, left out of the statement when `value` is `None`.
    ///
    /// It cannot be the first assignment:
    /// ```compile_fail
    /// use turret_core::{Column, PartitionKey, Regular, Table, TableRef};
    /// struct Users {
    ///     table: TableRef,
    ///     id: Column<String, PartitionKey>,
    ///     city: Column<String, Regular>,
    /// }
    /// impl Table for Users { fn table_ref(&self) -> &TableRef { &self.table } }
    /// let users = Users {
    ///     table: TableRef::new("users"),
    ///     id: Column::new("id"),
    ///     city: Column::new("city"),
    /// };
    /// users
    ///     .update()
    ///     .where_(users.id.eq("a"))
    ///     .modify(users.city.set_if_some(None::<String>));
    /// ```
    pub fn set_if_some<V: Into<T>>(&self, value: Option<V>) -> update_clause::OptionalCondition {
        update_clause::OptionalCondition(value.map(|v| self.set(v).0.qb))
    }
    /// Remove the value of the column.
    pub fn delete(&self) -> delete_clause::Condition {
        delete_clause::Condition::new(self.identifier())
    }
}

impl<E: AsValue, K: ModifiableColumn> Column<Vec<E>, K> {
    /// `column = column + [..]`
    pub fn append<V: Into<E>>(
        &self,
        values: impl IntoIterator<Item = V>,
    ) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::append(
            self.name,
            collection::<E, V>(values, Value::List),
        ))
    }
    /// `column = column + ?`
    pub fn append_param(&self) -> update_clause::Condition<hlist![Vec<E>]> {
        update_clause::Condition::new(QueryBuilder::append(self.name, QueryBuilder::marker()))
    }
    /// `column = [..] + column`
    pub fn prepend<V: Into<E>>(
        &self,
        values: impl IntoIterator<Item = V>,
    ) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::prepend(
            self.name,
            collection::<E, V>(values, Value::List),
        ))
    }
    /// `column = column - [..]`, removes every occurrence.
    pub fn discard<V: Into<E>>(
        &self,
        values: impl IntoIterator<Item = V>,
    ) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::discard(
            self.name,
            collection::<E, V>(values, Value::List),
        ))
    }
    /// `column[index] = value`
    pub fn set_at(&self, index: i32, value: impl Into<E>) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::put(
            self.name,
            itoa::Buffer::new().format(index),
            literal::<E>(value),
        ))
    }
    /// `DELETE column[index]`
    pub fn delete_index(&self, index: i32) -> delete_clause::Condition {
        delete_clause::Condition::new(QueryBuilder::element(
            self.name,
            itoa::Buffer::new().format(index),
        ))
    }
}

impl<E: AsValue + Ord, K: ModifiableColumn> Column<BTreeSet<E>, K> {
    /// `column = column + {..}`
    pub fn add<V: Into<E>>(&self, values: impl IntoIterator<Item = V>) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::append(
            self.name,
            collection::<E, V>(values, Value::Set),
        ))
    }
    /// `column = column - {..}`
    pub fn remove<V: Into<E>>(
        &self,
        values: impl IntoIterator<Item = V>,
    ) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::discard(
            self.name,
            collection::<E, V>(values, Value::Set),
        ))
    }
}

impl<Key: AsValue + Ord, V: AsValue, K: ModifiableColumn> Column<BTreeMap<Key, V>, K> {
    /// `column[key] = value`
    pub fn put(&self, key: impl Into<Key>, value: impl Into<V>) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::put(
            self.name,
            literal::<Key>(key),
            literal::<V>(value),
        ))
    }
    /// `column = column + {k: v, ..}`
    pub fn put_all<A, B>(
        &self,
        entries: impl IntoIterator<Item = (A, B)>,
    ) -> update_clause::Condition
    where
        A: Into<Key>,
        B: Into<V>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into().as_value(), v.into().as_value()))
            .collect();
        let map = Value::Map(
            Some(entries),
            Box::new(Key::as_empty_value()),
            Box::new(V::as_empty_value()),
        );
        update_clause::Condition::new(QueryBuilder::append(self.name, QueryBuilder::value(&map)))
    }
    /// `column = column - {k, ..}`
    pub fn remove_keys<A: Into<Key>>(
        &self,
        keys: impl IntoIterator<Item = A>,
    ) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::discard(
            self.name,
            collection::<Key, A>(keys, Value::Set),
        ))
    }
    /// `DELETE column[key]`
    pub fn delete_key(&self, key: impl Into<Key>) -> delete_clause::Condition {
        delete_clause::Condition::new(QueryBuilder::element(self.name, literal::<Key>(key)))
    }
    /// `DELETE column[?]`
    pub fn delete_key_param(&self) -> delete_clause::Condition<hlist![Key]> {
        delete_clause::Condition::new(QueryBuilder::element(self.name, QueryBuilder::marker()))
    }
}

impl<K: ModifiableColumn> Column<Counter, K> {
    /// `column = column + by`
    pub fn increment(&self, by: i64) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::increment(self.name, by))
    }
    /// `column = column - by`
    pub fn decrement(&self, by: i64) -> update_clause::Condition {
        update_clause::Condition::new(QueryBuilder::decrement(self.name, by))
    }
}

impl<T: AsValue, K> Projection for Column<T, K> {
    type Output = T;
    fn push_fragments(&self, out: &mut Vec<QueryText>) {
        out.push(self.identifier());
    }
    fn extract(&self, row: &RowLabeled) -> Result<T> {
        row.get(self.name)
    }
}
