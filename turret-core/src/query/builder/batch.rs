use crate::{
    Concat, Consistency, HNil, Join, Modification, ParamList, QueryBuilder, QueryText,
    SerialConsistency, Statement, TokenizerKey, clause::using_clause,
};
use std::marker::PhantomData;

/// Kind of batch.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BatchType {
    /// Atomic, written to the batch log first.
    #[default]
    Logged,
    Unlogged,
    /// Only counter updates.
    Counter,
}

impl BatchType {
    pub const fn begin(&self) -> &'static str {
        match self {
            BatchType::Logged => "BEGIN BATCH",
            BatchType::Unlogged => "BEGIN UNLOGGED BATCH",
            BatchType::Counter => "BEGIN COUNTER BATCH",
        }
    }
}

/// Group of modification statements sent as one.
///
/// The parameters of the batch are the parameters of each statement, in insertion order.
///
/// ```
/// use turret_core::{BatchQuery, Column, PartitionKey, Regular, Statement, Table, TableRef};
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
///     table: TableRef::new("users"),
///     id: Column::new("id"),
///     city: Column::new("city"),
/// };
/// let batch = BatchQuery::unlogged()
///     .add(users.insert().value(|t| t.id, "a").value_param(|t| t.city))
///     .add(users.delete().where_(users.id.eq_param()));
/// assert_eq!(
///     batch.query_text().as_str(),
///     concat!(
///         "BEGIN UNLOGGED BATCH\n",
///         "    INSERT INTO users (id, city) VALUES ('a', ?);\n",
///         "    DELETE FROM users WHERE id = ?;\n",
///         "APPLY BATCH",
///     )
/// );
/// let bound = batch.prepare().bind(("London", "b"));
/// assert_eq!(bound.values.len(), 2);
/// ```
pub struct BatchQuery<P = HNil> {
    batch_type: BatchType,
    statements: Vec<QueryText>,
    timestamp: Option<using_clause::Condition>,
    consistency: Option<Consistency>,
    serial_consistency: Option<SerialConsistency>,
    tokens: Vec<TokenizerKey>,
    _p: PhantomData<fn() -> P>,
}

impl BatchQuery {
    pub fn new(batch_type: BatchType) -> Self {
        Self {
            batch_type,
            statements: Vec::new(),
            timestamp: None,
            consistency: None,
            serial_consistency: None,
            tokens: Vec::new(),
            _p: PhantomData,
        }
    }
    pub fn logged() -> Self {
        Self::new(BatchType::Logged)
    }
    pub fn unlogged() -> Self {
        Self::new(BatchType::Unlogged)
    }
    pub fn counter() -> Self {
        Self::new(BatchType::Counter)
    }
}

impl<P: ParamList> BatchQuery<P> {
    pub fn add<S>(mut self, statement: S) -> BatchQuery<Join<P, S::Params>>
    where
        S: Modification,
        P: Concat<S::Params>,
    {
        self.statements.push(statement.query_text());
        self.tokens.extend_from_slice(statement.routing_tokens());
        if self.serial_consistency.is_none() {
            self.serial_consistency = statement.serial_consistency();
        }
        BatchQuery {
            batch_type: self.batch_type,
            statements: self.statements,
            timestamp: self.timestamp,
            consistency: self.consistency,
            serial_consistency: self.serial_consistency,
            tokens: self.tokens,
            _p: PhantomData,
        }
    }
    /// `USING TIMESTAMP microseconds` applied to every statement.
    pub fn timestamp(mut self, microseconds: i64) -> Self {
        self.timestamp = Some(using_clause::Condition::timestamp(microseconds));
        self
    }
    pub fn consistency_level(mut self, level: Consistency) -> Self {
        self.consistency = Some(level);
        self
    }
    pub fn batch_type(&self) -> BatchType {
        self.batch_type
    }
    pub fn len(&self) -> usize {
        self.statements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl<P: ParamList> Statement for BatchQuery<P> {
    type Params = P;
    fn query_text(&self) -> QueryText {
        QueryBuilder::batch(
            self.batch_type,
            QueryBuilder::using(&self.timestamp),
            &self.statements,
        )
    }
    fn consistency(&self) -> Option<Consistency> {
        self.consistency
    }
    fn serial_consistency(&self) -> Option<SerialConsistency> {
        self.serial_consistency
    }
    fn routing_tokens(&self) -> &[TokenizerKey] {
        &self.tokens
    }
}
