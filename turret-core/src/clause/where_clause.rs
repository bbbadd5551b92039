//! Conditions accepted by `WHERE`.
//!
//! Only primary key columns produce them, see [`Column`](crate::Column).

use crate::{AsValue, HCons, HNil, ParamList, QueryCondition, QueryText, TokenizerKey, hlist};

/// Anything a statement can place after `WHERE` or `AND`.
///
/// ```compile_fail
/// use turret_core::{Column, Regular, TableRef, Table, Statement};
/// struct Users { table: TableRef, name: Column<String, Regular> }
/// impl Table for Users { fn table_ref(&self) -> &TableRef { &self.table } }
/// let users = Users { table: TableRef::new("users"), name: Column::new("name") };
/// // Compare and set conditions cannot filter rows.
/// users.select_all().where_(users.name.is("Alice"));
/// ```
pub trait WhereCondition {
    type Params: ParamList;
    fn into_query_condition(self) -> QueryCondition<Self::Params>;
}

/// Literal predicate on primary key columns.
#[derive(Clone, Debug)]
pub struct Condition(pub(crate) QueryCondition);

impl Condition {
    pub(crate) fn new(qb: QueryText) -> Self {
        Self(QueryCondition::new(qb))
    }
    pub fn qb(&self) -> &QueryText {
        &self.0.qb
    }
}

/// Equality on a partition key column, it carries the key used for routing.
#[derive(Clone, Debug)]
pub struct PartitionCondition(pub(crate) QueryCondition);

impl PartitionCondition {
    pub(crate) fn new(qb: QueryText, key: TokenizerKey) -> Self {
        Self(QueryCondition::with_tokens(qb, vec![key]))
    }
    pub fn qb(&self) -> &QueryText {
        &self.0.qb
    }
    pub fn key(&self) -> Option<&TokenizerKey> {
        self.0.tokens.first()
    }
}

/// Predicate introducing exactly one placeholder of type `T`.
///
/// Built by [`Column::eq_param`](crate::Column::eq_param) and
/// [`Column::in_param`](crate::Column::in_param) only, the text always holds one marker:
/// ```compile_fail
/// use turret_core::{QueryText, clause::where_clause::ParametricCondition};
/// ParametricCondition::<String>::new(QueryText::new("id = ? AND name = ?"));
/// ```
#[derive(Clone, Debug)]
pub struct ParametricCondition<T>(pub(crate) QueryCondition<HCons<T, HNil>>);

impl<T: AsValue> ParametricCondition<T> {
    pub(crate) fn new(qb: QueryText) -> Self {
        Self(QueryCondition::new(qb))
    }
    pub fn qb(&self) -> &QueryText {
        &self.0.qb
    }
}

/// Predicate introducing the placeholders listed in `P`.
#[derive(Clone, Debug)]
pub struct HListCondition<P>(pub(crate) QueryCondition<P>);

impl<P: ParamList> HListCondition<P> {
    pub(crate) fn new(qb: QueryText) -> Self {
        Self(QueryCondition::new(qb))
    }
    pub fn qb(&self) -> &QueryText {
        &self.0.qb
    }
}

impl WhereCondition for Condition {
    type Params = HNil;
    fn into_query_condition(self) -> QueryCondition {
        self.0
    }
}

impl WhereCondition for PartitionCondition {
    type Params = HNil;
    fn into_query_condition(self) -> QueryCondition {
        self.0
    }
}

impl<T: AsValue> WhereCondition for ParametricCondition<T> {
    type Params = hlist![T];
    fn into_query_condition(self) -> QueryCondition<Self::Params> {
        self.0
    }
}

impl<P: ParamList> WhereCondition for HListCondition<P> {
    type Params = P;
    fn into_query_condition(self) -> QueryCondition<P> {
        self.0
    }
}
