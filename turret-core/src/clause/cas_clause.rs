//! Compare and set conditions, the `IF` part of lightweight transactions.
//!
//! Only columns outside the primary key produce them.

use crate::{AsValue, HCons, HNil, ParamList, QueryCondition, QueryText, hlist};

/// Anything a statement can place after `IF`.
///
/// ```compile_fail
/// use turret_core::{Column, PartitionKey, Regular, TableRef, Table};
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
/// // Primary key predicates are not compare and set conditions.
/// users
///     .update()
///     .where_(users.id.eq("test"))
///     .modify(users.city.set("London"))
///     .only_if(users.id.eq("test"));
/// ```
pub trait CasCondition {
    type Params: ParamList;
    fn into_query_condition(self) -> QueryCondition<Self::Params>;
}

/// Literal predicate on a regular or static column.
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

/// Predicate introducing exactly one placeholder of type `T`.
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

impl CasCondition for Condition {
    type Params = HNil;
    fn into_query_condition(self) -> QueryCondition {
        self.0
    }
}

impl<T: AsValue> CasCondition for ParametricCondition<T> {
    type Params = hlist![T];
    fn into_query_condition(self) -> QueryCondition<Self::Params> {
        self.0
    }
}

impl<P: ParamList> CasCondition for HListCondition<P> {
    type Params = P;
    fn into_query_condition(self) -> QueryCondition<P> {
        self.0
    }
}
