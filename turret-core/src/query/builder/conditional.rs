use crate::{
    Concat, Consistency, HNil, Join, Modification, ParamList, QueryBuilder, QueryText,
    SerialConsistency, Statement, TokenizerKey, clause::cas_clause::CasCondition,
};
use std::marker::PhantomData;

/// `IF` followed by compare and set conditions, more can be added with `and`.
#[derive(Default, Debug)]
pub struct IfConditions;
/// `IF EXISTS`, nothing can follow.
#[derive(Default, Debug)]
pub struct IfExists;

/// Statements that accept an `IF` clause.
pub trait Conditional: Statement {}

/// Lightweight transaction: statement `Q` followed by its `IF` clause.
///
/// `P` lists the placeholders of the `IF` clause, they come after the ones of `Q`.
pub struct ConditionalQuery<Q, P = HNil, K = IfConditions> {
    inner: Q,
    conditions: QueryText,
    serial_consistency: Option<SerialConsistency>,
    _state: PhantomData<fn() -> (P, K)>,
}

impl<Q, P, K> ConditionalQuery<Q, P, K> {
    pub(crate) fn new(inner: Q, conditions: QueryText) -> Self {
        Self {
            inner,
            conditions,
            serial_consistency: None,
            _state: PhantomData,
        }
    }
    /// Statement the conditions apply to.
    pub fn inner(&self) -> &Q {
        &self.inner
    }
    /// Consistency of the Paxos phase.
    pub fn serial_consistency_level(mut self, level: SerialConsistency) -> Self {
        self.serial_consistency = Some(level);
        self
    }
}

impl<Q, P: ParamList> ConditionalQuery<Q, P, IfConditions> {
    pub fn and<C: CasCondition>(
        self,
        condition: C,
    ) -> ConditionalQuery<Q, Join<P, C::Params>, IfConditions>
    where
        P: Concat<C::Params>,
    {
        let conditions = self
            .conditions
            .append(QueryBuilder::and(condition.into_query_condition().qb));
        ConditionalQuery {
            inner: self.inner,
            conditions,
            serial_consistency: self.serial_consistency,
            _state: PhantomData,
        }
    }
}

impl<Q, P, K> Statement for ConditionalQuery<Q, P, K>
where
    Q: Conditional,
    Q::Params: Concat<P>,
    P: ParamList,
{
    type Params = Join<Q::Params, P>;
    fn query_text(&self) -> QueryText {
        self.inner.query_text().append(&self.conditions)
    }
    fn consistency(&self) -> Option<Consistency> {
        self.inner.consistency()
    }
    fn serial_consistency(&self) -> Option<SerialConsistency> {
        self.serial_consistency
    }
    fn routing_tokens(&self) -> &[TokenizerKey] {
        self.inner.routing_tokens()
    }
}

impl<Q, P, K> Modification for ConditionalQuery<Q, P, K>
where
    Q: Conditional,
    Q::Params: Concat<P>,
    P: ParamList,
{
}
