use crate::{
    Chained, Concat, Consistency, HNil, Join, Limited, Ordered, ParamList, QueryBuilder,
    QueryText, Result, RowLabeled, Specified, Statement, Table, TokenizerKey, Unchained,
    Unlimited, Unordered, Unspecified,
    clause::{ordering_clause, typed_clause::Projection, where_clause::WhereCondition},
};
use std::marker::PhantomData;

/// `SELECT` statement.
///
/// `R` is the projection, the remaining parameters track `LIMIT`, `ORDER BY`, the consistency
/// level, the `WHERE` chain and the placeholders introduced so far.
///
/// ```compile_fail
/// use turret_core::{ClusteringKey, Column, PartitionKey, Table, TableRef};
/// struct Events {
///     table: TableRef,
///     id: Column<i64, PartitionKey>,
///     at: Column<i64, ClusteringKey>,
/// }
/// impl Table for Events { fn table_ref(&self) -> &TableRef { &self.table } }
/// let events = Events {
///     table: TableRef::new("events"),
///     id: Column::new("id"),
///     at: Column::new("at"),
/// };
/// // ORDER BY cannot follow LIMIT.
/// events.select_all().where_(events.id.eq(1)).limit(10).order_by(events.at.desc());
/// ```
pub struct SelectQuery<
    't,
    T,
    R,
    L = Unlimited,
    O = Unordered,
    S = Unspecified,
    C = Unchained,
    P = HNil,
> {
    table: &'t T,
    projection: R,
    qb: QueryText,
    allow_filtering: bool,
    consistency: Option<Consistency>,
    tokens: Vec<TokenizerKey>,
    _state: PhantomData<fn() -> (L, O, S, C, P)>,
}

impl<'t, T: Table, R: Projection> SelectQuery<'t, T, R> {
    pub(crate) fn new(table: &'t T, projection: R) -> Self {
        let qb = QueryBuilder::select(projection.qb(), table.table_ref().qb());
        Self {
            table,
            projection,
            qb,
            allow_filtering: false,
            consistency: None,
            tokens: Vec::new(),
            _state: PhantomData,
        }
    }
}

impl<'t, T, R, L, O, S, C, P> SelectQuery<'t, T, R, L, O, S, C, P> {
    fn transition<L2, O2, S2, C2, P2>(
        self,
        qb: QueryText,
    ) -> SelectQuery<'t, T, R, L2, O2, S2, C2, P2> {
        SelectQuery {
            table: self.table,
            projection: self.projection,
            qb,
            allow_filtering: self.allow_filtering,
            consistency: self.consistency,
            tokens: self.tokens,
            _state: PhantomData,
        }
    }
    pub fn table(&self) -> &'t T {
        self.table
    }
    pub fn projection(&self) -> &R {
        &self.projection
    }
    /// Append `ALLOW FILTERING`.
    pub fn allow_filtering(mut self) -> Self {
        self.allow_filtering = true;
        self
    }
    /// Read the projection back from a result row.
    pub fn extract(&self, row: &RowLabeled) -> Result<R::Output>
    where
        R: Projection,
    {
        self.projection.extract(row)
    }
}

impl<'t, T, R, S> SelectQuery<'t, T, R, Unlimited, Unordered, S, Unchained, HNil> {
    pub fn where_<W: WhereCondition>(
        mut self,
        condition: W,
    ) -> SelectQuery<'t, T, R, Unlimited, Unordered, S, Chained, W::Params> {
        let condition = condition.into_query_condition();
        self.tokens.extend(condition.tokens);
        let qb = self.qb.append(QueryBuilder::where_(condition.qb));
        self.transition(qb)
    }
}

impl<'t, T, R, S, P: ParamList> SelectQuery<'t, T, R, Unlimited, Unordered, S, Chained, P> {
    pub fn and<W: WhereCondition>(
        mut self,
        condition: W,
    ) -> SelectQuery<'t, T, R, Unlimited, Unordered, S, Chained, Join<P, W::Params>>
    where
        P: Concat<W::Params>,
    {
        let condition = condition.into_query_condition();
        self.tokens.extend(condition.tokens);
        let qb = self.qb.append(QueryBuilder::and(condition.qb));
        self.transition(qb)
    }
}

impl<'t, T, R, S, C, P> SelectQuery<'t, T, R, Unlimited, Unordered, S, C, P> {
    /// `ORDER BY`, accepts one condition or an array of them.
    pub fn order_by<I>(self, clauses: I) -> SelectQuery<'t, T, R, Unlimited, Ordered, S, C, P>
    where
        I: IntoIterator<Item = ordering_clause::Condition>,
    {
        let qb = self.qb.append(QueryBuilder::order_by(clauses));
        self.transition(qb)
    }
}

impl<'t, T, R, O, S, C, P> SelectQuery<'t, T, R, Unlimited, O, S, C, P> {
    pub fn limit(self, limit: u32) -> SelectQuery<'t, T, R, Limited, O, S, C, P> {
        let qb = self.qb.append(QueryBuilder::limit(limit));
        self.transition(qb)
    }
}

impl<'t, T, R, L, O, C, P> SelectQuery<'t, T, R, L, O, Unspecified, C, P> {
    pub fn consistency_level(
        mut self,
        level: Consistency,
    ) -> SelectQuery<'t, T, R, L, O, Specified, C, P> {
        self.consistency = Some(level);
        let qb = self.qb.clone();
        self.transition(qb)
    }
}

impl<'t, T, R, L, O, S, C, P: ParamList> Statement for SelectQuery<'t, T, R, L, O, S, C, P> {
    type Params = P;
    fn query_text(&self) -> QueryText {
        if self.allow_filtering {
            self.qb.append(QueryBuilder::allow_filtering())
        } else {
            self.qb.clone()
        }
    }
    fn consistency(&self) -> Option<Consistency> {
        self.consistency
    }
    fn routing_tokens(&self) -> &[TokenizerKey] {
        &self.tokens
    }
}
