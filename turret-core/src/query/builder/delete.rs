use crate::{
    Chained, Concat, Conditional, ConditionalQuery, Consistency, HNil, IfConditions, IfExists,
    Join, Modification, ParamList, QueryBuilder, QueryText, Specified, Statement, Table,
    TokenizerKey, Unchained, Unspecified,
    clause::{cas_clause::CasCondition, delete_clause, using_clause, where_clause::WhereCondition},
};
use std::marker::PhantomData;

/// `DELETE` statement.
///
/// `D` lists the placeholders of the deleted targets (`map[?]`), `P` the ones of the `WHERE`
/// chain. The statement is complete once the `WHERE` chain has started.
///
/// ```
/// use std::collections::BTreeMap;
/// use turret_core::{Column, PartitionKey, Regular, Statement, Table, TableRef};
/// struct Users {
///     table: TableRef,
///     id: Column<String, PartitionKey>,
///     city: Column<String, Regular>,
///     tags: Column<BTreeMap<String, String>, Regular>,
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
///     tags: Column::new("tags"),
/// };
/// let query = users
///     .delete_column(|t| t.city.delete())
///     .column(users.tags.delete_key("color"))
///     .where_(users.id.eq("test"))
///     .if_exists();
/// assert_eq!(
///     query.query_text().as_str(),
///     "DELETE city, tags['color'] FROM users WHERE id = 'test' IF EXISTS"
/// );
/// ```
pub struct DeleteQuery<'t, T, D = HNil, S = Unspecified, C = Unchained, P = HNil> {
    table: &'t T,
    targets: Vec<QueryText>,
    where_qb: QueryText,
    timestamp: Option<using_clause::Condition>,
    consistency: Option<Consistency>,
    tokens: Vec<TokenizerKey>,
    _state: PhantomData<fn() -> (D, S, C, P)>,
}

impl<'t, T: Table, D: ParamList> DeleteQuery<'t, T, D> {
    pub(crate) fn new(table: &'t T, target: delete_clause::Condition<D>) -> Self {
        let mut targets = Vec::new();
        if !target.qb().is_empty() {
            targets.push(target.0.qb);
        }
        Self {
            table,
            targets,
            where_qb: QueryText::empty(),
            timestamp: None,
            consistency: None,
            tokens: Vec::new(),
            _state: PhantomData,
        }
    }
}

impl<'t, T, D, S, C, P> DeleteQuery<'t, T, D, S, C, P> {
    fn transition<D2, S2, C2, P2>(self) -> DeleteQuery<'t, T, D2, S2, C2, P2> {
        DeleteQuery {
            table: self.table,
            targets: self.targets,
            where_qb: self.where_qb,
            timestamp: self.timestamp,
            consistency: self.consistency,
            tokens: self.tokens,
            _state: PhantomData,
        }
    }
    /// `USING TIMESTAMP microseconds`
    pub fn timestamp(mut self, microseconds: i64) -> Self {
        self.timestamp = Some(using_clause::Condition::timestamp(microseconds));
        self
    }
}

impl<'t, T, D: ParamList, S> DeleteQuery<'t, T, D, S, Unchained, HNil> {
    /// One more column or element to delete.
    pub fn column<D2: ParamList>(
        mut self,
        target: delete_clause::Condition<D2>,
    ) -> DeleteQuery<'t, T, Join<D, D2>, S, Unchained, HNil>
    where
        D: Concat<D2>,
    {
        self.targets.push(target.0.qb);
        self.transition()
    }
    pub fn where_<W: WhereCondition>(
        mut self,
        condition: W,
    ) -> DeleteQuery<'t, T, D, S, Chained, W::Params> {
        let condition = condition.into_query_condition();
        self.tokens.extend(condition.tokens);
        self.where_qb = QueryBuilder::where_(condition.qb);
        self.transition()
    }
}

impl<'t, T, D, S, P: ParamList> DeleteQuery<'t, T, D, S, Chained, P> {
    pub fn and<W: WhereCondition>(
        mut self,
        condition: W,
    ) -> DeleteQuery<'t, T, D, S, Chained, Join<P, W::Params>>
    where
        P: Concat<W::Params>,
    {
        let condition = condition.into_query_condition();
        self.tokens.extend(condition.tokens);
        self.where_qb = self.where_qb.append(QueryBuilder::and(condition.qb));
        self.transition()
    }
}

impl<'t, T, D, C, P> DeleteQuery<'t, T, D, Unspecified, C, P> {
    pub fn consistency_level(
        mut self,
        level: Consistency,
    ) -> DeleteQuery<'t, T, D, Specified, C, P> {
        self.consistency = Some(level);
        self.transition()
    }
}

impl<'t, T, D, S, P> DeleteQuery<'t, T, D, S, Chained, P>
where
    T: Table,
    D: Concat<P>,
    P: ParamList,
{
    /// `IF` followed by compare and set conditions.
    pub fn only_if<Q: CasCondition>(
        self,
        condition: Q,
    ) -> ConditionalQuery<Self, Q::Params, IfConditions> {
        ConditionalQuery::new(self, QueryBuilder::if_(condition.into_query_condition().qb))
    }
    /// `IF EXISTS`
    pub fn if_exists(self) -> ConditionalQuery<Self, HNil, IfExists> {
        ConditionalQuery::new(self, QueryBuilder::if_exists())
    }
}

impl<'t, T, D, S, P> Statement for DeleteQuery<'t, T, D, S, Chained, P>
where
    T: Table,
    D: Concat<P>,
    P: ParamList,
{
    type Params = Join<D, P>;
    fn query_text(&self) -> QueryText {
        QueryBuilder::delete(&self.targets, self.table.table_ref().qb())
            .append(QueryBuilder::using(&self.timestamp))
            .append(&self.where_qb)
    }
    fn consistency(&self) -> Option<Consistency> {
        self.consistency
    }
    fn routing_tokens(&self) -> &[TokenizerKey] {
        &self.tokens
    }
}

impl<'t, T, D, S, P> Modification for DeleteQuery<'t, T, D, S, Chained, P>
where
    T: Table,
    D: Concat<P>,
    P: ParamList,
{
}

impl<'t, T, D, S, P> Conditional for DeleteQuery<'t, T, D, S, Chained, P>
where
    T: Table,
    D: Concat<P>,
    P: ParamList,
{
}
