use crate::{
    Chained, Concat, Conditional, ConditionalQuery, Consistency, HNil, IfConditions, IfExists,
    Join, Limited, Modification, Ordered, ParamList, QueryBuilder, QueryText, Specified,
    Statement, Table, TokenizerKey, Unchained, Unlimited, Unordered, Unspecified,
    clause::{
        cas_clause::CasCondition,
        ordering_clause,
        update_clause::{self, Assignment},
        using_clause,
        where_clause::WhereCondition,
    },
};
use std::marker::PhantomData;

/// `UPDATE` statement before its assignments.
///
/// The `WHERE` chain comes first, [`modify`](UpdateQuery::modify) then moves to an
/// [`AssignmentsQuery`]. Each method is available only while its flag is still unset.
///
/// ```
/// use turret_core::{Column, PartitionKey, Regular, Statement, Table, TableRef};
/// struct Users {
///     table: TableRef,
///     id: Column<String, PartitionKey>,
///     city: Column<String, Regular>,
///     age: Column<i32, Regular>,
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
///     age: Column::new("age"),
/// };
/// let query = users
///     .update()
///     .where_(users.id.eq("test"))
///     .modify(users.city.set("London"))
///     .and(users.age.set(30))
///     .only_if(users.age.is_lt(30));
/// assert_eq!(
///     query.query_text().as_str(),
///     "UPDATE users SET city = 'London', age = 30 WHERE id = 'test' IF age < 30"
/// );
/// ```
///
/// `LIMIT` can be applied only once:
/// ```compile_fail
/// use turret_core::{Column, PartitionKey, Table, TableRef};
/// struct Users { table: TableRef, id: Column<String, PartitionKey> }
/// impl Table for Users { fn table_ref(&self) -> &TableRef { &self.table } }
/// let users = Users { table: TableRef::new("users"), id: Column::new("id") };
/// users.update().where_(users.id.eq("test")).limit(1).limit(2);
/// ```
pub struct UpdateQuery<
    't,
    T,
    L = Unlimited,
    O = Unordered,
    S = Unspecified,
    C = Unchained,
    P = HNil,
> {
    table: &'t T,
    qb: QueryText,
    consistency: Option<Consistency>,
    tokens: Vec<TokenizerKey>,
    _state: PhantomData<fn() -> (L, O, S, C, P)>,
}

impl<'t, T: Table> UpdateQuery<'t, T> {
    pub(crate) fn new(table: &'t T) -> Self {
        Self {
            table,
            qb: QueryText::empty(),
            consistency: None,
            tokens: Vec::new(),
            _state: PhantomData,
        }
    }
}

impl<'t, T, L, O, S, C, P> UpdateQuery<'t, T, L, O, S, C, P> {
    fn transition<L2, O2, S2, C2, P2>(
        self,
        qb: QueryText,
    ) -> UpdateQuery<'t, T, L2, O2, S2, C2, P2> {
        UpdateQuery {
            table: self.table,
            qb,
            consistency: self.consistency,
            tokens: self.tokens,
            _state: PhantomData,
        }
    }
    /// Text accumulated after `SET`: the `WHERE` chain and its modifiers.
    pub fn qb(&self) -> &QueryText {
        &self.qb
    }
}

impl<'t, T, S> UpdateQuery<'t, T, Unlimited, Unordered, S, Unchained, HNil> {
    pub fn where_<W: WhereCondition>(
        mut self,
        condition: W,
    ) -> UpdateQuery<'t, T, Unlimited, Unordered, S, Chained, W::Params> {
        let condition = condition.into_query_condition();
        self.tokens.extend(condition.tokens);
        let qb = self.qb.append(QueryBuilder::where_(condition.qb));
        self.transition(qb)
    }
}

impl<'t, T, S, P: ParamList> UpdateQuery<'t, T, Unlimited, Unordered, S, Chained, P> {
    pub fn and<W: WhereCondition>(
        mut self,
        condition: W,
    ) -> UpdateQuery<'t, T, Unlimited, Unordered, S, Chained, Join<P, W::Params>>
    where
        P: Concat<W::Params>,
    {
        let condition = condition.into_query_condition();
        self.tokens.extend(condition.tokens);
        let qb = self.qb.append(QueryBuilder::and(condition.qb));
        self.transition(qb)
    }
}

impl<'t, T, S, C, P> UpdateQuery<'t, T, Unlimited, Unordered, S, C, P> {
    pub fn order_by<I>(self, clauses: I) -> UpdateQuery<'t, T, Unlimited, Ordered, S, C, P>
    where
        I: IntoIterator<Item = ordering_clause::Condition>,
    {
        let qb = self.qb.append(QueryBuilder::order_by(clauses));
        self.transition(qb)
    }
}

impl<'t, T, O, S, C, P> UpdateQuery<'t, T, Unlimited, O, S, C, P> {
    pub fn limit(self, limit: u32) -> UpdateQuery<'t, T, Limited, O, S, C, P> {
        let qb = self.qb.append(QueryBuilder::limit(limit));
        self.transition(qb)
    }
}

impl<'t, T, L, O, C, P> UpdateQuery<'t, T, L, O, Unspecified, C, P> {
    pub fn consistency_level(
        mut self,
        level: Consistency,
    ) -> UpdateQuery<'t, T, L, O, Specified, C, P> {
        self.consistency = Some(level);
        let qb = self.qb.clone();
        self.transition(qb)
    }
}

impl<'t, T, L, O, S, P: ParamList> UpdateQuery<'t, T, L, O, S, Chained, P> {
    /// First assignment, `SET`.
    pub fn modify<A: ParamList>(
        self,
        assignment: update_clause::Condition<A>,
    ) -> AssignmentsQuery<'t, T, S, P, A> {
        AssignmentsQuery {
            table: self.table,
            where_qb: self.qb,
            assignments: vec![assignment.0.qb],
            using: Vec::new(),
            consistency: self.consistency,
            tokens: self.tokens,
            _state: PhantomData,
        }
    }
}

/// `UPDATE` statement with at least one assignment.
///
/// `WP` lists the placeholders of the `WHERE` chain and `SP` the ones of the assignments. The
/// assignments precede the `WHERE` clause in the text, the statement parameters are `SP` then
/// `WP`.
pub struct AssignmentsQuery<'t, T, S, WP, SP> {
    table: &'t T,
    where_qb: QueryText,
    assignments: Vec<QueryText>,
    using: Vec<using_clause::Condition>,
    consistency: Option<Consistency>,
    tokens: Vec<TokenizerKey>,
    _state: PhantomData<fn() -> (S, WP, SP)>,
}

impl<'t, T, S, WP, SP> AssignmentsQuery<'t, T, S, WP, SP> {
    fn transition<S2, SP2>(self) -> AssignmentsQuery<'t, T, S2, WP, SP2> {
        AssignmentsQuery {
            table: self.table,
            where_qb: self.where_qb,
            assignments: self.assignments,
            using: self.using,
            consistency: self.consistency,
            tokens: self.tokens,
            _state: PhantomData,
        }
    }
    /// Further assignment, an [`OptionalCondition`](update_clause::OptionalCondition) without
    /// value is left out.
    pub fn and<A: Assignment>(
        mut self,
        assignment: A,
    ) -> AssignmentsQuery<'t, T, S, WP, Join<SP, A::Params>>
    where
        SP: Concat<A::Params>,
    {
        if let Some(qb) = assignment.into_qb() {
            self.assignments.push(qb);
        }
        self.transition()
    }
    /// `USING TTL seconds`
    pub fn ttl(self, seconds: u32) -> Self {
        self.using(using_clause::Condition::ttl(seconds))
    }
    /// `USING TIMESTAMP microseconds`
    pub fn timestamp(self, microseconds: i64) -> Self {
        self.using(using_clause::Condition::timestamp(microseconds))
    }
    pub fn using(mut self, option: using_clause::Condition) -> Self {
        self.using.push(option);
        self
    }
    pub fn table(&self) -> &'t T {
        self.table
    }
}

impl<'t, T, WP, SP> AssignmentsQuery<'t, T, Unspecified, WP, SP> {
    pub fn consistency_level(
        mut self,
        level: Consistency,
    ) -> AssignmentsQuery<'t, T, Specified, WP, SP> {
        self.consistency = Some(level);
        self.transition()
    }
}

impl<'t, T, S, WP, SP> AssignmentsQuery<'t, T, S, WP, SP>
where
    T: Table,
    WP: ParamList,
    SP: Concat<WP>,
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

impl<'t, T, S, WP, SP> Statement for AssignmentsQuery<'t, T, S, WP, SP>
where
    T: Table,
    WP: ParamList,
    SP: Concat<WP>,
{
    type Params = Join<SP, WP>;
    fn query_text(&self) -> QueryText {
        QueryBuilder::update(self.table.table_ref().qb())
            .append(QueryBuilder::using(&self.using))
            .append(QueryBuilder::set(&self.assignments))
            .append(&self.where_qb)
    }
    fn consistency(&self) -> Option<Consistency> {
        self.consistency
    }
    fn routing_tokens(&self) -> &[TokenizerKey] {
        &self.tokens
    }
}

impl<'t, T, S, WP, SP> Modification for AssignmentsQuery<'t, T, S, WP, SP>
where
    T: Table,
    WP: ParamList,
    SP: Concat<WP>,
{
}

impl<'t, T, S, WP, SP> Conditional for AssignmentsQuery<'t, T, S, WP, SP>
where
    T: Table,
    WP: ParamList,
    SP: Concat<WP>,
{
}
