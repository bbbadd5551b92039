use crate::{
    AsValue, Column, ColumnKind, Concat, Conditioned, Consistency, HNil, Join, Modification,
    ParamList, PrimaryKeyType, QueryBuilder, QueryText, Specified, Statement, Table,
    TokenizerKey, Unconditioned, Unspecified, clause::using_clause, hlist,
};
use std::marker::PhantomData;

/// No value yet.
#[derive(Default, Debug)]
pub struct NoValues;
/// At least one column value.
#[derive(Default, Debug)]
pub struct WithValues;
/// Whole row as a JSON document.
#[derive(Default, Debug)]
pub struct WithJson;

/// Bodies that can receive one more column value.
pub trait AcceptsValues {}
impl AcceptsValues for NoValues {}
impl AcceptsValues for WithValues {}

/// `INSERT` statement.
///
/// Values are given per column, the statement is complete once at least one value or a JSON
/// document is present.
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
///     table: TableRef::new("users"),
///     id: Column::new("id"),
///     city: Column::new("city"),
/// };
/// let query = users
///     .insert()
///     .value(|t| t.id, "test")
///     .value(|t| t.city, "London")
///     .if_not_exists()
///     .ttl(60);
/// assert_eq!(
///     query.query_text().as_str(),
///     "INSERT INTO users (id, city) VALUES ('test', 'London') IF NOT EXISTS USING TTL 60"
/// );
/// assert_eq!(query.routing_tokens().len(), 1);
/// ```
pub struct InsertQuery<'t, T, B = NoValues, E = Unconditioned, S = Unspecified, P = HNil> {
    table: &'t T,
    columns: Vec<QueryText>,
    values: Vec<QueryText>,
    json: Option<String>,
    if_not_exists: bool,
    using: Vec<using_clause::Condition>,
    consistency: Option<Consistency>,
    tokens: Vec<TokenizerKey>,
    _state: PhantomData<fn() -> (B, E, S, P)>,
}

impl<'t, T: Table> InsertQuery<'t, T> {
    pub(crate) fn new(table: &'t T) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
            json: None,
            if_not_exists: false,
            using: Vec::new(),
            consistency: None,
            tokens: Vec::new(),
            _state: PhantomData,
        }
    }
}

impl<'t, T, B, E, S, P> InsertQuery<'t, T, B, E, S, P> {
    fn transition<B2, E2, S2, P2>(self) -> InsertQuery<'t, T, B2, E2, S2, P2> {
        InsertQuery {
            table: self.table,
            columns: self.columns,
            values: self.values,
            json: self.json,
            if_not_exists: self.if_not_exists,
            using: self.using,
            consistency: self.consistency,
            tokens: self.tokens,
            _state: PhantomData,
        }
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
    fn render(&self, body: QueryText) -> QueryText {
        let mut qb = body;
        if self.if_not_exists {
            qb = qb.append(QueryBuilder::if_not_exists());
        }
        qb.append(QueryBuilder::using(&self.using))
    }
}

impl<'t, T, B: AcceptsValues, E, S, P> InsertQuery<'t, T, B, E, S, P> {
    /// Literal value of the column selected by `column`.
    pub fn value<V, K, F>(
        mut self,
        column: F,
        value: impl Into<V>,
    ) -> InsertQuery<'t, T, WithValues, E, S, P>
    where
        V: AsValue,
        K: ColumnKind,
        F: FnOnce(&T) -> Column<V, K>,
    {
        let column = column(self.table);
        let value = value.into().as_value();
        if K::PRIMARY_KEY == PrimaryKeyType::PartitionKey {
            self.tokens.push(TokenizerKey::new(column.name(), value.clone()));
        }
        self.columns.push(column.identifier());
        self.values.push(QueryBuilder::value(&value));
        self.transition()
    }
    /// Bind marker for the column selected by `column`.
    pub fn value_param<V, K, F>(
        mut self,
        column: F,
    ) -> InsertQuery<'t, T, WithValues, E, S, Join<P, hlist![V]>>
    where
        V: AsValue,
        K: ColumnKind,
        F: FnOnce(&T) -> Column<V, K>,
        P: Concat<hlist![V]>,
    {
        let column = column(self.table);
        self.columns.push(column.identifier());
        self.values.push(QueryBuilder::marker());
        self.transition()
    }
}

impl<'t, T, E, S, P> InsertQuery<'t, T, WithValues, E, S, P> {
    /// Value of the column selected by `column`, nothing is written for `None`.
    pub fn value_if_some<V, K, F>(self, column: F, value: Option<impl Into<V>>) -> Self
    where
        V: AsValue,
        K: ColumnKind,
        F: FnOnce(&T) -> Column<V, K>,
    {
        match value {
            Some(value) => self.value(column, value),
            None => self,
        }
    }
}

impl<'t, T, E, S> InsertQuery<'t, T, NoValues, E, S, HNil> {
    /// `INSERT INTO table JSON '...'`, missing columns are set to null.
    pub fn json(
        mut self,
        document: &serde_json::Value,
    ) -> InsertQuery<'t, T, WithJson, E, S, HNil> {
        self.json = Some(document.to_string());
        self.transition()
    }
}

impl<'t, T, B, S, P> InsertQuery<'t, T, B, Unconditioned, S, P> {
    pub fn if_not_exists(mut self) -> InsertQuery<'t, T, B, Conditioned, S, P> {
        self.if_not_exists = true;
        self.transition()
    }
}

impl<'t, T, B, E, P> InsertQuery<'t, T, B, E, Unspecified, P> {
    pub fn consistency_level(
        mut self,
        level: Consistency,
    ) -> InsertQuery<'t, T, B, E, Specified, P> {
        self.consistency = Some(level);
        self.transition()
    }
}

impl<'t, T: Table, E, S, P: ParamList> Statement for InsertQuery<'t, T, WithValues, E, S, P> {
    type Params = P;
    fn query_text(&self) -> QueryText {
        self.render(QueryBuilder::insert(
            self.table.table_ref().qb(),
            &self.columns,
            &self.values,
        ))
    }
    fn consistency(&self) -> Option<Consistency> {
        self.consistency
    }
    fn routing_tokens(&self) -> &[TokenizerKey] {
        &self.tokens
    }
}

impl<'t, T: Table, E, S> Statement for InsertQuery<'t, T, WithJson, E, S, HNil> {
    type Params = HNil;
    fn query_text(&self) -> QueryText {
        self.render(QueryBuilder::insert_json(
            self.table.table_ref().qb(),
            self.json.as_deref().unwrap_or("{}"),
        ))
    }
    fn consistency(&self) -> Option<Consistency> {
        self.consistency
    }
}

impl<'t, T: Table, E, S, P: ParamList> Modification for InsertQuery<'t, T, WithValues, E, S, P> {}

impl<'t, T: Table, E, S> Modification for InsertQuery<'t, T, WithJson, E, S, HNil> {}
