//! Clause families.
//!
//! Every module defines its own nominal condition types. They all wrap the same
//! [`QueryCondition`] but each statement builder only accepts the family matching the position
//! it is filling, so a compare-and-set condition can never end up in a `WHERE` clause.

pub mod cas_clause;
pub mod delete_clause;
pub mod operator_clause;
pub mod ordering_clause;
pub mod typed_clause;
pub mod update_clause;
pub mod using_clause;
pub mod where_clause;

use crate::{Concat, HNil, Join, ParamList, QueryBuilder, QueryText, Value};
use std::{
    borrow::Cow,
    fmt::{self, Debug},
    marker::PhantomData,
};

/// Partition key equality usable for token aware routing.
#[derive(Clone, PartialEq, Debug)]
pub struct TokenizerKey {
    /// Partition key column name.
    pub column: Cow<'static, str>,
    /// Value the column is compared to.
    pub value: Value,
}

impl TokenizerKey {
    pub fn new(column: impl Into<Cow<'static, str>>, value: Value) -> Self {
        Self {
            column: column.into(),
            value,
        }
    }
    /// `token(column)`
    pub fn token_expression(&self) -> QueryText {
        QueryBuilder::token([QueryBuilder::identifier(&self.column)])
    }
    /// `token(value)`
    pub fn token_value(&self) -> QueryText {
        QueryBuilder::token([QueryBuilder::value(&self.value)])
    }
}

/// Query text fragment together with the placeholders it introduces.
///
/// `P` lists the logical types of the `?` markers in `qb`, left to right. Conditions are pure
/// data, no validation happens at this level.
pub struct QueryCondition<P = HNil> {
    pub qb: QueryText,
    pub tokens: Vec<TokenizerKey>,
    _p: PhantomData<fn() -> P>,
}

impl<P: ParamList> QueryCondition<P> {
    pub fn new(qb: QueryText) -> Self {
        Self::with_tokens(qb, Vec::new())
    }
    pub fn with_tokens(qb: QueryText, tokens: Vec<TokenizerKey>) -> Self {
        Self {
            qb,
            tokens,
            _p: PhantomData,
        }
    }
    pub fn qb(&self) -> &QueryText {
        &self.qb
    }
    pub fn tokens(&self) -> &[TokenizerKey] {
        &self.tokens
    }
    /// Join two conditions with `separator`, parameters and tokens keep the textual order.
    pub fn join<R: ParamList>(
        mut self,
        other: QueryCondition<R>,
        separator: &str,
    ) -> QueryCondition<Join<P, R>>
    where
        P: Concat<R>,
    {
        self.tokens.extend(other.tokens);
        QueryCondition::with_tokens(
            QueryText::join([self.qb, other.qb], separator),
            self.tokens,
        )
    }
    /// Conjunction `self AND other`.
    pub fn and<R: ParamList>(self, other: QueryCondition<R>) -> QueryCondition<Join<P, R>>
    where
        P: Concat<R>,
    {
        self.join(other, " AND ")
    }
}

impl<P> Clone for QueryCondition<P> {
    fn clone(&self) -> Self {
        Self {
            qb: self.qb.clone(),
            tokens: self.tokens.clone(),
            _p: PhantomData,
        }
    }
}

impl<P> Debug for QueryCondition<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCondition")
            .field("qb", &self.qb)
            .field("tokens", &self.tokens)
            .finish()
    }
}
