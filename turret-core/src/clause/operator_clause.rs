//! Comparison operators applied to a column by [`Column::cmp`](crate::Column::cmp) and
//! [`Column::is_cmp`](crate::Column::is_cmp).
//!
//! ```
//! use turret_core::{ClusteringKey, Column, clause::operator_clause::{self, Operator}};
//! let at: Column<i64, ClusteringKey> = Column::new("at");
//! assert_eq!(at.cmp(operator_clause::gte(10)).qb().as_str(), "at >= 10");
//! assert_eq!(at.cmp(operator_clause::prepared(Operator::Less)).qb().as_str(), "at < ?");
//! ```

use crate::{AsValue, HNil, ParamList, QueryBuilder, QueryText, hlist};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    fmt::{self, Display},
    hash::Hash,
    marker::PhantomData,
};
use time::OffsetDateTime;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    In,
    Contains,
    ContainsKey,
}

impl Operator {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::In => "IN",
            Operator::Contains => "CONTAINS",
            Operator::ContainsKey => "CONTAINS KEY",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator with its right hand side, applicable to a column of type `T`.
pub trait Operation<T> {
    type Params: ParamList;
    fn operator(&self) -> Operator;
    fn operand(&self) -> QueryText;
}

/// Operator applied to a literal or to a function call.
#[derive(Debug)]
pub struct Condition<T> {
    operator: Operator,
    operand: QueryText,
    _t: PhantomData<fn() -> T>,
}

impl<T> Condition<T> {
    /// Operand already rendered, usually one of the functions of this module.
    pub fn function(operator: Operator, operand: QueryText) -> Self {
        Self {
            operator,
            operand,
            _t: PhantomData,
        }
    }
}

impl<T: AsValue> Condition<T> {
    pub fn new(operator: Operator, value: impl Into<T>) -> Self {
        Self::function(operator, QueryBuilder::value(&value.into().as_value()))
    }
}

impl<T> Clone for Condition<T> {
    fn clone(&self) -> Self {
        Self::function(self.operator, self.operand.clone())
    }
}

impl<T> Operation<T> for Condition<T> {
    type Params = HNil;
    fn operator(&self) -> Operator {
        self.operator
    }
    fn operand(&self) -> QueryText {
        self.operand.clone()
    }
}

/// Operator applied to a bind marker of type `T`.
#[derive(Debug)]
pub struct Prepared<T> {
    operator: Operator,
    _t: PhantomData<fn() -> T>,
}

impl<T> Prepared<T> {
    pub fn new(operator: Operator) -> Self {
        Self {
            operator,
            _t: PhantomData,
        }
    }
}

impl<T> Clone for Prepared<T> {
    fn clone(&self) -> Self {
        Self::new(self.operator)
    }
}

impl<T: AsValue> Operation<T> for Prepared<T> {
    type Params = hlist![T];
    fn operator(&self) -> Operator {
        self.operator
    }
    fn operand(&self) -> QueryText {
        QueryBuilder::marker()
    }
}

pub fn eq<T: AsValue>(value: impl Into<T>) -> Condition<T> {
    Condition::new(Operator::Equal, value)
}

pub fn ne<T: AsValue>(value: impl Into<T>) -> Condition<T> {
    Condition::new(Operator::NotEqual, value)
}

pub fn lt<T: AsValue>(value: impl Into<T>) -> Condition<T> {
    Condition::new(Operator::Less, value)
}

pub fn lte<T: AsValue>(value: impl Into<T>) -> Condition<T> {
    Condition::new(Operator::LessEqual, value)
}

pub fn gt<T: AsValue>(value: impl Into<T>) -> Condition<T> {
    Condition::new(Operator::Greater, value)
}

pub fn gte<T: AsValue>(value: impl Into<T>) -> Condition<T> {
    Condition::new(Operator::GreaterEqual, value)
}

/// `IN (a, b, ..)`
pub fn in_<T, V>(values: impl IntoIterator<Item = V>) -> Condition<T>
where
    T: AsValue,
    V: Into<T>,
{
    Condition::function(
        Operator::In,
        QueryBuilder::tuple(
            values
                .into_iter()
                .map(|v| QueryBuilder::value(&v.into().as_value())),
        ),
    )
}

/// Column types searchable with `CONTAINS`.
pub trait Collection {
    /// Type of the elements, the values for maps.
    type Element: AsValue;
}

/// Column types searchable with `CONTAINS KEY`.
pub trait KeyedCollection {
    type Key: AsValue;
}

impl<E: AsValue> Collection for Vec<E> {
    type Element = E;
}
impl<E: AsValue + Ord> Collection for BTreeSet<E> {
    type Element = E;
}
impl<E: AsValue + Eq + Hash> Collection for HashSet<E> {
    type Element = E;
}
impl<K, V: AsValue> Collection for BTreeMap<K, V> {
    type Element = V;
}
impl<K, V: AsValue> Collection for HashMap<K, V> {
    type Element = V;
}
impl<K: AsValue + Ord, V> KeyedCollection for BTreeMap<K, V> {
    type Key = K;
}
impl<K: AsValue + Eq + Hash, V> KeyedCollection for HashMap<K, V> {
    type Key = K;
}

/// `CONTAINS element`, for list, set and map columns.
///
/// The element must convert into the element type of the column:
/// ```compile_fail
/// use turret_core::clause::operator_clause;
/// operator_clause::contains::<Vec<i32>>("x");
/// ```
pub fn contains<C: Collection>(element: impl Into<C::Element>) -> Condition<C> {
    let element = element.into().as_value();
    Condition::function(Operator::Contains, QueryBuilder::value(&element))
}

/// `CONTAINS KEY key`, for map columns.
pub fn contains_key<C: KeyedCollection>(key: impl Into<C::Key>) -> Condition<C> {
    let key = key.into().as_value();
    Condition::function(Operator::ContainsKey, QueryBuilder::value(&key))
}

/// Operator applied to a bind marker.
pub fn prepared<T>(operator: Operator) -> Prepared<T> {
    Prepared::new(operator)
}

/// `now()`
pub fn now() -> QueryText {
    QueryBuilder::function("now", [] as [&str; 0])
}

/// `currentTimestamp()`
pub fn current_timestamp() -> QueryText {
    QueryBuilder::function("currentTimestamp", [] as [&str; 0])
}

/// `minTimeuuid('..')`, smallest time uuid generated at `at`.
pub fn min_timeuuid(at: OffsetDateTime) -> QueryText {
    QueryBuilder::function("minTimeuuid", [QueryBuilder::value(&at.as_value())])
}

/// `maxTimeuuid('..')`, greatest time uuid generated at `at`.
pub fn max_timeuuid(at: OffsetDateTime) -> QueryText {
    QueryBuilder::function("maxTimeuuid", [QueryBuilder::value(&at.as_value())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use uuid::Uuid;

    #[test]
    fn operands() {
        assert_eq!(Operation::<i32>::operand(&eq::<i32>(5)).as_str(), "5");
        assert_eq!(
            Operation::<String>::operand(&in_::<String, _>(["a", "b'c"])).as_str(),
            "('a', 'b''c')"
        );
        assert_eq!(
            Operation::<Vec<i32>>::operand(&contains::<Vec<i32>>(3)).as_str(),
            "3"
        );
        let key = contains_key::<BTreeMap<String, i64>>("k'");
        assert_eq!(
            Operation::<BTreeMap<String, i64>>::operand(&key).as_str(),
            "'k'''"
        );
        assert_eq!(
            Operation::<BTreeMap<String, i64>>::operator(&key),
            Operator::ContainsKey
        );
        assert_eq!(now().as_str(), "now()");
        assert_eq!(current_timestamp().as_str(), "currentTimestamp()");
        assert_eq!(
            min_timeuuid(datetime!(2013-02-02 10:00 UTC)).as_str(),
            "minTimeuuid('2013-02-02 10:00:00.000+0000')"
        );
        let cond = Condition::<Uuid>::function(
            Operator::Greater,
            max_timeuuid(datetime!(2013-01-01 00:00 UTC)),
        );
        assert_eq!(Operation::<Uuid>::operator(&cond), Operator::Greater);
    }
}
