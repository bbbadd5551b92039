//! Assignments of `UPDATE ... SET`.

use crate::{HNil, ParamList, QueryCondition, QueryText};

/// Single assignment, `column = value` or one of the collection and counter forms.
#[derive(Clone, Debug)]
pub struct Condition<P = HNil>(pub(crate) QueryCondition<P>);

impl<P: ParamList> Condition<P> {
    pub(crate) fn new(qb: QueryText) -> Self {
        Self(QueryCondition::new(qb))
    }
    pub fn qb(&self) -> &QueryText {
        &self.0.qb
    }
}

/// Literal assignment that may be left out of the statement.
///
/// Only accepted after the first assignment, so an `UPDATE` always has a non empty `SET`. It never
/// carries a placeholder.
#[derive(Clone, Debug)]
pub struct OptionalCondition(pub(crate) Option<QueryText>);

impl OptionalCondition {
    pub fn qb(&self) -> Option<&QueryText> {
        self.0.as_ref()
    }
    pub fn is_skipped(&self) -> bool {
        self.0.is_none()
    }
}

/// Anything accepted after the first assignment.
pub trait Assignment {
    type Params: ParamList;
    /// Text of the assignment, `None` when it is left out.
    fn into_qb(self) -> Option<QueryText>;
}

impl<P: ParamList> Assignment for Condition<P> {
    type Params = P;
    fn into_qb(self) -> Option<QueryText> {
        Some(self.0.qb)
    }
}

impl Assignment for OptionalCondition {
    type Params = HNil;
    fn into_qb(self) -> Option<QueryText> {
        self.0
    }
}
