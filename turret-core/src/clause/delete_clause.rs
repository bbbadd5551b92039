//! Targets of `DELETE`: whole columns, list elements or map entries.

use crate::{HNil, ParamList, QueryCondition, QueryText};

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
