//! `ORDER BY` items, produced by clustering columns.

use crate::QueryText;
use std::iter;

/// `column ASC` or `column DESC`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Condition(pub(crate) QueryText);

impl Condition {
    pub(crate) fn new(qb: QueryText) -> Self {
        Self(qb)
    }
    pub fn qb(&self) -> &QueryText {
        &self.0
    }
}

impl IntoIterator for Condition {
    type Item = Condition;
    type IntoIter = iter::Once<Condition>;
    fn into_iter(self) -> Self::IntoIter {
        iter::once(self)
    }
}

impl AsRef<str> for Condition {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
