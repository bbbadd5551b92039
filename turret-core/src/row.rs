use crate::{AsValue, Error, ErrorContext, Result, Value};
use std::{iter, slice, sync::Arc};

/// Shared column names.
pub type RowNames = Arc<[String]>;
/// Row values matching `RowNames`.
pub type Row = Box<[Value]>;

/// Row with column labels.
///
/// Random access: every extractor of a projection reads the same row.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct RowLabeled {
    /// Column names.
    pub labels: RowNames,
    /// Column values.
    pub values: Row,
}

impl RowLabeled {
    pub fn new(names: RowNames, values: Row) -> Self {
        Self {
            labels: names,
            values,
        }
    }
    /// Column labels.
    pub fn names(&self) -> &[String] {
        &self.labels
    }
    /// Row values.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    /// Get value by column name.
    pub fn get_column(&self, name: &str) -> Option<&Value> {
        self.labels
            .iter()
            .position(|v| v == name)
            .and_then(|i| self.values.get(i))
    }
    /// Get the value of a column converted to `T`.
    pub fn get<T: AsValue>(&self, name: &str) -> Result<T> {
        let value = self
            .get_column(name)
            .ok_or_else(|| Error::msg(format!("Column `{name}` is missing from the row")))?;
        T::try_from_value(value.clone())
            .with_context(|| format!("While decoding column `{name}`"))
    }
    /// Column count.
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'s> IntoIterator for &'s RowLabeled {
    type Item = (&'s String, &'s Value);
    type IntoIter = iter::Zip<slice::Iter<'s, String>, slice::Iter<'s, Value>>;
    fn into_iter(self) -> Self::IntoIter {
        iter::zip(self.labels.iter(), self.values.iter())
    }
}

impl<L, V> FromIterator<(L, V)> for RowLabeled
where
    L: Into<String>,
    V: AsValue,
{
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let (labels, values): (Vec<String>, Vec<Value>) = iter
            .into_iter()
            .map(|(l, v)| (l.into(), v.as_value()))
            .unzip();
        Self::new(labels.into(), values.into())
    }
}
