use crate::{Consistency, HNil, QueryBuilder, QueryText, Statement, Table};

/// `TRUNCATE` statement, removes every row of the table.
#[derive(Debug)]
pub struct TruncateQuery<'t, T> {
    table: &'t T,
    consistency: Option<Consistency>,
}

impl<'t, T: Table> TruncateQuery<'t, T> {
    pub(crate) fn new(table: &'t T) -> Self {
        Self {
            table,
            consistency: None,
        }
    }
    pub fn consistency_level(mut self, level: Consistency) -> Self {
        self.consistency = Some(level);
        self
    }
}

impl<'t, T: Table> Statement for TruncateQuery<'t, T> {
    type Params = HNil;
    fn query_text(&self) -> QueryText {
        QueryBuilder::truncate(self.table.table_ref().qb())
    }
    fn consistency(&self) -> Option<Consistency> {
        self.consistency
    }
}
