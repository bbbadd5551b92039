use crate::{
    Consistency, ParamList, PreparedQuery, QueryText, SerialConsistency, TokenizerKey,
    truncate_long,
};

/// Complete CQL statement.
///
/// Implemented by every builder state that forms a valid statement.
pub trait Statement {
    /// Types of the `?` placeholders, left to right.
    type Params: ParamList;

    /// Final statement text.
    fn query_text(&self) -> QueryText;

    /// Requested consistency level, `None` leaves the session default.
    fn consistency(&self) -> Option<Consistency> {
        None
    }

    /// Requested serial consistency level of conditional statements.
    fn serial_consistency(&self) -> Option<SerialConsistency> {
        None
    }

    /// Partition keys known from the `WHERE` clause or the inserted values.
    fn routing_tokens(&self) -> &[TokenizerKey] {
        &[]
    }

    /// Statement text as an owned string.
    fn build(&self) -> String {
        let text = self.query_text();
        log::trace!("Building {}", truncate_long!(text.as_str()));
        text.into()
    }

    /// Manifest handed to the execution layer: text, placeholder types and options.
    fn prepare(&self) -> PreparedQuery<Self::Params> {
        let text = self.query_text();
        let placeholders = text.placeholders();
        if placeholders != Self::Params::LEN {
            log::error!(
                "Statement has {} placeholders but expects {} parameters: {}",
                placeholders,
                Self::Params::LEN,
                truncate_long!(text.as_str()),
            );
        }
        log::debug!("Preparing {}", truncate_long!(text.as_str()));
        PreparedQuery::new(
            text,
            self.consistency(),
            self.serial_consistency(),
            self.routing_tokens().to_vec(),
        )
    }
}

/// Statements that modify data, the ones allowed inside a batch.
pub trait Modification: Statement {}
