pub mod clause;
mod as_value;
mod column;
mod params;
mod query;
mod row;
mod table_ref;
mod util;
mod value;

pub use ::anyhow::Context as ErrorContext;
pub use as_value::*;
pub use clause::{QueryCondition, TokenizerKey, operator_clause::Operator};
pub use column::*;
pub use params::*;
pub use query::*;
pub use row::*;
pub use table_ref::*;
pub use util::*;
pub use value::*;

/// Result type.
pub type Result<T> = anyhow::Result<T>;
/// Error type.
pub type Error = anyhow::Error;
