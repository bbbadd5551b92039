mod builder;
mod consistency;
mod prepared;
mod query_builder;
mod query_text;
mod statement;

pub use builder::*;
pub use consistency::*;
pub use prepared::*;
pub use query_builder::*;
pub use query_text::*;
pub use statement::*;
