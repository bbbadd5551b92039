//! Statement builders.
//!
//! The state of every builder lives in its type parameters. Each method is implemented only
//! for the states where it is legal and returns the builder in its next state, an illegal chain
//! does not compile.

mod batch;
mod conditional;
mod delete;
mod insert;
mod select;
mod truncate;
mod update;

pub use batch::*;
pub use conditional::*;
pub use delete::*;
pub use insert::*;
pub use select::*;
pub use truncate::*;
pub use update::*;

/// No `LIMIT` yet.
#[derive(Default, Debug)]
pub struct Unlimited;
/// `LIMIT` applied.
#[derive(Default, Debug)]
pub struct Limited;

/// No `ORDER BY` yet.
#[derive(Default, Debug)]
pub struct Unordered;
/// `ORDER BY` applied.
#[derive(Default, Debug)]
pub struct Ordered;

/// Consistency level not set.
#[derive(Default, Debug)]
pub struct Unspecified;
/// Consistency level set.
#[derive(Default, Debug)]
pub struct Specified;

/// No `WHERE` yet.
#[derive(Default, Debug)]
pub struct Unchained;
/// `WHERE` started, further conditions go through `and`.
#[derive(Default, Debug)]
pub struct Chained;

/// No `IF` condition.
#[derive(Default, Debug)]
pub struct Unconditioned;
/// `IF NOT EXISTS` or `IF EXISTS` applied.
#[derive(Default, Debug)]
pub struct Conditioned;
