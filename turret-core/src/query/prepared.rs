use crate::{
    Consistency, IntoParams, ParamList, QueryText, SerialConsistency, TokenizerKey, Value,
    truncate_long,
};
use std::{
    fmt::{self, Debug, Display},
    marker::PhantomData,
};

/// Prepared statement manifest.
///
/// Holds the text together with the ordered types of its placeholders. Values are bound with
/// [`bind`](Self::bind), the tuple must match `P` or the call does not compile:
/// ```
/// use turret_core::{Column, PartitionKey, Regular, Statement, Table, TableRef};
/// struct Users {
///     table: TableRef,
///     id: Column<String, PartitionKey>,
///     city: Column<String, Regular>,
/// }
/// impl Table for Users {
///     fn table_ref(&self) -> &TableRef {
///         &self.table
///     }
/// }
/// let users = Users {
///     table: TableRef::new("users"),
///     id: Column::new("id"),
///     city: Column::new("city"),
/// };
/// let prepared = users
///     .update()
///     .where_(users.id.eq_param())
///     .modify(users.city.set_param())
///     .prepare();
/// let bound = prepared.bind(("London", "test"));
/// assert_eq!(bound.text.as_str(), "UPDATE users SET city = ? WHERE id = ?");
/// assert_eq!(bound.values.len(), 2);
/// ```
pub struct PreparedQuery<P> {
    text: QueryText,
    types: Vec<Value>,
    consistency: Option<Consistency>,
    serial_consistency: Option<SerialConsistency>,
    tokens: Vec<TokenizerKey>,
    _p: PhantomData<fn() -> P>,
}

impl<P: ParamList> PreparedQuery<P> {
    pub fn new(
        text: QueryText,
        consistency: Option<Consistency>,
        serial_consistency: Option<SerialConsistency>,
        tokens: Vec<TokenizerKey>,
    ) -> Self {
        Self {
            text,
            types: P::types(),
            consistency,
            serial_consistency,
            tokens,
            _p: PhantomData,
        }
    }
    pub fn text(&self) -> &QueryText {
        &self.text
    }
    /// Type descriptors of the placeholders, in order.
    pub fn types(&self) -> &[Value] {
        &self.types
    }
    pub fn consistency(&self) -> Option<Consistency> {
        self.consistency
    }
    pub fn serial_consistency(&self) -> Option<SerialConsistency> {
        self.serial_consistency
    }
    pub fn routing_tokens(&self) -> &[TokenizerKey] {
        &self.tokens
    }
    /// Bind one value per placeholder.
    pub fn bind(&self, values: impl IntoParams<P>) -> BoundQuery {
        BoundQuery {
            text: self.text.clone(),
            values: values.into_values(),
            consistency: self.consistency,
            serial_consistency: self.serial_consistency,
            tokens: self.tokens.clone(),
        }
    }
}

impl<P> Clone for PreparedQuery<P> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            types: self.types.clone(),
            consistency: self.consistency,
            serial_consistency: self.serial_consistency,
            tokens: self.tokens.clone(),
            _p: PhantomData,
        }
    }
}

impl<P> Debug for PreparedQuery<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedQuery")
            .field("text", &self.text)
            .field("types", &self.types)
            .field("consistency", &self.consistency)
            .field("serial_consistency", &self.serial_consistency)
            .finish()
    }
}

impl<P> Display for PreparedQuery<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.text.as_str()))
    }
}

/// Statement with every placeholder bound, ready to be sent.
#[derive(Clone, Debug)]
pub struct BoundQuery {
    pub text: QueryText,
    /// Values in placeholder order.
    pub values: Vec<Value>,
    pub consistency: Option<Consistency>,
    pub serial_consistency: Option<SerialConsistency>,
    pub tokens: Vec<TokenizerKey>,
}

impl Display for BoundQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.text.as_str()))
    }
}
