use rust_decimal::Decimal;
use std::borrow::Cow;
use time::{Date, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Payload of a CQL `counter` column.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Counter(pub i64);

/// Dynamic CQL value.
///
/// Every variant wraps an `Option`: a `None` payload still carries the CQL type, this is how
/// parameter lists describe the type of a placeholder that is not bound yet.
#[derive(Default, Clone, PartialEq, Debug)]
pub enum Value {
    /// Untyped null.
    #[default]
    Null,
    Boolean(Option<bool>),
    /// `tinyint`
    Int8(Option<i8>),
    /// `smallint`
    Int16(Option<i16>),
    /// `int`
    Int32(Option<i32>),
    /// `bigint`
    Int64(Option<i64>),
    /// `varint`
    Varint(Option<i128>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>),
    /// `text`
    Varchar(Option<Cow<'static, str>>),
    Blob(Option<Box<[u8]>>),
    Uuid(Option<Uuid>),
    Date(Option<Date>),
    Time(Option<Time>),
    /// `timestamp`, always UTC.
    Timestamp(Option<PrimitiveDateTime>),
    Counter(Option<i64>),
    /// Values and element type.
    List(Option<Vec<Value>>, Box<Value>),
    /// Values and element type.
    Set(Option<Vec<Value>>, Box<Value>),
    /// Entries, key type and value type.
    Map(Option<Vec<(Value, Value)>>, Box<Value>, Box<Value>),
    /// JSON document, stored as `text`.
    Json(Option<serde_json::Value>),
}

impl Value {
    /// True for `Null` and for any variant without payload.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(v) => v.is_none(),
            Value::Int8(v) => v.is_none(),
            Value::Int16(v) => v.is_none(),
            Value::Int32(v) => v.is_none(),
            Value::Int64(v) => v.is_none(),
            Value::Varint(v) => v.is_none(),
            Value::Float32(v) => v.is_none(),
            Value::Float64(v) => v.is_none(),
            Value::Decimal(v) => v.is_none(),
            Value::Varchar(v) => v.is_none(),
            Value::Blob(v) => v.is_none(),
            Value::Uuid(v) => v.is_none(),
            Value::Date(v) => v.is_none(),
            Value::Time(v) => v.is_none(),
            Value::Timestamp(v) => v.is_none(),
            Value::Counter(v) => v.is_none(),
            Value::List(v, ..) => v.is_none(),
            Value::Set(v, ..) => v.is_none(),
            Value::Map(v, ..) => v.is_none(),
            Value::Json(v) => v.is_none(),
        }
    }

    /// Same variant with the payload removed.
    pub fn as_null(&self) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Boolean(..) => Value::Boolean(None),
            Value::Int8(..) => Value::Int8(None),
            Value::Int16(..) => Value::Int16(None),
            Value::Int32(..) => Value::Int32(None),
            Value::Int64(..) => Value::Int64(None),
            Value::Varint(..) => Value::Varint(None),
            Value::Float32(..) => Value::Float32(None),
            Value::Float64(..) => Value::Float64(None),
            Value::Decimal(..) => Value::Decimal(None),
            Value::Varchar(..) => Value::Varchar(None),
            Value::Blob(..) => Value::Blob(None),
            Value::Uuid(..) => Value::Uuid(None),
            Value::Date(..) => Value::Date(None),
            Value::Time(..) => Value::Time(None),
            Value::Timestamp(..) => Value::Timestamp(None),
            Value::Counter(..) => Value::Counter(None),
            Value::List(_, elem) => Value::List(None, elem.clone()),
            Value::Set(_, elem) => Value::Set(None, elem.clone()),
            Value::Map(_, key, value) => Value::Map(None, key.clone(), value.clone()),
            Value::Json(..) => Value::Json(None),
        }
    }

    /// Name of the CQL type, collections include their element types.
    pub fn cql_type(&self) -> String {
        match self {
            Value::Null => "null".into(),
            Value::Boolean(..) => "boolean".into(),
            Value::Int8(..) => "tinyint".into(),
            Value::Int16(..) => "smallint".into(),
            Value::Int32(..) => "int".into(),
            Value::Int64(..) => "bigint".into(),
            Value::Varint(..) => "varint".into(),
            Value::Float32(..) => "float".into(),
            Value::Float64(..) => "double".into(),
            Value::Decimal(..) => "decimal".into(),
            Value::Varchar(..) | Value::Json(..) => "text".into(),
            Value::Blob(..) => "blob".into(),
            Value::Uuid(..) => "uuid".into(),
            Value::Date(..) => "date".into(),
            Value::Time(..) => "time".into(),
            Value::Timestamp(..) => "timestamp".into(),
            Value::Counter(..) => "counter".into(),
            Value::List(_, elem) => format!("list<{}>", elem.cql_type()),
            Value::Set(_, elem) => format!("set<{}>", elem.cql_type()),
            Value::Map(_, key, value) => format!("map<{}, {}>", key.cql_type(), value.cql_type()),
        }
    }
}
