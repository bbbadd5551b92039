use crate::{Counter, Error, Result, Value};
use anyhow::Context;
#[cfg(feature = "chrono")]
use chrono::{Datelike, Timelike};
use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use std::{
    any,
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::Hash,
};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};
use uuid::Uuid;

/// Convert both ways between Rust types and `Value`.
///
/// The Rust type implementing this trait is the logical type of a column and of every
/// placeholder bound to that column.
pub trait AsValue {
    /// Return a NULL equivalent variant for this type.
    fn as_empty_value() -> Value;
    /// Convert into owned `Value`.
    fn as_value(self) -> Value;
    /// Try to convert a dynamic `Value` into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

fn conversion_error<T>(value: &Value) -> Error {
    Error::msg(format!(
        "Cannot convert {value:?} to {}",
        any::type_name::<T>()
    ))
}

impl AsValue for Value {
    fn as_empty_value() -> Value {
        Value::Null
    }
    fn as_value(self) -> Value {
        self
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self as _))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                let integer: i128 = match value {
                    Value::Int8(Some(v)) => v as _,
                    Value::Int16(Some(v)) => v as _,
                    Value::Int32(Some(v)) => v as _,
                    Value::Int64(Some(v)) | Value::Counter(Some(v)) => v as _,
                    Value::Varint(Some(v)) => v,
                    Value::Decimal(Some(v)) if v.is_integer() => {
                        v.to_i128().ok_or_else(|| conversion_error::<Self>(&value))?
                    }
                    _ => return Err(conversion_error::<Self>(&value)),
                };
                <$source>::try_from(integer).map_err(|_| {
                    Error::msg(format!(
                        "Value {integer} is out of range for {}",
                        any::type_name::<Self>(),
                    ))
                })
            }
        }
    };
}
impl_as_value!(i8, Value::Int8);
impl_as_value!(i16, Value::Int16);
impl_as_value!(i32, Value::Int32);
impl_as_value!(i64, Value::Int64);
impl_as_value!(i128, Value::Varint);
// Unsigned integers use the next signed CQL type that can hold every value
impl_as_value!(u8, Value::Int16);
impl_as_value!(u16, Value::Int32);
impl_as_value!(u32, Value::Int64);
impl_as_value!(u64, Value::Varint);

impl AsValue for bool {
    fn as_empty_value() -> Value {
        Value::Boolean(None)
    }
    fn as_value(self) -> Value {
        Value::Boolean(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(Some(v)) => Ok(v),
            Value::Json(Some(serde_json::Value::Bool(v))) => Ok(v),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for f32 {
    fn as_empty_value() -> Value {
        Value::Float32(None)
    }
    fn as_value(self) -> Value {
        Value::Float32(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float32(Some(v)) => Ok(v),
            Value::Float64(Some(v)) if (v as f32) as f64 == v || !v.is_finite() => Ok(v as _),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for f64 {
    fn as_empty_value() -> Value {
        Value::Float64(None)
    }
    fn as_value(self) -> Value {
        Value::Float64(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float64(Some(v)) => Ok(v),
            Value::Float32(Some(v)) => Ok(v as _),
            Value::Int32(Some(v)) => Ok(v as _),
            Value::Json(Some(serde_json::Value::Number(ref v))) => {
                v.as_f64().ok_or_else(|| conversion_error::<Self>(&value))
            }
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for Decimal {
    fn as_empty_value() -> Value {
        Value::Decimal(None)
    }
    fn as_value(self) -> Value {
        Value::Decimal(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(Some(v)) => Ok(v),
            Value::Int32(Some(v)) => Ok(v.into()),
            Value::Int64(Some(v)) => Ok(v.into()),
            Value::Float64(Some(v)) => {
                Decimal::from_f64(v).ok_or_else(|| conversion_error::<Self>(&value))
            }
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for String {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.into()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Varchar(Some(v)) => Ok(v.into_owned()),
            Value::Json(Some(serde_json::Value::String(v))) => Ok(v),
            Value::Json(Some(v)) => Ok(v.to_string()),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for Cow<'static, str> {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        String::try_from_value(value).map(Into::into)
    }
}

impl AsValue for Box<[u8]> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(Some(v)) => Ok(v),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for Uuid {
    fn as_empty_value() -> Value {
        Value::Uuid(None)
    }
    fn as_value(self) -> Value {
        Value::Uuid(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(Some(v)) => Ok(v),
            Value::Varchar(Some(ref v)) => {
                Uuid::parse_str(v).with_context(|| format!("Invalid uuid text '{v}'"))
            }
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for Date {
    fn as_empty_value() -> Value {
        Value::Date(None)
    }
    fn as_value(self) -> Value {
        Value::Date(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Date(Some(v)) => Ok(v),
            Value::Timestamp(Some(v)) if v.time() == Time::MIDNIGHT => Ok(v.date()),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for Time {
    fn as_empty_value() -> Value {
        Value::Time(None)
    }
    fn as_value(self) -> Value {
        Value::Time(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Time(Some(v)) => Ok(v),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for PrimitiveDateTime {
    fn as_empty_value() -> Value {
        Value::Timestamp(None)
    }
    fn as_value(self) -> Value {
        Value::Timestamp(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(Some(v)) => Ok(v),
            Value::Date(Some(v)) => Ok(v.midnight()),
            // Milliseconds since the epoch, the wire representation of timestamp
            Value::Int64(Some(v)) => {
                let v = OffsetDateTime::from_unix_timestamp_nanos(v as i128 * 1_000_000)
                    .with_context(|| format!("Timestamp {v}ms is out of range"))?;
                Ok(PrimitiveDateTime::new(v.date(), v.time()))
            }
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for OffsetDateTime {
    fn as_empty_value() -> Value {
        Value::Timestamp(None)
    }
    fn as_value(self) -> Value {
        let utc = self.to_offset(UtcOffset::UTC);
        Value::Timestamp(Some(PrimitiveDateTime::new(utc.date(), utc.time())))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        PrimitiveDateTime::try_from_value(value).map(PrimitiveDateTime::assume_utc)
    }
}

impl AsValue for Counter {
    fn as_empty_value() -> Value {
        Value::Counter(None)
    }
    fn as_value(self) -> Value {
        Value::Counter(Some(self.0))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Counter(Some(v)) | Value::Int64(Some(v)) => Ok(Counter(v)),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl AsValue for serde_json::Value {
    fn as_empty_value() -> Value {
        Value::Json(None)
    }
    fn as_value(self) -> Value {
        Value::Json(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Json(Some(v)) => Ok(v),
            Value::Varchar(Some(v)) => {
                serde_json::from_str(&v).with_context(|| format!("Invalid json text '{v}'"))
            }
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(if value.is_null() {
            None
        } else {
            Some(<T as AsValue>::try_from_value(value)?)
        })
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn as_empty_value() -> Value {
        Value::List(None, Box::new(T::as_empty_value()))
    }
    fn as_value(self) -> Value {
        Value::List(
            Some(self.into_iter().map(AsValue::as_value).collect()),
            Box::new(T::as_empty_value()),
        )
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            // Cassandra returns null for empty collections
            Value::List(None, ..) | Value::Set(None, ..) => Ok(Vec::new()),
            Value::List(Some(v), ..) | Value::Set(Some(v), ..) => v
                .into_iter()
                .map(<T as AsValue>::try_from_value)
                .collect::<Result<_>>(),
            _ => Err(conversion_error::<Self>(&value)),
        }
    }
}

macro_rules! impl_as_value {
    ($source:ident, $($key_trait:ident),+) => {
        impl<T: AsValue $(+ $key_trait)+> AsValue for $source<T> {
            fn as_empty_value() -> Value {
                Value::Set(None, Box::new(T::as_empty_value()))
            }
            fn as_value(self) -> Value {
                Value::Set(
                    Some(self.into_iter().map(AsValue::as_value).collect()),
                    Box::new(T::as_empty_value()),
                )
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    Value::Set(None, ..) | Value::List(None, ..) => Ok($source::new()),
                    Value::Set(Some(v), ..) | Value::List(Some(v), ..) => v
                        .into_iter()
                        .map(<T as AsValue>::try_from_value)
                        .collect::<Result<_>>(),
                    _ => Err(conversion_error::<Self>(&value)),
                }
            }
        }
    };
}
impl_as_value!(BTreeSet, Ord);
impl_as_value!(HashSet, Eq, Hash);

macro_rules! impl_as_value {
    ($source:ident, $($key_trait:ident),+) => {
        impl<K: AsValue $(+ $key_trait)+, V: AsValue> AsValue for $source<K, V> {
            fn as_empty_value() -> Value {
                Value::Map(None, K::as_empty_value().into(), V::as_empty_value().into())
            }
            fn as_value(self) -> Value {
                Value::Map(
                    Some(
                        self.into_iter()
                            .map(|(k, v)| (k.as_value(), v.as_value()))
                            .collect(),
                    ),
                    K::as_empty_value().into(),
                    V::as_empty_value().into(),
                )
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    Value::Map(None, ..) => Ok($source::new()),
                    Value::Map(Some(v), ..) => v
                        .into_iter()
                        .map(|(k, v)| {
                            Ok((
                                <K as AsValue>::try_from_value(k)?,
                                <V as AsValue>::try_from_value(v)?,
                            ))
                        })
                        .collect::<Result<_>>(),
                    _ => Err(conversion_error::<Self>(&value)),
                }
            }
        }
    };
}
impl_as_value!(BTreeMap, Ord);
impl_as_value!(HashMap, Eq, Hash);

#[cfg(feature = "chrono")]
impl AsValue for chrono::NaiveDate {
    fn as_empty_value() -> Value {
        Value::Date(None)
    }
    fn as_value(self) -> Value {
        Value::Date(
            time::Month::try_from(self.month() as u8)
                .and_then(|month| Date::from_calendar_date(self.year(), month, self.day() as _))
                .inspect_err(|e| {
                    log::error!("Could not create a Value::Date from chrono::NaiveDate: {e:?}");
                })
                .ok(),
        )
    }
    fn try_from_value(value: Value) -> Result<Self> {
        let context = format!("Could not create a chrono::NaiveDate from {value:?}");
        let v = Date::try_from_value(value).context(context.clone())?;
        chrono::NaiveDate::from_ymd_opt(v.year(), v.month() as u8 as _, v.day() as _)
            .context(context)
    }
}

#[cfg(feature = "chrono")]
impl AsValue for chrono::NaiveTime {
    fn as_empty_value() -> Value {
        Value::Time(None)
    }
    fn as_value(self) -> Value {
        Value::Time(
            Time::from_hms_nano(
                self.hour() as _,
                self.minute() as _,
                self.second() as _,
                self.nanosecond() as _,
            )
            .inspect_err(|e| {
                log::error!("Could not create a Value::Time from chrono::NaiveTime: {e:?}");
            })
            .ok(),
        )
    }
    fn try_from_value(value: Value) -> Result<Self> {
        let context = format!("Could not create a chrono::NaiveTime from {value:?}");
        let v = Time::try_from_value(value).context(context.clone())?;
        Self::from_hms_nano_opt(
            v.hour() as _,
            v.minute() as _,
            v.second() as _,
            v.nanosecond() as _,
        )
        .context(context)
    }
}

#[cfg(feature = "chrono")]
impl AsValue for chrono::NaiveDateTime {
    fn as_empty_value() -> Value {
        Value::Timestamp(None)
    }
    fn as_value(self) -> Value {
        let date = Date::try_from_value(self.date().as_value());
        let time = Time::try_from_value(self.time().as_value());
        Value::Timestamp(match (date, time) {
            (Ok(date), Ok(time)) => Some(PrimitiveDateTime::new(date, time)),
            _ => None,
        })
    }
    fn try_from_value(value: Value) -> Result<Self> {
        let context = format!("Could not create a chrono::NaiveDateTime from {value:?}");
        let v = PrimitiveDateTime::try_from_value(value).context(context.clone())?;
        let date = chrono::NaiveDate::try_from_value(v.date().as_value())
            .context(context.clone())?;
        let time = chrono::NaiveTime::try_from_value(v.time().as_value()).context(context)?;
        Ok(Self::new(date, time))
    }
}

#[cfg(feature = "chrono")]
impl AsValue for chrono::DateTime<chrono::Utc> {
    fn as_empty_value() -> Value {
        Value::Timestamp(None)
    }
    fn as_value(self) -> Value {
        self.naive_utc().as_value()
    }
    fn try_from_value(value: Value) -> Result<Self> {
        chrono::NaiveDateTime::try_from_value(value).map(|v| v.and_utc())
    }
}
