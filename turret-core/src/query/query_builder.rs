use crate::{
    BatchType, Operator, QueryText, Value, is_plain_identifier, print_date, print_timer,
    separated_by, write_escaped,
};
use std::fmt::Write;

/// CQL text formatting.
///
/// Every function is pure and total: it receives names or already serialized fragments and
/// returns a new `QueryText`. Statement builders and clause factories never write CQL keywords
/// themselves, they go through these functions.
#[derive(Default, Debug, Clone, Copy)]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Column, table or keyspace name, double quoted only when required.
    pub fn identifier(name: &str) -> QueryText {
        if is_plain_identifier(name) {
            return QueryText::new(name.to_owned());
        }
        let mut out = String::with_capacity(name.len() + 2);
        out.push('"');
        write_escaped(&mut out, name, '"');
        out.push('"');
        out.into()
    }

    /// Keyspace qualified table name, `keyspace` can be empty.
    pub fn keyspace(keyspace: &str, table: &str) -> QueryText {
        let table = Self::identifier(table);
        if keyspace.is_empty() {
            return table;
        }
        Self::identifier(keyspace).concat(".").concat(table)
    }

    /// Literal rendering of a value.
    pub fn value(value: &Value) -> QueryText {
        let mut out = String::new();
        Self::write_value(&mut out, value);
        out.into()
    }

    pub fn write_value(out: &mut String, value: &Value) {
        match value {
            Value::Boolean(Some(v)) => out.push_str(if *v { "true" } else { "false" }),
            Value::Int8(Some(v)) => out.push_str(itoa::Buffer::new().format(*v)),
            Value::Int16(Some(v)) => out.push_str(itoa::Buffer::new().format(*v)),
            Value::Int32(Some(v)) => out.push_str(itoa::Buffer::new().format(*v)),
            Value::Int64(Some(v)) | Value::Counter(Some(v)) => {
                out.push_str(itoa::Buffer::new().format(*v))
            }
            Value::Varint(Some(v)) => out.push_str(itoa::Buffer::new().format(*v)),
            Value::Float32(Some(v)) => write_float(out, *v),
            Value::Float64(Some(v)) => write_float(out, *v),
            Value::Decimal(Some(v)) => {
                let _ = write!(out, "{v}");
            }
            Value::Varchar(Some(v)) => write_string(out, v),
            Value::Blob(Some(v)) => {
                out.push_str("0x");
                out.push_str(&hex::encode(v));
            }
            Value::Uuid(Some(v)) => {
                let _ = write!(out, "{v}");
            }
            Value::Date(Some(v)) => {
                out.push('\'');
                print_date(out, v);
                out.push('\'');
            }
            Value::Time(Some(v)) => {
                out.push('\'');
                print_timer(out, v, false);
                out.push('\'');
            }
            Value::Timestamp(Some(v)) => {
                out.push('\'');
                print_date(out, &v.date());
                out.push(' ');
                print_timer(out, &v.time(), true);
                out.push_str("+0000'");
            }
            Value::List(Some(v), ..) => {
                out.push('[');
                separated_by(out, v, |out, v| Self::write_value(out, v), ", ");
                out.push(']');
            }
            Value::Set(Some(v), ..) => {
                out.push('{');
                separated_by(out, v, |out, v| Self::write_value(out, v), ", ");
                out.push('}');
            }
            Value::Map(Some(v), ..) => {
                out.push('{');
                separated_by(
                    out,
                    v,
                    |out, (k, v)| {
                        Self::write_value(out, k);
                        out.push_str(": ");
                        Self::write_value(out, v);
                    },
                    ", ",
                );
                out.push('}');
            }
            Value::Json(Some(v)) => write_string(out, &v.to_string()),
            _ => out.push_str("null"),
        }
    }

    /// Bind marker.
    pub const fn marker() -> QueryText {
        QueryText::new_static("?")
    }

    pub fn ascending(column: &str) -> QueryText {
        Self::identifier(column).append("ASC")
    }

    pub fn descending(column: &str) -> QueryText {
        Self::identifier(column).append("DESC")
    }

    pub fn order_by<I>(clauses: I) -> QueryText
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        QueryText::join(clauses, ", ").prepend("ORDER BY")
    }

    pub fn limit(limit: u32) -> QueryText {
        QueryText::new(format!("LIMIT {limit}"))
    }

    pub const fn allow_filtering() -> QueryText {
        QueryText::new_static("ALLOW FILTERING")
    }

    pub fn where_(condition: impl AsRef<str>) -> QueryText {
        QueryText::new(format!("WHERE {}", condition.as_ref()))
    }

    pub fn and(condition: impl AsRef<str>) -> QueryText {
        QueryText::new(format!("AND {}", condition.as_ref()))
    }

    /// `lhs operator rhs`, `lhs` is an already serialized operand.
    pub fn compare(lhs: impl AsRef<str>, operator: Operator, rhs: impl AsRef<str>) -> QueryText {
        QueryText::new(format!(
            "{} {} {}",
            lhs.as_ref(),
            operator.as_str(),
            rhs.as_ref()
        ))
    }

    /// Parenthesized, comma separated values.
    pub fn tuple<I>(values: I) -> QueryText
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        QueryText::join(values, ", ").wrap("(", ")")
    }

    pub fn function<I>(name: &str, args: I) -> QueryText
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        QueryText::join(args, ", ").wrap(&format!("{name}("), ")")
    }

    pub fn token<I>(args: I) -> QueryText
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::function("token", args)
    }

    pub fn if_(condition: impl AsRef<str>) -> QueryText {
        QueryText::new(format!("IF {}", condition.as_ref()))
    }

    pub const fn if_exists() -> QueryText {
        QueryText::new_static("IF EXISTS")
    }

    pub const fn if_not_exists() -> QueryText {
        QueryText::new_static("IF NOT EXISTS")
    }

    /// `USING` followed by the options joined with `AND`, empty without options.
    pub fn using<I>(options: I) -> QueryText
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let options = QueryText::join(options, " AND ");
        if options.is_empty() {
            return options;
        }
        options.prepend("USING")
    }

    pub fn ttl(seconds: u32) -> QueryText {
        QueryText::new(format!("TTL {seconds}"))
    }

    pub fn timestamp(microseconds: i64) -> QueryText {
        QueryText::new(format!("TIMESTAMP {microseconds}"))
    }

    pub fn select(projection: impl AsRef<str>, table: impl AsRef<str>) -> QueryText {
        QueryText::new(format!(
            "SELECT {} FROM {}",
            projection.as_ref(),
            table.as_ref()
        ))
    }

    pub const fn count() -> QueryText {
        QueryText::new_static("COUNT(*)")
    }

    pub fn writetime(column: &str) -> QueryText {
        Self::function("WRITETIME", [Self::identifier(column)])
    }

    pub fn ttl_of(column: &str) -> QueryText {
        Self::function("TTL", [Self::identifier(column)])
    }

    pub fn insert<C, V>(table: impl AsRef<str>, columns: C, values: V) -> QueryText
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        QueryText::new(format!(
            "INSERT INTO {} {} VALUES {}",
            table.as_ref(),
            Self::tuple(columns),
            Self::tuple(values)
        ))
    }

    pub fn insert_json(table: impl AsRef<str>, json: &str) -> QueryText {
        let mut out = format!("INSERT INTO {} JSON ", table.as_ref());
        write_string(&mut out, json);
        out.into()
    }

    pub fn update(table: impl AsRef<str>) -> QueryText {
        QueryText::new(format!("UPDATE {}", table.as_ref()))
    }

    pub fn set<I>(assignments: I) -> QueryText
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        QueryText::join(assignments, ", ").prepend("SET")
    }

    pub fn set_to(column: &str, value: impl AsRef<str>) -> QueryText {
        Self::compare(Self::identifier(column), Operator::Equal, value)
    }

    /// `column = column + value`
    pub fn append(column: &str, value: impl AsRef<str>) -> QueryText {
        let column = Self::identifier(column);
        QueryText::new(format!("{column} = {column} + {}", value.as_ref()))
    }

    /// `column = value + column`
    pub fn prepend(column: &str, value: impl AsRef<str>) -> QueryText {
        let column = Self::identifier(column);
        QueryText::new(format!("{column} = {} + {column}", value.as_ref()))
    }

    /// `column = column - value`
    pub fn discard(column: &str, value: impl AsRef<str>) -> QueryText {
        let column = Self::identifier(column);
        QueryText::new(format!("{column} = {column} - {}", value.as_ref()))
    }

    pub fn increment(column: &str, by: i64) -> QueryText {
        Self::append(column, itoa::Buffer::new().format(by))
    }

    pub fn decrement(column: &str, by: i64) -> QueryText {
        Self::discard(column, itoa::Buffer::new().format(by))
    }

    /// Collection element, `column[key]`.
    pub fn element(column: &str, key: impl AsRef<str>) -> QueryText {
        QueryText::new(format!("{}[{}]", Self::identifier(column), key.as_ref()))
    }

    /// `column[key] = value`
    pub fn put(column: &str, key: impl AsRef<str>, value: impl AsRef<str>) -> QueryText {
        Self::compare(Self::element(column, key), Operator::Equal, value)
    }

    /// `DELETE` with an optional list of columns.
    pub fn delete<I>(columns: I, table: impl AsRef<str>) -> QueryText
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        QueryText::join(columns, ", ")
            .prepend("DELETE")
            .append(format!("FROM {}", table.as_ref()))
    }

    pub fn truncate(table: impl AsRef<str>) -> QueryText {
        QueryText::new(format!("TRUNCATE {}", table.as_ref()))
    }

    /// Batch of statements, each one on its own line and terminated by a semicolon.
    pub fn batch<I>(batch_type: BatchType, using: impl AsRef<str>, statements: I) -> QueryText
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut out = QueryText::new(batch_type.begin())
            .append(using)
            .to_string();
        for statement in statements {
            out.push_str("\n    ");
            out.push_str(statement.as_ref());
            out.push(';');
        }
        out.push_str("\nAPPLY BATCH");
        out.into()
    }
}

fn write_string(out: &mut String, value: &str) {
    out.push('\'');
    write_escaped(out, value, '\'');
    out.push('\'');
}

fn write_float<F: ryu::Float + Into<f64>>(out: &mut String, value: F) {
    let wide: f64 = value.into();
    if wide.is_nan() {
        out.push_str("NaN");
    } else if wide.is_infinite() {
        out.push_str(if wide > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        out.push_str(ryu::Buffer::new().format_finite(value));
    }
}
