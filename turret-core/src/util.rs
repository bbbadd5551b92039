use std::fmt::{self, Display, Write};

/// Write every element of `values` to `out` through `f`, separated by `separator`.
///
/// Elements that produce no output do not get a separator.
pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let start = out.len();
    for v in values {
        let len = out.len();
        if len > start {
            out.push_str(separator);
        }
        let separated = out.len();
        f(out, v);
        if out.len() == separated {
            out.truncate(len);
        }
    }
}

/// Write `value` doubling every occurrence of `quote`.
pub fn write_escaped(out: &mut String, value: &str, quote: char) {
    for c in value.chars() {
        if c == quote {
            out.push(quote);
        }
        out.push(c);
    }
}

/// Keywords that cannot be used as unquoted identifiers.
pub const CQL_RESERVED_KEYWORDS: [&str; 58] = [
    "add", "allow", "alter", "and", "apply", "asc", "authorize", "batch", "begin", "by",
    "columnfamily", "create", "default", "delete", "desc", "describe", "drop", "entries",
    "execute", "from", "full", "grant", "if", "in", "index", "infinity", "insert", "into", "is",
    "keyspace", "limit", "materialized", "modify", "nan", "norecursive", "not", "null", "of",
    "on", "or", "order", "primary", "rename", "replace", "revoke", "schema", "select", "set",
    "table", "to", "token", "truncate", "unlogged", "unset", "update", "use", "using", "where",
];

/// True when `name` can be written as a CQL identifier without double quotes.
///
/// Unquoted identifiers are case insensitive in CQL, only lowercase names survive unchanged.
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !CQL_RESERVED_KEYWORDS.contains(&name)
}

/// Write `date` as `YYYY-MM-DD`.
pub fn print_date(out: &mut String, date: &time::Date) {
    let _ = write!(
        out,
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    );
}

/// Write `time` as `hh:mm:ss`, followed by milliseconds when `millis` or by the significant
/// fraction digits otherwise.
pub fn print_timer(out: &mut String, time: &time::Time, millis: bool) {
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    );
    let nanos = time.nanosecond();
    if millis {
        let _ = write!(out, ".{:03}", nanos / 1_000_000);
    } else if nanos != 0 {
        let digits = format!("{nanos:09}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
}

/// Text cut at 497 bytes, on a char boundary, followed by `...` when something was removed.
///
/// Produced by [`truncate_long!`](crate::truncate_long).
#[derive(Clone, Copy, Debug)]
pub struct TruncatedText<'a>(pub &'a str);

impl Display for TruncatedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LIMIT: usize = 497;
        let text = self.0;
        let mut end = text.len().min(LIMIT);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        f.write_str(text[..end].trim())?;
        if text.len() > LIMIT {
            f.write_str("...")?;
        }
        Ok(())
    }
}

#[macro_export]
/// Truncate long strings for logging and error messages purpose.
///
/// Yields at most 497 bytes from the start of the input, never splitting a character, followed
/// by `...` when truncation occurred.
///
/// # Examples
/// ```
/// use turret_core::truncate_long;
/// let short = "SELECT * FROM users";
/// assert_eq!(format!("{}", truncate_long!(short)), "SELECT * FROM users");
/// let long = format!("SELECT {} FROM users", "x, ".repeat(300));
/// let logged = format!("{}", truncate_long!(long));
/// assert!(logged.starts_with("SELECT x, x,"));
/// assert!(logged.ends_with("..."));
/// let accented = format!("{}é", "a".repeat(496));
/// assert_eq!(format!("{}", truncate_long!(accented)), format!("{}...", "a".repeat(496)));
/// ```
macro_rules! truncate_long {
    ($query:expr) => {
        $crate::TruncatedText(&$query[..])
    };
}
