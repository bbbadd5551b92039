use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// Immutable fragment of CQL text.
///
/// Fragments are never modified in place, every operation returns a new `QueryText`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Debug)]
pub struct QueryText(Cow<'static, str>);

impl QueryText {
    pub const fn empty() -> Self {
        Self(Cow::Borrowed(""))
    }
    pub const fn new_static(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space separated concatenation, an empty side is ignored.
    ///
    /// ```
    /// use turret_core::QueryText;
    /// let text = QueryText::from("WHERE id = 1");
    /// assert_eq!(text.append(QueryText::empty()), text);
    /// assert_eq!(text.append("LIMIT 1").as_str(), "WHERE id = 1 LIMIT 1");
    /// ```
    pub fn append(&self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return Self::new(other.to_owned());
        }
        let mut result = String::with_capacity(self.len() + other.len() + 1);
        result.push_str(&self.0);
        result.push(' ');
        result.push_str(other);
        Self::new(result)
    }

    /// Space separated concatenation with `other` in front.
    pub fn prepend(&self, other: impl AsRef<str>) -> Self {
        QueryText::new(other.as_ref().to_owned()).append(self)
    }

    /// Concatenation without separator.
    pub fn concat(&self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        if other.is_empty() {
            return self.clone();
        }
        Self::new(format!("{}{}", self.0, other))
    }

    /// Surround the text with `open` and `close`.
    pub fn wrap(&self, open: &str, close: &str) -> Self {
        Self::new(format!("{open}{}{close}", self.0))
    }

    /// Join the non empty `fragments` using `separator`.
    pub fn join<I>(fragments: I, separator: &str) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut result = String::new();
        for fragment in fragments {
            let fragment = fragment.as_ref();
            if fragment.is_empty() {
                continue;
            }
            if !result.is_empty() {
                result.push_str(separator);
            }
            result.push_str(fragment);
        }
        Self::new(result)
    }

    /// Number of `?` bind markers, the ones inside string literals and quoted identifiers are
    /// not counted.
    ///
    /// ```
    /// use turret_core::QueryText;
    /// let text = QueryText::from("UPDATE t SET a = ?, b = 'why?' WHERE \"k?\" = ?");
    /// assert_eq!(text.placeholders(), 2);
    /// ```
    pub fn placeholders(&self) -> usize {
        let mut quote = None;
        let mut count = 0;
        for c in self.0.chars() {
            match (quote, c) {
                (None, '\'' | '"') => quote = Some(c),
                (Some(q), _) if q == c => quote = None,
                (None, '?') => count += 1,
                _ => {}
            }
        }
        count
    }
}

impl Display for QueryText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for QueryText {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for QueryText {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<QueryText> for String {
    fn from(value: QueryText) -> Self {
        value.0.into_owned()
    }
}
