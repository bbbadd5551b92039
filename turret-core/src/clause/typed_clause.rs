//! Projections carrying the function that reads their result back from a row.

use crate::{AsValue, Column, ModifiableColumn, QueryBuilder, QueryText, Result, RowLabeled};
use std::{
    borrow::Cow,
    fmt::{self, Debug},
    sync::Arc,
};

type Extractor<R> = Arc<dyn Fn(&RowLabeled) -> Result<R> + Send + Sync>;

/// Anything that can follow `SELECT`.
///
/// ```
/// use turret_core::{
///     Column, PartitionKey, Regular, RowLabeled, Value, clause::typed_clause::Projection,
/// };
/// let id: Column<String, PartitionKey> = Column::new("id");
/// let age: Column<i32, Regular> = Column::new("age");
/// let projection = (id, age);
/// assert_eq!(projection.qb().as_str(), "id, age");
/// let row = RowLabeled::from_iter([
///     ("id", Value::Varchar(Some("test".into()))),
///     ("age", Value::Int32(Some(30))),
/// ]);
/// assert_eq!(projection.extract(&row).unwrap(), ("test".to_string(), 30));
/// ```
pub trait Projection {
    type Output;
    /// Push the projected expressions, left to right.
    fn push_fragments(&self, out: &mut Vec<QueryText>);
    /// Read the result from `row`.
    fn extract(&self, row: &RowLabeled) -> Result<Self::Output>;
    /// Comma separated projection text.
    fn qb(&self) -> QueryText {
        let mut fragments = Vec::new();
        self.push_fragments(&mut fragments);
        QueryText::join(fragments, ", ")
    }
}

/// Single projected expression yielding `R`.
pub struct Condition<R> {
    qb: QueryText,
    extractor: Extractor<R>,
}

impl<R: 'static> Condition<R> {
    pub fn new<F>(qb: QueryText, extractor: F) -> Self
    where
        F: Fn(&RowLabeled) -> Result<R> + Send + Sync + 'static,
    {
        Self {
            qb,
            extractor: Arc::new(extractor),
        }
    }
    /// Expression whose result is the row value labeled `label`.
    pub fn labeled(qb: QueryText, label: impl Into<Cow<'static, str>>) -> Self
    where
        R: AsValue,
    {
        let label = label.into();
        Self::new(qb, move |row| row.get::<R>(&label))
    }
    pub fn qb(&self) -> &QueryText {
        &self.qb
    }
    pub fn extract(&self, row: &RowLabeled) -> Result<R> {
        (self.extractor)(row)
    }
    /// Projection of both expressions, results in the same order.
    pub fn and<B: 'static>(self, other: Condition<B>) -> TypedProjection<(R, B)> {
        let (left, right) = (self.extractor, other.extractor);
        TypedProjection {
            fragments: vec![self.qb, other.qb],
            extractor: Arc::new(move |row: &RowLabeled| -> Result<(R, B)> {
                Ok((left(row)?, right(row)?))
            }),
        }
    }
}

impl<R> Clone for Condition<R> {
    fn clone(&self) -> Self {
        Self {
            qb: self.qb.clone(),
            extractor: self.extractor.clone(),
        }
    }
}

impl<R> Debug for Condition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Condition").field(&self.qb).finish()
    }
}

/// Ordered composition of typed conditions.
///
/// Fragments and extractors are kept in the same order, the extracted tuple lists the results
/// the way the expressions appear in the text.
pub struct TypedProjection<R> {
    fragments: Vec<QueryText>,
    extractor: Extractor<R>,
}

impl<R: 'static> TypedProjection<R> {
    pub fn fragments(&self) -> &[QueryText] {
        &self.fragments
    }
    pub fn extract(&self, row: &RowLabeled) -> Result<R> {
        (self.extractor)(row)
    }
    /// Append one more expression to the projection.
    pub fn and<B: 'static>(mut self, other: Condition<B>) -> TypedProjection<R::Output>
    where
        R: TupleAppend<B>,
    {
        let (left, right) = (self.extractor, other.extractor);
        self.fragments.push(other.qb);
        TypedProjection {
            fragments: self.fragments,
            extractor: Arc::new(move |row: &RowLabeled| -> Result<R::Output> {
                Ok(left(row)?.append(right(row)?))
            }),
        }
    }
}

impl<R> Clone for TypedProjection<R> {
    fn clone(&self) -> Self {
        Self {
            fragments: self.fragments.clone(),
            extractor: self.extractor.clone(),
        }
    }
}

impl<R> Debug for TypedProjection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedProjection")
            .field(&self.fragments)
            .finish()
    }
}

/// Tuple extended with one more trailing element.
pub trait TupleAppend<B> {
    type Output: 'static;
    fn append(self, value: B) -> Self::Output;
}

macro_rules! impl_tuple_append {
    ($($T:ident),+) => {
        impl<$($T: 'static,)+ B: 'static> TupleAppend<B> for ($($T,)+) {
            type Output = ($($T,)+ B);
            #[allow(non_snake_case)]
            fn append(self, value: B) -> Self::Output {
                let ($($T,)+) = self;
                ($($T,)+ value)
            }
        }
    };
}

impl_tuple_append!(A0, A1);
impl_tuple_append!(A0, A1, A2);
impl_tuple_append!(A0, A1, A2, A3);
impl_tuple_append!(A0, A1, A2, A3, A4);
impl_tuple_append!(A0, A1, A2, A3, A4, A5);
impl_tuple_append!(A0, A1, A2, A3, A4, A5, A6);
impl_tuple_append!(A0, A1, A2, A3, A4, A5, A6, A7);
impl_tuple_append!(A0, A1, A2, A3, A4, A5, A6, A7, A8);
impl_tuple_append!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_tuple_append!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);

/// `*`, yields the whole labeled row.
#[derive(Default, Clone, Copy, Debug)]
pub struct Star;

impl Projection for Star {
    type Output = RowLabeled;
    fn push_fragments(&self, out: &mut Vec<QueryText>) {
        out.push(QueryText::new_static("*"));
    }
    fn extract(&self, row: &RowLabeled) -> Result<RowLabeled> {
        Ok(row.clone())
    }
}

impl<R: 'static> Projection for Condition<R> {
    type Output = R;
    fn push_fragments(&self, out: &mut Vec<QueryText>) {
        out.push(self.qb.clone());
    }
    fn extract(&self, row: &RowLabeled) -> Result<R> {
        Condition::extract(self, row)
    }
}

impl<R: 'static> Projection for TypedProjection<R> {
    type Output = R;
    fn push_fragments(&self, out: &mut Vec<QueryText>) {
        out.extend(self.fragments.iter().cloned());
    }
    fn extract(&self, row: &RowLabeled) -> Result<R> {
        TypedProjection::extract(self, row)
    }
}

macro_rules! impl_projection_tuple {
    ($(($T:ident, $idx:tt)),+) => {
        impl<$($T: Projection),+> Projection for ($($T,)+) {
            type Output = ($($T::Output,)+);
            fn push_fragments(&self, out: &mut Vec<QueryText>) {
                $(self.$idx.push_fragments(out);)+
            }
            fn extract(&self, row: &RowLabeled) -> Result<Self::Output> {
                Ok(($(self.$idx.extract(row)?,)+))
            }
        }
    };
}

impl_projection_tuple!((P0, 0));
impl_projection_tuple!((P0, 0), (P1, 1));
impl_projection_tuple!((P0, 0), (P1, 1), (P2, 2));
impl_projection_tuple!((P0, 0), (P1, 1), (P2, 2), (P3, 3));
impl_projection_tuple!((P0, 0), (P1, 1), (P2, 2), (P3, 3), (P4, 4));
impl_projection_tuple!((P0, 0), (P1, 1), (P2, 2), (P3, 3), (P4, 4), (P5, 5));
impl_projection_tuple!(
    (P0, 0),
    (P1, 1),
    (P2, 2),
    (P3, 3),
    (P4, 4),
    (P5, 5),
    (P6, 6)
);
impl_projection_tuple!(
    (P0, 0),
    (P1, 1),
    (P2, 2),
    (P3, 3),
    (P4, 4),
    (P5, 5),
    (P6, 6),
    (P7, 7)
);
impl_projection_tuple!(
    (P0, 0),
    (P1, 1),
    (P2, 2),
    (P3, 3),
    (P4, 4),
    (P5, 5),
    (P6, 6),
    (P7, 7),
    (P8, 8)
);
impl_projection_tuple!(
    (P0, 0),
    (P1, 1),
    (P2, 2),
    (P3, 3),
    (P4, 4),
    (P5, 5),
    (P6, 6),
    (P7, 7),
    (P8, 8),
    (P9, 9)
);
impl_projection_tuple!(
    (P0, 0),
    (P1, 1),
    (P2, 2),
    (P3, 3),
    (P4, 4),
    (P5, 5),
    (P6, 6),
    (P7, 7),
    (P8, 8),
    (P9, 9),
    (P10, 10)
);
impl_projection_tuple!(
    (P0, 0),
    (P1, 1),
    (P2, 2),
    (P3, 3),
    (P4, 4),
    (P5, 5),
    (P6, 6),
    (P7, 7),
    (P8, 8),
    (P9, 9),
    (P10, 10),
    (P11, 11)
);

/// `COUNT(*)`
pub fn count() -> Condition<i64> {
    Condition::labeled(QueryBuilder::count(), "count")
}

/// `WRITETIME(column)`, microseconds since the epoch of the last write.
pub fn writetime<T, K: ModifiableColumn>(column: &Column<T, K>) -> Condition<i64> {
    Condition::labeled(
        QueryBuilder::writetime(column.name()),
        format!("writetime({})", column.name()),
    )
}

/// `TTL(column)`, remaining seconds or `None` when the value does not expire.
pub fn ttl<T, K: ModifiableColumn>(column: &Column<T, K>) -> Condition<Option<i32>> {
    Condition::labeled(
        QueryBuilder::ttl_of(column.name()),
        format!("ttl({})", column.name()),
    )
}
