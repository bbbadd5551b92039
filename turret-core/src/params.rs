use crate::{AsValue, Value};
use std::{
    fmt::{self, Debug},
    marker::PhantomData,
};

/// Empty parameter list.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HNil;

/// Parameter list with head `H` and tail `T`.
///
/// It has no runtime content, it only records the logical types of the placeholders a
/// fragment or a statement still expects.
pub struct HCons<H, T>(PhantomData<fn() -> (H, T)>);

impl<H, T> Default for HCons<H, T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<H, T> Clone for HCons<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T> Copy for HCons<H, T> {}

impl<H, T> Debug for HCons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HCons<{}, ..>", std::any::type_name::<H>())
    }
}

/// Ordered, statically known list of placeholder types.
pub trait ParamList {
    /// Number of placeholders.
    const LEN: usize;
    /// Push the type descriptor of each placeholder, in order.
    fn push_types(out: &mut Vec<Value>);
    /// Type descriptors of the placeholders, in order.
    ///
    /// ```
    /// use turret_core::{ParamList, Value, hlist};
    /// type P = hlist![i32, String];
    /// assert_eq!(P::LEN, 2);
    /// assert_eq!(P::types(), [Value::Int32(None), Value::Varchar(None)]);
    /// ```
    fn types() -> Vec<Value> {
        let mut result = Vec::with_capacity(Self::LEN);
        Self::push_types(&mut result);
        result
    }
}

impl ParamList for HNil {
    const LEN: usize = 0;
    fn push_types(_out: &mut Vec<Value>) {}
}

impl<H: AsValue, T: ParamList> ParamList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
    fn push_types(out: &mut Vec<Value>) {
        out.push(H::as_empty_value());
        T::push_types(out);
    }
}

/// Type level concatenation of two parameter lists.
pub trait Concat<R: ParamList>: ParamList {
    type Output: ParamList;
}

impl<R: ParamList> Concat<R> for HNil {
    type Output = R;
}

impl<H: AsValue, T: Concat<R>, R: ParamList> Concat<R> for HCons<H, T> {
    type Output = HCons<H, T::Output>;
}

/// Parameters of `A` followed by the parameters of `B`.
pub type Join<A, B> = <A as Concat<B>>::Output;

/// Parameter list type from a list of types.
///
/// `hlist![i32, String]` is `HCons<i32, HCons<String, HNil>>`.
#[macro_export]
macro_rules! hlist {
    () => { $crate::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::HCons<$head, $crate::hlist![$($tail),*]>
    };
}

/// Values that can be bound to the parameter list `P`.
///
/// Implemented for flat tuples: `("London", 5)` binds `hlist![String, i32]`.
pub trait IntoParams<P: ParamList> {
    /// Values in placeholder order.
    fn into_values(self) -> Vec<Value>;
}

impl IntoParams<HNil> for () {
    fn into_values(self) -> Vec<Value> {
        Vec::new()
    }
}

macro_rules! impl_into_params {
    ($(($T:ident, $V:ident, $idx:tt)),+) => {
        impl<$($T: AsValue, $V: Into<$T>),+> IntoParams<hlist![$($T),+]> for ($($V,)+) {
            fn into_values(self) -> Vec<Value> {
                vec![$(Into::<$T>::into(self.$idx).as_value()),+]
            }
        }
    };
}

impl_into_params!((T0, V0, 0));
impl_into_params!((T0, V0, 0), (T1, V1, 1));
impl_into_params!((T0, V0, 0), (T1, V1, 1), (T2, V2, 2));
impl_into_params!((T0, V0, 0), (T1, V1, 1), (T2, V2, 2), (T3, V3, 3));
impl_into_params!(
    (T0, V0, 0),
    (T1, V1, 1),
    (T2, V2, 2),
    (T3, V3, 3),
    (T4, V4, 4)
);
impl_into_params!(
    (T0, V0, 0),
    (T1, V1, 1),
    (T2, V2, 2),
    (T3, V3, 3),
    (T4, V4, 4),
    (T5, V5, 5)
);
impl_into_params!(
    (T0, V0, 0),
    (T1, V1, 1),
    (T2, V2, 2),
    (T3, V3, 3),
    (T4, V4, 4),
    (T5, V5, 5),
    (T6, V6, 6)
);
impl_into_params!(
    (T0, V0, 0),
    (T1, V1, 1),
    (T2, V2, 2),
    (T3, V3, 3),
    (T4, V4, 4),
    (T5, V5, 5),
    (T6, V6, 6),
    (T7, V7, 7)
);
impl_into_params!(
    (T0, V0, 0),
    (T1, V1, 1),
    (T2, V2, 2),
    (T3, V3, 3),
    (T4, V4, 4),
    (T5, V5, 5),
    (T6, V6, 6),
    (T7, V7, 7),
    (T8, V8, 8)
);
impl_into_params!(
    (T0, V0, 0),
    (T1, V1, 1),
    (T2, V2, 2),
    (T3, V3, 3),
    (T4, V4, 4),
    (T5, V5, 5),
    (T6, V6, 6),
    (T7, V7, 7),
    (T8, V8, 8),
    (T9, V9, 9)
);
impl_into_params!(
    (T0, V0, 0),
    (T1, V1, 1),
    (T2, V2, 2),
    (T3, V3, 3),
    (T4, V4, 4),
    (T5, V5, 5),
    (T6, V6, 6),
    (T7, V7, 7),
    (T8, V8, 8),
    (T9, V9, 9),
    (T10, V10, 10)
);
impl_into_params!(
    (T0, V0, 0),
    (T1, V1, 1),
    (T2, V2, 2),
    (T3, V3, 3),
    (T4, V4, 4),
    (T5, V5, 5),
    (T6, V6, 6),
    (T7, V7, 7),
    (T8, V8, 8),
    (T9, V9, 9),
    (T10, V10, 10),
    (T11, V11, 11)
);
