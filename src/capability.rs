use std::fmt;

/// A compound value that can summarize itself as an integer.
///
/// The hash code is used as an ordering surrogate, so two records compare
/// exactly as their hash codes do, whatever their fields hold.
pub trait HashCodeProvider {
    fn hash_code(&self) -> i64;
}

/// A compound value that can render itself as a string.
/// Every `Display` type is a `Stringer`.
pub trait Stringer {
    fn string(&self) -> String;
}

impl<T: fmt::Display + ?Sized> Stringer for T {
    fn string(&self) -> String {
        self.to_string()
    }
}

/// A user-defined compound value.
///
/// Comparison asks for the hash code first, then the string form, and gives up
/// when the two operands do not share either capability.
pub trait Record {
    fn as_hash_code(&self) -> Option<&dyn HashCodeProvider> {
        None
    }

    fn as_stringer(&self) -> Option<&dyn Stringer> {
        None
    }
}

/// Implements [`Comparable`](crate::Comparable) for one or more [`Record`] types.
///
/// ```
/// use cmpmode::{comparable_record, compare, CmpMode, HashCodeProvider, Record};
///
/// struct Ticket { id: i64 }
///
/// impl HashCodeProvider for Ticket {
///     fn hash_code(&self) -> i64 { self.id }
/// }
///
/// impl Record for Ticket {
///     fn as_hash_code(&self) -> Option<&dyn HashCodeProvider> { Some(self) }
/// }
///
/// comparable_record!(Ticket);
///
/// assert!(compare(&Ticket { id: 5 }, &Ticket { id: 9 }, CmpMode::Less));
/// ```
#[macro_export]
macro_rules! comparable_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Comparable for $ty {
                fn as_value(&self) -> $crate::Value<'_> {
                    $crate::Value::Record(self)
                }
            }
        )+
    };
}
