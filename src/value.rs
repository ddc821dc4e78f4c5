use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value as Json;

use crate::capability::Record;
use crate::complex::{Complex32, Complex64};

/// A borrowed view of an operand, tagged by how it is compared.
///
/// Narrow scalars are widened losslessly: every signed integer becomes `Int`,
/// every unsigned one `Uint`, `f32` becomes `Float` and `Complex32` becomes
/// `Complex`.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Int(i128),
    Uint(u128),
    Float(f64),
    Complex(Complex64),
    Str(&'a str),
    Bool(bool),
    Record(&'a dyn Record),
    /// A shape with no ordering; the payload names it for diagnostics.
    Unsupported(&'static str),
}

impl Value<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Complex(_) => Kind::Complex,
            Value::Str(_) => Kind::Str,
            Value::Bool(_) => Kind::Bool,
            Value::Record(_) => Kind::Record,
            Value::Unsupported(name) => Kind::Unsupported(*name),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Complex(v) => f.debug_tuple("Complex").field(v).finish(),
            Value::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Record(_) => f.write_str("Record(..)"),
            Value::Unsupported(name) => f.debug_tuple("Unsupported").field(name).finish(),
        }
    }
}

/// The dispatch category of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Uint,
    Float,
    Complex,
    Str,
    Bool,
    Record,
    Unsupported(&'static str),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Complex => "complex",
            Kind::Str => "string",
            Kind::Bool => "bool",
            Kind::Record => "record",
            Kind::Unsupported(name) => *name,
        })
    }
}

/// Anything that can be handed to [`compare`](crate::compare).
///
/// References and smart pointers forward to their pointee, so `&&Box<u8>`
/// compares like `u8`. User types implement this through
/// [`comparable_record!`](crate::comparable_record).
pub trait Comparable {
    fn as_value(&self) -> Value<'_>;
}

impl Comparable for Value<'_> {
    fn as_value(&self) -> Value<'_> {
        *self
    }
}

macro_rules! impl_comparable {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl Comparable for $ty {
                fn as_value(&self) -> Value<'_> {
                    Value::$variant(*self as $wide)
                }
            }
        )+
    };
}

impl_comparable!(Int as i128: i8, i16, i32, i64, i128, isize);
impl_comparable!(Uint as u128: u8, u16, u32, u64, u128, usize);
impl_comparable!(Float as f64: f32, f64);

macro_rules! impl_unsupported {
    ($name:literal: $($ty:ty),+) => {
        $(
            impl Comparable for $ty {
                fn as_value(&self) -> Value<'_> {
                    Value::Unsupported($name)
                }
            }
        )+
    };
}

impl_unsupported!("unit": ());
impl_unsupported!("char": char);

impl Comparable for bool {
    fn as_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl Comparable for str {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Comparable for String {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Comparable for Complex32 {
    fn as_value(&self) -> Value<'_> {
        Value::Complex(Complex64::from(*self))
    }
}

impl Comparable for Complex64 {
    fn as_value(&self) -> Value<'_> {
        Value::Complex(*self)
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: Comparable + ?Sized> Comparable for &mut T {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: Comparable + ?Sized> Comparable for Box<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: Comparable + ?Sized> Comparable for Rc<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: Comparable + ?Sized> Comparable for Arc<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T> Comparable for Option<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("option")
    }
}

impl<T> Comparable for [T] {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("slice")
    }
}

impl<T, const N: usize> Comparable for [T; N] {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("array")
    }
}

impl<T> Comparable for Vec<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("vec")
    }
}

impl<T> Comparable for VecDeque<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("vec")
    }
}

impl<K, V, S> Comparable for HashMap<K, V, S> {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("map")
    }
}

impl<K, V> Comparable for BTreeMap<K, V> {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("map")
    }
}

impl<T, S> Comparable for HashSet<T, S> {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("set")
    }
}

impl<T> Comparable for BTreeSet<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Unsupported("set")
    }
}

/// JSON integers become `Int` whether serde_json stores them as `i64` or
/// `u64`; every other number becomes `Float`.
impl Comparable for Json {
    fn as_value(&self) -> Value<'_> {
        match self {
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Int(i128::from(u))
                } else {
                    n.as_f64().map_or(Value::Unsupported("number"), Value::Float)
                }
            }
            Json::String(s) => Value::Str(s),
            Json::Bool(b) => Value::Bool(*b),
            Json::Null => Value::Unsupported("null"),
            Json::Array(_) => Value::Unsupported("array"),
            Json::Object(_) => Value::Unsupported("object"),
        }
    }
}
