use tracing::{debug, trace};

use crate::capability::Record;
use crate::comparison::{cmp, cmp_complex};
use crate::errors::{CompareError, Result};
use crate::mode::CmpMode;
use crate::value::{Comparable, Kind, Value};

/// Returns whether `a <mode> b` holds.
///
/// Combinations without a meaningful answer (containers, records without a
/// shared capability, bool under an ordering mode) evaluate to `false`; use
/// [`try_compare`] to find out why.
pub fn compare<T>(a: &T, b: &T, mode: CmpMode) -> bool
where
    T: Comparable + ?Sized,
{
    match try_compare(a, b, mode) {
        Ok(holds) => holds,
        Err(err) => {
            debug!(%err, %mode, "unsupported comparison evaluated as false");
            false
        }
    }
}

/// Like [`compare`], but reports unsupported combinations as errors.
pub fn try_compare<T>(a: &T, b: &T, mode: CmpMode) -> Result<bool>
where
    T: Comparable + ?Sized,
{
    compare_values(a.as_value(), b.as_value(), mode)
}

/// Compares two dynamically tagged values. The kind of `a` selects the routine;
/// `b` has to be of the same kind.
pub fn compare_values(a: Value<'_>, b: Value<'_>, mode: CmpMode) -> Result<bool> {
    if let Value::Unsupported(_) = a {
        return Err(CompareError::Unsupported { kind: a.kind() });
    }
    match (a, b) {
        (Value::Record(x), Value::Record(y)) => compare_records(x, y, mode),
        (Value::Int(x), Value::Int(y)) => Ok(cmp(&x, &y, mode)),
        (Value::Uint(x), Value::Uint(y)) => Ok(cmp(&x, &y, mode)),
        (Value::Float(x), Value::Float(y)) => Ok(cmp(&x, &y, mode)),
        (Value::Complex(x), Value::Complex(y)) => Ok(cmp_complex(&x, &y, mode)),
        (Value::Str(x), Value::Str(y)) => Ok(cmp(x, y, mode)),
        (Value::Bool(x), Value::Bool(y)) => match mode {
            CmpMode::Equal => Ok(x == y),
            _ => Err(CompareError::UnsupportedMode { kind: Kind::Bool, mode }),
        },
        (_, Value::Unsupported(_)) => Err(CompareError::Unsupported { kind: b.kind() }),
        _ => Err(CompareError::KindMismatch {
            left: a.kind(),
            right: b.kind(),
        }),
    }
}

// Hash codes win over string forms; both operands must offer the capability.
fn compare_records(a: &dyn Record, b: &dyn Record, mode: CmpMode) -> Result<bool> {
    if let (Some(x), Some(y)) = (a.as_hash_code(), b.as_hash_code()) {
        let (hx, hy) = (x.hash_code(), y.hash_code());
        trace!(left = hx, right = hy, "comparing records by hash code");
        return Ok(cmp(&hx, &hy, mode));
    }
    if let (Some(x), Some(y)) = (a.as_stringer(), b.as_stringer()) {
        let (sx, sy) = (x.string(), y.string());
        trace!(left = %sx, right = %sy, "comparing records by string form");
        return Ok(cmp(sx.as_str(), sy.as_str(), mode));
    }
    Err(CompareError::Unsupported { kind: Kind::Record })
}
