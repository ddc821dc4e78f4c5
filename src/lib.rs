//! Mode-driven comparison of two values of the same type.
//!
//! ```
//! use cmpmode::{compare, CmpMode, Complex64};
//!
//! assert!(compare(&3_i16, &8, CmpMode::Less));
//! assert!(compare("b", "a", CmpMode::GreaterOrEqual));
//! assert!(compare(&Complex64::new(1.0, 2.0), &Complex64::new(1.0, 3.0), CmpMode::Less));
//! assert!(!compare(&true, &false, CmpMode::Less)); // bool only knows equality
//! ```
pub mod errors;
pub mod mode;
pub mod engine;
mod capability;
mod comparison;
mod complex;
mod value;

pub use capability::{HashCodeProvider, Record, Stringer};
pub use comparison::{cmp, cmp_code, cmp_complex};
pub use complex::{Complex, Complex32, Complex64};
pub use engine::{compare, compare_values, try_compare};
pub use errors::{CompareError, ParseComplexError, Result};
pub use mode::CmpMode;
pub use value::{Comparable, Kind, Value};
