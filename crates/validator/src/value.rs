//! Runtime field values
//!
//! The engine never sees host types directly. A field enumerator converts
//! each field into a [`FieldValue`] through the [`FieldType`] trait, which
//! also supplies the [`TypeDescriptor`] used for classification.

use crate::category::TypeDescriptor;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A field's value, as seen by rule handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Any signed integer.
    Int(i128),
    /// Any unsigned integer.
    Uint(u128),
    /// `f32` or `f64`.
    Float(f64),
    /// Text.
    Str(String),
    /// A boolean.
    Bool(bool),
    /// A point in time with its offset.
    Timestamp(DateTime<FixedOffset>),
    /// A sequence of values.
    Array(Vec<FieldValue>),
    /// A caller-defined value only custom handlers understand.
    Opaque(OpaqueValue),
}

impl FieldValue {
    /// Short name of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "a signed integer",
            Self::Uint(_) => "an unsigned integer",
            Self::Float(_) => "a float",
            Self::Str(_) => "a string",
            Self::Bool(_) => "a bool",
            Self::Timestamp(_) => "a timestamp",
            Self::Array(_) => "an array",
            Self::Opaque(_) => "an opaque value",
        }
    }

    /// The text, when this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, when this is an array value.
    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The instant, when this is a timestamp value.
    pub fn as_timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    /// Downcasts an opaque value to its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(opaque) => opaque.downcast_ref(),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%-m-%-d %-H:%-M:%-S")),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Opaque(opaque) => f.write_str(opaque.display()),
        }
    }
}

// ============================================================================
// OPAQUE VALUE
// ============================================================================

/// A type-erased value plus the text used for it in messages.
///
/// Two opaque values are equal when their display text is equal.
#[derive(Clone)]
pub struct OpaqueValue {
    display: String,
    inner: Arc<dyn Any + Send + Sync>,
}

impl OpaqueValue {
    /// Wraps a value together with its message text.
    pub fn new<T: Any + Send + Sync>(value: T, display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            inner: Arc::new(value),
        }
    }

    /// Text used when the value is substituted into a message.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Downcasts to the concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueValue").field(&self.display).finish()
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.display == other.display
    }
}

// ============================================================================
// FIELD TYPE
// ============================================================================

/// Conversion from a host type into the engine's field model.
///
/// Implemented for the primitive numeric types, text, `bool`, chrono
/// timestamps and sequences. Implement it for your own types to make them
/// visible to custom categories:
///
/// ```
/// use tagrule::{FieldType, FieldValue, OpaqueValue, TypeDescriptor};
///
/// #[derive(Clone)]
/// struct Money { cents: i64 }
///
/// impl FieldType for Money {
///     fn descriptor() -> TypeDescriptor {
///         TypeDescriptor::named("Money")
///     }
///
///     fn to_field_value(&self) -> FieldValue {
///         FieldValue::Opaque(OpaqueValue::new(self.clone(), format!("{}", self.cents)))
///     }
/// }
/// ```
pub trait FieldType {
    /// The type descriptor used for classification.
    fn descriptor() -> TypeDescriptor;

    /// The runtime value.
    fn to_field_value(&self) -> FieldValue;
}

macro_rules! impl_field_type {
    ($($ty:ty => $desc:ident, $variant:ident, $conv:ty;)*) => {
        $(
            impl FieldType for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::$desc
                }

                fn to_field_value(&self) -> FieldValue {
                    FieldValue::$variant(<$conv>::from(*self))
                }
            }
        )*
    };
}

impl_field_type! {
    i8 => I8, Int, i128;
    i16 => I16, Int, i128;
    i32 => I32, Int, i128;
    i64 => I64, Int, i128;
    i128 => I128, Int, i128;
    u8 => U8, Uint, u128;
    u16 => U16, Uint, u128;
    u32 => U32, Uint, u128;
    u64 => U64, Uint, u128;
    u128 => U128, Uint, u128;
    f32 => F32, Float, f64;
    f64 => F64, Float, f64;
    bool => Bool, Bool, bool;
}

impl FieldType for isize {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Isize
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Int(*self as i128)
    }
}

impl FieldType for usize {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Usize
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Uint(*self as u128)
    }
}

impl FieldType for String {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Str
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Str(self.clone())
    }
}

impl FieldType for str {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Str
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Str(self.to_owned())
    }
}

impl<Tz: TimeZone> FieldType for DateTime<Tz> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Timestamp
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Timestamp(self.fixed_offset())
    }
}

impl FieldType for NaiveDateTime {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Timestamp
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Timestamp(naive_to_local(*self))
    }
}

impl FieldType for NaiveDate {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Timestamp
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Timestamp(naive_to_local(self.and_time(NaiveTime::MIN)))
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence_of(T::descriptor())
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Array(self.iter().map(FieldType::to_field_value).collect())
    }
}

impl<T: FieldType, const N: usize> FieldType for [T; N] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sequence_of(T::descriptor())
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Array(self.iter().map(FieldType::to_field_value).collect())
    }
}

impl<T: FieldType + ?Sized> FieldType for &T {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }

    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}

impl<T: FieldType + ?Sized> FieldType for Box<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }

    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}

/// Interprets a naive date-time as local wall-clock time, falling back to UTC
/// for instants that do not exist locally.
fn naive_to_local(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map_or_else(|| naive.and_utc().fixed_offset(), |dt| dt.fixed_offset())
}
