//! Type descriptors and rule categories
//!
//! A field's runtime type is described by a [`TypeDescriptor`]; [`classify`]
//! maps it to the [`Category`] whose rule set applies.
//!
//! ## Native categories
//!
//! - [`Category::Numeric`] - every signed/unsigned integer width, `f32`, `f64`
//! - [`Category::String`] - text
//! - [`Category::Timestamp`] - date-time values
//! - [`Category::Array`] - any sequence, whatever its element type
//!
//! Anything else becomes [`Category::Custom`] keyed by its type name. Such a
//! field is only validated when a custom category with that exact name has
//! been registered.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// TYPE DESCRIPTOR
// ============================================================================

/// Host-side description of a field's type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `i128`
    I128,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// Text.
    Str,
    /// `bool`
    Bool,
    /// A point in time.
    Timestamp,
    /// A sequence of some element type.
    Sequence(Box<TypeDescriptor>),
    /// Any other type, identified by name.
    Named(Cow<'static, str>),
}

impl TypeDescriptor {
    /// Creates a named descriptor for a caller-defined type.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a sequence descriptor.
    pub fn sequence_of(element: TypeDescriptor) -> Self {
        Self::Sequence(Box::new(element))
    }

    /// The type name used as a custom category key.
    pub fn type_name(&self) -> Cow<'static, str> {
        let name = match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Str => "string",
            Self::Bool => "bool",
            Self::Timestamp => "timestamp",
            Self::Sequence(element) => return Cow::Owned(format!("[{}]", element.type_name())),
            Self::Named(name) => return name.clone(),
        };
        Cow::Borrowed(name)
    }

    /// Returns true for integer and floating-point kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::Isize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::U128
                | Self::Usize
                | Self::F32
                | Self::F64
        )
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

// ============================================================================
// CATEGORY
// ============================================================================

/// The key that selects a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Integers and floats.
    Numeric,
    /// Text.
    String,
    /// Date-time values.
    Timestamp,
    /// Sequences of any element type.
    Array,
    /// A caller-registered category.
    Custom(Cow<'static, str>),
}

impl Category {
    /// The registry key of this category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeric => "numeric",
            Self::String => "string",
            Self::Timestamp => "timestamp",
            Self::Array => "array",
            Self::Custom(name) => name,
        }
    }

    /// Returns true for the four built-in categories.
    pub fn is_native(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(key: &str) -> Self {
        match key {
            "numeric" => Self::Numeric,
            "string" => Self::String,
            "timestamp" => Self::Timestamp,
            "array" => Self::Array,
            other => Self::Custom(Cow::Owned(other.to_owned())),
        }
    }
}

impl From<String> for Category {
    fn from(key: String) -> Self {
        match key.as_str() {
            "numeric" | "string" | "timestamp" | "array" => Self::from(key.as_str()),
            _ => Self::Custom(Cow::Owned(key)),
        }
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Maps a type descriptor to its category.
///
/// Sequences are classified as [`Category::Array`] without looking at the
/// element type.
///
/// # Examples
///
/// ```
/// use tagrule::{Category, TypeDescriptor, classify};
///
/// assert_eq!(classify(&TypeDescriptor::U16), Category::Numeric);
/// assert_eq!(classify(&TypeDescriptor::sequence_of(TypeDescriptor::Str)), Category::Array);
/// assert_eq!(classify(&TypeDescriptor::Bool).as_str(), "bool");
/// ```
pub fn classify(ty: &TypeDescriptor) -> Category {
    match ty {
        t if t.is_numeric() => Category::Numeric,
        TypeDescriptor::Str => Category::String,
        TypeDescriptor::Timestamp => Category::Timestamp,
        TypeDescriptor::Sequence(_) => Category::Array,
        other => Category::Custom(other.type_name()),
    }
}
