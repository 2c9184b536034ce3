//! Records and their fields
//!
//! A record is anything that can enumerate its fields as
//! [`FieldDescriptor`]s. The engine classifies every descriptor once per
//! validation pass, producing the [`Field`] snapshot that handlers and
//! cross-field rules read.
//!
//! Structs usually get their enumerator from `#[derive(Record)]`; hand-built
//! descriptor lists work as well:
//!
//! ```
//! use tagrule::{FieldDescriptor, Record};
//!
//! let record = vec![
//!     FieldDescriptor::of("ID", &2u32, "min:3|max:20"),
//!     FieldDescriptor::of("Name", "", "required"),
//! ];
//! assert_eq!(record.fields().unwrap().len(), 2);
//! ```

use crate::category::{Category, TypeDescriptor, classify};
use crate::error::ValidatorError;
use crate::value::{FieldType, FieldValue};
use std::borrow::Cow;

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// One field as yielded by a field enumerator.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    name: Cow<'static, str>,
    alias: Option<Cow<'static, str>>,
    ty: TypeDescriptor,
    value: FieldValue,
    rules: Cow<'static, str>,
}

impl FieldDescriptor {
    /// Creates a descriptor from its parts.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        ty: TypeDescriptor,
        value: FieldValue,
        rules: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            alias: None,
            ty,
            value,
            rules: rules.into(),
        }
    }

    /// Creates a descriptor from a host value, taking the type descriptor
    /// from its [`FieldType`] impl.
    pub fn of<T: FieldType + ?Sized>(
        name: impl Into<Cow<'static, str>>,
        value: &T,
        rules: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(name, T::descriptor(), value.to_field_value(), rules)
    }

    /// Adds an alternative name that field selectors also match.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_alias(mut self, alias: impl Into<Cow<'static, str>>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Field name, used in messages and as the override selector.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative name, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Host type of the field.
    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    /// Current value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Raw rule string, empty when the field carries no rules.
    pub fn rules(&self) -> &str {
        &self.rules
    }

    /// Returns true when `selector` is the field's name or alias.
    pub fn matches(&self, selector: &str) -> bool {
        self.name == selector || self.alias.as_deref() == Some(selector)
    }
}

// ============================================================================
// CLASSIFIED FIELD
// ============================================================================

/// A descriptor together with its category.
///
/// The list of these for one record is built once per pass and never
/// mutated while rules run.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    descriptor: FieldDescriptor,
    category: Category,
}

impl Field {
    /// Classifies a descriptor.
    pub fn classify(descriptor: FieldDescriptor) -> Self {
        let category = classify(descriptor.ty());
        Self {
            descriptor,
            category,
        }
    }

    /// The category selecting this field's rule set.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The underlying descriptor.
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// Field name.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Current value.
    pub fn value(&self) -> &FieldValue {
        self.descriptor.value()
    }

    /// Raw rule string.
    pub fn rules(&self) -> &str {
        self.descriptor.rules()
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A field enumerator.
///
/// Implementations must yield fields in a stable order; violations are
/// reported in that order.
pub trait Record {
    /// Enumerates the record's fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::InvalidInput`] when there is no record to
    /// enumerate.
    fn fields(&self) -> Result<Vec<FieldDescriptor>, ValidatorError>;
}

impl Record for [FieldDescriptor] {
    fn fields(&self) -> Result<Vec<FieldDescriptor>, ValidatorError> {
        Ok(self.to_vec())
    }
}

impl Record for Vec<FieldDescriptor> {
    fn fields(&self) -> Result<Vec<FieldDescriptor>, ValidatorError> {
        self.as_slice().fields()
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn fields(&self) -> Result<Vec<FieldDescriptor>, ValidatorError> {
        (**self).fields()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn fields(&self) -> Result<Vec<FieldDescriptor>, ValidatorError> {
        (**self).fields()
    }
}

impl<T: Record> Record for Option<T> {
    fn fields(&self) -> Result<Vec<FieldDescriptor>, ValidatorError> {
        match self {
            Some(record) => record.fields(),
            None => Err(ValidatorError::InvalidInput("the record is absent".into())),
        }
    }
}

/// Enumerates and classifies a record.
pub(crate) fn snapshot<R: Record + ?Sized>(record: &R) -> Result<Vec<Field>, ValidatorError> {
    Ok(record.fields()?.into_iter().map(Field::classify).collect())
}
