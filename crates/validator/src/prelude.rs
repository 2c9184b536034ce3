//! Prelude module for convenient imports.
//!
//! ```rust
//! use tagrule::prelude::*;
//!
//! let record = vec![FieldDescriptor::of("Age", &21u8, "max:20")];
//! let violations = Validator::new().validate(&record, &MessageOverrides::new()).unwrap();
//! assert_eq!(violations.len(), 1);
//! ```

pub use crate::{
    Category, FieldDescriptor, FieldType, FieldValue, MessageOverrides, Record, RegistryError,
    RuleContext, RuleOutcome, Validator, ValidatorConfig, ValidatorError, Violation, Violations,
};
