//! Procedural macros for the tagrule validation engine
//!
//! - **`#[derive(Record)]`** - enumerates a struct's validated fields
//!
//! # Examples
//!
//! ```rust,ignore
//! use tagrule::Record;
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[validate(rules = "min:3|max:20", name = "ID")]
//!     id: u32,
//!
//!     #[validate("regex:^[0-9]*$|required")]
//!     name: String,
//!
//!     // Present in the record for cross-field rules, no rules of its own.
//!     #[validate]
//!     site: String,
//!
//!     // Not part of the record.
//!     cache_key: u64,
//! }
//! ```

use proc_macro::TokenStream;

mod record;

// ============================================================================
// RECORD DERIVE
// ============================================================================

/// Derives `tagrule::Record` for a struct with named fields.
///
/// Only fields carrying a `#[validate]` attribute become part of the record,
/// in declaration order.
///
/// # Attributes
///
/// - `#[validate("rule|rule:arg")]` - rule string, field name is the identifier
/// - `#[validate(rules = "...")]` - same, spelled out
/// - `#[validate(name = "ID")]` - display name used in messages and selectors
/// - `#[validate(alias = "id")]` - second name accepted by selectors
/// - `#[validate]` - include the field with no rules
///
/// Every included field type must implement `tagrule::FieldType`.
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
