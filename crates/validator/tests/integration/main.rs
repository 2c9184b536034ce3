//! Integration tests for tagrule
//!
//! These go through the public API only: derived records, the free
//! functions backed by the process-wide validator, and explicit
//! [`tagrule::Validator`] instances.

mod custom_rules;
mod derive;
mod overrides;
mod presence;
mod properties;
mod timestamps;
