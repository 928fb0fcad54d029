//! Contract tests for type_predicates
//!
//! Properties that must hold for every value, checked over generated values.
