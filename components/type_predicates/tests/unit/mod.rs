//! Unit tests for type_predicates

mod predicate_test;
