//! Operator tests, kept apart from the dispatch code.

mod operators_tests;
mod unary_operators_tests;
