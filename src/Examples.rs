//! examples of usage of RustedAlgebra
/// Symbolic operations examples
pub mod symbolic_examples;
