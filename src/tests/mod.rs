//! # Tests that combine several operations
//!
//! * `scenarios`: literal inputs with known outputs.
//! * `properties`: algebraic identities, checked over small sets of sample values.
