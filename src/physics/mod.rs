// src/physics/mod.rs
pub mod symmetry;

pub use symmetry::{analyze, SymmetryInfo};
