// src/model/mod.rs
pub mod hall;
pub mod lattice;
pub mod space_group;
pub mod structure;
pub mod symop;

pub use lattice::Lattice;
pub use space_group::{CrystalSystem, PointGroup, SpaceGroup};
pub use structure::{Atom, Structure};
pub use symop::SymOp;
