// src/lib.rs
//! Crystal structures with a space group registry.
//!
//! ```no_run
//! use crystal_structure::get_space_group;
//!
//! let group = get_space_group("p21/c").unwrap();
//! assert_eq!(group.number(), 14);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod physics;
pub mod registry;
pub mod resolver;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{Atom, CrystalSystem, Lattice, PointGroup, SpaceGroup, Structure, SymOp};
pub use registry::{registry, space_groups, Registry};
pub use resolver::{get_space_group, is_space_group_identifier, Identifier, SpaceGroupResolver, UnknownSpaceGroup};
