// src/physics/symmetry.rs
//! Space group detection for a structure, backed by moyo.

use moyo::base::{AngleTolerance, Cell, Lattice};
use moyo::data::Setting;
use moyo::MoyoDataset;
use nalgebra::Vector3;

use crate::error::{Error, Result};
use crate::model::space_group::{CrystalSystem, SpaceGroup};
use crate::model::Structure;
use crate::resolver::get_space_group;

#[derive(Debug, Clone)]
pub struct SymmetryInfo {
  pub number: i32,
  pub hall_number: i32,
  pub crystal_system: CrystalSystem,
  /// Standard setting of the detected group.
  pub space_group: &'static SpaceGroup,
}

/// Runs the symmetry search on `structure` with tolerance `symprec` (Angstrom).
pub fn analyze(structure: &Structure, symprec: f64) -> Result<SymmetryInfo> {
  if structure.is_empty() {
    return Err(Error::Symmetry("structure has no atoms".to_string()));
  }
  if structure.lattice.is_singular() {
    return Err(Error::SingularLattice);
  }

  // Atom types are 1-based indices of distinct element labels
  let mut elements: Vec<&str> = Vec::new();
  let mut numbers = Vec::with_capacity(structure.len());
  let mut positions = Vec::with_capacity(structure.len());
  for atom in &structure.atoms {
    let id = match elements.iter().position(|e| *e == atom.element) {
      Some(i) => i,
      None => {
        elements.push(&atom.element);
        elements.len() - 1
      }
    };
    numbers.push(id as i32 + 1);
    positions.push(Vector3::new(atom.xyz[0], atom.xyz[1], atom.xyz[2]));
  }

  let cell = Cell::new(Lattice::new(structure.lattice.matrix()), positions, numbers);
  let dataset = MoyoDataset::new(&cell, symprec, AngleTolerance::Default, Setting::Spglib, true)
    .map_err(|e| Error::Symmetry(format!("{:?}", e)))?;

  let space_group = get_space_group(dataset.number)?;
  log::info!(
    "Detected space group {} (Hall number {}) for '{}'",
    space_group,
    dataset.hall_number,
    structure.title
  );

  Ok(SymmetryInfo {
    number: dataset.number,
    hall_number: dataset.hall_number as i32,
    crystal_system: space_group.crystal_system(),
    space_group,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{Atom, Lattice as ModelLattice};

  fn rocksalt() -> Structure {
    let lattice = ModelLattice::from_parameters(5.64, 5.64, 5.64, 90.0, 90.0, 90.0).unwrap();
    let mut s = Structure::new("NaCl", lattice);
    for xyz in [[0.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]] {
      s.add_atom(Atom::new("Na", xyz));
      s.add_atom(Atom::new("Cl", xyz.map(|v| (v + 0.5) % 1.0)));
    }
    s
  }

  #[test]
  fn test_detects_rocksalt() {
    let info = analyze(&rocksalt(), 1e-4).unwrap();
    assert_eq!(info.number, 225);
    assert_eq!(info.crystal_system, CrystalSystem::Cubic);
    assert_eq!(info.space_group.short_name(), Some("Fm-3m"));
  }

  #[test]
  fn test_rejects_empty_structure() {
    let s = Structure::new("empty", ModelLattice::default());
    assert!(matches!(analyze(&s, 1e-4), Err(Error::Symmetry(_))));
  }

  #[test]
  fn test_rejects_singular_lattice() {
    let mut s = Structure::new("flat", ModelLattice::from_vectors([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]));
    s.add_atom(Atom::new("C", [0.0, 0.0, 0.0]));
    assert!(matches!(analyze(&s, 1e-4), Err(Error::SingularLattice)));
  }
}
