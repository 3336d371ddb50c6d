// src/model/structure.rs

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::lattice::Lattice;
use crate::model::space_group::SpaceGroup;

fn full_occupancy() -> f64 {
  1.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Atom {
  pub element: String,
  /// Fractional coordinates.
  pub xyz: [f64; 3],
  #[serde(default = "full_occupancy")]
  pub occupancy: f64,
}

impl Atom {
  pub fn new(element: &str, xyz: [f64; 3]) -> Self {
    Atom {
      element: element.to_string(),
      xyz,
      occupancy: 1.0,
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
  #[serde(default)]
  pub title: String,
  pub lattice: Lattice,
  pub atoms: Vec<Atom>,
}

impl Structure {
  pub fn new(title: &str, lattice: Lattice) -> Self {
    Structure {
      title: title.to_string(),
      lattice,
      atoms: Vec::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.atoms.len()
  }

  pub fn is_empty(&self) -> bool {
    self.atoms.is_empty()
  }

  pub fn add_atom(&mut self, atom: Atom) {
    self.atoms.push(atom);
  }

  /// Adds an atom given in Cartesian coordinates.
  pub fn add_cartesian_atom(&mut self, element: &str, cart: [f64; 3]) -> Result<()> {
    let xyz = self.lattice.cart_to_frac(cart)?;
    self.atoms.push(Atom::new(element, xyz));
    Ok(())
  }

  pub fn cartesian_positions(&self) -> Vec<[f64; 3]> {
    self.atoms.iter().map(|a| self.lattice.frac_to_cart(a.xyz)).collect()
  }

  /// Generates every symmetry-equivalent site of the asymmetric unit.
  ///
  /// Each atom contributes its own distinct images, wrapped into [0, 1).
  /// Atoms sharing a site, such as a mixed-occupancy pair, are all kept.
  pub fn expand(&self, space_group: &SpaceGroup, tol: f64) -> Structure {
    let mut atoms: Vec<Atom> = Vec::with_capacity(self.atoms.len() * space_group.num_sym_equiv());
    for atom in &self.atoms {
      for xyz in space_group.equivalent_positions(atom.xyz, tol) {
        atoms.push(Atom {
          element: atom.element.clone(),
          xyz,
          occupancy: atom.occupancy,
        });
      }
    }
    log::debug!(
      "Expanded {} atoms to {} with {}",
      self.atoms.len(),
      atoms.len(),
      space_group
    );

    Structure {
      title: self.title.clone(),
      lattice: self.lattice,
      atoms,
    }
  }
}
