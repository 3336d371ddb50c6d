// src/model/lattice.rs

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const SINGULAR_VOLUME: f64 = 1e-10;

/// Unit cell stored as row vectors `[a_vec, b_vec, c_vec]` in Angstroms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
  vectors: [[f64; 3]; 3],
}

impl Default for Lattice {
  fn default() -> Self {
    Lattice {
      vectors: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    }
  }
}

impl Lattice {
  pub fn from_vectors(vectors: [[f64; 3]; 3]) -> Self {
    Lattice { vectors }
  }

  /// Builds the cell from lengths and angles (degrees) with a along x and b in the xy plane.
  pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
    let (ca, cb, cg) = (alpha.to_radians().cos(), beta.to_radians().cos(), gamma.to_radians().cos());
    let sg = gamma.to_radians().sin();
    let v2 = 1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg;
    if v2 < SINGULAR_VOLUME || sg.abs() < SINGULAR_VOLUME {
      return Err(Error::SingularLattice);
    }
    let v = v2.sqrt();

    let lattice = Lattice::from_vectors([
      [a, 0.0, 0.0],
      [b * cg, b * sg, 0.0],
      [c * cb, c * (ca - cb * cg) / sg, c * v / sg],
    ]);
    if lattice.is_singular() {
      return Err(Error::SingularLattice);
    }
    Ok(lattice)
  }

  pub fn vectors(&self) -> [[f64; 3]; 3] {
    self.vectors
  }

  /// Row matrix, one lattice vector per row.
  pub fn matrix(&self) -> Matrix3<f64> {
    let v = &self.vectors;
    Matrix3::new(
      v[0][0], v[0][1], v[0][2],
      v[1][0], v[1][1], v[1][2],
      v[2][0], v[2][1], v[2][2],
    )
  }

  pub fn volume(&self) -> f64 {
    self.matrix().determinant().abs()
  }

  pub fn is_singular(&self) -> bool {
    self.volume() < SINGULAR_VOLUME
  }

  /// `(a, b, c, alpha, beta, gamma)` with angles in degrees.
  pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
    let [a_vec, b_vec, c_vec] = self.vectors.map(|v| Vector3::new(v[0], v[1], v[2]));
    let (a, b, c) = (a_vec.norm(), b_vec.norm(), c_vec.norm());

    let alpha = (b_vec.dot(&c_vec) / (b * c)).acos().to_degrees();
    let beta = (a_vec.dot(&c_vec) / (a * c)).acos().to_degrees();
    let gamma = (a_vec.dot(&b_vec) / (a * b)).acos().to_degrees();
    (a, b, c, alpha, beta, gamma)
  }

  /// `cart = L^T * frac`
  pub fn frac_to_cart(&self, frac: [f64; 3]) -> [f64; 3] {
    (self.matrix().transpose() * Vector3::from(frac)).into()
  }

  /// `frac = (L^T)^-1 * cart`
  pub fn cart_to_frac(&self, cart: [f64; 3]) -> Result<[f64; 3]> {
    if self.is_singular() {
      return Err(Error::SingularLattice);
    }
    let inv = self.matrix().transpose().try_inverse().ok_or(Error::SingularLattice)?;
    Ok((inv * Vector3::from(cart)).into())
  }
}
