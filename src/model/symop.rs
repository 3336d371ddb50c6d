// src/model/symop.rs

use crate::error::{Error, Result};
use nalgebra::{Matrix3, Vector3};
use std::fmt;
use std::str::FromStr;

/// Translations are stored as numerators over this denominator.
pub const TRANSLATION_DENOMINATOR: i32 = 12;

/// Orders a crystallographic rotation can have.
const CRYSTALLOGRAPHIC_ORDERS: [u32; 5] = [1, 2, 3, 4, 6];

/// A crystallographic symmetry operation `x' = R x + t` on fractional coordinates.
///
/// The rotation is an integer matrix of finite order (1, 2, 3, 4 or 6).
/// The translation is kept exactly, in twelfths, reduced into `0 <= t < 12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymOp {
  rot: Matrix3<i32>,
  trans: Vector3<i32>,
}

impl Default for SymOp {
  fn default() -> Self {
    Self::identity()
  }
}

impl SymOp {
  pub fn identity() -> Self {
    SymOp {
      rot: Matrix3::identity(),
      trans: Vector3::zeros(),
    }
  }

  /// Trusted constructor for table data. Translation is in twelfths.
  pub(crate) fn from_parts(rot: [[i32; 3]; 3], trans: [i32; 3]) -> Self {
    let rot = to_matrix(&rot);
    debug_assert!(determinant(&rot).abs() == 1, "rotation must have determinant +-1");
    SymOp {
      rot,
      trans: reduce(Vector3::from(trans)),
    }
  }

  /// Checked constructor from a rotation and a fractional translation.
  pub fn new(rotation: [[i32; 3]; 3], translation: [f64; 3]) -> Result<Self> {
    let label = format!("{:?} + {:?}", rotation, translation);
    check_rotation(&rotation).map_err(|reason| Error::symop(&label, reason))?;
    let mut trans = [0; 3];
    for (slot, t) in trans.iter_mut().zip(translation) {
      *slot = to_twelfths(t).ok_or_else(|| {
        Error::symop(&label, "translation is not a finite multiple of 1/12")
      })?;
    }
    Ok(Self::from_parts(rotation, trans))
  }

  /// Rotation rows.
  pub fn rotation(&self) -> [[i32; 3]; 3] {
    std::array::from_fn(|i| std::array::from_fn(|j| self.rot[(i, j)]))
  }

  pub fn rotation_matrix(&self) -> Matrix3<f64> {
    self.rot.cast::<f64>()
  }

  /// Translation as fractions in `[0, 1)`.
  pub fn translation(&self) -> [f64; 3] {
    self.trans.map(|t| t as f64 / TRANSLATION_DENOMINATOR as f64).into()
  }

  /// Translation numerators over [`TRANSLATION_DENOMINATOR`].
  pub fn translation_twelfths(&self) -> [i32; 3] {
    self.trans.into()
  }

  pub fn determinant(&self) -> i32 {
    determinant(&self.rot)
  }

  /// Smallest `n` with `R^n = I`.
  pub fn rotation_order(&self) -> u32 {
    rotation_order(&self.rot).unwrap_or(0)
  }

  pub fn is_identity(&self) -> bool {
    self.rot == Matrix3::identity() && self.trans == Vector3::zeros()
  }

  /// True for pure rotations (determinant +1).
  pub fn is_proper(&self) -> bool {
    self.determinant() == 1
  }

  /// `R x + t` without any wrapping of the result.
  pub fn apply(&self, xyz: [f64; 3]) -> [f64; 3] {
    let v = self.rotation_matrix() * Vector3::from(xyz) + Vector3::from(self.translation());
    [v.x, v.y, v.z]
  }

  /// Like [`SymOp::apply`], with every component wrapped into `[0, 1)`.
  pub fn apply_normalized(&self, xyz: [f64; 3]) -> [f64; 3] {
    self.apply(xyz).map(wrap_unit)
  }

  /// The operation "apply `other`, then `self`".
  pub fn compose(&self, other: &SymOp) -> SymOp {
    SymOp {
      rot: self.rot * other.rot,
      trans: reduce(self.rot * other.trans + self.trans),
    }
  }

  pub fn inverse(&self) -> SymOp {
    // determinant is +-1, so the inverse is integral and always exists
    let inv = self
      .rot
      .cast::<f64>()
      .try_inverse()
      .map_or_else(Matrix3::identity, |m| m.map(|v| v.round() as i32));
    SymOp {
      rot: inv,
      trans: reduce(-(inv * self.trans)),
    }
  }

  /// Same rotation with `shift` (twelfths) added to the translation.
  pub(crate) fn translated(&self, shift: [i32; 3]) -> SymOp {
    SymOp {
      rot: self.rot,
      trans: reduce(self.trans + Vector3::from(shift)),
    }
  }

  /// Moves the origin by `v` (twelfths): `t' = t + v - R v`.
  pub(crate) fn origin_shifted(&self, v: [i32; 3]) -> SymOp {
    let v = Vector3::from(v);
    self.translated((v - self.rot * v).into())
  }

  /// Parses the coordinate-triplet notation, e.g. `"-x+1/2, y, -z"`.
  pub fn from_xyz(s: &str) -> Result<SymOp> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
      return Err(Error::symop(s, "expected three comma-separated components"));
    }

    let mut rot = [[0; 3]; 3];
    let mut trans = [0; 3];
    for (row, expr) in parts.iter().enumerate() {
      let (coeffs, t) = parse_component(expr).map_err(|reason| Error::symop(s, reason))?;
      rot[row] = coeffs;
      trans[row] = t;
    }

    check_rotation(&rot).map_err(|reason| Error::symop(s, reason))?;
    Ok(Self::from_parts(rot, trans))
  }
}

impl FromStr for SymOp {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    SymOp::from_xyz(s)
  }
}

impl fmt::Display for SymOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const AXES: [char; 3] = ['x', 'y', 'z'];
    for row in 0..3 {
      if row > 0 {
        f.write_str(",")?;
      }
      let mut term = String::new();
      for (col, axis) in AXES.iter().enumerate() {
        let k = self.rot[(row, col)];
        if k == 0 {
          continue;
        }
        if k < 0 {
          term.push('-');
        } else if !term.is_empty() {
          term.push('+');
        }
        if k.abs() != 1 {
          term.push_str(&k.abs().to_string());
        }
        term.push(*axis);
      }
      let t = self.trans[row];
      if t != 0 {
        let g = gcd(t, TRANSLATION_DENOMINATOR);
        term.push_str(&format!("+{}/{}", t / g, TRANSLATION_DENOMINATOR / g));
      }
      f.write_str(&term)?;
    }
    Ok(())
  }
}

// --- Parsing helpers ---

/// One row of the triplet: coefficients of x, y, z and translation in twelfths.
fn parse_component(expr: &str) -> std::result::Result<([i32; 3], i32), String> {
  let s: String = expr
    .chars()
    .filter(|c| !c.is_whitespace())
    .collect::<String>()
    .to_lowercase();
  if s.is_empty() {
    return Err("empty component".to_string());
  }

  let mut coeffs = [0; 3];
  let mut trans = 0;

  // Split on + or - but keep the sign with its term
  let mut terms = Vec::new();
  let mut current = String::new();
  for c in s.chars() {
    if (c == '+' || c == '-') && !current.is_empty() {
      terms.push(std::mem::take(&mut current));
    }
    current.push(c);
  }
  terms.push(current);

  for term in terms {
    let (sign, body) = match term.strip_prefix('-') {
      Some(rest) => (-1, rest),
      None => (1, term.strip_prefix('+').unwrap_or(term.as_str())),
    };
    match body {
      "x" => coeffs[0] += sign,
      "y" => coeffs[1] += sign,
      "z" => coeffs[2] += sign,
      "" => return Err(format!("dangling sign in {:?}", expr)),
      number => {
        let value = parse_fraction(number).ok_or_else(|| format!("bad term {:?}", number))?;
        let twelfths = to_twelfths(value)
          .ok_or_else(|| format!("translation {:?} is not a finite multiple of 1/12", number))?;
        trans = (trans + sign * twelfths).rem_euclid(TRANSLATION_DENOMINATOR);
      }
    }
  }

  Ok((coeffs, trans))
}

fn parse_fraction(s: &str) -> Option<f64> {
  match s.split_once('/') {
    Some((num, den)) => {
      let num: f64 = num.parse().ok()?;
      let den: f64 = den.parse().ok()?;
      if den == 0.0 {
        None
      } else {
        Some(num / den)
      }
    }
    None => s.parse().ok(),
  }
}

/// `value` in twelfths, reduced into `[0, 12)`.
fn to_twelfths(value: f64) -> Option<i32> {
  let scaled = value * TRANSLATION_DENOMINATOR as f64;
  if !scaled.is_finite() {
    return None;
  }
  let rounded = scaled.round();
  if (scaled - rounded).abs() < 1e-6 {
    Some(rounded.rem_euclid(TRANSLATION_DENOMINATOR as f64) as i32)
  } else {
    None
  }
}

pub(crate) fn wrap_unit(v: f64) -> f64 {
  let w = v.rem_euclid(1.0);
  // rem_euclid of a tiny negative number rounds up to exactly 1.0
  if w >= 1.0 {
    0.0
  } else {
    w
  }
}

// --- Rotation checks ---

fn to_matrix(rows: &[[i32; 3]; 3]) -> Matrix3<i32> {
  Matrix3::from_fn(|i, j| rows[i][j])
}

fn determinant(m: &Matrix3<i32>) -> i32 {
  m.cast::<f64>().determinant().round() as i32
}

/// Smallest crystallographic `n` with `m^n = I`, if any.
fn rotation_order(m: &Matrix3<i32>) -> Option<u32> {
  let mut power = *m;
  for n in 1..=6 {
    if power == Matrix3::identity() {
      return CRYSTALLOGRAPHIC_ORDERS.contains(&n).then_some(n);
    }
    power = power * m;
  }
  None
}

fn check_rotation(rows: &[[i32; 3]; 3]) -> std::result::Result<(), &'static str> {
  if rows.iter().flatten().any(|v| v.abs() > 1) {
    return Err("rotation entries must be -1, 0 or 1");
  }
  let m = to_matrix(rows);
  if determinant(&m).abs() != 1 {
    return Err("rotation determinant must be +1 or -1");
  }
  if rotation_order(&m).is_none() {
    return Err("rotation is not of order 1, 2, 3, 4 or 6");
  }
  Ok(())
}

fn reduce(t: Vector3<i32>) -> Vector3<i32> {
  t.map(|v| v.rem_euclid(TRANSLATION_DENOMINATOR))
}

fn gcd(a: i32, b: i32) -> i32 {
  if b == 0 {
    a.abs()
  } else {
    gcd(b, a % b)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn close(a: [f64; 3], b: [f64; 3]) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-10)
  }

  #[test]
  fn test_identity() {
    let op = SymOp::identity();
    assert!(op.is_identity());
    assert!(op.is_proper());
    assert_eq!(op.to_string(), "x,y,z");
    assert!(close(op.apply([0.1, 0.2, 0.3]), [0.1, 0.2, 0.3]));
  }

  #[test]
  fn test_parse_screw_axis() {
    let op = SymOp::from_xyz("-x, y+1/2, -z+1/2").unwrap();
    assert_eq!(op.rotation(), [[-1, 0, 0], [0, 1, 0], [0, 0, -1]]);
    assert_eq!(op.translation_twelfths(), [0, 6, 6]);
    assert_eq!(op.to_string(), "-x,y+1/2,-z+1/2");
  }

  #[test]
  fn test_parse_hexagonal_and_leading_fraction() {
    let op = SymOp::from_xyz("Y-X, 1/3-X, Z+2/3").unwrap();
    assert_eq!(op.rotation(), [[-1, 1, 0], [-1, 0, 0], [0, 0, 1]]);
    assert_eq!(op.translation_twelfths(), [0, 4, 8]);
    assert_eq!(op.to_string(), "-x+y,-x+1/3,z+2/3");
  }

  #[test]
  fn test_negative_translation_is_reduced() {
    let op = SymOp::from_xyz("x-1/4,y,z").unwrap();
    assert_eq!(op.translation(), [0.75, 0.0, 0.0]);
  }

  #[test]
  fn test_parse_errors() {
    assert!(SymOp::from_xyz("x,y").is_err());
    assert!(SymOp::from_xyz("x,x,z").is_err());
    assert!(SymOp::from_xyz("x+x,y,z").is_err());
    assert!(SymOp::from_xyz("x+1/5,y,z").is_err());
    assert!(SymOp::from_xyz("x,y,q").is_err());
    assert!(SymOp::from_xyz("x,,z").is_err());
  }

  #[test]
  fn test_display_parse_agree() {
    for s in ["-y,x-y,z+1/3", "z,x,y", "-x+1/2,-y,z+1/2", "y+1/4,-x+3/4,z+5/6"] {
      let op = SymOp::from_xyz(s).unwrap();
      assert_eq!(SymOp::from_xyz(&op.to_string()).unwrap(), op);
    }
  }

  #[test]
  fn test_apply_raw_versus_normalized() {
    let op = SymOp::from_xyz("-x,-y,z+1/2").unwrap();
    let raw = op.apply([0.25, 0.1, 0.75]);
    assert!(close(raw, [-0.25, -0.1, 1.25]));
    let wrapped = op.apply_normalized([0.25, 0.1, 0.75]);
    assert!(close(wrapped, [0.75, 0.9, 0.25]));
  }

  #[test]
  fn test_normalized_never_returns_one() {
    let op = SymOp::from_xyz("-x,y,z").unwrap();
    let p = op.apply_normalized([1e-18, 0.0, 0.0]);
    assert!(p[0] >= 0.0 && p[0] < 1.0);
  }

  #[test]
  fn test_compose_and_inverse() {
    let four = SymOp::from_xyz("-y,x,z+1/4").unwrap();
    let mut acc = SymOp::identity();
    for _ in 0..4 {
      acc = four.compose(&acc);
    }
    assert!(acc.is_identity());

    let op = SymOp::from_xyz("-y+1/2,x-y,z+1/3").unwrap();
    assert!(op.compose(&op.inverse()).is_identity());
    assert!(op.inverse().compose(&op).is_identity());
  }

  #[test]
  fn test_checked_constructor() {
    let op = SymOp::new([[0, 0, 1], [1, 0, 0], [0, 1, 0]], [0.5, 0.0, 0.25]).unwrap();
    assert_eq!(op.to_string(), "z+1/2,x,y+1/4");
    assert!(SymOp::new([[2, 0, 0], [0, 1, 0], [0, 0, 1]], [0.0; 3]).is_err());
    assert!(SymOp::new([[1, 0, 0], [1, 0, 0], [0, 0, 1]], [0.0; 3]).is_err());
    assert!(SymOp::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]], [0.1, 0.0, 0.0]).is_err());
  }

  #[test]
  fn test_origin_shift() {
    // two-fold along -x-y style axis with a c/12 origin shift
    let op = SymOp::from_xyz("-y,-x,-z+1/2").unwrap();
    let shifted = op.origin_shifted([0, 0, 1]);
    assert_eq!(shifted.to_string(), "-y,-x,-z+2/3");
  }

  #[test]
  fn test_rejects_infinite_order_rotations() {
    assert!(SymOp::from_xyz("x+y,y,z").is_err());
    assert!(SymOp::from_xyz("x,y-z,z").is_err());
    assert!(SymOp::new([[1, 1, 0], [0, 1, 0], [0, 0, 1]], [0.0; 3]).is_err());
    // six-fold and three-fold rotations of the hexagonal lattice are fine
    let six = SymOp::from_xyz("x-y,x,z").unwrap();
    assert_eq!(six.rotation_order(), 6);
    assert_eq!(SymOp::from_xyz("-y,x-y,z").unwrap().rotation_order(), 3);
    assert_eq!(SymOp::from_xyz("-x,-y,-z").unwrap().rotation_order(), 2);
  }

  #[test]
  fn test_display_keeps_large_coefficients() {
    let a = SymOp::from_xyz("-y,x-y,z").unwrap();
    let b = SymOp::from_xyz("y,x,-z").unwrap();
    assert_eq!(a.compose(&b).to_string(), "-x,-x+y,-z");
    // mixing settings can leave {-1, 0, 1}; nothing is dropped from the text
    let sheared = SymOp::from_parts([[1, 2, 0], [0, 1, 0], [0, 0, -1]], [0; 3]);
    assert_eq!(sheared.to_string(), "x+2y,y,-z");
    assert!(SymOp::from_xyz(&sheared.to_string()).is_err());
  }

  #[test]
  fn test_large_translations_reduce_exactly() {
    assert_eq!(SymOp::from_xyz("x+1000000000,y,z").unwrap().to_string(), "x,y,z");
    assert_eq!(SymOp::from_xyz("x+1000000000+1000000000,y,z").unwrap().to_string(), "x,y,z");
    assert_eq!(SymOp::from_xyz("x-1000000000/3,y,z").unwrap().to_string(), "x+2/3,y,z");
    assert_eq!(SymOp::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]], [1e12 + 0.5, 0.0, -7.25]).unwrap().to_string(), "x+1/2,y,z+3/4");
    assert!(SymOp::from_xyz("x+inf,y,z").is_err());
    assert!(SymOp::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]], [f64::NAN, 0.0, 0.0]).is_err());
  }
}
