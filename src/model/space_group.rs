// src/model/space_group.rs
//! Space group definitions: identifying names plus the full operator list.

use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::data::SpaceGroupEntry;
use crate::error::{Error, Result};
use crate::model::hall;
use crate::model::symop::SymOp;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CrystalSystem {
  Triclinic,
  Monoclinic,
  Orthorhombic,
  Tetragonal,
  Trigonal,
  Hexagonal,
  Cubic,
}

impl CrystalSystem {
  pub fn from_number(number: i32) -> Option<Self> {
    let system = match number {
      1..=2 => CrystalSystem::Triclinic,
      3..=15 => CrystalSystem::Monoclinic,
      16..=74 => CrystalSystem::Orthorhombic,
      75..=142 => CrystalSystem::Tetragonal,
      143..=167 => CrystalSystem::Trigonal,
      168..=194 => CrystalSystem::Hexagonal,
      195..=230 => CrystalSystem::Cubic,
      _ => return None,
    };
    Some(system)
  }

  pub fn name(&self) -> &'static str {
    match self {
      CrystalSystem::Triclinic => "Triclinic",
      CrystalSystem::Monoclinic => "Monoclinic",
      CrystalSystem::Orthorhombic => "Orthorhombic",
      CrystalSystem::Tetragonal => "Tetragonal",
      CrystalSystem::Trigonal => "Trigonal",
      CrystalSystem::Hexagonal => "Hexagonal",
      CrystalSystem::Cubic => "Cubic",
    }
  }
}

impl fmt::Display for CrystalSystem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// The 32 crystallographic point groups (geometric crystal classes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointGroup {
  PG1,
  PG1bar,
  PG2,
  PGm,
  PG2m,
  PG222,
  PGmm2,
  PGmmm,
  PG4,
  PG4bar,
  PG4m,
  PG422,
  PG4mm,
  PG4bar2m,
  PG4mmm,
  PG3,
  PG3bar,
  PG32,
  PG3m,
  PG3barm,
  PG6,
  PG6bar,
  PG6m,
  PG622,
  PG6mm,
  PG6barm2,
  PG6mmm,
  PG23,
  PGm3bar,
  PG432,
  PG4bar3m,
  PGm3barm,
}

impl PointGroup {
  pub fn from_number(number: i32) -> Option<Self> {
    use PointGroup::*;
    let pg = match number {
      1 => PG1,
      2 => PG1bar,
      3..=5 => PG2,
      6..=9 => PGm,
      10..=15 => PG2m,
      16..=24 => PG222,
      25..=46 => PGmm2,
      47..=74 => PGmmm,
      75..=80 => PG4,
      81..=82 => PG4bar,
      83..=88 => PG4m,
      89..=98 => PG422,
      99..=110 => PG4mm,
      111..=122 => PG4bar2m,
      123..=142 => PG4mmm,
      143..=146 => PG3,
      147..=148 => PG3bar,
      149..=155 => PG32,
      156..=161 => PG3m,
      162..=167 => PG3barm,
      168..=173 => PG6,
      174 => PG6bar,
      175..=176 => PG6m,
      177..=182 => PG622,
      183..=186 => PG6mm,
      187..=190 => PG6barm2,
      191..=194 => PG6mmm,
      195..=199 => PG23,
      200..=206 => PGm3bar,
      207..=214 => PG432,
      215..=220 => PG4bar3m,
      221..=230 => PGm3barm,
      _ => return None,
    };
    Some(pg)
  }

  /// Hermann-Mauguin symbol, e.g. `"4/mmm"`.
  pub fn symbol(&self) -> &'static str {
    use PointGroup::*;
    match self {
      PG1 => "1",
      PG1bar => "-1",
      PG2 => "2",
      PGm => "m",
      PG2m => "2/m",
      PG222 => "222",
      PGmm2 => "mm2",
      PGmmm => "mmm",
      PG4 => "4",
      PG4bar => "-4",
      PG4m => "4/m",
      PG422 => "422",
      PG4mm => "4mm",
      PG4bar2m => "-42m",
      PG4mmm => "4/mmm",
      PG3 => "3",
      PG3bar => "-3",
      PG32 => "32",
      PG3m => "3m",
      PG3barm => "-3m",
      PG6 => "6",
      PG6bar => "-6",
      PG6m => "6/m",
      PG622 => "622",
      PG6mm => "6mm",
      PG6barm2 => "-6m2",
      PG6mmm => "6/mmm",
      PG23 => "23",
      PGm3bar => "m-3",
      PG432 => "432",
      PG4bar3m => "-43m",
      PGm3barm => "m-3m",
    }
  }

  /// Number of rotation parts in the group.
  pub fn order(&self) -> usize {
    use PointGroup::*;
    match self {
      PG1 => 1,
      PG1bar | PG2 | PGm => 2,
      PG3 => 3,
      PG2m | PG222 | PGmm2 | PG4 | PG4bar => 4,
      PG3bar | PG32 | PG3m | PG6 | PG6bar => 6,
      PGmmm | PG4m | PG422 | PG4mm | PG4bar2m => 8,
      PG3barm | PG6m | PG622 | PG6mm | PG6barm2 | PG23 => 12,
      PG4mmm => 16,
      PG6mmm | PGm3bar | PG432 | PG4bar3m => 24,
      PGm3barm => 48,
    }
  }
}

impl fmt::Display for PointGroup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol())
  }
}

impl Serialize for PointGroup {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(self.symbol())
  }
}

/// One space group in one setting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpaceGroup {
  number: i32,
  short_name: Option<String>,
  pdb_name: Option<String>,
  alt_name: Option<String>,
  hall_symbol: Option<String>,
  crystal_system: CrystalSystem,
  point_group: PointGroup,
  #[serde(rename = "operators", serialize_with = "serialize_ops")]
  ops: Vec<SymOp>,
}

impl SpaceGroup {
  /// Builds a definition from explicit operators.
  ///
  /// Blank names are stored as `None`. Fails when `number` is outside 1..=230
  /// or `ops` lacks the identity.
  pub fn new(
    number: i32,
    short_name: Option<&str>,
    pdb_name: Option<&str>,
    alt_name: Option<&str>,
    ops: Vec<SymOp>,
  ) -> Result<Self> {
    let invalid = |reason: &str| Error::Definition {
      number,
      reason: reason.to_string(),
    };
    let crystal_system = CrystalSystem::from_number(number).ok_or_else(|| invalid("number outside 1..=230"))?;
    let point_group = PointGroup::from_number(number).ok_or_else(|| invalid("number outside 1..=230"))?;
    if !ops.iter().any(SymOp::is_identity) {
      return Err(invalid("operator list has no identity"));
    }

    Ok(SpaceGroup {
      number,
      short_name: non_empty(short_name),
      pdb_name: non_empty(pdb_name),
      alt_name: non_empty(alt_name),
      hall_symbol: None,
      crystal_system,
      point_group,
      ops,
    })
  }

  /// Builds a definition from a catalog row, generating operators from its Hall symbol.
  pub fn from_entry(entry: &SpaceGroupEntry) -> Result<Self> {
    let ops = hall::expand(entry.hall_symbol)?;
    let short_name = entry.short_name();
    let mut group = SpaceGroup::new(
      entry.number,
      short_name.as_deref(),
      entry.pdb_name,
      entry.alt_name,
      ops,
    )?;
    group.hall_symbol = non_empty(Some(entry.hall_symbol));
    Ok(group)
  }

  pub fn number(&self) -> i32 {
    self.number
  }

  pub fn short_name(&self) -> Option<&str> {
    self.short_name.as_deref()
  }

  pub fn pdb_name(&self) -> Option<&str> {
    self.pdb_name.as_deref()
  }

  pub fn alt_name(&self) -> Option<&str> {
    self.alt_name.as_deref()
  }

  pub fn hall_symbol(&self) -> Option<&str> {
    self.hall_symbol.as_deref()
  }

  pub fn crystal_system(&self) -> CrystalSystem {
    self.crystal_system
  }

  pub fn point_group(&self) -> PointGroup {
    self.point_group
  }

  pub fn operators(&self) -> &[SymOp] {
    &self.ops
  }

  /// Every name that can identify this definition, in index order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    [self.short_name(), self.pdb_name(), self.alt_name()].into_iter().flatten()
  }

  pub fn num_sym_equiv(&self) -> usize {
    self.ops.len()
  }

  /// Operators with distinct rotation parts (the primitive cell's share).
  pub fn num_primitive_sym_equiv(&self) -> usize {
    let rotations: HashSet<[[i32; 3]; 3]> = self.ops.iter().map(SymOp::rotation).collect();
    rotations.len()
  }

  /// True when some operator has the inversion as its rotation part.
  pub fn is_centrosymmetric(&self) -> bool {
    const INVERSION: [[i32; 3]; 3] = [[-1, 0, 0], [0, -1, 0], [0, 0, -1]];
    self.ops.iter().any(|op| op.rotation() == INVERSION)
  }

  /// Lattice centering letter: the first letter of the short name, else the Hall lattice.
  pub fn lattice_symbol(&self) -> char {
    let from_name = self.short_name().and_then(|s| s.chars().next());
    let from_hall = self
      .hall_symbol()
      .and_then(|h| h.trim_start_matches('-').chars().next());
    from_name.or(from_hall).unwrap_or('P')
  }

  pub fn contains(&self, op: &SymOp) -> bool {
    self.ops.contains(op)
  }

  /// Order-insensitive comparison of the operator set.
  pub fn same_operators(&self, ops: &[SymOp]) -> bool {
    let mine: HashSet<&SymOp> = self.ops.iter().collect();
    let theirs: HashSet<&SymOp> = ops.iter().collect();
    mine == theirs
  }

  /// Symmetry-equivalent copies of `xyz` wrapped into [0, 1), without duplicates.
  pub fn equivalent_positions(&self, xyz: [f64; 3], tol: f64) -> Vec<[f64; 3]> {
    let mut sites: Vec<[f64; 3]> = Vec::with_capacity(self.ops.len());
    for op in &self.ops {
      let p = op.apply_normalized(xyz);
      if !sites.iter().any(|s| same_site(s, &p, tol)) {
        sites.push(p);
      }
    }
    sites
  }
}

impl fmt::Display for SpaceGroup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.short_name() {
      Some(name) => write!(f, "{} (#{})", name, self.number),
      None => write!(f, "#{}", self.number),
    }
  }
}

/// Periodic comparison of two fractional positions.
pub(crate) fn same_site(a: &[f64; 3], b: &[f64; 3], tol: f64) -> bool {
  (0..3).all(|i| {
    let d = (a[i] - b[i]).abs();
    d < tol || (1.0 - d) < tol
  })
}

fn non_empty(name: Option<&str>) -> Option<String> {
  name.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

fn serialize_ops<S: Serializer>(ops: &[SymOp], serializer: S) -> std::result::Result<S::Ok, S::Error> {
  serializer.collect_seq(ops.iter().map(|op| op.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn group(hall_symbol: &'static str, number: i32, short: &'static str) -> SpaceGroup {
    let entry = SpaceGroupEntry {
      number,
      short_name: Some(short),
      pdb_name: None,
      alt_name: None,
      hall_symbol,
    };
    SpaceGroup::from_entry(&entry).unwrap()
  }

  #[test]
  fn test_crystal_system_ranges() {
    assert_eq!(CrystalSystem::from_number(1), Some(CrystalSystem::Triclinic));
    assert_eq!(CrystalSystem::from_number(15), Some(CrystalSystem::Monoclinic));
    assert_eq!(CrystalSystem::from_number(74), Some(CrystalSystem::Orthorhombic));
    assert_eq!(CrystalSystem::from_number(167), Some(CrystalSystem::Trigonal));
    assert_eq!(CrystalSystem::from_number(194), Some(CrystalSystem::Hexagonal));
    assert_eq!(CrystalSystem::from_number(230), Some(CrystalSystem::Cubic));
    assert_eq!(CrystalSystem::from_number(0), None);
    assert_eq!(CrystalSystem::from_number(231), None);
  }

  #[test]
  fn test_point_group_symbols() {
    assert_eq!(PointGroup::from_number(14).map(|p| p.symbol()), Some("2/m"));
    assert_eq!(PointGroup::from_number(62).map(|p| p.symbol()), Some("mmm"));
    assert_eq!(PointGroup::from_number(225).map(|p| p.symbol()), Some("m-3m"));
    assert_eq!(PointGroup::from_number(187).map(|p| p.to_string()), Some("-6m2".to_string()));
  }

  #[test]
  fn test_blank_names_are_absent() {
    let g = SpaceGroup::new(1, Some("P1"), Some("  "), Some(""), vec![SymOp::identity()]).unwrap();
    assert_eq!(g.short_name(), Some("P1"));
    assert_eq!(g.pdb_name(), None);
    assert_eq!(g.alt_name(), None);
    assert_eq!(g.names().collect::<Vec<_>>(), vec!["P1"]);
  }

  #[test]
  fn test_new_rejects_bad_definitions() {
    assert!(SpaceGroup::new(0, Some("X"), None, None, vec![SymOp::identity()]).is_err());
    let mirror = SymOp::from_xyz("-x,y,z").unwrap();
    assert!(SpaceGroup::new(6, Some("Pm"), None, None, vec![mirror]).is_err());
  }

  #[test]
  fn test_derived_counts() {
    let c2c = group("-C 2yc", 15, "C2/c");
    assert_eq!(c2c.num_sym_equiv(), 8);
    assert_eq!(c2c.num_primitive_sym_equiv(), 4);
    assert!(c2c.is_centrosymmetric());
    assert_eq!(c2c.lattice_symbol(), 'C');
    assert_eq!(c2c.point_group().order(), c2c.num_primitive_sym_equiv());

    let p212121 = group("P 2ac 2ab", 19, "P212121");
    assert!(!p212121.is_centrosymmetric());
    assert_eq!(p212121.num_primitive_sym_equiv(), 4);
  }

  #[test]
  fn test_lattice_symbol_prefers_name() {
    let r3 = group("P 3*", 146, "R3:R");
    assert_eq!(r3.lattice_symbol(), 'R');
    let unnamed = SpaceGroup::new(1, None, None, None, vec![SymOp::identity()]).unwrap();
    assert_eq!(unnamed.lattice_symbol(), 'P');
  }

  #[test]
  fn test_equivalent_positions() {
    let p21c = group("-P 2ybc", 14, "P21/c");
    let general = p21c.equivalent_positions([0.1, 0.2, 0.3], 1e-6);
    assert_eq!(general.len(), 4);
    // inversion centre at the origin is a special position
    let special = p21c.equivalent_positions([0.0, 0.0, 0.0], 1e-6);
    assert_eq!(special.len(), 2);
    assert!(special.iter().all(|p| p.iter().all(|v| (0.0..1.0).contains(v))));
  }

  #[test]
  fn test_contains_and_same_operators() {
    let p21c = group("-P 2ybc", 14, "P21/c");
    assert!(p21c.contains(&SymOp::from_xyz("-x,-y,-z").unwrap()));
    assert!(!p21c.contains(&SymOp::from_xyz("-x,y,-z").unwrap()));

    let mut reversed = p21c.operators().to_vec();
    reversed.reverse();
    assert!(p21c.same_operators(&reversed));
    assert!(!p21c.same_operators(&reversed[1..]));
  }

  #[test]
  fn test_serialize_writes_xyz() {
    let p1bar = group("-P 1", 2, "P-1");
    let json = serde_json::to_value(&p1bar).unwrap();
    assert_eq!(json["number"], 2);
    assert_eq!(json["crystal_system"], "Triclinic");
    assert_eq!(json["point_group"], "-1");
    assert_eq!(json["operators"][1], "-x,-y,-z");
    assert!(json["pdb_name"].is_null());
  }
}
