// src/registry.rs
//! The catalog of every known space group definition.

use std::sync::OnceLock;

use crate::data::alternate::ALTERNATE;
use crate::data::standard::STANDARD;
use crate::data::SpaceGroupEntry;
use crate::error::Result;
use crate::model::space_group::SpaceGroup;
use crate::model::symop::SymOp;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry: standard settings followed by alternate settings.
pub fn registry() -> &'static Registry {
  REGISTRY.get_or_init(|| Registry::from_catalogs(STANDARD, ALTERNATE))
}

/// Shorthand for `registry().space_groups()`.
pub fn space_groups() -> &'static [SpaceGroup] {
  registry().space_groups()
}

/// Definitions from two catalogs, concatenated in order.
///
/// Order matters: when two definitions share a number or a name, the one
/// listed first is the one the resolver returns.
#[derive(Clone, Debug, PartialEq)]
pub struct Registry {
  groups: Vec<SpaceGroup>,
  first_len: usize,
}

impl Registry {
  /// Builds definitions from two static catalogs. Rows whose Hall symbol
  /// cannot be expanded are logged and left out.
  pub fn from_catalogs(first: &[SpaceGroupEntry], second: &[SpaceGroupEntry]) -> Self {
    let registry = Self::from_definitions(build_catalog(first), build_catalog(second));
    log::debug!(
      "Space group registry built: {} standard + {} alternate settings",
      registry.standard().len(),
      registry.alternate().len()
    );
    registry
  }

  pub fn from_definitions(first: Vec<SpaceGroup>, second: Vec<SpaceGroup>) -> Self {
    let first_len = first.len();
    let mut groups = first;
    groups.extend(second);
    Registry { groups, first_len }
  }

  pub fn space_groups(&self) -> &[SpaceGroup] {
    &self.groups
  }

  /// Definitions from the first catalog.
  pub fn standard(&self) -> &[SpaceGroup] {
    &self.groups[..self.first_len]
  }

  /// Definitions from the second catalog.
  pub fn alternate(&self) -> &[SpaceGroup] {
    &self.groups[self.first_len..]
  }

  pub fn len(&self) -> usize {
    self.groups.len()
  }

  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, SpaceGroup> {
    self.groups.iter()
  }

  /// First definition whose operator set equals `ops`, ignoring order.
  pub fn find_by_operators(&self, ops: &[SymOp]) -> Option<&SpaceGroup> {
    self
      .groups
      .iter()
      .filter(|g| g.num_sym_equiv() == ops.len())
      .find(|g| g.same_operators(ops))
  }

  /// JSON array of every definition, in registry order.
  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(&self.groups)?)
  }
}

impl<'a> IntoIterator for &'a Registry {
  type Item = &'a SpaceGroup;
  type IntoIter = std::slice::Iter<'a, SpaceGroup>;

  fn into_iter(self) -> Self::IntoIter {
    self.groups.iter()
  }
}

fn build_catalog(entries: &[SpaceGroupEntry]) -> Vec<SpaceGroup> {
  entries
    .iter()
    .filter_map(|entry| match SpaceGroup::from_entry(entry) {
      Ok(group) => Some(group),
      Err(e) => {
        log::error!("Skipping space group {} ({}): {}", entry.number, entry.hall_symbol, e);
        None
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sizes_and_order() {
    let reg = registry();
    assert_eq!(reg.standard().len(), STANDARD.len());
    assert_eq!(reg.alternate().len(), ALTERNATE.len());
    assert_eq!(reg.len(), STANDARD.len() + ALTERNATE.len());

    let numbers: Vec<i32> = reg.standard().iter().map(SpaceGroup::number).collect();
    assert_eq!(numbers, (1..=230).collect::<Vec<_>>());
    assert_eq!(reg.space_groups()[reg.standard().len()].pdb_name(), Some("P 1 1 2"));
  }

  #[test]
  fn test_every_definition_is_consistent() {
    for g in registry() {
      assert!(g.operators()[0].is_identity(), "{}", g);
      assert!((1..=230).contains(&g.number()));
      // rotation parts form the point group
      assert_eq!(g.num_primitive_sym_equiv(), g.point_group().order(), "{}", g);
      assert_eq!(g.num_sym_equiv() % g.num_primitive_sym_equiv(), 0, "{}", g);
    }
  }

  #[test]
  fn test_p1_has_only_identity() {
    let p1 = &registry().standard()[0];
    assert_eq!(p1.short_name(), Some("P1"));
    assert_eq!(p1.operators(), &[SymOp::identity()]);
  }

  #[test]
  fn test_build_is_idempotent() {
    assert!(std::ptr::eq(registry(), registry()));
    assert_eq!(Registry::from_catalogs(STANDARD, ALTERNATE), *registry());
  }

  #[test]
  fn test_bad_entries_are_skipped() {
    let rows = [
      SpaceGroupEntry {
        number: 2,
        short_name: Some("P-1"),
        pdb_name: None,
        alt_name: None,
        hall_symbol: "-P 1",
      },
      SpaceGroupEntry {
        number: 3,
        short_name: Some("Broken"),
        pdb_name: None,
        alt_name: None,
        hall_symbol: "Q 9",
      },
    ];
    let reg = Registry::from_catalogs(&rows, &[]);
    assert_eq!(reg.len(), 1);
    assert!(reg.alternate().is_empty());
  }

  #[test]
  fn test_find_by_operators() {
    let pnma = &registry().standard()[61];
    let mut shuffled = pnma.operators().to_vec();
    shuffled.rotate_left(3);
    let found = registry().find_by_operators(&shuffled).unwrap();
    assert!(std::ptr::eq(found, pnma));

    assert!(registry().find_by_operators(&[SymOp::from_xyz("-x,y,z").unwrap()]).is_none());
  }

  #[test]
  fn test_to_json_lists_everything() {
    let json = registry().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), registry().len());
    assert_eq!(list[0]["short_name"], "P1");
    assert_eq!(list[0]["operators"][0], "x,y,z");
  }
}
