// src/data/mod.rs
//! Static space group tables.
//!
//! Two independent catalogs feed the registry, in this order:
//! 1. [`standard::STANDARD`]: one standard setting per International Tables number.
//! 2. [`alternate::ALTERNATE`]: alternate settings of the same groups.
//!
//! Entries carry a Hall symbol; the operator lists are generated from it when
//! the registry is built.

pub mod alternate;
pub mod standard;

/// One row of a static catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceGroupEntry {
  pub number: i32,
  /// `None` means "derive from `pdb_name` by dropping blanks".
  pub short_name: Option<&'static str>,
  pub pdb_name: Option<&'static str>,
  pub alt_name: Option<&'static str>,
  pub hall_symbol: &'static str,
}

impl SpaceGroupEntry {
  pub fn short_name(&self) -> Option<String> {
    match (self.short_name, self.pdb_name) {
      (Some(s), _) => Some(s.to_string()),
      (None, Some(pdb)) => Some(pdb.chars().filter(|c| !c.is_whitespace()).collect()),
      (None, None) => None,
    }
  }
}

/// Standard-catalog row: number, short name, PDB name, Hall symbol, optional alt name.
macro_rules! sg {
  ($num:expr, $short:expr, $pdb:expr, $hall:expr) => {
    $crate::data::SpaceGroupEntry {
      number: $num,
      short_name: Some($short),
      pdb_name: Some($pdb),
      alt_name: None,
      hall_symbol: $hall,
    }
  };
  ($num:expr, $short:expr, $pdb:expr, $hall:expr, $alt:expr) => {
    $crate::data::SpaceGroupEntry {
      number: $num,
      short_name: Some($short),
      pdb_name: Some($pdb),
      alt_name: Some($alt),
      hall_symbol: $hall,
    }
  };
}

/// Alternate-catalog row: number, full symbol of the setting, Hall symbol.
macro_rules! setting {
  ($num:expr, $pdb:expr, $hall:expr) => {
    $crate::data::SpaceGroupEntry {
      number: $num,
      short_name: None,
      pdb_name: Some($pdb),
      alt_name: None,
      hall_symbol: $hall,
    }
  };
}

pub(crate) use setting;
pub(crate) use sg;
