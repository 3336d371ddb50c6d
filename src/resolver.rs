// src/resolver.rs
//! Maps user-supplied space group identifiers onto registry definitions.
//!
//! Keys are the number (as an integer and as a string), the short name, the
//! PDB name and the alternate name of every definition. When two definitions
//! share a key, the first one in registry order owns it.
//!
//! A string that misses the index is retried, in order, as:
//! 1. title case (trimmed, first character upper, the rest lower),
//! 2. upper case (trimmed),
//! 3. the original with all whitespace removed.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::model::space_group::SpaceGroup;
use crate::registry::registry;

/// A space group number or name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Identifier {
  Number(i32),
  Name(String),
}

impl From<i32> for Identifier {
  fn from(n: i32) -> Self {
    Identifier::Number(n)
  }
}

impl From<&str> for Identifier {
  fn from(s: &str) -> Self {
    Identifier::Name(s.to_string())
  }
}

impl From<String> for Identifier {
  fn from(s: String) -> Self {
    Identifier::Name(s)
  }
}

impl From<&String> for Identifier {
  fn from(s: &String) -> Self {
    Identifier::Name(s.clone())
  }
}

impl fmt::Display for Identifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Identifier::Number(n) => write!(f, "{}", n),
      Identifier::Name(s) => write!(f, "{:?}", s),
    }
  }
}

/// Raised when no definition matches an identifier, after every normalization.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown space group identifier {0}")]
pub struct UnknownSpaceGroup(pub Identifier);

impl UnknownSpaceGroup {
  /// The identifier exactly as the caller passed it.
  pub fn identifier(&self) -> &Identifier {
    &self.0
  }
}

/// Key -> position in the definition slice.
#[derive(Debug, Default)]
struct Index {
  numbers: HashMap<i32, usize>,
  names: HashMap<String, usize>,
}

impl Index {
  fn build(groups: &[SpaceGroup]) -> Self {
    let mut index = Index::default();
    for (pos, group) in groups.iter().enumerate() {
      index.numbers.entry(group.number()).or_insert(pos);
      index.names.entry(group.number().to_string()).or_insert(pos);
      for name in group.names() {
        index.names.entry(name.to_string()).or_insert(pos);
      }
    }
    // names() never yields blanks; keep the index free of them regardless
    index.names.remove("");
    index
  }

  fn len(&self) -> usize {
    self.numbers.len() + self.names.len()
  }

  fn get_name(&self, name: &str) -> Option<usize> {
    self.names.get(name).copied()
  }

  fn find(&self, id: &Identifier) -> Option<usize> {
    match id {
      Identifier::Number(n) => self.numbers.get(n).copied(),
      Identifier::Name(name) => self
        .get_name(name)
        .or_else(|| self.get_name(&title_case(name)))
        .or_else(|| self.get_name(&name.trim().to_uppercase()))
        .or_else(|| self.get_name(&remove_blanks(name))),
    }
  }
}

/// Resolves identifiers against a slice of definitions.
///
/// The index is built on first use and shared by every later call; concurrent
/// first calls build it once.
pub struct SpaceGroupResolver<'a> {
  groups: &'a [SpaceGroup],
  index: OnceLock<Index>,
}

impl<'a> SpaceGroupResolver<'a> {
  pub fn new(groups: &'a [SpaceGroup]) -> Self {
    SpaceGroupResolver {
      groups,
      index: OnceLock::new(),
    }
  }

  fn index(&self) -> &Index {
    self.index.get_or_init(|| {
      let index = Index::build(self.groups);
      log::debug!(
        "Space group index built: {} keys over {} definitions",
        index.len(),
        self.groups.len()
      );
      index
    })
  }

  /// Non-failing lookup: the matching definition, if any.
  pub fn lookup(&self, id: impl Into<Identifier>) -> Option<&'a SpaceGroup> {
    let id = id.into();
    self.index().find(&id).map(|pos| &self.groups[pos])
  }

  pub fn resolve(&self, id: impl Into<Identifier>) -> Result<&'a SpaceGroup, UnknownSpaceGroup> {
    let id = id.into();
    match self.index().find(&id) {
      Some(pos) => Ok(&self.groups[pos]),
      None => Err(UnknownSpaceGroup(id)),
    }
  }

  pub fn can_resolve(&self, id: impl Into<Identifier>) -> bool {
    self.lookup(id).is_some()
  }

  /// Drops the cached index; the next query rebuilds it.
  pub fn rebuild(&mut self) {
    self.index = OnceLock::new();
  }

  /// Points the resolver at a new set of definitions.
  pub fn set_groups(&mut self, groups: &'a [SpaceGroup]) {
    self.groups = groups;
    self.rebuild();
  }

  pub fn groups(&self) -> &'a [SpaceGroup] {
    self.groups
  }

  /// Number of keys in the index, building it if needed.
  pub fn index_len(&self) -> usize {
    self.index().len()
  }
}

static RESOLVER: OnceLock<SpaceGroupResolver<'static>> = OnceLock::new();

/// Resolver over the process-wide registry.
pub fn resolver() -> &'static SpaceGroupResolver<'static> {
  RESOLVER.get_or_init(|| SpaceGroupResolver::new(registry().space_groups()))
}

pub fn get_space_group(id: impl Into<Identifier>) -> Result<&'static SpaceGroup, UnknownSpaceGroup> {
  resolver().resolve(id)
}

pub fn is_space_group_identifier(id: impl Into<Identifier>) -> bool {
  resolver().can_resolve(id)
}

fn title_case(s: &str) -> String {
  let mut chars = s.trim().chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    None => String::new(),
  }
}

fn remove_blanks(s: &str) -> String {
  s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::symop::SymOp;
  use crate::registry::Registry;

  fn named(number: i32, short: &str) -> SpaceGroup {
    SpaceGroup::new(number, Some(short), None, None, vec![SymOp::identity()]).unwrap()
  }

  #[test]
  fn test_every_number_resolves() {
    for g in registry() {
      assert_eq!(get_space_group(g.number()).unwrap().number(), g.number());
      assert_eq!(get_space_group(g.number().to_string()).unwrap().number(), g.number());
    }
  }

  #[test]
  fn test_every_short_name_resolves() {
    for g in registry() {
      if let Some(name) = g.short_name() {
        assert_eq!(get_space_group(name).unwrap().short_name(), Some(name));
      }
    }
  }

  #[test]
  fn test_case_and_blank_normalization() {
    let pnma = get_space_group("Pnma").unwrap();
    assert_eq!(pnma.number(), 62);
    for spelling in ["pnma", "PNMA", "  pnma ", "p n m a"] {
      assert!(std::ptr::eq(get_space_group(spelling).unwrap(), pnma), "{}", spelling);
    }

    let p21c = get_space_group("P21/c").unwrap();
    for spelling in ["p21/c", "P 21/c", "P\t21/c", "p 1 21/c 1"] {
      assert!(std::ptr::eq(get_space_group(spelling).unwrap(), p21c), "{}", spelling);
    }

    // only the upper-case retry matches this one
    let rhombohedral = get_space_group("r3:r").unwrap();
    assert_eq!(rhombohedral.short_name(), Some("R3:R"));
  }

  #[test]
  fn test_title_case_keeps_its_quirks() {
    assert_eq!(title_case("  fD-3M "), "Fd-3m");
    assert_eq!(title_case("p42/MNM"), "P42/mnm");
    assert_eq!(title_case(""), "");
    assert!(is_space_group_identifier("fD-3M"));
    // the tail is lower-cased too, so a mixed-case setting suffix is lost
    assert_eq!(title_case("r3:R"), "R3:r");
  }

  #[test]
  fn test_unknown_identifiers() {
    let err = get_space_group(12345).unwrap_err();
    assert_eq!(err.identifier(), &Identifier::Number(12345));
    assert!(err.to_string().contains("12345"));

    let err = get_space_group("NotARealSpaceGroup").unwrap_err();
    assert_eq!(err.to_string(), "Unknown space group identifier \"NotARealSpaceGroup\"");
    assert!(!is_space_group_identifier("NotARealSpaceGroup"));
    assert!(!is_space_group_identifier(""));
    assert!(!is_space_group_identifier("   "));
    assert!(!is_space_group_identifier(0));
  }

  #[test]
  fn test_p1() {
    assert!(is_space_group_identifier(1));
    let p1 = get_space_group(1).unwrap();
    assert_eq!(p1.operators().len(), 1);
    assert_eq!(p1.operators()[0].rotation(), [[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
    assert_eq!(p1.operators()[0].translation(), [0.0, 0.0, 0.0]);
  }

  #[test]
  fn test_standard_setting_wins_number_collisions() {
    let reg = registry();
    let p21c = get_space_group(14).unwrap();
    assert!(std::ptr::eq(p21c, &reg.standard()[13]));
    assert!(std::ptr::eq(get_space_group("14").unwrap(), p21c));
    // the alternate settings are still reachable by name
    assert_eq!(get_space_group("P 1 21/n 1").unwrap().number(), 14);
    assert!(!std::ptr::eq(get_space_group("P121/n1").unwrap(), p21c));
  }

  #[test]
  fn test_first_catalog_wins_in_custom_registry() {
    let reg = Registry::from_definitions(
      vec![named(5, "First"), named(7, "Shared")],
      vec![named(5, "Second"), named(9, "Shared")],
    );
    let resolver = SpaceGroupResolver::new(reg.space_groups());
    for _ in 0..3 {
      assert_eq!(resolver.resolve(5).unwrap().short_name(), Some("First"));
      assert_eq!(resolver.resolve("5").unwrap().short_name(), Some("First"));
      assert_eq!(resolver.resolve("Shared").unwrap().number(), 7);
    }
    assert_eq!(resolver.resolve("Second").unwrap().number(), 5);
    assert_eq!(resolver.resolve(9).unwrap().short_name(), Some("Shared"));
  }

  #[test]
  fn test_blank_names_are_not_keys() {
    let groups = vec![SpaceGroup::new(3, Some(""), Some(" "), None, vec![SymOp::identity()]).unwrap()];
    let resolver = SpaceGroupResolver::new(&groups);
    // integer 3 and "3"
    assert_eq!(resolver.index_len(), 2);
    assert!(!resolver.can_resolve(""));
  }

  #[test]
  fn test_repeatable_and_rebuildable() {
    let first = vec![named(1, "One")];
    let second = vec![named(2, "Two")];
    let mut resolver = SpaceGroupResolver::new(&first);

    assert!(resolver.can_resolve("one"));
    let before = resolver.resolve("ONE").map(SpaceGroup::number);
    let len = resolver.index_len();
    for _ in 0..5 {
      assert_eq!(resolver.resolve("ONE").map(SpaceGroup::number), before);
      assert_eq!(resolver.index_len(), len);
    }

    resolver.rebuild();
    assert_eq!(resolver.resolve("ONE").map(SpaceGroup::number), before);

    resolver.set_groups(&second);
    assert!(!resolver.can_resolve("One"));
    assert_eq!(resolver.resolve(2).unwrap().short_name(), Some("Two"));
  }

  #[test]
  fn test_concurrent_first_use() {
    let reg = registry();
    let resolver = SpaceGroupResolver::new(reg.space_groups());
    let shared = &resolver;
    std::thread::scope(|s| {
      let handles: Vec<_> = (0..8)
        .map(|i: i32| s.spawn(move || (shared.resolve(225 - i).map(|g| g.number()), shared.index_len())))
        .collect();
      let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
      for (i, (number, len)) in results.into_iter().enumerate() {
        assert_eq!(number, Ok(225 - i as i32));
        assert_eq!(len, resolver.index_len());
      }
    });
  }

  #[test]
  fn test_identifier_display() {
    assert_eq!(Identifier::from(62).to_string(), "62");
    assert_eq!(Identifier::from("Pnma").to_string(), "\"Pnma\"");
    assert_eq!(Identifier::from(String::from("x")), Identifier::Name("x".into()));
  }
}
