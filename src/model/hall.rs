// src/model/hall.rs
//! Hall symbol parsing and expansion into full operator lists.
//!
//! Grammar: `[-]L N1 [N2 [N3 [N4]]] [(va vb vc)]` where `L` is the lattice
//! symbol, each `N` is `[-]n[axis][translations]`, and the optional vector is an
//! origin shift in twelfths.

use crate::error::{Error, Result};
use crate::model::symop::SymOp;

const IDENTITY: [[i32; 3]; 3] = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

/// A parsed Hall symbol: lattice, generators and origin shift.
#[derive(Clone, Debug, PartialEq)]
pub struct HallSymbol {
  symbol: String,
  lattice: char,
  centrosymmetric: bool,
  generators: Vec<SymOp>,
  origin_shift: [i32; 3],
}

impl HallSymbol {
  pub fn parse(symbol: &str) -> Result<Self> {
    let (body, origin_shift) = match symbol.find('(') {
      Some(idx) => (&symbol[..idx], parse_shift(symbol, &symbol[idx..])?),
      None => (symbol, [0, 0, 0]),
    };

    let mut tokens = body.split_whitespace();
    let lattice_token = tokens.next().ok_or_else(|| Error::hall(symbol, "empty symbol"))?;
    let (centrosymmetric, lattice_part) = match lattice_token.strip_prefix('-') {
      Some(rest) => (true, rest),
      None => (false, lattice_token),
    };
    let lattice = match lattice_part {
      "P" | "A" | "B" | "C" | "I" | "R" | "F" => lattice_part.chars().next().unwrap_or('P'),
      other => return Err(Error::hall(symbol, format!("unknown lattice symbol {:?}", other))),
    };

    let mut generators = Vec::new();
    let mut previous: Option<(u8, char)> = None;
    for (idx, token) in tokens.enumerate() {
      if idx > 3 {
        return Err(Error::hall(symbol, "too many rotation symbols"));
      }
      let (op, order, axis) = parse_rotation(symbol, token, idx, previous)?;
      generators.push(op);
      previous = Some((order, axis));
    }

    if centrosymmetric {
      generators.push(SymOp::from_parts(negate(&IDENTITY), [0, 0, 0]));
    }

    Ok(HallSymbol {
      symbol: symbol.trim().to_string(),
      lattice,
      centrosymmetric,
      generators,
      origin_shift,
    })
  }

  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn lattice_symbol(&self) -> char {
    self.lattice
  }

  /// True when the symbol carries inversion at the origin (leading `-`).
  pub fn has_inversion_at_origin(&self) -> bool {
    self.centrosymmetric
  }

  pub fn generators(&self) -> &[SymOp] {
    &self.generators
  }

  /// Lattice centering vectors in twelfths, excluding the null vector.
  pub fn centering_translations(&self) -> &'static [[i32; 3]] {
    centering(self.lattice)
  }

  /// All operators of the group modulo integer lattice translations.
  ///
  /// Order: identity, primitive coset representatives in discovery order,
  /// then the same list once per centering vector.
  pub fn operators(&self) -> Vec<SymOp> {
    let mut primitive = vec![SymOp::identity()];
    let mut i = 0;
    while i < primitive.len() {
      let current = primitive[i];
      for g in &self.generators {
        let candidate = g.compose(&current);
        // one representative per rotation part; translations then differ by centering only
        if !primitive.iter().any(|p| p.rotation() == candidate.rotation()) {
          primitive.push(candidate);
        }
      }
      i += 1;
    }

    let mut ops = primitive.clone();
    for c in self.centering_translations() {
      ops.extend(primitive.iter().map(|p| p.translated(*c)));
    }

    if self.origin_shift != [0, 0, 0] {
      for op in ops.iter_mut() {
        *op = op.origin_shifted(self.origin_shift);
      }
    }
    ops
  }
}

/// Parses `symbol` and returns its full operator list.
pub fn expand(symbol: &str) -> Result<Vec<SymOp>> {
  Ok(HallSymbol::parse(symbol)?.operators())
}

fn centering(lattice: char) -> &'static [[i32; 3]] {
  match lattice {
    'A' => &[[0, 6, 6]],
    'B' => &[[6, 0, 6]],
    'C' => &[[6, 6, 0]],
    'I' => &[[6, 6, 6]],
    'R' => &[[8, 4, 4], [4, 8, 8]],
    'F' => &[[0, 6, 6], [6, 0, 6], [6, 6, 0]],
    _ => &[],
  }
}

fn parse_shift(symbol: &str, text: &str) -> Result<[i32; 3]> {
  let inner = text
    .trim()
    .strip_prefix('(')
    .and_then(|s| s.strip_suffix(')'))
    .ok_or_else(|| Error::hall(symbol, "unterminated origin shift"))?;
  if inner.contains(',') {
    return Err(Error::hall(symbol, "change-of-basis matrices are not supported"));
  }
  let values: Vec<i32> = inner
    .split_whitespace()
    .map(|v| v.parse::<i32>())
    .collect::<std::result::Result<_, _>>()
    .map_err(|_| Error::hall(symbol, "origin shift must be integers"))?;
  match values.as_slice() {
    [a, b, c] => Ok([*a, *b, *c]),
    _ => Err(Error::hall(symbol, "origin shift needs three components")),
  }
}

/// Parses one rotation token; returns the operator, its order and resolved axis.
fn parse_rotation(
  symbol: &str,
  token: &str,
  idx: usize,
  previous: Option<(u8, char)>,
) -> Result<(SymOp, u8, char)> {
  let mut chars = token.chars().peekable();
  let improper = chars.next_if_eq(&'-').is_some();
  let order = match chars.next() {
    Some('1') => 1,
    Some('2') => 2,
    Some('3') => 3,
    Some('4') => 4,
    Some('6') => 6,
    _ => return Err(Error::hall(symbol, format!("bad rotation symbol {:?}", token))),
  };

  let mut axis: Option<char> = None;
  let mut screw: Option<i32> = None;
  let mut trans = [0; 3];
  for c in chars {
    match c {
      'x' | 'y' | 'z' | '\'' | '"' | '*' => {
        if axis.replace(c).is_some() {
          return Err(Error::hall(symbol, format!("two axes in {:?}", token)));
        }
      }
      '1'..='5' => screw = Some(c as i32 - '0' as i32),
      'a' => trans[0] += 6,
      'b' => trans[1] += 6,
      'c' => trans[2] += 6,
      'n' => trans = [trans[0] + 6, trans[1] + 6, trans[2] + 6],
      'u' => trans[0] += 3,
      'v' => trans[1] += 3,
      'w' => trans[2] += 3,
      'd' => trans = [trans[0] + 3, trans[1] + 3, trans[2] + 3],
      _ => return Err(Error::hall(symbol, format!("bad character {:?} in {:?}", c, token))),
    }
  }

  let previous_order = previous.map(|(o, _)| o);
  let axis = match axis {
    Some(a) => a,
    None => match (idx, order, previous_order) {
      (_, 1, _) | (0, _, _) => 'z',
      (1, 2, Some(2)) | (1, 2, Some(4)) => 'x',
      (1, 2, Some(3)) | (1, 2, Some(6)) => '\'',
      (_, 3, _) => '*',
      _ => return Err(Error::hall(symbol, format!("cannot infer axis of {:?}", token))),
    },
  };

  let rotation = match axis {
    '\'' | '"' => {
      let principal = match previous {
        Some((_, p @ ('x' | 'y' | 'z'))) => p,
        // rhombohedral axes: the two-fold after 3* is taken relative to c
        Some((_, '*')) => 'z',
        _ => return Err(Error::hall(symbol, format!("{:?} needs a preceding axis", token))),
      };
      if order != 2 {
        return Err(Error::hall(symbol, "diagonal axes only carry two-fold rotations"));
      }
      diagonal_twofold(axis, principal)
    }
    _ => base_rotation(order, axis)
      .ok_or_else(|| Error::hall(symbol, format!("no {}-fold rotation along {:?}", order, axis)))?,
  };

  if let Some(k) = screw {
    let step = 12 * k / order as i32;
    match axis {
      'x' => trans[0] += step,
      'y' => trans[1] += step,
      'z' => trans[2] += step,
      _ => return Err(Error::hall(symbol, "screw components need a principal axis")),
    }
  }

  let rotation = if improper { negate(&rotation) } else { rotation };
  Ok((SymOp::from_parts(rotation, trans), order, axis))
}

fn base_rotation(order: u8, axis: char) -> Option<[[i32; 3]; 3]> {
  let m = match (order, axis) {
    (1, _) => IDENTITY,
    (2, 'x') => [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
    (2, 'y') => [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
    (2, 'z') => [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
    (3, 'x') => [[1, 0, 0], [0, 0, -1], [0, 1, -1]],
    (3, 'y') => [[-1, 0, 1], [0, 1, 0], [-1, 0, 0]],
    (3, 'z') => [[0, -1, 0], [1, -1, 0], [0, 0, 1]],
    (3, '*') => [[0, 0, 1], [1, 0, 0], [0, 1, 0]],
    (4, 'x') => [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
    (4, 'y') => [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
    (4, 'z') => [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
    (6, 'x') => [[1, 0, 0], [0, 1, -1], [0, 1, 0]],
    (6, 'y') => [[0, 0, 1], [0, 1, 0], [-1, 0, 1]],
    (6, 'z') => [[1, -1, 0], [1, 0, 0], [0, 0, 1]],
    _ => return None,
  };
  Some(m)
}

/// Two-fold axes along face diagonals, relative to the preceding principal axis.
fn diagonal_twofold(kind: char, principal: char) -> [[i32; 3]; 3] {
  match (kind, principal) {
    ('\'', 'x') => [[-1, 0, 0], [0, 0, -1], [0, -1, 0]],
    ('"', 'x') => [[-1, 0, 0], [0, 0, 1], [0, 1, 0]],
    ('\'', 'y') => [[0, 0, -1], [0, -1, 0], [-1, 0, 0]],
    ('"', 'y') => [[0, 0, 1], [0, -1, 0], [1, 0, 0]],
    ('\'', _) => [[0, -1, 0], [-1, 0, 0], [0, 0, -1]],
    _ => [[0, 1, 0], [1, 0, 0], [0, 0, -1]],
  }
}

fn negate(m: &[[i32; 3]; 3]) -> [[i32; 3]; 3] {
  m.map(|row| row.map(|v| -v))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ops(symbol: &str) -> Vec<String> {
    expand(symbol).unwrap().iter().map(|op| op.to_string()).collect()
  }

  #[test]
  fn test_triclinic() {
    assert_eq!(ops("P 1"), vec!["x,y,z"]);
    assert_eq!(ops("-P 1"), vec!["x,y,z", "-x,-y,-z"]);
  }

  #[test]
  fn test_p21_c() {
    let list = ops("-P 2ybc");
    assert_eq!(list.len(), 4);
    assert_eq!(list[0], "x,y,z");
    for expected in ["-x,y+1/2,-z+1/2", "-x,-y,-z", "x,-y+1/2,z+1/2"] {
      assert!(list.contains(&expected.to_string()), "missing {}", expected);
    }
  }

  #[test]
  fn test_pnma() {
    let list = ops("-P 2ac 2n");
    assert_eq!(list.len(), 8);
    for expected in [
      "-x+1/2,-y,z+1/2",
      "-x,y+1/2,-z",
      "x+1/2,-y+1/2,-z+1/2",
      "x+1/2,y,-z+1/2",
      "x,-y+1/2,z",
      "-x+1/2,y+1/2,z+1/2",
    ] {
      assert!(list.contains(&expected.to_string()), "missing {}", expected);
    }
  }

  #[test]
  fn test_centering_copies() {
    let list = ops("C 2y");
    assert_eq!(list, vec!["x,y,z", "-x,y,-z", "x+1/2,y+1/2,z", "-x+1/2,y+1/2,-z"]);

    let hs = HallSymbol::parse("R 3").unwrap();
    assert_eq!(hs.lattice_symbol(), 'R');
    assert_eq!(hs.operators().len(), 9);
    assert_eq!(ops("P 3*"), vec!["x,y,z", "z,x,y", "y,z,x"]);
  }

  #[test]
  fn test_rhombohedral_axes() {
    let r32 = ops("P 3* 2");
    assert_eq!(r32.len(), 6);
    for expected in ["-y,-x,-z", "-x,-z,-y", "-z,-y,-x"] {
      assert!(r32.contains(&expected.to_string()), "missing {}", expected);
    }
    assert!(ops("P 3* -2n").contains(&"y+1/2,x+1/2,z+1/2".to_string()));
  }

  #[test]
  fn test_origin_shift_vectors() {
    let p3112 = ops("P 31 2c (0 0 1)");
    assert_eq!(p3112.len(), 6);
    assert!(p3112.contains(&"-y,-x,-z+2/3".to_string()));
    assert!(p3112.contains(&"-y,x-y,z+1/3".to_string()));

    let p6122 = ops("P 61 2 (0 0 -1)");
    assert_eq!(p6122.len(), 12);
    assert!(p6122.contains(&"-y,-x,-z+5/6".to_string()));
    assert!(p6122.contains(&"x-y,x,z+1/6".to_string()));
  }

  #[test]
  fn test_cubic_orders() {
    assert_eq!(expand("P 2 2 3").unwrap().len(), 12);
    assert_eq!(expand("-P 4 2 3").unwrap().len(), 48);
    assert_eq!(expand("F 4d 2 3 -1d").unwrap().len(), 192);
    assert_eq!(expand("-F 4vw 2vw 3").unwrap().len(), 192);
    assert_eq!(expand("-I 4bd 2c 3").unwrap().len(), 96);
  }

  #[test]
  fn test_inversion_flag() {
    let hs = HallSymbol::parse("-P 4a 2bc 3").unwrap();
    assert!(hs.has_inversion_at_origin());
    let hs = HallSymbol::parse("P 4 2 3 -1n").unwrap();
    assert!(!hs.has_inversion_at_origin());
    assert_eq!(hs.operators().len(), 48);
  }

  #[test]
  fn test_invalid_symbols() {
    assert!(HallSymbol::parse("").is_err());
    assert!(HallSymbol::parse("Q 2").is_err());
    assert!(HallSymbol::parse("P 5").is_err());
    assert!(HallSymbol::parse("P 2q").is_err());
    assert!(HallSymbol::parse("P 2 (0 0)").is_err());
    assert!(HallSymbol::parse("P 2 (0 0 1").is_err());
    assert!(HallSymbol::parse("P 2\"").is_err());
  }
}
