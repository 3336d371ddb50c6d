// src/error.rs

use crate::resolver::UnknownSpaceGroup;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error(transparent)]
  UnknownSpaceGroup(#[from] UnknownSpaceGroup),

  #[error("Invalid Hall symbol {symbol:?}: {reason}")]
  HallSymbol { symbol: String, reason: String },

  #[error("Invalid symmetry operation {op:?}: {reason}")]
  SymOp { op: String, reason: String },

  #[error("Invalid space group {number}: {reason}")]
  Definition { number: i32, reason: String },

  #[error("Invalid lattice (determinant is zero)")]
  SingularLattice,

  #[error("Symmetry search failed: {0}")]
  Symmetry(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn hall(symbol: &str, reason: impl Into<String>) -> Self {
    Error::HallSymbol {
      symbol: symbol.to_string(),
      reason: reason.into(),
    }
  }

  pub(crate) fn symop(op: &str, reason: impl Into<String>) -> Self {
    Error::SymOp {
      op: op.to_string(),
      reason: reason.into(),
    }
  }
}
