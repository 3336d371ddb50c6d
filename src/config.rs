// src/config.rs

use directories::ProjectDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::logger;

fn default_symprec() -> f64 {
  1e-4
}

fn default_position_tolerance() -> f64 {
  1e-3
}

fn default_log_level() -> String {
  "info".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  /// Distance tolerance (Angstrom) handed to the symmetry search.
  #[serde(default = "default_symprec")]
  pub symprec: f64,

  /// Fractional tolerance for merging symmetry-equivalent sites.
  #[serde(default = "default_position_tolerance")]
  pub position_tolerance: f64,

  #[serde(default = "default_log_level")]
  pub log_level: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      symprec: default_symprec(),
      position_tolerance: default_position_tolerance(),
      log_level: default_log_level(),
    }
  }
}

impl Config {
  /// Loads from the OS config location (e.g. ~/.config/crystal-structure/settings.json).
  /// Missing or unreadable files fall back to the defaults.
  pub fn load() -> Self {
    let path = Self::path();
    if !path.exists() {
      log::info!("No config found at {:?}. Using defaults.", path);
      return Self::default();
    }
    match Self::load_from(&path) {
      Ok(cfg) => {
        log::info!("Config loaded from {:?}", path);
        cfg
      }
      Err(e) => {
        log::warn!("Error reading config {:?}: {}. Using defaults.", path, e);
        Self::default()
      }
    }
  }

  pub fn load_from(path: &Path) -> Result<Self> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
  }

  /// Saves to the OS config location and returns the path written.
  pub fn save(&self) -> Result<PathBuf> {
    let path = Self::path();
    self.save_to(&path)?;
    log::info!("Config saved to {:?}", path);
    Ok(path)
  }

  pub fn save_to(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, self)?;
    Ok(())
  }

  pub fn level_filter(&self) -> LevelFilter {
    logger::parse_level(&self.log_level)
  }

  pub fn path() -> PathBuf {
    match ProjectDirs::from("org", "crystal-structure", "crystal-structure") {
      Some(proj) => proj.config_dir().join("settings.json"),
      None => PathBuf::from("settings.json"),
    }
  }
}
