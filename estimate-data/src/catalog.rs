//! Design-set catalog loading.
//!
//! A catalog is a TOML document holding one `[[design]]` table per design
//! set. The three canned sets ship inside the crate and are available through
//! [`DesignCatalog::bundled`]; other catalogs can be read from disk with
//! [`DesignCatalog::from_path`].
//!
//! ## Document shape
//!
//! ```toml
//! [[design]]
//! id = 1
//! layout_variant = "default"
//!
//! [design.header]
//! estimate_number = "EST-449271"
//! title = "Roof Replacement"
//! status = "Quoted"
//! created_date = "Jan 6, 2026"
//!
//! [design.workscopes]
//! estimate_total = "$843.00"
//! workscope_label = "1 IKO-Dynasty"
//!
//! [design.payment]
//! financing_option = "None"
//! applied_date = "-"
//! total_savings = "$0.00"
//! total_paid = "$0.00"
//! remaining = "$843.00"
//! payments_recorded = 0
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use estimate_core::models::{DesignId, DesignSet};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const BUNDLED_CATALOG: &str = include_str!("../data/design_sets.toml");

/// Errors that can occur when loading a design catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("design {0} appears more than once in the catalog")]
    DuplicateDesign(DesignId),

    #[error("design {0} not found in catalog")]
    UnknownDesign(DesignId),

    #[error("catalog contains no design sets")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    design: Vec<DesignSet>,
}

/// The design sets available for selection, keyed by id.
#[derive(Debug, Clone)]
pub struct DesignCatalog {
    designs: BTreeMap<DesignId, DesignSet>,
}

impl DesignCatalog {
    /// The three canned design sets compiled into this crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUNDLED_CATALOG)
    }

    /// Parses a catalog document.
    ///
    /// Every design id must be unique and at least one design must be present.
    pub fn from_toml_str(document: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogDocument = toml::from_str(document)?;
        if parsed.design.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut designs = BTreeMap::new();
        for design in parsed.design {
            let id = design.id;
            if designs.insert(id, design).is_some() {
                return Err(CatalogError::DuplicateDesign(id));
            }
        }

        debug!(count = designs.len(), "loaded design catalog");
        Ok(Self { designs })
    }

    /// Reads and parses a catalog document from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let document = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&document)
    }

    /// Looks up one design set.
    pub fn get(
        &self,
        id: DesignId,
    ) -> Result<&DesignSet, CatalogError> {
        self.designs.get(&id).ok_or(CatalogError::UnknownDesign(id))
    }

    /// Ids of every design set, ascending.
    pub fn ids(&self) -> Vec<DesignId> {
        self.designs.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DesignSet> {
        self.designs.values()
    }
}
