use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::{error::MatchError, validate_points};
use crate::models::{Circuit, CircuitSummary};

/// Errors that can occur while loading a circuit catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate circuit id: {0}")]
    DuplicateId(String),

    #[error("Invalid shape for circuit {id}: {source}")]
    InvalidShape {
        id: String,
        #[source]
        source: MatchError,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    circuits: Vec<Circuit>,
}

/// Read-only set of reference layouts, in file order
///
/// Shapes are validated once at load time so the matcher never sees a
/// non-finite coordinate coming from the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    circuits: Vec<Circuit>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_circuits(circuits: Vec<Circuit>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(circuits.len());

        for (position, circuit) in circuits.iter().enumerate() {
            validate_points(&circuit.points).map_err(|source| CatalogError::InvalidShape {
                id: circuit.id.clone(),
                source,
            })?;

            if index.insert(circuit.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(circuit.id.clone()));
            }
        }

        Ok(Self { circuits, index })
    }

    /// Load a catalog file, format chosen by extension (`.json` or `.toml`)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents)?,
            Some("toml") => Self::from_toml_str(&contents)?,
            other => {
                return Err(CatalogError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        tracing::info!("Loaded {} circuits from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(contents)?;
        Self::from_circuits(file.circuits)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::from_circuits(file.circuits)
    }

    pub fn get(&self, id: &str) -> Option<&Circuit> {
        self.index.get(id).map(|&position| &self.circuits[position])
    }

    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    pub fn iter(&self) -> impl Iterator<Item = &Circuit> {
        self.circuits.iter()
    }

    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }

    pub fn summaries(&self) -> Vec<CircuitSummary> {
        self.circuits
            .iter()
            .map(|circuit| CircuitSummary {
                id: circuit.id.clone(),
                name: circuit.name.clone(),
                points: circuit.points.len(),
            })
            .collect()
    }
}
