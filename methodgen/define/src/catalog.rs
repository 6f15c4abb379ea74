//! Catalog loading.
//!
//! A catalog file is either a bare JSON array of endpoints or an object with
//! an `endpoints` array.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Endpoint;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog content is not a valid endpoint list.
    #[error("failed to decode {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The full set of endpoint definitions driving generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Catalog {
    pub endpoints: Vec<Endpoint>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Endpoint>),
    Wrapped { endpoints: Vec<Endpoint> },
}

impl Catalog {
    /// Creates a catalog from already-built endpoints.
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    /// Parses a catalog from JSON text.
    ///
    /// ## Errors
    ///
    /// Returns `CatalogError::Json` if the text is not an endpoint list.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        Self::decode(text, "catalog")
    }

    /// Reads and parses a catalog file.
    ///
    /// ## Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::Json` if its content is not an endpoint list.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::decode(&text, &path.display().to_string())
    }

    fn decode(text: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text).map_err(|source| CatalogError::Json {
            origin: origin.to_string(),
            source,
        })?;
        let endpoints = match file {
            CatalogFile::List(endpoints) | CatalogFile::Wrapped { endpoints } => endpoints,
        };
        Ok(Self { endpoints })
    }

    /// Returns the endpoint with the given dotted name.
    pub fn endpoint(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|endpoint| endpoint.name == name)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
