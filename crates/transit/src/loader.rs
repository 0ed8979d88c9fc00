//! Loading the route document from disk.
//!
//! [`load`] reports failures to the caller. [`load_or_default`] is the policy
//! the server uses at startup: log the failure and carry on with an empty
//! dataset so the API still answers.

use std::path::Path;

use crate::models::types::{Dataset, LoadError};

/// Read and parse the route document at `path`
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = Dataset::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "Loaded {} jeepney routes", dataset.routes.len());
    Ok(dataset)
}

/// Like [`load`], but falls back to an empty dataset on any failure
pub fn load_or_default(path: impl AsRef<Path>) -> Dataset {
    load(path).unwrap_or_else(|err| {
        tracing::error!("Error loading routes data: {err}");
        Dataset::default()
    })
}
