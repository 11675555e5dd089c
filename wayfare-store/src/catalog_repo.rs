use std::path::Path;
use wayfare_catalog::StaticCatalog;
use crate::app_config::CatalogConfig;
use crate::StoreError;

/// Parses a `{"flights": [...], "hotels": [...]}` document.
pub fn parse_catalog(json: &str) -> Result<StaticCatalog, StoreError> {
    let catalog: StaticCatalog = serde_json::from_str(json)?;
    Ok(catalog)
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<StaticCatalog, StoreError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;

    if catalog.is_empty() {
        tracing::warn!("Catalog file {} has no flights or hotels", path.display());
    }
    tracing::info!(
        flights = catalog.flights.len(),
        hotels = catalog.hotels.len(),
        "Loaded catalog from {}",
        path.display()
    );
    Ok(catalog)
}

/// Catalog named by the configuration, or the sample catalog when none is set.
pub fn catalog_from_config(config: &CatalogConfig) -> Result<StaticCatalog, StoreError> {
    match &config.path {
        Some(path) => load_catalog(path),
        None => {
            tracing::info!("No catalog path configured, using sample catalog");
            Ok(StaticCatalog::sample())
        }
    }
}
