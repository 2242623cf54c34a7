//! Loads map-like JSON into a [`ResolutionTable`].
//!
//! Accepts `{ "imports": {..}, "scopes": { prefix: {..} } }` where each target
//! is a string or an array of strings. Keys and targets are taken verbatim;
//! no URL parsing happens here.

use crate::error::{LayermapError, Result};
use layermap_api::{FallbackList, ResolutionTable, ScopeMap, SpecifierMap};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Reject invalid entries instead of dropping them with a warning.
    pub strict: bool,
}

impl LoaderConfig {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

pub fn load_path(path: &Path, config: &LoaderConfig) -> Result<ResolutionTable> {
    debug!("Loading map from {}", path.display());
    let source = std::fs::read_to_string(path)?;
    load_str(&source, config)
}

pub fn load_str(source: &str, config: &LoaderConfig) -> Result<ResolutionTable> {
    let value: Value = serde_json::from_str(source)?;
    load_value(value, config)
}

pub fn load_value(value: Value, config: &LoaderConfig) -> Result<ResolutionTable> {
    let Value::Object(mut root) = value else {
        return Err(LayermapError::InvalidShape(
            "top-level value must be a JSON object".to_string(),
        ));
    };

    let imports = match root.remove("imports") {
        None => SpecifierMap::new(),
        Some(Value::Object(entries)) => load_specifier_map(entries, "imports", config)?,
        Some(_) => {
            return Err(LayermapError::InvalidShape(
                "\"imports\" must be a JSON object".to_string(),
            ));
        }
    };

    let scopes = match root.remove("scopes") {
        None => ScopeMap::new(),
        Some(Value::Object(entries)) => load_scopes(entries, config)?,
        Some(_) => {
            return Err(LayermapError::InvalidShape(
                "\"scopes\" must be a JSON object".to_string(),
            ));
        }
    };

    for key in root.keys() {
        warn!("Ignoring unknown top-level key \"{}\"", key);
    }

    Ok(ResolutionTable::new(imports, scopes))
}

fn load_scopes(entries: Map<String, Value>, config: &LoaderConfig) -> Result<ScopeMap> {
    let mut scopes = ScopeMap::new();
    for (prefix, value) in entries {
        let Value::Object(mapping) = value else {
            return Err(LayermapError::InvalidShape(format!(
                "scope \"{}\" must be a JSON object",
                prefix
            )));
        };
        let location = format!("scope \"{}\"", prefix);
        let mapping = load_specifier_map(mapping, &location, config)?;
        scopes.insert(prefix, mapping);
    }
    Ok(scopes.sorted_by_specificity())
}

fn load_specifier_map(
    entries: Map<String, Value>,
    location: &str,
    config: &LoaderConfig,
) -> Result<SpecifierMap> {
    let mut mapping = SpecifierMap::new();
    for (specifier, value) in entries {
        match normalize_targets(&specifier, value, config) {
            Ok(targets) => {
                mapping.insert(specifier, targets);
            }
            Err(reason) if config.strict => {
                return Err(LayermapError::InvalidEntry {
                    location: location.to_string(),
                    specifier,
                    reason,
                });
            }
            Err(reason) => {
                warn!("Dropping \"{}\" in {}: {}", specifier, location, reason);
            }
        }
    }
    Ok(mapping)
}

fn normalize_targets(
    specifier: &str,
    value: Value,
    config: &LoaderConfig,
) -> std::result::Result<FallbackList, String> {
    if specifier.is_empty() {
        return Err("specifier key must not be empty".to_string());
    }

    let targets = match value {
        Value::String(target) => vec![target],
        Value::Array(items) => {
            let mut targets = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(target) => targets.push(target),
                    other if config.strict => {
                        return Err(format!("non-string target {}", other));
                    }
                    other => {
                        warn!("Skipping non-string target {} for \"{}\"", other, specifier)
                    }
                }
            }
            targets
        }
        other => return Err(format!("expected a string or an array, found {}", other)),
    };

    FallbackList::try_new(targets).map_err(|e| e.to_string())
}
