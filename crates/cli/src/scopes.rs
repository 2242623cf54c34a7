use crate::load_and_compose;
use layermap_api::ResolutionTable;
use layermap_core::LoaderConfig;
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

const GLOBAL_SCOPE: &str = "(global)";

#[derive(Tabled, Debug, PartialEq)]
struct ScopeRow {
    #[tabled(rename = "Scope")]
    scope: String,
    #[tabled(rename = "Specifier")]
    specifier: String,
    #[tabled(rename = "Targets")]
    targets: String,
}

/// Scoped entries first, most specific scope first, then the global imports.
fn rows(table: &ResolutionTable) -> Vec<ScopeRow> {
    let scoped = table
        .scopes
        .clone()
        .sorted_by_specificity()
        .into_iter()
        .flat_map(|(scope, mapping)| {
            mapping.into_iter().map(move |(specifier, targets)| ScopeRow {
                scope: scope.clone(),
                specifier,
                targets: targets.into_inner().join(", "),
            })
        });

    let global = table.imports.iter().map(|(specifier, targets)| ScopeRow {
        scope: GLOBAL_SCOPE.to_string(),
        specifier: specifier.to_string(),
        targets: targets.as_slice().join(", "),
    });

    scoped.chain(global).collect()
}

pub fn run(maps: &[PathBuf], config: &LoaderConfig) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_and_compose(maps, config)?;
    let rows = rows(&table);

    if rows.is_empty() {
        println!("No entries found.");
    } else {
        println!("{}", Table::new(rows).with(Style::psql()).to_string());
    }

    Ok(())
}
