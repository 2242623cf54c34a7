use crate::load_and_compose;
use layermap_api::FallbackList;
use layermap_core::{LoaderConfig, Resolver};
use std::path::PathBuf;

pub fn run(
    maps: &[PathBuf],
    referrer: Option<&str>,
    specifier: &str,
    config: &LoaderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_and_compose(maps, config)?;
    let targets = Resolver::new(&table).resolve(referrer, specifier);

    print!("{}", render(&targets));

    Ok(())
}

/// One target per line, most preferred first.
fn render(targets: &FallbackList) -> String {
    targets.iter().map(|target| format!("{}\n", target)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_prints_one_target_per_line() {
        let targets =
            FallbackList::try_new(vec!["https://a/".into(), "https://b/".into()]).unwrap();
        assert_eq!(render(&targets), "https://a/\nhttps://b/\n");
    }

    #[test]
    fn test_resolves_through_composed_scopes() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("base.json");
        let top = temp.path().join("top.json");
        fs::write(&base, r#"{ "imports": { "lodash": ["https://cdn/lodash", "/lodash"] } }"#)
            .unwrap();
        fs::write(&top, r#"{ "scopes": { "https://app/": { "_": "lodash" } } }"#).unwrap();

        let table = load_and_compose(&[base, top], &LoaderConfig::default()).unwrap();
        let targets = Resolver::new(&table).resolve(Some("https://app/main.js"), "_");
        assert_eq!(render(&targets), "https://cdn/lodash\n/lodash\n");
    }
}
