use crate::load_and_compose;
use layermap_core::LoaderConfig;
use std::path::PathBuf;
use tracing::info;

pub fn run(
    maps: &[PathBuf],
    output: Option<PathBuf>,
    compact: bool,
    config: &LoaderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_and_compose(maps, config)?;

    let rendered = if compact {
        serde_json::to_string(&table)?
    } else {
        serde_json::to_string_pretty(&table)?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered + "\n")?;
            info!("Composed map written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_maps(temp: &TempDir) -> Vec<PathBuf> {
        let base = temp.path().join("base.json");
        let top = temp.path().join("top.json");
        fs::write(&base, r#"{ "imports": { "c": "d" } }"#).unwrap();
        fs::write(&top, r#"{ "imports": { "b": "c" } }"#).unwrap();
        vec![base, top]
    }

    #[test]
    fn test_output_file_holds_composed_map() {
        let temp = TempDir::new().unwrap();
        let maps = write_maps(&temp);
        let output = temp.path().join("out.json");

        run(&maps, Some(output.clone()), false, &LoaderConfig::default()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.ends_with('\n'));
        assert!(written.lines().count() > 1);
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "imports": { "c": ["d"], "b": ["d"] },
                "scopes": {}
            })
        );
    }

    #[test]
    fn test_compact_output_is_a_single_line() {
        let temp = TempDir::new().unwrap();
        let maps = write_maps(&temp);
        let output = temp.path().join("out.json");

        run(&maps, Some(output.clone()), true, &LoaderConfig::default()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.starts_with(r#"{"imports":{"c":["d"],"b":["d"]}"#));
    }
}
