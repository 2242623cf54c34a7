fn main() {
    if let Err(e) = layermap_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
