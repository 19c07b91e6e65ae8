use std::env;
use std::fs;
use std::path::Path;

/// Copies the workspace config.toml next to the compiled binary,
/// where `shared::config::load_config` looks for it.
fn main() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let source_config = Path::new(manifest_dir).join("../../config.toml");
    println!("cargo:rerun-if-changed={}", source_config.display());

    // OUT_DIR: target/<profile>/build/<crate>-<hash>/out
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=Target profile directory not found, config.toml not copied");
        return;
    };

    if !source_config.exists() {
        println!(
            "cargo:warning=config.toml not found at {:?}, the embedded default will be used",
            source_config
        );
        return;
    }

    let dest_config = target_dir.join("config.toml");
    fs::copy(&source_config, &dest_config)
        .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
}
