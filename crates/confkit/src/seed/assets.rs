//! Embedded seed files for first-run configuration.
//!
//! This module uses `rust-embed` to embed the workspace root
//! `configuration/` directory into the binary at compile time, so
//! [`ConfigStore::reset`](crate::ConfigStore::reset) can seed a fresh user
//! install without any external file dependencies.

use rust_embed::RustEmbed;

/// Embedded seed files from the `configuration/` directory.
///
/// The path is calculated relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/confkit`
/// - `../../configuration` = workspace root `configuration/`
///
/// During development with the `debug-embed` feature, files are read from
/// the filesystem at runtime, allowing for quick iteration without
/// recompilation.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../configuration"]
pub struct SeedAssets;

/// Get seed file content by path.
///
/// # Arguments
/// * `path` - Relative path from the seed root (e.g., "colors.yaml")
///
/// # Returns
/// The file content as bytes, or None if the file doesn't exist.
pub fn get_seed(path: &str) -> Option<Vec<u8>> {
    SeedAssets::get(path).map(|file| file.data.into_owned())
}

/// List all bundled seed file paths.
pub fn list_seeds() -> Vec<String> {
    SeedAssets::iter().map(|path| path.to_string()).collect()
}
