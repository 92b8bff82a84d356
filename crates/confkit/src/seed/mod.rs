//! First-run seeding of the user configuration library.
//!
//! [`ConfigStore::reset`] copies the bundled `configuration/` seed files
//! into the user's configuration library directory, creating it if needed
//! and never overwriting a file the user already has. It is a one-time
//! "first run" operation, independent of the per-file fallback performed
//! by [`ConfigStore::load_records`](crate::ConfigStore::load_records).

pub mod assets;
pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::store::ConfigStore;
use error::{SeedError, SeedResult};

impl ConfigStore {
    /// Seed the user's configuration library from the bundled defaults.
    ///
    /// The library is rooted at `<home>/<lib_config_dir>` (joining an
    /// absolute `lib_config_dir` yields that absolute path unchanged).
    /// The directory and its parents are created as needed. Every bundled
    /// seed file is then copied in, but only where no file of that name
    /// already exists — existing user files are never overwritten.
    ///
    /// # Arguments
    /// * `names` - When given, only seed files whose stem appears in the
    ///   list are considered; unknown names match nothing.
    ///
    /// # Returns
    /// The paths of the files newly written, possibly empty.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DirectoryCreate`] if the library directory
    /// cannot be created, or [`SeedError::FileWrite`] if a seed file
    /// cannot be written.
    pub fn reset(&self, names: Option<&[&str]>) -> SeedResult<Vec<PathBuf>> {
        let user_lib = self.home().join(self.lib_config_dir());

        fs::create_dir_all(&user_lib).map_err(|source| SeedError::DirectoryCreate {
            path: user_lib.clone(),
            source,
        })?;

        let mut written = Vec::new();
        for seed in assets::list_seeds() {
            if let Some(filter) = names {
                let stem = Path::new(&seed)
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or_default();
                if !filter.contains(&stem) {
                    continue;
                }
            }

            let target = user_lib.join(&seed);
            if target.exists() {
                // Never overwrite a file the user already has.
                continue;
            }

            let Some(content) = assets::get_seed(&seed) else {
                continue;
            };

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| SeedError::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            fs::write(&target, content).map_err(|source| SeedError::FileWrite {
                path: target.clone(),
                source,
            })?;
            written.push(target);
        }

        info!(
            app = self.app_name(),
            dir = %user_lib.display(),
            count = written.len(),
            "seeded user configuration library"
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// A store whose configuration library lives under the (temp) home.
    fn fixture_store(home: &Path) -> ConfigStore {
        ConfigStore::with_home(home, "demo", ".demo/configuration", &["colors", "fonts"])
    }

    #[test]
    fn test_reset_seeds_fresh_library() {
        let home = tempdir().expect("Failed to create temp home");
        let store = fixture_store(home.path());

        let written = store.reset(None).expect("Failed to reset");

        let user_lib = home.path().join(".demo/configuration");
        assert!(user_lib.exists(), "Library directory should be created");
        assert_eq!(written.len(), 2, "Both seed files should be written");
        for seed in ["colors.yaml", "fonts.yaml"] {
            let on_disk = fs::read(user_lib.join(seed)).expect("Seed file should exist");
            let bundled = assets::get_seed(seed).expect("Seed should be embedded");
            assert_eq!(on_disk, bundled, "{seed} should match the bundled copy");
        }
    }

    #[test]
    fn test_reset_never_overwrites_existing_files() {
        let home = tempdir().expect("Failed to create temp home");
        let store = fixture_store(home.path());

        let user_lib = home.path().join(".demo/configuration");
        fs::create_dir_all(&user_lib).expect("Failed to create library dir");
        fs::write(user_lib.join("colors.yaml"), "sentinel").expect("Failed to write sentinel");

        let written = store.reset(None).expect("Failed to reset");

        let sentinel =
            fs::read_to_string(user_lib.join("colors.yaml")).expect("Sentinel should exist");
        assert_eq!(sentinel, "sentinel", "Existing file must not be overwritten");
        assert_eq!(written.len(), 1, "Only the missing seed should be written");
        assert!(
            written[0].ends_with("fonts.yaml"),
            "fonts.yaml should be newly copied"
        );
    }

    #[test]
    fn test_reset_with_name_filter() {
        let home = tempdir().expect("Failed to create temp home");
        let store = fixture_store(home.path());

        let written = store.reset(Some(&["fonts"])).expect("Failed to reset");

        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("fonts.yaml"));
        assert!(
            !home.path().join(".demo/configuration/colors.yaml").exists(),
            "Filtered-out seeds must not be written"
        );
    }

    #[test]
    fn test_reset_unknown_name_matches_nothing() {
        let home = tempdir().expect("Failed to create temp home");
        let store = fixture_store(home.path());

        let written = store.reset(Some(&["no-such-seed"])).expect("Failed to reset");

        assert!(written.is_empty());
        assert!(
            home.path().join(".demo/configuration").exists(),
            "Library directory is still created"
        );
    }

    #[test]
    fn test_reset_is_idempotent() {
        let home = tempdir().expect("Failed to create temp home");
        let store = fixture_store(home.path());

        let first = store.reset(None).expect("First reset should succeed");
        let second = store.reset(None).expect("Second reset should succeed");

        assert_eq!(first.len(), 2);
        assert!(second.is_empty(), "Second reset should write nothing");
    }
}
