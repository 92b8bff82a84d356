//! Configuration store façade.
//!
//! A [`ConfigStore`] is created once per client application and resolves
//! all paths up front; no I/O happens until a load is requested.

pub mod error;
pub mod loader;

use std::path::{Path, PathBuf};

use error::{StoreError, StoreResult};

/// Default extension shared by every file in a store.
const DEFAULT_EXT: &str = "yaml";

/// Directory under the user's home where per-application config lives.
const USER_CONFIG_HOME: &str = ".config";

/// Per-application configuration store.
///
/// Associates a client application with:
/// - the application's *library* configuration directory (shipped,
///   read-only defaults),
/// - the *user* configuration directory
///   (`<home>/.config/<app_name>`, created lazily),
/// - the logical file names the application recognizes, and
/// - the file extension shared by all of them (default `yaml`).
///
/// # Example
///
/// ```rust,no_run
/// use confkit::ConfigStore;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// #[serde(deny_unknown_fields)]
/// struct Rgb {
///     r: u16,
///     g: u16,
///     b: u16,
///     canvas: bool,
/// }
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = ConfigStore::new("demo", "/opt/demo/configuration", &["colors"])?;
/// let loaded = store.load_records::<Rgb>(&["colors"])?;
/// println!("Loaded {} color records", loaded["colors"].len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Name of the client application; used only to build paths.
    app_name: String,

    /// Shipped defaults, read-only from this crate's perspective.
    lib_config_dir: PathBuf,

    /// `<home>/.config/<app_name>`; created lazily by the fallback copy.
    user_config_dir: PathBuf,

    /// Home directory this store was resolved against.
    home: PathBuf,

    /// Logical file names (no extension) the application declares.
    fnames: Vec<String>,

    /// Extension shared by every file in the store, without the dot.
    ext: String,
}

/// Compute the per-application user configuration directory for a given
/// home directory. Pure function so tests can supply a temporary home.
pub fn user_config_dir_for(home: &Path, app_name: &str) -> PathBuf {
    home.join(USER_CONFIG_HOME).join(app_name)
}

impl ConfigStore {
    /// Create a store for `app_name`, resolving the user configuration
    /// directory against the current user's home directory.
    ///
    /// Performs no I/O.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::HomeDirUnavailable`] if the platform reports
    /// no home directory.
    pub fn new(
        app_name: impl Into<String>,
        lib_config_dir: impl Into<PathBuf>,
        fnames: &[&str],
    ) -> StoreResult<Self> {
        let home = dirs::home_dir().ok_or(StoreError::HomeDirUnavailable)?;
        Ok(Self::with_home(home, app_name, lib_config_dir, fnames))
    }

    /// Create a store resolved against an explicit home directory.
    ///
    /// Path derivation is a pure function of `home`, so tests can point
    /// the store at a temporary directory without touching the real
    /// filesystem layout.
    pub fn with_home(
        home: impl Into<PathBuf>,
        app_name: impl Into<String>,
        lib_config_dir: impl Into<PathBuf>,
        fnames: &[&str],
    ) -> Self {
        let home = home.into();
        let app_name = app_name.into();
        let user_config_dir = user_config_dir_for(&home, &app_name);
        Self {
            app_name,
            lib_config_dir: lib_config_dir.into(),
            user_config_dir,
            home,
            fnames: fnames.iter().map(|n| (*n).to_string()).collect(),
            ext: DEFAULT_EXT.to_string(),
        }
    }

    /// Override the shared file extension (default `yaml`).
    ///
    /// The extension only affects file names; documents are always parsed
    /// as YAML.
    #[must_use]
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }

    /// Name of the client application this store serves.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The application's library (shipped defaults) directory.
    pub fn lib_config_dir(&self) -> &Path {
        &self.lib_config_dir
    }

    /// The per-user configuration directory for this application.
    pub fn user_config_dir(&self) -> &Path {
        &self.user_config_dir
    }

    /// The logical file names this store recognizes.
    pub fn fnames(&self) -> &[String] {
        &self.fnames
    }

    /// Home directory this store was resolved against.
    pub(crate) fn home(&self) -> &Path {
        &self.home
    }

    /// Full path of a named file in the user configuration directory.
    pub fn user_file_path(&self, name: &str) -> PathBuf {
        self.user_config_dir.join(format!("{}.{}", name, self.ext))
    }

    /// Full path of a named file in the library configuration directory.
    pub fn lib_file_path(&self, name: &str) -> PathBuf {
        self.lib_config_dir.join(format!("{}.{}", name, self.ext))
    }
}
