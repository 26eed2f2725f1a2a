use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::HookResult;

/// Environment variable the build system sets to the installation root.
pub const PREFIX_ENV: &str = "MESON_INSTALL_PREFIX";

/// Schema sources live here relative to the prefix. The trailing separator
/// is kept so the compiler sees the directory form of the path.
const SCHEMA_SUBDIR: &str = "schemas/";

/// Install-tree paths derived from the installation prefix.
pub struct InstallPaths {
    prefix: PathBuf,
}

impl InstallPaths {
    /// Resolve the prefix from the environment. A missing variable means the
    /// hook is running outside the build system; the current working
    /// directory stands in for the prefix.
    pub fn from_env() -> HookResult<Self> {
        Self::resolve(env::var_os(PREFIX_ENV))
    }

    fn resolve(prefix: Option<OsString>) -> HookResult<Self> {
        let prefix = match prefix {
            Some(value) => PathBuf::from(value),
            None => env::current_dir()?,
        };
        Ok(Self { prefix })
    }

    /// Directory handed to the schema compiler.
    pub fn schema_dir(&self) -> PathBuf {
        self.prefix.join(SCHEMA_SUBDIR)
    }
}
