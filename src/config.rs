use std::path::{Path, PathBuf};

/// Name used in `sudo` hints
pub const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Name systemd knows the dashboard by
pub const SERVICE_NAME: &str = "nerv-dashboard";

/// Unit file expected in the working directory
pub const UNIT_FILE: &str = "nerv-dashboard.service";

/// Where system-wide unit files live
pub const UNIT_DIR: &str = "/etc/systemd/system";

/// What to install and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    pub service_name: String,
    pub unit_file: PathBuf,
    pub unit_dir: PathBuf,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            service_name: SERVICE_NAME.to_string(),
            unit_file: PathBuf::from(UNIT_FILE),
            unit_dir: PathBuf::from(UNIT_DIR),
        }
    }
}

impl InstallConfig {
    /// Full path the unit file is copied to (`unit_dir/<unit file name>`)
    pub fn destination(&self) -> PathBuf {
        let name = self
            .unit_file
            .file_name()
            .map(Path::new)
            .unwrap_or_else(|| Path::new(UNIT_FILE));
        self.unit_dir.join(name)
    }
}
