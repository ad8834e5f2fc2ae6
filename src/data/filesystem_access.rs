//! Where htp keeps user files: threshold overrides under the config directory,
//! saved drawing records under the home directory.
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsAccess {
    /// `~/.htp`
    Home,
    /// `~/.config/htp` on Linux, the platform equivalent elsewhere.
    Config,
}

impl FsAccess {
    fn root(&self) -> anyhow::Result<PathBuf> {
        let (base, dir_name) = match self {
            FsAccess::Home => (dirs::home_dir(), ".htp"),
            FsAccess::Config => (dirs::config_dir(), "htp"),
        };
        let base = base.ok_or_else(|| anyhow::anyhow!("No {:?} directory on this platform", self))?;
        Ok(base.join(dir_name))
    }

    /// `<root>/<subs...>`, created when missing.
    pub fn path_with_subs(&self, subs: &[&str]) -> anyhow::Result<PathBuf> {
        let dir = subs.iter().fold(self.root()?, |dir, sub| dir.join(sub));
        ensure_dir(&dir)?;
        Ok(dir)
    }

    /// Threshold override files, one `<drawing type>.json` per drawing type.
    pub fn thresholds_dir() -> anyhow::Result<PathBuf> {
        FsAccess::Config.path_with_subs(&["thresholds"])
    }

    /// Stored annotation records (`{"meta": ..., "annotations": ...}` files).
    pub fn records_dir() -> anyhow::Result<PathBuf> {
        FsAccess::Home.path_with_subs(&["records"])
    }
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if !dir.is_dir() {
        std::fs::create_dir_all(dir)?;
        log::debug!("Created {}", dir.display());
    }
    Ok(())
}
