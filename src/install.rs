use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{bail, Context};
use clap::ValueEnum;

/// Installs the dependencies of a freshly copied project.
pub trait Installer {
    /// Runs the install inside `dir`, surfacing its output live.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the install could not be started or did not
    /// finish successfully.
    fn install(&self, dir: &Path) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    #[must_use]
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    #[must_use]
    pub fn install_command(self) -> String {
        format!("{} install", self.program())
    }

    /// Command that starts the development server of the new project.
    #[must_use]
    pub fn dev_command(self) -> String {
        match self {
            PackageManager::Npm => "npm run dev".to_string(),
            other => format!("{} dev", other.program()),
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl Installer for PackageManager {
    fn install(&self, dir: &Path) -> anyhow::Result<()> {
        trace!("Running `{}` in {}", self.install_command(), dir.display());

        let status = Command::new(self.program())
            .arg("install")
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to run `{}`", self.install_command()))?;

        if !status.success() {
            bail!("`{}` exited with {status}", self.install_command());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(PackageManager::Npm.install_command(), "npm install");
        assert_eq!(PackageManager::Npm.dev_command(), "npm run dev");
        assert_eq!(PackageManager::Yarn.dev_command(), "yarn dev");
        assert_eq!(PackageManager::Pnpm.install_command(), "pnpm install");
        assert_eq!(PackageManager::Bun.dev_command(), "bun dev");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        assert!(PackageManager::Npm.install(&missing).is_err());
    }
}
