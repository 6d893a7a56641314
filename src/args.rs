use std::path::PathBuf;

pub use clap::{Parser, ValueEnum};

use crate::install::PackageManager;

#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Args {
    /// Name of the project. Asked interactively when omitted
    pub name: Option<String>,

    /// Use the default project name instead of asking for one
    #[clap(long, short, conflicts_with = "name")]
    pub yes: bool,

    /// Directory to copy the starter files from [default: bundled template]
    #[clap(long, short)]
    pub template: Option<PathBuf>,

    /// Package manager used to install dependencies
    #[clap(long, short, value_enum, default_value_t = PackageManager::Npm)]
    pub package_manager: PackageManager,

    /// Do not install dependencies after copying the template
    #[clap(long)]
    pub skip_install: bool,

    /// Do not print the final error message on failure
    #[clap(long)]
    no_errors: bool,
}

impl Args {
    #[must_use]
    pub fn no_errors(&self) -> bool {
        self.no_errors
    }
}
