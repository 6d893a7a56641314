#[macro_use]
pub mod log;

pub mod args;
pub mod config;
pub mod install;
pub mod manifest;
pub mod prompt;
pub mod scaffold;
pub mod template;

pub use install::{Installer, PackageManager};
pub use prompt::{FixedName, NameSource, Prompt};
pub use scaffold::{Project, Report, Scaffolder, Step, StepFailure};
