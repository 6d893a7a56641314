use anyhow::{anyhow, ensure, Context};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::template::TemplateSource;

/// Environment variable pointing at a template directory to use instead of
/// the bundled one.
pub const TEMPLATE_ENV: &str = "SPROUT_TEMPLATE";

const TEMPLATE_DIR_NAME: &str = "template";

/// Returns where the starter files are copied from.
///
/// An explicit `template` (from the command line) or [`TEMPLATE_ENV`] must
/// exist. Otherwise the first existing directory among these is used:
/// - `<dir of the executable>/template`
/// - `<platform data dir>/sprout/template`
///
/// and the template compiled into the binary when neither exists.
///
/// # Errors
///
/// Returns an [`Err`] if an explicit template is not a directory.
pub fn template_source(template: Option<&Path>) -> anyhow::Result<TemplateSource> {
    let explicit = template
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(TEMPLATE_ENV).map(PathBuf::from));

    if let Some(explicit) = explicit {
        ensure!(
            explicit.is_dir(),
            anyhow!("Template path {} is not a directory", explicit.display())
        );
        return Ok(TemplateSource::Dir(explicit));
    }

    Ok(default_template_dirs()
        .into_iter()
        .find(|c| c.is_dir())
        .map_or(TemplateSource::Bundled, TemplateSource::Dir))
}

/// Default template locations, in lookup order.
#[must_use]
pub fn default_template_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(2);

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir.join(TEMPLATE_DIR_NAME));
    }

    if let Some(project) = ProjectDirs::from("", "", "sprout") {
        dirs.push(project.data_dir().join(TEMPLATE_DIR_NAME));
    }

    dirs
}

/// Returns the current working directory as a [`PathBuf`]
///
/// # Errors
///
/// Returns an [`Err`] if the current working directory value is invalid.
/// Possible cases:
///
/// * Current directory does not exist.
/// * There are insufficient permissions to access the current directory.
pub fn current_dir() -> anyhow::Result<PathBuf> {
    std::env::current_dir().context("Failed to get current dir")
}
