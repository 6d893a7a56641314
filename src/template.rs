use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use fs_extra::dir::CopyOptions;
use include_dir::{include_dir, Dir};
use walkdir::WalkDir;

/// Starter files compiled into the binary.
static BUNDLED: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/template");

/// Ignore-file as it is shipped inside the template.
pub const SHIPPED_IGNORE_FILE: &str = ".npmignore";
/// Ignore-file name the new project should end up with.
pub const PROJECT_IGNORE_FILE: &str = ".gitignore";

/// Where the starter files are copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A template directory on disk.
    Dir(PathBuf),
    /// The template compiled into the binary.
    Bundled,
}

impl TemplateSource {
    /// Paths of every template file, relative to the template root and sorted.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if a directory template can not be read.
    pub fn files(&self) -> anyhow::Result<Vec<PathBuf>> {
        match self {
            TemplateSource::Dir(root) => list_files(root),
            TemplateSource::Bundled => {
                let mut files = Vec::new();
                bundled_files(&BUNDLED, &mut files);
                files.sort();
                Ok(files)
            }
        }
    }

    /// Copies the whole template into `target`, overwriting files that
    /// already exist. Returns the number of files copied.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if any file can not be read or written.
    pub fn copy_into(&self, target: &Path) -> anyhow::Result<usize> {
        match self {
            TemplateSource::Dir(root) => copy_tree(root, target),
            TemplateSource::Bundled => {
                BUNDLED.extract(target).with_context(|| {
                    format!("Could not extract bundled template into {}", target.display())
                })?;
                Ok(self.files()?.len())
            }
        }
    }
}

impl Display for TemplateSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Dir(root) => write!(f, "{}", root.display()),
            TemplateSource::Bundled => f.write_str("<bundled>"),
        }
    }
}

impl From<PathBuf> for TemplateSource {
    fn from(path: PathBuf) -> Self {
        TemplateSource::Dir(path)
    }
}

impl From<&Path> for TemplateSource {
    fn from(path: &Path) -> Self {
        TemplateSource::Dir(path.to_path_buf())
    }
}

impl From<&str> for TemplateSource {
    fn from(path: &str) -> Self {
        TemplateSource::Dir(PathBuf::from(path))
    }
}

fn bundled_files(dir: &Dir<'_>, files: &mut Vec<PathBuf>) {
    files.extend(dir.files().map(|f| f.path().to_path_buf()));

    for sub in dir.dirs() {
        bundled_files(sub, files);
    }
}

/// Returns the paths of every file under `root`, relative to it and sorted.
///
/// # Errors
///
/// Returns an [`Err`] if `root` is not a directory or any entry can not be
/// read.
pub fn list_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    ensure!(root.is_dir(), "Path {} is not a directory", root.display());

    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.path().strip_prefix(root)?.to_path_buf());
        }
    }

    Ok(files)
}

/// Copies the whole tree under `template` into `target`, overwriting files
/// that already exist. Returns the number of files copied.
///
/// # Errors
///
/// Returns an [`Err`] if any file can not be read or written.
pub fn copy_tree(template: &Path, target: &Path) -> anyhow::Result<usize> {
    let files = list_files(template)?;

    let options = CopyOptions {
        overwrite: true,
        content_only: true,
        ..CopyOptions::new()
    };

    fs_extra::dir::copy(template, target, &options).with_context(|| {
        format!(
            "Could not copy {} into {}",
            template.display(),
            target.display()
        )
    })?;

    Ok(files.len())
}

/// Renames the shipped `.npmignore` in `dir` to `.gitignore`.
///
/// # Errors
///
/// Returns an [`Err`] if `dir` has no `.npmignore` or the rename fails.
pub fn rename_ignore_file(dir: &Path) -> anyhow::Result<()> {
    let from = dir.join(SHIPPED_IGNORE_FILE);
    let to = dir.join(PROJECT_IGNORE_FILE);

    std::fs::rename(&from, &to)
        .with_context(|| format!("Could not rename {} to {}", from.display(), to.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample(root: &Path) {
        fs::create_dir_all(root.join("app/components")).unwrap();
        fs::write(root.join("package.json"), "{}").unwrap();
        fs::write(root.join(".npmignore"), "node_modules\n").unwrap();
        fs::write(root.join("app/page.js"), "export default 1").unwrap();
        fs::write(root.join("app/components/nav.js"), "").unwrap();
    }

    #[test]
    fn lists_nested_and_hidden_files() {
        let dir = tempfile::tempdir().unwrap();
        sample(dir.path());

        assert_eq!(
            list_files(dir.path()).unwrap(),
            vec![
                PathBuf::from(".npmignore"),
                PathBuf::from("app/components/nav.js"),
                PathBuf::from("app/page.js"),
                PathBuf::from("package.json"),
            ]
        );
    }

    #[test]
    fn copies_into_existing_target() {
        let template = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        sample(template.path());
        fs::write(target.path().join("package.json"), "old").unwrap();

        assert_eq!(copy_tree(template.path(), target.path()).unwrap(), 4);
        assert_eq!(
            list_files(template.path()).unwrap(),
            list_files(target.path()).unwrap()
        );
        assert_eq!(
            fs::read_to_string(target.path().join("package.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn bundled_template_ships_manifest_and_ignore_file() {
        let files = TemplateSource::Bundled.files().unwrap();

        assert!(files.contains(&PathBuf::from("package.json")));
        assert!(files.contains(&PathBuf::from(SHIPPED_IGNORE_FILE)));
        assert!(files.contains(&PathBuf::from("app/page.js")));
    }

    #[test]
    fn bundled_template_extracts() {
        let target = tempfile::tempdir().unwrap();

        let copied = TemplateSource::Bundled.copy_into(target.path()).unwrap();

        let mut extracted = list_files(target.path()).unwrap();
        extracted.sort();
        assert_eq!(extracted, TemplateSource::Bundled.files().unwrap());
        assert_eq!(copied, extracted.len());
    }

    #[test]
    fn missing_template_dir_fails_copy() {
        let target = tempfile::tempdir().unwrap();
        let source = TemplateSource::from(target.path().join("gone"));

        assert!(source.copy_into(target.path()).is_err());
    }

    #[test]
    fn rename_requires_shipped_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(rename_ignore_file(dir.path()).is_err());

        fs::write(dir.path().join(SHIPPED_IGNORE_FILE), ".next\n").unwrap();
        rename_ignore_file(dir.path()).unwrap();

        assert!(!dir.path().join(SHIPPED_IGNORE_FILE).exists());
        assert_eq!(
            fs::read_to_string(dir.path().join(PROJECT_IGNORE_FILE)).unwrap(),
            ".next\n"
        );
    }
}
