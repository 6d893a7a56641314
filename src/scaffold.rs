use std::fmt::{self, Display, Formatter};
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use derive_builder::Builder;

use crate::install::{Installer, PackageManager};
use crate::log::glyph;
use crate::manifest::{self, MANIFEST_FILE};
use crate::prompt::NameSource;
use crate::template::{self, TemplateSource, PROJECT_IGNORE_FILE, SHIPPED_IGNORE_FILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AcquireName,
    CreateDirectory,
    CopyTemplate,
    PatchManifest,
    RenameIgnoreFile,
    Install,
}

impl Step {
    /// Whether a failure of this step stops the remaining ones.
    #[must_use]
    pub fn is_fatal(self) -> bool {
        !matches!(self, Step::RenameIgnoreFile)
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::AcquireName => "acquire project name",
            Step::CreateDirectory => "create directory",
            Step::CopyTemplate => "copy template files",
            Step::PatchManifest => "update package.json",
            Step::RenameIgnoreFile => "rename .npmignore",
            Step::Install => "install dependencies",
        })
    }
}

#[derive(Debug)]
pub struct StepFailure {
    pub step: Step,
    pub error: anyhow::Error,
}

impl Display for StepFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to {}: {:#}", self.step, self.error)
    }
}

/// What happened during a [`Scaffolder::run`].
#[derive(Debug, Default)]
pub struct Report {
    /// Name and target directory, once the name was acquired.
    pub project: Option<Project>,
    /// Steps that succeeded, in the order they ran.
    pub completed: Vec<Step>,
    /// Failures that did not stop the run.
    pub warnings: Vec<StepFailure>,
    /// The failure that stopped the run.
    pub aborted: Option<StepFailure>,
}

impl Report {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }

    #[must_use]
    pub fn ran(&self, step: Step) -> bool {
        self.completed.contains(&step)
            || self.warnings.iter().any(|w| w.step == step)
            || self.aborted.as_ref().is_some_and(|a| a.step == step)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub target: PathBuf,
}

impl Project {
    /// The target is always `cwd/<name>`: root and prefix components of an
    /// absolute name are dropped rather than replacing `cwd`.
    #[must_use]
    pub fn new(cwd: &Path, name: String) -> Self {
        let relative = Path::new(&name)
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect::<PathBuf>();

        Self {
            target: cwd.join(relative),
            name,
        }
    }

    #[must_use]
    pub fn manifest(&self) -> PathBuf {
        self.target.join(MANIFEST_FILE)
    }
}

#[derive(Builder)]
pub struct Scaffolder {
    #[builder(setter(into))]
    cwd: PathBuf,
    #[builder(setter(into))]
    template: TemplateSource,
    /// Only used for the follow-up commands printed at the end.
    #[builder(default)]
    package_manager: PackageManager,
    #[builder(default)]
    skip_install: bool,
}

impl Scaffolder {
    /// Create a new [`Scaffolder`] builder
    #[must_use]
    pub fn builder() -> ScaffolderBuilder {
        ScaffolderBuilder::create_empty()
    }

    /// Runs every step in order and stops at the first fatal failure.
    /// Nothing written before a failure is removed.
    pub fn run(&self, names: &dyn NameSource, installer: &dyn Installer) -> Report {
        let mut report = Report::default();

        let name = match names.project_name() {
            Ok(name) => name,
            Err(error) => {
                Self::fail(&mut report, Step::AcquireName, error);
                return report;
            }
        };
        report.completed.push(Step::AcquireName);

        let project = Project::new(&self.cwd, name);
        report.project = Some(project.clone());

        trace!("Template: {}", self.template);
        trace!("Target: {}", project.target.display());

        status!(glyph::ROCKET, "Creating a new Next.js project...");

        let steps: [(Step, &dyn Fn() -> anyhow::Result<()>); 5] = [
            (Step::CreateDirectory, &|| Self::create_directory(&project)),
            (Step::CopyTemplate, &|| self.copy_template(&project)),
            (Step::PatchManifest, &|| Self::patch_manifest(&project)),
            (Step::RenameIgnoreFile, &|| Self::rename_ignore_file(&project)),
            (Step::Install, &|| self.install(&project, installer)),
        ];

        for (step, action) in steps {
            if step == Step::Install && self.skip_install {
                info!("Skipping step: {step}");
                continue;
            }

            match action() {
                Ok(()) => report.completed.push(step),
                Err(error) => {
                    if Self::fail(&mut report, step, error) {
                        return report;
                    }
                }
            }
        }

        self.print_next_steps(&project);

        report
    }

    /// Logs the failure and records it. Returns whether the run must stop.
    fn fail(report: &mut Report, step: Step, error: anyhow::Error) -> bool {
        let failure = StepFailure { step, error };

        if step.is_fatal() {
            error!(failure);
            report.aborted = Some(failure);
            true
        } else {
            warn!(failure);
            report.warnings.push(failure);
            false
        }
    }

    fn create_directory(project: &Project) -> anyhow::Result<()> {
        fs_extra::dir::create_all(&project.target, false)
            .with_context(|| format!("Could not create {}", project.target.display()))?;

        status!(glyph::TOOLS, "Created directory: {}", project.target.display());
        Ok(())
    }

    fn copy_template(&self, project: &Project) -> anyhow::Result<()> {
        let copied = self.template.copy_into(&project.target)?;

        trace!("Copied {copied} files");
        status!(glyph::FOLDER, "Copied template files.");
        Ok(())
    }

    fn patch_manifest(project: &Project) -> anyhow::Result<()> {
        manifest::set_name(&project.manifest(), &project.name)?;

        status!(glyph::CHECK, "Updated {MANIFEST_FILE} with project name.");
        Ok(())
    }

    fn rename_ignore_file(project: &Project) -> anyhow::Result<()> {
        template::rename_ignore_file(&project.target)?;

        status!(
            glyph::CHECK,
            "Renamed {SHIPPED_IGNORE_FILE} to {PROJECT_IGNORE_FILE}"
        );
        Ok(())
    }

    fn install(&self, project: &Project, installer: &dyn Installer) -> anyhow::Result<()> {
        status!(glyph::PACKAGE, "Installing dependencies...");

        installer.install(&project.target)?;

        status!(glyph::CHECK, "Dependencies installed successfully.");
        Ok(())
    }

    fn print_next_steps(&self, project: &Project) {
        status!(glyph::CHECK, "Project setup complete.");
        println!("\nTo get started, run the following commands:\n");

        for command in self.next_steps(project) {
            println!("   {command}");
        }
    }

    /// Commands the user should run after a successful scaffold.
    #[must_use]
    pub fn next_steps(&self, project: &Project) -> Vec<String> {
        let mut commands = vec![format!("cd {}", project.name)];

        if self.skip_install {
            commands.push(self.package_manager.install_command());
        }
        commands.push(self.package_manager.dev_command());

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rename_is_non_fatal() {
        let steps = [
            Step::AcquireName,
            Step::CreateDirectory,
            Step::CopyTemplate,
            Step::PatchManifest,
            Step::RenameIgnoreFile,
            Step::Install,
        ];

        let non_fatal = steps.iter().filter(|s| !s.is_fatal()).collect::<Vec<_>>();
        assert_eq!(non_fatal, vec![&Step::RenameIgnoreFile]);
    }

    #[test]
    fn next_steps_follow_package_manager() {
        let project = Project::new(Path::new("/tmp"), "blog".to_string());

        let npm = Scaffolder::builder()
            .cwd("/tmp")
            .template("/tmp/template")
            .build()
            .unwrap();
        assert_eq!(npm.next_steps(&project), vec!["cd blog", "npm run dev"]);

        let pnpm = Scaffolder::builder()
            .cwd("/tmp")
            .template("/tmp/template")
            .package_manager(PackageManager::Pnpm)
            .skip_install(true)
            .build()
            .unwrap();
        assert_eq!(
            pnpm.next_steps(&project),
            vec!["cd blog", "pnpm install", "pnpm dev"]
        );
    }

    #[test]
    fn failure_message_carries_cause() {
        let failure = StepFailure {
            step: Step::PatchManifest,
            error: anyhow::anyhow!("boom").context("Invalid manifest"),
        };

        assert_eq!(
            failure.to_string(),
            "Failed to update package.json: Invalid manifest: boom"
        );
    }

    #[test]
    fn absolute_name_stays_under_cwd() {
        let cwd = Path::new("/work");

        let project = Project::new(cwd, "/elsewhere/blog".to_string());

        assert_eq!(project.target, PathBuf::from("/work/elsewhere/blog"));
        assert_eq!(project.name, "/elsewhere/blog");
        assert_eq!(
            Project::new(cwd, "blog".to_string()).target,
            PathBuf::from("/work/blog")
        );
    }

    #[test]
    fn missing_builder_field() {
        assert!(Scaffolder::builder().cwd("/tmp").build().is_err());
    }
}
