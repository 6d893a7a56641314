use anyhow::{anyhow, Result};
use clap::Parser;
use std::process::ExitCode;
use sprout::{
    args::Args,
    config, error,
    prompt::{FixedName, NameSource, Prompt},
    trace, Scaffolder,
};

fn app(args: &Args) -> Result<()> {
    let cwd = config::current_dir()?;
    let template = config::template_source(args.template.as_deref())?;

    trace!("Working directory: {}", cwd.display());
    trace!("Template: {template}");
    trace!("Package manager: {}", args.package_manager);

    let scaffolder = Scaffolder::builder()
        .cwd(cwd)
        .template(template)
        .package_manager(args.package_manager)
        .skip_install(args.skip_install)
        .build()?;

    let names: Box<dyn NameSource> = match (&args.name, args.yes) {
        (Some(name), _) => Box::new(FixedName(name.clone())),
        (None, true) => Box::new(FixedName::default_name()),
        (None, false) => Box::new(Prompt::default()),
    };

    let report = scaffolder.run(names.as_ref(), &args.package_manager);

    match report.aborted {
        None => Ok(()),
        Some(failure) => {
            let project = report
                .project
                .map(|p| format!(" ({} left as is)", p.target.display()))
                .unwrap_or_default();

            Err(anyhow!("Scaffolding stopped at: {}{project}", failure.step))
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match app(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !args.no_errors() {
                error!(e);
            }
            ExitCode::FAILURE
        }
    }
}
