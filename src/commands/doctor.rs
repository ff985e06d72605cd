//! `litebuild doctor` command.

use crate::config::BuildConfig;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::platform::Os;
use crate::recipe;

/// Report whether the tools the pipeline needs are reachable.
///
/// On Windows with the compatibility shell enabled only the shell itself is
/// checked, since the compiler and `pacman` live inside it.
///
/// # Errors
///
/// Returns [`Error::MissingTools`] listing everything not found, or
/// [`Error::UnsupportedOs`] when the OS has no package manager, or
/// [`Error::Cassette`] when a replayed lookup cannot be answered.
pub fn run(ctx: &ServiceContext, config: &BuildConfig, os: &Os) -> Result<(), Error> {
    println!("Platform: {os}");

    let Some(package_manager) = recipe::package_manager(os) else {
        return Err(Error::UnsupportedOs(os.to_string()));
    };

    let mut missing = Vec::new();

    if let Some(shell) = config.compatibility_shell(os) {
        let found = ctx.fs.exists(shell).map_err(|e| Error::Cassette(e.to_string()))?;
        report("compatibility shell", &shell.display().to_string(), found);
        if !found {
            missing.push(shell.display().to_string());
        }
    } else {
        for tool in [config.compiler.as_str(), package_manager] {
            match ctx.shell.locate(tool).map_err(|e| Error::Cassette(e.to_string()))? {
                Some(path) => report(tool, &path.display().to_string(), true),
                None => {
                    report(tool, tool, false);
                    missing.push(tool.to_string());
                }
            }
        }
    }

    if missing.is_empty() {
        println!("All tools found.");
        Ok(())
    } else {
        Err(Error::MissingTools(missing))
    }
}

fn report(label: &str, target: &str, found: bool) {
    let status = if found { "ok" } else { "missing" };
    println!("  {label:<20} {status:<8} {target}");
}
