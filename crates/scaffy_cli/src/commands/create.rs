//! Create command - Scaffold a new project from the templates.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use scaffy_config::{ConfigResolver, DialoguerPrompter, PackageManager, Prompter, ScaffoldMode};
use scaffy_core::{MaterializeOptions, MaterializeReport, Materializer, ScaffoldError};
use scaffy_runner::{CommandRunner, SystemRunner};
use scaffy_templates::DependencyTable;

#[derive(Args)]
pub struct CreateArgs {
    /// Name of the project; also the directory it is created in
    project_name: String,

    /// Templates directory (defaults to `templates/` next to the executable)
    #[arg(long, env = "SCAFFY_TEMPLATES_DIR", hide = true)]
    templates_dir: Option<PathBuf>,

    /// Scaffold mode: `minimal` or `legacy`
    #[arg(long, env = "SCAFFY_MODE", default_value = "minimal", hide = true)]
    mode: ScaffoldMode,

    /// YAML file replacing the built-in dependency table
    #[arg(long, env = "SCAFFY_DEPENDENCY_TABLE", hide = true)]
    dependency_table: Option<PathBuf>,
}

pub async fn execute(args: CreateArgs) -> Result<()> {
    info!("Creating project: {}", args.project_name);

    let cwd = std::env::current_dir()?;
    let templates_dir = match args.templates_dir {
        Some(dir) => dir,
        None => default_templates_dir()?,
    };
    info!("Using templates from {:?}", templates_dir);

    let mut options = MaterializeOptions::new(templates_dir);
    if let Some(path) = &args.dependency_table {
        let table = DependencyTable::from_path(path)
            .map_err(ScaffoldError::from)
            .with_context(|| format!("Failed to load dependency table {:?}", path))?;
        options = options.with_dependency_table(table);
    }

    let report = create_project(
        &args.project_name,
        &cwd,
        args.mode,
        options,
        &DialoguerPrompter::new(),
        SystemRunner::new(),
    )?;

    for line in summary(&args.project_name, &report) {
        println!("{}", line);
    }
    Ok(())
}

/// Ask, then build `<cwd>/<project_name>`.
///
/// An existing directory is only removed once every question has been
/// answered, so cancelling at any prompt leaves it untouched.
pub(crate) fn create_project<P, R>(
    project_name: &str,
    cwd: &Path,
    mode: ScaffoldMode,
    options: MaterializeOptions,
    prompter: &P,
    runner: R,
) -> Result<MaterializeReport>
where
    P: Prompter + ?Sized,
    R: CommandRunner,
{
    let target_dir = cwd.join(project_name);
    let resolver = ConfigResolver::new(prompter, mode);

    let overwrite = target_dir.exists();
    if overwrite {
        resolver
            .confirm_overwrite(&target_dir)
            .map_err(ScaffoldError::from)?;
    }

    let config = resolver
        .resolve(project_name)
        .map_err(ScaffoldError::from)?;

    if overwrite {
        warn!("Removing existing directory {:?}", target_dir);
        fs::remove_dir_all(&target_dir)
            .with_context(|| format!("Failed to remove {:?}", target_dir))?;
    }

    Materializer::new(options, runner)
        .materialize(&config, &target_dir)
        .context("Failed to create project")
}

/// `templates/` next to the executable, else `./templates`.
fn default_templates_dir() -> Result<PathBuf> {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")));

    if let Some(dir) = beside_exe.filter(|dir| dir.is_dir()) {
        return Ok(dir);
    }
    Ok(std::env::current_dir()?.join("templates"))
}

fn summary(project_name: &str, report: &MaterializeReport) -> Vec<String> {
    let mut lines = vec![
        format!("✅ Project '{}' created successfully!", project_name),
        String::new(),
        format!("Location: {}", report.target_dir.display()),
        String::new(),
        "Next steps:".to_string(),
    ];
    lines.extend(
        next_steps(project_name, report.package_manager)
            .into_iter()
            .map(|step| format!("  {}", step)),
    );
    lines
}

/// Commands the operator runs next. npm is assumed when nothing was installed.
pub(crate) fn next_steps(project_name: &str, manager: Option<PackageManager>) -> Vec<String> {
    let run = manager.unwrap_or(PackageManager::Npm).run_prefix();
    let mut steps = vec![format!("cd {}", project_name)];
    steps.extend(["dev", "build", "serve"].iter().map(|s| format!("{} {}", run, s)));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffy_config::ScriptedPrompter;
    use scaffy_runner::MockRunner;
    use tempfile::TempDir;

    fn get_templates_path() -> PathBuf {
        let candidates = ["templates", "../templates", "../../templates"];
        for candidate in candidates {
            if Path::new(candidate).exists() {
                return PathBuf::from(candidate);
            }
        }
        PathBuf::from("templates")
    }

    /// A cwd holding `demo-app/keep.txt`.
    fn existing_project() -> TempDir {
        let cwd = TempDir::new().unwrap();
        let existing = cwd.path().join("demo-app");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join("keep.txt"), "precious").unwrap();
        cwd
    }

    fn create(
        cwd: &Path,
        prompter: &ScriptedPrompter,
        runner: &MockRunner,
    ) -> Result<MaterializeReport> {
        create_project(
            "demo-app",
            cwd,
            ScaffoldMode::Minimal,
            MaterializeOptions::new(get_templates_path()),
            prompter,
            runner,
        )
    }

    fn is_cancelled(err: &anyhow::Error) -> bool {
        err.downcast_ref::<ScaffoldError>()
            .map_or(false, ScaffoldError::is_cancelled)
    }

    #[test]
    fn test_declined_overwrite_keeps_directory() {
        let cwd = existing_project();
        let prompter = ScriptedPrompter::new().answer_confirm(false);
        let runner = MockRunner::new();

        let err = create(cwd.path(), &prompter, &runner).unwrap_err();

        assert!(is_cancelled(&err));
        assert_eq!(prompter.asked().len(), 1);
        assert_eq!(
            fs::read_to_string(cwd.path().join("demo-app/keep.txt")).unwrap(),
            "precious"
        );
        assert!(runner.is_untouched());
    }

    #[test]
    fn test_cancel_after_overwrite_keeps_directory() {
        let cwd = existing_project();
        let prompter = ScriptedPrompter::new().answer_confirm(true).answer_cancel();
        let runner = MockRunner::new();

        let err = create(cwd.path(), &prompter, &runner).unwrap_err();

        assert!(is_cancelled(&err));
        assert!(cwd.path().join("demo-app/keep.txt").exists());
        assert!(!cwd.path().join("demo-app/package.json").exists());
    }

    #[test]
    fn test_confirmed_overwrite_replaces_directory() {
        let cwd = existing_project();
        let prompter = ScriptedPrompter::new()
            .answer_confirm(true)
            .answer_choose("Vue")
            .answer_confirm(false);
        let runner = MockRunner::new();

        create(cwd.path(), &prompter, &runner).unwrap();

        let target = cwd.path().join("demo-app");
        assert!(!target.join("keep.txt").exists());
        assert!(target.join("src/App.vue").exists());
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_creates_project_and_lists_next_steps() {
        let cwd = TempDir::new().unwrap();
        let prompter = ScriptedPrompter::new()
            .answer_choose("React")
            .answer_confirm(true)
            .answer_choose("pnpm");
        let runner = MockRunner::new().with_available(["pnpm"]);

        let report = create(cwd.path(), &prompter, &runner).unwrap();

        assert_eq!(report.target_dir, cwd.path().join("demo-app"));
        assert!(report.target_dir.join("package.json").exists());
        assert_eq!(runner.runs(), vec!["pnpm install"]);

        let lines = summary("demo-app", &report);
        assert_eq!(lines[0], "✅ Project 'demo-app' created successfully!");
        assert!(lines.contains(&"Next steps:".to_string()));
        assert_eq!(
            lines[lines.len() - 4..].to_vec(),
            vec!["  cd demo-app", "  pnpm dev", "  pnpm build", "  pnpm serve"]
        );
    }

    #[test]
    fn test_next_steps_with_pnpm() {
        assert_eq!(
            next_steps("demo-app", Some(PackageManager::Pnpm)),
            vec!["cd demo-app", "pnpm dev", "pnpm build", "pnpm serve"]
        );
    }

    #[test]
    fn test_next_steps_without_install() {
        assert_eq!(
            next_steps("demo-app", None),
            vec!["cd demo-app", "npm run dev", "npm run build", "npm run serve"]
        );
    }
}
