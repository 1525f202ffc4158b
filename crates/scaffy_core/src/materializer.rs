//! The template materializer.
//!
//! Turns a [`Configuration`] into files on disk and, when asked to,
//! installs the project's dependencies. Steps run strictly in order:
//!
//! 1. ensure the target directory exists
//! 2. resolve the package manager (only when installing)
//! 3. compute the overlay plan
//! 4. apply every root of the plan, later roots overwriting earlier ones
//! 5. synthesize `package.json` if the mode asks for it, then install
//!
//! Nothing is rolled back on failure.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use scaffy_config::{Configuration, PackageManager};
use scaffy_runner::{detect_package_manager, CommandRunner, InstallPlan};
use scaffy_templates::{
    DependencyTable, ManifestSource, OverlayPlan, PackageManifest, RootApplier, TemplateError,
    TemplateRenderer, TemplateRoot, MANIFEST_FILE,
};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Inputs that used to be ambient: where templates live and which
/// dependency table to use.
#[derive(Debug, Clone)]
pub struct MaterializeOptions {
    pub templates_dir: PathBuf,
    /// `None` uses the table shipped with scaffy.
    pub dependency_table: Option<DependencyTable>,
}

impl MaterializeOptions {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            dependency_table: None,
        }
    }

    pub fn with_dependency_table(mut self, table: DependencyTable) -> Self {
        self.dependency_table = Some(table);
        self
    }
}

/// What a successful run did.
#[derive(Debug, Clone)]
pub struct MaterializeReport {
    pub target_dir: PathBuf,
    pub applied_roots: Vec<String>,
    pub written_files: Vec<PathBuf>,
    pub package_manager: Option<PackageManager>,
    pub manifest_synthesized: bool,
    pub installed: bool,
}

impl MaterializeReport {
    fn new(target_dir: &Path) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            applied_roots: Vec::new(),
            written_files: Vec::new(),
            package_manager: None,
            manifest_synthesized: false,
            installed: false,
        }
    }
}

/// Renders template roots into a project and drives the install.
pub struct Materializer<R: CommandRunner> {
    options: MaterializeOptions,
    runner: R,
    renderer: TemplateRenderer,
}

impl<R: CommandRunner> Materializer<R> {
    pub fn new(options: MaterializeOptions, runner: R) -> Self {
        Self {
            options,
            runner,
            renderer: TemplateRenderer::new(),
        }
    }

    pub fn options(&self) -> &MaterializeOptions {
        &self.options
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Materialize `config` into `target_dir`.
    pub fn materialize(
        &self,
        config: &Configuration,
        target_dir: &Path,
    ) -> ScaffoldResult<MaterializeReport> {
        info!(
            "Materializing {} ({} mode) into {:?}",
            config.project_name(),
            config.mode(),
            target_dir
        );
        let mut report = MaterializeReport::new(target_dir);

        std::fs::create_dir_all(target_dir).map_err(|e| ScaffoldError::FilesystemWrite {
            path: target_dir.to_path_buf(),
            source: e,
        })?;

        if config.install_deps() {
            report.package_manager = Some(detect_package_manager(
                &self.runner,
                config.package_manager(),
            )?);
        }

        let plan = OverlayPlan::for_config(config);
        self.apply_plan(&plan, config, target_dir, &mut report)?;

        if let Some(manager) = report.package_manager {
            let install = match ManifestSource::for_mode(config.mode()) {
                ManifestSource::Template => {
                    if !target_dir.join(MANIFEST_FILE).is_file() {
                        warn!("Templates did not provide {}; install may fail", MANIFEST_FILE);
                    }
                    InstallPlan::All
                }
                ManifestSource::Table => {
                    PackageManifest::synthesize(config).write_to(target_dir)?;
                    report.manifest_synthesized = true;

                    let resolved = self.dependency_table()?.resolve(config);
                    InstallPlan::Explicit {
                        dependencies: resolved.dependencies,
                        dev_dependencies: resolved.dev_dependencies,
                    }
                }
            };

            for invocation in install.invocations(manager) {
                info!("Running {}", invocation);
                self.runner.run(&invocation, target_dir)?;
            }
            report.installed = true;
        }

        info!(
            "Materialized {} files from {} template roots",
            report.written_files.len(),
            report.applied_roots.len()
        );
        Ok(report)
    }

    fn apply_plan(
        &self,
        plan: &OverlayPlan,
        config: &Configuration,
        target_dir: &Path,
        report: &mut MaterializeReport,
    ) -> ScaffoldResult<()> {
        let mut context = config.to_context();
        // The manager actually used, also when it was auto-detected.
        if let Some(manager) = report.package_manager {
            context.insert("packageManager".to_string(), manager.command().into());
        }
        let applier = RootApplier::new(&self.renderer, &context);

        for (index, root) in plan.roots().iter().enumerate() {
            let source = self.options.templates_dir.join(root.relative_path());
            if !source.is_dir() && !root.is_required() {
                debug!("Skipping absent optional overlay {}", root);
                continue;
            }

            info!("Applying template root [{}/{}]: {}", index + 1, plan.len(), root);
            let written = applier
                .apply(&source, target_dir)
                .map_err(|e| root_error(e, root))?;
            report.written_files.extend(written);
            report.applied_roots.push(root.to_string());
        }
        Ok(())
    }

    fn dependency_table(&self) -> ScaffoldResult<DependencyTable> {
        match &self.options.dependency_table {
            Some(table) => Ok(table.clone()),
            None => Ok(DependencyTable::builtin()?),
        }
    }
}

fn root_error(err: TemplateError, root: &TemplateRoot) -> ScaffoldError {
    if let TemplateError::RootNotFound(_) = &err {
        warn!("Required template root {} is missing", root);
    }
    err.into()
}
