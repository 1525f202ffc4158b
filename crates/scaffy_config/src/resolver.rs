//! Configuration resolver.
//!
//! Turns a sequence of answers into one [`Configuration`]:
//! - `Minimal` mode asks for the framework and whether to install,
//!   then (when installing) the package manager; everything else is fixed.
//! - `Legacy` mode asks for every facet.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::models::{
    Bundler, Choice, Configuration, CssFramework, Framework, Language, PackageManager,
    ScaffoldMode,
};
use crate::prompter::Prompter;

const AUTO_DETECT_LABEL: &str = "Auto-detect (pnpm, then npm)";

/// Drives the question flow against a [`Prompter`].
pub struct ConfigResolver<'a, P: Prompter + ?Sized> {
    prompter: &'a P,
    mode: ScaffoldMode,
}

impl<'a, P: Prompter + ?Sized> ConfigResolver<'a, P> {
    /// Create a new resolver.
    pub fn new(prompter: &'a P, mode: ScaffoldMode) -> Self {
        Self { prompter, mode }
    }

    pub fn mode(&self) -> ScaffoldMode {
        self.mode
    }

    /// Ask the questions for the active mode and build the configuration.
    pub fn resolve(&self, project_name: &str) -> ConfigResult<Configuration> {
        info!("Resolving configuration for '{}' ({} mode)", project_name, self.mode);

        let framework = self.choose("Select a framework:", &Framework::all(), 0)?;
        let mut config = Configuration::new(project_name, framework).with_mode(self.mode);

        if self.mode == ScaffoldMode::Legacy {
            let language = self.choose("Select a language:", &Language::all(), 0)?;
            let css = self.choose("Select a CSS approach:", &CssFramework::all(), 0)?;
            let bundler = self.choose("Select a bundler:", &bundler_order(framework), 0)?;
            config = config
                .with_language(language)
                .with_css_framework(css)
                .with_bundler(bundler);
        }

        if self.prompter.confirm("Install dependencies now?", true)? {
            let package_manager = self.choose_package_manager()?;
            config = config.with_install(package_manager);
        }

        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    /// Ask whether an existing target directory may be overwritten.
    ///
    /// Declining surfaces [`ConfigError::UserCancelled`], the same
    /// condition as dismissing any prompt of the question flow.
    pub fn confirm_overwrite(&self, target: &Path) -> ConfigResult<()> {
        let prompt = format!(
            "Target directory {} already exists. Overwrite it?",
            target.display()
        );
        if self.prompter.confirm(&prompt, false)? {
            Ok(())
        } else {
            Err(ConfigError::UserCancelled)
        }
    }

    fn choose<T: Choice>(&self, prompt: &str, options: &[T], default: usize) -> ConfigResult<T> {
        let labels: Vec<String> = options.iter().map(|o| o.label().to_string()).collect();
        let idx = self.prompter.select(prompt, &labels, default)?;
        options.get(idx).copied().ok_or_else(|| ConfigError::UnknownChoice {
            kind: "menu index",
            value: idx.to_string(),
        })
    }

    /// `None` means the materializer detects the manager itself.
    fn choose_package_manager(&self) -> ConfigResult<Option<PackageManager>> {
        let managers = PackageManager::all();
        let mut labels = vec![AUTO_DETECT_LABEL.to_string()];
        labels.extend(managers.iter().map(|m| m.label().to_string()));

        let idx = self.prompter.select("Select a package manager:", &labels, 0)?;
        match idx {
            0 => Ok(None),
            n => managers
                .get(n - 1)
                .copied()
                .map(Some)
                .ok_or_else(|| ConfigError::UnknownChoice {
                    kind: "menu index",
                    value: n.to_string(),
                }),
        }
    }
}

/// Vue projects default to Vite; React projects list Webpack first.
fn bundler_order(framework: Framework) -> Vec<Bundler> {
    match framework {
        Framework::Vue => vec![Bundler::Vite, Bundler::Webpack],
        Framework::React => vec![Bundler::Webpack, Bundler::Vite],
    }
}
