//! Install command shapes.

use std::fmt;

use scaffy_config::PackageManager;

/// A single external command: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What the install step has to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPlan {
    /// Install everything the manifest on disk already declares.
    All,
    /// Add the given packages; runtime first, then dev with the dev flag.
    Explicit {
        dependencies: Vec<String>,
        dev_dependencies: Vec<String>,
    },
}

impl InstallPlan {
    /// Commands to run, in order. Empty package lists produce no command.
    pub fn invocations(&self, manager: PackageManager) -> Vec<Invocation> {
        match self {
            InstallPlan::All => vec![Invocation::new(manager.command()).arg("install")],
            InstallPlan::Explicit {
                dependencies,
                dev_dependencies,
            } => {
                let mut invocations = Vec::new();
                if !dependencies.is_empty() {
                    invocations.push(add_command(manager, false).args(dependencies.iter().cloned()));
                }
                if !dev_dependencies.is_empty() {
                    invocations
                        .push(add_command(manager, true).args(dev_dependencies.iter().cloned()));
                }
                invocations
            }
        }
    }
}

fn add_command(manager: PackageManager, dev: bool) -> Invocation {
    let verb = match manager {
        PackageManager::Npm | PackageManager::Cnpm => "install",
        PackageManager::Pnpm | PackageManager::Yarn => "add",
    };
    let invocation = Invocation::new(manager.command()).arg(verb);
    if dev {
        invocation.arg("-D")
    } else {
        invocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> InstallPlan {
        InstallPlan::Explicit {
            dependencies: vec!["react".into(), "react-dom".into()],
            dev_dependencies: vec!["vite".into()],
        }
    }

    #[test]
    fn test_install_all() {
        let cmds = InstallPlan::All.invocations(PackageManager::Pnpm);
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].to_string(), "pnpm install");
    }

    #[test]
    fn test_explicit_shapes_per_manager() {
        let rendered = |pm: PackageManager| {
            plan()
                .invocations(pm)
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(
            rendered(PackageManager::Npm),
            vec!["npm install react react-dom", "npm install -D vite"]
        );
        assert_eq!(
            rendered(PackageManager::Cnpm),
            vec!["cnpm install react react-dom", "cnpm install -D vite"]
        );
        assert_eq!(
            rendered(PackageManager::Pnpm),
            vec!["pnpm add react react-dom", "pnpm add -D vite"]
        );
        assert_eq!(
            rendered(PackageManager::Yarn),
            vec!["yarn add react react-dom", "yarn add -D vite"]
        );
    }

    #[test]
    fn test_empty_lists_are_skipped() {
        let plan = InstallPlan::Explicit {
            dependencies: vec![],
            dev_dependencies: vec!["typescript".into()],
        };
        let cmds = plan.invocations(PackageManager::Npm);
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].args, vec!["install", "-D", "typescript"]);
    }
}
