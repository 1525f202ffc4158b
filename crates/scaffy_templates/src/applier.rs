//! Applying one template root to a target directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};
use crate::renderer::{Context, TemplateRenderer};

/// Mirrors a template root into a target directory.
///
/// Directories are merged; files are rendered and replace whatever is at
/// the mirrored path. Files that are not UTF-8 text are copied verbatim.
pub struct RootApplier<'a> {
    renderer: &'a TemplateRenderer,
    context: &'a Context,
}

impl<'a> RootApplier<'a> {
    pub fn new(renderer: &'a TemplateRenderer, context: &'a Context) -> Self {
        Self { renderer, context }
    }

    /// Apply `source_root` onto `target_root`; returns the files written.
    pub fn apply(&self, source_root: &Path, target_root: &Path) -> TemplateResult<Vec<PathBuf>> {
        if !source_root.is_dir() {
            return Err(TemplateError::RootNotFound(source_root.to_path_buf()));
        }

        ensure_dir(target_root)?;
        let mut written = Vec::new();

        for entry in WalkDir::new(source_root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| TemplateError::Read {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| source_root.to_path_buf()),
                source: e.into(),
            })?;
            let source = entry.path();
            let Ok(relative) = source.strip_prefix(source_root) else {
                continue;
            };
            let target = target_root.join(relative);

            if entry.file_type().is_dir() {
                ensure_dir(&target)?;
            } else {
                self.apply_file(source, relative, &target)?;
                written.push(target);
            }
        }

        info!("Applied {} ({} files)", source_root.display(), written.len());
        Ok(written)
    }

    fn apply_file(&self, source: &Path, relative: &Path, target: &Path) -> TemplateResult<()> {
        let bytes = fs::read(source).map_err(|e| TemplateError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;

        if let Some(parent) = target.parent() {
            ensure_dir(parent)?;
        }

        let output = match String::from_utf8(bytes) {
            Ok(text) => self
                .renderer
                .render_named(&relative.display().to_string(), &text, self.context)
                .map_err(|e| TemplateError::Render {
                    path: source.to_path_buf(),
                    source: e,
                })?
                .into_bytes(),
            Err(raw) => {
                debug!("Copying binary file {:?}", source);
                raw.into_bytes()
            }
        };

        fs::write(target, output).map_err(|e| TemplateError::Write {
            path: target.to_path_buf(),
            source: e,
        })?;
        debug!("Wrote {:?}", target);
        Ok(())
    }
}

/// Idempotent directory creation.
pub(crate) fn ensure_dir(path: &Path) -> TemplateResult<()> {
    fs::create_dir_all(path).map_err(|e| TemplateError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn context() -> Context {
        match json!({ "projectName": "demo-app", "framework": "react" }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_apply_mirrors_tree() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("root");
        fs::create_dir_all(source.join("src/pages")).unwrap();
        fs::create_dir_all(source.join("empty")).unwrap();
        fs::write(source.join("index.html"), "<title><%= projectName %></title>").unwrap();
        fs::write(source.join("src/pages/Home.tsx"), "// home").unwrap();

        let target = temp.path().join("out");
        let renderer = TemplateRenderer::new();
        let ctx = context();
        let written = RootApplier::new(&renderer, &ctx)
            .apply(&source, &target)
            .unwrap();

        assert_eq!(written.len(), 2);
        assert!(target.join("empty").is_dir());
        assert_eq!(
            fs::read_to_string(target.join("index.html")).unwrap(),
            "<title>demo-app</title>"
        );
        assert_eq!(
            fs::read_to_string(target.join("src/pages/Home.tsx")).unwrap(),
            "// home"
        );
    }

    #[test]
    fn test_binary_files_copied_verbatim() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("root");
        fs::create_dir_all(&source).unwrap();
        let bytes = vec![0x89, b'P', b'N', b'G', 0xff, 0xfe, b'<', b'%'];
        fs::write(source.join("favicon.png"), &bytes).unwrap();

        let target = temp.path().join("out");
        let renderer = TemplateRenderer::new();
        let ctx = context();
        RootApplier::new(&renderer, &ctx)
            .apply(&source, &target)
            .unwrap();

        assert_eq!(fs::read(target.join("favicon.png")).unwrap(), bytes);
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let renderer = TemplateRenderer::new();
        let ctx = context();
        let err = RootApplier::new(&renderer, &ctx)
            .apply(&temp.path().join("nope"), temp.path())
            .unwrap_err();
        assert!(matches!(err, TemplateError::RootNotFound(_)));
    }

    #[test]
    fn test_render_error_names_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("root");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("broken.js"), "<%= unknownField %>").unwrap();

        let renderer = TemplateRenderer::new();
        let ctx = context();
        let err = RootApplier::new(&renderer, &ctx)
            .apply(&source, &temp.path().join("out"))
            .unwrap_err();

        match err {
            TemplateError::Render { path, source } => {
                assert!(path.ends_with("broken.js"));
                assert_eq!(source.name(), Some("broken.js"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
