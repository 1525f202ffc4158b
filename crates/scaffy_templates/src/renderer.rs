//! Template rendering.
//!
//! Templates are Jinja (minijinja) with EJS-style delimiters:
//!
//! | tag | meaning |
//! |---|---|
//! | `<%= expr %>` | output |
//! | `<% if expr %>` … `<% elif expr %>` … `<% else %>` … `<% endif %>` | conditional |
//! | `<%# ... %>` | comment |
//!
//! Block tags on a line of their own leave no blank line behind. Output is
//! written as-is; use the `escape` filter where markup needs it.

use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::debug;

use crate::error::RenderError;

/// Substitution context: configuration fields by name.
pub type Context = serde_json::Map<String, serde_json::Value>;

/// Name used for templates rendered without a file behind them.
const INLINE_NAME: &str = "<inline>";

/// Template renderer.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a new template renderer.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_syntax(syntax());
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Render `source` against `ctx`.
    pub fn render(&self, source: &str, ctx: &Context) -> Result<String, RenderError> {
        self.render_named(INLINE_NAME, source, ctx)
    }

    /// Render `source` against `ctx`; `name` shows up in error reports.
    pub fn render_named(
        &self,
        name: &str,
        source: &str,
        ctx: &Context,
    ) -> Result<String, RenderError> {
        let rendered = self.env.render_named_str(name, source, ctx)?;
        debug!("Rendered {} ({} bytes into {} bytes)", name, source.len(), rendered.len());
        Ok(rendered)
    }
}

fn syntax() -> SyntaxConfig {
    SyntaxConfig::builder()
        .block_delimiters("<%", "%>")
        .variable_delimiters("<%=", "%>")
        .comment_delimiters("<%#", "%>")
        .build()
        .expect("EJS delimiters are distinct")
}
