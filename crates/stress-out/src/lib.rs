//! Stress Out: presentation model and rendering for stress results
//!
//! This crate turns an interpretation outcome into a [`ResultView`] and
//! renders it through Handlebars templates, either as a full HTML page or as
//! a plain-text summary.
//!
//! # Example
//!
//! ```ignore
//! use stress_core::{interpret, StressKind};
//! use stress_out::{render_outcome, ResultFormat};
//!
//! let outcome = interpret(Some("2"), None);
//! let page = render_outcome(&outcome, StressKind::Episodic, ResultFormat::Html).unwrap();
//! assert!(page.contains("Chronic Stress"));
//! ```

pub mod renderer;
pub mod templates;

use once_cell::sync::Lazy;
use renderer::TemplateRenderer;
use serde::Serialize;
use std::str::FromStr;
use stress_core::{catalog, InterpretError, Interpretation, StressCategory, StressKind};
use thiserror::Error;

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
}

/// Where a view's category came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// The code resolved to a category
    Resolved,
    /// The code was rejected; the caller's fallback category is shown
    Fallback,
    /// No code was supplied yet
    AwaitingInput,
}

/// Navigation targets offered on the result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewLinks {
    pub retry: String,
    pub home: String,
}

impl Default for ViewLinks {
    fn default() -> Self {
        Self {
            retry: "/predict".to_string(),
            home: "/".to_string(),
        }
    }
}

/// Everything a result template needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub state: ViewState,
    /// User-visible error text
    pub error: Option<String>,
    pub category: Option<&'static StressCategory>,
    pub catalog: Vec<&'static StressCategory>,
    pub links: ViewLinks,
}

impl ResultView {
    /// Build the view for an interpretation outcome.
    ///
    /// A rejected code shows its error next to `fallback`; a missing code
    /// shows neither a category nor an error.
    pub fn from_outcome(
        outcome: &Result<Interpretation, InterpretError>,
        fallback: StressKind,
    ) -> Self {
        let (state, error, category) = match outcome {
            Ok(interpretation) => (ViewState::Resolved, None, Some(interpretation.category)),
            Err(InterpretError::MissingCode) => (ViewState::AwaitingInput, None, None),
            Err(e) => (ViewState::Fallback, Some(e.to_string()), Some(fallback.category())),
        };

        Self {
            state,
            error,
            category,
            catalog: catalog().collect(),
            links: ViewLinks::default(),
        }
    }

    pub fn with_links(mut self, links: ViewLinks) -> Self {
        self.links = links;
        self
    }
}

/// Output flavour of a rendered result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFormat {
    #[default]
    Html,
    Text,
}

impl ResultFormat {
    pub fn template_name(self) -> &'static str {
        match self {
            Self::Html => "result_page",
            Self::Text => "result_summary",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Html => "text/html; charset=utf-8",
            Self::Text => "text/plain; charset=utf-8",
        }
    }
}

impl FromStr for ResultFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("unsupported format: {}", other)),
        }
    }
}

static BUILTIN_RENDERER: Lazy<Result<TemplateRenderer<'static>, String>> =
    Lazy::new(TemplateRenderer::builtin);

/// Render a view with the given renderer
pub fn render_view(
    renderer: &TemplateRenderer<'_>,
    view: &ResultView,
    format: ResultFormat,
) -> Result<String, RenderError> {
    renderer
        .render(format.template_name(), view)
        .map_err(RenderError::Render)
}

/// Render an interpretation outcome with the built-in templates
pub fn render_outcome(
    outcome: &Result<Interpretation, InterpretError>,
    fallback: StressKind,
    format: ResultFormat,
) -> Result<String, RenderError> {
    let renderer = BUILTIN_RENDERER
        .as_ref()
        .map_err(|e| RenderError::Template(e.clone()))?;
    render_view(renderer, &ResultView::from_outcome(outcome, fallback), format)
}
