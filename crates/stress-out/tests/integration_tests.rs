//! Integration tests for stress-out with the built-in templates.
//!
//! These tests verify the full path from raw query values to a rendered
//! page or summary.

use stress_core::{interpret, StressKind};
use stress_out::renderer::TemplateRenderer;
use stress_out::templates::TemplatesFile;
use stress_out::{render_outcome, render_view, ResultFormat, ResultView, ViewLinks};

// =============================================================================
// HTML page
// =============================================================================

#[test]
fn test_page_for_resolved_code() {
    let page = render_outcome(
        &interpret(Some("0"), None),
        StressKind::Episodic,
        ResultFormat::Html,
    )
    .unwrap();

    assert!(page.contains("Your Stress Analysis Results"));
    assert!(page.contains("Acute Stress"));
    assert!(page.contains("Practice deep breathing exercises."));
    assert!(page.contains("Take short walks regularly."));
    assert!(page.contains("Break tasks into manageable steps."));
    assert!(!page.contains("role=\"alert\""));
}

#[test]
fn test_page_lists_every_stress_type() {
    let page = render_outcome(
        &interpret(Some("1"), None),
        StressKind::Episodic,
        ResultFormat::Html,
    )
    .unwrap();

    assert!(page.contains("About Stress Types"));
    for kind in StressKind::ALL {
        assert!(page.contains(kind.category().description), "Missing: {}", kind);
    }
}

#[test]
fn test_page_shows_error_with_fallback() {
    let page = render_outcome(
        &interpret(Some("abc"), None),
        StressKind::Episodic,
        ResultFormat::Html,
    )
    .unwrap();

    assert!(page.contains("Error: Invalid stress level: abc"));
    assert!(page.contains("Set a consistent daily routine."));
}

#[test]
fn test_page_escapes_raw_input() {
    let page = render_outcome(
        &interpret(Some("<script>"), None),
        StressKind::Episodic,
        ResultFormat::Html,
    )
    .unwrap();

    assert!(!page.contains("<script>"));
    assert!(page.contains("&lt;script&gt;"));
}

#[test]
fn test_page_prompts_when_code_missing() {
    let page = render_outcome(
        &interpret(None, None),
        StressKind::Episodic,
        ResultFormat::Html,
    )
    .unwrap();

    assert!(page.contains("No stress level was provided"));
    assert!(!page.contains("Your Stress Type"));
    assert!(page.contains("href=\"/predict\""));
}

#[test]
fn test_page_ignores_probability_payload() {
    let page = render_outcome(
        &interpret(Some("2"), Some("%7B%22chronic%22%3A0.9%7D")),
        StressKind::Episodic,
        ResultFormat::Html,
    )
    .unwrap();

    assert!(page.contains("Chronic Stress"));
    assert!(!page.contains("0.9"));
}

// =============================================================================
// Text summary
// =============================================================================

#[test]
fn test_summary_for_resolved_code() {
    let text = render_outcome(
        &interpret(Some("2"), None),
        StressKind::Episodic,
        ResultFormat::Text,
    )
    .unwrap();

    assert!(text.contains("Stress type: Chronic Stress"));
    assert!(text.contains(
        "Talk to a mental health professional. | Improve sleep habits and routine. | \
         Incorporate yoga or relaxation into daily life."
    ));
    assert!(!text.contains("<"));
}

#[test]
fn test_summary_reports_unknown_code() {
    let text = render_outcome(
        &interpret(Some("7"), None),
        StressKind::Acute,
        ResultFormat::Text,
    )
    .unwrap();

    assert!(text.contains("Error: Unknown stress level: 7"));
    assert!(text.contains("Stress type: Acute Stress"));
}

// =============================================================================
// Custom templates and links
// =============================================================================

#[test]
fn test_custom_links() {
    let renderer = TemplateRenderer::builtin().unwrap();
    let view = ResultView::from_outcome(&interpret(None, None), StressKind::Episodic).with_links(
        ViewLinks {
            retry: "/assessment".to_string(),
            home: "/welcome".to_string(),
        },
    );

    let page = render_view(&renderer, &view, ResultFormat::Html).unwrap();
    assert!(page.contains("href=\"/assessment\""));
    assert!(page.contains("href=\"/welcome\""));
}

#[test]
fn test_replacement_templates() {
    let templates = TemplatesFile::from_yaml(
        r#"
version: "1.0"
templates:
  result_page:
    description: Minimal page
    template: "<p>{{category.label}}</p>"
  result_summary:
    description: Minimal summary
    template: "{{{category.label}}} ({{state}})"
"#,
    )
    .unwrap();
    let renderer = TemplateRenderer::new(templates).unwrap();
    let view = ResultView::from_outcome(&interpret(Some("1"), None), StressKind::Acute);

    assert_eq!(
        render_view(&renderer, &view, ResultFormat::Html).unwrap(),
        "<p>Episodic Stress</p>"
    );
    assert_eq!(
        render_view(&renderer, &view, ResultFormat::Text).unwrap(),
        "Episodic Stress (resolved)"
    );
}

#[test]
fn test_missing_template_is_render_error() {
    let templates = TemplatesFile::from_yaml(
        r#"
version: "1.0"
templates:
  result_page:
    description: Page only
    template: "page"
"#,
    )
    .unwrap();
    let renderer = TemplateRenderer::new(templates).unwrap();
    let view = ResultView::from_outcome(&interpret(Some("1"), None), StressKind::Acute);

    assert!(render_view(&renderer, &view, ResultFormat::Text).is_err());
}
