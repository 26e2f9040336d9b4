use crate::violation::Diagnostic;
use ansi_term::Color::RGB;
use ansi_term::Style;

/// Renders one styled line per diagnostic plus a summary line.
pub fn render(diagnostics: &[Diagnostic]) -> String {
    let mut lines: Vec<String> = diagnostics
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect();

    let summary = if diagnostics.is_empty() {
        let green = Style::new().bold().fg(RGB(0, 255, 0));
        green.paint("No hexagonal architecture violations found").to_string()
    } else {
        let red = Style::new().bold().fg(RGB(255, 0, 0));
        red.paint(format!("Found {} violation(s)", diagnostics.len()))
            .to_string()
    };
    lines.push(summary);

    lines.join("\n")
}

/// Machine-readable output for editor or CI integration.
pub fn render_json(diagnostics: &[Diagnostic]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(diagnostics)
}
