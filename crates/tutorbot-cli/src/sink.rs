//! Terminal rendering of the status indicator.

use std::io::{Stdout, Write, stdout};

use tutorbot_status::{Indicator, IndicatorSink, StatusState};

/// Renders each indicator update as one line: a colored dot, the label,
/// and the status-page link when the backend supplied one.
pub struct TerminalIndicator<W = Stdout> {
    out: W,
}

impl TerminalIndicator<Stdout> {
    pub fn new() -> Self {
        Self { out: stdout() }
    }
}

impl Default for TerminalIndicator<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> IndicatorSink for TerminalIndicator<W> {
    fn render(&mut self, indicator: &Indicator) {
        let dot = if indicator.pulsing { "◌" } else { "●" };
        let mut line = format!(
            "{}{dot}\x1b[0m {}",
            ansi_color(indicator.color),
            indicator.label
        );
        if let Some(link) = indicator.link.as_deref() {
            line.push_str(&format!(" ({link})"));
        }

        // A closed pipe must not kill the watch loop mid-render.
        let _ = writeln!(self.out, "{line}");
        let _ = self.out.flush();
    }
}

/// Nearest ANSI color for the fixed indicator palette.
fn ansi_color(color: &str) -> &'static str {
    if color == StatusState::Operational.color() {
        "\x1b[32m"
    } else if color == StatusState::Degraded.color() {
        "\x1b[33m"
    } else if color == StatusState::Down.color() {
        "\x1b[31m"
    } else {
        "\x1b[90m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(indicator: &Indicator) -> String {
        let mut sink = TerminalIndicator { out: Vec::new() };
        sink.render(indicator);
        String::from_utf8(sink.out).unwrap()
    }

    #[test]
    fn test_render_includes_label_and_link() {
        let indicator = Indicator::new(
            StatusState::Operational,
            Some("https://status.example.com".to_string()),
        );
        let line = render_to_string(&indicator);

        assert!(line.contains("All systems operational"));
        assert!(line.contains("(https://status.example.com)"));
        assert!(line.contains("\x1b[32m"));
    }

    #[test]
    fn test_render_without_link_omits_parens() {
        let line = render_to_string(&Indicator::new(StatusState::Down, None));

        assert!(line.contains("Service outage"));
        assert!(!line.contains('('));
        assert!(line.contains("\x1b[31m"));
    }

    #[test]
    fn test_loading_uses_hollow_dot() {
        let line = render_to_string(&Indicator::new(StatusState::Loading, None));
        assert!(line.contains('◌'));
    }
}
