//! Status states and their fixed indicator mapping.

/// One of the five health values the indicator can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusState {
    /// Initial state, shown only before the very first fetch resolves.
    Loading,
    Operational,
    Degraded,
    Down,
    /// Fetch failure, non-success response, or unrecognized status value.
    Unknown,
}

impl StatusState {
    /// Maps a backend status string, case-insensitively. Anything
    /// unrecognized is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "operational" => StatusState::Operational,
            "degraded" => StatusState::Degraded,
            "down" => StatusState::Down,
            _ => StatusState::Unknown,
        }
    }

    /// Fixed indicator color for this state.
    pub fn color(self) -> &'static str {
        match self {
            StatusState::Loading => "#90a4ae",
            StatusState::Operational => "#2e7d32",
            StatusState::Degraded => "#f9a825",
            StatusState::Down => "#c62828",
            StatusState::Unknown => "#9e9e9e",
        }
    }

    /// Fixed tooltip label for this state.
    pub fn label(self) -> &'static str {
        match self {
            StatusState::Loading => "Checking status...",
            StatusState::Operational => "All systems operational",
            StatusState::Degraded => "Degraded performance",
            StatusState::Down => "Service outage",
            StatusState::Unknown => "Status unavailable",
        }
    }
}

/// What a render target shows for the current state: a color, a label,
/// whether the dot pulses, and an optional status-page link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub color: &'static str,
    pub label: &'static str,
    pub pulsing: bool,
    pub link: Option<String>,
}

impl Indicator {
    /// Builds the indicator for a state; only `Loading` pulses, and the
    /// link affordance exists only when the backend supplied a URL.
    pub fn new(state: StatusState, link: Option<String>) -> Self {
        Self {
            color: state.color(),
            label: state.label(),
            pulsing: state == StatusState::Loading,
            link,
        }
    }
}
