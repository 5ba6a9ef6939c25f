/// The two tabs of a scenario node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenarioTab {
    #[default]
    Scenarios,
    Results,
}

/// Local UI state of a scenario node: which tab is open.
///
/// The tab only changes on an explicit selection and never touches the
/// node's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScenarioNodeState {
    active_tab: ScenarioTab,
}

impl ScenarioNodeState {
    pub fn active_tab(&self) -> ScenarioTab {
        self.active_tab
    }

    pub fn select(&mut self, tab: ScenarioTab) {
        self.active_tab = tab;
    }
}

/// Smallest rendered content height of a scenario node, in pixels.
pub const MIN_CONTENT_HEIGHT: f64 = 120.0;
/// Largest content height before the node starts scrolling, in pixels.
pub const MAX_CONTENT_HEIGHT: f64 = 600.0;
/// Delay between a data change and the content re-measure, letting the
/// rendering pass settle first.
pub const REMEASURE_DELAY_MS: u64 = 50;

/// Clamps a measured content height into the node's display range.
pub fn clamp_content_height(measured: f64) -> f64 {
    measured.clamp(MIN_CONTENT_HEIGHT, MAX_CONTENT_HEIGHT)
}
