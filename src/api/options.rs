use crate::core::{LayoutTuning, WindowTuning};
use crate::error::RoadmapResult;

/// Engine-level layout configuration, validated on use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// With stacking enabled, overlapping items within a lane occupy extra
    /// rows; disabled, every lane is a single fixed row.
    pub stacking: bool,
    pub layout: LayoutTuning,
    pub window: WindowTuning,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            stacking: true,
            layout: LayoutTuning::default(),
            window: WindowTuning::default(),
        }
    }
}

impl LayoutOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stacking(mut self, stacking: bool) -> Self {
        self.stacking = stacking;
        self
    }

    #[must_use]
    pub fn with_layout_tuning(mut self, layout: LayoutTuning) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_window_tuning(mut self, window: WindowTuning) -> Self {
        self.window = window;
        self
    }

    pub(crate) fn validate(self) -> RoadmapResult<Self> {
        self.layout.validate()?;
        self.window.validate()?;
        Ok(self)
    }
}
