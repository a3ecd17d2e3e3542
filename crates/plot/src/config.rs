use eframe::egui;

/// Window options shared by every plot.
///
/// # Example
///
/// ```ignore
/// show_phase(&trajectory, ShowConfig::new().title("Theta vs. Omega").legend())?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShowConfig {
    pub(crate) title: Option<String>,
    pub(crate) legend: bool,
    pub(crate) size: [f32; 2],
}

impl ShowConfig {
    /// No title, no legend, a 600 × 600 window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            size: [600.0, 600.0],
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Shows a legend naming each series.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Sets the initial window size in points.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = [width, height];
        self
    }

    pub(crate) fn window_title(&self) -> String {
        self.title.clone().unwrap_or_default()
    }

    pub(crate) fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(self.size),
            ..Default::default()
        }
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}
