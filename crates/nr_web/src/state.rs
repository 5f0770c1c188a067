use std::path::PathBuf;
use nr_automation::AutomationController;

pub struct AppState {
    pub controller: AutomationController,
    /// Pre-built frontend served for every path the API does not claim
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(controller: AutomationController) -> Self {
        Self {
            controller,
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}
