use crate::models::Feed;

/// State backing the board view.
pub struct AppState {
    pub feeds: Vec<Feed>,
    /// Whether the board's tagline header is rendered.
    pub show_seo: bool,
    /// True until [`AppState::created`] resolves.
    pub fullscreen_loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            feeds: Vec::new(),
            show_seo: true,
            fullscreen_loading: true,
        }
    }

    /// Startup hook; the view leaves its loading state once this resolves.
    pub async fn created(&mut self) {
        self.fullscreen_loading = false;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
