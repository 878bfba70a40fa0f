use std::path::PathBuf;
use std::time::Duration;

/// Fixed process settings. There are no command-line flags.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Markup file to interpret, relative to the working directory.
    pub document_path: PathBuf,
    /// Fonts tried in order; the first one that loads is used.
    pub font_candidates: Vec<PathBuf>,
    pub font_size: f32,
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub poll_interval: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from("index.txt"),
            font_candidates: [
                "Arial.ttf",
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/noto/NotoSans-Regular.ttf",
                "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
                "/system/fonts/Roboto-Regular.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            font_size: 24.0,
            title: "TXML Interpreter".to_string(),
            width: 400.0,
            height: 300.0,
            poll_interval: Duration::from_millis(16),
        }
    }
}
