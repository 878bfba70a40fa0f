mod config;
mod error;
mod loader;

use std::process::ExitCode;

use txml_engine::logging::{init_logging, LoggingConfig};
use txml_markup::{parse_document, ElementKind};
use txml_ui::Application;

use config::ViewerConfig;
use error::StartupError;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run(ViewerConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: ViewerConfig) -> Result<(), StartupError> {
    let font = loader::load_font(&config.font_candidates)?;
    let src = loader::load_markup(&config.document_path)?;

    let doc = parse_document(&src);
    log::info!(
        "{}: {} styles, {} texts, {} buttons, font {}",
        config.document_path.display(),
        doc.styles.len(),
        doc.count(ElementKind::Text),
        doc.count(ElementKind::Button),
        font.path.display(),
    );

    Application::new()
        .title(config.title)
        .size(config.width, config.height)
        .font(font.fonts, font.id, config.font_size)
        .poll_interval(config.poll_interval)
        .run(doc)
        .map_err(StartupError::Window)
}
