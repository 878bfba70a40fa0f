use std::fs;
use std::path::{Path, PathBuf};

use txml_engine::text::{FontId, FontSystem};

use crate::error::StartupError;

/// Reads the markup file. Invalid UTF-8 sequences are replaced rather than
/// rejected.
pub fn load_markup(path: &Path) -> Result<String, StartupError> {
    let bytes = fs::read(path).map_err(|source| StartupError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("{} is not valid UTF-8; decoding lossily", path.display());
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    log::debug!("read {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

/// A font parsed once at startup and handed to the UI as is.
pub struct LoadedFont {
    pub path: PathBuf,
    pub fonts: FontSystem,
    pub id: FontId,
}

/// Parses the first candidate that reads and parses as a font.
pub fn load_font(candidates: &[PathBuf]) -> Result<LoadedFont, StartupError> {
    for path in candidates {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::debug!("font {}: {err}", path.display());
                continue;
            }
        };

        let mut fonts = FontSystem::new();
        let id = match fonts.load_font(&bytes) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("font {}: {err}", path.display());
                continue;
            }
        };

        log::info!("using font {}", path.display());
        return Ok(LoadedFont { path: path.clone(), fonts, id });
    }

    Err(StartupError::NoFont { tried: candidates.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_markup_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "<text>Hello</text>").unwrap();
        assert_eq!(load_markup(f.path()).unwrap(), "<text>Hello</text>");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"<text>a\xffb</text>").unwrap();
        assert_eq!(load_markup(f.path()).unwrap(), "<text>a\u{fffd}b</text>");
    }

    #[test]
    fn missing_markup_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.txt");
        let err = load_markup(&path).unwrap_err();
        assert!(matches!(err, StartupError::ReadDocument { .. }));
        assert!(err.to_string().contains("index.txt"));
    }

    #[test]
    fn missing_and_corrupt_fonts_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let corrupt = dir.path().join("broken.ttf");
        fs::write(&corrupt, b"not a font").unwrap();
        let missing = dir.path().join("Arial.ttf");

        assert!(matches!(load_font(&[missing, corrupt]), Err(StartupError::NoFont { tried: 2 })));
    }

    #[test]
    fn first_parsable_font_is_measurable() {
        let Some(system) = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        ]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists()) else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let corrupt = dir.path().join("broken.ttf");
        fs::write(&corrupt, b"not a font").unwrap();

        let Ok(loaded) = load_font(&[corrupt, system.clone()]) else {
            panic!("{} did not load", system.display());
        };
        assert_eq!(loaded.path, system);
        assert!(loaded.fonts.measure_text("OK", loaded.id, 24.0).is_some());
    }

    #[test]
    fn no_candidates_is_an_error() {
        assert!(matches!(load_font(&[]), Err(StartupError::NoFont { tried: 0 })));
    }
}
