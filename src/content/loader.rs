//! Loader for RON tuning files at startup.

use ron::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::movement::MovementTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate tuning from RON text. Omitted fields keep their defaults.
pub fn parse_tuning(contents: &str, file_name: &str) -> Result<MovementTuning, ContentLoadError> {
    let tuning: MovementTuning = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    tuning.validate().map_err(|e| ContentLoadError {
        file: file_name.to_string(),
        message: format!("Invalid tuning: {}", e),
    })?;

    Ok(tuning)
}

/// Load tuning from `path`. Returns `Ok(None)` when the file does not exist.
pub fn load_tuning(path: &Path) -> Result<Option<MovementTuning>, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ContentLoadError {
                file: file_name,
                message: format!("IO error: {}", e),
            });
        }
    };

    parse_tuning(&contents, &file_name).map(Some)
}
