use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Unknown day name: '{0}'")]
    UnknownDay(String),

    #[error("Unknown spare part code: {0}")]
    UnknownPart(i32),

    #[error("Cannot cast element {index}: expected {expected}, found {actual}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Index {index} is out of bounds for a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl LessonError {
    pub fn type_mismatch(index: usize, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            index,
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LessonError::UnknownDay("FUNDAY".into()).to_string(),
            "Unknown day name: 'FUNDAY'"
        );
        assert_eq!(
            LessonError::type_mismatch(5, "String", "Vehicle").to_string(),
            "Cannot cast element 5: expected String, found Vehicle"
        );
        assert_eq!(
            LessonError::IndexOutOfBounds { index: 9, len: 5 }.to_string(),
            "Index 9 is out of bounds for a list of length 5"
        );
    }
}
