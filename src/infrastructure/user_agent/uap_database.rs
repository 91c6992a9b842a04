//! [`SignatureDatabase`] over the uap-core `regexes.yaml` ruleset.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use uaparser::{Parser, UserAgentParser};

use crate::domain::signatures::{SignatureDatabase, UaSignals};

/// Errors raised while loading the signature database.
#[derive(Debug, Error)]
pub enum SignatureLoadError {
    #[error(
        "regexes.yaml not found at path: {0}. Download it from \
         https://github.com/ua-parser/uap-core/blob/master/regexes.yaml"
    )]
    MissingDatabase(PathBuf),

    #[error("failed to load signature database from {path}: {reason}")]
    Load { path: PathBuf, reason: String },
}

/// Signature database compiled from a uap-core `regexes.yaml` file.
///
/// Loaded once at startup and read-only afterwards.
pub struct UapSignatureDatabase {
    parser: UserAgentParser,
}

impl UapSignatureDatabase {
    /// Loads and compiles the ruleset at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureLoadError::MissingDatabase`] if the file does not exist
    /// and [`SignatureLoadError::Load`] if it cannot be read or compiled.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SignatureLoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SignatureLoadError::MissingDatabase(path.to_path_buf()));
        }

        let load_error = |reason: String| SignatureLoadError::Load {
            path: path.to_path_buf(),
            reason,
        };

        let path_str = path
            .to_str()
            .ok_or_else(|| load_error("path is not valid UTF-8".to_string()))?;
        let parser =
            UserAgentParser::from_yaml(path_str).map_err(|e| load_error(format!("{e:?}")))?;

        info!("Loaded user-agent signatures from {}", path.display());
        Ok(Self { parser })
    }
}

impl SignatureDatabase for UapSignatureDatabase {
    fn parse(&self, user_agent: &str) -> UaSignals {
        UaSignals::new(
            self.parser.parse_user_agent(user_agent).family.to_string(),
            self.parser.parse_device(user_agent).family.to_string(),
            self.parser.parse_os(user_agent).family.to_string(),
        )
    }
}
