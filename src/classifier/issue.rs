use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a pasted link was rejected. `Display` is the exact text shown
/// to the editor next to the form field, so variants serialize as
/// their message rather than their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkIssue {
    #[error("URL is required")]
    MissingInput,

    #[error("URL cannot be empty")]
    EmptyInput,

    #[error("URL must start with http:// or https://")]
    BadScheme,

    #[error("Invalid Google Drive URL format. Use a direct share link.")]
    UnrecognizedDriveFormat,
}

impl Serialize for LinkIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
