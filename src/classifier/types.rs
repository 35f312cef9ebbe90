use serde::{Deserialize, Serialize};

use super::issue::LinkIssue;

/// Media kind assigned to a recognized link. Drives which viewer the
/// UI embeds (iframe for documents, player for video).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FileKind {
    Video,
    Ppt,
    Doc,
    Sheet,
    Pdf,
    Unknown,
}

/// Outcome of classifying one pasted URL. A pure value: rebuilding it
/// from the same input always yields the same result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_valid: bool,
    pub errors: Vec<LinkIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    pub file_type: FileKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
}

impl Classification {
    /// Invalid input. No file id, no embed URL.
    pub(crate) fn rejected(issue: LinkIssue) -> Self {
        Self {
            is_valid: false,
            errors: vec![issue],
            file_id: None,
            file_type: FileKind::Unknown,
            embed_url: None,
        }
    }

    /// Non-Drive media link: embedded verbatim, no file id.
    pub(crate) fn media(kind: FileKind, url: &str) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            file_id: None,
            file_type: kind,
            embed_url: Some(url.to_string()),
        }
    }

    /// Recognized Drive/Docs link with an extracted file id.
    pub(crate) fn drive(file_id: String, kind: FileKind, embed_url: String) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            file_id: Some(file_id),
            file_type: kind,
            embed_url: Some(embed_url),
        }
    }
}

/// Advisory sharing check. Warnings are hints for the editor, never a
/// reason to block the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessReport {
    pub is_public: bool,
    pub warnings: Vec<String>,
}
