use super::types::FileKind;

/// Recognized Drive/Docs share-link shapes, in priority order. The
/// first marker found in the URL supplies the file id; the id runs
/// until the first character outside `[A-Za-z0-9_-]`.
const ID_MARKERS: [&str; 5] = [
    "drive.google.com/file/d/",
    "drive.google.com/open?id=",
    "docs.google.com/document/d/",
    "docs.google.com/presentation/d/",
    "docs.google.com/spreadsheets/d/",
];

#[must_use]
pub fn extract_file_id(url: &str) -> Option<String> {
    for marker in ID_MARKERS {
        if let Some(pos) = url.find(marker) {
            let id: String = url[pos + marker.len()..]
                .chars()
                .take_while(|&c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                .collect();
            if !id.is_empty() {
                return Some(id);
            }
        }
    }
    None
}

/// Classify a Drive-family URL by which product surface it points at.
/// A bare `drive.google.com/file` link is assumed to be video; editors
/// are expected to share documents as Docs/Slides/Sheets links.
#[must_use]
pub fn kind_of(url: &str) -> FileKind {
    if url.contains("docs.google.com/presentation") {
        FileKind::Ppt
    } else if url.contains("docs.google.com/document") {
        FileKind::Doc
    } else if url.contains("docs.google.com/spreadsheets") {
        FileKind::Sheet
    } else if url.contains("drive.google.com/file") {
        FileKind::Video
    } else {
        FileKind::Unknown
    }
}

/// Embeddable viewer URL for a file id, or `None` when the kind has no
/// dedicated viewer and the original link should be used as-is.
#[must_use]
pub fn viewer_url(file_id: &str, kind: FileKind) -> Option<String> {
    let url = match kind {
        FileKind::Ppt => format!("https://docs.google.com/presentation/d/{file_id}/embed"),
        FileKind::Doc => format!("https://docs.google.com/document/d/{file_id}/preview"),
        FileKind::Sheet => format!("https://docs.google.com/spreadsheets/d/{file_id}/preview"),
        FileKind::Video => format!("https://drive.google.com/file/d/{file_id}/preview"),
        FileKind::Pdf | FileKind::Unknown => return None,
    };
    Some(url)
}
