use super::types::FileKind;

const VIDEO_SUFFIXES: [&str; 3] = [".mp4", ".webm", ".mov"];
const PPT_SUFFIXES: [&str; 2] = [".ppt", ".pptx"];
const DOC_SUFFIXES: [&str; 2] = [".doc", ".docx"];

/// Classify a non-Drive media URL by host and file-extension hints,
/// first match wins. Anything unrecognized counts as video: the link
/// goes straight into a player and failure surfaces there, not in the
/// form.
#[must_use]
pub fn kind_of(url: &str) -> FileKind {
    let url = url.to_lowercase();

    if url.contains("youtube.com") || url.contains("youtu.be") {
        return FileKind::Video;
    }
    if url.contains("vimeo.com") {
        return FileKind::Video;
    }
    if url.ends_with(".pdf") {
        return FileKind::Pdf;
    }
    if VIDEO_SUFFIXES.iter().any(|s| url.ends_with(s)) {
        return FileKind::Video;
    }
    if PPT_SUFFIXES.iter().any(|s| url.ends_with(s)) {
        return FileKind::Ppt;
    }
    if DOC_SUFFIXES.iter().any(|s| url.ends_with(s)) {
        return FileKind::Doc;
    }

    FileKind::Video
}
