use tracing::debug;

use super::issue::LinkIssue;
use super::types::{AccessReport, Classification};
use super::{drive, media};

/// Advisory text attached to Drive links that do not carry a sharing
/// marker in their query string.
pub const PRIVATE_LINK_WARNING: &str =
    "This link may be private. Ensure sharing is set to 'Anyone with the link'.";

/// Classify a pasted URL. Total and pure: any input, including `None`,
/// yields a result; failures come back as `errors`, never as a panic.
///
/// Validation is ordered and short-circuits: presence, scheme, then
/// either the Drive share-link rules or the generic media rules.
#[must_use]
pub fn classify(input: Option<&str>) -> Classification {
    let Some(raw) = input else {
        return Classification::rejected(LinkIssue::MissingInput);
    };
    let url = raw.trim();
    if url.is_empty() {
        return Classification::rejected(LinkIssue::EmptyInput);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Classification::rejected(LinkIssue::BadScheme);
    }

    if url.contains("drive.google.com") || url.contains("docs.google.com") {
        classify_drive(url)
    } else {
        let kind = media::kind_of(url);
        debug!(%kind, "classified external media link");
        Classification::media(kind, url)
    }
}

fn classify_drive(url: &str) -> Classification {
    let Some(file_id) = drive::extract_file_id(url) else {
        debug!(url, "no recognized drive share-link shape");
        return Classification::rejected(LinkIssue::UnrecognizedDriveFormat);
    };
    let kind = drive::kind_of(url);
    let embed_url = drive::viewer_url(&file_id, kind).unwrap_or_else(|| url.to_string());
    debug!(%kind, file_id, "classified drive link");
    Classification::drive(file_id, kind, embed_url)
}

/// Best-effort embed URL: the derived viewer URL when classification
/// succeeds, otherwise the input unchanged so the caller can still try
/// it.
#[must_use]
pub fn to_embed_url(url: &str) -> String {
    classify(Some(url))
        .embed_url
        .unwrap_or_else(|| url.to_string())
}

/// Heuristic sharing check. A `/d/` link without a `sharing` marker
/// was probably copied from the address bar instead of the Share
/// dialog. Advisory only; cannot verify actual permissions without a
/// network call it deliberately does not make.
#[must_use]
pub fn check_public_access(url: &str) -> AccessReport {
    let mut warnings = Vec::new();
    if url.contains("/d/") && !url.contains("sharing") {
        warnings.push(PRIVATE_LINK_WARNING.to_string());
    }
    AccessReport {
        is_public: warnings.is_empty(),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::{check_public_access, classify, to_embed_url};
    use crate::classifier::issue::LinkIssue;
    use crate::classifier::types::FileKind;

    #[test]
    fn missing_input() {
        let result = classify(None);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![LinkIssue::MissingInput]);
    }

    #[test]
    fn empty_and_whitespace_input() {
        for input in ["", "   ", "\t\n"] {
            let result = classify(Some(input));
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec![LinkIssue::EmptyInput], "{input:?}");
        }
    }

    #[test]
    fn scheme_is_required() {
        for input in ["not-a-url", "ftp://example.com/a.mp4", "www.youtube.com/watch?v=x"] {
            let result = classify(Some(input));
            assert_eq!(result.errors, vec![LinkIssue::BadScheme], "{input}");
        }
    }

    #[test]
    fn input_is_trimmed_before_all_checks() {
        let result = classify(Some("  https://drive.google.com/file/d/AbC123/view  "));
        assert!(result.is_valid);
        assert_eq!(result.file_id.as_deref(), Some("AbC123"));
        assert_eq!(
            result.embed_url.as_deref(),
            Some("https://drive.google.com/file/d/AbC123/preview")
        );
    }

    #[test]
    fn drive_file_link_classifies_as_video() {
        let result = classify(Some("https://drive.google.com/file/d/1A2b3C4d/view"));
        assert!(result.is_valid);
        assert_eq!(result.file_id.as_deref(), Some("1A2b3C4d"));
        assert_eq!(result.file_type, FileKind::Video);
        assert_eq!(
            result.embed_url.as_deref(),
            Some("https://drive.google.com/file/d/1A2b3C4d/preview")
        );
    }

    #[test]
    fn slides_link_classifies_as_ppt() {
        let result = classify(Some("https://docs.google.com/presentation/d/XYZ123/edit"));
        assert_eq!(result.file_type, FileKind::Ppt);
        assert_eq!(
            result.embed_url.as_deref(),
            Some("https://docs.google.com/presentation/d/XYZ123/embed")
        );
    }

    #[test]
    fn open_id_link_keeps_original_as_embed() {
        // open?id= carries no product surface, so the kind is unknown
        // and no viewer transformation applies
        let url = "https://drive.google.com/open?id=AbC_12-3";
        let result = classify(Some(url));
        assert!(result.is_valid);
        assert_eq!(result.file_id.as_deref(), Some("AbC_12-3"));
        assert_eq!(result.file_type, FileKind::Unknown);
        assert_eq!(result.embed_url.as_deref(), Some(url));
    }

    #[test]
    fn drive_folder_link_is_rejected() {
        let result = classify(Some("https://drive.google.com/drive/folders/abc"));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![LinkIssue::UnrecognizedDriveFormat]);
        assert!(result.file_id.is_none());
        assert!(result.embed_url.is_none());
    }

    #[test]
    fn non_drive_url_passes_through_verbatim() {
        let result = classify(Some("https://youtu.be/dQw4w9WgXcQ"));
        assert!(result.is_valid);
        assert!(result.file_id.is_none());
        assert_eq!(result.file_type, FileKind::Video);
        assert_eq!(result.embed_url.as_deref(), Some("https://youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn drive_rules_preempt_suffix_rules() {
        // a Drive host short-circuits before the .pdf suffix rule runs
        let result = classify(Some("https://docs.google.com/presentation/d/ID1/export.pdf"));
        assert_eq!(result.file_type, FileKind::Ppt);
    }

    #[test]
    fn classify_is_idempotent() {
        let url = Some("https://docs.google.com/spreadsheets/d/S1/edit");
        assert_eq!(classify(url), classify(url));
    }

    #[test]
    fn to_embed_url_transforms_drive_links() {
        assert_eq!(
            to_embed_url("https://docs.google.com/document/d/D1/edit"),
            "https://docs.google.com/document/d/D1/preview"
        );
    }

    #[test]
    fn to_embed_url_falls_back_to_input() {
        assert_eq!(to_embed_url("not-a-url"), "not-a-url");
        assert_eq!(
            to_embed_url("https://example.com/talk.mp4"),
            "https://example.com/talk.mp4"
        );
    }

    #[test]
    fn access_check_warns_on_bare_d_link() {
        let report = check_public_access("https://drive.google.com/file/d/ID123/view");
        assert!(!report.is_public);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("may be private"));
    }

    #[test]
    fn access_check_accepts_sharing_marker() {
        let report =
            check_public_access("https://drive.google.com/file/d/ID123/view?usp=sharing");
        assert!(report.is_public);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn access_check_ignores_non_d_links() {
        let report = check_public_access("https://example.com/video.mp4");
        assert!(report.is_public);
    }
}
