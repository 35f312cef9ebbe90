#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod classifier;
pub mod cli;
pub mod scan;

pub use classifier::{
    AccessReport, Classification, FileKind, LinkIssue, check_public_access, classify, to_embed_url,
};
pub use scan::{ScannedLink, scan_text};
