pub mod classify;
pub mod drive;
pub mod issue;
pub mod media;
pub mod types;

pub use classify::{PRIVATE_LINK_WARNING, check_public_access, classify, to_embed_url};
pub use issue::LinkIssue;
pub use types::{AccessReport, Classification, FileKind};
