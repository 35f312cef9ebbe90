mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::run;
