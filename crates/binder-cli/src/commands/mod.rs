//! One module per subcommand; each exposes `execute`.

pub mod bind;
pub mod completions;
pub mod config;
pub mod init;
