pub mod commands;
pub mod completions;
pub mod fs;
pub mod init;
pub mod parser;
pub mod phase;
pub mod plan;
pub mod roadmap;
pub mod state;
pub mod summary;
pub mod validation;
