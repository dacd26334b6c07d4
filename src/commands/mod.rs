pub mod common;
pub mod config;
pub mod digest;
pub mod frontmatter;
pub mod init;
pub mod phase;
pub mod plan_index;
pub mod roadmap;
pub mod state;
pub mod summary;
