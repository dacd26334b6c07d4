//! Integration tests over on-disk `.planning/` trees

mod helpers;
mod init;
mod phases;
mod plan_index;
mod roadmap;
mod state;
mod yaml_oracle;
