pub mod args;
pub mod config;
pub mod copy;
pub mod env_version;
pub mod paths;
pub mod rewrite;
pub mod scaffold;
pub mod slug;

mod log;

pub use scaffold::{create_project, Request, Summary};
