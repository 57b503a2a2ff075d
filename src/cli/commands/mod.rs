//! One module per subcommand, each exposing an `execute` function.

pub mod completions;
pub mod delete;
pub mod describe;
pub mod get;
pub mod keys;
pub mod list;
pub mod path;
pub mod set;
pub mod version;
