//! CLI command handlers, one per file.

mod args;
mod explain;
mod get;
mod presets;

pub use args::run_args;
pub use explain::run_explain;
pub use get::run_get;
pub use presets::run_presets;
