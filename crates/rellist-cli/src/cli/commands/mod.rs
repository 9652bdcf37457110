//! CLI command handlers. Each command is in its own file.

mod completions;
mod config_path;
mod input;
mod list;
mod preset;
mod presets;

pub use completions::run_completions;
pub use config_path::run_config_path;
pub use list::run_list;
pub use preset::run_preset;
pub use presets::run_presets;
