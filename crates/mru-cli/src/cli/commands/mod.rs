//! CLI command handlers. Each command is in its own file.

mod armor;
mod digest;
mod install;
mod path;
mod url;
mod verify;

pub use armor::run_armor;
pub use digest::run_digest;
pub use install::run_install;
pub use path::run_path;
pub use url::run_url;
pub use verify::run_verify;
