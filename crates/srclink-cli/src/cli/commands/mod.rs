//! CLI command handlers, one file per command.

mod clean;
mod extract;
mod feedback;
mod keywords;
mod normalize;
mod render;

pub use clean::run_clean;
pub use extract::run_extract;
pub use feedback::run_feedback;
pub use keywords::run_keywords;
pub use normalize::run_normalize;
pub use render::run_render;
