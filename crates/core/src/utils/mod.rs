pub mod project;
pub mod text;

pub use project::find_project_root;
pub use text::line_prefix;
