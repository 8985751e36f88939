pub mod completions;
pub mod make;
