mod assemble_path;
mod make_segment;
mod path_builder;

pub use assemble_path::AssemblePath;
pub use make_segment::MakeSegment;
pub use path_builder::PathBuilder;
