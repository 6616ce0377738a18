pub mod line_packing;
pub mod line_placement;

pub use line_packing::{Line, LinePacker, is_unbroken, pack_lines, stacked_size};
pub use line_placement::{place_line, place_lines, place_single_line};
