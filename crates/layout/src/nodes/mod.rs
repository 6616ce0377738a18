pub mod wrap_panel;

pub use wrap_panel::{Arrangement, WrapPanel};
