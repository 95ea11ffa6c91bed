pub mod color;
pub mod number;
pub mod value;

pub use color::Color;
pub use number::{format_number, parse_number};
pub use value::{ThemeMap, ThemeValue};
