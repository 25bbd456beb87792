//! Text measurement helpers.
//!
//! Layout works in terminal columns, not characters: a CJK ideograph takes
//! two columns and a combining accent takes none. Everything that pads,
//! trims or measures a line goes through [`width`].

pub mod width;

pub use width::{char_width, pad_to_width, split_lines, text_width};
