mod text_style;

pub use text_style::TextStyle;
