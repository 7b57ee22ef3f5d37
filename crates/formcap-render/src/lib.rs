mod document;
mod escape;
mod field;
mod theme;

pub use document::{render_document, render_form};
pub use escape::escape_html;
pub use field::render_field;
pub use theme::{
    DEFAULT_ACCENT_COLOR, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, theme_css,
};
