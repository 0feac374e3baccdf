//! Dioxus showcase page, rendered on the server

pub mod fullstack;
pub mod showcase;

pub use fullstack::render_document;
pub use showcase::{ShowcasePage, ShowcaseProps};
