//! Dioxus UI for StatCard
//!
//! Presentational components, the theme stylesheet they rely on, and
//! helpers to render them to HTML on the server.

pub mod components;
pub mod render;
pub mod theme;

pub use components::{
    StatCard, StatCardProps, CARD_CLASS, ICON_CLASS, LABEL_CLASS, VALUE_CLASS,
};
pub use render::render_card;
pub use theme::{inject_global_css, ThemeMode, GLOBAL_CSS};

// Display values are part of the component's public props
pub use statcard_core::DisplayValue;
