//! Reusable UI components

mod stat_card;

pub use stat_card::{StatCard, StatCardProps, CARD_CLASS, ICON_CLASS, LABEL_CLASS, VALUE_CLASS};
