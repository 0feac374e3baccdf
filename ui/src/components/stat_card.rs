//! Stat card component for displaying a single labeled statistic

use dioxus::prelude::*;
use statcard_core::{merge_classes, DisplayValue};

/// Base class carried by every card container
pub const CARD_CLASS: &str = "stat-card";
/// Icon slot, tinted with the accent color
pub const ICON_CLASS: &str = "stat-card-icon";
/// Large, bold value in the primary text color
pub const VALUE_CLASS: &str = "stat-card-value";
/// Small, uppercase, letter-spaced label in the muted text color
pub const LABEL_CLASS: &str = "stat-card-label";

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    /// Pre-formatted value, shown verbatim
    #[props(into)]
    pub value: DisplayValue,
    /// Label text; uppercasing is done by the stylesheet
    #[props(into)]
    pub label: String,
    /// Optional icon placed above the value
    pub icon: Option<Element>,
    /// Extra classes merged with the base card class
    pub class: Option<String>,
}

/// A value with a label beneath it and an optional icon above.
///
/// Missing optional props leave their region out of the output entirely.
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let class = merge_classes([CARD_CLASS, props.class.as_deref().unwrap_or_default()]);

    rsx! {
        div { class: "{class}",
            if let Some(icon) = &props.icon {
                div { class: ICON_CLASS, {icon.clone()} }
            }

            div { class: VALUE_CLASS, "{props.value}" }

            div { class: LABEL_CLASS, "{props.label}" }
        }
    }
}
