//! Showcase page listing the configured stat cards

use dioxus::prelude::*;
use statcard_ui::{inject_global_css, StatCard};

use crate::config::CardConfig;

#[derive(Props, Clone, PartialEq)]
pub struct ShowcaseProps {
    pub title: String,
    pub cards: Vec<CardConfig>,
}

/// Page heading followed by a grid of cards
#[component]
pub fn ShowcasePage(props: ShowcaseProps) -> Element {
    rsx! {
        // Inject global CSS
        {inject_global_css()}

        main { class: "showcase",
            h1 { "{props.title}" }

            div { class: "stat-grid",
                for card in props.cards.iter() {
                    StatCard {
                        value: card.value.clone(),
                        label: card.label.clone(),
                        icon: card.icon.as_ref().map(|glyph| rsx! { span { "{glyph}" } }),
                        class: card.class.clone(),
                    }
                }
            }
        }
    }
}
