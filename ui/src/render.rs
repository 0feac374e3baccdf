//! Server-side rendering helpers

use dioxus::prelude::*;

use crate::components::{StatCard, StatCardProps};

/// Render a single stat card to an HTML fragment
pub fn render_card(props: StatCardProps) -> String {
    let mut vdom = VirtualDom::new_with_props(StatCard, props);
    vdom.rebuild_in_place();
    dioxus_ssr::render(&vdom)
}
