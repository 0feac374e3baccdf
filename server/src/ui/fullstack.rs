//! Server-side rendering of the showcase page

use dioxus::prelude::*;
use dioxus_ssr::Renderer;

use super::{ShowcasePage, ShowcaseProps};
use crate::config::Config;

#[derive(Props, Clone, PartialEq)]
struct DocumentTitleProps {
    text: String,
}

/// `<title>` element for the document head
#[component]
fn DocumentTitle(props: DocumentTitleProps) -> Element {
    rsx! {
        title { "{props.text}" }
    }
}

/// Render the showcase page as a complete HTML document
pub fn render_document(config: &Config) -> String {
    let mut renderer = Renderer::new();

    let mut head = VirtualDom::new_with_props(
        DocumentTitle,
        DocumentTitleProps {
            text: config.title.clone(),
        },
    );
    head.rebuild_in_place();
    let html_title = renderer.render(&head);

    let props = ShowcaseProps {
        title: config.title.clone(),
        cards: config.cards.clone(),
    };

    let mut vdom = VirtualDom::new_with_props(ShowcasePage, props);
    vdom.rebuild_in_place();
    let html_body = renderer.render(&vdom);

    tracing::debug!(cards = config.cards.len(), bytes = html_body.len(), "Rendered showcase");

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {html_title}
</head>
<body>
    <div id="main">
        {html_body}
    </div>
</body>
</html>"#,
        theme = config.theme.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample_cards;
    use statcard_ui::ThemeMode;

    fn config() -> Config {
        Config {
            title: "League <2026>".to_string(),
            theme: ThemeMode::Light,
            cards: sample_cards(),
        }
    }

    #[test]
    fn test_document_shell() {
        let html = render_document(&config());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
        assert!(html.contains("<title>League &#60;2026&#62;</title>"));
        assert!(html.contains(".stat-card-label"));
    }

    #[test]
    fn test_title_and_heading_share_escaping() {
        let html = render_document(&config());

        assert!(!html.contains("<2026>"));
        assert!(html.contains("<h1>League &#60;2026&#62;</h1>"));
        assert_eq!(html.matches("League &#60;2026&#62;").count(), 2);
    }

    #[test]
    fn test_document_renders_every_card() {
        let html = render_document(&config());

        assert_eq!(html.matches(r#"class="stat-card-value""#).count(), 2);
        assert!(html.contains(r#"<div class="stat-card">"#));
        assert!(html.contains(r#"<div class="stat-card border-gold">"#));
        assert!(html.contains(">42<"));
        assert!(html.contains(">1,204<"));
        assert!(html.contains(">Games Played<"));

        // Only the trophy card has an icon slot
        assert_eq!(html.matches(r#"class="stat-card-icon""#).count(), 1);
        assert!(html.find("🏆").unwrap() < html.find(">1,204<").unwrap());
    }

    #[test]
    fn test_empty_showcase() {
        let config = Config {
            title: "Nothing yet".to_string(),
            theme: ThemeMode::Dark,
            cards: Vec::new(),
        };
        let html = render_document(&config);

        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains("Nothing yet"));
        assert!(!html.contains(r#"class="stat-card""#));
    }
}
