//! Google tag (gtag.js) snippet.

use pagecraft_core::{IntegrationConfig, Markup, validate::validate_tag_id};
use tracing::warn;

/// Emit the Google tag loader and bootstrap scripts.
///
/// Nothing is emitted when no tag is configured. Tags are validated when the
/// site is constructed; an id that still fails validation here is skipped.
pub fn render_google_tag(markup: &mut Markup, integrations: &IntegrationConfig) {
    let Some(tag) = integrations.google_tag() else {
        return;
    };

    if validate_tag_id(tag).is_err() {
        warn!(tag, "skipping invalid Google tag id");
        return;
    }

    let src = format!("https://www.googletagmanager.com/gtag/js?id={tag}");
    markup.element("script", &[("async", ""), ("src", src.as_str())], |_| {});
    markup.element("script", &[], |m| {
        m.raw(&format!(
            "window.dataLayer = window.dataLayer || [];\
             function gtag(){{dataLayer.push(arguments);}}\
             gtag('js', new Date());\
             gtag('config', '{tag}');"
        ));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tag: Option<&str>) -> String {
        let integrations = IntegrationConfig {
            google_tag_id: tag.map(str::to_string),
        };
        let mut markup = Markup::new();
        render_google_tag(&mut markup, &integrations);
        markup.into_string()
    }

    #[test]
    fn test_tag_snippet() {
        let html = render(Some("G-ABC1234XYZ"));

        assert!(html.contains(
            r#"<script async="" src="https://www.googletagmanager.com/gtag/js?id=G-ABC1234XYZ"></script>"#
        ));
        assert!(html.contains("gtag('config', 'G-ABC1234XYZ');"));
        assert_eq!(html.matches("<script").count(), 2);
    }

    #[test]
    fn test_blank_or_absent_tag() {
        assert!(render(None).is_empty());
        assert!(render(Some("")).is_empty());
        assert!(render(Some("  ")).is_empty());
    }

    #[test]
    fn test_invalid_tag_skipped() {
        assert!(render(Some("G-1'); alert('x")).is_empty());
    }
}
