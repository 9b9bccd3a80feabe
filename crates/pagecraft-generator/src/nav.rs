//! Navigation bar rendering.

use pagecraft_core::{Markup, NavSettings, Page, config::join_classes};

const INSTAGRAM_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><rect x="2" y="2" width="20" height="20" rx="5"/><circle cx="12" cy="12" r="4"/><circle cx="17.5" cy="6.5" r="1"/></svg>"#;

const EMAIL_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 6-10 7L2 6"/></svg>"#;

/// Render the navigation bar for `selected` into `markup`.
///
/// Items follow the order of `pages`. The item whose output file matches
/// `selected` gets the selected color. Horizontal spacing uses padding so the
/// full-width bar never overflows narrow viewports.
pub fn render_nav(
    markup: &mut Markup,
    selected: &dyn Page,
    pages: &[Box<dyn Page>],
    nav: &NavSettings,
) {
    let nav_classes = join_classes(&[
        "w-full",
        nav.nav_background_color.as_str(),
        nav.font_family.as_str(),
        if nav.sticky { "sticky top-0 z-50" } else { "" },
        if nav.blur { "backdrop-blur-md" } else { "" },
    ]);
    let step = u16::from(nav.horizontal_margin);
    let inner_classes = format!(
        "flex items-center justify-between gap-4 py-3 px-{step} md:px-{}",
        step * 2
    );

    markup.element("nav", &[("class", nav_classes.as_str())], |m| {
        m.element("div", &[("class", inner_classes.as_str())], |m| {
            render_logo(m, nav);

            m.element("div", &[("class", "flex flex-wrap items-center gap-4")], |m| {
                for page in pages {
                    let color = if page.output_filename() == selected.output_filename() {
                        nav.nav_selected_color.as_str()
                    } else {
                        nav.nav_default_color.as_str()
                    };
                    let classes = join_classes(&["text-sm uppercase tracking-wide", color]);
                    let href = format!("./{}", page.output_filename());

                    m.element("span", &[("class", classes.as_str())], |m| {
                        m.element("a", &[("href", href.as_str())], |m| {
                            m.text(page.title());
                        });
                    });
                }

                render_contact_links(m, nav);
            });
        });
    });
}

fn render_logo(m: &mut Markup, nav: &NavSettings) {
    let width = nav.logo.width.to_string();
    let height = nav.logo.height.to_string();

    m.element("a", &[("href", "./index.html"), ("class", "shrink-0")], |m| {
        m.void(
            "img",
            &[
                ("src", nav.logo.url.as_str()),
                ("alt", nav.logo.alt.as_str()),
                ("width", width.as_str()),
                ("height", height.as_str()),
            ],
        );
    });
}

fn render_contact_links(m: &mut Markup, nav: &NavSettings) {
    if let Some(handle) = &nav.instagram {
        let href = format!("https://www.instagram.com/{handle}");
        m.element(
            "a",
            &[
                ("href", href.as_str()),
                ("class", nav.nav_default_color.as_str()),
                ("aria-label", "Instagram"),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
            ],
            |m| {
                m.raw(INSTAGRAM_ICON);
            },
        );
    }

    if let Some(email) = &nav.email {
        let href = format!("mailto:{email}");
        m.element(
            "a",
            &[
                ("href", href.as_str()),
                ("class", nav.nav_default_color.as_str()),
                ("aria-label", "Email"),
            ],
            |m| {
                m.raw(EMAIL_ICON);
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use pagecraft_core::{ContentPage, Logo};

    use super::*;

    fn pages() -> Vec<Box<dyn Page>> {
        vec![
            Box::new(ContentPage::new("Home", "index.html", |_, _| Ok(()))),
            Box::new(ContentPage::new("About", "about.html", |_, _| Ok(()))),
        ]
    }

    fn settings() -> NavSettings {
        NavSettings {
            nav_selected_color: "text-red-600".to_string(),
            nav_default_color: "text-gray-400".to_string(),
            logo: Logo::new("https://example.com/logo.png", 120, 48, "Brand"),
            ..NavSettings::default()
        }
    }

    fn render(selected: usize, nav: &NavSettings) -> String {
        let pages = pages();
        let mut markup = Markup::new();
        render_nav(&mut markup, pages[selected].as_ref(), &pages, nav);
        markup.into_string()
    }

    #[test]
    fn test_selected_item_highlighted() {
        let html = render(1, &settings());

        assert!(html.contains(
            r#"<span class="text-sm uppercase tracking-wide text-gray-400"><a href="./index.html">Home</a></span>"#
        ));
        assert!(html.contains(
            r#"<span class="text-sm uppercase tracking-wide text-red-600"><a href="./about.html">About</a></span>"#
        ));
    }

    #[test]
    fn test_items_are_spans_not_headings() {
        let html = render(0, &settings());
        assert!(html.contains("<span"));
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn test_title_text_unchanged() {
        let html = render(0, &settings());
        assert!(html.contains(">About</a>"));
        assert!(!html.contains("ABOUT"));
    }

    #[test]
    fn test_logo() {
        let html = render(0, &settings());
        assert!(html.contains(
            r#"<img src="https://example.com/logo.png" alt="Brand" width="120" height="48">"#
        ));
    }

    #[test]
    fn test_sticky_and_blur_modifiers() {
        let mut nav = settings();
        nav.sticky = true;
        nav.blur = true;
        let html = render(0, &nav);
        assert!(html.contains("sticky top-0"));
        assert!(html.contains("backdrop-blur-md"));

        nav.sticky = false;
        nav.blur = false;
        let html = render(0, &nav);
        assert!(!html.contains("sticky"));
        assert!(!html.contains("backdrop-blur"));
    }

    #[test]
    fn test_padding_not_margin() {
        let mut nav = settings();
        nav.horizontal_margin = 6;
        let html = render(0, &nav);

        assert!(html.contains("px-6 md:px-12"));
        assert!(!html.contains("mx-"));
        assert!(!html.contains("ml-"));
        assert!(!html.contains("mr-"));
    }

    #[test]
    fn test_contact_links() {
        let html = render(0, &settings());
        assert!(!html.contains("instagram.com"));
        assert!(!html.contains("mailto:"));

        let mut nav = settings();
        nav.instagram = Some("brand.co".to_string());
        nav.email = Some("hello@example.com".to_string());
        let html = render(0, &nav);
        assert!(html.contains(r#"href="https://www.instagram.com/brand.co""#));
        assert!(html.contains(r#"href="mailto:hello@example.com""#));
    }
}
