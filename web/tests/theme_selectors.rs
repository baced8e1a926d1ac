//! The stylesheet must style the class hooks the shared components render.

const MAIN_CSS: &str = include_str!("../assets/main.css");
const NAVBAR_CSS: &str = include_str!("../../ui/assets/styling/navbar.css");

fn assert_selectors(css: &str, selectors: &[&str]) {
    let missing: Vec<&str> = selectors
        .iter()
        .copied()
        .filter(|selector| !css.contains(selector))
        .collect();
    assert!(missing.is_empty(), "unstyled selectors: {missing:?}");
}

#[test]
fn main_stylesheet_covers_site_sections() {
    assert_selectors(
        MAIN_CSS,
        &[
            ".hero",
            ".events__grid",
            ".event-card",
            ".timeline__year--active",
            ".gallery__slide--active",
            ".lightbox",
            ".contact-form__input--invalid",
            ".faq__answer",
            ".loading-overlay",
            ".footer",
        ],
    );
}

#[test]
fn navbar_stylesheet_covers_language_switcher() {
    assert_selectors(
        NAVBAR_CSS,
        &[".navbar", ".navbar__links--open", ".lang-btn", ".lang-btn--active"],
    );
}

#[test]
fn navbar_height_matches_scroll_offset() {
    // Section scrolling subtracts an 80px fixed header.
    assert!(NAVBAR_CSS.contains("height: 80px"));
    assert!(MAIN_CSS.contains("scroll-padding-top: 80px"));
}
