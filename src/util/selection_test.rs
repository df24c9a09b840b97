use super::*;
use std::collections::BTreeSet;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn portfolio_suggests_portfolio_pages() {
    let mut state = WizardState::default();
    select_card(&mut state, CardCategory::Type, "portfolio");
    assert_eq!(state.config.site_type, "portfolio");
    assert_eq!(
        state.suggested_pages.iter().cloned().collect::<BTreeSet<_>>(),
        set(&["home", "projects", "about", "contact", "resume"])
    );
    assert_eq!(state.form.pages, set(&["home", "projects", "about", "contact", "resume"]));
}

#[test]
fn unknown_type_falls_back_to_minimal_pages() {
    let mut state = WizardState::default();
    select_card(&mut state, CardCategory::Type, "unknown");
    assert_eq!(
        state.suggested_pages.iter().cloned().collect::<BTreeSet<_>>(),
        set(&["home", "about", "contact"])
    );
}

#[test]
fn suggestion_table_covers_known_types() {
    assert_eq!(suggested_pages("business"), ["home", "services", "about", "team", "contact", "pricing"]);
    assert_eq!(suggested_pages("ecommerce"), ["home", "shop", "collections", "about", "contact", "faq"]);
    assert_eq!(suggested_pages("landing"), ["home", "features", "testimonials", "pricing", "contact"]);
    assert_eq!(suggested_pages("blog"), ["home", "about", "contact"]);
}

#[test]
fn home_always_leads_suggestions() {
    for option in SITE_TYPES {
        assert_eq!(suggested_pages(option.value)[0], HOME_PAGE);
    }
}

#[test]
fn card_selection_is_exclusive_within_group() {
    let mut state = WizardState::default();
    select_card(&mut state, CardCategory::Style, "modern");
    select_card(&mut state, CardCategory::Style, "minimal");
    let selected: Vec<_> = STYLES
        .iter()
        .filter(|o| is_selected(&state, CardCategory::Style, o.value))
        .map(|o| o.value)
        .collect();
    assert_eq!(selected, ["minimal"]);
}

#[test]
fn style_selection_keeps_page_suggestions() {
    let mut state = WizardState::default();
    select_card(&mut state, CardCategory::Type, "landing");
    let before = state.suggested_pages.clone();
    select_card(&mut state, CardCategory::Style, "creative");
    assert_eq!(state.suggested_pages, before);
    assert_eq!(state.config.style, "creative");
}

#[test]
fn palette_selection_has_no_suggestion_side_effect() {
    let mut state = WizardState::default();
    select_card(&mut state, CardCategory::Type, "portfolio");
    let before = state.suggested_pages.clone();
    select_palette(&mut state, "ocean");
    select_palette(&mut state, "forest");
    assert_eq!(state.config.palette, "forest");
    assert_eq!(state.suggested_pages, before);
}

#[test]
fn category_parse_round_trips_names() {
    assert_eq!(CardCategory::parse("type"), Some(CardCategory::Type));
    assert_eq!(CardCategory::parse(CardCategory::Style.as_str()), Some(CardCategory::Style));
    assert_eq!(CardCategory::parse("palette"), None);
}

#[test]
fn page_label_capitalizes_slug() {
    assert_eq!(page_label("faq"), "Faq");
    assert_eq!(page_label("home"), "Home");
    assert_eq!(page_label(""), "");
}
