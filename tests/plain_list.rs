//! Plain list scenarios driven through the public API with the built-in
//! language handler

use autosuggest::languages::LanguageHandler;
use autosuggest::{Autosuggest, InputProps, Visibility};

fn autosuggest_with(text: &str) -> Autosuggest<LanguageHandler> {
    let mut autosuggest = Autosuggest::new(LanguageHandler::default());
    autosuggest.focus();
    autosuggest.input_changed(text);
    autosuggest
}

fn shown(autosuggest: &Autosuggest<LanguageHandler>) -> Vec<&str> {
    autosuggest
        .suggestions()
        .iter()
        .map(|l| l.name.as_str())
        .collect()
}

fn focused(autosuggest: &Autosuggest<LanguageHandler>) -> Option<&str> {
    autosuggest.focused_suggestion().map(|l| l.name.as_str())
}

#[test]
fn test_down_cycle_through_p() {
    let mut autosuggest = autosuggest_with("p");
    let expected = [
        Some("Perl"),
        Some("PHP"),
        Some("Python"),
        None,
        Some("Perl"),
    ];

    for want in expected {
        autosuggest.key_down();
        assert_eq!(focused(&autosuggest), want);
    }
}

#[test]
fn test_up_cycle_through_p() {
    let mut autosuggest = autosuggest_with("p");
    let expected = [
        Some("Python"),
        Some("PHP"),
        Some("Perl"),
        None,
        Some("Python"),
    ];

    for want in expected {
        autosuggest.key_up();
        assert_eq!(focused(&autosuggest), want);
    }
}

#[test]
fn test_typing_appends_change_event() {
    let mut autosuggest = autosuggest_with("c");
    autosuggest.input_changed("c+");

    assert_eq!(shown(&autosuggest), vec!["C++"]);
    assert_eq!(
        autosuggest.handler().events().last(),
        Some("onChange \"c+\" (type)")
    );
}

#[test]
fn test_click_selects_and_hides() {
    let mut autosuggest = autosuggest_with("j");
    autosuggest.click(1);

    assert_eq!(autosuggest.visibility(), Visibility::Hidden);
    assert_eq!(autosuggest.input_text(), "Javascript");
    assert_eq!(
        autosuggest.handler().last_selected().map(|l| l.year),
        Some(1995)
    );
}

#[test]
fn test_escape_sequence() {
    let mut autosuggest = autosuggest_with("p");

    autosuggest.key_down();
    autosuggest.escape();
    assert_eq!(autosuggest.input_text(), "p");
    assert!(!autosuggest.is_shown());

    autosuggest.escape();
    assert_eq!(autosuggest.input_text(), "");
}

#[test]
fn test_rendered_lines_highlight_typed_prefix() {
    let mut autosuggest = autosuggest_with("r");
    autosuggest.key_down();

    let rendered = autosuggest.render();
    let spans: Vec<&str> = rendered[0]
        .content
        .spans
        .iter()
        .map(|s| &*s.content)
        .collect();

    assert_eq!(spans, vec!["R", "uby"]);
    assert!(rendered[0].focused);
}

#[test]
fn test_aria_attributes_track_focus() {
    let mut autosuggest = autosuggest_with("J").with_container_id("react-whatever-1");
    autosuggest.key_down();

    let attrs = autosuggest.input_attributes(&InputProps::default());

    assert!(attrs.aria_expanded);
    assert_eq!(attrs.aria_owns, "react-whatever-1");
    assert_eq!(
        attrs.aria_activedescendant.as_deref(),
        Some("react-whatever-1--item-0")
    );
}
