use std::sync::Once;

use imagecost_core::{
    update, AppState, Effect, Msg, ParseTicket, TokenCounts, TokenField, EXAMPLE_SNIPPET,
    PARSE_DEBOUNCE, PARSE_ERROR_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(imagecost_logging::initialize_for_tests);
}

fn edit_snippet(state: AppState, text: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::SnippetEdited(text.to_string()))
}

fn edit_field(state: AppState, field: TokenField, raw: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::TokenFieldEdited {
            field,
            raw: raw.to_string(),
        },
    )
}

fn scheduled_ticket(effects: &[Effect]) -> ParseTicket {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleParse { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("schedule effect")
}

/// Edits the snippet and lets its debounce timer fire.
fn paste_and_settle(state: AppState, text: &str) -> AppState {
    let (state, effects) = edit_snippet(state, text);
    let ticket = scheduled_ticket(&effects);
    let (state, effects) = update(state, Msg::ParseDue(ticket));
    assert!(effects.is_empty());
    state
}

#[test]
fn snippet_edit_schedules_debounced_parse() {
    init_logging();
    let (mut state, effects) = edit_snippet(AppState::new(), EXAMPLE_SNIPPET);

    assert_eq!(
        effects,
        vec![Effect::ScheduleParse {
            ticket: 1,
            delay: PARSE_DEBOUNCE,
        }]
    );
    assert_eq!(PARSE_DEBOUNCE.as_millis(), 300);
    assert_eq!(state.counts(), TokenCounts::default());
    assert!(state.view().parse_pending);
    assert!(state.consume_dirty());
}

#[test]
fn parse_due_extracts_counts_and_clears_error() {
    init_logging();
    let state = paste_and_settle(AppState::new(), "text input: 10t output: 5t");
    assert_eq!(state.view().error.as_deref(), Some(PARSE_ERROR_MESSAGE));

    let state = paste_and_settle(state, EXAMPLE_SNIPPET);
    assert_eq!(state.counts(), TokenCounts::new(39, 323, 4160));
    assert!(state.parse_error().is_none());
    assert!(!state.is_parsing_from_snippet());
    assert!(!state.has_pending_parse());
    assert_eq!(state.snippet(), EXAMPLE_SNIPPET);
}

#[test]
fn only_last_keystroke_is_parsed() {
    init_logging();
    let (state, effects) = edit_snippet(AppState::new(), "text input: 1t");
    let stale = scheduled_ticket(&effects);
    let (state, effects) = edit_snippet(state, EXAMPLE_SNIPPET);
    let current = scheduled_ticket(&effects);
    assert_ne!(stale, current);

    let (state, _) = update(state, Msg::ParseDue(stale));
    assert_eq!(state.counts(), TokenCounts::default());
    assert!(state.parse_error().is_none());

    let (state, _) = update(state, Msg::ParseDue(current));
    assert_eq!(state.counts(), TokenCounts::new(39, 323, 4160));

    // A ticket fires at most once.
    let (state, _) = edit_field(state, TokenField::Text, "");
    let (state, _) = update(state, Msg::ParseDue(current));
    assert_eq!(state.counts().text, None);
}

#[test]
fn failed_parse_keeps_previous_counts() {
    init_logging();
    let state = paste_and_settle(AppState::new(), EXAMPLE_SNIPPET);
    let state = paste_and_settle(state, "text input: 10t output: 5t");

    assert_eq!(state.counts(), TokenCounts::new(39, 323, 4160));
    let view = state.view();
    assert_eq!(view.error.as_deref(), Some(PARSE_ERROR_MESSAGE));
    assert!(!state.is_parsing_from_snippet());
}

#[test]
fn clearing_snippet_clears_fields_and_error() {
    init_logging();
    let state = paste_and_settle(AppState::new(), EXAMPLE_SNIPPET);
    let state = paste_and_settle(state, "garbage");
    assert!(state.parse_error().is_some());

    let (state, effects) = edit_snippet(state, "   \n\t ");
    assert!(effects.is_empty());
    assert_eq!(state.counts(), TokenCounts::default());
    assert!(state.parse_error().is_none());
    assert!(state.view().breakdown.is_none());
}

#[test]
fn clearing_snippet_cancels_pending_parse() {
    init_logging();
    let (state, effects) = edit_snippet(AppState::new(), EXAMPLE_SNIPPET);
    let ticket = scheduled_ticket(&effects);

    let (state, effects) = edit_snippet(state, "");
    assert_eq!(effects, vec![Effect::CancelParse]);
    assert!(!state.has_pending_parse());

    let (state, _) = update(state, Msg::ParseDue(ticket));
    assert_eq!(state.counts(), TokenCounts::default());
}

#[test]
fn manual_field_rejects_negative_and_non_numeric() {
    init_logging();
    let (mut state, _) = edit_field(AppState::new(), TokenField::Image, "323");
    assert!(state.consume_dirty());

    for raw in ["-5", "abc", "1.5", "12abc"] {
        let (next, effects) = edit_field(state, TokenField::Image, raw);
        state = next;
        assert!(effects.is_empty());
        assert_eq!(state.counts().image, Some(323));
        assert!(!state.consume_dirty());
    }

    let (state, _) = edit_field(state, TokenField::Image, "");
    assert_eq!(state.counts().image, None);
}

#[test]
fn partial_manual_entry_leaves_snippet_alone() {
    init_logging();
    let (state, effects) = edit_field(AppState::new(), TokenField::Text, "10");
    assert!(effects.is_empty());
    let (state, effects) = edit_field(state, TokenField::Output, "20");
    assert!(effects.is_empty());

    assert_eq!(state.snippet(), "");
    assert!(state.view().breakdown.is_none());
}

#[test]
fn completing_manual_fields_regenerates_snippet() {
    init_logging();
    let (state, _) = edit_field(AppState::new(), TokenField::Text, "1000000");
    let (state, _) = edit_field(state, TokenField::Image, "0");
    let (state, effects) = edit_field(state, TokenField::Output, "0");

    assert_eq!(
        state.snippet(),
        "quality: high size: 1024x1024 text input: 1000000t image input: 0t output: 0t"
    );
    assert!(state
        .snippet()
        .contains("text input: 1000000t image input: 0t output: 0t"));

    let breakdown = state.view().breakdown.expect("breakdown");
    assert_eq!(breakdown.rows[0].cost, "$5.000000");
    assert_eq!(breakdown.total_cost, "$5.000000");

    // The regenerated snippet is re-parsed like any other edit and lands on
    // the same counts.
    let ticket = scheduled_ticket(&effects);
    let (state, _) = update(state, Msg::ParseDue(ticket));
    assert_eq!(state.counts(), TokenCounts::new(1_000_000, 0, 0));
    assert!(state.parse_error().is_none());
}

#[test]
fn regenerated_output_uses_thousands_separators() {
    init_logging();
    let (state, _) = edit_field(AppState::new(), TokenField::Text, "39");
    let (state, _) = edit_field(state, TokenField::Image, "323");
    let (state, effects) = edit_field(state, TokenField::Output, "4160");

    assert_eq!(state.snippet(), EXAMPLE_SNIPPET);
    let (state, _) = update(state, Msg::ParseDue(scheduled_ticket(&effects)));
    assert_eq!(state.counts(), TokenCounts::new(39, 323, 4160));
}

#[test]
fn unchanged_regeneration_does_not_rearm_parse() {
    init_logging();
    let state = paste_and_settle(AppState::new(), EXAMPLE_SNIPPET);

    // Re-entering a value that is already set regenerates an identical snippet.
    let (state, effects) = edit_field(state, TokenField::Text, "39");
    assert!(effects.is_empty());
    assert!(!state.has_pending_parse());
    assert_eq!(state.snippet(), EXAMPLE_SNIPPET);
}

#[test]
fn parsed_snippet_is_not_rewritten() {
    init_logging();
    let messy = "notes\ntext input: 7t\n\nimage input: 8t\noutput: 1,000t trailing";
    let state = paste_and_settle(AppState::new(), messy);

    assert_eq!(state.counts(), TokenCounts::new(7, 8, 1000));
    assert_eq!(state.snippet(), messy);
}

#[test]
fn manual_edit_after_parse_rewrites_snippet() {
    init_logging();
    let state = paste_and_settle(AppState::new(), EXAMPLE_SNIPPET);
    let (state, effects) = edit_field(state, TokenField::Output, "12");

    assert_eq!(
        state.snippet(),
        "quality: high size: 1024x1024 text input: 39t image input: 323t output: 12t"
    );
    assert_eq!(effects.len(), 1);
    assert!(matches!(effects[0], Effect::ScheduleParse { .. }));
}

#[test]
fn clear_all_resets_partial_manual_entry() {
    init_logging();
    let (state, _) = edit_field(AppState::new(), TokenField::Text, "5");
    let (state, effects) = edit_snippet(state, "");
    assert!(effects.is_empty());
    assert_eq!(state.counts().text, Some(5));

    let (mut state, effects) = update(state, Msg::ClearAll);
    assert!(effects.is_empty());
    assert_eq!(state.counts(), TokenCounts::default());
    assert!(state.consume_dirty());
}

#[test]
fn clear_all_cancels_pending_parse_and_error() {
    init_logging();
    let state = paste_and_settle(AppState::new(), "garbage");
    let (state, effects) = edit_snippet(state, EXAMPLE_SNIPPET);
    let ticket = scheduled_ticket(&effects);

    let (state, effects) = update(state, Msg::ClearAll);
    assert_eq!(effects, vec![Effect::CancelParse]);
    assert_eq!(state.snippet(), "");
    assert!(state.parse_error().is_none());
    assert!(!state.has_pending_parse());

    let (state, _) = update(state, Msg::ParseDue(ticket));
    assert_eq!(state.counts(), TokenCounts::default());
}
