use std::time::Duration;

use imagecost_logging::{calc_debug, calc_info, calc_trace};

use crate::snippet::{parse_snippet, render_snippet};
use crate::tokens::{parse_field_input, FieldInput, TokenCounts, TokenField};
use crate::{AppState, Effect, Msg, ParseTicket};

/// Quiet period after the last snippet edit before it is parsed.
pub const PARSE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SnippetEdited(text) => snippet_changed(&mut state, text),
        Msg::TokenFieldEdited { field, raw } => field_edited(&mut state, field, &raw),
        Msg::ParseDue(ticket) => {
            parse_due(&mut state, ticket);
            Vec::new()
        }
        Msg::ClearAll => clear_all(&mut state),
    };

    (state, effects)
}

fn snippet_changed(state: &mut AppState, text: String) -> Vec<Effect> {
    if text == state.snippet() {
        return Vec::new();
    }
    state.set_snippet(text);

    if state.snippet().trim().is_empty() {
        // Values written by the reverse path survive a blank snippet mid-parse.
        if !state.is_parsing_from_snippet() {
            state.clear_counts();
        }
        state.clear_error();
        return if state.cancel_pending() {
            vec![Effect::CancelParse]
        } else {
            Vec::new()
        };
    }

    let ticket = state.arm_parse();
    calc_trace!("snippet changed, parse ticket {} armed", ticket);
    vec![Effect::ScheduleParse {
        ticket,
        delay: PARSE_DEBOUNCE,
    }]
}

/// Resets snippet, counts and error. Unlike a blank snippet edit this also
/// clears fields entered while the snippet was already empty.
fn clear_all(state: &mut AppState) -> Vec<Effect> {
    if !state.snippet().is_empty() {
        state.set_snippet(String::new());
    }
    if state.counts() != TokenCounts::default() {
        state.clear_counts();
    }
    state.clear_error();
    if state.cancel_pending() {
        vec![Effect::CancelParse]
    } else {
        Vec::new()
    }
}

fn parse_due(state: &mut AppState, ticket: ParseTicket) {
    if !state.take_pending(ticket) {
        calc_trace!("ignoring stale parse ticket {}", ticket);
        return;
    }

    let mut scope = state.begin_parse();
    match parse_snippet(scope.snippet()) {
        Ok(parsed) => {
            calc_debug!(
                "snippet parsed: text={} image={} output={}",
                parsed.text,
                parsed.image,
                parsed.output
            );
            scope.apply_parsed(parsed);
            scope.clear_error();
            let effects = counts_changed(&mut scope);
            debug_assert!(effects.is_empty());
        }
        Err(err) => {
            calc_info!("snippet rejected: {}", err);
            scope.set_error(err);
        }
    }
}

fn field_edited(state: &mut AppState, field: TokenField, raw: &str) -> Vec<Effect> {
    match parse_field_input(raw) {
        FieldInput::Rejected => {
            calc_debug!("ignoring {} field input {:?}", field, raw);
            Vec::new()
        }
        FieldInput::Unset => {
            state.set_count(field, None);
            counts_changed(state)
        }
        FieldInput::Value(value) => {
            state.set_count(field, Some(value));
            counts_changed(state)
        }
    }
}

/// Regenerates the snippet once all three counts are known, unless the
/// counts were just written by a snippet parse.
fn counts_changed(state: &mut AppState) -> Vec<Effect> {
    if state.is_parsing_from_snippet() {
        return Vec::new();
    }
    let Some((text, image, output)) = state.counts().complete() else {
        return Vec::new();
    };
    snippet_changed(state, render_snippet(text, image, output))
}
