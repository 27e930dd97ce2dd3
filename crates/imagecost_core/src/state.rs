use std::ops::{Deref, DerefMut};

use crate::pricing::{calculate, format_cost, format_tokens, price_hint, UNIT_PRICES};
use crate::snippet::{ParsedCounts, SnippetParseError, PARSE_ERROR_MESSAGE};
use crate::tokens::{TokenCounts, TokenField};
use crate::view_model::{AppViewModel, BreakdownRowView, BreakdownView, FieldView};

/// Identifies one armed debounce timer. Only the most recently armed ticket
/// is honoured when its timer fires.
pub type ParseTicket = u64;

/// Single owner of everything the calculator shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    snippet: String,
    counts: TokenCounts,
    parse_error: Option<SnippetParseError>,
    parsing_from_snippet: bool,
    pending_parse: Option<ParseTicket>,
    last_ticket: ParseTicket,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn counts(&self) -> TokenCounts {
        self.counts
    }

    pub fn parse_error(&self) -> Option<&SnippetParseError> {
        self.parse_error.as_ref()
    }

    pub fn is_parsing_from_snippet(&self) -> bool {
        self.parsing_from_snippet
    }

    pub fn has_pending_parse(&self) -> bool {
        self.pending_parse.is_some()
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let fields = TokenField::ALL
            .iter()
            .map(|&field| FieldView {
                field,
                value: self
                    .counts
                    .get(field)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
                price_hint: price_hint(unit_price(field)),
            })
            .collect();

        let breakdown = calculate(&self.counts).map(|b| BreakdownView {
            rows: vec![
                BreakdownRowView {
                    label: TokenField::Text.label(),
                    tokens: format_tokens(b.text_tokens),
                    cost: format_cost(b.text_cost),
                },
                BreakdownRowView {
                    label: TokenField::Image.label(),
                    tokens: format_tokens(b.image_tokens),
                    cost: format_cost(b.image_cost),
                },
                BreakdownRowView {
                    label: TokenField::Output.label(),
                    tokens: format_tokens(b.output_tokens),
                    cost: format_cost(b.output_cost),
                },
            ],
            total_cost: format_cost(b.total_cost),
        });

        AppViewModel {
            snippet: self.snippet.clone(),
            fields,
            error: self
                .parse_error
                .as_ref()
                .map(|_| PARSE_ERROR_MESSAGE.to_string()),
            breakdown,
            parse_pending: self.pending_parse.is_some(),
        }
    }

    pub(crate) fn set_snippet(&mut self, snippet: String) {
        self.snippet = snippet;
        self.mark_dirty();
    }

    pub(crate) fn set_count(&mut self, field: TokenField, value: Option<u64>) {
        self.counts.set(field, value);
        self.mark_dirty();
    }

    pub(crate) fn apply_parsed(&mut self, parsed: ParsedCounts) {
        self.counts = TokenCounts::new(parsed.text, parsed.image, parsed.output);
        self.mark_dirty();
    }

    pub(crate) fn clear_counts(&mut self) {
        self.counts.clear();
        self.mark_dirty();
    }

    pub(crate) fn set_error(&mut self, error: SnippetParseError) {
        self.parse_error = Some(error);
        self.mark_dirty();
    }

    pub(crate) fn clear_error(&mut self) {
        if self.parse_error.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Arms a new ticket, superseding any pending one.
    pub(crate) fn arm_parse(&mut self) -> ParseTicket {
        self.last_ticket += 1;
        self.pending_parse = Some(self.last_ticket);
        self.last_ticket
    }

    /// Drops the pending ticket. Returns whether one was pending.
    pub(crate) fn cancel_pending(&mut self) -> bool {
        self.pending_parse.take().is_some()
    }

    /// Claims the pending ticket if `ticket` is the current one.
    pub(crate) fn take_pending(&mut self, ticket: ParseTicket) -> bool {
        if self.pending_parse == Some(ticket) {
            self.pending_parse = None;
            true
        } else {
            false
        }
    }

    /// Enters the parsing-from-snippet mode for the lifetime of the returned scope.
    pub(crate) fn begin_parse(&mut self) -> ParsingScope<'_> {
        self.parsing_from_snippet = true;
        ParsingScope { state: self }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Holds the parsing-from-snippet flag; the flag is released on drop,
/// whichever way the parse went.
pub(crate) struct ParsingScope<'a> {
    state: &'a mut AppState,
}

impl Deref for ParsingScope<'_> {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        self.state
    }
}

impl DerefMut for ParsingScope<'_> {
    fn deref_mut(&mut self) -> &mut AppState {
        self.state
    }
}

impl Drop for ParsingScope<'_> {
    fn drop(&mut self) {
        self.state.parsing_from_snippet = false;
    }
}

fn unit_price(field: TokenField) -> f64 {
    match field {
        TokenField::Text => UNIT_PRICES.text_input,
        TokenField::Image => UNIT_PRICES.image_input,
        TokenField::Output => UNIT_PRICES.output,
    }
}
