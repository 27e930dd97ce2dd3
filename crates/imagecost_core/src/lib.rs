//! Imagecost core: pure pricing, snippet parsing and the state machine that
//! keeps the snippet and the manual token fields in sync.
mod effect;
mod msg;
mod pricing;
mod snippet;
mod state;
mod tokens;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use pricing::{
    calculate, format_cost, format_tokens, price_hint, CostBreakdown, UnitPrices,
    TOKENS_PER_MILLION, UNIT_PRICES,
};
pub use snippet::{
    parse_snippet, render_snippet, ParsedCounts, SnippetParseError, EXAMPLE_SNIPPET,
    PARSE_ERROR_MESSAGE,
};
pub use state::{AppState, ParseTicket};
pub use tokens::{parse_field_input, FieldInput, TokenCounts, TokenField};
pub use update::{update, PARSE_DEBOUNCE};
pub use view_model::{AppViewModel, BreakdownRowView, BreakdownView, FieldView};
