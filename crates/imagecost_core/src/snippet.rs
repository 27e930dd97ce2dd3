//! Usage snippets as copied from the OpenAI Playground.
//!
//! A snippet carries three labelled figures somewhere in free text:
//! `text input: 39t`, `image input: 323t` and `output: 4,160t`. Labels are
//! literal and case-sensitive; everything around them is ignored.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::pricing::format_tokens;
use crate::tokens::TokenField;

/// Shown as the text area placeholder and by the `example` command.
pub const EXAMPLE_SNIPPET: &str =
    "quality: high size: 1024x1024 text input: 39t image input: 323t output: 4,160t";

/// Message surfaced to the user whenever a snippet cannot be parsed.
pub const PARSE_ERROR_MESSAGE: &str =
    "Failed to parse the snippet. Please ensure it follows the expected format.";

static TEXT_INPUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"text input: ([0-9]+)t").expect("Invalid text input regex"));
static IMAGE_INPUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"image input: ([0-9]+)t").expect("Invalid image input regex"));
static OUTPUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"output: ([0-9,]+)t").expect("Invalid output regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnippetParseError {
    #[error("could not parse all required token information from the snippet ({0} missing)")]
    MissingField(TokenField),
    #[error("could not parse all required token information from the snippet ({field} figure {raw:?} is not a token count)")]
    InvalidNumber { field: TokenField, raw: String },
}

/// The three figures extracted from a snippet. Always complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCounts {
    pub text: u64,
    pub image: u64,
    pub output: u64,
}

/// Extracts all three figures or fails as a unit.
pub fn parse_snippet(snippet: &str) -> Result<ParsedCounts, SnippetParseError> {
    let text = capture(&TEXT_INPUT_PATTERN, snippet, TokenField::Text)?;
    let image = capture(&IMAGE_INPUT_PATTERN, snippet, TokenField::Image)?;
    let output = capture(&OUTPUT_PATTERN, snippet, TokenField::Output)?;

    Ok(ParsedCounts {
        text: to_count(TokenField::Text, text)?,
        image: to_count(TokenField::Image, image)?,
        output: to_count(TokenField::Output, &output.replace(',', ""))?,
    })
}

/// Canonical snippet for a complete set of counts. Only the output figure
/// is grouped by thousands, matching what the Playground prints.
pub fn render_snippet(text: u64, image: u64, output: u64) -> String {
    format!(
        "quality: high size: 1024x1024 text input: {text}t image input: {image}t output: {}t",
        format_tokens(output)
    )
}

fn capture<'a>(
    pattern: &Regex,
    snippet: &'a str,
    field: TokenField,
) -> Result<&'a str, SnippetParseError> {
    pattern
        .captures(snippet)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(SnippetParseError::MissingField(field))
}

fn to_count(field: TokenField, digits: &str) -> Result<u64, SnippetParseError> {
    digits
        .parse::<u64>()
        .map_err(|_| SnippetParseError::InvalidNumber {
            field,
            raw: digits.to_string(),
        })
}
