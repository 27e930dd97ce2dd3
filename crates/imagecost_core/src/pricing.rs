use crate::tokens::TokenCounts;

pub const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Fixed USD prices per one million tokens for image generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitPrices {
    pub text_input: f64,
    pub image_input: f64,
    pub output: f64,
}

pub const UNIT_PRICES: UnitPrices = UnitPrices {
    text_input: 5.0,
    image_input: 10.0,
    output: 40.0,
};

/// Itemized cost for one set of token counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub text_tokens: u64,
    pub image_tokens: u64,
    pub output_tokens: u64,
    pub text_cost: f64,
    pub image_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    pub fn from_counts(text_tokens: u64, image_tokens: u64, output_tokens: u64) -> Self {
        let text_cost = cost_for(text_tokens, UNIT_PRICES.text_input);
        let image_cost = cost_for(image_tokens, UNIT_PRICES.image_input);
        let output_cost = cost_for(output_tokens, UNIT_PRICES.output);
        Self {
            text_tokens,
            image_tokens,
            output_tokens,
            text_cost,
            image_cost,
            output_cost,
            total_cost: text_cost + image_cost + output_cost,
        }
    }
}

/// Prices a set of counts. Returns `None` while any field is still unset.
pub fn calculate(counts: &TokenCounts) -> Option<CostBreakdown> {
    let (text, image, output) = counts.complete()?;
    Some(CostBreakdown::from_counts(text, image, output))
}

fn cost_for(tokens: u64, price_per_million: f64) -> f64 {
    (tokens as f64 / TOKENS_PER_MILLION) * price_per_million
}

/// `$` followed by six fixed decimals, e.g. `$0.003230`.
pub fn format_cost(cost: f64) -> String {
    format!("${cost:.6}")
}

/// Groups digits in threes with commas, e.g. `4160` -> `4,160`.
pub fn format_tokens(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Hint shown next to a manual field, e.g. `$5.00 per million tokens`.
pub fn price_hint(price_per_million: f64) -> String {
    format!("${price_per_million:.2} per million tokens")
}
