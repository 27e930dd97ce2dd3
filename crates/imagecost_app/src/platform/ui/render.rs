use imagecost_core::{AppViewModel, BreakdownView, FieldView, TokenField};

const TYPE_WIDTH: usize = 8;
const TOKENS_WIDTH: usize = 14;
const COST_WIDTH: usize = 14;

/// Renders the whole screen: snippet, manual fields, error panel and
/// cost breakdown.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if view.snippet.is_empty() {
        lines.push("Snippet: (empty)".to_string());
    } else {
        let mut snippet_lines = view.snippet.lines();
        let first = snippet_lines.next().unwrap_or_default();
        lines.push(format!("Snippet: {first}"));
        lines.extend(snippet_lines.map(|line| format!("         {line}")));
    }
    if view.parse_pending {
        lines.push("         (parsing...)".to_string());
    }

    lines.push(String::new());
    lines.extend(view.fields.iter().map(format_field));

    if let Some(error) = &view.error {
        lines.push(String::new());
        lines.push(format!("Error: {error}"));
    }

    if let Some(breakdown) = &view.breakdown {
        lines.push(String::new());
        lines.extend(format_breakdown(breakdown));
    }

    lines
}

fn format_field(field: &FieldView) -> String {
    let label = match field.field {
        TokenField::Text => "Text Input Tokens:",
        TokenField::Image => "Image Input Tokens:",
        TokenField::Output => "Output Tokens:",
    };
    let value = if field.value.is_empty() {
        "-"
    } else {
        field.value.as_str()
    };
    format!("{label:<20}{value:>12}   {}", field.price_hint)
}

fn format_breakdown(breakdown: &BreakdownView) -> Vec<String> {
    let rule = "-".repeat(TYPE_WIDTH + TOKENS_WIDTH + COST_WIDTH);
    let mut lines = vec![
        "Cost Breakdown".to_string(),
        row("Type", "Tokens", "Cost"),
        rule.clone(),
    ];
    lines.extend(
        breakdown
            .rows
            .iter()
            .map(|r| row(r.label, &r.tokens, &r.cost)),
    );
    lines.push(rule);
    lines.push(row("Total", "", &breakdown.total_cost));
    lines
}

fn row(kind: &str, tokens: &str, cost: &str) -> String {
    format!(
        "{kind:<tw$}{tokens:>nw$}{cost:>cw$}",
        tw = TYPE_WIDTH,
        nw = TOKENS_WIDTH,
        cw = COST_WIDTH
    )
}
