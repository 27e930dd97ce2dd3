use crate::TokenField;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub snippet: String,
    /// Text, image and output fields, in that order.
    pub fields: Vec<FieldView>,
    pub error: Option<String>,
    /// Present only when all three counts are set.
    pub breakdown: Option<BreakdownView>,
    pub parse_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: TokenField,
    /// Empty when the field is unset.
    pub value: String,
    pub price_hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownView {
    pub rows: Vec<BreakdownRowView>,
    pub total_cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRowView {
    pub label: &'static str,
    pub tokens: String,
    pub cost: String,
}
