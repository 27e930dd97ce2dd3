#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User replaced the snippet text area contents.
    SnippetEdited(String),
    /// User typed into one of the manual token fields.
    TokenFieldEdited {
        field: crate::TokenField,
        raw: String,
    },
    /// Debounce timer for the given ticket elapsed.
    ParseDue(crate::ParseTicket),
    /// User asked to empty the snippet and all three fields at once.
    ClearAll,
}
