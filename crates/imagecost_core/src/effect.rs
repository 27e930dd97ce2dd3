use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the debounce timer, replacing any timer already running.
    /// When it fires, send `Msg::ParseDue(ticket)`.
    ScheduleParse {
        ticket: crate::ParseTicket,
        delay: Duration,
    },
    /// Disarm the debounce timer without parsing.
    CancelParse,
}
