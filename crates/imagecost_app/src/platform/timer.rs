use std::sync::Arc;
use std::thread;
use std::time::Duration;

use imagecost_core::ParseTicket;
use imagecost_logging::{calc_trace, calc_warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppError;

/// Something that can arm and disarm the snippet debounce.
pub trait ParseScheduler {
    /// Arms the timer for `ticket`, replacing any timer already armed.
    fn schedule(&mut self, ticket: ParseTicket, delay: Duration) -> Result<(), AppError>;
    fn cancel(&mut self) -> Result<(), AppError>;
}

type DueCallback = Arc<dyn Fn(ParseTicket) + Send + Sync>;

enum TimerCommand {
    Schedule { ticket: ParseTicket, delay: Duration },
    Cancel,
}

/// Debounce timer backed by a single-threaded tokio runtime on its own
/// thread. At most one delayed task exists; every command aborts it first.
pub struct DebounceTimer {
    cmd_tx: mpsc::UnboundedSender<TimerCommand>,
}

impl DebounceTimer {
    pub fn new(on_due: impl Fn(ParseTicket) + Send + Sync + 'static) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(AppError::Runtime)?;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let on_due: DueCallback = Arc::new(on_due);

        thread::Builder::new()
            .name("debounce-timer".to_string())
            .spawn(move || runtime.block_on(run_timer(cmd_rx, on_due)))
            .map_err(AppError::Runtime)?;

        Ok(Self { cmd_tx })
    }
}

impl DebounceTimer {
    fn send(&self, command: TimerCommand) -> Result<(), AppError> {
        self.cmd_tx.send(command).map_err(|_| {
            calc_warn!("debounce timer thread is gone; command dropped");
            AppError::TimerStopped
        })
    }
}

impl ParseScheduler for DebounceTimer {
    fn schedule(&mut self, ticket: ParseTicket, delay: Duration) -> Result<(), AppError> {
        self.send(TimerCommand::Schedule { ticket, delay })
    }

    fn cancel(&mut self) -> Result<(), AppError> {
        self.send(TimerCommand::Cancel)
    }
}

async fn run_timer(mut cmd_rx: mpsc::UnboundedReceiver<TimerCommand>, on_due: DueCallback) {
    let mut pending: Option<JoinHandle<()>> = None;
    while let Some(command) = cmd_rx.recv().await {
        if let Some(task) = pending.take() {
            task.abort();
        }
        match command {
            TimerCommand::Schedule { ticket, delay } => {
                calc_trace!("debounce armed for ticket {} ({:?})", ticket, delay);
                let on_due = on_due.clone();
                pending = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    on_due(ticket);
                }));
            }
            TimerCommand::Cancel => {
                calc_trace!("debounce cancelled");
            }
        }
    }
    // Sender dropped: the app is shutting down.
    if let Some(task) = pending {
        task.abort();
    }
}
