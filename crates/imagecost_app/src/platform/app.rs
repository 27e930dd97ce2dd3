use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc;
use std::thread;

use imagecost_core::{update, AppState, Msg};
use imagecost_logging::{calc_info, calc_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::timer::{DebounceTimer, ParseScheduler};
use super::ui::input::{LineReader, UserCommand};
use super::{logging, ui, AppError};

/// Everything the dispatch loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Line(String),
    /// Forwarded from the debounce timer or other platform sources.
    Core(Msg),
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn run_app(config: AppConfig) -> Result<(), AppError> {
    logging::initialize(&config);
    calc_info!("imagecost starting");

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    let timer_tx = event_tx.clone();
    let timer = DebounceTimer::new(move |ticket| {
        let _ = timer_tx.send(AppEvent::Core(Msg::ParseDue(ticket)));
    })?;

    spawn_stdin_reader(event_tx.clone())?;

    let stdout = io::stdout();
    let interactive = stdout.is_terminal() && io::stdin().is_terminal();
    let mut app = App::new(EffectRunner::new(timer), stdout.lock(), interactive);
    app.start(config.snippet)?;

    // Keep our own sender alive so the loop only ends on Flow::Exit.
    let _event_tx = event_tx;
    for event in event_rx {
        if app.handle_event(event)? == Flow::Exit {
            break;
        }
    }

    calc_info!("imagecost exiting");
    Ok(())
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) -> Result<(), AppError> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if event_tx.send(AppEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        calc_warn!("stdin read failed: {}", err);
                        break;
                    }
                }
            }
            let _ = event_tx.send(AppEvent::InputClosed);
        })
        .map_err(AppError::Runtime)?;
    Ok(())
}

/// Owns the single `AppState` and everything that acts on it.
pub struct App<S, W> {
    state: AppState,
    effects: EffectRunner<S>,
    reader: LineReader,
    out: W,
    interactive: bool,
    closing: bool,
}

impl<S: ParseScheduler, W: Write> App<S, W> {
    pub fn new(effects: EffectRunner<S>, out: W, interactive: bool) -> Self {
        Self {
            state: AppState::new(),
            effects,
            reader: LineReader::new(),
            out,
            interactive,
            closing: false,
        }
    }

    pub fn start(&mut self, snippet: Option<String>) -> Result<(), AppError> {
        let banner = ui::layout::initial_lines();
        self.write_lines(&banner)?;
        match snippet {
            Some(snippet) => self.dispatch_msg(Msg::SnippetEdited(snippet))?,
            None => self.render_now()?,
        }
        self.prompt()
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<Flow, AppError> {
        match event {
            AppEvent::Line(line) => match self.reader.feed(&line) {
                Ok(Some(command)) => {
                    if self.handle_command(command)? == Flow::Exit {
                        return Ok(Flow::Exit);
                    }
                }
                Ok(None) => {}
                Err(err) => self.write_lines(&[err.to_string()])?,
            },
            AppEvent::Core(msg) => self.dispatch_msg(msg)?,
            AppEvent::InputClosed => {
                calc_info!("input closed");
                self.closing = true;
                if let Some(command) = self.reader.finish() {
                    self.handle_command(command)?;
                }
            }
        }

        // End of input still lets a pending snippet parse land.
        if self.closing && !self.state.has_pending_parse() {
            return Ok(Flow::Exit);
        }
        if !self.reader.in_block() {
            self.prompt()?;
        }
        Ok(Flow::Continue)
    }

    fn handle_command(&mut self, command: UserCommand) -> Result<Flow, AppError> {
        match command {
            UserCommand::SetSnippet(text) => self.dispatch_msg(Msg::SnippetEdited(text))?,
            UserCommand::ClearAll => self.dispatch_msg(Msg::ClearAll)?,
            UserCommand::SetField { field, raw } => {
                self.dispatch_msg(Msg::TokenFieldEdited { field, raw })?
            }
            UserCommand::ShowExample => self.write_lines(&ui::layout::example_lines())?,
            UserCommand::Show => self.render_now()?,
            UserCommand::Help => self.write_lines(&ui::layout::help_lines())?,
            UserCommand::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn dispatch_msg(&mut self, msg: Msg) -> Result<(), AppError> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.run(effects)?;

        if was_dirty {
            self.render_now()?;
        }
        Ok(())
    }

    fn render_now(&mut self) -> Result<(), AppError> {
        let lines = ui::render::render(&self.state.view());
        self.write_lines(&lines)?;
        self.write_lines(&[String::new()])
    }

    fn prompt(&mut self) -> Result<(), AppError> {
        if self.interactive {
            write!(self.out, "{}", ui::constants::PROMPT).map_err(AppError::Output)?;
            self.out.flush().map_err(AppError::Output)?;
        }
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), AppError> {
        for line in lines {
            writeln!(self.out, "{line}").map_err(AppError::Output)?;
        }
        self.out.flush().map_err(AppError::Output)
    }

    #[cfg(test)]
    fn state(&self) -> &AppState {
        &self.state
    }
}
