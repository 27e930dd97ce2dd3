use imagecost_core::Effect;
use imagecost_logging::calc_debug;

use super::timer::ParseScheduler;
use super::AppError;

/// Executes effects returned by `update` against the platform.
pub struct EffectRunner<S> {
    scheduler: S,
}

impl<S: ParseScheduler> EffectRunner<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler }
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Result<(), AppError> {
        for effect in effects {
            match effect {
                Effect::ScheduleParse { ticket, delay } => {
                    calc_debug!("ScheduleParse ticket={} delay_ms={}", ticket, delay.as_millis());
                    self.scheduler.schedule(ticket, delay)?;
                }
                Effect::CancelParse => {
                    calc_debug!("CancelParse");
                    self.scheduler.cancel()?;
                }
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
