// Home Page
// Welcome text and the counter demo

use tracing::debug;

use crate::core::effects::Effects;
use crate::core::events::AppEvent;

/// Counter validation errors, shown inline
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error("cannot decrease below zero")]
    BelowZero,
}

/// Non-negative counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    value: u64,
    error: Option<CounterError>,
}

impl Counter {
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
        self.error = None;
    }

    /// Decrease by one; at zero the value stays and an error is recorded
    pub fn decrement(&mut self) -> Result<(), CounterError> {
        match self.value.checked_sub(1) {
            Some(value) => {
                self.value = value;
                self.error = None;
                Ok(())
            }
            None => {
                self.error = Some(CounterError::BelowZero);
                Err(CounterError::BelowZero)
            }
        }
    }

    /// Decrease by one, leaving any rejection on the counter for display
    pub fn step_down(&mut self) {
        if let Err(e) = self.decrement() {
            debug!(error = %e, "counter decrement rejected");
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn error(&self) -> Option<&CounterError> {
        self.error.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct HomePage {
    pub counter: Counter,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &AppEvent) -> Effects {
        match event {
            AppEvent::Increment => self.counter.increment(),
            AppEvent::Decrement => self.counter.step_down(),
            _ => {}
        }
        Effects::none()
    }
}
