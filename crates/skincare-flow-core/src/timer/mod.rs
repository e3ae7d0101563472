mod countdown;
mod ticker;

pub use countdown::{format_mmss, Countdown};
pub use ticker::{StepTimer, Ticker, DEFAULT_TICK_PERIOD};
