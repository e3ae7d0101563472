mod catalog;
mod options;
mod phase;
mod step;

pub use catalog::{
    build_evening_steps, build_morning_steps, build_steps, EveningInputs, MorningInputs,
    MINOXIDIL_WAIT_SECS,
};
pub use options::{GoingOut, RoutineOptions};
pub use phase::Phase;
pub use step::{Step, StepTemplate, DEFAULT_WAIT_LABEL};
