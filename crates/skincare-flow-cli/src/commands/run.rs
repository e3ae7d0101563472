//! Interactive routine wizard.
//!
//! One line of input per command. The active step's timer ticks in the
//! background and is replaced by a fresh one whenever another step
//! becomes current, which cancels the old tick task.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use chrono::{Datelike, Local};
use clap::Args;
use skincare_flow_core::haptics::{self, Haptics};
use skincare_flow_core::{
    Config, CoreError, Event, GoingOut, Phase, RoutineSession, StepTimer,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::render::{self, StepView};

#[derive(Args)]
pub struct RunArgs {
    /// Going out today (shave + SPF)
    #[arg(long, conflicts_with = "staying_in")]
    going_out: bool,
    /// Staying in today
    #[arg(long)]
    staying_in: bool,
    /// Saturday hair wash
    #[arg(long)]
    saturday: bool,
    /// BHA treatment tonight
    #[arg(long)]
    bha: bool,
    /// Skip the second minoxidil application
    #[arg(long)]
    minoxidil_once: bool,
}

pub fn run(args: RunArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;

    let mut options = config.initial_options(Local::now().weekday());
    if args.going_out {
        options.going_out = GoingOut::Yes;
    } else if args.staying_in {
        options.going_out = GoingOut::No;
    }
    options.saturday |= args.saturday;
    options.do_bha_tonight |= args.bha;
    if args.minoxidil_once {
        options.minoxidil_twice = false;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut wizard = Wizard::new(RoutineSession::new(options), &config, std::io::stdout());
    let result = runtime.block_on(wizard.run(BufReader::new(tokio::io::stdin())));
    runtime.shutdown_timeout(Duration::from_millis(100));
    Ok(result?)
}

enum Flow {
    Continue,
    Quit,
}

struct Wizard<W: Write> {
    session: RoutineSession,
    timer: Option<StepTimer>,
    /// Step the current timer belongs to.
    timer_key: Option<(Phase, usize, String)>,
    tick_period: Duration,
    haptics: Box<dyn Haptics>,
    pulse: Duration,
    notice: Option<&'static str>,
    out: W,
}

impl<W: Write> Wizard<W> {
    fn new(session: RoutineSession, config: &Config, out: W) -> Self {
        Self {
            session,
            timer: None,
            timer_key: None,
            tick_period: config.tick_period(),
            haptics: haptics::from_setting(config.haptics.enabled),
            pulse: config.pulse(),
            notice: None,
            out,
        }
    }

    async fn run<R>(&mut self, input: R) -> Result<(), CoreError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        self.sync_timer();
        self.render_screen()?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("input closed");
                        break;
                    };
                    if let Flow::Quit = self.handle_input(line.trim()) {
                        break;
                    }
                    self.sync_timer();
                    self.render_screen()?;
                }
                event = next_tick(&mut self.timer) => {
                    if let Some(Event::TimerCompleted { step_id, .. }) = &event {
                        info!(%step_id, "timer completed");
                        self.haptics.pulse(self.pulse);
                    }
                    self.render_timer()?;
                }
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Flow {
        self.notice = None;
        let event = match (self.session.phase(), input) {
            (_, "q") => return Flow::Quit,
            (_, "x") => Some(self.session.restart()),
            (Phase::Intro, "1") => self.session.set_going_out(GoingOut::Yes),
            (Phase::Intro, "2") => self.session.set_going_out(GoingOut::No),
            (Phase::Intro, "s") => {
                let value = !self.session.options().saturday;
                self.session.set_saturday(value)
            }
            (Phase::Intro, "h") => {
                let value = !self.session.options().do_bha_tonight;
                self.session.set_do_bha_tonight(value)
            }
            (Phase::Intro, "m") => {
                let value = !self.session.options().minoxidil_twice;
                self.session.set_minoxidil_twice(value)
            }
            (Phase::Intro, "" | "n") => {
                let started = self.session.start();
                if started.is_none() {
                    self.notice = Some("Bitte zuerst Rausgehen oder Drinnen bleiben wählen.");
                }
                started
            }
            (Phase::Morning | Phase::Evening, "" | "n") => self.session.advance(),
            (Phase::Morning | Phase::Evening, "b") => self.session.back(),
            (Phase::Morning | Phase::Evening, "t") => self.timer.as_mut().and_then(StepTimer::toggle),
            (Phase::Morning | Phase::Evening, "r") => self.timer.as_mut().map(StepTimer::reset),
            (Phase::Done, "") => None,
            (_, other) => {
                debug!(input = other, "unknown command");
                self.notice = Some("Unbekannte Eingabe.");
                None
            }
        };
        if let Some(event) = event {
            debug!(?event, "session event");
        }
        Flow::Continue
    }

    /// Give the current step a fresh timer when the step changed.
    fn sync_timer(&mut self) {
        let key = self
            .session
            .current_step()
            .map(|step| (self.session.phase(), self.session.index(), step.id.clone()));
        if key == self.timer_key {
            return;
        }
        self.timer = self
            .session
            .current_step()
            .and_then(|step| StepTimer::for_step(step, self.tick_period));
        self.timer_key = key;
    }

    fn render_screen(&mut self) -> Result<(), CoreError> {
        let mut screen = String::from("\n");
        screen.push_str(&render::header());
        match self.session.phase() {
            Phase::Intro => {
                screen.push_str(&render::intro(self.session.options(), self.session.can_start()));
            }
            Phase::Morning | Phase::Evening => {
                let view = self.session.current_step().zip(self.session.progress()).zip(
                    self.session.next_control(),
                );
                if let Some(((step, position), next)) = view {
                    screen.push_str(&render::step_card(&StepView {
                        phase: self.session.phase(),
                        step,
                        position,
                        can_go_back: self.session.can_go_back(),
                        next,
                        timer: self.timer.as_ref().map(StepTimer::countdown),
                    }));
                }
            }
            Phase::Done => screen.push_str(&render::done()),
        }
        if let Some(notice) = self.notice {
            screen.push_str(notice);
            screen.push('\n');
        }
        screen.push_str("> ");
        self.out.write_all(screen.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn render_timer(&mut self) -> Result<(), CoreError> {
        let line = match (self.session.current_step(), self.timer.as_ref()) {
            (Some(step), Some(timer)) => render::timer_line(step.wait_label(), timer.countdown()),
            _ => return Ok(()),
        };
        write!(self.out, "\r{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

async fn next_tick(timer: &mut Option<StepTimer>) -> Option<Event> {
    match timer {
        Some(timer) => timer.next_tick().await,
        None => std::future::pending().await,
    }
}
