//! Plain-text rendering of the wizard screens.
//!
//! Every function returns a `String` so screens can be checked in tests
//! without a terminal.

use std::fmt::Write;

use skincare_flow_core::{Countdown, GoingOut, NextControl, Phase, RoutineOptions, Step};

const RULE: &str = "────────────────────────────────────────";

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(•)"
    } else {
        "( )"
    }
}

pub fn header() -> String {
    format!("{RULE}\nSkincare Flow 💧                 [x] Neustart\n{RULE}\n")
}

pub fn intro(options: &RoutineOptions, can_start: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Start");
    let _ = writeln!(out, "Wähle deine Optionen:");
    let _ = writeln!(
        out,
        "  [1] {} Rausgehen (mit Rasur + SPF)",
        radio(options.going_out == GoingOut::Yes)
    );
    let _ = writeln!(
        out,
        "  [2] {} Drinnen bleiben",
        radio(options.going_out == GoingOut::No)
    );
    let _ = writeln!(out, "  [s] {} Samstag (Haare waschen)", checkbox(options.saturday));
    let _ = writeln!(out, "  [h] {} COSRX BHA heute", checkbox(options.do_bha_tonight));
    let _ = writeln!(out, "  [m] {} Minoxidil 2× täglich", checkbox(options.minoxidil_twice));
    if can_start {
        let _ = writeln!(out, "[Enter] Morgenroutine starten");
    } else {
        let _ = writeln!(out, "Morgenroutine starten (erst Rausgehen/Drinnen wählen)");
    }
    out
}

/// Everything a step card shows.
pub struct StepView<'a> {
    pub phase: Phase,
    pub step: &'a Step,
    pub position: (usize, usize),
    pub can_go_back: bool,
    pub next: NextControl,
    pub timer: Option<&'a Countdown>,
}

pub fn step_card(view: &StepView<'_>) -> String {
    let step = view.step;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} · {} ({}/{})",
        phase_title(view.phase),
        step.section.to_uppercase(),
        view.position.0,
        view.position.1
    );
    let _ = writeln!(out, "{}", step.title);
    if let Some(product) = &step.product {
        let _ = writeln!(out, "  Produkt: {product}");
    }
    if let Some(location) = &step.location {
        let _ = writeln!(out, "  Wo auftragen: {location}");
    }
    if let Some(how) = &step.how {
        let _ = writeln!(out, "  Anwendung: {how}");
    }
    if let Some(note) = &step.note {
        let _ = writeln!(out, "  Hinweis: {note}");
    }
    if let Some(timer) = view.timer {
        let _ = writeln!(out, "{}", timer_line(step.wait_label(), timer));
    }

    let mut controls = Vec::new();
    if view.can_go_back {
        controls.push("[b] Zurück");
    }
    if view.timer.is_some() {
        controls.push("[t] Start/Pause");
        controls.push("[r] Reset");
    }
    controls.push(match view.next {
        NextControl::Next => "[Enter] Weiter",
        NextControl::Finish => "[Enter] Fertig",
    });
    let _ = writeln!(out, "{}", controls.join("   "));
    out
}

pub fn timer_line(label: &str, timer: &Countdown) -> String {
    let state = if timer.is_running() { "Pause" } else { "Start" };
    format!("  ⏱️ {label}: {}  [{state}]", timer.display())
}

pub fn done() -> String {
    "Fertig für heute ✨\nMorgenroutine und Abendroutine abgeschlossen.\n".to_string()
}

pub fn phase_title(phase: Phase) -> &'static str {
    match phase {
        Phase::Intro => "Start",
        Phase::Morning => "Morgenroutine",
        Phase::Evening => "Abendroutine",
        Phase::Done => "Fertig",
    }
}

/// Numbered overview of a whole sequence.
pub fn step_list(phase: Phase, steps: &[Step]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} Schritte)", phase_title(phase), steps.len());
    for (i, step) in steps.iter().enumerate() {
        let _ = write!(out, "{:>2}. [{}] {}", i + 1, step.section, step.title);
        if let Some(secs) = step.timer_seconds() {
            let _ = write!(out, " ⏱️ {}", skincare_flow_core::format_mmss(secs));
        }
        let _ = writeln!(out, "  ({})", step.id);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skincare_flow_core::build_morning_steps;

    #[test]
    fn intro_marks_selection_and_start_state() {
        let options = RoutineOptions::default();
        let screen = intro(&options, false);
        assert!(screen.contains("( ) Rausgehen"));
        assert!(screen.contains("[x] Minoxidil"));
        assert!(screen.contains("erst Rausgehen/Drinnen wählen"));

        let chosen = RoutineOptions {
            going_out: GoingOut::No,
            ..options
        };
        let screen = intro(&chosen, true);
        assert!(screen.contains("(•) Drinnen bleiben"));
        assert!(screen.contains("[Enter] Morgenroutine starten"));
    }

    #[test]
    fn first_step_hides_back_control() {
        let steps = build_morning_steps(true, false);
        let card = step_card(&StepView {
            phase: Phase::Morning,
            step: &steps[0],
            position: (1, steps.len()),
            can_go_back: false,
            next: NextControl::Next,
            timer: None,
        });
        assert!(card.contains("Duschen (nur Körper)"));
        assert!(card.contains("Produkt: Rituals Duschschaum (Oud)"));
        assert!(!card.contains("Zurück"));
        assert!(card.contains("[Enter] Weiter"));
        assert!(!card.contains("⏱️"));
    }

    #[test]
    fn timed_step_shows_label_and_countdown() {
        let steps = build_morning_steps(true, false);
        let aftershave = &steps[2];
        let timer = Countdown::for_step(aftershave).unwrap();
        let card = step_card(&StepView {
            phase: Phase::Morning,
            step: aftershave,
            position: (3, steps.len()),
            can_go_back: true,
            next: NextControl::Next,
            timer: Some(&timer),
        });
        assert!(card.contains("⏱️ Einziehen lassen (5 Min): 05:00  [Start]"));
        assert!(card.contains("Wo auftragen: Frisch rasierte Stellen"));
        assert!(card.contains("[b] Zurück"));
    }

    #[test]
    fn finish_label_on_last_evening_step() {
        let steps = skincare_flow_core::build_evening_steps(false, false, false);
        let card = step_card(&StepView {
            phase: Phase::Evening,
            step: &steps[3],
            position: (4, 4),
            can_go_back: true,
            next: NextControl::Finish,
            timer: None,
        });
        assert!(card.contains("[Enter] Fertig"));
        assert!(card.starts_with("Abendroutine · GESICHT (4/4)"));
    }

    #[test]
    fn step_list_numbers_steps_and_shows_waits() {
        let steps = build_morning_steps(false, false);
        let list = step_list(Phase::Morning, &steps);
        assert!(list.starts_with("Morgenroutine (7 Schritte)"));
        assert!(list.contains(" 6. [Haare] Warten ⏱️ 10:00  (wait-minox)"));
    }
}
