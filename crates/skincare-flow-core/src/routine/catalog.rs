//! Step catalog: the embedded routine content and the rules deciding
//! which steps a phase contains.
//!
//! Each phase is an ordered table of `(template, predicate)` rules. A
//! sequence is the table filtered by its predicates, so omitted steps
//! leave no gaps and the order of the table is the order of the routine.

use super::options::RoutineOptions;
use super::phase::Phase;
use super::step::{Step, StepTemplate};

/// Inputs of the morning builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorningInputs {
    pub going_out: bool,
    pub saturday: bool,
}

/// Inputs of the evening builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EveningInputs {
    pub used_spf_today: bool,
    pub do_bha_tonight: bool,
    pub minoxidil_twice: bool,
}

/// One catalog entry.
pub(crate) struct Rule<I> {
    pub template: StepTemplate,
    pub include: fn(&I) -> bool,
}

impl<I> Rule<I> {
    const fn new(template: StepTemplate, include: fn(&I) -> bool) -> Self {
        Self { template, include }
    }
}

fn always<I>(_: &I) -> bool {
    true
}

fn on_saturday(i: &MorningInputs) -> bool {
    i.saturday
}

fn when_going_out(i: &MorningInputs) -> bool {
    i.going_out
}

fn after_spf(i: &EveningInputs) -> bool {
    i.used_spf_today
}

fn without_spf(i: &EveningInputs) -> bool {
    !i.used_spf_today
}

fn bha_tonight(i: &EveningInputs) -> bool {
    i.do_bha_tonight
}

fn no_bha_tonight(i: &EveningInputs) -> bool {
    !i.do_bha_tonight
}

fn minoxidil_twice(i: &EveningInputs) -> bool {
    i.minoxidil_twice
}

/// Seconds to wait between skincare and minoxidil.
pub const MINOXIDIL_WAIT_SECS: u32 = 600;

pub(crate) static MORNING_RULES: [Rule<MorningInputs>; 15] = [
    Rule::new(
        StepTemplate::new("shower", "Morgen", "Duschen (nur Körper)")
            .product("Rituals Duschschaum (Oud)")
            .how("Körper waschen. Gesicht später am Waschbecken reinigen."),
        always,
    ),
    Rule::new(
        StepTemplate::new("hair-wash", "Haare", "Haare waschen")
            .how("Shampoo + Conditioner (Lockenmethode)."),
        on_saturday,
    ),
    Rule::new(
        StepTemplate::new("hair-dry", "Haare", "Lufttrocknen")
            .how("Kurz antrocknen lassen, bis nur noch feucht."),
        on_saturday,
    ),
    Rule::new(
        StepTemplate::new("hair-product", "Haare", "Produkt einarbeiten")
            .how("Locken-Creme/Leave-in verteilen."),
        on_saturday,
    ),
    Rule::new(
        StepTemplate::new("hair-diffuse", "Haare", "Diffusor")
            .how("Mit Diffusor fast trocken föhnen."),
        on_saturday,
    ),
    Rule::new(
        StepTemplate::new("hair-pony", "Haare", "Pony & Gel")
            .how("Pony ggf. glätten, mit Gel fixieren."),
        on_saturday,
    ),
    Rule::new(
        StepTemplate::new("shave", "Rasur", "Rasieren")
            .product("NIVEA Men Sensitive Shaving Gel + Philips Rasierer")
            .location("Seiten (Goatee/Schnurrbart stehen lassen)")
            .how("Gel auftragen, mit Philips rasieren, abspülen."),
        when_going_out,
    ),
    Rule::new(
        StepTemplate::new("aftershave", "Rasur", "After Shave")
            .product("Baxter of California After Shave Balm")
            .location("Frisch rasierte Stellen")
            .how("Sanft einmassieren.")
            .wait(300)
            .wait_label("Einziehen lassen (5 Min)"),
        when_going_out,
    ),
    Rule::new(
        StepTemplate::new("cleanser", "Gesicht", "Reinigen")
            .product("COSRX Low pH Good Morning Gel Cleanser")
            .how("20 Sek. einmassieren, abspülen."),
        always,
    ),
    Rule::new(
        StepTemplate::new("eye", "Augen", "Eye Serum")
            .product("Beauty of Joseon Revive Eye Serum")
            .how("1 Pump, sanft einklopfen.")
            .wait(30),
        always,
    ),
    Rule::new(
        StepTemplate::new("serum", "Gesicht", "Serum")
            .product("Beauty of Joseon Glow Serum")
            .how("2–3 Tropfen einklopfen.")
            .wait(30),
        always,
    ),
    Rule::new(
        StepTemplate::new("cream", "Gesicht", "Moisturizer")
            .product("COSRX Advanced Snail 92 Cream")
            .how("Dünn auftragen.")
            .wait(90),
        always,
    ),
    Rule::new(
        StepTemplate::new("spf", "Schutz", "Sonnencreme")
            .product("Beauty of Joseon Relief Sun SPF50+")
            .how("2 Finger-Regel, Gesicht & Hals."),
        when_going_out,
    ),
    Rule::new(
        StepTemplate::new("wait-minox", "Haare", "Warten")
            .how("10 Min warten vor Minoxidil.")
            .wait(MINOXIDIL_WAIT_SECS),
        always,
    ),
    Rule::new(
        StepTemplate::new("minoxidil", "Haare", "Minoxidil")
            .product("Minoxidil Lösung")
            .how("Auf Kopfhaut auftragen, Hände waschen."),
        always,
    ),
];

pub(crate) static EVENING_RULES: [Rule<EveningInputs>; 8] = [
    Rule::new(
        StepTemplate::new("cleanse-pm", "Abend", "Double Cleansing")
            .product("Banila Co Clean It Zero Balm → COSRX Cleanser")
            .how("Balm auf trockener Haut, abspülen → dann Cleanser."),
        after_spf,
    ),
    Rule::new(
        StepTemplate::new("cleanse-pm", "Abend", "Reinigung")
            .product("COSRX Cleanser")
            .how("Mit Cleanser 20 Sek. waschen."),
        without_spf,
    ),
    Rule::new(
        StepTemplate::new("bha", "Treatment", "COSRX BHA Blackhead Power Liquid")
            .how("Dünn auf T-Zone, 20 Min warten.")
            .wait(1200),
        bha_tonight,
    ),
    Rule::new(
        StepTemplate::new("eye-pm", "Augen", "Eye Serum")
            .product("Beauty of Joseon Revive Eye Serum")
            .how("1 Pump einklopfen.")
            .wait(30),
        always,
    ),
    Rule::new(
        StepTemplate::new("serum-pm", "Gesicht", "Serum")
            .product("Beauty of Joseon Glow Serum")
            .how("2–3 Tropfen einklopfen.")
            .wait(30),
        no_bha_tonight,
    ),
    Rule::new(
        StepTemplate::new("cream-pm", "Gesicht", "Moisturizer")
            .product("COSRX Snail 92 Cream")
            .how("Dünn auftragen."),
        always,
    ),
    Rule::new(
        StepTemplate::new("wait-minox-pm", "Haare", "Warten")
            .how("10 Min warten.")
            .wait(MINOXIDIL_WAIT_SECS),
        minoxidil_twice,
    ),
    Rule::new(
        StepTemplate::new("minoxidil-pm", "Haare", "Minoxidil")
            .product("Minoxidil Lösung")
            .how("Auf Kopfhaut."),
        minoxidil_twice,
    ),
];

fn materialize<I>(rules: &[Rule<I>], inputs: &I) -> Vec<Step> {
    rules
        .iter()
        .filter(|rule| (rule.include)(inputs))
        .map(|rule| rule.template.to_step())
        .collect()
}

/// Build the morning sequence.
///
/// Never empty: shower, the four core face steps, the minoxidil wait and
/// the minoxidil application are always present.
pub fn build_morning_steps(going_out: bool, saturday: bool) -> Vec<Step> {
    let inputs = MorningInputs { going_out, saturday };
    materialize(&MORNING_RULES, &inputs)
}

/// Build the evening sequence.
///
/// The BHA treatment and the regular serum never appear together.
pub fn build_evening_steps(
    used_spf_today: bool,
    do_bha_tonight: bool,
    minoxidil_twice: bool,
) -> Vec<Step> {
    let inputs = EveningInputs {
        used_spf_today,
        do_bha_tonight,
        minoxidil_twice,
    };
    materialize(&EVENING_RULES, &inputs)
}

/// Sequence for `phase` under `options`; empty outside morning and evening.
///
/// An unanswered going-out question counts as staying in.
pub fn build_steps(phase: Phase, options: &RoutineOptions) -> Vec<Step> {
    match phase {
        Phase::Morning => build_morning_steps(
            options.going_out.as_bool().unwrap_or(false),
            options.saturday,
        ),
        Phase::Evening => build_evening_steps(
            options.used_spf_today,
            options.do_bha_tonight,
            options.minoxidil_twice,
        ),
        Phase::Intro | Phase::Done => Vec::new(),
    }
}
