use clap::{Args, ValueEnum};
use skincare_flow_core::{build_evening_steps, build_morning_steps, Phase};

use crate::render;

#[derive(Clone, Copy, ValueEnum)]
pub enum PhaseArg {
    Morning,
    Evening,
}

#[derive(Args)]
pub struct StepsArgs {
    /// Which routine to print
    phase: PhaseArg,
    /// Going out today (shave + SPF in the morning)
    #[arg(long)]
    going_out: bool,
    /// Saturday hair wash
    #[arg(long)]
    saturday: bool,
    /// Sunscreen was worn today (double cleanse in the evening)
    #[arg(long)]
    used_spf: bool,
    /// BHA treatment tonight
    #[arg(long)]
    bha: bool,
    /// Skip the second minoxidil application
    #[arg(long)]
    minoxidil_once: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: StepsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (phase, steps) = match args.phase {
        PhaseArg::Morning => (
            Phase::Morning,
            build_morning_steps(args.going_out, args.saturday),
        ),
        PhaseArg::Evening => (
            Phase::Evening,
            build_evening_steps(args.used_spf, args.bha, !args.minoxidil_once),
        ),
    };
    tracing::debug!(%phase, step_count = steps.len(), "built step list");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        print!("{}", render::step_list(phase, &steps));
    }
    Ok(())
}
