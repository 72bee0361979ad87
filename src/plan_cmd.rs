use anyhow::{Context, Result};
use tracing::info;

use gateau_io::{read_birthdays, write_schedule};
use gateau_schedule::compute_cake_days;

use crate::cli::PlanArgs;
use crate::config::GateauConfig;
use crate::convert;

/// Run the `plan` subcommand: birthdays CSV in, cake-days CSV out.
pub fn run(args: PlanArgs) -> Result<()> {
    // Step 1: Load config and apply CLI overrides
    let config = GateauConfig::load(&args.config)?;
    let input = args.input.unwrap_or(config.io.input);
    let output = args.output.unwrap_or(config.io.output);
    let schedule_config = convert::build_schedule_config(&config.schedule, args.year);

    // Step 2: Read the birthday roster
    info!(path = %input.display(), "reading birthdays");
    let records = read_birthdays(&input)
        .with_context(|| format!("failed to read birthdays: {}", input.display()))?;
    info!(n_records = records.len(), "birthday roster loaded");

    // Step 3: Compute the schedule
    let schedule = compute_cake_days(&records, &schedule_config)
        .context("birthday input failed validation")?;
    info!(
        year = schedule_config.year(),
        n_cake_days = schedule.len(),
        "schedule computed"
    );

    // Step 4: Write it out
    write_schedule(&output, &schedule)
        .with_context(|| format!("failed to write schedule: {}", output.display()))?;
    info!(path = %output.display(), "schedule written");

    Ok(())
}
