use anyhow::Result;
use tracing::info;

use gateau_calendar::OfficeCalendar;

use crate::cli::ClosuresArgs;
use crate::config::GateauConfig;
use crate::convert;

/// Run the `closures` subcommand: print the resolved closure dates for the
/// configured year and its neighbours, one ISO date per line.
pub fn run(args: ClosuresArgs) -> Result<()> {
    let config = GateauConfig::load(&args.config)?;
    let schedule_config = convert::build_schedule_config(&config.schedule, args.year);

    let office = OfficeCalendar::resolve(schedule_config.holidays(), schedule_config.year());
    info!(
        year = schedule_config.year(),
        n_closures = office.closures().count(),
        "closures resolved"
    );

    for date in office.closures() {
        println!("{date}");
    }

    Ok(())
}
