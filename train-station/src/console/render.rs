//! Text rendering of station state.

use std::io::{self, Write};

use crate::domain::TrainStatus;
use crate::station::Station;

/// ANSI sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Write every direction with its status; formed trains get their trip summary.
pub fn write_status<W: Write>(out: &mut W, station: &Station) -> io::Result<()> {
    writeln!(out, "Active directions:")?;

    for train in station.trains() {
        writeln!(out, "{}. {}", train.direction(), train.status())?;
        if train.status().is_formed() {
            writeln!(out, "{train}")?;
        }
    }

    Ok(())
}

/// Write the outcome of the workflow step the current train just completed.
pub fn write_step<W: Write>(out: &mut W, station: &Station) -> io::Result<()> {
    let Some(train) = station.current_train() else {
        return Ok(());
    };

    match train.status() {
        TrainStatus::DirectionCreated => writeln!(out, "New direction created.")?,
        TrainStatus::TicketsSold => {
            for sale in station.latest_sale() {
                writeln!(out, "Tickets sold in {}: {}", sale.wagon_type, sale.sold)?;
            }
            writeln!(out, "Tickets sold")?;
        }
        TrainStatus::TrainFormed => writeln!(
            out,
            "Train successfully formed for direction {}.",
            train.direction()
        )?,
        TrainStatus::TrainSent => {
            writeln!(out, "Train sent.")?;
            writeln!(out, "{train}")?;
        }
        TrainStatus::NoDirection => {}
    }

    Ok(())
}
