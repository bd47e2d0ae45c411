//! Interactive reservation menu.
//!
//! The menu loop is synchronous and generic over its reader and writer so
//! it can be driven from tests; `handle_menu` runs it on a blocking thread
//! next to the availability monitor.

use anyhow::{Context, Result};
use innkeep_config::InnkeepConfig;
use innkeep_core::{OutputFormat, RoomId};
use innkeep_monitor::{AvailabilityMonitor, FanoutObserver, TracingObserver, VacancyHistory};
use innkeep_pool::RoomPool;
use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::outcome::Outcome;

const MENU: &str = "\n---------Welcome to HOTEL INNKEEP---------\n\n\
1. Reserve a room\n\
2. View room details\n\
3. Cancel your reservation\n\
4. List vacant rooms\n\
5. Exit";

/// Run the menu against stdin/stdout with the monitor scanning in the background.
pub(crate) async fn handle_menu(config: &InnkeepConfig, format: OutputFormat) -> Result<()> {
    let pool = Arc::new(crate::setup::build_pool(config)?);
    let history = Arc::new(VacancyHistory::new(config.monitor.history_len));
    let observer = FanoutObserver::new()
        .with(Arc::new(TracingObserver))
        .with(history.clone());
    let monitor =
        AvailabilityMonitor::start(Arc::clone(&pool), config.monitor_interval(), Arc::new(observer));

    let desk_pool = Arc::clone(&pool);
    let result = tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        run_menu(&desk_pool, stdin.lock(), std::io::stdout().lock(), format)
    })
    .await
    .context("menu task panicked");

    let scans = monitor.stop().await;
    tracing::info!(
        scans,
        min_vacant = ?history.min_vacant(),
        p95_occupied = ?history.p95_occupied(),
        "desk closed"
    );
    result?
}

/// Drive the menu until the user exits or input ends.
pub(crate) fn run_menu<R: BufRead, W: Write>(
    pool: &RoomPool,
    mut input: R,
    mut out: W,
    format: OutputFormat,
) -> Result<()> {
    let interactive = format == OutputFormat::Text;

    loop {
        if interactive {
            writeln!(out, "{MENU}")?;
        }
        prompt(&mut out, interactive, "\nEnter your choice: ")?;
        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        let outcome = match choice.as_str() {
            "1" => {
                prompt(&mut out, interactive, "Enter guest name: ")?;
                let Some(guest) = read_line(&mut input)? else {
                    break;
                };
                reserve(pool, &guest)
            }
            "2" => {
                prompt(&mut out, interactive, "Enter room number to view details: ")?;
                let Some(raw) = read_line(&mut input)? else {
                    break;
                };
                view(pool, &raw)
            }
            "3" => {
                prompt(&mut out, interactive, "Enter room number for cancellation: ")?;
                let Some(raw) = read_line(&mut input)? else {
                    break;
                };
                cancel(pool, &raw)
            }
            "4" => Outcome::Vacancies {
                capacity: pool.len(),
                vacant: pool.scan_vacant(),
            },
            "5" => break,
            other => Outcome::Invalid {
                input: other.to_string(),
            },
        };
        outcome.write_to(&mut out, format)?;
        out.flush()?;
    }

    if interactive {
        writeln!(out, "\nGoodbye!")?;
    }
    out.flush()?;
    Ok(())
}

fn reserve(pool: &RoomPool, guest: &str) -> Outcome {
    match pool.allocate(guest) {
        Ok(room) => Outcome::Reserved {
            room,
            guest: guest.trim().to_string(),
        },
        Err(error) => Outcome::failed("reserving a room", error),
    }
}

fn view(pool: &RoomPool, raw: &str) -> Outcome {
    match parse_room(raw).and_then(|id| pool.inspect(id).map_err(|e| e.to_string())) {
        Ok(view) => Outcome::Details(view),
        Err(message) => Outcome::failed("viewing room details", message),
    }
}

fn cancel(pool: &RoomPool, raw: &str) -> Outcome {
    let result = parse_room(raw).and_then(|id| {
        pool.cancel(id)
            .map(|()| id)
            .map_err(|e| e.to_string())
    });
    match result {
        Ok(room) => Outcome::Cancelled { room },
        Err(message) => Outcome::failed("cancelling a reservation", message),
    }
}

fn parse_room(raw: &str) -> std::result::Result<RoomId, String> {
    raw.parse::<RoomId>()
        .map_err(|_| format!("invalid room number '{raw}'"))
}

fn prompt<W: Write>(out: &mut W, interactive: bool, text: &str) -> Result<()> {
    if interactive {
        write!(out, "{text}")?;
        out.flush()?;
    }
    Ok(())
}

/// Next line with surrounding whitespace trimmed; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
