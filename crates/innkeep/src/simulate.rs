use anyhow::{Context, Result};
use innkeep_config::InnkeepConfig;
use innkeep_core::{OutputFormat, PoolError, RoomId};
use innkeep_monitor::VacancyReport;
use innkeep_pool::RoomPool;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Barrier;

use crate::outcome::Outcome;

#[derive(Debug, Serialize)]
struct Booking {
    guest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    room: Option<RoomId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Book rooms for `guests` concurrent guests against a fresh pool built
/// from `config`, then print who got which room.
pub(crate) async fn handle_simulate(
    config: &InnkeepConfig,
    guests: usize,
    format: OutputFormat,
) -> Result<()> {
    let pool = Arc::new(crate::setup::build_pool(config)?);
    let results = simulate_bookings(Arc::clone(&pool), guests).await?;
    let report = VacancyReport::capture(&pool);

    match format {
        OutputFormat::Json => {
            let bookings: Vec<Booking> = results
                .into_iter()
                .map(|(guest, result)| match result {
                    Ok(room) => Booking {
                        guest,
                        room: Some(room),
                        error: None,
                    },
                    Err(error) => Booking {
                        guest,
                        room: None,
                        error: Some(error.to_string()),
                    },
                })
                .collect();
            let body = serde_json::json!({ "bookings": bookings, "report": report });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            for (guest, result) in results {
                let outcome = match result {
                    Ok(room) => Outcome::Reserved { room, guest },
                    Err(error) => Outcome::failed("reserving a room", format!("{guest}: {error}")),
                };
                println!("{}", outcome.text());
            }
            println!("{}", report.summary());
        }
    }
    Ok(())
}

/// Race `guests` tasks against `pool`, each trying to book one room.
/// Results are returned in guest order.
pub(crate) async fn simulate_bookings(
    pool: Arc<RoomPool>,
    guests: usize,
) -> Result<Vec<(String, Result<RoomId, PoolError>)>> {
    let barrier = Arc::new(Barrier::new(guests.max(1)));
    let mut handles = Vec::with_capacity(guests);

    for index in 0..guests {
        let pool = Arc::clone(&pool);
        let barrier = Arc::clone(&barrier);
        let guest = format!("guest-{}", index + 1);
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            let result = pool.allocate(&guest);
            tracing::debug!(guest = %guest, ?result, "booking attempt");
            (guest, result)
        }));
    }

    let mut results = Vec::with_capacity(guests);
    for handle in handles {
        results.push(handle.await.context("booking task panicked")?);
    }
    Ok(results)
}
