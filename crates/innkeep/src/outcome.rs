use innkeep_core::{OutputFormat, RoomId, RoomView};
use innkeep_pool::{PoolStatus, format_vacancy_report};
use serde::Serialize;
use std::io::Write;

/// Result of one desk action, rendered as text or as a JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub(crate) enum Outcome {
    Reserved {
        room: RoomId,
        guest: String,
    },
    Details(RoomView),
    Cancelled {
        room: RoomId,
    },
    Vacancies {
        capacity: usize,
        vacant: Vec<RoomId>,
    },
    Failed {
        action: &'static str,
        message: String,
    },
    /// Unrecognised menu choice.
    Invalid {
        input: String,
    },
}

impl Outcome {
    pub(crate) fn failed(action: &'static str, error: impl std::fmt::Display) -> Self {
        Self::Failed {
            action,
            message: error.to_string(),
        }
    }

    pub(crate) fn text(&self) -> String {
        match self {
            Self::Reserved { room, guest } => {
                format!("Room {room} successfully reserved for guest {guest}")
            }
            Self::Details(view) => view.to_string(),
            Self::Cancelled { room } => format!("Reservation for room {room} has been canceled."),
            Self::Vacancies { capacity, vacant } => {
                let status = PoolStatus {
                    capacity: *capacity,
                    occupied: capacity.saturating_sub(vacant.len()),
                };
                format_vacancy_report(&status, vacant)
            }
            Self::Failed { action, message } => format!("Error {action}: {message}"),
            Self::Invalid { .. } => "Invalid input".to_string(),
        }
    }

    pub(crate) fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Text => writeln!(out, "{}", self.text())?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(self)?)?,
        }
        Ok(())
    }
}
