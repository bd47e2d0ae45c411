//! Background availability monitoring for a shared room pool.

pub mod monitor;
pub mod observer;
pub mod stats;

pub use monitor::{AvailabilityMonitor, MAX_INTERVAL};
pub use observer::{FanoutObserver, TracingObserver, VacancyObserver, VacancyReport};
pub use stats::{VacancyHistory, VacancySample};
