pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::SalonConfig;

pub use self::core::{
    desk::BookingDesk,
    listing::{render_appointments, sample_appointments, AppointmentSummary, OutputFormat},
    schedule::{resolve_slots, DaySchedule, WeeklySchedule, WEEKLY_SCHEDULE},
    validator::{validate, FormValidator, Rejection, RejectionKind, Verdict},
};
pub use domain::model::{BookingForm, BookingRequest, Confirmation, Service};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{BookingError, Result};
