pub mod catalog;
pub mod desk;
pub mod listing;
pub mod schedule;
pub mod validator;

pub use crate::domain::model::{
    Appointment, AppointmentStatus, BookingForm, BookingRequest, Confirmation, Service,
};
pub use crate::domain::ports::{BookingSettings, Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
