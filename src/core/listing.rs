use crate::domain::model::{Appointment, AppointmentStatus, Service};
use crate::utils::error::{BookingError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 4] = ["table", "csv", "tsv", "json"];
}

impl FromStr for OutputFormat {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(BookingError::InvalidInputError {
                field: "format".to_string(),
                message: format!(
                    "unsupported format '{}', expected one of {}",
                    other,
                    Self::NAMES.join(", ")
                ),
            }),
        }
    }
}

/// Appointments shown on the admin page. Static; the page has no backing store.
pub fn sample_appointments() -> Vec<Appointment> {
    let entry = |id: u32,
                 name: &str,
                 phone: &str,
                 service: Service,
                 (y, m, d): (i32, u32, u32),
                 time: &str,
                 status: AppointmentStatus| {
        Appointment {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            service,
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            time: time.to_string(),
            status,
        }
    };

    vec![
        entry(
            1,
            "Maria Silva",
            "(11) 99999-1234",
            Service::HairApplication,
            (2025, 6, 15),
            "14:00",
            AppointmentStatus::Confirmed,
        ),
        entry(
            2,
            "Ana Santos",
            "(11) 99999-5678",
            Service::CustomWig,
            (2025, 6, 16),
            "10:30",
            AppointmentStatus::Pending,
        ),
        entry(
            3,
            "Carla Oliveira",
            "(11) 99999-9012",
            Service::HairConsultation,
            (2025, 6, 17),
            "16:00",
            AppointmentStatus::Confirmed,
        ),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AppointmentSummary {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

impl AppointmentSummary {
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        appointments
            .iter()
            .fold(Self::default(), |mut summary, appointment| {
                summary.total += 1;
                match appointment.status {
                    AppointmentStatus::Confirmed => summary.confirmed += 1,
                    AppointmentStatus::Pending => summary.pending += 1,
                    AppointmentStatus::Cancelled => summary.cancelled += 1,
                }
                summary
            })
    }
}

pub fn render_appointments(appointments: &[Appointment], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(appointments)),
        OutputFormat::Csv => render_delimited(appointments, b','),
        OutputFormat::Tsv => render_delimited(appointments, b'\t'),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(appointments)?),
    }
}

fn render_delimited(appointments: &[Appointment], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    for appointment in appointments {
        writer.serialize(appointment)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BookingError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| BookingError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn render_table(appointments: &[Appointment]) -> String {
    if appointments.is_empty() {
        return "Nenhum agendamento encontrado\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<18} {:<17} {:<22} {:<10} {:<6} {}",
        "Cliente", "Telefone", "Serviço", "Data", "Hora", "Status"
    );
    for a in appointments {
        let _ = writeln!(
            out,
            "{:<18} {:<17} {:<22} {:<10} {:<6} {}",
            a.name,
            a.phone,
            a.service.label(),
            a.date.format("%d/%m/%Y"),
            a.time,
            a.status
        );
    }
    out
}
