use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of services a client can book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "Aplicação de Cabelo")]
    HairApplication,
    #[serde(rename = "Peruca Personalizada")]
    CustomWig,
    #[serde(rename = "Consultoria Capilar")]
    HairConsultation,
}

impl Service {
    pub const ALL: [Service; 3] = [
        Service::HairApplication,
        Service::CustomWig,
        Service::HairConsultation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Service::HairApplication => "Aplicação de Cabelo",
            Service::CustomWig => "Peruca Personalizada",
            Service::HairConsultation => "Consultoria Capilar",
        }
    }

    /// Exact match on the display label, ignoring surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Service> {
        let label = label.trim();
        Service::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw form state as typed by the client. Every field may still be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub service: Service,
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub request: BookingRequest,
    pub message: String,
}

impl Confirmation {
    pub fn for_request(request: BookingRequest) -> Self {
        let message = format!(
            "Obrigado, {}! Seu agendamento para {} em {} às {} foi confirmado.",
            request.name,
            request.service,
            request.date.format("%Y-%m-%d"),
            request.time
        );
        Self { request, message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "Confirmado")]
    Confirmed,
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmado",
            AppointmentStatus::Pending => "Pendente",
            AppointmentStatus::Cancelled => "Cancelado",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub service: Service,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
}
