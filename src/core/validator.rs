use crate::core::schedule::WEEKLY_SCHEDULE;
use crate::domain::model::{BookingForm, BookingRequest, Service};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Phone,
    Service,
    Date,
    Time,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Phone,
        FormField::Service,
        FormField::Date,
        FormField::Time,
    ];

    fn value<'a>(&self, form: &'a BookingForm) -> &'a str {
        match self {
            FormField::Name => &form.name,
            FormField::Phone => &form.phone,
            FormField::Service => &form.service,
            FormField::Date => &form.date,
            FormField::Time => &form.time,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Service => "service",
            FormField::Date => "date",
            FormField::Time => "time",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateIssue {
    Malformed,
    InPast,
    ClosedSunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    MissingField,
    InvalidDate,
    UnknownService,
    UnavailableTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    MissingField { field: FormField },
    InvalidDate { issue: DateIssue, value: String },
    UnknownService { value: String },
    UnavailableTime { date: NaiveDate, time: String },
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::MissingField { .. } => RejectionKind::MissingField,
            Rejection::InvalidDate { .. } => RejectionKind::InvalidDate,
            Rejection::UnknownService { .. } => RejectionKind::UnknownService,
            Rejection::UnavailableTime { .. } => RejectionKind::UnavailableTime,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::MissingField { .. } => "missing fields",
            Rejection::InvalidDate { issue, .. } => match issue {
                DateIssue::Malformed => "malformed date",
                DateIssue::InPast => "date in past",
                DateIssue::ClosedSunday => "closed Sunday",
            },
            Rejection::UnknownService { .. } => "unknown service",
            Rejection::UnavailableTime { .. } => "time not offered",
        }
    }

    /// Notice shown to the client, in the salon's language.
    pub fn user_message(&self) -> &'static str {
        match self {
            Rejection::MissingField { .. } => "Por favor, preencha todos os campos.",
            Rejection::InvalidDate { issue, .. } => match issue {
                DateIssue::Malformed => "Por favor, informe uma data válida.",
                DateIssue::InPast => "Por favor, selecione uma data futura.",
                DateIssue::ClosedSunday => "Desculpe, não atendemos aos domingos.",
            },
            Rejection::UnknownService { .. } => "Por favor, selecione um serviço da lista.",
            Rejection::UnavailableTime { .. } => {
                "Por favor, selecione um dos horários disponíveis."
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingField { field } => write!(f, "{} ({})", self.reason(), field),
            Rejection::InvalidDate { value, .. } => write!(f, "{} ({})", self.reason(), value),
            Rejection::UnknownService { value } => write!(f, "{} ({})", self.reason(), value),
            Rejection::UnavailableTime { date, time } => {
                write!(f, "{} ({} on {})", self.reason(), time, date)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(BookingRequest),
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(rejection) => Some(rejection),
        }
    }

    pub fn into_result(self) -> std::result::Result<BookingRequest, Rejection> {
        match self {
            Verdict::Accepted(request) => Ok(request),
            Verdict::Rejected(rejection) => Err(rejection),
        }
    }
}

impl From<std::result::Result<BookingRequest, Rejection>> for Verdict {
    fn from(result: std::result::Result<BookingRequest, Rejection>) -> Self {
        match result {
            Ok(request) => Verdict::Accepted(request),
            Err(rejection) => Verdict::Rejected(rejection),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormValidator {
    enforce_slot_membership: bool,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self {
            enforce_slot_membership: true,
        }
    }
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// When disabled, any non-empty time is accepted on an open day.
    pub fn enforce_slot_membership(mut self, enforce: bool) -> Self {
        self.enforce_slot_membership = enforce;
        self
    }

    pub fn validate(&self, form: &BookingForm, today: NaiveDate) -> Verdict {
        self.check(form, today).into()
    }

    fn check(
        &self,
        form: &BookingForm,
        today: NaiveDate,
    ) -> std::result::Result<BookingRequest, Rejection> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| field.value(form).trim().is_empty())
        {
            return Err(Rejection::MissingField { field });
        }

        let raw_date = form.date.trim();
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| {
            Rejection::InvalidDate {
                issue: DateIssue::Malformed,
                value: raw_date.to_string(),
            }
        })?;

        if date < today {
            return Err(Rejection::InvalidDate {
                issue: DateIssue::InPast,
                value: raw_date.to_string(),
            });
        }

        if date.weekday() == Weekday::Sun {
            return Err(Rejection::InvalidDate {
                issue: DateIssue::ClosedSunday,
                value: raw_date.to_string(),
            });
        }

        let service =
            Service::from_label(&form.service).ok_or_else(|| Rejection::UnknownService {
                value: form.service.trim().to_string(),
            })?;

        let time = form.time.trim();
        if self.enforce_slot_membership && !WEEKLY_SCHEDULE.for_date(date).contains(time) {
            return Err(Rejection::UnavailableTime {
                date,
                time: time.to_string(),
            });
        }

        Ok(BookingRequest {
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            service,
            date,
            time: time.to_string(),
        })
    }
}

/// Validates with the slot-membership check enabled.
pub fn validate(form: &BookingForm, today: NaiveDate) -> Verdict {
    FormValidator::default().validate(form, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        // Friday
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn form(date: &str, time: &str) -> BookingForm {
        BookingForm {
            name: "Carla Oliveira".to_string(),
            phone: "(11) 99999-9012".to_string(),
            service: "Consultoria Capilar".to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn test_reports_first_missing_field() {
        let mut input = form("2026-10-19", "10:00");
        input.phone.clear();
        input.time.clear();
        let verdict = validate(&input, today());
        assert_eq!(
            verdict.rejection(),
            Some(&Rejection::MissingField {
                field: FormField::Phone
            })
        );
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut input = form("2026-10-19", "10:00");
        input.name = "   ".to_string();
        let rejection = validate(&input, today()).into_result().unwrap_err();
        assert_eq!(rejection.kind(), RejectionKind::MissingField);
        assert_eq!(rejection.reason(), "missing fields");
    }

    #[test]
    fn test_missing_field_wins_over_bad_date() {
        let mut input = form("2020-01-01", "10:00");
        input.service.clear();
        let rejection = validate(&input, today()).into_result().unwrap_err();
        assert_eq!(rejection.kind(), RejectionKind::MissingField);
    }

    #[test]
    fn test_malformed_date_is_invalid_date() {
        let rejection = validate(&form("16/10/2026", "10:00"), today())
            .into_result()
            .unwrap_err();
        assert_eq!(rejection.kind(), RejectionKind::InvalidDate);
        assert_eq!(rejection.reason(), "malformed date");
    }

    #[test]
    fn test_past_date_checked_before_sunday() {
        // 2026-10-11 is a Sunday in the past.
        let rejection = validate(&form("2026-10-11", "10:00"), today())
            .into_result()
            .unwrap_err();
        assert_eq!(rejection.reason(), "date in past");
    }

    #[test]
    fn test_unknown_service() {
        let mut input = form("2026-10-19", "10:00");
        input.service = "Manicure".to_string();
        let rejection = validate(&input, today()).into_result().unwrap_err();
        assert_eq!(
            rejection,
            Rejection::UnknownService {
                value: "Manicure".to_string()
            }
        );
    }

    #[test]
    fn test_slot_membership_can_be_relaxed() {
        let input = form("2026-10-19", "13:00");
        let strict = FormValidator::new().validate(&input, today());
        assert_eq!(
            strict.rejection().map(Rejection::kind),
            Some(RejectionKind::UnavailableTime)
        );

        let lenient = FormValidator::new()
            .enforce_slot_membership(false)
            .validate(&input, today());
        assert!(lenient.is_accepted());
    }

    #[test]
    fn test_accepted_request_is_trimmed() {
        let mut input = form(" 2026-10-17 ", " 09:00 ");
        input.name = " Carla Oliveira ".to_string();
        let request = validate(&input, today()).into_result().unwrap();
        assert_eq!(request.name, "Carla Oliveira");
        assert_eq!(request.time, "09:00");
        assert_eq!(request.service, Service::HairConsultation);
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    }

    #[test]
    fn test_user_messages() {
        let rejection = Rejection::InvalidDate {
            issue: DateIssue::ClosedSunday,
            value: "2026-10-18".to_string(),
        };
        assert_eq!(rejection.user_message(), "Desculpe, não atendemos aos domingos.");
        assert_eq!(rejection.to_string(), "closed Sunday (2026-10-18)");
    }
}
