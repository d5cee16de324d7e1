use crate::core::schedule::{DaySchedule, WEEKLY_SCHEDULE};
use crate::core::validator::{FormValidator, Rejection, Verdict};
use crate::domain::model::{BookingForm, Confirmation};
use crate::domain::ports::{BookingSettings, Clock};
use chrono::{Datelike, NaiveDate};

/// Front desk of the booking form: offers slots and takes submissions.
///
/// Submissions are simulated. An accepted request is logged and answered
/// with a [`Confirmation`]; nothing is kept once `submit` returns.
pub struct BookingDesk<C: Clock> {
    clock: C,
    validator: FormValidator,
}

impl<C: Clock> BookingDesk<C> {
    pub fn new<S: BookingSettings>(clock: C, settings: &S) -> Self {
        Self {
            clock,
            validator: FormValidator::new()
                .enforce_slot_membership(settings.enforce_slot_membership()),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn day_schedule(&self, date: NaiveDate) -> DaySchedule {
        WEEKLY_SCHEDULE.for_date(date)
    }

    pub fn available_slots(&self, date: NaiveDate) -> &'static [&'static str] {
        let slots = self.day_schedule(date).slots();
        tracing::debug!(%date, count = slots.len(), "resolved slots");
        slots
    }

    pub fn hours_label(&self, date: NaiveDate) -> &'static str {
        WEEKLY_SCHEDULE.hours_label(date.weekday())
    }

    pub fn review(&self, form: &BookingForm) -> Verdict {
        self.validator.validate(form, self.clock.today())
    }

    pub fn submit(&self, form: &BookingForm) -> std::result::Result<Confirmation, Rejection> {
        match self.review(form) {
            Verdict::Accepted(request) => {
                tracing::info!(
                    name = %request.name,
                    phone = %request.phone,
                    service = %request.service,
                    date = %request.date,
                    time = %request.time,
                    "booking request accepted"
                );
                Ok(Confirmation::for_request(request))
            }
            Verdict::Rejected(rejection) => {
                tracing::warn!(reason = rejection.reason(), detail = %rejection, "booking request rejected");
                Err(rejection)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::RejectionKind;
    use crate::domain::ports::FixedClock;

    struct Strict;

    impl BookingSettings for Strict {
        fn enforce_slot_membership(&self) -> bool {
            true
        }
    }

    fn desk() -> BookingDesk<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        BookingDesk::new(FixedClock(today), &Strict)
    }

    #[test]
    fn test_submit_returns_confirmation() {
        let form = BookingForm {
            name: "Maria Silva".to_string(),
            phone: "(11) 99999-1234".to_string(),
            service: "Aplicação de Cabelo".to_string(),
            date: "2026-10-16".to_string(),
            time: "14:00".to_string(),
        };
        let confirmation = desk().submit(&form).unwrap();
        assert!(confirmation.message.starts_with("Obrigado, Maria Silva!"));
        assert_eq!(confirmation.request.time, "14:00");
    }

    #[test]
    fn test_submit_rejects_sunday() {
        let form = BookingForm {
            name: "Maria Silva".to_string(),
            phone: "(11) 99999-1234".to_string(),
            service: "Aplicação de Cabelo".to_string(),
            date: "2026-10-18".to_string(),
            time: "10:00".to_string(),
        };
        let rejection = desk().submit(&form).unwrap_err();
        assert_eq!(rejection.kind(), RejectionKind::InvalidDate);
    }

    #[test]
    fn test_hours_label_follows_date() {
        let saturday = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(desk().hours_label(saturday), "Sábado: 9h às 14h");
        assert_eq!(desk().available_slots(saturday).len(), 10);
    }
}
