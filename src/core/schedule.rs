use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

pub static WEEKDAY_SLOTS: [&str; 16] = [
    "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00", "17:30", "18:00", "18:30",
];

pub static SATURDAY_SLOTS: [&str; 10] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30",
];

const WEEKDAY_HOURS: &str = "Segunda a Sexta: 10h às 19h";
const SATURDAY_HOURS: &str = "Sábado: 9h às 14h";
const SUNDAY_HOURS: &str = "Domingo: Fechado";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "slots", rename_all = "lowercase")]
pub enum DaySchedule {
    Closed,
    Open(&'static [&'static str]),
}

impl DaySchedule {
    pub fn is_closed(&self) -> bool {
        matches!(self, DaySchedule::Closed)
    }

    pub fn slots(&self) -> &'static [&'static str] {
        match *self {
            DaySchedule::Closed => &[],
            DaySchedule::Open(slots) => slots,
        }
    }

    pub fn contains(&self, time: &str) -> bool {
        let time = time.trim();
        self.slots().iter().any(|slot| *slot == time)
    }
}

/// Opening hours of the salon, keyed by day of week.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklySchedule;

pub static WEEKLY_SCHEDULE: WeeklySchedule = WeeklySchedule;

impl WeeklySchedule {
    pub fn for_weekday(&self, weekday: Weekday) -> DaySchedule {
        match weekday {
            Weekday::Sun => DaySchedule::Closed,
            Weekday::Sat => DaySchedule::Open(&SATURDAY_SLOTS),
            _ => DaySchedule::Open(&WEEKDAY_SLOTS),
        }
    }

    pub fn for_date(&self, date: NaiveDate) -> DaySchedule {
        self.for_weekday(date.weekday())
    }

    pub fn hours_label(&self, weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Sun => SUNDAY_HOURS,
            Weekday::Sat => SATURDAY_HOURS,
            _ => WEEKDAY_HOURS,
        }
    }

    /// Business hours as shown in the site footer, Monday first.
    pub fn summary(&self) -> [&'static str; 3] {
        [WEEKDAY_HOURS, SATURDAY_HOURS, SUNDAY_HOURS]
    }
}

/// 0 = Sunday through 6 = Saturday.
pub fn day_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Bookable slots for `date`, ascending. Empty when the salon is closed.
pub fn resolve_slots(date: NaiveDate) -> &'static [&'static str] {
    WEEKLY_SCHEDULE.for_date(date).slots()
}
