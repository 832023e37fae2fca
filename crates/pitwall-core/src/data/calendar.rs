//! Race calendar and next-race lookup.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceEvent {
    pub date: NaiveDate,
    pub event: String,
    pub circuit: String,
}

impl RaceEvent {
    pub fn new(date: NaiveDate, event: &str, circuit: &str) -> Self {
        Self {
            date,
            event: event.to_string(),
            circuit: circuit.to_string(),
        }
    }

    /// Lights-out reference point: local midnight of the race day.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(chrono::NaiveTime::MIN)
    }

    /// Whole days from `now` until the race day begins.
    pub fn days_until(&self, now: NaiveDateTime) -> i64 {
        (self.starts_at() - now).num_days()
    }
}

/// Source of the current moment.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to one moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Ordered, immutable calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    events: Vec<RaceEvent>,
}

impl Calendar {
    /// Builds a calendar, sorting entries by date.
    pub fn new(mut events: Vec<RaceEvent>) -> Self {
        events.sort_by_key(|e| e.date);
        Self { events }
    }

    pub fn events(&self) -> &[RaceEvent] {
        &self.events
    }

    /// First entry strictly after `now`, or `None` in the off season.
    pub fn next_race(&self, now: NaiveDateTime) -> Option<&RaceEvent> {
        self.events.iter().find(|race| race.starts_at() > now)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(season_2026())
    }
}

const SEASON_2026: &[(i32, u32, u32, &str, &str)] = &[
    (2026, 3, 8, "Australian Grand Prix", "Albert Park"),
    (2026, 3, 15, "Chinese Grand Prix", "Shanghai"),
    (2026, 3, 29, "Japanese Grand Prix", "Suzuka"),
    (2026, 4, 12, "Bahrain Grand Prix", "Sakhir"),
    (2026, 4, 19, "Saudi Arabian Grand Prix", "Jeddah Corniche"),
    (2026, 5, 3, "Miami Grand Prix", "Miami Autodrome"),
    (2026, 5, 24, "Canadian Grand Prix", "Montreal"),
    (2026, 6, 7, "Monaco Grand Prix", "Monte Carlo"),
    (2026, 6, 14, "Spanish Grand Prix", "Barcelona-Catalunya"),
    (2026, 6, 28, "Austrian Grand Prix", "Red Bull Ring"),
    (2026, 7, 5, "British Grand Prix", "Silverstone"),
    (2026, 7, 19, "Belgian Grand Prix", "Spa-Francorchamps"),
    (2026, 7, 26, "Hungarian Grand Prix", "Hungaroring"),
    (2026, 8, 23, "Dutch Grand Prix", "Zandvoort"),
    (2026, 9, 6, "Italian Grand Prix", "Monza"),
    (2026, 9, 13, "Spanish Grand Prix", "Madrid"),
    (2026, 9, 26, "Azerbaijan Grand Prix", "Baku City"),
    (2026, 10, 11, "Singapore Grand Prix", "Marina Bay"),
    (2026, 10, 25, "United States Grand Prix", "COTA"),
    (2026, 11, 1, "Mexico City Grand Prix", "Hermanos Rodriguez"),
    (2026, 11, 8, "São Paulo Grand Prix", "Interlagos"),
    (2026, 11, 21, "Las Vegas Grand Prix", "Las Vegas Strip"),
    (2026, 11, 29, "Qatar Grand Prix", "Lusail"),
    (2026, 12, 6, "Abu Dhabi Grand Prix", "Yas Marina"),
];

/// Built-in 2026 season.
pub fn season_2026() -> Vec<RaceEvent> {
    SEASON_2026
        .iter()
        .filter_map(|&(y, m, d, event, circuit)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| RaceEvent::new(date, event, circuit))
        })
        .collect()
}
