use chrono::{Local, NaiveDate};

/// Resolves what "today" means for the screens.
///
/// The demo data is recorded for a fixed day, so a reference date can pin
/// "today" to it; without one the local calendar date is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockService {
    reference_date: Option<NaiveDate>,
}

impl ClockService {
    pub fn new(reference_date: Option<NaiveDate>) -> Self {
        Self { reference_date }
    }

    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_date_pins_today() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 25).unwrap();
        let clock = ClockService::new(Some(date));
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_unpinned_clock_uses_local_date() {
        let clock = ClockService::default();

        let before = Local::now().date_naive();
        let today = clock.today();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }
}
