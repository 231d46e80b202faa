use chrono::Utc;
use tt_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_ms_is_monotone_enough_for_stamping() {
        let clock = SystemClock;
        let first = clock.now_ms();
        let second = clock.now_ms();

        assert!(first > 1_600_000_000_000);
        assert!(second >= first);
    }
}
