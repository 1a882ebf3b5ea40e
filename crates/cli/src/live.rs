use chrono::{DateTime, Local, Utc};
use rand::Rng;
use render_modes_core::config::DashboardConfig;
use render_modes_core::{Extras, PageId};
use render_modes_generator::ExtrasSource;

/// Server time and a random focus score, sampled once per dynamic render
#[derive(Debug, Clone)]
pub struct LiveExtras {
    time_format: String,
    score_max: u32,
}

impl LiveExtras {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            time_format: config.time_format.clone(),
            score_max: config.score_max.max(1),
        }
    }

    pub fn server_time(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&Local).format(&self.time_format).to_string()
    }
}

impl ExtrasSource for LiveExtras {
    fn extras(&self, _page: PageId, now: DateTime<Utc>) -> Extras {
        let score = rand::thread_rng().gen_range(0..self.score_max);
        Extras::new()
            .with("Server Time", self.server_time(now))
            .with("Focus Score", format!("{}%", score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config(time_format: &str, score_max: u32) -> DashboardConfig {
        DashboardConfig {
            time_format: time_format.to_string(),
            score_max,
        }
    }

    #[test]
    fn test_extras_fields_in_display_order() {
        let live = LiveExtras::new(&DashboardConfig::default());
        let extras = live.extras(PageId::Dashboard, Utc::now());

        assert_eq!(extras.fields.len(), 2);
        assert_eq!(extras.fields[0].label, "Server Time");
        assert_eq!(extras.fields[1].label, "Focus Score");
        assert!(extras.fields[1].value.ends_with('%'));
    }

    #[test]
    fn test_score_stays_below_max() {
        let live = LiveExtras::new(&config("%Y", 3));
        for _ in 0..50 {
            let extras = live.extras(PageId::Dashboard, Utc::now());
            let score: u32 = extras.fields[1].value.trim_end_matches('%').parse().unwrap();
            assert!(score < 3);
        }
    }

    #[test]
    fn test_server_time_uses_configured_format() {
        let live = LiveExtras::new(&config("%Y", 100));
        let at = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(live.server_time(at), "2025");
    }

    #[test]
    fn test_different_times_give_different_values() {
        let live = LiveExtras::new(&config("%Y-%m-%d %H:%M:%S", 100));
        let t1 = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 5).unwrap();
        assert_ne!(live.server_time(t1), live.server_time(t2));
    }
}
