//! Reporting series: hourly visitors, zone share and the weekly report

use crate::simulation::noise::{noise, unit_span};
use crate::types::LocalizedText;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// First opening hour covered by the hourly series
pub const FIRST_REPORTED_HOUR: u32 = 8;
/// Last opening hour covered by the hourly series
pub const LAST_REPORTED_HOUR: u32 = 21;

/// Visitors in one opening hour, today against the historical average
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyVisitors {
    /// Hour label, `H:00`
    pub hour: String,
    /// Visitors today
    pub today: u32,
    /// Historical average for the hour
    pub average: u32,
}

/// One slice of the zone distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneShare {
    /// Zone label
    pub name: LocalizedText,
    /// Percentage of visitors
    pub value: u32,
    /// Chart color as a CSS `hsl()` string
    pub color: String,
}

/// One day of the weekly operations report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReportDay {
    /// Day label, `Mon` through `Sun`
    pub day: String,
    /// Visitors that day
    pub visitors: u32,
    /// Guest satisfaction score (0-100)
    pub satisfaction: u32,
    /// Operational efficiency score (0-100)
    pub efficiency: u32,
}

/// Totals across the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Sum of daily visitors
    pub total_visitors: u32,
    /// Rounded mean satisfaction
    pub avg_satisfaction: u32,
    /// Rounded mean efficiency
    pub avg_efficiency: u32,
}

/// The weekly report with its summary row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Monday through Sunday
    pub days: Vec<WeeklyReportDay>,
    /// Totals
    pub summary: WeeklySummary,
}

impl WeeklySummary {
    /// Summarize a run of days; an empty run sums to zero
    pub fn from_days(days: &[WeeklyReportDay]) -> Self {
        let count = days.len() as f64;
        let mean = |total: u32| {
            if days.is_empty() {
                0
            } else {
                (f64::from(total) / count).round() as u32
            }
        };

        Self {
            total_visitors: days.iter().map(|d| d.visitors).sum(),
            avg_satisfaction: mean(days.iter().map(|d| d.satisfaction).sum()),
            avg_efficiency: mean(days.iter().map(|d| d.efficiency).sum()),
        }
    }
}

/// Visitors per opening hour; the 11:00-15:00 lunch peak runs about twice the rest
pub fn hourly_visitors<R: Rng + ?Sized>(rng: &mut R) -> Vec<HourlyVisitors> {
    (FIRST_REPORTED_HOUR..=LAST_REPORTED_HOUR)
        .map(|hour| {
            let average = if (11..=15).contains(&hour) {
                noise(10_000.0, 1_000.0, rng)
            } else {
                noise(5_000.0, 800.0, rng)
            };
            let today = noise(f64::from(average) * (0.9 + unit_span(0.3, rng)), 500.0, rng);
            HourlyVisitors { hour: format!("{}:00", hour), today, average }
        })
        .collect()
}

/// Fixed visitor split by zone type, summing to 100
pub fn zone_distribution() -> Vec<ZoneShare> {
    [
        ("冒险区", "Adventure", 35, "hsl(0, 72%, 51%)"),
        ("亲子区", "Kids", 28, "hsl(210, 100%, 55%)"),
        ("观光区", "Scenic", 15, "hsl(160, 70%, 45%)"),
        ("美食区", "Food", 15, "hsl(38, 92%, 50%)"),
        ("入口区", "Entry", 7, "hsl(270, 60%, 55%)"),
    ]
    .into_iter()
    .map(|(zh, en, value, color)| ZoneShare {
        name: LocalizedText::new(zh, en),
        value,
        color: color.to_string(),
    })
    .collect()
}

/// Last week's operations report
pub fn weekly_report() -> WeeklyReport {
    let days: Vec<WeeklyReportDay> = [
        ("Mon", 8_500, 82, 78),
        ("Tue", 7_200, 85, 82),
        ("Wed", 9_100, 79, 75),
        ("Thu", 10_200, 76, 71),
        ("Fri", 12_500, 72, 68),
        ("Sat", 15_800, 68, 62),
        ("Sun", 14_200, 71, 65),
    ]
    .into_iter()
    .map(|(day, visitors, satisfaction, efficiency)| WeeklyReportDay {
        day: day.to_string(),
        visitors,
        satisfaction,
        efficiency,
    })
    .collect();

    let summary = WeeklySummary::from_days(&days);
    WeeklyReport { days, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hourly_series() {
        let mut rng = StdRng::seed_from_u64(17);
        let series = hourly_visitors(&mut rng);
        assert_eq!(series.len(), 14);
        assert_eq!(series[0].hour, "8:00");
        assert_eq!(series[13].hour, "21:00");

        for point in &series {
            let hour: u32 = point.hour.trim_end_matches(":00").parse().unwrap();
            if (11..=15).contains(&hour) {
                assert!((9_000..=11_000).contains(&point.average));
            } else {
                assert!((4_200..=5_800).contains(&point.average));
            }
            let low = f64::from(point.average) * 0.9 - 500.0;
            let high = f64::from(point.average) * 1.2 + 500.0;
            assert!(f64::from(point.today) >= low.floor());
            assert!(f64::from(point.today) <= high.ceil());
        }
    }

    #[test]
    fn test_zone_distribution_sums_to_100() {
        let shares = zone_distribution();
        assert_eq!(shares.len(), 5);
        assert_eq!(shares.iter().map(|s| s.value).sum::<u32>(), 100);
        assert_eq!(shares[0].name.get(Language::Zh), "冒险区");
        assert_eq!(shares[4].name.get(Language::En), "Entry");
        assert_eq!(shares[1].color, "hsl(210, 100%, 55%)");
    }

    #[test]
    fn test_weekly_summary() {
        let report = weekly_report();
        assert_eq!(report.days.len(), 7);
        assert_eq!(report.days[5].day, "Sat");
        assert_eq!(report.summary.total_visitors, 77_500);
        assert_eq!(report.summary.avg_satisfaction, 76);
        assert_eq!(report.summary.avg_efficiency, 72);
    }

    #[test]
    fn test_empty_summary() {
        let summary = WeeklySummary::from_days(&[]);
        assert_eq!(summary.total_visitors, 0);
        assert_eq!(summary.avg_satisfaction, 0);
    }
}
