//! Operational alerts and recommendations
//!
//! Alerts are fixed templates stamped against the current time. The decision helpers
//! (`top_alert`, `overall_status`, `top_suggestion`) are what a dashboard header
//! shows; they work over any alert list, not only the generated one.

use crate::types::{AlertId, AlertSeverity, LocalizedText, SuggestionPriority, ZoneId};
use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes between consecutive alert timestamps
pub const ALERT_SPACING_MINUTES: i64 = 8;

/// Alerts past this index are already resolved
pub const LAST_UNRESOLVED_INDEX: usize = 3;

/// How many of the newest unresolved alerts drive [`overall_status`]
pub const STATUS_WINDOW: usize = 3;

/// An operational alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// `alert-<index>`
    pub id: AlertId,
    /// Severity
    pub severity: AlertSeverity,
    /// Short headline
    pub title: LocalizedText,
    /// What was observed
    pub description: LocalizedText,
    /// Recommended action
    pub suggestion: LocalizedText,
    /// Zone the alert concerns
    pub zone: ZoneId,
    /// When the alert was raised
    pub timestamp: DateTime<FixedOffset>,
    /// Whether staff already handled it
    pub resolved: bool,
}

/// A standing operations recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Leading emoji
    pub icon: String,
    /// Recommendation text
    pub text: LocalizedText,
    /// Priority
    pub priority: SuggestionPriority,
}

/// Traffic-light summary of the newest unresolved alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// A critical alert is open
    Red,
    /// A warning is open
    Yellow,
    /// Nothing pressing
    Green,
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertStatus::Red => write!(f, "red"),
            AlertStatus::Yellow => write!(f, "yellow"),
            AlertStatus::Green => write!(f, "green"),
        }
    }
}

struct AlertTemplate {
    severity: AlertSeverity,
    title: (&'static str, &'static str),
    description: (&'static str, &'static str),
    suggestion: (&'static str, &'static str),
    zone: &'static str,
}

const ALERT_TEMPLATES: [AlertTemplate; 5] = [
    AlertTemplate {
        severity: AlertSeverity::Critical,
        title: ("过山车排队超限", "Coaster Queue Exceeded"),
        description: (
            "高空过山车排队人数已达 280 人，等待时间超过 45 分钟",
            "Sky Coaster queue reached 280 people, wait time exceeding 45 min",
        ),
        suggestion: (
            "🚨 建议开放临时快速通道，分流排队游客",
            "🚨 Suggest opening temporary fast lane to divert queuing visitors",
        ),
        zone: "thrill",
    },
    AlertTemplate {
        severity: AlertSeverity::Warning,
        title: ("美食广场拥堵", "Food Court Congestion"),
        description: (
            "美食广场区域人数达到容量 85%，人流密度持续上升",
            "Food court area at 85% capacity, crowd density rising",
        ),
        suggestion: (
            "📢 建议 APP 推送分流提示，引导游客前往东侧餐饮区",
            "📢 Suggest pushing diversion notice via app to guide visitors to east dining area",
        ),
        zone: "food",
    },
    AlertTemplate {
        severity: AlertSeverity::Warning,
        title: ("旋转木马人手不足", "Carousel Understaffed"),
        description: (
            "旋转木马区域游客增多，当前工作人员仅 2 名",
            "Carousel area visitor count increasing, only 2 staff present",
        ),
        suggestion: (
            "👷 建议增加 2 名工作人员到旋转木马区域",
            "👷 Suggest adding 2 staff members to carousel area",
        ),
        zone: "family",
    },
    AlertTemplate {
        severity: AlertSeverity::Info,
        title: ("摩天轮运营延长建议", "Ferris Wheel Extended Hours"),
        description: (
            "傍晚时段摩天轮需求旺盛，当前排队稳定在 30 分钟",
            "Evening demand for Ferris Wheel is high, queue stable at 30 min",
        ),
        suggestion: (
            "⏰ 建议延长摩天轮开放时间至 21:00",
            "⏰ Suggest extending Ferris Wheel hours until 21:00",
        ),
        zone: "scenic",
    },
    AlertTemplate {
        severity: AlertSeverity::Info,
        title: ("冷区活动引流", "Cold Zone Activity"),
        description: (
            "观光区东侧游客稀少，利用率不足 20%",
            "East scenic zone has few visitors, utilization below 20%",
        ),
        suggestion: (
            "🎪 建议在该区域开展限时互动活动吸引游客",
            "🎪 Suggest launching limited-time interactive events in this area",
        ),
        zone: "scenic",
    },
];

const SUGGESTIONS: [(&str, &str, &str, SuggestionPriority); 4] = [
    (
        "🚨",
        "过山车排队已超45分钟，建议开放临时通道",
        "Coaster wait exceeds 45min, suggest opening temp lane",
        SuggestionPriority::High,
    ),
    (
        "📢",
        "建议 APP 推送分流提示引导游客前往冷区",
        "Push diversion alerts to guide visitors to cold zones",
        SuggestionPriority::High,
    ),
    ("👷", "建议增加2名工作人员到旋转木马区域", "Add 2 staff to carousel area", SuggestionPriority::Medium),
    ("⏰", "建议延长摩天轮开放时间至21:00", "Extend Ferris Wheel hours to 21:00", SuggestionPriority::Low),
];

fn text((zh, en): (&str, &str)) -> LocalizedText {
    LocalizedText::new(zh, en)
}

/// Stamp the alert templates against `now`, newest first
pub fn generate_alerts(now: DateTime<FixedOffset>) -> Vec<Alert> {
    ALERT_TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, template)| Alert {
            id: AlertId::from_index(index),
            severity: template.severity,
            title: text(template.title),
            description: text(template.description),
            suggestion: text(template.suggestion),
            zone: ZoneId::new(template.zone),
            timestamp: now - Duration::minutes(index as i64 * ALERT_SPACING_MINUTES),
            resolved: index > LAST_UNRESOLVED_INDEX,
        })
        .collect()
}

/// The standing recommendations, highest priority first
pub fn generate_suggestions() -> Vec<Suggestion> {
    SUGGESTIONS
        .iter()
        .map(|&(icon, zh, en, priority)| Suggestion {
            icon: icon.to_string(),
            text: LocalizedText::new(zh, en),
            priority,
        })
        .collect()
}

/// First unresolved critical alert, else first unresolved warning
pub fn top_alert(alerts: &[Alert]) -> Option<&Alert> {
    let open = || alerts.iter().filter(|a| !a.resolved);
    open()
        .find(|a| a.severity == AlertSeverity::Critical)
        .or_else(|| open().find(|a| a.severity == AlertSeverity::Warning))
}

/// Number of unresolved alerts
pub fn active_alert_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| !a.resolved).count()
}

/// Traffic light over the first [`STATUS_WINDOW`] unresolved alerts
pub fn overall_status(alerts: &[Alert]) -> AlertStatus {
    let recent: Vec<&Alert> = alerts.iter().filter(|a| !a.resolved).take(STATUS_WINDOW).collect();

    if recent.iter().any(|a| a.severity == AlertSeverity::Critical) {
        AlertStatus::Red
    } else if recent.iter().any(|a| a.severity == AlertSeverity::Warning) {
        AlertStatus::Yellow
    } else {
        AlertStatus::Green
    }
}

/// First high-priority suggestion, else the first one
pub fn top_suggestion(suggestions: &[Suggestion]) -> Option<&Suggestion> {
    suggestions
        .iter()
        .find(|s| s.priority == SuggestionPriority::High)
        .or_else(|| suggestions.first())
}
