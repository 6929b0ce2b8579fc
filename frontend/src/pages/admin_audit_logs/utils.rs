use crate::{
    api::AuditLogQuery,
    state::list_page::{FilterSet, ListPageState},
};
use chrono::{NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use serde_json::Value;

pub const AUDIT_LOGS_PER_PAGE: i64 = 20;

pub const AUDIT_EVENT_TYPES: &[(&str, &str)] = &[
    ("auth.login", "ログイン"),
    ("auth.logout", "ログアウト"),
    ("user.create", "ユーザー作成"),
    ("user.deactivate", "ユーザー無効化"),
    ("audit_log.export", "監査ログエクスポート"),
];

pub const AUDIT_RESULTS: &[(&str, &str)] = &[("success", "成功"), ("failure", "失敗")];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditLogFilters {
    pub username: String,
    pub action: String,
    pub result: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditLogFilterField {
    Username,
    Action,
    Result,
    StartDate,
    EndDate,
}

impl FilterSet for AuditLogFilters {
    type Field = AuditLogFilterField;

    fn get(&self, field: AuditLogFilterField) -> &str {
        match field {
            AuditLogFilterField::Username => &self.username,
            AuditLogFilterField::Action => &self.action,
            AuditLogFilterField::Result => &self.result,
            AuditLogFilterField::StartDate => &self.start_date,
            AuditLogFilterField::EndDate => &self.end_date,
        }
    }

    fn set(&mut self, field: AuditLogFilterField, value: String) {
        match field {
            AuditLogFilterField::Username => self.username = value,
            AuditLogFilterField::Action => self.action = value,
            AuditLogFilterField::Result => self.result = value,
            AuditLogFilterField::StartDate => self.start_date = value,
            AuditLogFilterField::EndDate => self.end_date = value,
        }
    }
}

impl AuditLogFilters {
    pub fn date_range_is_inverted(&self) -> bool {
        match (parse_day(&self.start_date), parse_day(&self.end_date)) {
            (Some(start), Some(end)) => start > end,
            _ => false,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn day_bound(value: &str, time: NaiveTime) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }
    match parse_day(value) {
        Some(day) => Some(
            Utc.from_utc_datetime(&day.and_time(time))
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        ),
        None => {
            log::warn!("Ignoring unparsable audit log date filter: {}", value);
            None
        }
    }
}

/// First second of `date` (`YYYY-MM-DD`) as RFC 3339 UTC.
pub fn day_start(date: &str) -> Option<String> {
    day_bound(date, NaiveTime::from_hms_opt(0, 0, 0)?)
}

/// Last second of `date` (`YYYY-MM-DD`) as RFC 3339 UTC.
pub fn day_end(date: &str) -> Option<String> {
    day_bound(date, NaiveTime::from_hms_opt(23, 59, 59)?)
}

pub fn build_audit_log_query(state: &ListPageState<AuditLogFilters>, per_page: i64) -> AuditLogQuery {
    let filters = state.filters();
    AuditLogQuery {
        page: state.page() as i64 + 1,
        per_page,
        search: non_empty(state.search()),
        username: non_empty(&filters.username),
        action: non_empty(&filters.action),
        result: non_empty(&filters.result),
        from: day_start(&filters.start_date),
        to: day_end(&filters.end_date),
    }
}

pub fn event_label(event_type: &str) -> &str {
    AUDIT_EVENT_TYPES
        .iter()
        .find(|(value, _)| *value == event_type)
        .map(|(_, label)| *label)
        .unwrap_or(event_type)
}

pub fn result_badge_class(result: &str) -> &'static str {
    if result == "success" {
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-status-success-bg text-status-success-text"
    } else {
        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-status-error-bg text-status-error-text"
    }
}

/// Compact one-line rendering of metadata, cut at `max_chars` characters.
pub fn summarize_metadata(value: &Value, max_chars: usize) -> String {
    let raw = value.to_string();
    if raw.chars().count() > max_chars {
        format!("{}...", raw.chars().take(max_chars).collect::<String>())
    } else {
        raw
    }
}
