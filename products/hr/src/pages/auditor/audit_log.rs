use std::collections::BTreeSet;

use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, matches_choice, matches_search, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "auditor-audit-log";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Toned for Severity {
    fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            Severity::Info => StatusTone::Info,
            Severity::Warning => StatusTone::Warning,
            Severity::Critical => StatusTone::Danger,
        }
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct AuditEntry {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub actor: String,
    pub action: String,
    pub module: String,
    pub severity: Severity,
    pub ip_address: String,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct AuditLogFilter {
    pub severity: Option<Severity>,
    pub module: Option<String>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct AuditLogSummary {
    pub entries: u32,
    pub critical: u32,
    pub warnings: u32,
    pub distinct_actors: u32,
}

pub struct AuditLogPage;

impl Page for AuditLogPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Audit Log",
        role: Role::Auditor,
        description: "System activity trail",
    };

    type Record = AuditEntry;
    type Filter = AuditLogFilter;
    type Summary = AuditLogSummary;

    #[rustfmt::skip]
    fn records() -> Vec<AuditEntry> {
        vec![
            entry("AUD-5001", (3, 13, 9, 14), "sarah.johnson", "Updated salary band for Engineering", "Payroll", Severity::Warning, "10.0.4.21"),
            entry("AUD-5002", (3, 13, 10, 2), "system", "Nightly backup completed", "System", Severity::Info, "127.0.0.1"),
            entry("AUD-5003", (3, 13, 11, 47), "unknown", "5 failed login attempts for admin", "Authentication", Severity::Critical, "203.0.113.77"),
            entry("AUD-5004", (3, 13, 14, 30), "michael.chen", "Approved leave request LV-0994", "Leave", Severity::Info, "10.0.4.35"),
            entry("AUD-5005", (3, 14, 8, 5), "david.kim", "Exported employee directory", "Employees", Severity::Warning, "10.0.7.12"),
            entry("AUD-5006", (3, 14, 8, 41), "sarah.johnson", "Granted admin role to lisa.wang", "Access Control", Severity::Critical, "10.0.4.21"),
            entry("AUD-5007", (3, 14, 9, 3), "lisa.wang", "Viewed payroll run PAY-0304", "Payroll", Severity::Info, "10.0.5.8"),
            entry("AUD-5008", (3, 14, 9, 58), "michael.chen", "Edited team goal GL-3", "Performance", Severity::Info, "10.0.4.35"),
        ]
    }

    fn matches(filter: &AuditLogFilter, record: &AuditEntry, _ctx: &PageContext) -> bool {
        matches_choice(filter.severity.as_ref(), &record.severity)
            && filter
                .module
                .as_deref()
                .is_none_or(|module| module.eq_ignore_ascii_case(&record.module))
            && matches_search(
                filter.search.as_deref(),
                &[record.actor.as_str(), record.action.as_str(), record.ip_address.as_str()],
            )
    }

    fn badge(record: &AuditEntry, _ctx: &PageContext) -> Badge {
        record.severity.badge()
    }

    fn summarize(records: &[AuditEntry], _ctx: &PageContext) -> AuditLogSummary {
        let count = |severity| records.iter().filter(|e| e.severity == severity).count() as u32;
        let actors: BTreeSet<_> = records.iter().map(|e| e.actor.as_str()).collect();
        AuditLogSummary {
            entries: records.len() as u32,
            critical: count(Severity::Critical),
            warnings: count(Severity::Warning),
            distinct_actors: actors.len() as u32,
        }
    }

    fn sort(_filter: &AuditLogFilter, records: &mut [AuditEntry]) {
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
}

fn entry(
    id: &str,
    (month, day, hour, minute): (u32, u32, u32, u32),
    actor: &str,
    action: &str,
    module: &str,
    severity: Severity,
    ip_address: &str,
) -> AuditEntry {
    AuditEntry {
        id: id.into(),
        timestamp: ymd(2025, month, day)
            .and_hms_opt(hour, minute, 0)
            .expect("literal time"),
        actor: actor.into(),
        action: action.into(),
        module: module.into(),
        severity,
        ip_address: ip_address.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::view;

    fn ctx() -> PageContext {
        PageContext::new(ymd(2025, 3, 14))
    }

    #[test]
    fn newest_entry_first() {
        let page = view::<AuditLogPage>(&AuditLogFilter::default(), &ctx());
        assert_eq!(page.records[0].id, "AUD-5008");
        assert!(page
            .records
            .windows(2)
            .all(|pair| pair[0].timestamp >= pair[1].timestamp));
    }

    #[test]
    fn summary_counts_severities_and_actors() {
        let summary = AuditLogPage::summarize(&AuditLogPage::records(), &ctx());
        assert_eq!(summary.entries, 8);
        assert_eq!(summary.critical, 2);
        assert_eq!(summary.warnings, 2);
        assert_eq!(summary.distinct_actors, 6);
    }

    #[test]
    fn module_and_search_filters_combine() {
        let filter = AuditLogFilter {
            module: Some("payroll".into()),
            search: Some("SARAH".into()),
            ..Default::default()
        };
        let page = view::<AuditLogPage>(&filter, &ctx());
        assert_eq!(page.shown, 1);
        assert_eq!(page.records[0].id, "AUD-5001");
        assert_eq!(page.badges[0].label, "Warning");
    }
}
