use async_graphql::{InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, PLACEHOLDER, StatusTone, average, deserialize_flag, percentage, ymd},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "trainer-assessments";

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct AssessmentResult {
    pub id: String,
    pub trainee: String,
    pub program: String,
    pub score: u32,
    pub passing_score: u32,
    pub passed: bool,
    pub taken_on: NaiveDate,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct AssessmentFilter {
    pub program: Option<String>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub passed: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct AssessmentSummary {
    pub assessments: u32,
    pub pass_rate: f64,
    pub average_score: f64,
    /// Highest scorer; the first listed wins a tie.
    pub top_performer: String,
}

pub struct AssessmentsPage;

impl Page for AssessmentsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Assessments",
        role: Role::Trainer,
        description: "Scores from end-of-module assessments",
    };

    type Record = AssessmentResult;
    type Filter = AssessmentFilter;
    type Summary = AssessmentSummary;

    #[rustfmt::skip]
    fn records() -> Vec<AssessmentResult> {
        vec![
            result("AS-501", "Emily Davis", "Leadership Essentials", 88, 70, ymd(2025, 3, 4)),
            result("AS-502", "Ryan Foster", "Leadership Essentials", 64, 70, ymd(2025, 3, 4)),
            result("AS-503", "Grace Liu", "Giving Effective Feedback", 92, 75, ymd(2025, 3, 12)),
            result("AS-504", "Omar Haddad", "Giving Effective Feedback", 75, 75, ymd(2025, 3, 12)),
            result("AS-505", "Nina Petrova", "Anti-Bribery and Corruption", 96, 80, ymd(2025, 1, 30)),
            result("AS-506", "James Wilson", "Anti-Bribery and Corruption", 71, 80, ymd(2025, 1, 30)),
            result("AS-507", "Lisa Wang", "Leadership Essentials", 81, 70, ymd(2025, 3, 4)),
        ]
    }

    fn matches(filter: &AssessmentFilter, record: &AssessmentResult, _ctx: &PageContext) -> bool {
        filter
            .program
            .as_deref()
            .is_none_or(|p| p.eq_ignore_ascii_case(&record.program))
            && filter.passed.is_none_or(|passed| passed == record.passed)
    }

    fn badge(record: &AssessmentResult, _ctx: &PageContext) -> Badge {
        if record.passed {
            Badge::new("Passed", StatusTone::Success)
        } else {
            Badge::new("Failed", StatusTone::Danger)
        }
    }

    fn summarize(records: &[AssessmentResult], _ctx: &PageContext) -> AssessmentSummary {
        let passed = records.iter().filter(|r| r.passed).count();
        let top_performer = records
            .iter()
            .reduce(|best, r| if r.score > best.score { r } else { best })
            .map_or_else(|| PLACEHOLDER.to_string(), |r| r.trainee.clone());
        AssessmentSummary {
            assessments: records.len() as u32,
            pass_rate: percentage(passed as f64, records.len() as f64),
            average_score: average(records.iter().map(|r| r.score)),
            top_performer,
        }
    }

    fn sort(_filter: &AssessmentFilter, records: &mut [AssessmentResult]) {
        records.sort_by(|a, b| b.score.cmp(&a.score));
    }
}

fn result(
    id: &str,
    trainee: &str,
    program: &str,
    score: u32,
    passing_score: u32,
    taken_on: NaiveDate,
) -> AssessmentResult {
    AssessmentResult {
        id: id.into(),
        trainee: trainee.into(),
        program: program.into(),
        score,
        passing_score,
        passed: score >= passing_score,
        taken_on,
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
    fn passing_score_is_inclusive() {
        let results = AssessmentsPage::records();
        let omar = results.iter().find(|r| r.id == "AS-504").unwrap();
        assert!(omar.passed);
        let ryan = results.iter().find(|r| r.id == "AS-502").unwrap();
        assert!(!ryan.passed);
    }

    #[test]
    fn summary_over_all_results() {
        let summary = AssessmentsPage::summarize(&AssessmentsPage::records(), &ctx());
        // 5 of 7 passed
        assert_eq!(summary.pass_rate, 71.4);
        assert_eq!(summary.average_score, 81.0);
        assert_eq!(summary.top_performer, "Nina Petrova");
    }

    #[test]
    fn empty_results_use_placeholder() {
        let summary = AssessmentsPage::summarize(&[], &ctx());
        assert_eq!(summary.top_performer, PLACEHOLDER);
        assert_eq!(summary.pass_rate, 0.0);
    }

    #[test]
    fn failed_filter_within_program() {
        let filter = AssessmentFilter {
            program: Some("Leadership Essentials".into()),
            passed: Some(false),
        };
        let page = view::<AssessmentsPage>(&filter, &ctx());
        assert_eq!(page.shown, 1);
        assert_eq!(page.records[0].trainee, "Ryan Foster");
        assert_eq!(page.badges[0].label, "Failed");
    }
}
