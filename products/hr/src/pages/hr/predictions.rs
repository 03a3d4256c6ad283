//! Attrition "predictions". The scores are fixed sample values; nothing here
//! runs a model.

use async_graphql::{Enum, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::{
    common::{Badge, StatusTone, Toned, average, matches_choice},
    page::{Page, PageContext, PageInfo, Role},
};

pub const SLUG: &str = "hr-predictions";

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            70.. => RiskLevel::High,
            40..=69 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

impl Toned for RiskLevel {
    fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            RiskLevel::Low => StatusTone::Success,
            RiskLevel::Medium => StatusTone::Warning,
            RiskLevel::High => StatusTone::Danger,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Stable,
    Falling,
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct AttritionPrediction {
    pub employee_id: String,
    pub employee: String,
    pub department: String,
    /// 0-100.
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub confidence: f64,
    pub factors: Vec<String>,
    pub trend: Trend,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct PredictionFilter {
    pub risk_level: Option<RiskLevel>,
    pub department: Option<String>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct PredictionSummary {
    pub employees_scored: u32,
    pub high_risk: u32,
    pub average_score: f64,
    pub average_confidence: f64,
}

pub struct PredictionsPage;

impl Page for PredictionsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "AI Insights",
        role: Role::Hr,
        description: "Attrition risk predictions and contributing factors",
    };

    type Record = AttritionPrediction;
    type Filter = PredictionFilter;
    type Summary = PredictionSummary;

    #[rustfmt::skip]
    fn records() -> Vec<AttritionPrediction> {
        vec![
            prediction("EMP-004", "David Wilson", "Finance", 78, 0.86, &["Extended leave", "No promotion in 4 years"], Trend::Rising),
            prediction("EMP-006", "Carlos Rivera", "Sales", 55, 0.71, &["Probation period", "Quota attainment below 60%"], Trend::Stable),
            prediction("EMP-003", "Emily Davis", "Engineering", 22, 0.90, &["Recent promotion"], Trend::Falling),
            prediction("EMP-007", "Aisha Khan", "Marketing", 64, 0.68, &["Market salary gap", "Manager change"], Trend::Rising),
            prediction("EMP-002", "Michael Chen", "Engineering", 35, 0.82, &["High overtime"], Trend::Stable),
            prediction("EMP-005", "Jennifer Lee", "Sales", 12, 0.93, &[], Trend::Falling),
            prediction("EMP-009", "Lisa Anderson", "Learning & Development", 71, 0.74, &["Role scope reduced", "Low engagement survey"], Trend::Rising),
        ]
    }

    fn matches(
        filter: &PredictionFilter,
        record: &AttritionPrediction,
        _ctx: &PageContext,
    ) -> bool {
        matches_choice(filter.risk_level.as_ref(), &record.risk_level)
            && matches_choice(filter.department.as_ref(), &record.department)
    }

    fn badge(record: &AttritionPrediction, _ctx: &PageContext) -> Badge {
        record.risk_level.badge()
    }

    fn summarize(records: &[AttritionPrediction], _ctx: &PageContext) -> PredictionSummary {
        PredictionSummary {
            employees_scored: records.len() as u32,
            high_risk: records
                .iter()
                .filter(|p| p.risk_level == RiskLevel::High)
                .count() as u32,
            average_score: average(records.iter().map(|p| p.risk_score)),
            average_confidence: average(records.iter().map(|p| p.confidence * 100.0)),
        }
    }

    fn sort(_filter: &PredictionFilter, records: &mut [AttritionPrediction]) {
        records.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    }
}

#[allow(clippy::too_many_arguments)]
fn prediction(
    employee_id: &str,
    employee: &str,
    department: &str,
    risk_score: u32,
    confidence: f64,
    factors: &[&str],
    trend: Trend,
) -> AttritionPrediction {
    AttritionPrediction {
        employee_id: employee_id.into(),
        employee: employee.into(),
        department: department.into(),
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        confidence,
        factors: factors.iter().map(|f| f.to_string()).collect(),
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::ymd, page::view};

    fn ctx() -> PageContext {
        PageContext::new(ymd(2025, 3, 14))
    }

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Low);
    }

    #[test]
    fn high_risk_view_sorted_by_score() {
        let filter = PredictionFilter {
            risk_level: Some(RiskLevel::High),
            ..Default::default()
        };
        let page = view::<PredictionsPage>(&filter, &ctx());
        let scores: Vec<_> = page.records.iter().map(|p| p.risk_score).collect();
        assert_eq!(scores, [78, 71]);
        assert_eq!(page.summary.high_risk, 2);
    }

    #[test]
    fn averages() {
        let summary = PredictionsPage::summarize(&PredictionsPage::records(), &ctx());
        // 337 / 7
        assert_eq!(summary.average_score, 48.1);
        assert_eq!(summary.employees_scored, 7);
    }
}
