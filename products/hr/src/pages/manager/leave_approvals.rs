//! Team leave requests awaiting a manager decision.
//!
//! Approving or rejecting only changes the [`ApprovalBoard`] it was made on;
//! the literal request list always starts from the same state.

use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    common::{Badge, Toned, days_inclusive, matches_choice, ymd},
    error::{HrError, HrResult},
    page::{Page, PageContext, PageInfo, PageView, Role, view_records},
    pages::leave::{LeaveStatus, LeaveType},
};

pub const SLUG: &str = "manager-leave-approvals";

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct LeaveRequest {
    pub id: String,
    pub employee: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub reason: String,
    pub status: LeaveStatus,
}

#[derive(Clone, Debug, Default, InputObject, Deserialize)]
#[serde(default)]
pub struct LeaveRequestFilter {
    pub status: Option<LeaveStatus>,
    pub leave_type: Option<LeaveType>,
}

#[derive(Clone, Debug, PartialEq, SimpleObject, Serialize)]
pub struct LeaveApprovalSummary {
    pub pending: u32,
    pub approved: u32,
    pub rejected: u32,
    pub days_requested: u32,
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approve,
    Reject,
}

#[derive(Clone, Debug, InputObject, Deserialize)]
pub struct LeaveDecision {
    pub request_id: String,
    pub decision: Decision,
}

pub struct LeaveApprovalsPage;

impl Page for LeaveApprovalsPage {
    const INFO: PageInfo = PageInfo {
        slug: SLUG,
        title: "Leave Approvals",
        role: Role::Manager,
        description: "Approve or reject team leave requests",
    };

    type Record = LeaveRequest;
    type Filter = LeaveRequestFilter;
    type Summary = LeaveApprovalSummary;

    #[rustfmt::skip]
    fn records() -> Vec<LeaveRequest> {
        vec![
            request("LR-301", "Emily Davis", LeaveType::Annual, ymd(2025, 3, 24), ymd(2025, 3, 28), "Family vacation", LeaveStatus::Pending),
            request("LR-302", "Ryan Foster", LeaveType::Sick, ymd(2025, 3, 11), ymd(2025, 3, 12), "Flu", LeaveStatus::Approved),
            request("LR-303", "Grace Liu", LeaveType::Personal, ymd(2025, 3, 21), ymd(2025, 3, 21), "Moving apartments", LeaveStatus::Pending),
            request("LR-304", "Omar Haddad", LeaveType::Parental, ymd(2025, 3, 3), ymd(2025, 4, 25), "Birth of child", LeaveStatus::Approved),
            request("LR-305", "Nina Petrova", LeaveType::Annual, ymd(2025, 4, 14), ymd(2025, 4, 18), "Conference and travel", LeaveStatus::Pending),
            request("LR-306", "Ryan Foster", LeaveType::Unpaid, ymd(2025, 2, 17), ymd(2025, 2, 21), "Extended trip", LeaveStatus::Rejected),
        ]
    }

    fn matches(filter: &LeaveRequestFilter, record: &LeaveRequest, _ctx: &PageContext) -> bool {
        matches_choice(filter.status.as_ref(), &record.status)
            && matches_choice(filter.leave_type.as_ref(), &record.leave_type)
    }

    fn badge(record: &LeaveRequest, _ctx: &PageContext) -> Badge {
        record.status.badge()
    }

    fn summarize(records: &[LeaveRequest], _ctx: &PageContext) -> LeaveApprovalSummary {
        let count = |status| records.iter().filter(|r| r.status == status).count() as u32;
        LeaveApprovalSummary {
            pending: count(LeaveStatus::Pending),
            approved: count(LeaveStatus::Approved),
            rejected: count(LeaveStatus::Rejected),
            days_requested: records.iter().map(|r| r.days).sum(),
        }
    }

    fn sort(_filter: &LeaveRequestFilter, records: &mut [LeaveRequest]) {
        // pending first, then by start date
        records.sort_by_key(|r| (r.status != LeaveStatus::Pending, r.start_date));
    }
}

/// A manager's working copy of the request list.
#[derive(Clone, Debug)]
pub struct ApprovalBoard {
    requests: Vec<LeaveRequest>,
}

impl Default for ApprovalBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ApprovalBoard {
    pub fn new() -> Self {
        Self {
            requests: LeaveApprovalsPage::records(),
        }
    }

    pub fn requests(&self) -> &[LeaveRequest] {
        &self.requests
    }

    pub fn decide(&mut self, request_id: &str, decision: Decision) -> HrResult<&LeaveRequest> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| HrError::not_found("leave request", request_id))?;
        if request.status != LeaveStatus::Pending {
            return Err(HrError::AlreadyDecided(request_id.to_string()));
        }
        request.status = match decision {
            Decision::Approve => LeaveStatus::Approved,
            Decision::Reject => LeaveStatus::Rejected,
        };
        info!(request = %request.id, ?decision, "leave request decided");
        Ok(request)
    }

    pub fn apply(&mut self, decisions: &[LeaveDecision]) -> HrResult<()> {
        for item in decisions {
            self.decide(&item.request_id, item.decision)?;
        }
        Ok(())
    }

    pub fn summary(&self, ctx: &PageContext) -> LeaveApprovalSummary {
        LeaveApprovalsPage::summarize(&self.requests, ctx)
    }

    pub fn view(
        &self,
        filter: &LeaveRequestFilter,
        ctx: &PageContext,
    ) -> PageView<LeaveRequest, LeaveApprovalSummary> {
        view_records::<LeaveApprovalsPage>(self.requests.clone(), filter, ctx)
    }
}

fn request(
    id: &str,
    employee: &str,
    leave_type: LeaveType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: &str,
    status: LeaveStatus,
) -> LeaveRequest {
    LeaveRequest {
        id: id.into(),
        employee: employee.into(),
        leave_type,
        start_date,
        end_date,
        days: days_inclusive(start_date, end_date),
        reason: reason.into(),
        status,
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
    fn approving_updates_board_but_not_dataset() {
        let mut board = ApprovalBoard::new();
        let decided = board.decide("LR-301", Decision::Approve).unwrap();
        assert_eq!(decided.status, LeaveStatus::Approved);
        assert_eq!(board.summary(&ctx()).pending, 2);

        let fresh = LeaveApprovalsPage::summarize(&LeaveApprovalsPage::records(), &ctx());
        assert_eq!(fresh.pending, 3);
    }

    #[test]
    fn decided_requests_cannot_change() {
        let mut board = ApprovalBoard::new();
        assert_eq!(
            board.decide("LR-302", Decision::Reject).unwrap_err(),
            HrError::AlreadyDecided("LR-302".into())
        );
    }

    #[test]
    fn unknown_request_is_not_found() {
        let mut board = ApprovalBoard::new();
        let err = board.decide("LR-999", Decision::Approve).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn board_view_reflects_applied_decisions() {
        let mut board = ApprovalBoard::default();
        board
            .apply(&[
                LeaveDecision {
                    request_id: "LR-303".into(),
                    decision: Decision::Reject,
                },
                LeaveDecision {
                    request_id: "LR-305".into(),
                    decision: Decision::Approve,
                },
            ])
            .unwrap();
        let filter = LeaveRequestFilter {
            status: Some(LeaveStatus::Pending),
            ..Default::default()
        };
        let page = board.view(&filter, &ctx());
        assert_eq!(page.shown, 1);
        assert_eq!(page.records[0].id, "LR-301");
        assert_eq!(page.summary.rejected, 2);
    }

    #[test]
    fn pending_rows_come_first() {
        let page = view::<LeaveApprovalsPage>(&LeaveRequestFilter::default(), &ctx());
        let ids: Vec<_> = page.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            ["LR-303", "LR-301", "LR-305", "LR-306", "LR-304", "LR-302"]
        );
    }

    #[test]
    fn day_counts_are_inclusive() {
        let summary = LeaveApprovalsPage::summarize(&LeaveApprovalsPage::records(), &ctx());
        // 5 + 2 + 1 + 54 + 5 + 5
        assert_eq!(summary.days_requested, 72);
    }
}
