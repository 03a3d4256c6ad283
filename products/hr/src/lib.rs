//! HR dashboard pages.
//!
//! Every page owns a literal dataset, a filter and the summary cards derived
//! from it. Nothing is persisted: approvals and profile edits only change
//! the working copy they were made on.

pub mod calendar;
pub mod catalog;
pub mod common;
pub mod error;
pub mod page;
pub mod pages;
pub mod profile;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;

pub use calendar::{MonthGrid, month_grid};
pub use catalog::{catalog, pages_for, report};
pub use error::{HrError, HrResult};
pub use page::{Page, PageContext, PageInfo, PageView, Role, view};
pub use profile::{ProfileEditor, ProfileField, ProfileFields, ProfileInput};

/// Entry point used by the server: the dashboard pinned to one "today".
#[derive(Clone, Copy, Debug)]
pub struct HrModule {
    ctx: PageContext,
}

impl HrModule {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            ctx: PageContext::new(as_of),
        }
    }

    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    pub fn as_of(&self) -> NaiveDate {
        self.ctx.as_of
    }

    /// Navigation entries, optionally limited to one role.
    pub fn pages(&self, role: Option<Role>) -> Vec<PageInfo> {
        match role {
            Some(role) => pages_for(role),
            None => catalog().to_vec(),
        }
    }

    pub fn view<P: Page>(&self, filter: &P::Filter) -> PageView<P::Record, P::Summary> {
        view::<P>(filter, &self.ctx)
    }

    pub fn report(&self, slug: &str, params: &BTreeMap<String, String>) -> HrResult<Value> {
        report(slug, params, &self.ctx)
    }

    pub fn calendar(&self, year: i32, month: u32) -> HrResult<MonthGrid> {
        month_grid(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::ymd, pages::admin::benefits::BenefitsPage};

    #[test]
    fn module_lists_pages_by_role() {
        let module = HrModule::new(ymd(2025, 3, 14));
        assert_eq!(module.pages(None).len(), catalog().len());
        assert!(module
            .pages(Some(Role::Trainer))
            .iter()
            .all(|info| info.role == Role::Trainer));
    }

    #[test]
    fn module_views_use_its_date() {
        let module = HrModule::new(ymd(2025, 3, 14));
        let page = module.view::<BenefitsPage>(&Default::default());
        assert_eq!(page.total as usize, page.records.len());
        assert_eq!(module.as_of(), ymd(2025, 3, 14));
    }
}
