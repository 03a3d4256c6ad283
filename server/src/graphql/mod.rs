mod roles;

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ErrorExtensions, Object, Schema, SimpleObject,
};
use chrono::NaiveDate;
use platform_api::{ApiError, ApiResult};
use products_hr::{HrError, HrModule, MonthGrid, PageInfo, Role};
use serde::Serialize;
use tracing::instrument;

pub use roles::{AdminQuery, AuditorQuery, EmployeeQuery, HrQuery, ManagerQuery, TrainerQuery};

pub type SchemaType = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Shared request data: the dashboard pinned to its configured date.
#[derive(Clone, Debug)]
pub struct GraphqlData {
    pub module: HrModule,
    pub org_name: String,
}

pub fn build_schema(data: GraphqlData) -> SchemaType {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(data)
        .finish()
}

pub(crate) fn graphql_data<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a GraphqlData> {
    ctx.data::<GraphqlData>()
}

pub fn api_error(err: HrError) -> ApiError {
    match err {
        HrError::Render(message) => ApiError::internal(anyhow::anyhow!(message)),
        err if err.is_not_found() => ApiError::not_found(err.to_string()),
        err => ApiError::invalid(err.to_string()),
    }
}

/// [`api_error`] as a GraphQL error carrying its code.
pub(crate) fn graphql_error(err: HrError) -> async_graphql::Error {
    api_error(err).extend()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    #[instrument(name = "graphql.health", skip_all)]
    async fn health(&self) -> ApiResult<HealthPayload> {
        Ok(HealthPayload { ok: true })
    }

    #[instrument(name = "graphql.version", skip_all)]
    async fn version(&self) -> ApiResult<String> {
        Ok(env!("CARGO_PKG_VERSION").to_string())
    }

    #[instrument(name = "graphql.organization", skip_all)]
    async fn organization(&self, ctx: &Context<'_>) -> async_graphql::Result<OrganizationPayload> {
        let data = graphql_data(ctx)?;
        Ok(OrganizationPayload {
            name: data.org_name.clone(),
            as_of: data.module.as_of(),
        })
    }

    /// Navigation entries, optionally for one role.
    #[instrument(name = "graphql.pages", skip(self, ctx))]
    async fn pages(
        &self,
        ctx: &Context<'_>,
        role: Option<Role>,
    ) -> async_graphql::Result<Vec<PageInfo>> {
        Ok(graphql_data(ctx)?.module.pages(role))
    }

    #[instrument(name = "graphql.calendar", skip(self, ctx))]
    async fn calendar(
        &self,
        ctx: &Context<'_>,
        year: i32,
        month: u32,
    ) -> async_graphql::Result<MonthGrid> {
        graphql_data(ctx)?
            .module
            .calendar(year, month)
            .map_err(graphql_error)
    }

    async fn admin(&self) -> AdminQuery {
        AdminQuery
    }

    async fn hr(&self) -> HrQuery {
        HrQuery
    }

    async fn manager(&self) -> ManagerQuery {
        ManagerQuery
    }

    async fn employee(&self) -> EmployeeQuery {
        EmployeeQuery
    }

    async fn auditor(&self) -> AuditorQuery {
        AuditorQuery
    }

    async fn trainer(&self) -> TrainerQuery {
        TrainerQuery
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct HealthPayload {
    pub ok: bool,
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct OrganizationPayload {
    pub name: String,
    pub as_of: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Request;
    use serde_json::json;

    pub(crate) fn test_schema() -> SchemaType {
        let as_of = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        build_schema(GraphqlData {
            module: HrModule::new(as_of),
            org_name: "Acme Corp".into(),
        })
    }

    #[tokio::test]
    async fn health_query_returns_ok() {
        let schema = test_schema();
        let response = schema.execute(Request::new("{ health { ok } }")).await;
        assert!(response.errors.is_empty());
        let body = response.data.into_json().unwrap();
        assert_eq!(body, json!({"health": {"ok": true}}));
    }

    #[tokio::test]
    async fn organization_reports_pinned_date() {
        let response = test_schema()
            .execute(Request::new("{ organization { name asOf } }"))
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let body = response.data.into_json().unwrap();
        assert_eq!(
            body,
            json!({"organization": {"name": "Acme Corp", "asOf": "2025-03-14"}})
        );
    }

    #[tokio::test]
    async fn pages_filter_by_role() {
        let response = test_schema()
            .execute(Request::new("{ pages(role: AUDITOR) { slug role } }"))
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let body = response.data.into_json().unwrap();
        let pages = body["pages"].as_array().unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|p| p["role"] == "AUDITOR"));
    }

    #[tokio::test]
    async fn calendar_counts_leading_blanks() {
        let response = test_schema()
            .execute(Request::new(
                "{ calendar(year: 2024, month: 2) { leadingBlanks daysInMonth } }",
            ))
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let body = response.data.into_json().unwrap();
        assert_eq!(
            body,
            json!({"calendar": {"leadingBlanks": 4, "daysInMonth": 29}})
        );
    }

    #[tokio::test]
    async fn invalid_month_is_bad_input() {
        let response = test_schema()
            .execute(Request::new("{ calendar(year: 2025, month: 13) { daysInMonth } }"))
            .await;
        assert_eq!(response.errors.len(), 1);
        let code = response.errors[0]
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(code, Some(async_graphql::Value::from("INVALID_INPUT")));
    }

    #[test]
    fn domain_errors_map_to_codes() {
        assert_eq!(api_error(HrError::UnknownPage("x".into())).code(), "NOT_FOUND");
        assert_eq!(api_error(HrError::NotEditing).code(), "INVALID_INPUT");
        assert_eq!(api_error(HrError::Render("boom".into())).code(), "INTERNAL");
    }
}
