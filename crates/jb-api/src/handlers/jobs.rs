//! Job query API handlers
//!
//! Three read-only operations: paginated listing with filters, fetch by id,
//! and summary statistics. Sibling store reads inside one operation run
//! concurrently; the response waits for all of them, and the first failure
//! fails the whole operation.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use jb_core::PagedResult;
use jb_db::{Job, JobFilter, JobId};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::extractors::{AppState, Pagination};

/// GET /jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    Pagination(page): Pagination,
    Query(query): Query<ListJobsQuery>,
) -> ApiResult<Json<JobListResponse>> {
    let filter = query.into_filter();

    let (jobs, total) = tokio::try_join!(
        state.store.find(&filter, page),
        state.store.count(&filter),
    )
    .map_err(|e| ApiError::store("fetch jobs", e))?;

    Ok(Json(JobListResponse::new(PagedResult::new(
        jobs, total, page,
    ))))
}

/// GET /jobs/:id
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<JobEnvelope>> {
    let id = JobId::parse(&id).map_err(|_| ApiError::invalid_id())?;

    let job = state
        .store
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::store("fetch job", e))?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(JobEnvelope {
        success: true,
        data: JobResponse::from(job),
    }))
}

/// GET /jobs/stats/summary
pub async fn job_stats(State(state): State<AppState>) -> ApiResult<Json<StatsEnvelope>> {
    let unfiltered = JobFilter::default();

    let (total_jobs, companies, categories, types) = tokio::try_join!(
        state.store.count(&unfiltered),
        state.store.distinct_values("company"),
        state.store.distinct_values("category"),
        state.store.group_count("type"),
    )
    .map_err(|e| ApiError::store("fetch job statistics", e))?;

    Ok(Json(StatsEnvelope {
        success: true,
        data: StatsSummary {
            total_jobs,
            total_companies: companies.len(),
            total_categories: categories.len(),
            job_types: types
                .into_iter()
                .map(|g| TypeCount {
                    kind: g.key,
                    count: g.count,
                })
                .collect(),
        },
    }))
}

// DTOs

/// Filter parameters of the listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListJobsQuery {
    pub company: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub location: Option<String>,
    pub search: Option<String>,
}

impl ListJobsQuery {
    fn into_filter(self) -> JobFilter {
        JobFilter {
            company: self.company,
            category: self.category,
            kind: self.kind,
            location: self.location,
            search: self.search,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub posted_at: String,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.to_hex(),
            title: job.title,
            company: job.company,
            description: job.description,
            category: job.category,
            kind: job.kind,
            location: job.location,
            posted_at: job.posted_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub success: bool,
    pub data: Vec<JobResponse>,
    pub pagination: PaginationMeta,
}

impl JobListResponse {
    fn new(result: PagedResult<Job>) -> Self {
        let total_pages = result.total_pages();
        Self {
            success: true,
            pagination: PaginationMeta {
                page: result.page,
                limit: result.limit,
                total: result.total,
                total_pages,
            },
            data: result.items.into_iter().map(JobResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
pub struct JobEnvelope {
    pub success: bool,
    pub data: JobResponse,
}

#[derive(Debug, Serialize)]
pub struct StatsEnvelope {
    pub success: bool,
    pub data: StatsSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_jobs: u64,
    pub total_companies: usize,
    pub total_categories: usize,
    pub job_types: Vec<TypeCount>,
}

#[derive(Debug, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u64,
}
