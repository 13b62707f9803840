use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, put},
    Router,
};
use custom_dns_application::ports::UpsertOutcome;
use custom_dns_domain::{DomainError, RecordType};
use tracing::debug;

use crate::{
    dto::{LookupRecordQuery, RecordListResponse, RecordLookupResponse, SetRecordRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(list_records))
        .route("/records", put(set_record))
        .route("/records/lookup", get(lookup_record))
        .route("/records/{record_type}/{hostname}", delete(delete_record))
}

fn parse_record_type(value: &str) -> Result<RecordType, ApiError> {
    value
        .parse::<RecordType>()
        .map_err(|e| ApiError(DomainError::UnsupportedRecordType(e)))
}

async fn list_records(State(state): State<AppState>) -> Result<Json<RecordListResponse>, ApiError> {
    let listing = state.records.list.execute().await?;
    debug!(
        a = listing.a.len(),
        aaaa = listing.aaaa.len(),
        txt = listing.txt.len(),
        "Custom records listed"
    );
    Ok(Json(RecordListResponse::from_listing(listing)))
}

async fn lookup_record(
    State(state): State<AppState>,
    Query(params): Query<LookupRecordQuery>,
) -> Result<Json<RecordLookupResponse>, ApiError> {
    let hostname = params
        .hostname
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ApiError(DomainError::InvalidDomain("hostname is required".to_string())))?;

    let lookup = state.records.lookup.execute(&hostname).await?;
    Ok(Json(RecordLookupResponse::from_lookup(hostname, lookup)))
}

async fn set_record(
    State(state): State<AppState>,
    Json(req): Json<SetRecordRequest>,
) -> Result<(StatusCode, Json<RecordLookupResponse>), ApiError> {
    let record_type = parse_record_type(&req.record_type)?;

    let outcome = state
        .records
        .set
        .execute(&req.hostname, record_type, req.values, req.ttl)
        .await?;

    let lookup = state.records.lookup.execute(&req.hostname).await?;
    let status = match outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };

    Ok((
        status,
        Json(RecordLookupResponse::from_lookup(req.hostname, lookup)),
    ))
}

async fn delete_record(
    State(state): State<AppState>,
    Path((record_type, hostname)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let record_type = parse_record_type(&record_type)?;
    state.records.delete.execute(&hostname, record_type).await?;
    Ok(StatusCode::NO_CONTENT)
}
