//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyze;
use crate::analysis::scorer::AnalysisResult;
use crate::cache::{cache_key, get_cached, jd_hash, put_cached};
use crate::errors::AppError;
use crate::models::analysis::AnalysisRow;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

/// Max accepted JD length. Enforced here — the core accepts any string.
const MAX_JD_CHARS: usize = 10_000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub user_id: Uuid,
    pub resume_data: ResumeDocument,
    pub jd: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Absent when the result was served from cache.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<Uuid>,
    pub cached: bool,
    pub result: AnalysisResult,
}

/// POST /api/v1/analysis/jd-score
///
/// Validates the JD, serves a cached result when the same user has already
/// analyzed the same posting, otherwise runs the pipeline once and persists
/// the result verbatim.
pub async fn handle_jd_score(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.jd.trim().is_empty() {
        return Err(AppError::Validation("jd cannot be empty".to_string()));
    }
    if request.jd.chars().count() > MAX_JD_CHARS {
        return Err(AppError::Validation(format!(
            "jd exceeds {MAX_JD_CHARS} characters"
        )));
    }

    let hash = jd_hash(&request.jd);
    let key = cache_key(request.user_id, &hash);

    if let Some(result) = get_cached(&state.redis, &key).await {
        info!("Analysis cache hit for user {}", request.user_id);
        return Ok(Json(AnalyzeResponse {
            analysis_id: None,
            cached: true,
            result,
        }));
    }

    let result = analyze(&request.jd, &request.resume_data);

    let analysis_id = Uuid::new_v4();
    let result_json =
        serde_json::to_value(&result).map_err(|e| AppError::Internal(e.into()))?;
    sqlx::query(
        r#"
        INSERT INTO analyses (id, user_id, jd_hash, jd_text, score, ats_score, result)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(analysis_id)
    .bind(request.user_id)
    .bind(&hash)
    .bind(&request.jd)
    .bind(result.score as i32)
    .bind(result.ats_score.score as i32)
    .bind(&result_json)
    .execute(&state.db)
    .await?;

    put_cached(&state.redis, &key, &result, state.config.cache_ttl_secs).await;

    info!(
        "Stored analysis {analysis_id} for user {} (score {}, ats {})",
        request.user_id, result.score, result.ats_score.score
    );

    Ok(Json(AnalyzeResponse {
        analysis_id: Some(analysis_id),
        cached: false,
        result,
    }))
}

/// GET /api/v1/analysis/:id
///
/// Returns a previously persisted analysis row.
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
) -> Result<Json<AnalysisRow>, AppError> {
    let row = sqlx::query_as::<_, AnalysisRow>("SELECT * FROM analyses WHERE id = $1")
        .bind(analysis_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {analysis_id} not found")))?;

    Ok(Json(row))
}
