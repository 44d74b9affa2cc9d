use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted analysis. `result` holds the full `AnalysisResult` JSON
/// verbatim; `score`/`ats_score` are denormalized for cheap listing queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub jd_hash: String,
    pub jd_text: String,
    pub score: i32,
    pub ats_score: i32,
    pub result: Value,
    pub created_at: DateTime<Utc>,
}
