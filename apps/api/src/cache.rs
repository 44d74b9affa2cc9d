//! Redis-backed analysis cache, keyed by requester plus a SHA-256 of the raw
//! JD text.
//!
//! The cache is an optimization only: every Redis failure is logged and
//! treated as a miss, never surfaced to the caller.

use redis::AsyncCommands;
use sha2::{Digest, Sha256};
use tracing::warn;
use uuid::Uuid;

use crate::analysis::scorer::AnalysisResult;

/// Hex SHA-256 of the raw JD text.
pub fn jd_hash(jd_text: &str) -> String {
    format!("{:x}", Sha256::digest(jd_text.as_bytes()))
}

pub fn cache_key(user_id: Uuid, jd_hash: &str) -> String {
    format!("jdscore:{user_id}:{jd_hash}")
}

/// Returns the cached result for `key`, or `None` on miss or any Redis/decode
/// failure.
pub async fn get_cached(client: &redis::Client, key: &str) -> Option<AnalysisResult> {
    let mut conn = match client.get_multiplexed_async_connection().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Redis unavailable, treating cache read as a miss: {e}");
            return None;
        }
    };

    let payload: Option<String> = match conn.get(key).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Cache read failed for {key}: {e}");
            return None;
        }
    };

    payload.and_then(|payload| match serde_json::from_str(&payload) {
        Ok(result) => Some(result),
        Err(e) => {
            warn!("Discarding undecodable cache entry {key}: {e}");
            None
        }
    })
}

/// Stores `result` under `key` with a TTL. Failures are logged and swallowed.
pub async fn put_cached(client: &redis::Client, key: &str, result: &AnalysisResult, ttl_secs: u64) {
    let payload = match serde_json::to_string(result) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Could not serialize analysis for cache: {e}");
            return;
        }
    };

    let mut conn = match client.get_multiplexed_async_connection().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Redis unavailable, skipping cache write: {e}");
            return;
        }
    };

    if let Err(e) = conn.set_ex::<_, _, ()>(key, payload, ttl_secs).await {
        warn!("Cache write failed for {key}: {e}");
    }
}
