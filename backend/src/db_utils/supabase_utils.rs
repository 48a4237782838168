//! Thin PostgREST client for the Supabase-hosted catalog database.
//!
//! All calls go through the REST endpoint (`{SUPABASE_URL}/rest/v1/...`)
//! with the anon key in both `apikey` and `Authorization` headers.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

fn supabase_rest_url(path: &str) -> String {
    let base_url =
        std::env::var("SUPABASE_URL").unwrap_or("http://127.0.0.1:54321".to_string());
    format!("{}/rest/v1/{}", base_url, path)
}

fn supabase_anon_key() -> String {
    std::env::var("SUPABASE_ANON_KEY").unwrap_or_default()
}

fn authorized_client(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    let key = supabase_anon_key();
    request
        .header("apikey", key.clone())
        .header("Authorization", format!("Bearer {}", key))
}

/// Runs a PostgREST GET and deserializes the JSON array response.
/// `query` is the raw query string, e.g. `select=*,manufacturer:manufacturers(id,name)`.
pub async fn supabase_select<T: DeserializeOwned + std::fmt::Debug>(
    table: &str,
    query: &str,
) -> anyhow::Result<Vec<T>> {
    let t0 = std::time::Instant::now();
    let url = format!("{}?{}", supabase_rest_url(table), query);
    let client = reqwest::Client::new();

    let response = authorized_client(client.get(&url)).send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("supabase select on {}: {}: {}", table, status, response_txt);
    }
    let dt_ms = t0.elapsed().as_millis();
    info!("supabase select on {}: {} bytes in {}ms", table, response_txt.len(), dt_ms);

    let rows: Vec<T> = serde_json::from_str(&response_txt)?;
    Ok(rows)
}

/// Inserts or updates a row, resolving conflicts on the primary key.
pub async fn supabase_upsert<T: Serialize>(table: &str, row: &T) -> anyhow::Result<()> {
    let url = format!("{}?on_conflict=id", supabase_rest_url(table));
    let client = reqwest::Client::new();

    let response = authorized_client(client.post(&url))
        .header("Prefer", "resolution=merge-duplicates")
        .json(row)
        .send()
        .await?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let response_txt = response.text().await?;
        anyhow::bail!("supabase upsert on {}: {}: {}", table, status, response_txt);
    }
    Ok(())
}

pub async fn supabase_delete(table: &str, id: u64) -> anyhow::Result<()> {
    let url = format!("{}?id=eq.{}", supabase_rest_url(table), id);
    let client = reqwest::Client::new();

    let response = authorized_client(client.delete(&url)).send().await?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let response_txt = response.text().await?;
        anyhow::bail!("supabase delete on {}: {}: {}", table, status, response_txt);
    }
    Ok(())
}
