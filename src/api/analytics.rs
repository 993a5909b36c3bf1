//! Analytics Endpoints

use gloo_net::http::Request;

use crate::config::API_BASE_URL;
use crate::models::AnalyticsReport;

pub async fn fetch_analytics() -> Result<AnalyticsReport, String> {
    let response = Request::get(&format!("{}/api/analytics/", API_BASE_URL))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<AnalyticsReport>().await.map_err(|e| e.to_string())
}
