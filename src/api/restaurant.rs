//! Restaurant Endpoints

use gloo_net::http::Request;

use crate::config::API_BASE_URL;
use crate::models::Restaurant;

pub async fn list_restaurants() -> Result<Vec<Restaurant>, String> {
    let response = Request::get(&format!("{}/api/restaurants/", API_BASE_URL))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<Vec<Restaurant>>().await.map_err(|e| e.to_string())
}
