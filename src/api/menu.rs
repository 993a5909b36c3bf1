//! Menu Item Endpoints

use gloo_net::http::Request;

use crate::config::API_BASE_URL;
use crate::models::MenuItem;

pub async fn list_menu_items() -> Result<Vec<MenuItem>, String> {
    let response = Request::get(&format!("{}/api/menuitems/", API_BASE_URL))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<Vec<MenuItem>>().await.map_err(|e| e.to_string())
}
