//! Menu PDF Upload Endpoint

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::API_BASE_URL;

/// Send the selected PDF to the backend as a multipart form.
///
/// Only the response status is meaningful; the success payload is ignored.
pub async fn upload_menu_pdf(file: &File) -> Result<(), String> {
    let form = FormData::new().map_err(|e| format!("{:?}", e))?;
    form.append_with_blob("pdf_file", file).map_err(|e| format!("{:?}", e))?;

    let response = Request::post(&format!("{}/process-menu-pdf/", API_BASE_URL))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("server responded with status {}", response.status()))
    }
}
