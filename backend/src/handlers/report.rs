//! Report download handler

use axum::{http::header, response::IntoResponse, Json};
use chrono::Utc;

use crate::error::AppResult;
use crate::services::report::{ReportInput, ReportService};

/// Render an AQI report as a CSV download
pub async fn download_report(Json(input): Json<ReportInput>) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let csv = ReportService::render_csv(&input, now)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        ReportService::file_name(&input.city, now)
    );

    tracing::info!(city = %input.city, rows = 1 + input.horizon.len(), "report generated");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}
