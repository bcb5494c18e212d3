use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::time_logs::core::interval::ActivityInterval;
use crate::modules::time_logs::core::report::{DateRange, ReportBuilder};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequestBody {
    pub logs: Vec<ActivityInterval>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// `POST /api/export`: builds the CSV report for the submitted logs and an
/// optional inclusive date range. Every failure collapses into one generic
/// error payload; no partial CSV is ever returned.
pub async fn handle(body: Result<Json<ExportRequestBody>, JsonRejection>) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(%err, "export rejected: malformed request body");
            return export_failed();
        }
    };

    tracing::debug!(
        logs = body.logs.len(),
        start_date = ?body.start_date,
        end_date = ?body.end_date,
        "export requested"
    );

    // The range only applies when both bounds arrive together.
    let range = match (&body.start_date, &body.end_date) {
        (Some(start), Some(end)) => match DateRange::parse(start, end) {
            Ok(range) => Some(range),
            Err(err) => {
                tracing::warn!(%err, "export rejected: bad date bound");
                return export_failed();
            }
        },
        _ => None,
    };

    let filename = format!(
        "time-log-{}.csv",
        body.start_date.as_deref().unwrap_or("export")
    );

    match ReportBuilder::new(body.logs).date_range(range).build() {
        Ok(report) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ),
            ],
            report.to_csv(),
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(%err, "export failed");
            export_failed()
        }
    }
}

fn export_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to export data" })),
    )
        .into_response()
}
