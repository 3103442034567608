//! Routing Export Handler
//!
//! Accepts one planning workbook per request, runs the routing
//! derivation, and returns the result workbook as a binary download.

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::{error, info};

use crate::{spool::RequestSpool, AppState};
use fabrica_models::RESULT_FILENAME;
use fabrica_utils::{derive_routing, parse_workbook_path, write_result_file, RoutingError};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Upload a planning workbook and download the derived routing table.
///
/// POST /api/v1/routing/export
pub async fn export_routing(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    // Get file from multipart
    let field = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read upload: {}", e)))?
        .ok_or((StatusCode::BAD_REQUEST, "No file provided".to_string()))?;

    let filename = field
        .file_name()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown.xlsx".to_string());

    let data = field
        .bytes()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read file data: {}", e)))?;

    state.metrics.workbooks_total.inc();

    // Spool the upload; the guard removes both files on every exit path
    let spool = RequestSpool::create(&state.config.upload.spool_dir).map_err(error_response)?;
    tokio::fs::write(&spool.upload_path, &data)
        .await
        .map_err(|e| error_response(RoutingError::from(e)))?;

    let grids = parse_workbook_path(&spool.upload_path).map_err(error_response)?;
    let entries = derive_routing(&grids.request_rows, &grids.bom_rows);
    state.metrics.entries_total.inc_by(entries.len() as u64);
    info!(
        filename = %filename,
        entries = entries.len(),
        "derived routing table"
    );

    write_result_file(&entries, &spool.result_path).map_err(error_response)?;
    let result = tokio::fs::read(&spool.result_path)
        .await
        .map_err(|e| error_response(RoutingError::from(e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{RESULT_FILENAME}\""),
            ),
        ],
        result,
    ))
}

fn error_response(error: RoutingError) -> (StatusCode, String) {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(error = %error, "workbook processing failed");
    }
    (status, error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use calamine::{open_workbook_from_rs, Reader, Xlsx};
    use rust_xlsxwriter::Workbook;
    use tower::ServiceExt;

    use crate::create_app;
    use fabrica_models::{BOM_SHEET, REQUEST_SHEET, RESULT_FILENAME, RESULT_SHEET};
    use fabrica_utils::AppConfig;

    const BOUNDARY: &str = "fabrica-test-boundary";

    /// Request sheet approving ABC12, BOM sheet with one V3 row marked
    /// for Extrusion and Packaging.
    fn fixture_workbook(sheets: &[&str]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        for name in sheets {
            let sheet = workbook.add_worksheet();
            sheet.set_name(*name).unwrap();
            if *name == REQUEST_SHEET {
                sheet.write_string(2, 2, "ABC12").unwrap();
            } else {
                sheet.write_string(4, 2, "ABC12").unwrap();
                sheet.write_string(4, 3, "V3").unwrap();
                sheet.write_string(4, 50, "X").unwrap();
                sheet.write_string(4, 55, "X").unwrap();
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    fn multipart_request(file: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"file\"; filename=\"planning.xlsx\"\r\n",
        );
        body.extend_from_slice(format!("Content-Type: {XLSX_CONTENT_TYPE}\r\n\r\n").as_bytes());
        body.extend_from_slice(file);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/routing/export")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn test_config(spool_dir: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.upload.spool_dir = spool_dir.to_string_lossy().into_owned();
        config
    }

    #[tokio::test]
    async fn test_export_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_app(&test_config(dir.path())).unwrap();

        let response = app
            .oneshot(multipart_request(&fixture_workbook(&[
                REQUEST_SHEET,
                BOM_SHEET,
            ])))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains(RESULT_FILENAME));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let cursor = std::io::Cursor::new(body.to_vec());
        let mut workbook: Xlsx<_> = open_workbook_from_rs(cursor).unwrap();
        let range = workbook.worksheet_range(RESULT_SHEET).unwrap().unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        // Header, Extrusion, Packaging, Packaging clone
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1][1], "4BC121");
        assert_eq!(rows[1][3], "4");
        assert_eq!(rows[2][1], "ABC12");
        assert_eq!(rows[2][3], "4");
        assert_eq!(rows[3][1], "ABC12");
        assert_eq!(rows[3][3], "99");

        // Spool drained once the response is produced
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_missing_sheet_is_client_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_app(&test_config(dir.path())).unwrap();

        let response = app
            .oneshot(multipart_request(&fixture_workbook(&[REQUEST_SHEET])))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let message = String::from_utf8(body.to_vec()).unwrap();
        assert!(message.contains(BOM_SHEET));

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_workbook_cleans_spool() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_app(&test_config(dir.path())).unwrap();

        let response = app
            .oneshot(multipart_request(b"not a workbook at all"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_empty_multipart_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_app(&test_config(dir.path())).unwrap();

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/routing/export")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(format!("--{BOUNDARY}--\r\n")))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
