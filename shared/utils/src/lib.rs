pub mod config;
pub mod error;
pub mod logging;
pub mod routing;
pub mod workbook;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use routing::*;
pub use workbook::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_error_handling() {
        let error = RoutingError::missing_sheet("Thông tin khai BOM");
        assert_eq!(error.error_code(), "MISSING_SHEET");
        assert_eq!(error.http_status_code(), 400);
    }
}
