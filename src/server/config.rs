use super::RequestsLoggingLevel;
use crate::config::RecommendationSettings;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub frontend_dir_path: Option<String>,
    pub recommendations: RecommendationSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3002,
            frontend_dir_path: None,
            recommendations: RecommendationSettings::default(),
        }
    }
}
