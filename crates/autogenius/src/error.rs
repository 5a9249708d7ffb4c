use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::recommendations::{
    PreferencesError, QuestionnaireError, RecommendationServiceError,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Recommendation(RecommendationServiceError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Recommendation(RecommendationServiceError::UnknownVehicle(_)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Recommendation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Recommendation(err) => write!(f, "recommendation error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Recommendation(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<RecommendationServiceError> for AppError {
    fn from(value: RecommendationServiceError) -> Self {
        Self::Recommendation(value)
    }
}

impl From<PreferencesError> for AppError {
    fn from(value: PreferencesError) -> Self {
        Self::Recommendation(value.into())
    }
}

impl From<QuestionnaireError> for AppError {
    fn from(value: QuestionnaireError) -> Self {
        Self::Recommendation(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::recommendations::VehicleId;

    #[test]
    fn recommendation_errors_map_to_client_statuses() {
        let missing = AppError::from(RecommendationServiceError::UnknownVehicle(VehicleId::from(
            "9",
        )));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let inverted = AppError::from(PreferencesError::InvertedBudget { min: 5, max: 1 });
        assert_eq!(inverted.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(inverted.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn config_errors_are_server_failures() {
        let error = AppError::from(ConfigError::InvalidPort {
            value: "abc".to_string(),
        });
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
