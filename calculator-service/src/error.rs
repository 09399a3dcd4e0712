use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::counter;
use thiserror::Error;

/// Errors a single arithmetic request can fail with. Both are the caller's
/// fault and render as a plain-text 400.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Both a and b should be numbers.")]
    Validation,

    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

impl CalculatorError {
    pub fn reason(&self) -> &'static str {
        match self {
            CalculatorError::Validation => "validation",
            CalculatorError::DivisionByZero => "division_by_zero",
        }
    }
}

impl IntoResponse for CalculatorError {
    fn into_response(self) -> Response {
        counter!("calculator_rejections_total", "reason" => self.reason()).increment(1);

        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn validation_renders_plain_text_400() {
        let response = CalculatorError::Validation.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Both a and b should be numbers.");
    }

    #[test]
    fn division_by_zero_message() {
        assert_eq!(
            CalculatorError::DivisionByZero.to_string(),
            "Division by zero is not allowed."
        );
    }
}
