use serde::{Serialize, Serializer};
use utoipa::ToSchema;

/// Largest integer a double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Documented request shape. Handlers never deserialize into this directly:
/// bodies are parsed into [`crate::models::Operands`] so that non-numeric
/// operands map to the validation error instead of a JSON rejection.
#[derive(Debug, ToSchema)]
pub struct OperationRequest {
    #[schema(example = 2)]
    pub a: f64,
    #[schema(example = 3)]
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct OperationResponse {
    #[serde(serialize_with = "serialize_number")]
    #[schema(example = 5)]
    pub result: f64,
}

impl OperationResponse {
    pub fn new(result: f64) -> Self {
        Self { result }
    }
}

/// Print numbers the way JSON clients expect: `5` rather than `5.0` for
/// integral values. Non-finite values become `null`.
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "calculator-service")]
    pub service: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: f64) -> String {
        serde_json::to_string(&OperationResponse::new(result)).unwrap()
    }

    #[test]
    fn integral_results_print_without_fraction() {
        assert_eq!(render(5.0), r#"{"result":5}"#);
        assert_eq!(render(-12.0), r#"{"result":-12}"#);
        assert_eq!(render(-0.0), r#"{"result":0}"#);
    }

    #[test]
    fn fractional_results_print_as_floats() {
        assert_eq!(render(2.5), r#"{"result":2.5}"#);

        let body: serde_json::Value = serde_json::from_str(&render(1e300)).unwrap();
        assert!(body["result"].is_f64());
        assert_eq!(body["result"].as_f64(), Some(1e300));
    }

    #[test]
    fn non_finite_results_print_as_null() {
        assert_eq!(render(f64::INFINITY), r#"{"result":null}"#);
        assert_eq!(render(f64::NAN), r#"{"result":null}"#);
    }
}
