use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::error::CalculatorError;
use crate::models::Operands;

/// Extracts [`Operands`] from a JSON body. Anything that does not yield two
/// numbers, including a missing or malformed body, is a
/// [`CalculatorError::Validation`].
pub struct OperandsJson(pub Operands);

#[async_trait]
impl<S> FromRequest<S> for OperandsJson
where
    S: Send + Sync,
{
    type Rejection = CalculatorError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Rejected request body");
                CalculatorError::Validation
            })?;

        Operands::try_from(&body).map(OperandsJson)
    }
}
