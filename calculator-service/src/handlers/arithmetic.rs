use axum::Json;

use crate::dtos::{OperationRequest, OperationResponse};
use crate::error::CalculatorError;
use crate::models::Operation;
use crate::services::evaluate;
use crate::utils::OperandsJson;

fn respond(
    operation: Operation,
    OperandsJson(operands): OperandsJson,
) -> Result<Json<OperationResponse>, CalculatorError> {
    evaluate(operation, operands).map(|result| Json(OperationResponse::new(result)))
}

/// Add two numbers
#[utoipa::path(
    post,
    path = "/add",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "a + b", body = OperationResponse),
        (status = 400, description = "Both a and b should be numbers.", body = String, content_type = "text/plain")
    ),
    tag = "Arithmetic"
)]
pub async fn add(operands: OperandsJson) -> Result<Json<OperationResponse>, CalculatorError> {
    respond(Operation::Add, operands)
}

/// Subtract b from a
#[utoipa::path(
    post,
    path = "/subtract",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "a - b", body = OperationResponse),
        (status = 400, description = "Both a and b should be numbers.", body = String, content_type = "text/plain")
    ),
    tag = "Arithmetic"
)]
pub async fn subtract(operands: OperandsJson) -> Result<Json<OperationResponse>, CalculatorError> {
    respond(Operation::Subtract, operands)
}

/// Multiply two numbers
#[utoipa::path(
    post,
    path = "/multiply",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "a * b", body = OperationResponse),
        (status = 400, description = "Both a and b should be numbers.", body = String, content_type = "text/plain")
    ),
    tag = "Arithmetic"
)]
pub async fn multiply(operands: OperandsJson) -> Result<Json<OperationResponse>, CalculatorError> {
    respond(Operation::Multiply, operands)
}

/// Divide a by b
///
/// Operand types are checked before the divisor, so a non-numeric body never
/// reports division by zero.
#[utoipa::path(
    post,
    path = "/divide",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "a / b", body = OperationResponse),
        (status = 400, description = "Both a and b should be numbers. | Division by zero is not allowed.", body = String, content_type = "text/plain")
    ),
    tag = "Arithmetic"
)]
pub async fn divide(operands: OperandsJson) -> Result<Json<OperationResponse>, CalculatorError> {
    respond(Operation::Divide, operands)
}
