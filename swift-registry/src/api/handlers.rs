//! SWIFT code handlers.
//!
//! GET    /v1/swift-codes/:swift_code            lookup, headquarters embed branches
//! GET    /v1/swift-codes/country/:country_iso2  all codes of a country
//! POST   /v1/swift-codes                        strict create
//! DELETE /v1/swift-codes/:swift_code            delete
//! GET    /health                                database reachability

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use super::AppState;
use super::dto::{
    BranchResponse, CountryResponse, CreateSwiftCodeRequest, HeadquarterResponse,
    MessageResponse, SwiftCodeResponse,
};
use super::error::ApiError;
use crate::config::repository::swift_codes;
use crate::swift::is_valid_country_iso2;

pub async fn get_swift_code(
    State(state): State<AppState>,
    Path(swift_code): Path<String>,
) -> Result<Json<SwiftCodeResponse>, ApiError> {
    let code = swift_codes::get_by_code(&state.pool, &swift_code).await?;

    if !code.is_headquarter {
        return Ok(Json(SwiftCodeResponse::Branch(code)));
    }

    let branches = swift_codes::get_branches(&state.pool, &code.swift_code).await?;
    Ok(Json(SwiftCodeResponse::Headquarter(HeadquarterResponse::new(
        code, branches,
    ))))
}

pub async fn list_by_country(
    State(state): State<AppState>,
    Path(country_iso2): Path<String>,
) -> Result<Json<CountryResponse>, ApiError> {
    let country_iso2 = country_iso2.trim().to_uppercase();

    if !is_valid_country_iso2(&country_iso2) {
        return Err(ApiError::bad_request(
            "Invalid country code format. Must be 2 letters (ISO-2)",
        ));
    }

    let codes = swift_codes::list_by_country(&state.pool, &country_iso2).await?;
    let country_name = codes
        .first()
        .map(|c| c.country_name.clone())
        .unwrap_or_default();

    Ok(Json(CountryResponse {
        country_iso2,
        country_name,
        swift_codes: codes.into_iter().map(BranchResponse::from).collect(),
    }))
}

pub async fn create_swift_code(
    State(state): State<AppState>,
    payload: Result<Json<CreateSwiftCodeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        log::debug!("Rejected create body: {}", rejection);
        ApiError::bad_request("Invalid request format")
    })?;

    let code = request.into_swift_code();

    if !is_valid_country_iso2(&code.country_iso2) {
        return Err(ApiError::bad_request(format!(
            "Invalid country code '{}'. Must be 2 letters (ISO-2)",
            code.country_iso2
        )));
    }

    swift_codes::create(&state.pool, &code).await?;
    log::info!("Created SWIFT code {}", code.swift_code);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("SWIFT code added successfully")),
    ))
}

pub async fn delete_swift_code(
    State(state): State<AppState>,
    Path(swift_code): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    swift_codes::delete(&state.pool, &swift_code).await?;
    log::info!("Deleted SWIFT code {}", swift_code);

    Ok(Json(MessageResponse::new("SWIFT code deleted successfully")))
}

pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(crate::error::RegistryError::from)?;

    Ok(Json(json!({ "status": "ok" })))
}
