//! Request and response bodies

use serde::{Deserialize, Serialize};

use crate::swift::SwiftCode;

/// A record embedded in a headquarters or country listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchResponse {
    pub address: String,
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub is_headquarter: bool,
    pub swift_code: String,
}

impl From<SwiftCode> for BranchResponse {
    fn from(code: SwiftCode) -> Self {
        Self {
            address: code.address,
            bank_name: code.bank_name,
            country_iso2: code.country_iso2,
            is_headquarter: code.is_headquarter,
            swift_code: code.swift_code,
        }
    }
}

/// A headquarters with its branches resolved
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadquarterResponse {
    pub address: String,
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub swift_code: String,
    pub branches: Vec<BranchResponse>,
}

impl HeadquarterResponse {
    pub fn new(headquarter: SwiftCode, branches: Vec<SwiftCode>) -> Self {
        Self {
            address: headquarter.address,
            bank_name: headquarter.bank_name,
            country_iso2: headquarter.country_iso2,
            country_name: headquarter.country_name,
            is_headquarter: true,
            swift_code: headquarter.swift_code,
            branches: branches.into_iter().map(BranchResponse::from).collect(),
        }
    }
}

/// Body of a single-code lookup: headquarters embed branches, branches are flat
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SwiftCodeResponse {
    Headquarter(HeadquarterResponse),
    Branch(SwiftCode),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub swift_codes: Vec<BranchResponse>,
}

/// POST /v1/swift-codes body
///
/// An `isHeadquarter` field is tolerated and ignored; the flag is derived
/// from the code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSwiftCodeRequest {
    pub swift_code: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub bank_name: String,
    #[serde(default)]
    pub address: String,
}

impl CreateSwiftCodeRequest {
    pub fn into_swift_code(self) -> SwiftCode {
        SwiftCode::new(
            self.swift_code,
            self.country_iso2,
            self.country_name,
            self.bank_name,
            self.address,
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
