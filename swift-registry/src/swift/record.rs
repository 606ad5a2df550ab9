//! The `SwiftCode` record and its construction from raw ingestion rows

use serde::{Deserialize, Serialize};

use super::code::is_headquarter_code;
use crate::error::{RegistryError, RegistryResult};

/// Positional columns of the ingestion sheet
mod cols {
    pub const COUNTRY_ISO2: usize = 0;
    pub const SWIFT_CODE: usize = 1;
    // 2: code type, unused
    pub const BANK_NAME: usize = 3;
    pub const ADDRESS: usize = 4;
    // 5: town name, unused
    pub const COUNTRY_NAME: usize = 6;

    pub const MIN_FIELDS: usize = 7;
}

/// A bank identifier record as stored in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwiftCode {
    #[serde(rename = "swiftCode")]
    pub swift_code: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    #[serde(rename = "countryName")]
    pub country_name: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    pub address: String,
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
}

impl SwiftCode {
    /// Build a record, deriving the headquarters flag from the code.
    ///
    /// The code and country fields are trimmed and the country fields
    /// upper-cased. Bank name and address are kept verbatim.
    pub fn new(
        swift_code: impl Into<String>,
        country_iso2: impl Into<String>,
        country_name: impl Into<String>,
        bank_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        let swift_code = swift_code.into().trim().to_string();
        let is_headquarter = is_headquarter_code(&swift_code);

        Self {
            country_iso2: country_iso2.into().trim().to_uppercase(),
            country_name: country_name.into().trim().to_uppercase(),
            bank_name: bank_name.into(),
            address: address.into(),
            swift_code,
            is_headquarter,
        }
    }

    /// Normalize one raw ingestion row.
    ///
    /// Reads country ISO2, code, bank name, address and country name from
    /// columns 0, 1, 3, 4 and 6. Rows shorter than seven fields are rejected.
    pub fn from_row<S: AsRef<str>>(fields: &[S]) -> RegistryResult<Self> {
        if fields.len() < cols::MIN_FIELDS {
            return Err(RegistryError::MalformedRow {
                expected: cols::MIN_FIELDS,
                actual: fields.len(),
            });
        }

        Ok(Self::new(
            fields[cols::SWIFT_CODE].as_ref(),
            fields[cols::COUNTRY_ISO2].as_ref(),
            fields[cols::COUNTRY_NAME].as_ref(),
            fields[cols::BANK_NAME].as_ref(),
            fields[cols::ADDRESS].as_ref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_headquarter_row() {
        let code = SwiftCode::from_row(&row(&[
            "TR",
            "TESTTR00XXX",
            "",
            "Test Bank",
            "Test Address",
            "",
            "TURKEY",
        ]))
        .unwrap();

        assert_eq!(
            code,
            SwiftCode {
                swift_code: "TESTTR00XXX".to_string(),
                country_iso2: "TR".to_string(),
                country_name: "TURKEY".to_string(),
                bank_name: "Test Bank".to_string(),
                address: "Test Address".to_string(),
                is_headquarter: true,
            }
        );
    }

    #[test]
    fn test_branch_row() {
        let code = SwiftCode::from_row(&row(&[
            "TR",
            "TESTTR00001",
            "BIC11",
            "Test Bank",
            "Branch Street 1",
            "ISTANBUL",
            "TURKEY",
        ]))
        .unwrap();

        assert!(!code.is_headquarter);
        assert_eq!(code.swift_code, "TESTTR00001");
    }

    #[test]
    fn test_country_fields_uppercased_and_trimmed() {
        let code = SwiftCode::from_row(&row(&[
            " pl ",
            "AAAAPLPWXXX ",
            "",
            "Some Bank",
            "  ",
            "",
            "poland",
        ]))
        .unwrap();

        assert_eq!(code.country_iso2, "PL");
        assert_eq!(code.country_name, "POLAND");
        assert_eq!(code.swift_code, "AAAAPLPWXXX");
        assert_eq!(code.address, "  ");
        assert!(code.is_headquarter);
    }

    #[test]
    fn test_bank_name_and_address_kept_verbatim() {
        let code = SwiftCode::from_row(&row(&[
            "TR",
            "TESTTR00XXX",
            "",
            "  Test Bank ",
            " Addr ",
            "",
            "TURKEY",
        ]))
        .unwrap();

        assert_eq!(code.bank_name, "  Test Bank ");
        assert_eq!(code.address, " Addr ");
    }

    #[test]
    fn test_bank_name_keeps_case() {
        let code = SwiftCode::from_row(&row(&[
            "DE", "DEUTDEFF", "", "Deutsche Bank AG", "Taunusanlage 12", "", "Germany",
        ]))
        .unwrap();

        assert_eq!(code.bank_name, "Deutsche Bank AG");
        assert!(!code.is_headquarter);
    }

    #[test]
    fn test_short_row_is_malformed() {
        let err = SwiftCode::from_row(&row(&["TR", "TESTTR00XXX", "", "Test Bank"])).unwrap_err();

        assert!(matches!(
            err,
            RegistryError::MalformedRow {
                expected: 7,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_json_field_names() {
        let code = SwiftCode::new("TESTTR00XXX", "TR", "TURKEY", "Test Bank", "Addr");
        let json = serde_json::to_value(&code).unwrap();

        assert_eq!(json["swiftCode"], "TESTTR00XXX");
        assert_eq!(json["countryISO2"], "TR");
        assert_eq!(json["countryName"], "TURKEY");
        assert_eq!(json["bankName"], "Test Bank");
        assert_eq!(json["address"], "Addr");
        assert_eq!(json["isHeadquarter"], true);
    }
}
