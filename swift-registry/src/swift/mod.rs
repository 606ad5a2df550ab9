//! SWIFT code data model

pub mod code;
pub mod record;

pub use code::{institution_prefix, is_headquarter_code, is_valid_code, is_valid_country_iso2};
pub use record::SwiftCode;
