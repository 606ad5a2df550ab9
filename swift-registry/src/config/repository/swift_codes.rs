//! SWIFT code repository
//!
//! Headquarters and branches are related only through the institution
//! prefix of their codes; nothing here stores a parent reference.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::{RegistryError, RegistryResult};
use crate::swift::{SwiftCode, institution_prefix, is_headquarter_code, is_valid_code};

const SELECT_COLUMNS: &str =
    "SELECT swift_code, country_iso2, country_name, bank_name, address, is_headquarter
     FROM swift_codes";

fn row_to_swift_code(row: &SqliteRow) -> Result<SwiftCode, sqlx::Error> {
    Ok(SwiftCode {
        swift_code: row.try_get("swift_code")?,
        country_iso2: row.try_get("country_iso2")?,
        country_name: row.try_get("country_name")?,
        bank_name: row.try_get("bank_name")?,
        address: row.try_get("address")?,
        is_headquarter: row.try_get("is_headquarter")?,
    })
}

/// Insert or replace every record in one transaction.
///
/// A record whose code already exists overwrites all other columns. If any
/// write fails the transaction is dropped without commit, so none of the
/// batch becomes visible. The stored headquarters flag is always derived
/// from the code. Returns the number of records written.
pub async fn bulk_upsert(pool: &SqlitePool, codes: &[SwiftCode]) -> RegistryResult<usize> {
    let mut tx = pool.begin().await?;

    for code in codes {
        sqlx::query(
            "INSERT INTO swift_codes (
                swift_code, country_iso2, country_name, bank_name, address, is_headquarter
             ) VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(swift_code) DO UPDATE SET
                country_iso2 = excluded.country_iso2,
                country_name = excluded.country_name,
                bank_name = excluded.bank_name,
                address = excluded.address,
                is_headquarter = excluded.is_headquarter",
        )
        .bind(&code.swift_code)
        .bind(&code.country_iso2)
        .bind(&code.country_name)
        .bind(&code.bank_name)
        .bind(&code.address)
        .bind(is_headquarter_code(&code.swift_code))
        .execute(&mut *tx)
        .await
        .inspect_err(|e| log::error!("Upsert of {} failed, rolling back batch: {}", code.swift_code, e))?;
    }

    tx.commit().await?;

    log::debug!("Upserted {} SWIFT codes", codes.len());
    Ok(codes.len())
}

/// Fetch a single record by code
pub async fn get_by_code(pool: &SqlitePool, code: &str) -> RegistryResult<SwiftCode> {
    let row = sqlx::query(&format!("{} WHERE swift_code = ?", SELECT_COLUMNS))
        .bind(code)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(row_to_swift_code(&row)?),
        None => Err(RegistryError::code_not_found(code)),
    }
}

/// Branches of the institution `headquarter_code` belongs to, ordered by code.
///
/// Matches records sharing the first six characters, excluding the given
/// code and anything flagged as a headquarters. An empty result is not an
/// error; whether the headquarters itself exists is the caller's concern.
pub async fn get_branches(
    pool: &SqlitePool,
    headquarter_code: &str,
) -> RegistryResult<Vec<SwiftCode>> {
    let Some(prefix) = institution_prefix(headquarter_code) else {
        return Ok(Vec::new());
    };

    let rows = sqlx::query(&format!(
        "{} WHERE substr(swift_code, 1, 6) = ?
           AND swift_code != ?
           AND NOT is_headquarter
         ORDER BY swift_code",
        SELECT_COLUMNS
    ))
    .bind(prefix)
    .bind(headquarter_code)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(row_to_swift_code)
        .collect::<Result<Vec<_>, _>>()?)
}

/// All records of a country, headquarters first, then by code.
///
/// `country_iso2` is matched exactly as stored, so callers upper-case it.
pub async fn list_by_country(
    pool: &SqlitePool,
    country_iso2: &str,
) -> RegistryResult<Vec<SwiftCode>> {
    let rows = sqlx::query(&format!(
        "{} WHERE country_iso2 = ?
         ORDER BY is_headquarter DESC, swift_code",
        SELECT_COLUMNS
    ))
    .bind(country_iso2)
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        return Err(RegistryError::country_not_found(country_iso2));
    }

    Ok(rows
        .iter()
        .map(row_to_swift_code)
        .collect::<Result<Vec<_>, _>>()?)
}

/// Insert a new record, refusing to overwrite an existing code.
///
/// Unlike [`bulk_upsert`], the code must pass the format check. The stored
/// headquarters flag is derived from the code.
pub async fn create(pool: &SqlitePool, code: &SwiftCode) -> RegistryResult<()> {
    if !is_valid_code(&code.swift_code) {
        return Err(RegistryError::MalformedInput(format!(
            "Invalid SWIFT code format: '{}'",
            code.swift_code
        )));
    }

    let result = sqlx::query(
        "INSERT INTO swift_codes (
            swift_code, country_iso2, country_name, bank_name, address, is_headquarter
         ) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&code.swift_code)
    .bind(&code.country_iso2)
    .bind(&code.country_name)
    .bind(&code.bank_name)
    .bind(&code.address)
    .bind(is_headquarter_code(&code.swift_code))
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
            RegistryError::Conflict(format!("SWIFT code '{}' already exists", code.swift_code)),
        ),
        Err(e) => Err(e.into()),
    }
}

/// Delete a record by code
pub async fn delete(pool: &SqlitePool, code: &str) -> RegistryResult<()> {
    let result = sqlx::query("DELETE FROM swift_codes WHERE swift_code = ?")
        .bind(code)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RegistryError::code_not_found(code));
    }

    Ok(())
}
