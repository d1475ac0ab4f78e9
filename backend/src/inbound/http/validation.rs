//! Shared validation helpers for inbound HTTP adapters.
//!
//! Identifiers arrive as raw strings (query or path) and are parsed here so a
//! missing or non-numeric id is a 400 with `{ "field", "code" }` details
//! before any port is called. Extractor failures (malformed JSON, bad query
//! strings) are routed through the same domain error shape.

use std::str::FromStr;

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::web;
use chrono::{DateTime, NaiveDate};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
    InvalidDate,
    MalformedBody,
    MalformedQuery,
    MalformedPath,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::MalformedBody => "malformed_body",
            ErrorCode::MalformedQuery => "malformed_query",
            ErrorCode::MalformedPath => "malformed_path",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be an integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidId.as_str(),
    }))
}

/// Parse a required record id such as `?id=7` or `/pet/7`.
pub(crate) fn parse_record_id<T>(value: Option<&str>, field: FieldName) -> Result<T, Error>
where
    T: FromStr,
{
    let raw = value
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))?;
    raw.parse().map_err(|_| invalid_id_error(field, raw))
}

/// Parse an optional record id filter; blank values count as absent.
pub(crate) fn parse_optional_record_id<T>(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<T>, Error>
where
    T: FromStr,
{
    match value.filter(|raw| !raw.trim().is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| invalid_id_error(field, raw)),
    }
}

/// Parse a calendar date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
pub(crate) fn parse_optional_date(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|ts| ts.date_naive()))
        .map(Some)
        .map_err(|_| {
            let field = field.as_str();
            Error::invalid_request(format!("{field} must be a date (YYYY-MM-DD)")).with_details(
                json!({
                    "field": field,
                    "value": raw,
                    "code": ErrorCode::InvalidDate.as_str(),
                }),
            )
        })
}

fn malformed(code: ErrorCode, message: String) -> actix_web::Error {
    Error::invalid_request(message)
        .with_details(json!({ "code": code.as_str() }))
        .into()
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    malformed(ErrorCode::MalformedBody, format!("malformed JSON body: {err}"))
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected query string");
    malformed(ErrorCode::MalformedQuery, format!("malformed query string: {err}"))
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected path parameters");
    malformed(ErrorCode::MalformedPath, format!("malformed path: {err}"))
}

/// Extractor configuration that reports malformed input as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Query extractor configuration mirroring [`json_config`].
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

/// Path extractor configuration mirroring [`json_config`].
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}
