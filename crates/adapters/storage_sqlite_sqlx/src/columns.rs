//! Column decoding helpers shared by the repositories.

use std::str::FromStr;

use shopfront_domain::time::Timestamp;

/// Map a column decoding failure into the error `FromRow` expects.
pub(crate) fn decode<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

/// Parse a typed id stored as TEXT.
pub(crate) fn id<T>(value: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    T::from_str(value).map_err(decode)
}

/// Parse an RFC 3339 timestamp stored as TEXT.
pub(crate) fn timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(decode)
}
