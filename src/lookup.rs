//! Path identifiers and the not-found policy.
//!
//! Repositories report absence as `None`; this module decides what an absent
//! or malformed identifier means at the HTTP boundary. Under
//! [`NotFoundPolicy::Legacy`] each endpoint keeps its historical answer (some
//! reply `200` with a zero-valued record, others `404`). Under
//! [`NotFoundPolicy::Strict`] every endpoint answers `400` for a malformed id
//! and `404` for a missing entity.

use std::{fmt, future::Future, str::FromStr};

use axum::extract::{rejection::PathRejection, Path};

use crate::error::AppError;
use crate::store::StoreError;

/// How handlers answer lookups that find nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// Per-endpoint historical behaviour.
    #[default]
    Legacy,
    /// Uniform `400` / `404`.
    Strict,
}

impl FromStr for NotFoundPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "strict" => Ok(Self::Strict),
            other => Err(format!("expected `legacy` or `strict`, got `{other}`")),
        }
    }
}

impl fmt::Display for NotFoundPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// What an endpoint answered for an absent entity under the legacy policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyAbsence {
    /// `200` with a zero-valued record.
    ZeroValue,
    /// `404`.
    NotFound,
}

/// Outcome of resolving a raw path segment to an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    Missing(i64),
    Malformed(String),
}

/// An `:id` segment as extracted by axum, rejection included.
///
/// Handlers take the rejection instead of letting axum answer it, so a
/// segment that does not even decode (`%FF`) still goes through the policy.
pub type PathSegment = Result<Path<String>, PathRejection>;

/// Parse a path segment as an entity identifier.
pub fn parse_path_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Read the identifier out of an extracted segment, or hand back the text
/// that could not be read as one.
pub fn path_id(segment: PathSegment) -> Result<i64, String> {
    match segment {
        Ok(Path(raw)) => parse_path_id(&raw).ok_or(raw),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Undecodable path segment");
            Err(rejection.body_text())
        }
    }
}

impl<T> Lookup<T> {
    /// Read `segment` and, when it holds an identifier, run `find` with it.
    ///
    /// # Errors
    ///
    /// Propagates the store error returned by `find`.
    pub async fn resolve<F, Fut>(segment: PathSegment, find: F) -> Result<Self, StoreError>
    where
        F: FnOnce(i64) -> Fut,
        Fut: Future<Output = Result<Option<T>, StoreError>>,
    {
        let id = match path_id(segment) {
            Ok(id) => id,
            Err(raw) => return Ok(Self::Malformed(raw)),
        };

        Ok(find(id).await?.map_or(Self::Missing(id), Self::Found))
    }
}

impl NotFoundPolicy {
    /// Turn a lookup into the value a handler responds with.
    ///
    /// # Errors
    ///
    /// `AppError::BadRequest` for a malformed id under the strict policy,
    /// `AppError::NotFound` whenever the absence is not answered with a
    /// zero value.
    pub fn settle<T: Default>(
        self,
        lookup: Lookup<T>,
        legacy: LegacyAbsence,
        entity: &str,
    ) -> Result<T, AppError> {
        match (lookup, self, legacy) {
            (Lookup::Found(value), _, _) => Ok(value),
            (_, Self::Legacy, LegacyAbsence::ZeroValue) => Ok(T::default()),
            (Lookup::Malformed(raw), Self::Strict, _) => {
                Err(AppError::BadRequest(format!("invalid {entity} id `{raw}`")))
            }
            (Lookup::Malformed(raw), Self::Legacy, _) => {
                Err(AppError::NotFound(format!("{entity} `{raw}`")))
            }
            (Lookup::Missing(id), _, _) => Err(AppError::NotFound(format!("{entity} {id}"))),
        }
    }
}
