//! Path and query extractors that reject with the API error format

use std::fmt::Display;
use std::str::FromStr;

use axum::extract::{FromRequestParts, RawPathParams};
use axum::http::request::Parts;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;

use super::error::ApiError;

/// Query string extractor.
///
/// Backed by `axum_extra::extract::Query`, so repeated keys such as
/// `member=a&member=b` deserialize into a `Vec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum_extra::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum_extra::extract::Query(value)) => Ok(Query(value)),
            Err(rejection) => Err(ApiError::bad_request(format!(
                "Invalid query parameters: {}",
                rejection
            ))
            .with_code("invalid_query")),
        }
    }
}

/// Path parameter extractor. A rejected single-parameter route names the
/// parameter in the error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Path(value)),
            Err(rejection) => {
                let mut error = ApiError::bad_request(format!(
                    "Invalid path parameter: {}",
                    rejection.body_text()
                ))
                .with_code("invalid_path");

                if let Ok(params) = RawPathParams::from_request_parts(parts, state).await {
                    let keys: Vec<&str> = params.iter().map(|(key, _)| key).collect();
                    if let [key] = keys.as_slice() {
                        error = error.with_param(*key);
                    }
                }

                Err(error)
            }
        }
    }
}

/// Deserialize an optional query value, treating `key=` like an absent key
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

