//! Request extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use taskdesk_core::error::CoreError;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and then checked with its
/// `validator` rules.
///
/// A body that is not valid JSON for `T` is rejected as `BAD_REQUEST`; a
/// body that parses but breaks a rule is rejected as `VALIDATION_ERROR`
/// listing every offending field.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(CoreError::from)?;
        Ok(Self(value))
    }
}
