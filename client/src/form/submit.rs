//! Submit pipeline: transform values, post them, hand the response to a hook.
//!
//! The caller owns the shell transitions around [`run`]: `begin_submit`
//! before, `succeed`/`fail` after. Nothing here retries.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::api::{RemoteAuthError, Transport};

/// Per-form behavior plugged into the pipeline.
pub trait SubmitHooks {
    type Values;
    type Payload: Serialize;
    type Response: DeserializeOwned;

    /// Build the outbound payload from validated values.
    fn mutate(&self, values: &Self::Values) -> Self::Payload;

    /// Run side effects after the remote call succeeded.
    fn on_success(&self, response: Self::Response);
}

/// Transform `values`, post the payload to `route`, decode the response and
/// pass it to `hooks.on_success`.
///
/// # Errors
///
/// Returns [`RemoteAuthError`] if the payload cannot be encoded, the remote
/// call fails, or the response does not decode. `on_success` is not called
/// in any of those cases.
pub async fn run<H, T>(route: &str, values: &H::Values, hooks: &H, transport: &T) -> Result<(), RemoteAuthError>
where
    H: SubmitHooks,
    T: Transport + ?Sized,
{
    let payload = hooks.mutate(values);
    let body = serde_json::to_value(&payload).map_err(|e| RemoteAuthError::Encode(e.to_string()))?;

    log::debug!("submitting form to {route}");
    let raw = transport.post_json(route, &body).await?;
    let response = serde_json::from_value::<H::Response>(raw).map_err(|e| RemoteAuthError::Decode(e.to_string()))?;

    hooks.on_success(response);
    Ok(())
}
