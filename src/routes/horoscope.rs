//! Handler for the horoscope endpoint.
//!
//! This is the only decision-making route: validate the requested sign,
//! resolve text through the provider-or-fallback path, then attach the
//! randomized extras. After validation succeeds nothing here can fail, which
//! is what keeps the "always 200 for a valid sign" contract honest.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::horoscope::HoroscopeResponse;
use crate::state::AppState;
use crate::zodiac;

/// Request body for `POST /get_horoscope`.
///
/// A missing `zodiac_sign` field deserializes to the empty string and is
/// rejected by the validator like any other unknown sign.
#[derive(Debug, Default, Deserialize)]
pub struct HoroscopeRequest {
    #[serde(default)]
    pub zodiac_sign: String,
}

/// Horoscope handler.
#[instrument(name = "horoscope::get", skip(state, request), fields(sign = %request.zodiac_sign))]
pub async fn get_horoscope(
    State(state): State<AppState>,
    Json(request): Json<HoroscopeRequest>,
) -> Result<Json<HoroscopeResponse>, AppError> {
    let sign = zodiac::validate(&request.zodiac_sign)?;

    let (text, source) = state.horoscopes.resolve(sign).await;

    let response = HoroscopeResponse::assemble(sign, text, source, &mut rand::thread_rng());
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_deserializes_to_empty_sign() {
        let request: HoroscopeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.zodiac_sign, "");
    }

    #[test]
    fn field_is_passed_through_untouched() {
        let request: HoroscopeRequest =
            serde_json::from_str(r#"{"zodiac_sign":"  Leo "}"#).unwrap();
        assert_eq!(request.zodiac_sign, "  Leo ");
    }
}
