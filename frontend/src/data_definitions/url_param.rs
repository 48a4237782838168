//! Route-embedded state.
//!
//! Filter state travels in the URL so catalog views stay shareable and
//! survive reloads. The value is CBOR-serialized and URL-safe base64
//! encoded, which keeps arbitrary state out of the path grammar.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};

/// Any route segment type works with the router as long as it implements
/// Display, FromStr and Default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

// Display must produce exactly what FromStr parses
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamParseError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "Failed to decode base64: {}", err),
            Self::Cbor(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = URL_SAFE
            .decode(s.as_bytes())
            .map_err(UrlParamParseError::Base64)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(raw))
            .map_err(UrlParamParseError::Cbor)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::filter_state::{Facet, FacetValue, FilterState};

    #[test]
    fn filter_state_survives_the_url_round_trip() {
        let mut state = FilterState::default();
        state.query = "buck driver".to_string();
        state.high_voltage = true;
        state.toggle_facet_value(Facet::Manufacturer, FacetValue::Id(3));

        let encoded = UrlParam::from(state.clone()).to_string();
        let decoded: UrlParam<FilterState> = encoded.parse().unwrap();
        assert_eq!(decoded.0, state);
    }

    #[test]
    fn garbage_input_is_a_parse_error_not_a_panic() {
        let result = "%%%not-base64%%%".parse::<UrlParam<FilterState>>();
        assert!(result.is_err());
    }
}
