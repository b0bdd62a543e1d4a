//! Open-Meteo lookups for the `weather` command.
//!
//! Geocodes the city, then fetches current conditions for the first match.
//! Request parameters, response shapes and formatting come from
//! `termfolio_core::weather`; this module only does the I/O.

use termfolio_core::config::weather::{FORECAST_API_URL, GEOCODING_API_URL};
use termfolio_core::weather::{
    ForecastResponse, GeocodingResponse, WeatherReport, failure_lines, first_location,
    forecast_params, geocoding_params,
};
use termfolio_core::{Line, WeatherError};
use web_sys::Url;

use super::fetch::fetch_json;
use crate::error::FetchError;

/// Looks up the weather for `city`, returning the lines to show and whether
/// they describe a failure.
pub async fn fetch_weather(city: &str) -> (Vec<Line>, bool) {
    match lookup(city).await {
        Ok(report) => (report.to_lines(), false),
        Err(e) => (failure_lines(&e.to_string()), true),
    }
}

async fn lookup(city: &str) -> Result<WeatherReport, WeatherError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(WeatherError::EmptyCity);
    }

    let geocoding: GeocodingResponse = get(GEOCODING_API_URL, &geocoding_params(city))
        .await
        .map_err(|e| {
            log::warn!("geocoding lookup for {city:?} failed: {e}");
            WeatherError::Geocoding
        })?;
    let location = first_location(geocoding, city)?;

    let forecast: ForecastResponse = get(FORECAST_API_URL, &forecast_params(&location))
        .await
        .map_err(|e| {
            log::warn!("forecast for {} failed: {e}", location.name);
            WeatherError::Forecast
        })?;

    Ok(WeatherReport::new(&location, &forecast))
}

async fn get<T: serde::de::DeserializeOwned>(
    base: &str,
    params: &[(&str, String)],
) -> Result<T, FetchError> {
    let url = build_url(base, params)?;
    fetch_json(&url).await
}

/// Appends `params` to `base` as an encoded query string.
fn build_url(base: &str, params: &[(&str, String)]) -> Result<String, FetchError> {
    let url = Url::new(base).map_err(|_| FetchError::InvalidUrl(base.to_string()))?;
    let query = url.search_params();
    for (key, value) in params {
        query.append(key, value);
    }
    Ok(url.href())
}
