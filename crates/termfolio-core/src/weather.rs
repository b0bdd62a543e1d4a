//! Weather report model for the `weather` command.
//!
//! The network round trip (geocoding, then forecast) happens in the display;
//! this module owns the request parameters, the response shapes and the
//! conversion into output lines.

use serde::Deserialize;

use crate::config::weather::CURRENT_FIELDS;
use crate::error::WeatherError;
use crate::output::Line;

/// Geocoding API response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeocodingResponse {
    /// Absent when nothing matched.
    #[serde(default)]
    pub results: Vec<GeoLocation>,
}

/// One geocoding match.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub admin1: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Forecast API response (only the `current` block is requested).
#[derive(Clone, Debug, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentConditions,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub weather_code: u32,
    pub wind_speed_10m: f64,
}

/// Icon and description for a WMO weather code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherInfo {
    pub icon: &'static str,
    pub description: &'static str,
}

/// Maps a WMO weather code to an icon and description.
pub fn weather_info(code: u32) -> WeatherInfo {
    let (icon, description) = match code {
        0 => ("☀️", "Clear sky"),
        1 => ("🌤️", "Mainly clear"),
        2 => ("⛅", "Partly cloudy"),
        3 => ("☁️", "Overcast"),
        45 => ("🌫️", "Foggy"),
        48 => ("🌫️", "Depositing rime fog"),
        51 => ("🌦️", "Light drizzle"),
        53 => ("🌦️", "Moderate drizzle"),
        55 => ("🌦️", "Dense drizzle"),
        61 => ("🌧️", "Slight rain"),
        63 => ("🌧️", "Moderate rain"),
        65 => ("🌧️", "Heavy rain"),
        71 => ("❄️", "Slight snow"),
        73 => ("❄️", "Moderate snow"),
        75 => ("❄️", "Heavy snow"),
        80 => ("🌧️", "Slight rain showers"),
        81 => ("🌧️", "Moderate rain showers"),
        82 => ("🌧️", "Violent rain showers"),
        95 => ("⛈️", "Thunderstorm"),
        96 => ("⛈️", "Thunderstorm with slight hail"),
        99 => ("⛈️", "Thunderstorm with heavy hail"),
        _ => ("🌤️", "Unknown"),
    };
    WeatherInfo { icon, description }
}

/// Query parameters for the geocoding request.
pub fn geocoding_params(city: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", city.to_string()),
        ("count", "1".to_string()),
        ("language", "en".to_string()),
        ("format", "json".to_string()),
    ]
}

/// Query parameters for the forecast request.
pub fn forecast_params(location: &GeoLocation) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", location.latitude.to_string()),
        ("longitude", location.longitude.to_string()),
        ("current", CURRENT_FIELDS.to_string()),
        ("timezone", "auto".to_string()),
    ]
}

/// The best geocoding match for `city`.
pub fn first_location(
    response: GeocodingResponse,
    city: &str,
) -> Result<GeoLocation, WeatherError> {
    response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))
}

/// Current weather, formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherReport {
    pub location: String,
    pub country: String,
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub wind_speed: String,
    pub icon: String,
}

impl WeatherReport {
    pub fn new(location: &GeoLocation, forecast: &ForecastResponse) -> Self {
        let current = &forecast.current;
        let info = weather_info(current.weather_code);
        Self {
            location: location.name.clone(),
            country: location.country.clone(),
            temperature: format!("{}°C", round_half_up(current.temperature_2m)),
            condition: info.description.to_string(),
            humidity: format!("{}%", current.relative_humidity_2m),
            wind_speed: format!("{} km/h", round_half_up(current.wind_speed_10m)),
            icon: info.icon.to_string(),
        }
    }

    pub fn to_lines(&self) -> Vec<Line> {
        let place = if self.country.is_empty() {
            self.location.clone()
        } else {
            format!("{}, {}", self.location, self.country)
        };
        vec![
            Line::heading(format!("📍 {place}")),
            Line::text("Current Weather"),
            Line::Empty,
            Line::success(format!("{} {}  {}", self.icon, self.temperature, self.condition)),
            Line::field("💧 Humidity", &self.humidity),
            Line::field("💨 Wind Speed", &self.wind_speed),
            Line::Empty,
            Line::info(
                "💡 Powered by Open-Meteo • Try: \"weather Tokyo\", \"weather Hanoi\", \"weather Paris\"",
            ),
        ]
    }
}

/// Lines shown while the lookup is in flight.
pub fn pending_lines(city: &str) -> Vec<Line> {
    vec![Line::info(format!("⏳ Fetching weather data for {city}..."))]
}

/// Lines shown when the lookup fails.
pub fn failure_lines(message: &str) -> Vec<Line> {
    vec![Line::error(format!("❌ {message}"))]
}

/// Rounds halves toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo() -> GeoLocation {
        GeoLocation {
            name: "Tokyo".to_string(),
            country: "Japan".to_string(),
            admin1: Some("Tokyo".to_string()),
            latitude: 35.6895,
            longitude: 139.69171,
        }
    }

    #[test]
    fn test_weather_info() {
        assert_eq!(weather_info(0).description, "Clear sky");
        assert_eq!(weather_info(95).description, "Thunderstorm");
        assert_eq!(weather_info(42).description, "Unknown");
    }

    #[test]
    fn test_parse_geocoding_response() {
        let json = r#"{"results":[{"id":1850147,"name":"Tokyo","latitude":35.6895,
            "longitude":139.69171,"country":"Japan","admin1":"Tokyo"}],"generationtime_ms":0.5}"#;
        let response: GeocodingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(first_location(response, "tokyo"), Ok(tokyo()));
    }

    #[test]
    fn test_no_results_is_not_found() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms":0.2}"#).unwrap();
        let err = first_location(response, "Atlantis").unwrap_err();
        assert_eq!(
            err.to_string(),
            "City \"Atlantis\" not found. Please check the spelling."
        );
    }

    #[test]
    fn test_report_from_forecast() {
        let json = r#"{"latitude":35.7,"longitude":139.7,"current":{"time":"2024-01-01T12:00",
            "temperature_2m":12.5,"relative_humidity_2m":48,"weather_code":2,"wind_speed_10m":7.4}}"#;
        let forecast: ForecastResponse = serde_json::from_str(json).unwrap();
        let report = WeatherReport::new(&tokyo(), &forecast);

        assert_eq!(report.temperature, "13°C");
        assert_eq!(report.humidity, "48%");
        assert_eq!(report.wind_speed, "7 km/h");
        assert_eq!(report.condition, "Partly cloudy");
        assert_eq!(report.to_lines()[0], Line::heading("📍 Tokyo, Japan"));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-0.2), 0);
    }

    #[test]
    fn test_request_params() {
        let params = geocoding_params("New York");
        assert_eq!(params[0], ("name", "New York".to_string()));
        assert!(params.contains(&("count", "1".to_string())));

        let params = forecast_params(&tokyo());
        assert!(params.contains(&("timezone", "auto".to_string())));
        assert!(params.contains(&("current", CURRENT_FIELDS.to_string())));
    }
}
