use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::debug;

use crate::domain::weather::{
    Condition, Coordinates, CurrentConditions, ForecastSample, TemperatureScale,
};

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResponse {
    pub samples: Vec<ForecastSample>,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(OPENWEATHER_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Current conditions for a free-text city query. No `units` parameter is sent,
    /// so temperatures come back in Kelvin.
    pub async fn current_by_city(&self, city: &str) -> Result<CurrentConditions> {
        debug!(city, "fetching current conditions by city");
        let request = self.get("weather").query(&[("q", city)]);
        let payload: CurrentResponse = send_json(request, "current conditions").await?;
        Ok(payload.into_conditions())
    }

    pub async fn current_by_coords(&self, coords: Coordinates) -> Result<CurrentConditions> {
        debug!(
            lat = coords.latitude,
            lon = coords.longitude,
            "fetching current conditions by coordinates"
        );
        let request = self.get("weather").query(&coord_query(coords));
        let payload: CurrentResponse = send_json(request, "current conditions").await?;
        Ok(payload.into_conditions())
    }

    pub async fn forecast_by_coords(&self, coords: Coordinates) -> Result<ForecastResponse> {
        debug!(
            lat = coords.latitude,
            lon = coords.longitude,
            "fetching 5-day forecast"
        );
        let request = self.get("forecast").query(&coord_query(coords));
        let payload: ForecastPayload = send_json(request, "forecast").await?;
        let samples: Vec<ForecastSample> =
            payload.list.into_iter().map(ForecastItem::into_sample).collect();
        debug!(count = ?payload.cnt, received = samples.len(), "forecast decoded");
        Ok(ForecastResponse { samples })
    }

    fn get(&self, endpoint: &str) -> RequestBuilder {
        self.client
            .get(format!("{}/{endpoint}", self.base_url))
            .query(&[("appid", self.api_key.as_str())])
    }
}

fn coord_query(coords: Coordinates) -> [(&'static str, String); 2] {
    [
        ("lat", coords.latitude.to_string()),
        ("lon", coords.longitude.to_string()),
    ]
}

async fn send_json<T: serde::de::DeserializeOwned>(
    request: RequestBuilder,
    what: &str,
) -> Result<T> {
    let response = request
        .send()
        .await
        .with_context(|| format!("{what} request failed"))?
        .error_for_status()
        .with_context(|| format!("{what} request returned non-success status"))?;

    response
        .json()
        .await
        .with_context(|| format!("failed to parse {what} payload"))
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    coord: CoordBlock,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
    main: MainBlock,
    wind: WindBlock,
    #[serde(default)]
    sys: SysBlock,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct CoordBlock {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherBlock {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct SysBlock {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    cnt: Option<usize>,
    #[serde(default)]
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt_txt: String,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
    wind: WindBlock,
}

fn condition_fields(weather: Vec<WeatherBlock>) -> (String, String) {
    weather
        .into_iter()
        .next()
        .map(|w| (w.main, w.description))
        .unwrap_or_else(|| (Condition::Clear.key().to_string(), String::new()))
}

impl CurrentResponse {
    fn into_conditions(self) -> CurrentConditions {
        let (condition_main, description) = condition_fields(self.weather);
        CurrentConditions {
            condition_main,
            description,
            temperature: self.main.temp,
            temperature_min: self.main.temp_min,
            temperature_max: self.main.temp_max,
            scale: TemperatureScale::Kelvin,
            wind_speed: self.wind.speed,
            humidity_percent: self.main.humidity,
            city: self.name,
            country: self.sys.country,
            coordinates: Coordinates::new(self.coord.lat, self.coord.lon),
        }
    }
}

impl ForecastItem {
    fn into_sample(self) -> ForecastSample {
        let (condition_main, description) = condition_fields(self.weather);
        ForecastSample {
            timestamp_text: self.dt_txt,
            temperature: self.main.temp,
            temperature_min: self.main.temp_min,
            temperature_max: self.main.temp_max,
            wind_speed: self.wind.speed,
            humidity_percent: self.main.humidity,
            condition_main,
            description,
        }
    }
}
