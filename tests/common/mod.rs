#![allow(dead_code)]

use weather_lookup::{app::settings::RuntimeSettings, cli::Cli};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const API_KEY: &str = "test-key";

pub fn lookup_cli(server: &MockServer, city: &str) -> Cli {
    Cli {
        city: Some(city.to_string()),
        units: None,
        lat: None,
        lon: None,
        api_key: Some(API_KEY.to_string()),
        api_url: Some(format!("{}/data/2.5", server.uri())),
        show_first_group: false,
        skip_first_group: false,
        date: chrono::NaiveDate::from_ymd_opt(2024, 11, 10),
        history: false,
        forget: None,
        from_history: None,
        no_history: false,
        save_settings: false,
    }
}

pub fn settings() -> RuntimeSettings {
    RuntimeSettings::default()
}

pub fn current_payload(city: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
        "base": "stations",
        "main": {
            "temp": 284.25,
            "feels_like": 283.7,
            "temp_min": 283.15,
            "temp_max": 285.45,
            "pressure": 1012,
            "humidity": 88
        },
        "visibility": 10000,
        "wind": { "speed": 5.1, "deg": 230 },
        "sys": { "country": "GB", "sunrise": 1731222000, "sunset": 1731255000 },
        "timezone": 0,
        "id": 2643743,
        "name": city,
        "cod": 200
    })
}

fn forecast_item(dt_txt: &str, temp: f64, main: &str) -> serde_json::Value {
    serde_json::json!({
        "dt": 0,
        "dt_txt": dt_txt,
        "main": {
            "temp": temp,
            "feels_like": temp,
            "temp_min": temp - 0.5,
            "temp_max": temp + 0.5,
            "pressure": 1010,
            "humidity": 70
        },
        "sys": { "pod": "n" },
        "visibility": 10000,
        "weather": [{ "id": 800, "main": main, "description": main.to_lowercase(), "icon": "01n" }],
        "wind": { "speed": 3.0, "deg": 180 }
    })
}

pub fn forecast_payload() -> serde_json::Value {
    let list = vec![
        forecast_item("2024-11-10 18:00:00", 280.15, "Clouds"),
        forecast_item("2024-11-10 21:00:00", 279.15, "Rain"),
        forecast_item("2024-11-11 00:00:00", 278.15, "Snow"),
        forecast_item("2024-11-11 03:00:00", 278.65, "Mist"),
        forecast_item("2024-11-12 00:00:00", 277.15, "Blizzard"),
    ];
    serde_json::json!({
        "cod": "200",
        "message": 0,
        "cnt": list.len(),
        "list": list,
    })
}

pub async fn mount_current(server: &MockServer, city: &str) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", city))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_payload(city)))
        .mount(server)
        .await;
}

pub async fn mount_forecast(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("lat", "51.5085"))
        .and(query_param("lon", "-0.1257"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_not_found(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(server)
        .await;
}
