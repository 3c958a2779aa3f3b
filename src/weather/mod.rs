//! Weather snapshot provider.
//!
//! Best-effort lookup of current conditions, attached to sessions at save
//! time. Lookups carry a short timeout and a single-TTL cache; every
//! failure path degrades to a fallback value so a save never blocks on,
//! or fails because of, the weather.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::Deserialize;
use std::time::{Duration, Instant};

/// Condition stored when no lookup ever succeeded.
pub const FALLBACK_CONDITION: &str = "Unknown";

#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub condition: String,
    pub description: String,
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Deserialize)]
struct ApiResponse {
    weather: Vec<ApiWeather>,
    main: ApiMain,
}

#[derive(Deserialize)]
struct ApiWeather {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct ApiMain {
    temp: f64,
    humidity: f64,
}

pub struct WeatherService {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    city: String,
    cache_ttl: Duration,
    cache: Option<(Instant, WeatherReport)>,
}

impl WeatherService {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        Self::from_parts(
            cfg.weather_base_url.clone(),
            cfg.weather_api_key.clone(),
            cfg.weather_city.clone(),
            cfg.weather_timeout_secs,
            cfg.weather_cache_ttl_secs,
        )
    }

    pub fn from_parts(
        base_url: String,
        api_key: String,
        city: String,
        timeout_secs: u64,
        cache_ttl_secs: u64,
    ) -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::WeatherUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key,
            city,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache: None,
        })
    }

    /// Perform the upstream lookup. Timeouts, non-2xx statuses, malformed
    /// payloads and a missing API key all surface as `WeatherUnavailable`.
    pub fn current_conditions(&self) -> AppResult<WeatherReport> {
        if self.api_key.is_empty() {
            return Err(AppError::WeatherUnavailable(
                "no API key configured".to_string(),
            ));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", self.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .map_err(|e| AppError::WeatherUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::WeatherUnavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: ApiResponse = response
            .json()
            .map_err(|e| AppError::WeatherUnavailable(e.to_string()))?;

        let entry = body
            .weather
            .first()
            .ok_or_else(|| AppError::WeatherUnavailable("empty weather payload".to_string()))?;

        Ok(WeatherReport {
            condition: entry.main.clone(),
            description: entry.description.clone(),
            temperature: body.main.temp,
            humidity: body.main.humidity,
        })
    }

    /// Best-effort condition string for attaching to a session.
    ///
    /// Never fails: a fresh cache entry is served directly; otherwise the
    /// provider is queried and cached. On failure the last-known-good
    /// value is reused if one exists, else the literal fallback.
    pub fn snapshot_condition(&mut self) -> String {
        let now = Instant::now();

        if let Some((at, report)) = &self.cache {
            if now.duration_since(*at) < self.cache_ttl {
                return report.condition.clone();
            }
        }

        match self.current_conditions() {
            Ok(report) => {
                let condition = report.condition.clone();
                self.cache = Some((now, report));
                condition
            }
            Err(e) => {
                warning(format!("Weather lookup failed: {}", e));
                self.cache
                    .as_ref()
                    .map(|(_, r)| r.condition.clone())
                    .unwrap_or_else(|| FALLBACK_CONDITION.to_string())
            }
        }
    }
}
