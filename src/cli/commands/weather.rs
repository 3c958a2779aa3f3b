use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::weather::{FALLBACK_CONDITION, WeatherService};

/// One-shot current-conditions report for the configured city.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let service = WeatherService::new(cfg)?;

    match service.current_conditions() {
        Ok(report) => {
            println!("🌤 Weather for {}:", cfg.weather_city);
            println!("  Condition:   {} ({})", report.condition, report.description);
            println!("  Temperature: {:.1}°C", report.temperature);
            println!("  Humidity:    {:.0}%", report.humidity);
        }
        Err(e) => {
            warning(e.to_string());
            println!("  Condition: {}", FALLBACK_CONDITION);
        }
    }

    Ok(())
}
