use chrono::{DateTime, Datelike, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use crate::models::SurfForecast;
use crate::services::cache::{CacheKey, CacheManager};

/// Default lifetime of a cached forecast
pub const DEFAULT_FORECAST_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

const BIG_WAVE_SPOTS: &[&str] = &[
    "us-hi-pipeline",
    "us-hi-sunset",
    "pt-nazare",
    "za-dungeons",
    "mx-puerto-escondido",
];
const MEDIUM_WAVE_SPOTS: &[&str] = &["id-uluwatu", "au-superbank", "pt-ericeira", "fr-hossegor"];
const SMALL_WAVE_SPOTS: &[&str] = &["us-hi-waikiki", "cr-nosara", "es-tarifa", "lk-hikkaduwa"];

const TROPICAL_SPOTS: &[&str] = &["id-uluwatu", "ph-siargao", "mv-cokes", "cr-nosara", "mx-sayulita"];
const TEMPERATE_SPOTS: &[&str] = &["us-ca-malibu", "au-byron-bay", "nz-raglan", "za-jeffreys-bay"];
const COLD_SPOTS: &[&str] = &["us-ca-ocean-beach", "cl-pichilemu", "za-dungeons"];

const WORLD_CLASS_SPOTS: &[&str] = &["us-hi-pipeline", "id-uluwatu", "pt-nazare", "pe-chicama"];

/// Forecast provider backed by a deterministic generator
///
/// No live forecast feed is wired up; each destination gets a plausible
/// forecast that is stable for a UTC day and cached per id.
#[derive(Clone)]
pub struct ForecastService {
    cache: CacheManager<SurfForecast>,
}

impl ForecastService {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            cache: CacheManager::new(capacity, ttl),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(1_000, DEFAULT_FORECAST_CACHE_TTL)
    }

    pub async fn get_forecast(&self, destination_id: &str) -> SurfForecast {
        let key = CacheKey::forecast(destination_id);
        if let Some(forecast) = self.cache.get(&key).await {
            return forecast;
        }

        let forecast = generate_forecast(destination_id, Utc::now());
        tracing::debug!(
            "Generated forecast for {}: rating {}",
            destination_id,
            forecast.rating
        );
        self.cache.set(&key, forecast.clone()).await;
        forecast
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Generate the forecast for a destination as of `at`
///
/// Every value except `last_updated` depends only on the id and the UTC day.
pub fn generate_forecast(destination_id: &str, at: DateTime<Utc>) -> SurfForecast {
    let mut rng = ChaCha8Rng::seed_from_u64(daily_seed(destination_id, at));

    let base_height = base_wave_height(destination_id, &mut rng);
    let wave_height = (base_height + (rng.gen::<f64>() - 0.5) * 3.0).max(0.5);
    let wave_period = 8.0 + rng.gen::<f64>() * 12.0;
    let wind_speed = rng.gen::<f64>() * 25.0;
    let wind_direction = COMPASS_POINTS[rng.gen_range(0..COMPASS_POINTS.len())];
    let wave_direction = COMPASS_POINTS[rng.gen_range(0..COMPASS_POINTS.len())];

    let base_temp = base_temperature(destination_id);
    let air_temp = (base_temp + (rng.gen::<f64>() - 0.5) * 8.0).round();
    let water_temp = (base_temp - 2.0 + (rng.gen::<f64>() - 0.5) * 6.0).round();

    let rating = surf_rating(wave_height, wave_period, wind_speed, destination_id);

    SurfForecast {
        wave_height: (wave_height * 10.0).round() / 10.0,
        wave_direction: wave_direction.to_string(),
        wave_period: (wave_period * 10.0).round() / 10.0,
        wind_speed: wind_speed.round(),
        wind_direction: wind_direction.to_string(),
        water_temp,
        air_temp,
        rating,
        conditions: describe_conditions(rating, wind_speed, wave_height),
        last_updated: at,
    }
}

/// 32-bit rolling string hash (`h = h * 31 + c`), made non-negative
pub fn hash_code(text: &str) -> u32 {
    let hash = text
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));
    hash.unsigned_abs()
}

fn daily_seed(destination_id: &str, at: DateTime<Utc>) -> u64 {
    let day = at.date_naive().num_days_from_ce() as u32;
    (u64::from(hash_code(destination_id)) << 32) | u64::from(day)
}

/// Typical wave height in feet for the spot class, with daily variation
fn base_wave_height(destination_id: &str, rng: &mut ChaCha8Rng) -> f64 {
    if BIG_WAVE_SPOTS.contains(&destination_id) {
        6.0 + rng.gen::<f64>() * 8.0
    } else if MEDIUM_WAVE_SPOTS.contains(&destination_id) {
        3.0 + rng.gen::<f64>() * 4.0
    } else if SMALL_WAVE_SPOTS.contains(&destination_id) {
        1.0 + rng.gen::<f64>() * 3.0
    } else {
        2.0 + rng.gen::<f64>() * 5.0
    }
}

fn base_temperature(destination_id: &str) -> f64 {
    if TROPICAL_SPOTS.contains(&destination_id) {
        28.0
    } else if TEMPERATE_SPOTS.contains(&destination_id) {
        20.0
    } else if COLD_SPOTS.contains(&destination_id) {
        15.0
    } else {
        22.0
    }
}

/// Surf rating 1-10 from wave height (ft), period (s) and wind (mph)
pub fn surf_rating(wave_height: f64, wave_period: f64, wind_speed: f64, destination_id: &str) -> u8 {
    let mut rating: i32 = 5;

    if (2.0..=8.0).contains(&wave_height) {
        rating += 2;
    } else if (1.0..=10.0).contains(&wave_height) {
        rating += 1;
    }

    if wave_period >= 12.0 {
        rating += 2;
    } else if wave_period >= 8.0 {
        rating += 1;
    }

    if wind_speed <= 5.0 {
        rating += 2;
    } else if wind_speed <= 10.0 {
        rating += 1;
    } else if wind_speed >= 20.0 {
        rating -= 2;
    }

    if WORLD_CLASS_SPOTS.contains(&destination_id) {
        rating += 1;
    }

    rating.clamp(1, 10) as u8
}

pub fn describe_conditions(rating: u8, wind_speed: f64, wave_height: f64) -> String {
    let wind = if wind_speed <= 5.0 {
        "light offshore"
    } else if wind_speed <= 10.0 {
        "moderate winds"
    } else if wind_speed <= 15.0 {
        "strong winds"
    } else {
        "very windy"
    };

    let waves = if wave_height <= 2.0 {
        "small waves"
    } else if wave_height <= 5.0 {
        "good size waves"
    } else if wave_height <= 8.0 {
        "large waves"
    } else {
        "big waves"
    };

    let quality = match rating {
        8..=u8::MAX => "Excellent",
        6..=7 => "Good",
        4..=5 => "Fair",
        _ => "Poor",
    };

    format!("{} conditions - {}, {}", quality, waves, wind)
}
