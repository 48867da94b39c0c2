use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use validator::{Validate, ValidationError};

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveSize {
    Small,
    Medium,
    Large,
}

/// Safety details for a surf destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyInfo {
    /// 1-10
    pub overall_safety_rating: u8,
    #[serde(default)]
    pub medical_facilities_nearby: bool,
    #[serde(default)]
    pub lifeguard_presence: bool,
    #[serde(default)]
    pub emergency_contacts: Vec<String>,
    #[serde(default)]
    pub common_hazards: Vec<String>,
    #[serde(default)]
    pub beginner_friendly_times: Vec<String>,
    /// 1-10
    #[serde(default)]
    pub water_quality_rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementLevel {
    Required,
    Recommended,
    Helpful,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: String,
    pub level: RequirementLevel,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingType {
    Accommodation,
    Flights,
    SurfLessons,
    EquipmentRental,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOption {
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    pub provider: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Community quote about a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditQuote {
    pub text: String,
    pub author: String,
    pub url: String,
    pub subreddit: String,
}

/// Surf forecast snapshot for a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfForecast {
    /// Feet
    pub wave_height: f64,
    pub wave_direction: String,
    /// Seconds
    pub wave_period: f64,
    /// mph
    pub wind_speed: f64,
    pub wind_direction: String,
    pub water_temp: f64,
    pub air_temp: f64,
    /// 1-10
    pub rating: u8,
    pub conditions: String,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

/// Static surf destination record from the curated dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub region: String,
    pub coordinates: Coordinates,
    /// 1-10
    pub wave_quality: u8,
    pub wave_size: WaveSize,
    /// 1-4 (beginner to expert)
    pub difficulty_level: u8,
    /// Calendar months 1-12
    pub best_months: Vec<u8>,
    /// Celsius
    pub average_temp: f64,
    pub water_temp: f64,
    /// 1-10
    pub crowd_level: u8,
    /// USD per day
    pub cost: f64,
    #[serde(default)]
    pub accommodation_options: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub weather_conditions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surfline_spot_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<SurfForecast>,
    /// 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tourist_friendliness: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifeguard_presence: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reddit_quotes: Vec<RedditQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_info: Option<SafetyInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skill_requirements: Vec<SkillRequirement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub booking_options: Vec<BookingOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Flight,
    Car,
    Train,
    Bus,
    /// Any mode string we do not model, kept verbatim; estimated at car speed
    Other(String),
}

impl TransportMode {
    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::Flight => "flight",
            TransportMode::Car => "car",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Other(name) => name,
        }
    }
}

impl From<&str> for TransportMode {
    fn from(name: &str) -> Self {
        match name {
            "flight" => TransportMode::Flight,
            "car" => TransportMode::Car,
            "train" => TransportMode::Train,
            "bus" => TransportMode::Bus,
            other => TransportMode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransportMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(TransportMode::from(name.as_str()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

/// Trip start and end dates (ISO `YYYY-MM-DD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelDates {
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,
}

/// Trip length used when no end date has been picked yet
const DEFAULT_TRIP_DAYS: i64 = 7;

impl TravelDates {
    pub fn new(start_date: NaiveDate, end_date: Option<NaiveDate>) -> Self {
        Self { start_date, end_date }
    }

    /// Calendar month (1-12) of the start date
    pub fn month(&self) -> u8 {
        self.start_date.month() as u8
    }

    /// Inclusive day count, at least one day
    pub fn duration_days(&self) -> i64 {
        self.end_date
            .map(|end| (end - self.start_date).num_days() + 1)
            .unwrap_or(DEFAULT_TRIP_DAYS)
            .max(1)
    }
}

/// Treat `""` the same as a missing end date
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// User trip-planning input
///
/// `travel_month` and `trip_duration` are derived from `travel_dates` on every
/// call and cannot be set on their own.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_travel_window"))]
pub struct Preferences {
    /// 1-4 (beginner to expert)
    #[validate(range(min = 1, max = 4))]
    pub surfing_ability: u8,
    pub current_location: String,
    #[serde(default)]
    pub transport_modes: Vec<TransportMode>,
    /// Hours
    #[validate(range(min = 0.0))]
    pub max_travel_time: f64,
    /// Per day, in `currency`
    #[validate(range(exclusive_min = 0.0))]
    pub budget: f64,
    #[serde(default)]
    pub currency: Currency,
    /// 1=cold, 2=mild, 3=warm, 4=hot
    #[validate(range(min = 1, max = 4))]
    pub temperature_range: u8,
    pub travel_dates: TravelDates,
    #[serde(default)]
    pub needs_surf_lessons: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_weights: Option<PreferenceWeights>,
}

impl Preferences {
    pub fn travel_month(&self) -> u8 {
        self.travel_dates.month()
    }

    pub fn trip_duration(&self) -> i64 {
        self.travel_dates.duration_days()
    }
}

fn validate_travel_window(preferences: &Preferences) -> Result<(), ValidationError> {
    match preferences.travel_dates.end_date {
        Some(end) if end < preferences.travel_dates.start_date => {
            Err(ValidationError::new("end_before_start"))
        }
        _ => Ok(()),
    }
}

/// Named importance weights, nominally percentages summing to 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceWeights {
    pub wave_quality: f64,
    pub budget: f64,
    pub travel_time: f64,
    pub crowd_level: f64,
    pub temperature: f64,
    pub skill_match: f64,
    pub safety_factors: f64,
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self {
            wave_quality: 25.0,
            budget: 20.0,
            travel_time: 15.0,
            crowd_level: 10.0,
            temperature: 10.0,
            skill_match: 15.0,
            safety_factors: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeightFactor {
    WaveQuality,
    Budget,
    TravelTime,
    CrowdLevel,
    Temperature,
    SkillMatch,
    SafetyFactors,
}

impl WeightFactor {
    pub const ALL: [WeightFactor; 7] = [
        WeightFactor::WaveQuality,
        WeightFactor::Budget,
        WeightFactor::TravelTime,
        WeightFactor::CrowdLevel,
        WeightFactor::Temperature,
        WeightFactor::SkillMatch,
        WeightFactor::SafetyFactors,
    ];
}

impl PreferenceWeights {
    pub fn get(&self, factor: WeightFactor) -> f64 {
        match factor {
            WeightFactor::WaveQuality => self.wave_quality,
            WeightFactor::Budget => self.budget,
            WeightFactor::TravelTime => self.travel_time,
            WeightFactor::CrowdLevel => self.crowd_level,
            WeightFactor::Temperature => self.temperature,
            WeightFactor::SkillMatch => self.skill_match,
            WeightFactor::SafetyFactors => self.safety_factors,
        }
    }

    pub fn set(&mut self, factor: WeightFactor, value: f64) {
        let slot = match factor {
            WeightFactor::WaveQuality => &mut self.wave_quality,
            WeightFactor::Budget => &mut self.budget,
            WeightFactor::TravelTime => &mut self.travel_time,
            WeightFactor::CrowdLevel => &mut self.crowd_level,
            WeightFactor::Temperature => &mut self.temperature,
            WeightFactor::SkillMatch => &mut self.skill_match,
            WeightFactor::SafetyFactors => &mut self.safety_factors,
        };
        *slot = value;
    }

    /// Sum of all seven weights
    pub fn total(&self) -> f64 {
        WeightFactor::ALL.iter().map(|f| self.get(*f)).sum()
    }
}

/// Travel estimate for one origin/destination/mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelResult {
    #[serde(rename = "distance")]
    pub distance_km: f64,
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    pub mode: TransportMode,
}

/// One factor of a recommendation explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    /// 0-100
    pub score: f64,
    /// 0-100
    pub weight: f64,
    pub explanation: String,
    /// 0-100
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub skill_match: FactorScore,
    pub budget_fit: FactorScore,
    pub seasonal_timing: FactorScore,
    pub travel_logistics: FactorScore,
    pub safety_factors: FactorScore,
    pub personal_preferences: FactorScore,
}

impl FactorBreakdown {
    /// Factors paired with their wire names, in declaration order
    pub fn entries(&self) -> [(&'static str, &FactorScore); 6] {
        [
            ("skillMatch", &self.skill_match),
            ("budgetFit", &self.budget_fit),
            ("seasonalTiming", &self.seasonal_timing),
            ("travelLogistics", &self.travel_logistics),
            ("safetyFactors", &self.safety_factors),
            ("personalPreferences", &self.personal_preferences),
        ]
    }
}

/// Display-oriented factor breakdown for a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub overall_score: f64,
    pub confidence_level: f64,
    pub factor_breakdown: FactorBreakdown,
    pub alternative_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_not_higher: Option<String>,
}

/// Destination copy carrying the per-request ranking fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedDestination {
    #[serde(flatten)]
    pub destination: Destination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<TravelResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbeo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_score: Option<Explanation>,
}

impl RankedDestination {
    /// Copy without any ranking fields attached
    pub fn unranked(destination: &Destination) -> Self {
        Self {
            destination: destination.clone(),
            travel_time: None,
            numbeo_url: None,
            score: None,
            recommendation_score: None,
        }
    }
}

/// Seasonal surf conditions for a destination in a given month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalConditions {
    pub wave_height: String,
    pub consistency: String,
    pub crowd: String,
    pub water_temp: f64,
    pub conditions: String,
}
