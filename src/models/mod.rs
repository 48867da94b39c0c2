// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BookingOption, BookingType, Coordinates, Currency, Destination, Explanation, FactorBreakdown,
    FactorScore, PreferenceWeights, Preferences, RankedDestination, RedditQuote,
    RequirementLevel, SafetyInfo, SeasonalConditions, SkillRequirement, SurfForecast,
    TransportMode, TravelDates, TravelResult, WaveSize, WeightFactor,
};
pub use requests::{ExplainRequest, NormalizeWeightsRequest, RankRequest, SeasonalQuery};
pub use responses::{ErrorResponse, HealthResponse, RankResponse};
