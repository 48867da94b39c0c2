// Service exports
pub mod cache;
pub mod catalog;
pub mod forecast;
pub mod seasonal;
pub mod travel_time;

pub use cache::{CacheKey, CacheManager, CacheStats, TravelTimeCache};
pub use catalog::{CatalogError, DestinationCatalog};
pub use forecast::ForecastService;
pub use seasonal::{Season, SeasonalService};
pub use travel_time::TravelTimeService;
