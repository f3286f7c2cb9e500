//! External service clients and the rate limiting around them

pub mod ip_api_client;
pub mod rate_limiter;

pub use ip_api_client::{GeoLookup, GeoResponse, IpApiClient};
pub use rate_limiter::{PauseSchedule, Sleeper, TokioSleeper};
