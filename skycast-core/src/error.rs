use thiserror::Error;

/// Everything that can end a search attempt. The `Display` string of each
/// variant is the user-facing message that replaces the weather display;
/// none of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Empty or whitespace-only query, rejected before any network call.
    #[error("Please enter a location to search for.")]
    EmptyQuery,

    /// Refresh requested before any location was resolved.
    #[error("Search for a location first.")]
    NoLocation,

    /// The geocoder returned zero results. User-correctable.
    #[error("Location not found. Please try another search term.")]
    LocationNotFound,

    /// Transport or upstream failure talking to the geocoding service.
    #[error("Location service is not available right now. Please try again later.")]
    ServiceUnavailable,

    /// Transport or upstream failure talking to the forecast service, or a
    /// feed we could not make sense of.
    #[error("Weather data not available")]
    WeatherUnavailable,
}
