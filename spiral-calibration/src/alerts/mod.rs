//! Rule-based alerting over facet scores.
//!
//! Rules run independently; each contributes zero or one alert. A rule whose
//! facet is absent from the map stays silent. Phase-transition alerts are not
//! implemented yet.

pub mod detector;
pub mod rules;

pub use detector::detect_alerts;
