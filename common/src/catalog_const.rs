//! Catalog-wide constants.

/// Number of product cards shown per catalog page.
pub const PAGE_SIZE: u64 = 10;

/// Input voltage above which a product counts as "high voltage" (volts).
pub const HIGH_VOLTAGE_THRESHOLD: f64 = 40.0;

/// Certification name matched by the AEC-Q100 quick filter.
pub const AEC_Q100_CERTIFICATION: &str = "AEC-Q100";

/// Application-area name matched by the automotive quick filter.
pub const AUTOMOTIVE_APPLICATION: &str = "Automotive";
