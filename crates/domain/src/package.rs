//! Investment package reference data.

use nairavest_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A fixed-term investment product offered on the platform.
///
/// Amounts are stored in minor currency units (kobo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPackage {
    /// Surrogate identifier assigned by the persistence layer.
    pub id: i64,
    /// Display name of the package.
    pub name: String,
    /// Smallest amount that may be invested, in minor units.
    pub min_amount: i64,
    /// Largest amount that may be invested, in minor units.
    pub max_amount: i64,
    /// Term length in days.
    pub duration_days: i32,
    /// Whether the package is currently open for investment.
    pub active: bool,
    /// Return on investment over the full term, as a percentage.
    pub roi_percent: f64,
}

impl InvestmentPackage {
    /// Creates a validated investment package.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        min_amount: i64,
        max_amount: i64,
        duration_days: i32,
        active: bool,
        roi_percent: f64,
    ) -> AppResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "package name must not be empty".to_owned(),
            ));
        }

        if min_amount < 0 || max_amount < min_amount {
            return Err(AppError::Validation(format!(
                "package amount range {min_amount}..{max_amount} is invalid"
            )));
        }

        if duration_days <= 0 {
            return Err(AppError::Validation(
                "package duration must be at least one day".to_owned(),
            ));
        }

        if roi_percent < 0.0 {
            return Err(AppError::Validation(
                "package roi_percent must not be negative".to_owned(),
            ));
        }

        Ok(Self {
            id,
            name,
            min_amount,
            max_amount,
            duration_days,
            active,
            roi_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_package_is_accepted() {
        let package = InvestmentPackage::new(1, "Starter", 500_000, 5_000_000, 90, true, 12.5);
        assert!(package.is_ok());
    }

    #[test]
    fn inverted_amount_range_is_rejected() {
        let package = InvestmentPackage::new(1, "Starter", 5_000_000, 500_000, 90, true, 12.5);
        assert!(package.is_err());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let package = InvestmentPackage::new(1, "Starter", 500_000, 5_000_000, 0, true, 12.5);
        assert!(package.is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        let package = InvestmentPackage::new(1, "  ", 500_000, 5_000_000, 90, true, 12.5);
        assert!(package.is_err());
    }
}
