//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::RenewalMultiplierTier;

use super::types::{
    CompensationPlan, EngineConfig, EngineSettings, FiscalCalendar, PlansConfig,
};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/commission/
/// ├── engine.yaml   # Fiscal calendar and reporting currency
/// └── plans.yaml    # Compensation plans and renewal multiplier tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use commission_engine::config::ConfigLoader;
/// use uuid::Uuid;
///
/// let loader = ConfigLoader::load("./config/commission")?;
/// for plan in loader.plans() {
///     println!("{}: {} tiers", plan.name, plan.renewal_multiplier_tiers.len());
/// }
/// # Ok::<(), commission_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or unparsable, if the
    /// fiscal year start month is out of range, or if any plan has a tier with
    /// `max_years` below `min_years` or a non-positive multiplier. Overlapping
    /// tiers are accepted and logged.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let plans_config = Self::load_yaml::<PlansConfig>(&path.join("plans.yaml"))?;

        for plan in &plans_config.plans {
            validate_tiers(plan)?;
        }

        let config = EngineConfig::new(settings, plans_config.plans)?;

        info!(
            path = %path.display(),
            plans = config.plans().len(),
            fiscal_year_start_month = config.settings().fiscal_year_start_month,
            "Loaded commission engine configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        self.config.settings()
    }

    /// Returns the fiscal calendar.
    pub fn fiscal_calendar(&self) -> FiscalCalendar {
        self.config.calendar()
    }

    /// Returns all compensation plans.
    pub fn plans(&self) -> &[CompensationPlan] {
        self.config.plans()
    }

    /// Gets a plan by its id.
    pub fn get_plan(&self, plan_id: Uuid) -> EngineResult<&CompensationPlan> {
        self.config
            .plans()
            .iter()
            .find(|plan| plan.id == plan_id)
            .ok_or(EngineError::PlanNotFound { plan_id })
    }

    /// Gets the renewal multiplier tiers for a plan.
    pub fn tiers_for_plan(&self, plan_id: Uuid) -> EngineResult<&[RenewalMultiplierTier]> {
        Ok(&self.get_plan(plan_id)?.renewal_multiplier_tiers)
    }
}

/// Rejects structurally invalid tiers and logs overlapping ones.
fn validate_tiers(plan: &CompensationPlan) -> EngineResult<()> {
    let tiers = &plan.renewal_multiplier_tiers;

    for tier in tiers {
        match tier.max_years {
            Some(max) if max < tier.min_years => {
                return Err(EngineError::InvalidTier {
                    plan_id: plan.id,
                    message: format!("max_years {} is below min_years {}", max, tier.min_years),
                });
            }
            _ => {}
        }
        if tier.multiplier <= Decimal::ZERO {
            return Err(EngineError::InvalidTier {
                plan_id: plan.id,
                message: format!("multiplier {} must be positive", tier.multiplier),
            });
        }
    }

    for (index, tier) in tiers.iter().enumerate() {
        for other in &tiers[index + 1..] {
            if tier.overlaps(other) {
                warn!(
                    plan_id = %plan.id,
                    plan = %plan.name,
                    first_min_years = tier.min_years,
                    second_min_years = other.min_years,
                    "Overlapping renewal multiplier tiers; highest min_years wins"
                );
            }
        }
    }

    Ok(())
}
