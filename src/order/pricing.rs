// SPDX-License-Identifier: MPL-2.0
//! Price estimation for the order form.
//!
//! `estimate = round((base + parts + complexity + deliverables) × timeline)`
//!
//! The amounts live in a [`PriceTable`] so they can be supplied as data.
//! [`PriceTable::default`] carries the published price list.

use super::options::{Complexity, Deliverables, ModelType, OrderConfig, PartsCount, Timeline};
use serde::{Deserialize, Serialize};

/// Base price per model type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasePrices {
    pub product: u32,
    pub character: u32,
    pub architectural: u32,
    pub vehicle: u32,
    pub environment: u32,
}

impl Default for BasePrices {
    fn default() -> Self {
        Self {
            product: 120,
            character: 250,
            architectural: 300,
            vehicle: 220,
            environment: 350,
        }
    }
}

/// Increment per part count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartsIncrements {
    pub few: u32,
    pub many: u32,
    pub assembly: u32,
}

impl Default for PartsIncrements {
    fn default() -> Self {
        Self {
            few: 40,
            many: 100,
            assembly: 200,
        }
    }
}

/// Increment per complexity level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityIncrements {
    pub medium: u32,
    pub high: u32,
}

impl Default for ComplexityIncrements {
    fn default() -> Self {
        Self {
            medium: 60,
            high: 150,
        }
    }
}

/// Increment per deliverable scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliverableIncrements {
    pub textured: u32,
    pub rigged: u32,
    pub full_package: u32,
}

impl Default for DeliverableIncrements {
    fn default() -> Self {
        Self {
            textured: 50,
            rigged: 120,
            full_package: 200,
        }
    }
}

/// Surcharge multiplier per timeline. Flexible is always ×1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineMultipliers {
    pub one_week: f64,
    pub urgent: f64,
}

impl Default for TimelineMultipliers {
    fn default() -> Self {
        Self {
            one_week: 1.3,
            urgent: 1.8,
        }
    }
}

/// The complete price list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub base: BasePrices,
    pub parts: PartsIncrements,
    pub complexity: ComplexityIncrements,
    pub deliverables: DeliverableIncrements,
    pub timeline: TimelineMultipliers,
}

/// How an estimate was composed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base: u32,
    pub parts: u32,
    pub complexity: u32,
    pub deliverables: u32,
    /// Sum of base and increments, before the surcharge.
    pub subtotal: u32,
    pub multiplier: f64,
    /// Rounded final estimate.
    pub total: u32,
}

impl PriceTable {
    #[must_use]
    pub fn base_price(&self, model_type: ModelType) -> u32 {
        match model_type {
            ModelType::Product => self.base.product,
            ModelType::Character => self.base.character,
            ModelType::Architectural => self.base.architectural,
            ModelType::Vehicle => self.base.vehicle,
            ModelType::Environment => self.base.environment,
        }
    }

    #[must_use]
    pub fn parts_increment(&self, parts: PartsCount) -> u32 {
        match parts {
            PartsCount::Single => 0,
            PartsCount::Few => self.parts.few,
            PartsCount::Many => self.parts.many,
            PartsCount::Assembly => self.parts.assembly,
        }
    }

    #[must_use]
    pub fn complexity_increment(&self, complexity: Complexity) -> u32 {
        match complexity {
            Complexity::Low => 0,
            Complexity::Medium => self.complexity.medium,
            Complexity::High => self.complexity.high,
        }
    }

    #[must_use]
    pub fn deliverables_increment(&self, deliverables: Deliverables) -> u32 {
        match deliverables {
            Deliverables::ModelOnly => 0,
            Deliverables::Textured => self.deliverables.textured,
            Deliverables::Rigged => self.deliverables.rigged,
            Deliverables::FullPackage => self.deliverables.full_package,
        }
    }

    /// Surcharge multiplier. A non-finite or sub-1.0 value reads as 1.0.
    ///
    /// Urgent never reads below one week, whatever the table says.
    #[must_use]
    pub fn timeline_multiplier(&self, timeline: Timeline) -> f64 {
        match timeline {
            Timeline::Flexible => 1.0,
            Timeline::OneWeek => surcharge(self.timeline.one_week),
            Timeline::Urgent => {
                surcharge(self.timeline.urgent).max(surcharge(self.timeline.one_week))
            }
        }
    }

    /// Computes the estimate with its components.
    #[must_use]
    pub fn breakdown(&self, config: &OrderConfig) -> PriceBreakdown {
        let base = self.base_price(config.model_type);
        let parts = self.parts_increment(config.parts_count);
        let complexity = self.complexity_increment(config.complexity);
        let deliverables = self.deliverables_increment(config.deliverables);
        let subtotal = base
            .saturating_add(parts)
            .saturating_add(complexity)
            .saturating_add(deliverables);
        let multiplier = self.timeline_multiplier(config.timeline);

        // Rounded result is non-negative and bounded by u32::MAX * 1.8
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let total = (f64::from(subtotal) * multiplier)
            .round()
            .min(f64::from(u32::MAX)) as u32;

        PriceBreakdown {
            base,
            parts,
            complexity,
            deliverables,
            subtotal,
            multiplier,
            total,
        }
    }

    /// The rounded estimate for `config`.
    #[must_use]
    pub fn price(&self, config: &OrderConfig) -> u32 {
        self.breakdown(config).total
    }
}

fn surcharge(multiplier: f64) -> f64 {
    if multiplier.is_finite() && multiplier >= 1.0 {
        multiplier
    } else {
        1.0
    }
}

/// Estimates `config` against the default price list.
///
/// # Examples
///
/// ```
/// use vertex_viewer::order::{price, Complexity, ModelType, OrderConfig, Timeline};
///
/// let config = OrderConfig {
///     model_type: ModelType::Character,
///     complexity: Complexity::High,
///     timeline: Timeline::Urgent,
///     ..OrderConfig::default()
/// };
/// // (250 + 150) × 1.8
/// assert_eq!(price(&config), 720);
/// ```
#[must_use]
pub fn price(config: &OrderConfig) -> u32 {
    PriceTable::default().price(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::options::FormOption;

    fn all_configs() -> Vec<OrderConfig> {
        let mut configs = Vec::new();
        for &model_type in ModelType::ALL {
            for &parts_count in PartsCount::ALL {
                for &complexity in Complexity::ALL {
                    for &deliverables in Deliverables::ALL {
                        configs.push(OrderConfig {
                            model_type,
                            parts_count,
                            complexity,
                            deliverables,
                            ..OrderConfig::default()
                        });
                    }
                }
            }
        }
        configs
    }

    #[test]
    fn baseline_config_costs_base_price() {
        assert_eq!(price(&OrderConfig::default()), 120);
    }

    #[test]
    fn breakdown_lists_every_component() {
        let config = OrderConfig {
            model_type: ModelType::Character,
            parts_count: PartsCount::Few,
            complexity: Complexity::High,
            deliverables: Deliverables::Rigged,
            timeline: Timeline::OneWeek,
            ..OrderConfig::default()
        };
        let breakdown = PriceTable::default().breakdown(&config);

        assert_eq!(breakdown.base, 250);
        assert_eq!(breakdown.parts, 40);
        assert_eq!(breakdown.complexity, 150);
        assert_eq!(breakdown.deliverables, 120);
        assert_eq!(breakdown.subtotal, 560);
        assert_eq!(breakdown.multiplier, 1.3);
        assert_eq!(breakdown.total, 728);
    }

    #[test]
    fn rounds_to_nearest_integer() {
        // 185 × 1.3 = 240.5 rounds up
        let table = PriceTable {
            base: BasePrices {
                product: 185,
                ..BasePrices::default()
            },
            ..PriceTable::default()
        };
        let config = OrderConfig {
            timeline: Timeline::OneWeek,
            ..OrderConfig::default()
        };
        assert_eq!(table.price(&config), 241);
    }

    #[test]
    fn price_is_deterministic() {
        for config in all_configs() {
            assert_eq!(price(&config), price(&config));
        }
    }

    #[test]
    fn urgency_never_lowers_price() {
        for config in all_configs() {
            let at = |timeline| price(&OrderConfig { timeline, ..config });
            let flexible = at(Timeline::Flexible);
            let one_week = at(Timeline::OneWeek);
            let urgent = at(Timeline::Urgent);
            assert!(urgent >= one_week, "{config:?}");
            assert!(one_week >= flexible, "{config:?}");
        }
    }

    #[test]
    fn unpriced_fields_do_not_change_price() {
        let base = OrderConfig::default();
        let varied = OrderConfig {
            purpose: crate::order::Purpose::Game,
            tool: crate::order::Tool::Blender,
            reference_kind: crate::order::ReferenceKind::Photos,
            ..base
        };
        assert_eq!(price(&base), price(&varied));
    }

    #[test]
    fn invalid_multiplier_reads_as_no_surcharge() {
        let table = PriceTable {
            timeline: TimelineMultipliers {
                one_week: f64::NAN,
                urgent: 0.5,
            },
            ..PriceTable::default()
        };
        assert_eq!(table.timeline_multiplier(Timeline::OneWeek), 1.0);
        assert_eq!(table.timeline_multiplier(Timeline::Urgent), 1.0);
    }

    #[test]
    fn inverted_surcharges_keep_urgent_at_least_one_week() {
        let table: PriceTable =
            toml::from_str("[timeline]\none_week = 2.0\nurgent = 1.2\n").expect("valid toml");
        assert_eq!(table.timeline_multiplier(Timeline::Urgent), 2.0);

        for config in all_configs() {
            let at = |timeline| table.price(&OrderConfig { timeline, ..config });
            assert!(at(Timeline::Urgent) >= at(Timeline::OneWeek), "{config:?}");
            assert!(at(Timeline::OneWeek) >= at(Timeline::Flexible), "{config:?}");
        }
    }

    #[test]
    fn price_table_deserializes_partially() {
        let table: PriceTable =
            toml::from_str("[base]\ncharacter = 300\n").expect("valid toml");
        assert_eq!(table.base.character, 300);
        assert_eq!(table.base.product, 120);
        assert_eq!(table.timeline, TimelineMultipliers::default());
    }
}
