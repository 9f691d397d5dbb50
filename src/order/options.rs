// SPDX-License-Identifier: MPL-2.0
//! Order form options.
//!
//! Every field of the order form is an exhaustive enum. Form values are
//! parsed leniently: an unrecognized value maps to the field's baseline
//! variant (its `Default`), which adds nothing to the price.

use serde::{Deserialize, Serialize};

/// A form field with a fixed set of values and a baseline fallback.
pub trait FormOption: Copy + Default + PartialEq + 'static {
    /// Every variant, in form order.
    const ALL: &'static [Self];

    /// The value submitted by the form.
    fn form_value(self) -> &'static str;

    /// Parses a submitted value, falling back to the baseline variant.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    #[must_use]
    fn from_form_value(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.form_value().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

/// Implements lenient string (de)serialization through [`FormOption`].
macro_rules! form_option_serde {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<String> for $ty {
            fn from(value: String) -> Self {
                <$ty as FormOption>::from_form_value(&value)
            }
        }

        impl From<$ty> for String {
            fn from(option: $ty) -> Self {
                option.form_value().to_string()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.form_value())
            }
        }
    )+};
}

/// Primary category; selects the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelType {
    #[default]
    Product,
    Character,
    Architectural,
    Vehicle,
    Environment,
}

impl FormOption for ModelType {
    const ALL: &'static [Self] = &[
        Self::Product,
        Self::Character,
        Self::Architectural,
        Self::Vehicle,
        Self::Environment,
    ];

    fn form_value(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Character => "character",
            Self::Architectural => "architectural",
            Self::Vehicle => "vehicle",
            Self::Environment => "environment",
        }
    }
}

/// What the model will be used for. No price effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Purpose {
    Game,
    Animation,
    Print,
    Visualization,
    #[default]
    Other,
}

impl FormOption for Purpose {
    const ALL: &'static [Self] = &[
        Self::Game,
        Self::Animation,
        Self::Print,
        Self::Visualization,
        Self::Other,
    ];

    fn form_value(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Animation => "animation",
            Self::Print => "3d-print",
            Self::Visualization => "visualization",
            Self::Other => "other",
        }
    }
}

/// Number of separate parts in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartsCount {
    #[default]
    Single,
    Few,
    Many,
    Assembly,
}

impl FormOption for PartsCount {
    const ALL: &'static [Self] = &[Self::Single, Self::Few, Self::Many, Self::Assembly];

    fn form_value(self) -> &'static str {
        match self {
            Self::Single => "1",
            Self::Few => "2-5",
            Self::Many => "6-15",
            Self::Assembly => "16+",
        }
    }
}

/// Level of geometric detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Complexity {
    #[default]
    Low,
    Medium,
    High,
}

impl FormOption for Complexity {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn form_value(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Preferred modelling tool. No price effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tool {
    Blender,
    Maya,
    ThreeDsMax,
    Cinema4d,
    #[default]
    NoPreference,
}

impl FormOption for Tool {
    const ALL: &'static [Self] = &[
        Self::Blender,
        Self::Maya,
        Self::ThreeDsMax,
        Self::Cinema4d,
        Self::NoPreference,
    ];

    fn form_value(self) -> &'static str {
        match self {
            Self::Blender => "blender",
            Self::Maya => "maya",
            Self::ThreeDsMax => "3ds-max",
            Self::Cinema4d => "cinema-4d",
            Self::NoPreference => "any",
        }
    }
}

/// What the customer provides as reference. No price effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReferenceKind {
    Sketches,
    Photos,
    Blueprints,
    #[default]
    None,
}

impl FormOption for ReferenceKind {
    const ALL: &'static [Self] = &[Self::Sketches, Self::Photos, Self::Blueprints, Self::None];

    fn form_value(self) -> &'static str {
        match self {
            Self::Sketches => "sketches",
            Self::Photos => "photos",
            Self::Blueprints => "blueprints",
            Self::None => "none",
        }
    }
}

/// Scope of the delivered files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Deliverables {
    #[default]
    ModelOnly,
    Textured,
    Rigged,
    FullPackage,
}

impl FormOption for Deliverables {
    const ALL: &'static [Self] = &[
        Self::ModelOnly,
        Self::Textured,
        Self::Rigged,
        Self::FullPackage,
    ];

    fn form_value(self) -> &'static str {
        match self {
            Self::ModelOnly => "model-only",
            Self::Textured => "textured",
            Self::Rigged => "rigged",
            Self::FullPackage => "full-package",
        }
    }
}

/// Delivery urgency; selects the surcharge multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Timeline {
    #[default]
    Flexible,
    OneWeek,
    Urgent,
}

impl FormOption for Timeline {
    const ALL: &'static [Self] = &[Self::Flexible, Self::OneWeek, Self::Urgent];

    fn form_value(self) -> &'static str {
        match self {
            Self::Flexible => "flexible",
            Self::OneWeek => "1week",
            Self::Urgent => "urgent",
        }
    }
}

form_option_serde!(
    ModelType,
    Purpose,
    PartsCount,
    Complexity,
    Tool,
    ReferenceKind,
    Deliverables,
    Timeline,
);

/// The full order form. Fields carry no relational invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderConfig {
    pub model_type: ModelType,
    pub purpose: Purpose,
    pub parts_count: PartsCount,
    pub complexity: Complexity,
    pub tool: Tool,
    pub reference_kind: ReferenceKind,
    pub deliverables: Deliverables,
    pub timeline: Timeline,
}
