// SPDX-License-Identifier: MPL-2.0
//! Order configurator: form options and the pure price estimator.

pub mod options;
pub mod pricing;

pub use options::{
    Complexity, Deliverables, FormOption, ModelType, OrderConfig, PartsCount, Purpose,
    ReferenceKind, Timeline, Tool,
};
pub use pricing::{price, PriceBreakdown, PriceTable};
