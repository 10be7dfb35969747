//! # spiral-profile
//!
//! Higher-level views over a finished facet-score set.
//!
//! - **Elemental**: mean facet score per element (fire, earth, water, air,
//!   aether) through the static facet → element table.
//! - **Phase**: one logit per developmental phase from fixed facet
//!   coefficients, then a temperature-scaled softmax (T = 12).

pub mod completeness;
pub mod elemental;
pub mod phase;

pub use completeness::require_complete;
pub use elemental::aggregate;
pub use phase::infer;
