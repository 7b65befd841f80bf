//! Visual models derived from a normalized analysis record.
//!
//! Every builder is a pure function of a [`NormalizedView`](crate::record::NormalizedView)
//! (and, where colors are involved, a [`ColorBandMapper`]). None of them can
//! fail: missing data has already been defaulted by the normalizer.

mod bands;
mod confidence;
mod gauge;
mod graph;
mod layout;
mod pattern;
mod radar;
mod summary;
mod temporal;
mod theme;

pub use bands::*;
pub use confidence::*;
pub use gauge::*;
pub use graph::*;
pub use layout::*;
pub use pattern::*;
pub use radar::*;
pub use summary::*;
pub use temporal::*;
pub use theme::*;
