//! Schema inference module
//!
//! Infers JSON Schema fragments from sample fixture values.
//!
//! # Features
//!
//! - **Classification**: Tags scalars as boolean, number/integer, date-time or string
//! - **Pluggable Date Detection**: Lenient, strict, or disabled
//! - **Declared Types**: A property whose sample is a type literal keeps that type
//! - **Array Item Inference**: Item schema comes from the first element
//! - **Nested Object Support**: Handles nested objects recursively
//!
//! Every emitted `type` is `["null", <type>]`; nullability is never inferred.

mod classify;
mod dates;
mod synthesize;
mod types;

pub use classify::{coerces_to_number, Classifier, NumericMode, DEFAULT_MONETARY_KEYS};
pub use dates::{
    DateDetection, DateDetector, LenientDateDetector, NoDateDetection, StrictDateDetector,
};
pub use synthesize::{infer_schema, Synthesizer, DEFAULT_MAX_DEPTH};
pub use types::{JsonType, NullableType, SchemaFragment, TypeTag};

#[cfg(test)]
mod tests;
