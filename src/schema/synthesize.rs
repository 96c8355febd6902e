//! Schema synthesis from sample values

use super::classify::Classifier;
use super::types::{SchemaFragment, TypeTag};
use crate::types::Sample;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// Default nesting limit before synthesis stops descending
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Builds schema fragments from samples
#[derive(Debug, Clone)]
pub struct Synthesizer {
    classifier: Classifier,
    max_depth: usize,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(Classifier::new())
    }
}

impl Synthesizer {
    /// Create a synthesizer around a classifier
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set maximum depth for nested values
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// The classifier used at the leaves
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Synthesize the fragment for one sample.
    ///
    /// `name` only shows up in diagnostics. This never fails: anything that
    /// cannot be inferred degrades to `string` or an empty object.
    pub fn synthesize(&self, name: &str, sample: &Sample) -> SchemaFragment {
        debug!(schema = name, kind = sample.kind(), "synthesizing schema");
        self.fragment(name, "", Some(sample), 0)
    }

    /// `hint` is the enclosing property key, empty at the top level.
    fn fragment(
        &self,
        name: &str,
        hint: &str,
        sample: Option<&Sample>,
        depth: usize,
    ) -> SchemaFragment {
        let Some(sample) = sample else {
            debug!(schema = name, "no sample element, emitting empty object");
            return SchemaFragment::empty_object();
        };

        trace!(schema = name, kind = sample.kind(), depth, "visiting");

        match sample {
            Sample::Scalar(value) => SchemaFragment::scalar(self.classifier.classify(hint, value)),
            // Only containers recurse, so only they are cut off
            _ if depth >= self.max_depth => {
                warn!(
                    schema = name,
                    depth, "maximum depth reached, emitting empty object"
                );
                SchemaFragment::empty_object()
            }
            Sample::Sequence(items) => {
                SchemaFragment::array(self.fragment(name, hint, items.first(), depth + 1))
            }
            Sample::Mapping(entries) => SchemaFragment::object(self.properties(entries, depth)),
        }
    }

    fn properties(
        &self,
        entries: &[(String, Sample)],
        depth: usize,
    ) -> BTreeMap<String, SchemaFragment> {
        entries
            .iter()
            .map(|(key, value)| {
                let fragment = match declared_tag(value) {
                    Some(tag) => {
                        trace!(key = key.as_str(), tag = %tag, "using declared type");
                        SchemaFragment::scalar(tag)
                    }
                    None => self.fragment(key, key, Some(value), depth + 1),
                };
                (key.clone(), fragment)
            })
            .collect()
    }
}

/// Infer a schema with default settings (convenience function)
pub fn infer_schema(name: &str, value: &serde_json::Value) -> SchemaFragment {
    Synthesizer::default().synthesize(name, &Sample::from(value))
}

/// A property whose fixture value is a type literal such as `"boolean"`
fn declared_tag(value: &Sample) -> Option<TypeTag> {
    match value {
        Sample::Scalar(scalar) => scalar.as_str().and_then(TypeTag::from_literal),
        _ => None,
    }
}
