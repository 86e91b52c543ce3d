//! Filter-object deconstruction into the store's expression syntax.
//!
//! A filter object is a plain map of attribute name to desired value. Each
//! entry becomes one predicate against a pair of placeholders derived from
//! the attribute name (`#name` for the attribute, `:name` for the value),
//! and the predicates are joined with `AND`. Sequence values become
//! containment tests; everything else becomes an equality test. That is the
//! entire structured expression language — callers needing `OR`, negation,
//! or range operators supply a raw expression string and placeholder maps
//! instead, bypassing deconstruction entirely.

use std::fmt;

use serde_json::Value;

use sparkplug_model::types::{ExpressionAttributeNames, ExpressionAttributeValues};

/// A caller-supplied filter object.
///
/// `serde_json::Map` iteration is deterministic, and inserting the same
/// attribute name twice keeps the last value. Placeholders are derived from
/// the attribute name alone, so a duplicate name overwrites its earlier
/// placeholder entries rather than producing a second predicate pair.
pub type Filter = serde_json::Map<String, Value>;

/// Which wire-protocol field an expression string is written into.
///
/// The deconstruction algorithm is identical for all three; only the
/// destination field differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionSlot {
    /// `ConditionExpression`, attached to puts.
    Condition,
    /// `KeyConditionExpression`, driving queries.
    KeyCondition,
    /// `FilterExpression`, applied to scans.
    Filter,
}

impl ExpressionSlot {
    /// Returns the wire-protocol field name for this slot.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Condition => "ConditionExpression",
            Self::KeyCondition => "KeyConditionExpression",
            Self::Filter => "FilterExpression",
        }
    }
}

impl fmt::Display for ExpressionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dual-mode expression input to `condition`, `query`, and `scan`.
///
/// Structured mode runs the filter object through [`deconstruct`]; raw mode
/// carries a pre-built expression string and placeholder maps verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A filter object to deconstruct.
    Structured(Filter),
    /// A pre-built expression with caller-supplied placeholder maps.
    Raw {
        /// The expression string, written into the slot field unchanged.
        expression: String,
        /// The value-placeholder map, used verbatim.
        values: ExpressionAttributeValues,
        /// The name-placeholder map, used verbatim; optional.
        names: Option<ExpressionAttributeNames>,
    },
}

impl Expression {
    /// A raw expression with value placeholders only.
    #[must_use]
    pub fn raw(expression: impl Into<String>, values: ExpressionAttributeValues) -> Self {
        Self::Raw {
            expression: expression.into(),
            values,
            names: None,
        }
    }

    /// A raw expression with both placeholder maps.
    #[must_use]
    pub fn raw_with_names(
        expression: impl Into<String>,
        values: ExpressionAttributeValues,
        names: ExpressionAttributeNames,
    ) -> Self {
        Self::Raw {
            expression: expression.into(),
            values,
            names: Some(names),
        }
    }

    /// Resolve this input into a [`Fragment`] for the given slot.
    ///
    /// This is the single point where the dual mode is discriminated.
    #[must_use]
    pub fn into_fragment(self, slot: ExpressionSlot) -> Fragment {
        match self {
            Self::Structured(filter) => deconstruct(&filter, slot),
            Self::Raw {
                expression,
                values,
                names,
            } => Fragment {
                slot,
                expression,
                values,
                names: names.unwrap_or_default(),
            },
        }
    }
}

impl From<Filter> for Expression {
    fn from(filter: Filter) -> Self {
        Self::Structured(filter)
    }
}

/// A deconstructed expression ready to merge into a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// The wire field the expression string belongs in.
    pub slot: ExpressionSlot,
    /// The joined boolean expression.
    pub expression: String,
    /// Value placeholder to original value.
    pub values: ExpressionAttributeValues,
    /// Name placeholder to original attribute name.
    pub names: ExpressionAttributeNames,
}

/// Deconstruct a filter object into a conjunctive boolean expression with
/// placeholder maps.
///
/// For each entry, in iteration order: a sequence value emits
/// `contains(#name, :name)`, anything else emits `#name = :name`; the value
/// is recorded under `:name` and the attribute name under `#name`.
/// Predicates are joined with `AND`. Pure; no I/O, no failure modes.
#[must_use]
pub fn deconstruct(filter: &Filter, slot: ExpressionSlot) -> Fragment {
    let mut predicates = Vec::with_capacity(filter.len());
    let mut values = ExpressionAttributeValues::with_capacity(filter.len());
    let mut names = ExpressionAttributeNames::with_capacity(filter.len());

    for (key, value) in filter {
        let value_ref = format!(":{key}");
        let name_ref = format!("#{key}");
        predicates.push(if value.is_array() {
            format!("contains({name_ref}, {value_ref})")
        } else {
            format!("{name_ref} = {value_ref}")
        });
        values.insert(value_ref, value.clone());
        names.insert(name_ref, key.clone());
    }

    Fragment {
        slot,
        expression: predicates.join(" AND "),
        values,
        names,
    }
}
