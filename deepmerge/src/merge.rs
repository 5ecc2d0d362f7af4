//! Recursive deep merge of [`DynamicValue`] trees.
//!
//! Inputs are folded left to right with [`merge_two`]. For every key of the
//! incoming mapping the first matching rule decides the outcome:
//!
//! 1. an unknown on either side wins, preferring the incoming shape;
//! 2. two mappings merge recursively;
//! 3. an incoming null is skipped under `no_null_override`;
//! 4. two sequences are combined under the union or append list strategy;
//! 5. otherwise the incoming value replaces the existing one when
//!    `override_existing` is set. Without it the existing value stays, even
//!    when it is null.
//!
//! Keys present on one side only are carried over unchanged.

use tracing::trace;

use crate::options::{ListStrategy, MergeOptions};
use crate::value::{DynamicValue, Mapping};

/// Merge `values` left to right.
///
/// Zero inputs produce an empty mapping. Inputs are borrowed; the result is a
/// fresh tree.
///
/// # Examples
///
/// ```rust
/// use deepmerge::{DynamicValue, MergeOptions, merge};
///
/// let base = DynamicValue::mapping([("x", DynamicValue::mapping([("y", 1.into()), ("z", 2.into())]))]);
/// let layer = DynamicValue::mapping([("x", DynamicValue::mapping([("y", 3.into()), ("w", 4.into())]))]);
///
/// let merged = merge(&[base, layer], MergeOptions::default());
/// assert_eq!(
///     merged,
///     DynamicValue::mapping([(
///         "x",
///         DynamicValue::mapping([("w", 4.into()), ("y", 3.into()), ("z", 2.into())]),
///     )])
/// );
/// ```
#[must_use]
pub fn merge(values: &[DynamicValue], options: MergeOptions) -> DynamicValue {
    let Some((first, rest)) = values.split_first() else {
        return DynamicValue::empty_mapping();
    };
    rest.iter()
        .fold(first.clone(), |merged, value| merge_two(merged, value, options))
}

/// Merge `src` into `dst`, returning the combined tree.
///
/// A non-mapping `src` replaces `dst` wholesale; a non-mapping `dst` is
/// treated as empty when `src` is a mapping.
#[must_use]
pub fn merge_two(dst: DynamicValue, src: &DynamicValue, options: MergeOptions) -> DynamicValue {
    let DynamicValue::Mapping(incoming) = src else {
        return src.clone();
    };
    let mut entries = match dst {
        DynamicValue::Mapping(entries) => entries,
        _ => Mapping::new(),
    };
    for (key, value) in incoming {
        let merged = match entries.remove(key) {
            Some(existing) => merge_entry(key, existing, value, options),
            None => value.clone(),
        };
        entries.insert(key.clone(), merged);
    }
    DynamicValue::Mapping(entries)
}

fn merge_entry(
    key: &str,
    existing: DynamicValue,
    incoming: &DynamicValue,
    options: MergeOptions,
) -> DynamicValue {
    match (existing, incoming) {
        (_, DynamicValue::Unknown(shape)) => {
            trace!(key, %shape, "incoming unknown wins");
            incoming.clone()
        }
        (current @ DynamicValue::Unknown(_), _) => {
            trace!(key, "existing unknown is sticky");
            current
        }
        (current @ DynamicValue::Mapping(_), DynamicValue::Mapping(_)) => {
            merge_two(current, incoming, options)
        }
        (current, DynamicValue::Null) if options.no_null_override => {
            trace!(key, "null does not override");
            current
        }
        (DynamicValue::Sequence(current), DynamicValue::Sequence(extra))
            if options.list_strategy() != ListStrategy::Replace =>
        {
            DynamicValue::Sequence(combine_lists(current, extra, options.list_strategy()))
        }
        (current, _) => {
            if options.override_existing {
                incoming.clone()
            } else {
                current
            }
        }
    }
}

fn combine_lists(
    current: Vec<DynamicValue>,
    extra: &[DynamicValue],
    strategy: ListStrategy,
) -> Vec<DynamicValue> {
    match strategy {
        ListStrategy::Replace => extra.to_vec(),
        ListStrategy::Append => {
            let mut combined = current;
            combined.extend_from_slice(extra);
            combined
        }
        ListStrategy::Union => {
            let mut combined: Vec<DynamicValue> = Vec::with_capacity(current.len() + extra.len());
            for element in current.into_iter().chain(extra.iter().cloned()) {
                if !combined.contains(&element) {
                    combined.push(element);
                }
            }
            combined
        }
    }
}
