//! Style accumulator: merges resolved styles into a bucket.

use crate::document::{PropertyMap, StyleBucket};
use crate::error::TwResult;
use crate::style::{ResolvedStyle, StyleValue};
use std::collections::BTreeMap;

/// Category-specific shorthand table: canonical property → written paths.
pub type Expander = fn(&str) -> Option<&'static [&'static str]>;

/// No shorthands.
pub fn no_expansion(_: &str) -> Option<&'static [&'static str]> {
    None
}

/// Write one resolved style into `bucket`.
///
/// Comma-joined properties are zipped with list values (scalars broadcast),
/// each property is run through `expand`, and `additional` properties are
/// written last into their own sections (expanded only when that section is
/// `resolved`'s own). Later writes to the same path replace earlier ones.
pub fn apply(resolved: &ResolvedStyle, bucket: &mut StyleBucket, expand: Expander) -> TwResult<()> {
    let pairs = resolved.pairs()?;
    let props = bucket.category_mut(resolved.category);

    for (property, value) in pairs {
        write_expanded(props, property, value, expand);
    }
    for (category, property, value) in &resolved.additional {
        let expand: Expander = if *category == resolved.category {
            expand
        } else {
            no_expansion
        };
        write_expanded(bucket.category_mut(*category), property, value.clone(), expand);
    }
    Ok(())
}

fn write_expanded(props: &mut PropertyMap, property: &str, value: StyleValue, expand: Expander) {
    match expand(property) {
        Some(targets) => {
            for target in targets {
                write_path(props, target, value.clone());
            }
        }
        None => write_path(props, property, value),
    }
}

/// Write `value` at a dotted path, creating intermediate maps.
///
/// A scalar sitting where a map is needed is replaced; sibling keys of an
/// existing map are kept.
pub fn write_path(props: &mut PropertyMap, path: &str, value: StyleValue) {
    match path.split_once('.') {
        None => {
            props.insert(path.to_string(), value);
        }
        Some((head, tail)) => {
            let entry = props
                .entry(head.to_string())
                .or_insert_with(|| StyleValue::Map(BTreeMap::new()));
            if !matches!(entry, StyleValue::Map(_)) {
                *entry = StyleValue::Map(BTreeMap::new());
            }
            if let StyleValue::Map(inner) = entry {
                write_path(inner, tail, value);
            }
        }
    }
}
