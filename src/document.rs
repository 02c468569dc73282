use crate::style::{Category, StyleValue};
use crate::tailwind::variants::{Variant, VariantKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Canonical property → value for one category.
pub type PropertyMap = BTreeMap<String, StyleValue>;

/// One state/breakpoint/theme bucket of a [`StyleDocument`].
///
/// Serializes as `{ <category>: {...}, themes?, breakpoints?, states? }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleBucket {
    #[serde(flatten)]
    pub categories: BTreeMap<Category, PropertyMap>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub themes: BTreeMap<Variant, StyleBucket>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub breakpoints: BTreeMap<Variant, StyleBucket>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub states: BTreeMap<Variant, StyleBucket>,
}

impl StyleBucket {
    pub fn category(&self, category: Category) -> Option<&PropertyMap> {
        self.categories.get(&category)
    }

    pub fn category_mut(&mut self, category: Category) -> &mut PropertyMap {
        self.categories.entry(category).or_default()
    }

    /// Look up a property; `path` may be dotted (`padding.top`).
    pub fn get(&self, category: Category, path: &str) -> Option<&StyleValue> {
        let props = self.category(category)?;
        let (head, tail) = match path.split_once('.') {
            Some((head, tail)) => (head, Some(tail)),
            None => (path, None),
        };
        let value = props.get(head)?;
        match tail {
            Some(tail) => value.get_path(tail),
            None => Some(value),
        }
    }

    pub fn child(&self, variant: Variant) -> Option<&StyleBucket> {
        self.children(variant.kind()).get(&variant)
    }

    pub fn child_mut(&mut self, variant: Variant) -> &mut StyleBucket {
        let children = match variant.kind() {
            VariantKind::Theme => &mut self.themes,
            VariantKind::Breakpoint => &mut self.breakpoints,
            VariantKind::State => &mut self.states,
        };
        children.entry(variant).or_default()
    }

    fn children(&self, kind: VariantKind) -> &BTreeMap<Variant, StyleBucket> {
        match kind {
            VariantKind::Theme => &self.themes,
            VariantKind::Breakpoint => &self.breakpoints,
            VariantKind::State => &self.states,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|props| props.is_empty())
            && self.themes.values().all(StyleBucket::is_empty)
            && self.breakpoints.values().all(StyleBucket::is_empty)
            && self.states.values().all(StyleBucket::is_empty)
    }
}

/// The nested style document produced by one resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleDocument {
    #[serde(flatten)]
    root: StyleBucket,
}

impl StyleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unconditioned bucket.
    pub fn base(&self) -> &StyleBucket {
        &self.root
    }

    /// Follow a canonical bucket path (theme → breakpoint → state).
    pub fn bucket(&self, path: &[Variant]) -> Option<&StyleBucket> {
        path.iter()
            .try_fold(&self.root, |bucket, variant| bucket.child(*variant))
    }

    /// Like [`bucket`](Self::bucket) but creates missing buckets.
    pub fn bucket_mut(&mut self, path: &[Variant]) -> &mut StyleBucket {
        path.iter()
            .fold(&mut self.root, |bucket, variant| bucket.child_mut(*variant))
    }

    /// Shorthand for a single-variant bucket (`states.hover`, `breakpoints.md`).
    pub fn variant(&self, variant: Variant) -> Option<&StyleBucket> {
        self.root.child(variant)
    }

    pub fn get(&self, category: Category, path: &str) -> Option<&StyleValue> {
        self.root.get(category, path)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn to_yaml(&self) -> crate::error::TwResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_are_created_on_demand() {
        let mut doc = StyleDocument::new();
        assert!(doc.bucket(&[Variant::Md, Variant::Hover]).is_none());

        doc.bucket_mut(&[Variant::Md, Variant::Hover])
            .category_mut(Category::Typography)
            .insert("color".into(), StyleValue::text("red"));

        let bucket = doc.bucket(&[Variant::Md, Variant::Hover]).unwrap();
        assert_eq!(
            bucket.get(Category::Typography, "color"),
            Some(&StyleValue::text("red"))
        );
        assert!(doc.base().category(Category::Typography).is_none());
        assert!(doc.variant(Variant::Md).is_some());
        assert!(doc.variant(Variant::Hover).is_none());
    }

    #[test]
    fn empty_document() {
        let mut doc = StyleDocument::new();
        assert!(doc.is_empty());
        doc.bucket_mut(&[Variant::Hover]);
        assert!(doc.is_empty());
    }

    #[test]
    fn yaml_shape() {
        let mut doc = StyleDocument::new();
        doc.bucket_mut(&[])
            .category_mut(Category::Layout)
            .insert("display".into(), StyleValue::text("flex"));
        doc.bucket_mut(&[Variant::Hover])
            .category_mut(Category::Effects)
            .insert("opacity".into(), StyleValue::Number(0.5));

        let yaml = doc.to_yaml().unwrap();
        assert!(yaml.contains("layout:"), "{}", yaml);
        assert!(yaml.contains("display: flex"), "{}", yaml);
        assert!(yaml.contains("states:"), "{}", yaml);
        assert!(yaml.contains("hover:"), "{}", yaml);
        assert!(!yaml.contains("breakpoints"), "{}", yaml);
    }
}
