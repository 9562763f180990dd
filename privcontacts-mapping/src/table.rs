use privcontacts_types::TypeKey;

/// Ordered `(label, key)` pairs for one category, queried in both directions.
///
/// Import takes the first pair whose label matches, export the first pair
/// whose key matches. A table is the concatenation of a category-specific
/// `primary` slice and a `shared` slice common to all categories of the
/// same vocabulary; the primary slice wins on both lookups.
#[derive(Debug, Clone, Copy)]
pub struct LabelTable<L: 'static> {
    primary: &'static [(L, TypeKey)],
    shared: &'static [(L, TypeKey)],
}

impl<L: Copy + PartialEq> LabelTable<L> {
    pub const fn new(primary: &'static [(L, TypeKey)], shared: &'static [(L, TypeKey)]) -> Self {
        Self { primary, shared }
    }

    /// All pairs in lookup order.
    pub fn pairs(&self) -> impl Iterator<Item = (L, TypeKey)> + '_ {
        self.primary.iter().chain(self.shared).copied()
    }

    /// Key of the first pair labelled `label`.
    pub fn key_of<Q>(&self, label: Q) -> Option<TypeKey>
    where
        L: PartialEq<Q>,
    {
        self.pairs().find(|(l, _)| *l == label).map(|(_, key)| key)
    }

    /// Label of the first pair with `key`.
    pub fn label_of(&self, key: TypeKey) -> Option<L> {
        self.pairs().find(|(_, k)| *k == key).map(|(label, _)| label)
    }

    /// Label for `key`, walking [`fallback_key`] until the table has one.
    ///
    /// Returns the label together with the key it was found under. `None`
    /// only if the chain ends without a hit, which the built-in tables rule
    /// out by always containing [`TypeKey::Other`].
    pub fn resolve(&self, key: TypeKey) -> Option<(L, TypeKey)> {
        let mut current = Some(key);
        while let Some(key) = current {
            if let Some(label) = self.label_of(key) {
                return Some((label, key));
            }
            current = fallback_key(key);
        }
        None
    }
}

/// Next broader type to try when a vocabulary has no label for `key`.
///
/// Every chain ends at [`TypeKey::Other`], which has no fallback.
#[must_use]
pub const fn fallback_key(key: TypeKey) -> Option<TypeKey> {
    match key {
        TypeKey::Other => None,
        TypeKey::Mobile => Some(TypeKey::Personal),
        TypeKey::MobileBusiness => Some(TypeKey::Business),
        TypeKey::RelationshipSibling => Some(TypeKey::RelationshipBrother),
        TypeKey::RelationshipMother | TypeKey::RelationshipFather => Some(TypeKey::RelationshipParent),
        _ => Some(TypeKey::Other),
    }
}
