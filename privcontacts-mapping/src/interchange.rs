use crate::{CompanyLabelCodec, LabelMapping, LabelTable};
use privcontacts_types::{ContactDataCategory, ContactDataType, TypeKey};
use tracing::debug;

// Standard tokens of the interchange format that differ per property.
const PHONE: &[(&str, TypeKey)] = &[("cell", TypeKey::Mobile), ("voice", TypeKey::Other)];
const EMAIL: &[(&str, TypeKey)] = &[("internet", TypeKey::Other)];
const RELATED: &[(&str, TypeKey)] = &[
    ("spouse", TypeKey::RelationshipPartner),
    ("sweetheart", TypeKey::RelationshipPartner),
    ("kin", TypeKey::RelationshipRelative),
    ("co-worker", TypeKey::RelationshipWork),
    ("contact", TypeKey::Other),
];

/// Prefix the interchange format reserves for non-standard type tokens.
const EXTENSION_PREFIX: &str = "x-";

// Generic tokens plus the app's own names for every standard type, so an
// export followed by an import never loses a type.
const SHARED: &[(&str, TypeKey)] = &[
    ("home", TypeKey::Personal),
    ("work", TypeKey::Business),
    ("pref", TypeKey::Main),
    ("private", TypeKey::Personal),
    ("mobile", TypeKey::Mobile),
    ("mobile_business", TypeKey::MobileBusiness),
    ("main", TypeKey::Main),
    ("other", TypeKey::Other),
    ("birthday", TypeKey::Birthday),
    ("anniversary", TypeKey::Anniversary),
    ("sibling", TypeKey::RelationshipSibling),
    ("brother", TypeKey::RelationshipBrother),
    ("sister", TypeKey::RelationshipSister),
    ("parent", TypeKey::RelationshipParent),
    ("father", TypeKey::RelationshipFather),
    ("mother", TypeKey::RelationshipMother),
    ("child", TypeKey::RelationshipChild),
    ("relative", TypeKey::RelationshipRelative),
    ("partner", TypeKey::RelationshipPartner),
    ("friend", TypeKey::RelationshipFriend),
    ("colleague", TypeKey::RelationshipWork),
];

/// Translation between [`ContactDataType`] and the type tokens of the
/// interchange format.
///
/// Tokens compare trimmed and case-insensitively. An empty token imports as
/// `Other`; an unrecognized one becomes a custom type with its first letter
/// capitalized, minus a leading `x-` extension prefix. Custom types export as
/// their label text.
///
/// A custom label that would read back as something else (a recognized token
/// like `Custom("Home")`, a text already starting with `x-`, or a company
/// label) is exported with the `x-` prefix, so it re-imports as the same
/// custom type.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterchangeMapping;

impl InterchangeMapping {
    #[must_use]
    pub const fn table(category: ContactDataCategory) -> LabelTable<&'static str> {
        let primary: &'static [(&'static str, TypeKey)] = match category {
            ContactDataCategory::PhoneNumber => PHONE,
            ContactDataCategory::EmailAddress => EMAIL,
            ContactDataCategory::Relationship => RELATED,
            ContactDataCategory::PhysicalAddress
            | ContactDataCategory::Website
            | ContactDataCategory::EventDate
            | ContactDataCategory::Company => &[],
        };
        LabelTable::new(primary, SHARED)
    }

    /// Picks one type for a property carrying several type tokens.
    ///
    /// Among recognized tokens the most specific type wins, the earlier token
    /// on equal priority. Without any recognized token the first non-empty
    /// one becomes a custom type. Returns the type together with the token it
    /// was derived from.
    pub fn resolve_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
        category: ContactDataCategory,
    ) -> (ContactDataType, Option<String>) {
        let table = Self::table(category);
        let mut best: Option<(ContactDataType, &str)> = None;

        for token in tokens.iter().map(AsRef::as_ref) {
            let Some(key) = table.key_of(normalize(token).as_str()) else {
                continue;
            };
            let candidate = ContactDataType::from_key(key, None);
            let better = best
                .as_ref()
                .is_none_or(|(current, _)| candidate.priority() < current.priority());
            if better {
                best = Some((candidate, token));
            }
        }

        if let Some((data_type, token)) = best {
            return (data_type, Some(token.to_string()));
        }

        match tokens.iter().map(AsRef::as_ref).find(|t| !t.trim().is_empty()) {
            Some(token) => (self.to_internal(&token.to_string(), category), Some(token.to_string())),
            None => (ContactDataType::Other, None),
        }
    }
}

impl LabelMapping for InterchangeMapping {
    type Label = String;

    fn to_internal(&self, token: &String, category: ContactDataCategory) -> ContactDataType {
        let normalized = normalize(token);
        if normalized.is_empty() {
            return ContactDataType::Other;
        }

        match Self::table(category).key_of(normalized.as_str()) {
            Some(key) => ContactDataType::from_key(key, None),
            None => {
                debug!("Unrecognized {category} type token {token:?}, keeping as custom");
                let trimmed = token.trim();
                let label = strip_extension(trimmed)
                    .map(str::trim)
                    .filter(|rest| !rest.is_empty())
                    .unwrap_or(trimmed);
                ContactDataType::Custom(capitalize(label))
            }
        }
    }

    /// An empty token carries no type and is not a fallback.
    fn recognizes(&self, token: &String, category: ContactDataCategory) -> bool {
        let normalized = normalize(token);
        normalized.is_empty() || Self::table(category).key_of(normalized.as_str()).is_some()
    }

    fn to_external_fresh(&self, data_type: &ContactDataType, category: ContactDataCategory) -> String {
        if let ContactDataType::Custom(text) = data_type {
            let text = text.trim();
            if !text.is_empty() {
                if self.reads_back_differently(text, category) {
                    return format!("{EXTENSION_PREFIX}{text}");
                }
                return text.to_string();
            }
        }

        Self::table(category)
            .resolve(data_type.key())
            .map_or("other", |(token, _)| token)
            .to_string()
    }
}

impl InterchangeMapping {
    /// Whether a custom label, written as a bare token, would import as
    /// something other than itself.
    fn reads_back_differently(&self, text: &str, category: ContactDataCategory) -> bool {
        let normalized = normalize(text);
        Self::table(category).key_of(normalized.as_str()).is_some()
            || strip_extension(text).is_some()
            || (category == ContactDataCategory::Relationship && CompanyLabelCodec.matches(text))
    }
}

fn strip_extension(token: &str) -> Option<&str> {
    let prefix = token.get(..EXTENSION_PREFIX.len())?;
    prefix
        .eq_ignore_ascii_case(EXTENSION_PREFIX)
        .then(|| &token[EXTENSION_PREFIX.len()..])
}

fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
