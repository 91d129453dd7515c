//! # Raw Document Access
//!
//! Thin navigation layer over the parsed YAML document. `Section` carries a
//! dotted breadcrumb path so every lookup failure can name exactly where in
//! the document it happened, and `Aliased` lets one lookup try a canonical
//! key plus its historical spellings in a fixed priority order.

use serde_yaml::Value;

use crate::error::SpecError;

/// A field or section name together with its legacy aliases.
///
/// Candidates are tried canonical-first; error messages always use the
/// canonical name so old documents get told the modern spelling.
#[derive(Debug, Clone, Copy)]
pub struct Aliased {
    canonical: &'static str,
    aliases: &'static [&'static str],
}

impl Aliased {
    /// A name with no legacy spellings.
    pub const fn plain(canonical: &'static str) -> Self {
        Self {
            canonical,
            aliases: &[],
        }
    }

    /// A name with legacy spellings, in lookup priority order.
    pub const fn with_aliases(canonical: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { canonical, aliases }
    }

    /// The modern spelling, used in canonical paths and error messages.
    pub fn canonical(&self) -> &'static str {
        self.canonical
    }

    /// Every accepted spelling in lookup order, canonical first.
    pub fn candidates(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.canonical).chain(self.aliases.iter().copied())
    }
}

/// Whole parsed spec document.
#[derive(Debug)]
pub struct RawDocument {
    root: Value,
}

impl RawDocument {
    /// Parses YAML text. The root must be a mapping.
    pub fn parse(text: &str) -> Result<Self, SpecError> {
        let root: Value = serde_yaml::from_str(text)?;
        if !root.is_mapping() {
            return Err(SpecError::RootNotMapping);
        }
        Ok(Self { root })
    }

    /// Looks up a top-level section by alias, if present.
    pub fn section(&self, name: &Aliased) -> Result<Option<Section<'_>>, SpecError> {
        let root = Section {
            path: String::new(),
            value: &self.root,
        };
        root.child(name)
    }
}

/// Borrowed view of one mapping inside the document.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    path: String,
    value: &'a Value,
}

impl<'a> Section<'a> {
    /// Dotted location of this section, for diagnostics.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn join(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Canonical dotted path of a field inside this section.
    pub fn field_path(&self, name: &Aliased) -> String {
        self.join(name.canonical())
    }

    fn lookup(&self, name: &Aliased) -> Option<&'a Value> {
        name.candidates().find_map(|key| self.value.get(key))
    }

    /// Child mapping under the first present alias, if any.
    pub fn child(&self, name: &Aliased) -> Result<Option<Section<'a>>, SpecError> {
        let Some(value) = self.lookup(name) else {
            return Ok(None);
        };
        if !value.is_mapping() {
            return Err(SpecError::invalid(
                self.join(name.canonical()),
                "mapping",
                describe(value),
            ));
        }
        Ok(Some(Section {
            path: self.join(name.canonical()),
            value,
        }))
    }

    /// Child mapping that must exist.
    pub fn require_child(&self, name: &Aliased) -> Result<Section<'a>, SpecError> {
        self.child(name)?
            .ok_or_else(|| SpecError::missing(self.join(name.canonical())))
    }

    /// Finite numeric field, if present. A present non-number is an error,
    /// never a silent skip.
    pub fn number(&self, name: &Aliased) -> Result<Option<f64>, SpecError> {
        let Some(value) = self.lookup(name) else {
            return Ok(None);
        };
        let parsed = value.as_f64().filter(|n| n.is_finite());
        match parsed {
            Some(n) => Ok(Some(n)),
            None => Err(SpecError::invalid(
                self.join(name.canonical()),
                "finite number",
                describe(value),
            )),
        }
    }

    /// Finite numeric field that must exist.
    pub fn require_number(&self, name: &Aliased) -> Result<f64, SpecError> {
        self.number(name)?
            .ok_or_else(|| SpecError::missing(self.join(name.canonical())))
    }

    /// Finite numeric field with an explicit caller-supplied default.
    pub fn number_or(&self, name: &Aliased, default: f64) -> Result<f64, SpecError> {
        Ok(self.number(name)?.unwrap_or(default))
    }

    /// Sequence field, if present, with each element wrapped as a section.
    pub fn sequence(&self, name: &Aliased) -> Result<Option<Vec<Section<'a>>>, SpecError> {
        let Some(value) = self.lookup(name) else {
            return Ok(None);
        };
        let Some(items) = value.as_sequence() else {
            return Err(SpecError::invalid(
                self.join(name.canonical()),
                "sequence",
                describe(value),
            ));
        };
        let base = self.join(name.canonical());
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                if !item.is_mapping() {
                    return Err(SpecError::invalid(
                        format!("{base}[{idx}]"),
                        "mapping",
                        describe(item),
                    ));
                }
                Ok(Section {
                    path: format!("{base}[{idx}]"),
                    value: item,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Mapping field iterated in document order as (key, section) pairs.
    /// Used for the legacy named-corner hole layout.
    pub fn named_entries(&self, name: &Aliased) -> Result<Option<Vec<(String, Section<'a>)>>, SpecError> {
        let Some(value) = self.lookup(name) else {
            return Ok(None);
        };
        let Some(mapping) = value.as_mapping() else {
            return Err(SpecError::invalid(
                self.join(name.canonical()),
                "mapping",
                describe(value),
            ));
        };
        let base = self.join(name.canonical());
        let mut entries = Vec::with_capacity(mapping.len());
        for (key, item) in mapping {
            let Some(label) = key.as_str() else {
                return Err(SpecError::invalid(base.clone(), "string keys", describe(key)));
            };
            let path = format!("{base}.{label}");
            if !item.is_mapping() {
                return Err(SpecError::invalid(path, "mapping", describe(item)));
            }
            entries.push((label.to_string(), Section { path, value: item }));
        }
        Ok(Some(entries))
    }
}

/// Short human description of a YAML value for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Sequence(items) => format!("sequence of {}", items.len()),
        Value::Mapping(entries) => format!("mapping of {}", entries.len()),
        Value::Tagged(tagged) => format!("tagged {}", tagged.tag),
    }
}

// =============================================================================
// TESTS
// =============================================================================
