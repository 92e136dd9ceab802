//! Interface name canonicalization.
//!
//! Dell OS6 spells the same port several ways (`Te1/0/1` in tables,
//! `Tengigabitethernet1/0/1` in configuration). Every fact domain keys its
//! entities by the long form produced here.

use tracing::trace;

/// Ordered short-prefix → long-form mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
}

impl AliasTable {
    /// An empty table; every token passes through unchanged.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The Dell OS6 interface vocabulary.
    pub fn dellos6() -> Self {
        [
            ("Fo", "Fortygigabitethernet"),
            ("Gi", "GigabitEthernet"),
            ("oob", "out-of-band"),
            ("Lo", "Loopback"),
            ("Management", "out-of-band"),
            ("Po", "port-channel"),
            ("Te", "Tengigabitethernet"),
            ("Vl", "vlan "),
        ]
        .into_iter()
        .fold(Self::empty(), |table, (alias, long)| table.with(alias, long))
    }

    /// Add or replace the mapping for `alias`.
    pub fn with(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.insert(alias, canonical);
        self
    }

    pub fn insert(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        let alias = alias.into();
        let canonical = canonical.into();
        match self.entries.iter_mut().find(|(a, _)| *a == alias) {
            Some(entry) => entry.1 = canonical,
            None => self.entries.push((alias, canonical)),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::dellos6()
    }
}

/// Maps device-reported interface tokens to canonical long-form names.
#[derive(Debug, Clone)]
pub struct NameCanonicalizer {
    aliases: AliasTable,
}

impl NameCanonicalizer {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Canonical long-form name for `token`.
    ///
    /// The longest alias that prefixes `token` at a word boundary (the rest
    /// is empty or starts with a non-letter) is replaced by its long form;
    /// the slot/port suffix is kept verbatim and the result is trimmed.
    /// Names already in long form
    /// and names no alias matches are returned unchanged.
    pub fn canonicalize(&self, token: &str) -> String {
        let token = token.trim();

        if self
            .aliases
            .entries()
            .any(|(_, long)| prefix_at_boundary(token, long))
        {
            return token.to_owned();
        }

        let best = self
            .aliases
            .entries()
            .filter(|(alias, _)| prefix_at_boundary(token, alias))
            .max_by_key(|(alias, _)| alias.len());

        match best {
            // `Vl` alone would otherwise leave the trailing space of `vlan `.
            Some((alias, long)) => format!("{long}{}", &token[alias.len()..])
                .trim_end()
                .to_owned(),
            None => {
                trace!(token, "no alias for interface name, passing through");
                token.to_owned()
            }
        }
    }
}

impl Default for NameCanonicalizer {
    fn default() -> Self {
        Self::new(AliasTable::dellos6())
    }
}

fn prefix_at_boundary(token: &str, prefix: &str) -> bool {
    token
        .strip_prefix(prefix)
        .is_some_and(|rest| !rest.starts_with(|c: char| c.is_ascii_alphabetic()))
}
