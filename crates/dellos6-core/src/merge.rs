// ── Merge pipeline ──
//
// Every fact domain folds records from several command outputs into one map
// keyed by canonical identity. Sources are applied in a fixed order; each
// `apply` closure only writes the fields its source is authoritative for,
// so a later source never erases what an earlier one established.

use indexmap::IndexMap;
use tracing::trace;

/// What an overlay does with a key the map does not hold yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Create the entity from defaults, then apply.
    Insert,
    /// Skip the record.
    ExistingOnly,
}

/// Per-domain entity map with a default constructor for new keys.
#[derive(Debug, Clone)]
pub struct EntityMap<E> {
    entries: IndexMap<String, E>,
    default: fn(&str) -> E,
}

impl<E> EntityMap<E> {
    pub fn new(default: fn(&str) -> E) -> Self {
        Self {
            entries: IndexMap::new(),
            default,
        }
    }

    /// Fold `records` into the map.
    ///
    /// `key` maps a record to its canonical identity; records with an empty
    /// key are skipped. Returns the number of records applied.
    pub fn overlay<R>(
        &mut self,
        records: &[R],
        policy: KeyPolicy,
        mut key: impl FnMut(&R) -> String,
        mut apply: impl FnMut(&mut E, &R),
    ) -> usize {
        let mut applied = 0;
        for record in records {
            let k = key(record);
            if k.is_empty() {
                trace!("skipping record without a key");
                continue;
            }
            let entity = match policy {
                KeyPolicy::Insert => {
                    let default = self.default;
                    self.entries.entry(k).or_insert_with_key(|k| default(k))
                }
                KeyPolicy::ExistingOnly => match self.entries.get_mut(&k) {
                    Some(entity) => entity,
                    None => {
                        trace!(key = %k, "no existing entity, skipping record");
                        continue;
                    }
                },
            };
            apply(entity, record);
            applied += 1;
        }
        applied
    }

    /// Entity for `key`, created from defaults if missing.
    pub fn entry(&mut self, key: impl Into<String>) -> &mut E {
        let default = self.default;
        self.entries
            .entry(key.into())
            .or_insert_with_key(|k| default(k))
    }

    pub fn get(&self, key: &str) -> Option<&E> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, E> {
        self.entries
    }
}

impl<E: Default> EntityMap<E> {
    /// Map whose new entities start from `E::default()`.
    pub fn with_defaults() -> Self {
        Self::new(|_| E::default())
    }
}

/// Derive a boolean state from raw device text.
///
/// Starts from `prior`; a case-insensitive match of `down` sets `false`,
/// then a match of `up` sets `true`. Text matching neither keeps `prior`.
pub fn derive_state(raw: &str, down: &str, up: &str, prior: bool) -> bool {
    let raw = raw.to_ascii_lowercase();
    let mut state = prior;
    if !down.is_empty() && raw.contains(&down.to_ascii_lowercase()) {
        state = false;
    }
    if !up.is_empty() && raw.contains(&up.to_ascii_lowercase()) {
        state = true;
    }
    state
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Port {
        up: bool,
        mtu: i64,
        note: String,
    }

    fn port(_: &str) -> Port {
        Port {
            up: false,
            mtu: 1500,
            note: String::new(),
        }
    }

    #[test]
    fn later_silent_source_keeps_earlier_state() {
        let mut map = EntityMap::new(port);
        let status = [("Te1/0/1", "Up"), ("Te1/0/2", "Down")];
        map.overlay(&status, KeyPolicy::Insert, |r| r.0.into(), |e, r| {
            e.up = derive_state(r.1, "down", "up", e.up);
        });

        // Configuration source: owns MTU, has no opinion on link state.
        let config = [("Te1/0/1", 9216_i64)];
        map.overlay(&config, KeyPolicy::ExistingOnly, |r| r.0.into(), |e, r| {
            e.mtu = r.1;
        });

        let te1 = map.get("Te1/0/1").unwrap();
        assert!(te1.up);
        assert_eq!(te1.mtu, 9216);
        assert!(!map.get("Te1/0/2").unwrap().up);
    }

    #[test]
    fn existing_only_skips_unknown_keys() {
        let mut map = EntityMap::new(port);
        map.overlay(&["a"], KeyPolicy::Insert, |r| (*r).into(), |_, _| {});
        let applied = map.overlay(&["a", "b"], KeyPolicy::ExistingOnly, |r| (*r).into(), |e, r| {
            e.note = (*r).into();
        });
        assert_eq!(applied, 1);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a"]);
        assert_eq!(map.get("a").unwrap().note, "a");
    }

    #[test]
    fn insert_creates_from_defaults_and_skips_empty_keys() {
        let mut map: EntityMap<Port> = EntityMap::new(port);
        let applied = map.overlay(&["", "x"], KeyPolicy::Insert, |r| (*r).into(), |_, _| {});
        assert_eq!(applied, 1);
        assert_eq!(map.get("x"), Some(&port("x")));
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut map: EntityMap<u8> = EntityMap::with_defaults();
        map.overlay(&["z", "a", "m", "a"], KeyPolicy::Insert, |r| (*r).into(), |e, _| *e += 1);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
        assert_eq!(map.into_inner()["a"], 2);
    }

    #[test]
    fn derive_state_only_overwrites_on_match() {
        assert!(derive_state("Up", "down", "up", false));
        assert!(!derive_state("DOWN", "down", "up", true));
        assert!(derive_state("Detach", "down", "up", true));
        assert!(!derive_state("Detach", "down", "up", false));
        assert!(derive_state("Link Up", "link down", "link up", false));
        assert!(!derive_state("Link Down", "link down", "link up", true));
    }
}
