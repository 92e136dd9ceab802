// ── Record extraction ──
//
// Raw command output plus a template id in, ordered field → value rows out.
// A template that matches nothing yields an empty list, never an error.

mod template;

use indexmap::IndexMap;

use crate::error::Error;

pub use template::{Mode, Template, TemplateSet};

/// One extracted row. Every value a template declares is present, in
/// declaration order; values the output did not provide are empty.
pub type Record = IndexMap<String, String>;

/// Turns raw command output into records.
pub trait RecordExtractor {
    /// Extract all records `template` finds in `raw`.
    ///
    /// Fails only when `template` is unknown.
    fn extract(&self, template: &str, raw: &str) -> Result<Vec<Record>, Error>;
}
