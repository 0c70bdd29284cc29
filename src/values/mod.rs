//! Validated attribute values
//!
//! Every URI- or date-shaped attribute is stored as one of these types, so a
//! malformed value is rejected when it is assigned, never when it is emitted.

mod date;
mod uri;

pub use date::Date;
pub use uri::{is_valid_uri, Uri};

use indexmap::IndexMap;

/// Language tag → text, iterated in insertion order
pub type LangMap = IndexMap<String, String>;

/// Build a [`LangMap`] from `(language, text)` pairs
pub fn lang_map<L, T>(entries: impl IntoIterator<Item = (L, T)>) -> LangMap
where
    L: Into<String>,
    T: Into<String>,
{
    entries
        .into_iter()
        .map(|(l, t)| (l.into(), t.into()))
        .collect()
}

/// Validate a list of URI strings, failing on the first malformed element
pub fn uri_list<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> crate::DcatResult<Vec<Uri>> {
    values.into_iter().map(|v| Uri::new(v.as_ref())).collect()
}
