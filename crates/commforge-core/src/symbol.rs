//! Solver-legal symbols and the name registry.
//!
//! User-facing names are free text; the solver's command grammar only
//! accepts identifiers matching `[A-Z_][A-Z0-9_]*`. [`sanitize`] derives
//! the canonical symbol for a name and [`unique_name`] resolves collisions
//! within a namespace by appending the smallest free `_N` suffix. Both are
//! deterministic: for a fixed input set the result never depends on call
//! order among non-conflicting names.

use indexmap::IndexSet;
use std::fmt;

/// Fallback root for names with no legal characters at all.
pub const FALLBACK_SYMBOL: &str = "UNNAMED";

/// A solver-legal identifier derived from a user-facing name.
///
/// A `Symbol` always matches `[A-Z_][A-Z0-9_]*` and never starts or ends
/// with an underscore. Symbols are only constructed through [`sanitize`]
/// and [`unique_name`], so holding one is proof the name is emittable.
///
/// # Examples
///
/// ```
/// use commforge_core::symbol::sanitize;
///
/// let sym = sanitize("Concrete C30/37");
/// assert_eq!(sym.as_str(), "CONCRETE_C30_37");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// View the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the symbol, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalize a free-text name into a solver-legal [`Symbol`].
///
/// Alphanumeric characters are uppercased; every other character becomes
/// an underscore; runs of underscores collapse to one; leading and
/// trailing underscores are stripped. Input with no legal characters
/// yields [`FALLBACK_SYMBOL`]. A result that would start with a digit is
/// prefixed with `N_` so the symbol still starts with a letter.
///
/// Idempotent: `sanitize(sanitize(x)) == sanitize(x)` for all `x`.
///
/// # Examples
///
/// ```
/// use commforge_core::symbol::sanitize;
///
/// assert_eq!(sanitize("fix base  (left)").as_str(), "FIX_BASE_LEFT");
/// assert_eq!(sanitize("___").as_str(), "UNNAMED");
/// assert_eq!(sanitize("2nd floor").as_str(), "N_2ND_FLOOR");
/// ```
pub fn sanitize(raw: &str) -> Symbol {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            out.push(ch.to_ascii_uppercase());
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }
    if out.is_empty() {
        return Symbol(FALLBACK_SYMBOL.to_string());
    }
    if out.as_bytes()[0].is_ascii_digit() {
        out.insert_str(0, "N_");
    }
    Symbol(out)
}

/// Resolve `base` to a symbol that is not in `taken`.
///
/// The base is sanitized first and any trailing `_<digits>` suffixes are
/// stripped so repeated uniquification cannot accumulate (`X_1` renamed
/// in a set containing `X_1` becomes `X_2`, never `X_1_1`). If the
/// stripped stem is free it is returned as-is; otherwise `_N` is appended
/// for the smallest `N >= 1` not taken. An empty base falls back to
/// [`FALLBACK_SYMBOL`].
///
/// When renaming an existing entity, the caller must omit the entity's
/// own current symbol from `taken`, otherwise a no-op rename would still
/// pick up a suffix.
///
/// # Examples
///
/// ```
/// use commforge_core::symbol::{sanitize, unique_name};
/// use indexmap::IndexSet;
///
/// let mut taken = IndexSet::new();
/// taken.insert(sanitize("plate"));
///
/// assert_eq!(unique_name("plate", &taken).as_str(), "PLATE_1");
/// assert_eq!(unique_name("beam", &taken).as_str(), "BEAM");
/// ```
pub fn unique_name(base: &str, taken: &IndexSet<Symbol>) -> Symbol {
    let sanitized = sanitize(base);
    let stem = strip_numeric_suffixes(sanitized.as_str());
    let candidate = Symbol(stem.to_string());
    if !taken.contains(&candidate) {
        return candidate;
    }
    let mut n = 1u32;
    loop {
        let candidate = Symbol(format!("{stem}_{n}"));
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Whether `name` is usable verbatim as a mesh-group reference.
///
/// Group names originate in the mesh file and are quoted into commands
/// as-is, so unlike concept symbols they keep their case; they must
/// still be identifier-shaped (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_valid_group_ref(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Strip every trailing `_<digits>` group from `name`.
fn strip_numeric_suffixes(mut name: &str) -> &str {
    loop {
        let Some(pos) = name.rfind('_') else {
            return name;
        };
        let (head, tail) = name.split_at(pos);
        let digits = &tail[1..];
        if head.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return name;
        }
        name = head;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── sanitize ────────────────────────────────────────────────

    #[test]
    fn sanitize_uppercases_and_collapses() {
        assert_eq!(sanitize("Concrete  C30").as_str(), "CONCRETE_C30");
        assert_eq!(sanitize("a--b__c").as_str(), "A_B_C");
    }

    #[test]
    fn sanitize_strips_edge_underscores() {
        assert_eq!(sanitize("_edge_").as_str(), "EDGE");
        assert_eq!(sanitize("  spaced  ").as_str(), "SPACED");
    }

    #[test]
    fn sanitize_empty_input_falls_back() {
        assert_eq!(sanitize("").as_str(), FALLBACK_SYMBOL);
        assert_eq!(sanitize("!!!").as_str(), FALLBACK_SYMBOL);
    }

    #[test]
    fn sanitize_digit_start_gets_prefix() {
        assert_eq!(sanitize("42").as_str(), "N_42");
        assert_eq!(sanitize("3 supports").as_str(), "N_3_SUPPORTS");
    }

    // ── unique_name ─────────────────────────────────────────────

    fn taken(names: &[&str]) -> IndexSet<Symbol> {
        names.iter().map(|n| sanitize(n)).collect()
    }

    #[test]
    fn unique_name_free_base_passes_through() {
        assert_eq!(unique_name("deck", &taken(&[])).as_str(), "DECK");
    }

    #[test]
    fn unique_name_appends_smallest_free_suffix() {
        let set = taken(&["DECK", "DECK_1", "DECK_3"]);
        assert_eq!(unique_name("deck", &set).as_str(), "DECK_2");
    }

    #[test]
    fn unique_name_strips_existing_suffix_first() {
        let set = taken(&["DECK", "DECK_1"]);
        // "DECK_1_1" must not appear: the stem collapses back to DECK.
        assert_eq!(unique_name("DECK_1", &set).as_str(), "DECK_2");
        assert_eq!(unique_name("DECK_1_1_1", &set).as_str(), "DECK_2");
    }

    #[test]
    fn unique_name_empty_base_uses_fallback() {
        assert_eq!(unique_name("", &taken(&[])).as_str(), FALLBACK_SYMBOL);
        let set = taken(&[FALLBACK_SYMBOL]);
        assert_eq!(unique_name("", &set).as_str(), "UNNAMED_1");
    }

    // ── group references ────────────────────────────────────────

    #[test]
    fn group_refs_keep_case_but_must_be_identifier_shaped() {
        assert!(is_valid_group_ref("Beam_Group"));
        assert!(is_valid_group_ref("_internal"));
        assert!(!is_valid_group_ref("2sided"));
        assert!(!is_valid_group_ref("has space"));
        assert!(!is_valid_group_ref(""));
    }

    // ── properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn sanitize_is_idempotent(raw in ".*") {
            let once = sanitize(&raw);
            prop_assert_eq!(sanitize(once.as_str()), once);
        }

        #[test]
        fn sanitize_output_is_always_legal(raw in ".*") {
            let sym = sanitize(&raw);
            let bytes = sym.as_str().as_bytes();
            prop_assert!(!bytes.is_empty());
            prop_assert!(bytes[0].is_ascii_uppercase());
            prop_assert!(!sym.as_str().ends_with('_'));
            prop_assert!(sym
                .as_str()
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'));
            prop_assert!(!sym.as_str().contains("__"));
        }

        #[test]
        fn unique_name_list_has_no_duplicates(
            bases in proptest::collection::vec(".*", 0..24)
        ) {
            let mut assigned = IndexSet::new();
            for base in &bases {
                let name = unique_name(base, &assigned);
                prop_assert!(assigned.insert(name));
            }
        }
    }
}
