//! Lexical resource store
//!
//! Prefix and suffix lists, the sandhi table and the root/known-word sets,
//! loaded once from a manifest (or an embedded lexicon) and read-only
//! afterwards.

pub mod config;
pub mod loader;
pub mod runtime;
pub mod tables;

pub use config::{LexiconConfig, Models};
pub use loader::{builtin_lexicons, get_lexicon, load_lexicon, load_lexicon_strict};
pub use runtime::{Lexicon, LexiconBuilder};
pub use tables::{AffixList, SandhiTable};
