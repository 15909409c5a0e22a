//! Runtime lookup tables built from a lexicon configuration

pub mod affix;
pub mod sandhi;

pub use affix::AffixList;
pub use sandhi::SandhiTable;
