//! Lexicon loader
//!
//! Manages embedded lexicons and manifests on disk. Resource files referenced
//! by a manifest degrade to empty tables when missing or malformed; strict
//! loading turns those conditions into errors instead.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::error::LexiconError;
use crate::lexicon::{config::LexiconConfig, runtime::Lexicon};

/// Built-in lexicons: (name, code, manifest)
const BUILTIN: &[(&str, &str, &str)] = &[(
    "telugu",
    "te",
    include_str!("../../configs/lexicons/telugu.toml"),
)];

/// Embedded lexicons, keyed by both name and code
static EMBEDDED: OnceLock<HashMap<String, Arc<Lexicon>>> = OnceLock::new();

/// Names and codes of the built-in lexicons
pub fn builtin_lexicons() -> Vec<(&'static str, &'static str)> {
    BUILTIN.iter().map(|(name, code, _)| (*name, *code)).collect()
}

/// Load a built-in lexicon by name or code
pub fn get_lexicon(name: &str) -> Result<Arc<Lexicon>, LexiconError> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for (name, code, manifest) in BUILTIN {
            match load_embedded(manifest) {
                Ok(lexicon) => {
                    let lexicon = Arc::new(lexicon);
                    map.insert(code.to_string(), Arc::clone(&lexicon));
                    map.insert(name.to_string(), lexicon);
                }
                Err(e) => {
                    log::warn!("Failed to load built-in lexicon {name}: {e}");
                }
            }
        }

        map
    });

    embedded
        .get(&name.to_lowercase())
        .cloned()
        .ok_or_else(|| LexiconError::UnknownLexicon(name.to_string()))
}

/// Parse an embedded manifest
fn load_embedded(manifest: &str) -> Result<Lexicon, LexiconError> {
    let config = LexiconConfig::from_toml(manifest)?;
    Lexicon::from_config(&config).map_err(LexiconError::Invalid)
}

/// Load a manifest from disk
///
/// Missing or malformed resource files are logged and treated as empty.
/// Cyclic sandhi entries are dropped with a warning.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, LexiconError> {
    let mut lexicon = load_manifest(path, false)?;

    let dropped = lexicon.remove_sandhi_cycles();
    if !dropped.is_empty() {
        log::warn!(
            "Dropped cyclic sandhi entries from {}: {}",
            path.display(),
            dropped.join(", ")
        );
    }

    Ok(lexicon)
}

/// Load a manifest from disk, failing on any data problem
///
/// Resource files must exist and parse, and the sandhi table must be free of
/// cycles.
pub fn load_lexicon_strict(path: &Path) -> Result<Lexicon, LexiconError> {
    let lexicon = load_manifest(path, true)?;

    let cyclic = lexicon.sandhi_cycles();
    if !cyclic.is_empty() {
        return Err(LexiconError::SandhiCycle(cyclic));
    }

    Ok(lexicon)
}

fn load_manifest(path: &Path, strict: bool) -> Result<Lexicon, LexiconError> {
    let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = LexiconConfig::from_toml(&text)?;
    config.validate().map_err(LexiconError::Invalid)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    merge_resources(&mut config, base_dir, strict)?;
    resolve_models(&mut config, base_dir);

    let lexicon = Lexicon::from_config(&config).map_err(LexiconError::Invalid)?;
    log::debug!(
        "Loaded lexicon {} ({}): {} prefixes, {} suffixes, {} sandhi entries, {} roots, {} words",
        lexicon.code(),
        lexicon.name(),
        lexicon.prefixes().len(),
        lexicon.suffixes().len(),
        lexicon.sandhi().len(),
        lexicon.root_count(),
        lexicon.known_word_count()
    );

    Ok(lexicon)
}

/// Append resource file contents to the inline tables
///
/// Empty affixes and sandhi entries with an empty component are dropped from
/// resource data, or rejected when strict.
fn merge_resources(
    config: &mut LexiconConfig,
    base_dir: &Path,
    strict: bool,
) -> Result<(), LexiconError> {
    let resources = config.resources.clone();

    if let Some(file) = &resources.prefixes {
        let path = base_dir.join(file);
        let prefixes: Vec<String> = load_resource(&path, strict)?;
        config
            .affixes
            .prefixes
            .extend(non_empty_affixes(prefixes, &path, strict)?);
    }

    if let Some(file) = &resources.suffixes {
        let path = base_dir.join(file);
        let suffixes: Vec<String> = load_resource(&path, strict)?;
        config
            .affixes
            .suffixes
            .extend(non_empty_affixes(suffixes, &path, strict)?);
    }

    if let Some(file) = &resources.sandhi_rules {
        let path = base_dir.join(file);
        let rules: HashMap<String, Vec<String>> = load_resource(&path, strict)?;
        config.sandhi.extend(complete_sandhi(rules, &path, strict)?);
    }

    if let Some(file) = &resources.known_roots {
        let roots: Vec<String> = load_resource(&base_dir.join(file), strict)?;
        config.roots.known.extend(roots);
    }

    Ok(())
}

fn non_empty_affixes(
    affixes: Vec<String>,
    path: &Path,
    strict: bool,
) -> Result<Vec<String>, LexiconError> {
    let total = affixes.len();
    let kept: Vec<String> = affixes.into_iter().filter(|a| !a.is_empty()).collect();
    let empty = total - kept.len();

    if empty > 0 {
        if strict {
            return Err(LexiconError::Invalid(format!(
                "{} contains an empty string",
                path.display()
            )));
        }
        log::warn!("Ignoring {empty} empty affix(es) in {}", path.display());
    }

    Ok(kept)
}

fn complete_sandhi(
    rules: HashMap<String, Vec<String>>,
    path: &Path,
    strict: bool,
) -> Result<HashMap<String, Vec<String>>, LexiconError> {
    let (kept, broken): (HashMap<_, _>, HashMap<_, _>) = rules
        .into_iter()
        .partition(|(_, components)| components.iter().all(|c| !c.is_empty()));

    if !broken.is_empty() {
        let mut keys: Vec<String> = broken.into_keys().collect();
        keys.sort();
        if strict {
            return Err(LexiconError::Invalid(format!(
                "sandhi entry '{}' in {} has an empty component",
                keys[0],
                path.display()
            )));
        }
        log::warn!(
            "Ignoring sandhi entries with an empty component in {}: {}",
            path.display(),
            keys.join(", ")
        );
    }

    Ok(kept)
}

fn resolve_models(config: &mut LexiconConfig, base_dir: &Path) {
    let resolve = |path: &mut Option<PathBuf>| {
        if let Some(p) = path.as_mut() {
            if p.is_relative() {
                *p = base_dir.join(&*p);
            }
        }
    };
    resolve(&mut config.models.morfessor);
    resolve(&mut config.models.bpe);
}

fn load_resource<T>(path: &Path, strict: bool) -> Result<T, LexiconError>
where
    T: DeserializeOwned + Default,
{
    match load_json_resource(path) {
        Ok(value) => Ok(value),
        Err(e) if !strict => {
            log::warn!("{e}; continuing with an empty table");
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}

/// Read and parse one JSON resource file
pub fn load_json_resource<T: DeserializeOwned>(path: &Path) -> Result<T, LexiconError> {
    let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LexiconError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_builtin_by_name_and_code() {
        let by_name = get_lexicon("telugu").unwrap();
        let by_code = get_lexicon("te").unwrap();

        assert_eq!(by_name.code(), "te");
        assert!(Arc::ptr_eq(&by_name, &by_code));
        assert!(get_lexicon("Telugu").is_ok());
    }

    #[test]
    fn test_builtin_known_words() {
        let lexicon = get_lexicon("te").unwrap();
        assert!(lexicon.is_known_word("ఇది"));
        assert!(lexicon.is_known_word("ఒక"));
    }

    #[test]
    fn test_builtin_has_no_sandhi_cycles() {
        assert!(get_lexicon("te").unwrap().sandhi_cycles().is_empty());
    }

    #[test]
    fn test_unknown_builtin() {
        let err = get_lexicon("klingon").unwrap_err();
        assert!(matches!(err, LexiconError::UnknownLexicon(_)));
    }

    #[test]
    fn test_builtin_listing() {
        assert!(builtin_lexicons().contains(&("telugu", "te")));
    }

    #[test]
    fn test_load_with_resources() {
        let dir = TempDir::new().unwrap();
        write(&dir, "prefixes.json", r#"["re"]"#);
        write(&dir, "suffixes.json", r#"["ing", "ed"]"#);
        write(&dir, "sandhi.json", r#"{"gonna": ["going", "to"]}"#);
        write(&dir, "roots.json", r#"["play"]"#);
        let manifest = write(
            &dir,
            "lexicon.toml",
            r#"
[metadata]
code = "en"
name = "English"

[affixes]
prefixes = ["un"]

[resources]
prefixes = "prefixes.json"
suffixes = "suffixes.json"
sandhi_rules = "sandhi.json"
known_roots = "roots.json"

[models]
bpe = "tokenizer.json"
"#,
        );

        let lexicon = load_lexicon(&manifest).unwrap();

        assert_eq!(lexicon.prefixes().len(), 2);
        assert!(lexicon.prefixes().contains("un"));
        assert!(lexicon.prefixes().contains("re"));
        assert_eq!(lexicon.extract_suffix("playing"), Some(("play", "ing")));
        assert!(lexicon.sandhi().lookup("gonna").is_some());
        assert!(lexicon.is_root("play"));
        assert_eq!(
            lexicon.models().bpe.as_deref(),
            Some(dir.path().join("tokenizer.json").as_path())
        );
    }

    #[test]
    fn test_missing_resource_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        write(&dir, "broken.json", "{ not json");
        let manifest = write(
            &dir,
            "lexicon.toml",
            r#"
[metadata]
code = "en"
name = "English"

[affixes]
suffixes = ["ing"]

[resources]
prefixes = "missing.json"
suffixes = "broken.json"
"#,
        );

        let lexicon = load_lexicon(&manifest).unwrap();
        assert!(lexicon.prefixes().is_empty());
        assert_eq!(lexicon.suffixes().len(), 1);
    }

    #[test]
    fn test_empty_resource_entries_are_dropped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "suffixes.json", r#"["ing", ""]"#);
        write(&dir, "prefixes.json", r#"["", "re"]"#);
        write(&dir, "sandhi.json", r#"{"ab": ["a", ""], "gonna": ["going", "to"]}"#);
        let manifest = write(
            &dir,
            "lexicon.toml",
            r#"
[metadata]
code = "en"
name = "English"

[resources]
prefixes = "prefixes.json"
suffixes = "suffixes.json"
sandhi_rules = "sandhi.json"
"#,
        );

        let lexicon = load_lexicon(&manifest).unwrap();
        assert_eq!(lexicon.suffixes().len(), 1);
        assert_eq!(lexicon.prefixes().len(), 1);
        assert!(lexicon.sandhi().lookup("ab").is_none());
        assert!(lexicon.sandhi().lookup("gonna").is_some());
    }

    #[test]
    fn test_strict_load_rejects_empty_resource_entries() {
        let dir = TempDir::new().unwrap();
        write(&dir, "suffixes.json", r#"["ing", ""]"#);
        write(&dir, "sandhi.json", r#"{"ab": ["a", ""]}"#);
        let suffixes = write(
            &dir,
            "suffixes.toml",
            r#"
[metadata]
code = "en"
name = "English"

[resources]
suffixes = "suffixes.json"
"#,
        );
        let sandhi = write(
            &dir,
            "sandhi.toml",
            r#"
[metadata]
code = "en"
name = "English"

[resources]
sandhi_rules = "sandhi.json"
"#,
        );

        let err = load_lexicon_strict(&suffixes).unwrap_err();
        assert!(err.to_string().contains("empty string"));
        let err = load_lexicon_strict(&sandhi).unwrap_err();
        assert!(err.to_string().contains("sandhi entry 'ab'"));
    }

    #[test]
    fn test_inline_empty_affix_is_rejected() {
        let dir = TempDir::new().unwrap();
        let manifest = write(
            &dir,
            "lexicon.toml",
            r#"
[metadata]
code = "en"
name = "English"

[affixes]
suffixes = ["ing", ""]
"#,
        );

        let err = load_lexicon(&manifest).unwrap_err();
        assert!(matches!(err, LexiconError::Invalid(_)));
    }

    #[test]
    fn test_strict_load_rejects_missing_resource() {
        let dir = TempDir::new().unwrap();
        let manifest = write(
            &dir,
            "lexicon.toml",
            r#"
[metadata]
code = "en"
name = "English"

[resources]
known_roots = "missing.json"
"#,
        );

        let err = load_lexicon_strict(&manifest).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    #[test]
    fn test_strict_load_rejects_malformed_resource() {
        let dir = TempDir::new().unwrap();
        write(&dir, "roots.json", r#"{"not": "a list"}"#);
        let manifest = write(
            &dir,
            "lexicon.toml",
            r#"
[metadata]
code = "en"
name = "English"

[resources]
known_roots = "roots.json"
"#,
        );

        let err = load_lexicon_strict(&manifest).unwrap_err();
        assert!(matches!(err, LexiconError::Json { .. }));
    }

    #[test]
    fn test_cycles_dropped_leniently_rejected_strictly() {
        let dir = TempDir::new().unwrap();
        let manifest = write(
            &dir,
            "lexicon.toml",
            r#"
[metadata]
code = "x"
name = "Cyclic"

[sandhi]
"ab" = ["a", "ab"]
"cd" = ["c", "d"]
"#,
        );

        let lexicon = load_lexicon(&manifest).unwrap();
        assert!(lexicon.sandhi().lookup("ab").is_none());
        assert!(lexicon.sandhi().lookup("cd").is_some());

        let err = load_lexicon_strict(&manifest).unwrap_err();
        assert!(matches!(err, LexiconError::SandhiCycle(keys) if keys == vec!["ab"]));
    }

    #[test]
    fn test_missing_manifest() {
        let err = load_lexicon(Path::new("/nonexistent/lexicon.toml")).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    #[test]
    fn test_invalid_manifest_schema() {
        let dir = TempDir::new().unwrap();
        let manifest = write(
            &dir,
            "lexicon.toml",
            r#"
[metadata]
code = "x"
name = ""
"#,
        );

        let err = load_lexicon(&manifest).unwrap_err();
        assert!(matches!(err, LexiconError::Invalid(_)));
    }
}
