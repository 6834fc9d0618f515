//! Compilation database loading
//!
//! Reads `compile_commands.json` once at startup and produces the ordered
//! list of source file paths the server advertises. Load failures are never
//! fatal: the server runs with an empty list and logs what went wrong.

use std::path::Path;

use serde::Deserialize;

/// One record from the compilation database. Only the fields the server
/// cares about are kept; `command`/`arguments`/`output` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileCommandEntry {
    pub file: String,
    #[serde(default)]
    pub directory: Option<String>,
}

impl CompileCommandEntry {
    /// Path advertised for this entry. A relative `file` is resolved
    /// against the entry's `directory`, per the compilation-database format.
    fn resolved_path(&self) -> String {
        if Path::new(&self.file).is_absolute() {
            return self.file.clone();
        }
        match &self.directory {
            Some(dir) => Path::new(dir).join(&self.file).to_string_lossy().into_owned(),
            None => self.file.clone(),
        }
    }
}

/// Load the ordered file list from the compilation database at `path`.
///
/// Missing file, unreadable file, and malformed JSON all degrade to an
/// empty list; the condition is logged and the server keeps running.
pub fn load_file_list(path: &Path) -> Vec<String> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Error reading {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let entries: Vec<CompileCommandEntry> = match serde_json::from_str(&data) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Error parsing {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let files: Vec<String> = entries.iter().map(CompileCommandEntry::resolved_path).collect();
    tracing::info!("Loaded {} file(s) from {}", files.len(), path.display());
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_db(contents: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut f = std::fs::File::create(dir.path().join("compile_commands.json"))
            .expect("create db");
        f.write_all(contents.as_bytes()).expect("write db");
        dir
    }

    #[test]
    fn test_preserves_document_order() {
        let dir = write_db(r#"[{"file":"/tmp/a.c"}, {"file":"/tmp/b.c"}]"#);
        let files = load_file_list(&dir.path().join("compile_commands.json"));
        assert_eq!(files, vec!["/tmp/a.c", "/tmp/b.c"]);
    }

    #[test]
    fn test_ignores_extra_fields() {
        let dir = write_db(
            r#"[{"directory":"/src","command":"cc -c main.c","file":"/src/main.c","output":"main.o"}]"#,
        );
        let files = load_file_list(&dir.path().join("compile_commands.json"));
        assert_eq!(files, vec!["/src/main.c"]);
    }

    #[test]
    fn test_relative_file_resolved_against_directory() {
        let dir = write_db(r#"[{"directory":"/src/lib","file":"util.c"}]"#);
        let files = load_file_list(&dir.path().join("compile_commands.json"));
        assert_eq!(files, vec!["/src/lib/util.c"]);
    }

    #[test]
    fn test_missing_database_yields_empty_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        let files = load_file_list(&dir.path().join("compile_commands.json"));
        assert!(files.is_empty());
    }

    #[test]
    fn test_malformed_database_yields_empty_list() {
        let dir = write_db("{not json");
        let files = load_file_list(&dir.path().join("compile_commands.json"));
        assert!(files.is_empty());
    }
}
