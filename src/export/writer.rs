//! Schreibt das Alignment-Dokument als JSON-Datei.

use super::AlignmentDocument;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Serialisiert das Dokument (UTF-8, eingerückt, abschließender Zeilenumbruch).
///
/// Gleicher Store-Inhalt ergibt byte-identische Ausgabe.
pub fn write_alignment_json(document: &AlignmentDocument) -> Result<String> {
    let mut output = serde_json::to_string_pretty(document)?;
    output.push('\n');
    Ok(output)
}

/// Hängt `suffix` an, falls der Pfad nicht bereits darauf endet.
pub fn with_export_suffix(path: &Path, suffix: &str) -> PathBuf {
    if suffix.is_empty() || path.to_string_lossy().ends_with(suffix) {
        return path.to_path_buf();
    }
    let mut raw = path.as_os_str().to_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}

/// Schreibt das Dokument an `path` (mit erzwungener Dateiendung).
///
/// Serialisiert vollständig, bevor die Datei geöffnet wird. Gibt den
/// tatsächlich geschriebenen Pfad zurück.
pub fn write_alignment_file(
    document: &AlignmentDocument,
    path: &Path,
    suffix: &str,
) -> Result<PathBuf> {
    let content = write_alignment_json(document)?;
    let target = with_export_suffix(path, suffix);
    std::fs::write(&target, content)
        .with_context(|| format!("Export-Datei nicht schreibbar: {}", target.display()))?;
    Ok(target)
}
