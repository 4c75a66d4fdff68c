//! Export des Alignments als strukturiertes Dokument.

mod document;
mod writer;

pub use document::{
    build_alignment_document, connection_count, AlignmentDocument, ConnectionRecord,
    ExportOrientation, ExportPosition, MapAlignment,
};
pub use writer::{with_export_suffix, write_alignment_file, write_alignment_json};
