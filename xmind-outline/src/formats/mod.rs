//! Source-schema normalizers
//!
//! Each submodule turns one package schema into the canonical topic tree.
//! The two pipelines implement the same seam (`parse_document(&str) ->
//! Result<Document, ConvertError>`) but are deliberately kept as separate
//! implementations: the source formats are different enough syntactically
//! that forcing a shared abstraction would obscure the per-format quirks
//! (container shapes, attribute spellings, wrapper elements).

pub mod json;
pub mod xml;
