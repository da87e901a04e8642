//! XMind package to Markdown outline conversion
//!
//!     This crate converts XMind mind-map packages into a Markdown outline:
//!     headings for sheets and root topics, nested bullet lists for child
//!     topics, blockquotes for notes. It supports both internal schemas an
//!     .xmind file can carry: the modern content.json attribute tree
//!     (XMind Zen/2020) and the legacy content.xml element tree (XMind 8).
//!
//!     This is a pure lib: it powers the xmind2md binary but is shell
//!     agnostic, so no code here should suppose a shell environment (no std
//!     print, no env vars).
//!
//! Architecture
//!
//!     The real complexity lives in the dual-schema normalization layer.
//!     The two source encodings express the same conceptual model through
//!     very different shapes (key-value containers vs namespaced markup,
//!     each with several competing spellings per field), so each gets its
//!     own normalizer that reduces it to one canonical topic tree
//!     (./model.rs). The renderer only ever sees that tree, which keeps the
//!     per-format quirks contained in ./formats/.
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # ConvertError
//!     ├── model.rs            # canonical Topic / Sheet / Document
//!     ├── package.rs          # zip access + schema detection (names only)
//!     ├── formats
//!     │   ├── json.rs         # attribute-tree normalizer (content.json)
//!     │   └── xml.rs          # element-tree normalizer (content.xml)
//!     ├── outline             # Markdown outline renderer
//!     ├── convert.rs          # conversion facade (the public entry point)
//!     └── lib.rs
//!
//! Error Philosophy
//!
//!     Only structural failures abort a conversion: a missing input file, a
//!     package with neither recognized entry, or an unrecognizable top
//!     level in the modern document. Everything below that degrades softly:
//!     a malformed title, note, label list, marker list, hyperlink, or
//!     children container resolves to an empty default so that partially
//!     broken documents still produce a best-effort outline. There is no
//!     retry anywhere; failures are deterministic functions of input shape.
//!
//! Accepted Information Loss
//!
//!     Round-tripping back into either source schema is a non-goal, and so
//!     is styling/theme preservation. Detached topics (visually unlinked
//!     nodes in the authoring tool) are flattened into ordinary children
//!     after the attached ones, with no distinguishing marker.
//!
//! Testing
//!
//!     tests/
//!     ├── lib.rs              # mod declarations (cargo does not discover
//!     │                       # tests in subdirectories by itself)
//!     ├── common/             # zip package builders shared by the suites
//!     ├── json/               # attribute-tree pipeline
//!     ├── xml/                # element-tree pipeline
//!     ├── outline/            # rendering, escaping, toggles, depth limit
//!     └── package/            # detection and facade behavior

pub mod convert;
pub mod error;
pub mod formats;
pub mod model;
pub mod outline;
pub mod package;

pub use convert::{convert_to_outline, load_document};
pub use error::ConvertError;
pub use model::{Document, Sheet, Topic};
pub use outline::OutlineOptions;
pub use package::Schema;
