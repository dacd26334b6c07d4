//! Document parsing: frontmatter location, the YAML subset, and markdown
//! extraction helpers.

pub mod frontmatter;
pub mod markdown;
pub mod value;
pub mod yaml;

pub use frontmatter::{extract_frontmatter_field, parse_document, FrontmatterDocument};
pub use value::{Mapping, Scalar, Value};
pub use yaml::{parse_block, YamlError, YamlErrorKind};
