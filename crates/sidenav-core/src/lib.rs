pub mod index;
pub mod manifest;
pub mod parse;
pub mod validate;

pub use index::{ItemGroup, ItemKind, SidebarIndex, SidebarItem};
pub use manifest::IndexManifest;
pub use parse::ParseError;
pub use validate::{Rule, Severity, Violation};
