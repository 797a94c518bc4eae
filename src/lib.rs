//! Compiler for RCD game data files: a small declarative language
//! describing sprites, animations, widget skins, shops, and localized
//! strings is resolved and emitted as `RCDF` containers.

pub mod ast;
pub mod blocks;
pub mod diagnostic;
pub mod image;
pub mod parser;
pub mod resolve;
pub mod ser;
pub mod strings;

pub use resolve::Resolver;

use codemap::{CodeMap, File};
use diagnostic::Result;

/// Compile one source file and write every RCD file it defines.
pub fn compile(code_map: &CodeMap, file: &File) -> Result<()> {
    let root = parser::parse_file(file)?;
    let files = Resolver::new(code_map).check_tree(root)?;
    files.write()
}
