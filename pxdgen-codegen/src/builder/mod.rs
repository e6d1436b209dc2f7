//! Text emission building blocks for generated `.pxd` units.

mod code;
mod imports;
mod indent;

pub use code::{CodeBuilder, GENERATED_HEADER};
pub use imports::ImportSet;
pub use indent::Indent;
