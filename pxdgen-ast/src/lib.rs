//! C header AST model for the pxdgen declaration generator.
//!
//! This crate provides the node types consumed by the rendering pass. The
//! nodes are produced by an external clang front end as a JSON dump and
//! deserialized here; the renderer only ever reads them.
//!
//! # Architecture
//!
//! ```text
//! header.h → clang front end → JSON dump → pxdgen-ast (Module) → pxdgen-codegen
//! ```
//!
//! The model is designed to be:
//! - Closed: every node kind is a variant of a tagged enum, so the renderer
//!   can match exhaustively
//! - Self-contained: a type reference carries the spelling and origin the
//!   renderer needs, instead of pointing into a shared object graph
//! - Immutable once deserialized

mod ctype;
mod module;
mod nodes;

pub use ctype::CType;
pub use module::{Header, Item, Location, Module};
pub use nodes::{Argument, Enum, EnumValue, Field, Function, Struct, Type, Typedef, Union};
