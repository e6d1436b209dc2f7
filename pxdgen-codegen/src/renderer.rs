//! Declaration rendering for one header's extern block.
//!
//! [`ExternRenderer`] walks a module's top-level items and writes one
//! declaration per item belonging to the header being rendered. Items and
//! type references located in other headers register a
//! `from _<stem> cimport *` against the corresponding generated sibling.
//!
//! Malformed nodes never abort the render: they are spelled as
//! [`UNDEFINED`] and recorded as diagnostics in the returned unit.

use pxdgen_ast::{
    Argument, CType, Enum, EnumValue, Field, Function, Header, Item, Location, Module, Struct,
    Type, Typedef, Union,
};

use crate::{
    builder::{CodeBuilder, Indent},
    diagnostic::Diagnostic,
    naming::sibling_module,
};

/// Placeholder spelled in place of nodes that cannot be rendered.
pub const UNDEFINED: &str = "__UNDEFINED__";

/// Result of rendering one header.
#[derive(Debug, Clone)]
pub struct RenderedUnit {
    /// Finalized `.pxd` text.
    pub text: String,
    /// Degradations encountered while rendering.
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderedUnit {
    /// Returns true if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|diag| diag.severity.is_error())
    }
}

/// Render one header of `module` with the default indentation unit.
pub fn render_header(module: &Module, header: &Header) -> RenderedUnit {
    ExternRenderer::new(header).render(module)
}

/// Renders the declarations of a single header into a `cdef extern` block.
///
/// One renderer instance serves one header; rendering consumes it, so
/// builder state cannot leak between units and independent instances may
/// run concurrently.
pub struct ExternRenderer<'a> {
    header: &'a Header,
    code: CodeBuilder,
    diagnostics: Vec<Diagnostic>,
}

/// One pointer or array layer peeled off a modified type.
enum Modifier {
    Pointer,
    Array(Option<u64>),
}

impl<'a> ExternRenderer<'a> {
    pub fn new(header: &'a Header) -> Self {
        Self::with_indent(header, Indent::default())
    }

    pub fn with_indent(header: &'a Header, indent: Indent) -> Self {
        Self {
            header,
            code: CodeBuilder::new(indent),
            diagnostics: Vec::new(),
        }
    }

    /// Render every item of `module` that belongs to this renderer's
    /// header, in item order.
    ///
    /// Items located in other headers are not rendered here; they register
    /// a cimport of the corresponding sibling module, since declarations in
    /// this header may reference them.
    pub fn render(mut self, module: &Module) -> RenderedUnit {
        self.code.write_indented(&format!(
            "cdef extern from \"{}\":\n\n",
            self.header.header_name
        ));
        self.code.indent();
        for item in &module.items {
            if self.belongs_here(item.location()) {
                self.visit_item(item);
            } else {
                self.note_location(item.location());
            }
        }
        self.code.dedent();

        RenderedUnit {
            text: self.code.finalize(),
            diagnostics: self.diagnostics,
        }
    }

    fn belongs_here(&self, location: Option<&Location>) -> bool {
        location
            .and_then(|location| location.header_name.as_deref())
            .is_some_and(|name| name == self.header.path.as_path())
    }

    /// Register a sibling-module cimport when `location` names a header
    /// other than the one being rendered.
    fn note_location(&mut self, location: Option<&Location>) {
        if let Some(name) = location.and_then(|location| location.header_name.as_deref())
            && name != self.header.path.as_path()
        {
            self.code
                .add_cimport_from(&sibling_module(name), "*", None);
        }
    }

    fn visit_item(&mut self, item: &Item) {
        self.note_location(item.location());
        match item {
            Item::Typedef(typedef) => self.visit_typedef(typedef),
            Item::Struct(st) => self.visit_struct(st, None),
            Item::Union(un) => self.visit_union(un, None),
            Item::Enum(en) => self.visit_enum(en, None),
            Item::Function(function) => self.visit_function(function),
        }
    }

    fn visit_typedef(&mut self, typedef: &Typedef) {
        match &typedef.typ {
            Type::Struct(st) => self.visit_struct(st, Some(&typedef.identifier)),
            Type::Union(un) => self.visit_union(un, Some(&typedef.identifier)),
            Type::Enum(en) => self.visit_enum(en, Some(&typedef.identifier)),
            Type::Pointer { .. } | Type::Array { .. } => {
                let context = format!("typedef {}", typedef.identifier);
                let (c_name, name) =
                    self.apply_modifier(&typedef.typ, &typedef.identifier, &context);
                self.code
                    .write_indented(&format!("ctypedef {c_name} {name}\n\n"));
            }
            Type::Typedef { identifier, location } => {
                self.note_location(location.as_ref());
                self.code.write_indented(&format!(
                    "ctypedef {identifier} {}\n\n",
                    typedef.identifier
                ));
            }
            Type::Prim { name } => {
                self.code.write_indented(&format!(
                    "ctypedef {} {}\n\n",
                    name.c_name(),
                    typedef.identifier
                ));
            }
            other @ Type::Unknown { .. } => {
                self.unhandled(
                    "typedef target",
                    other,
                    &format!("typedef {}", typedef.identifier),
                );
                self.code.write_indented(&format!(
                    "ctypedef {UNDEFINED} {}\n\n",
                    typedef.identifier
                ));
            }
        }
    }

    fn visit_struct(&mut self, st: &Struct, typedef: Option<&str>) {
        self.note_location(st.location.as_ref());
        let display = st.identifier.as_deref().or(typedef).unwrap_or(UNDEFINED);
        let context = format!("struct {display}");
        self.tagged_composite("struct", st.identifier.as_deref(), st.opaque, typedef, |this| {
            for field in &st.fields {
                this.visit_field(field, &context);
            }
        });
    }

    fn visit_union(&mut self, un: &Union, typedef: Option<&str>) {
        self.note_location(un.location.as_ref());
        let display = un.identifier.as_deref().or(typedef).unwrap_or(UNDEFINED);
        let context = format!("union {display}");
        self.tagged_composite("union", un.identifier.as_deref(), un.opaque, typedef, |this| {
            for field in &un.fields {
                this.visit_field(field, &context);
            }
        });
    }

    fn visit_enum(&mut self, en: &Enum, typedef: Option<&str>) {
        self.note_location(en.location.as_ref());
        if typedef.is_none() && en.identifier.is_none() {
            // An enum, unlike a struct, is declarable without any name.
            if en.opaque {
                self.code.write_indented("cdef enum\n");
            } else {
                self.code.write_indented("cdef enum:\n");
                self.code.indent();
                for value in &en.values {
                    self.visit_enum_value(value);
                }
                self.code.dedent();
            }
            self.code.write("\n");
            return;
        }
        self.tagged_composite("enum", en.identifier.as_deref(), en.opaque, typedef, |this| {
            for value in &en.values {
                this.visit_enum_value(value);
            }
        });
    }

    /// Emit a struct/union/enum declaration, disambiguating the tag name
    /// against an enclosing typedef:
    ///
    /// - typedef and tag share a name: a single tag declaration
    /// - anonymous tag under a typedef: `ctypedef <kw> <typedef-name>`
    /// - distinct names: the tag declaration plus a `ctypedef` alias
    ///
    /// Every branch ends with one trailing blank line.
    fn tagged_composite<F>(
        &mut self,
        keyword: &str,
        tag: Option<&str>,
        opaque: bool,
        typedef: Option<&str>,
        body: F,
    ) where
        F: FnOnce(&mut Self),
    {
        let (intro, name, alias) = match (typedef, tag) {
            (Some(td), None) => ("ctypedef", td, None),
            (Some(td), Some(tag)) if td != tag => {
                ("cdef", tag, Some(format!("ctypedef {tag} {td}\n")))
            }
            (_, Some(tag)) => ("cdef", tag, None),
            (None, None) => {
                self.diagnostics.push(
                    Diagnostic::error(format!(
                        "anonymous {keyword} without an enclosing typedef"
                    ))
                    .at(format!("{keyword} {UNDEFINED}")),
                );
                ("cdef", UNDEFINED, None)
            }
        };

        if opaque {
            self.code
                .write_indented(&format!("{intro} {keyword} {name}\n"));
        } else {
            self.code
                .write_indented(&format!("{intro} {keyword} {name}:\n"));
            self.code.indent();
            body(self);
            self.code.dedent();
        }
        if let Some(alias) = alias {
            self.code.write_indented(&alias);
        }
        self.code.write("\n");
    }

    fn visit_field(&mut self, field: &Field, context: &str) {
        let context = format!("{context}, field {}", field.identifier);
        let (c_name, name) = self.type_spelling(&field.typ, &field.identifier, &context);
        self.code.write_indented(&format!("{c_name} {name}\n"));
    }

    fn visit_enum_value(&mut self, value: &EnumValue) {
        self.code.write_indented(&format!("{}\n", value.identifier));
    }

    fn visit_function(&mut self, function: &Function) {
        let context = format!("function {}", function.identifier);
        let mut identifier = function.identifier.clone();
        match &function.res_type {
            Type::Typedef { identifier: result, location } => {
                self.note_location(location.as_ref());
                self.code.write_indented(&format!("{result} "));
            }
            Type::Prim { name } => {
                self.code.write_indented(&format!("{} ", name.c_name()));
            }
            Type::Pointer { .. } => {
                let (c_name, modified) =
                    self.apply_modifier(&function.res_type, &identifier, &context);
                identifier = modified;
                self.code.write_indented(&format!("{c_name} "));
            }
            other => {
                self.unhandled("return type", other, &context);
                self.code.write_indented(&format!("{UNDEFINED}\n\n"));
                return;
            }
        }

        self.code.write(&format!("{identifier}("));

        // `foo(void)` and a genuinely empty argument list both spell `foo()`.
        let void_only = matches!(
            function.arguments.as_slice(),
            [Argument { typ: Type::Prim { name: CType::Void }, .. }]
        );
        if !void_only {
            for (i, argument) in function.arguments.iter().enumerate() {
                if i > 0 {
                    self.code.write(", ");
                }
                self.visit_argument(argument, &context);
            }
        }

        self.code.write(")\n\n");
    }

    fn visit_argument(&mut self, argument: &Argument, context: &str) {
        let context = format!("{context}, argument {}", argument.identifier);
        let (c_name, name) = self.type_spelling(&argument.typ, &argument.identifier, &context);
        self.code.write(&format!("{c_name} {name}"));
    }

    /// Spelling of a field or argument type: the type name and the
    /// (possibly modified) declarator name.
    fn type_spelling(&mut self, typ: &Type, name: &str, context: &str) -> (String, String) {
        match typ {
            Type::Typedef { identifier, location } => {
                self.note_location(location.as_ref());
                (identifier.clone(), name.to_string())
            }
            Type::Prim { name: prim } => (prim.c_name().to_string(), name.to_string()),
            Type::Pointer { .. } | Type::Array { .. } => self.apply_modifier(typ, name, context),
            other => {
                self.unhandled("type", other, context);
                (UNDEFINED.to_string(), name.to_string())
            }
        }
    }

    /// Fold pointer/array layers onto `name`, returning the base type
    /// spelling and the modified declarator.
    ///
    /// Layers are collected from the type root inward and applied in that
    /// order. The accumulated declarator is parenthesized only when an
    /// array layer applies over a pointer layer, the one transition where
    /// C declarator precedence requires it: `int (*p)[4]` against
    /// `int *p[4]`.
    fn apply_modifier(&mut self, typ: &Type, name: &str, context: &str) -> (String, String) {
        let mut layers = Vec::new();
        let mut base = typ;
        loop {
            match base {
                Type::Pointer { typ } => {
                    layers.push(Modifier::Pointer);
                    base = typ.as_ref();
                }
                Type::Array { typ, dim } => {
                    layers.push(Modifier::Array(*dim));
                    base = typ.as_ref();
                }
                _ => break,
            }
        }

        let c_name = match base {
            Type::Typedef { identifier, location } => {
                self.note_location(location.as_ref());
                identifier.clone()
            }
            Type::Prim { name } => name.c_name().to_string(),
            other => {
                self.unhandled("modified base type", other, context);
                return (UNDEFINED.to_string(), UNDEFINED.to_string());
            }
        };

        let mut name = name.to_string();
        for (i, layer) in layers.iter().enumerate() {
            if matches!(layer, Modifier::Array(_))
                && i > 0
                && matches!(layers[i - 1], Modifier::Pointer)
            {
                name = format!("({name})");
            }
            match layer {
                Modifier::Pointer => name = format!("*{name}"),
                Modifier::Array(dim) => {
                    let dim = dim.map(|dim| dim.to_string()).unwrap_or_default();
                    name = format!("{name}[{dim}]");
                }
            }
        }

        (c_name, name)
    }

    fn unhandled(&mut self, what: &str, typ: &Type, context: &str) {
        self.diagnostics
            .push(Diagnostic::error(format!("unhandled {what} {}", typ.describe())).at(context));
    }
}
