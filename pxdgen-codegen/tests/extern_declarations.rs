//! End-to-end tests for rendered extern blocks.
//!
//! Each test builds a small module the way the front end would and checks
//! the exact text of the rendered unit.

use pxdgen_ast::{
    Argument, CType, Enum, EnumValue, Field, Function, Header, Item, Location, Module, Struct,
    Type, Typedef, Union,
};
use pxdgen_codegen::{GENERATED_HEADER, UNDEFINED, render_header};

fn int() -> Type {
    Type::Prim { name: CType::Int }
}

fn ptr(typ: Type) -> Type {
    Type::Pointer { typ: Box::new(typ) }
}

fn arr(typ: Type, dim: Option<u64>) -> Type {
    Type::Array { typ: Box::new(typ), dim }
}

fn field(identifier: &str, typ: Type) -> Field {
    Field { identifier: identifier.into(), typ }
}

fn loc(header: &str) -> Option<Location> {
    Some(Location::new(header))
}

fn spam_header() -> Header {
    Header::new("spam.h", "spam.h")
}

fn prelude(header_name: &str) -> String {
    format!("{GENERATED_HEADER}cdef extern from \"{header_name}\":\n\n")
}

#[test]
fn typedef_of_anonymous_struct_renders_ctypedef_block() {
    let module = Module {
        items: vec![Item::Typedef(Typedef {
            identifier: "Point".into(),
            typ: Type::Struct(Struct {
                identifier: None,
                opaque: false,
                fields: vec![field("x", int()), field("y", int())],
                location: None,
            }),
            location: loc("point.h"),
        })],
    };
    let header = Header::new("point.h", "point.h");

    let unit = render_header(&module, &header);

    assert_eq!(
        unit.text,
        format!(
            "{}    ctypedef struct Point:\n        int x\n        int y\n\n",
            prelude("point.h")
        )
    );
    assert!(unit.diagnostics.is_empty());
}

#[test]
fn opaque_typedef_struct_has_no_colon_and_no_body() {
    let module = Module {
        items: vec![Item::Typedef(Typedef {
            identifier: "Node".into(),
            typ: Type::Struct(Struct {
                identifier: None,
                opaque: true,
                fields: vec![field("ignored", int())],
                location: None,
            }),
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!("{}    ctypedef struct Node\n\n", prelude("spam.h"))
    );
}

#[test]
fn same_name_typedef_emits_single_tag_declaration() {
    let module = Module {
        items: vec![Item::Typedef(Typedef {
            identifier: "Point".into(),
            typ: Type::Struct(Struct {
                identifier: Some("Point".into()),
                opaque: false,
                fields: vec![field("x", int())],
                location: None,
            }),
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!("{}    cdef struct Point:\n        int x\n\n", prelude("spam.h"))
    );
}

#[test]
fn distinct_typedef_emits_tag_and_alias() {
    let module = Module {
        items: vec![Item::Typedef(Typedef {
            identifier: "Alias".into(),
            typ: Type::Union(Union {
                identifier: Some("tag_u".into()),
                opaque: false,
                fields: vec![field("x", int())],
                location: None,
            }),
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!(
            "{}    cdef union tag_u:\n        int x\n    ctypedef tag_u Alias\n\n",
            prelude("spam.h")
        )
    );
}

#[test]
fn plain_struct_without_typedef() {
    let module = Module {
        items: vec![Item::Struct(Struct {
            identifier: Some("point_s".into()),
            opaque: false,
            fields: vec![field("x", int()), field("y", int())],
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!(
            "{}    cdef struct point_s:\n        int x\n        int y\n\n",
            prelude("spam.h")
        )
    );
}

#[test]
fn anonymous_enum_renders_bare_block() {
    let module = Module {
        items: vec![Item::Enum(Enum {
            identifier: None,
            opaque: false,
            values: vec![
                EnumValue { identifier: "RED".into() },
                EnumValue { identifier: "GREEN".into() },
            ],
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!("{}    cdef enum:\n        RED\n        GREEN\n\n", prelude("spam.h"))
    );
}

#[test]
fn enum_with_distinct_typedef_emits_tag_and_alias() {
    let module = Module {
        items: vec![Item::Typedef(Typedef {
            identifier: "Color".into(),
            typ: Type::Enum(Enum {
                identifier: Some("color_e".into()),
                opaque: false,
                values: vec![EnumValue { identifier: "RED".into() }],
                location: None,
            }),
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!(
            "{}    cdef enum color_e:\n        RED\n    ctypedef color_e Color\n\n",
            prelude("spam.h")
        )
    );
}

#[test]
fn simple_and_chained_typedefs() {
    let module = Module {
        items: vec![
            Item::Typedef(Typedef {
                identifier: "spam_int".into(),
                typ: int(),
                location: loc("spam.h"),
            }),
            Item::Typedef(Typedef {
                identifier: "spam_alias".into(),
                typ: Type::Typedef { identifier: "spam_int".into(), location: None },
                location: loc("spam.h"),
            }),
            Item::Typedef(Typedef {
                identifier: "spam_ptr".into(),
                typ: ptr(int()),
                location: loc("spam.h"),
            }),
        ],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!(
            "{}    ctypedef int spam_int\n\n    ctypedef spam_int spam_alias\n\n    ctypedef int *spam_ptr\n\n",
            prelude("spam.h")
        )
    );
}

#[test]
fn void_argument_renders_empty_parentheses() {
    let module = Module {
        items: vec![Item::Function(Function {
            identifier: "foo".into(),
            res_type: Type::Prim { name: CType::Void },
            arguments: vec![Argument {
                identifier: String::new(),
                typ: Type::Prim { name: CType::Void },
            }],
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(unit.text, format!("{}    void foo()\n\n", prelude("spam.h")));
    assert!(unit.diagnostics.is_empty());
}

#[test]
fn empty_argument_list_renders_empty_parentheses() {
    let module = Module {
        items: vec![Item::Function(Function {
            identifier: "bar".into(),
            res_type: int(),
            arguments: vec![],
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(unit.text, format!("{}    int bar()\n\n", prelude("spam.h")));
    assert!(unit.diagnostics.is_empty());
}

#[test]
fn function_with_pointer_return_and_arguments() {
    let module = Module {
        items: vec![Item::Function(Function {
            identifier: "make_grid".into(),
            res_type: ptr(Type::Prim { name: CType::Double }),
            arguments: vec![
                Argument { identifier: "rows".into(), typ: int() },
                Argument { identifier: "data".into(), typ: ptr(Type::Prim { name: CType::Double }) },
            ],
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!(
            "{}    double *make_grid(int rows, double *data)\n\n",
            prelude("spam.h")
        )
    );
}

#[test]
fn field_declarators_fold_pointer_and_array_layers() {
    let module = Module {
        items: vec![Item::Struct(Struct {
            identifier: Some("decls".into()),
            opaque: false,
            fields: vec![
                field("arr", arr(ptr(int()), Some(4))),
                field("grid", ptr(arr(int(), Some(4)))),
                field("flat", arr(int(), None)),
            ],
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!(
            "{}    cdef struct decls:\n        int *arr[4]\n        int (*grid)[4]\n        int flat[]\n\n",
            prelude("spam.h")
        )
    );
}

#[test]
fn cross_header_reference_registers_one_import() {
    let module = Module {
        items: vec![
            Item::Typedef(Typedef {
                identifier: "FILE".into(),
                typ: Type::Struct(Struct {
                    identifier: None,
                    opaque: true,
                    fields: vec![],
                    location: None,
                }),
                location: loc("stdio.h"),
            }),
            Item::Struct(Struct {
                identifier: Some("logger".into()),
                opaque: false,
                fields: vec![
                    field("out", Type::Typedef { identifier: "FILE".into(), location: loc("stdio.h") }),
                    field("err", Type::Typedef { identifier: "FILE".into(), location: loc("stdio.h") }),
                ],
                location: loc("spam.h"),
            }),
        ],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!(
            "{GENERATED_HEADER}from _stdio cimport *\n\ncdef extern from \"spam.h\":\n\n    cdef struct logger:\n        FILE out\n        FILE err\n\n"
        )
    );
}

#[test]
fn rendering_is_deterministic() {
    let module = Module {
        items: vec![
            Item::Typedef(Typedef {
                identifier: "size_type".into(),
                typ: Type::Prim { name: CType::ULong },
                location: loc("defs.h"),
            }),
            Item::Function(Function {
                identifier: "spam_len".into(),
                res_type: Type::Typedef { identifier: "size_type".into(), location: loc("defs.h") },
                arguments: vec![Argument {
                    identifier: "s".into(),
                    typ: ptr(Type::Prim { name: CType::Char }),
                }],
                location: loc("spam.h"),
            }),
        ],
    };
    let header = spam_header();

    let first = render_header(&module, &header);
    let second = render_header(&module, &header);

    assert_eq!(first.text, second.text);
    assert!(first.text.contains("from _defs cimport *"));
    assert!(first.text.contains("    size_type spam_len(char *s)\n"));
}

#[test]
fn unhandled_field_degrades_to_placeholder_and_continues() {
    let module = Module {
        items: vec![Item::Struct(Struct {
            identifier: Some("handler".into()),
            opaque: false,
            fields: vec![
                field("cb", Type::Unknown { spelling: "void (*)(int)".into() }),
                field("ctx", ptr(Type::Prim { name: CType::Void })),
            ],
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!(
            "{}    cdef struct handler:\n        {UNDEFINED} cb\n        void *ctx\n\n",
            prelude("spam.h")
        )
    );
    assert_eq!(unit.diagnostics.len(), 1);
    assert!(unit.has_errors());
    assert_eq!(
        unit.diagnostics[0].location.as_deref(),
        Some("struct handler, field cb")
    );
}

#[test]
fn unhandled_return_type_skips_parameter_list() {
    let module = Module {
        items: vec![Item::Function(Function {
            identifier: "weird".into(),
            res_type: Type::Unknown { spelling: "int (*)(void)".into() },
            arguments: vec![Argument { identifier: "x".into(), typ: int() }],
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    assert_eq!(
        unit.text,
        format!("{}    {UNDEFINED}\n\n", prelude("spam.h"))
    );
    assert_eq!(unit.diagnostics.len(), 1);
}

#[test]
fn field_count_matches_declared_fields() {
    let fields: Vec<Field> = (0..5).map(|i| field(&format!("f{i}"), int())).collect();
    let module = Module {
        items: vec![Item::Struct(Struct {
            identifier: Some("wide".into()),
            opaque: false,
            fields,
            location: loc("spam.h"),
        })],
    };

    let unit = render_header(&module, &spam_header());

    let body_lines: Vec<&str> = unit
        .text
        .lines()
        .filter(|line| line.starts_with("        "))
        .collect();
    assert_eq!(body_lines.len(), 5);
    assert_eq!(body_lines[0].trim(), "int f0");
    assert_eq!(body_lines[4].trim(), "int f4");
}
