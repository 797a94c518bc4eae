use crate::ast::{
    Expression, Group, IdentifierLine, Name, NameTable, NamedValue, NodeGroup,
};
use codemap::{File, Span};
use winnow::{
    ascii::{digit1, multispace1},
    combinator::{alt, delimited, opt, preceded, repeat, separated, terminated},
    error::ParserError,
    token::{one_of, take_till, take_while},
    Located, PResult, Parser, Stateful,
};

pub type Input<'a> = Stateful<Located<&'a str>, &'a File>;

/// Parse the whole of `file` into the root named-value list.
pub fn parse_file(file: &File) -> crate::diagnostic::Result<Vec<NamedValue>> {
    program(Stateful {
        input: Located::new(file.source()),
        state: file,
    })
}

pub fn program(input: Input) -> crate::diagnostic::Result<Vec<NamedValue>> {
    Ok(preceded(ws, repeat(0.., terminated(named_value, ws)))
        .parse(input)
        .map_err(|err| crate::diagnostic::Error::Parse(format!("{err:?}")))?)
}

fn named_value(input: &mut Input) -> PResult<NamedValue> {
    alt((
        (terminated(name, (ws, ':', ws)), group).map(|(name, group)| {
            NamedValue {
                name: Some(name),
                group,
            }
        }),
        group.map(|group| NamedValue { name: None, group }),
    ))
    .parse_next(input)
}

fn name(input: &mut Input) -> PResult<Name> {
    alt((identifier.map(Name::Single), name_table.map(Name::Table)))
        .parse_next(input)
}

fn name_table(input: &mut Input) -> PResult<NameTable> {
    spanned(delimited(
        ('{', ws),
        separated(1.., name_row, (ws, '|', ws)),
        (ws, '}'),
    ))
    .map(|(span, rows)| NameTable { rows, span })
    .parse_next(input)
}

fn name_row(input: &mut Input) -> PResult<Vec<IdentifierLine>> {
    separated(1.., identifier, (ws, ',', ws)).parse_next(input)
}

fn group(input: &mut Input) -> PResult<Group> {
    alt((
        node_group.map(Group::Node),
        terminated(expr, (ws, ';')).map(Group::Expression),
    ))
    .parse_next(input)
}

fn node_group(input: &mut Input) -> PResult<NodeGroup> {
    (
        identifier,
        preceded(ws, opt(delimited(('(', ws), expr_list, (ws, ')')))),
        preceded(
            ws,
            delimited(
                ('{', ws),
                repeat(0.., terminated(named_value, ws)),
                '}',
            ),
        ),
    )
        .map(|(tag, exprs, values)| NodeGroup {
            span: tag.span,
            tag: tag.name,
            exprs: exprs.unwrap_or_default(),
            values,
        })
        .parse_next(input)
}

fn expr_list(input: &mut Input) -> PResult<Vec<Expression>> {
    separated(0.., expr, (ws, ',', ws)).parse_next(input)
}

fn expr(input: &mut Input) -> PResult<Expression> {
    alt((number, string, bitset, negation, ident_expr, paren_expr))
        .parse_next(input)
}

fn number(input: &mut Input) -> PResult<Expression> {
    spanned(digit1.try_map(str::parse::<i64>))
        .map(|(span, value)| Expression::Number(value, span))
        .parse_next(input)
}

fn string(input: &mut Input) -> PResult<Expression> {
    let normal = take_till(1.., ['"', '\\', '\n']);
    let escape_sequence = preceded(
        '\\',
        alt((
            '"'.value("\""),
            '\\'.value("\\"),
            'n'.value("\n"),
            't'.value("\t"),
            'r'.value("\r"),
        )),
    );
    let string_char = alt((normal, escape_sequence));

    spanned(delimited('"', repeat(0.., string_char), '"'))
        .map(|(span, strs): (_, Vec<&str>)| {
            Expression::Str(strs.concat().into(), span)
        })
        .parse_next(input)
}

fn bitset(input: &mut Input) -> PResult<Expression> {
    spanned(preceded(
        ("bitset", ws),
        delimited(('(', ws), expr_list, (ws, ')')),
    ))
    .map(|(span, args)| Expression::Bitset(args, span))
    .parse_next(input)
}

fn negation(input: &mut Input) -> PResult<Expression> {
    spanned(preceded(('-', ws), expr))
        .map(|(span, child)| Expression::Negate(Box::new(child), span))
        .parse_next(input)
}

fn ident_expr(input: &mut Input) -> PResult<Expression> {
    identifier
        .map(|ident| Expression::Identifier(ident.name, ident.span))
        .parse_next(input)
}

fn paren_expr(input: &mut Input) -> PResult<Expression> {
    delimited(('(', ws), expr, (ws, ')')).parse_next(input)
}

fn identifier(input: &mut Input) -> PResult<IdentifierLine> {
    spanned(
        (
            one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
            // `#` appears in surface sprite slot names such as `n#ne`.
            take_while(0.., |c: char| {
                c.is_ascii_alphanumeric() || c == '_' || c == '#'
            }),
        )
            .recognize(),
    )
    .map(|(span, name): (_, &str)| IdentifierLine {
        name: name.into(),
        span,
    })
    .parse_next(input)
}

fn eol_comment(input: &mut Input) -> PResult<()> {
    ("//", take_till(0.., '\n')).void().parse_next(input)
}

fn ws(input: &mut Input) -> PResult<()> {
    repeat(0.., alt((multispace1.void(), eol_comment))).parse_next(input)
}

fn spanned<'a, O, E: ParserError<Input<'a>>, F>(
    mut parser: F,
) -> impl Parser<Input<'a>, (Span, O), E>
where
    F: Parser<Input<'a>, O, E>,
{
    move |input: &mut Input<'a>| {
        parser
            .by_ref()
            .with_span()
            .map(|(parsed, range)| {
                (
                    input.state.span.subspan(
                        range.start.try_into().unwrap(),
                        range.end.try_into().unwrap(),
                    ),
                    parsed,
                )
            })
            .parse_next(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expression;
    use codemap::CodeMap;

    fn parse(source: &str) -> crate::diagnostic::Result<Vec<NamedValue>> {
        let mut code_map = CodeMap::new();
        let file =
            code_map.add_file("test".to_owned(), source.to_owned());
        parse_file(&file)
    }

    #[test]
    fn parses_named_scalar_values() {
        let root = parse("TSEL { tile_width: 64; z_height: -16; }").unwrap();
        assert_eq!(root.len(), 1);
        let Group::Node(node) = &root[0].group else {
            panic!("expected a node group");
        };
        assert_eq!(node.tag, "TSEL");
        assert_eq!(node.values.len(), 2);
        let Some(Name::Single(name)) = &node.values[0].name else {
            panic!("expected a single name");
        };
        assert_eq!(name.name, "tile_width");
        assert!(matches!(
            node.values[1].group,
            Group::Expression(Expression::Negate(..))
        ));
    }

    #[test]
    fn parses_node_arguments_and_strings() {
        let root = parse("file(\"out.rcd\") { }").unwrap();
        let Group::Node(node) = &root[0].group else {
            panic!("expected a node group");
        };
        assert_eq!(node.exprs.len(), 1);
        match &node.exprs[0] {
            Expression::Str(text, _) => assert_eq!(text, "out.rcd"),
            other => panic!("expected a string literal, got {other:?}"),
        }
    }

    #[test]
    fn parses_name_tables() {
        let root =
            parse("{ a, b | _, n#ne }: sheet { }").unwrap();
        let Some(Name::Table(table)) = &root[0].name else {
            panic!("expected a name table");
        };
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1][1].name, "n#ne");
        assert!(!table.rows[1][0].is_valid());
    }

    #[test]
    fn parses_bitsets_and_comments() {
        let root = parse(
            "recolour {\n\
             // allowed targets\n\
             replace: bitset(1, 2, 5);\n\
             }",
        )
        .unwrap();
        let Group::Node(node) = &root[0].group else {
            panic!("expected a node group");
        };
        let Group::Expression(Expression::Bitset(args, _)) =
            &node.values[0].group
        else {
            panic!("expected a bitset");
        };
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("file(\"x\") {").is_err());
        assert!(parse("64;").is_ok());
        assert!(parse("@").is_err());
    }
}
