//! Recursive descent parser for FlatBuffers schemas
//!
//! Works on the token stream from the lexer and builds the unresolved
//! [`SchemaFile`] tree. Parsing stops at the first error.

use smol_str::SmolStr;
use text_size::TextSize;

use super::ast::*;
use super::errors::{ErrorCode, SchemaError};
use super::lexer::{Lexer, Token};
use super::location::{SourceLoc, SourceSpan};
use super::syntax_kind::SyntaxKind;
use crate::base::LineIndex;

type PResult<T> = Result<T, SchemaError>;

/// Deepest `[` nesting a type expression may use, as in flatc
const MAX_TYPE_DEPTH: usize = 64;

/// Parse one schema file.
///
/// `path` is the include-graph key of the file and the file name reported in
/// errors; pass `""` for in-memory text.
pub fn parse_file(text: &str, path: &str) -> PResult<SchemaFile> {
    let mut parser = Parser::new(text, path);
    let items = parser.parse_schema()?;
    Ok(SchemaFile {
        path: SmolStr::new(path),
        items,
    })
}

/// The parser state
struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    text: &'a str,
    index: LineIndex,
    file: SmolStr,
    /// Doc comment lines seen since the last consumed token
    doc: Vec<String>,
    /// End offset of the last consumed token
    prev_end: TextSize,
    seen_declaration: bool,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, path: &str) -> Self {
        let tokens = Lexer::new(text).filter(|t| !t.kind.is_trivia()).collect();
        let mut parser = Self {
            tokens,
            pos: 0,
            text,
            index: LineIndex::new(text),
            file: SmolStr::new(path),
            doc: Vec::new(),
            prev_end: TextSize::new(0),
            seen_declaration: false,
        };
        parser.collect_docs();
        parser
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::EOF)
    }

    fn current_text(&self) -> &'a str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn current_offset(&self) -> TextSize {
        self.current()
            .map(|t| t.offset)
            .unwrap_or_else(|| TextSize::of(self.text))
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_name(&self) -> bool {
        let kind = self.current_kind();
        kind == SyntaxKind::IDENT || kind.is_keyword()
    }

    fn loc(&self, offset: TextSize) -> SourceLoc {
        SourceLoc::at(&self.index, offset)
    }

    fn current_loc(&self) -> SourceLoc {
        self.loc(self.current_offset())
    }

    fn slice(&self, start: TextSize, end: TextSize) -> &'a str {
        self.text
            .get(usize::from(start)..usize::from(end))
            .unwrap_or_default()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.prev_end = token.range().end();
            self.pos += 1;
        }
        self.doc.clear();
        self.collect_docs();
    }

    fn collect_docs(&mut self) {
        while let Some(token) = self.current() {
            if token.kind != SyntaxKind::DOC_COMMENT {
                break;
            }
            let line = token.text.strip_prefix("///").unwrap_or(token.text);
            self.doc.push(line.trim_end_matches('\r').to_string());
            self.pos += 1;
        }
    }

    /// Doc comment lines attached to the token about to be consumed
    fn take_doc(&mut self) -> Vec<String> {
        std::mem::take(&mut self.doc)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> PResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&self, code: ErrorCode, message: impl Into<String>, loc: SourceLoc) -> SchemaError {
        SchemaError::new(code, message, self.file.clone(), loc)
    }

    /// Error for the current token when `expected` was wanted instead
    fn unexpected(&self, expected: &str) -> SchemaError {
        let loc = self.current_loc();
        match self.current_kind() {
            SyntaxKind::ERROR if self.current_text().starts_with('"') => {
                self.error(ErrorCode::E0102, "unterminated string constant", loc)
            }
            SyntaxKind::ERROR => self.error(
                ErrorCode::E0101,
                format!("illegal character: {}", self.current_text()),
                loc,
            ),
            SyntaxKind::EOF if expected == "}" => self.error(
                ErrorCode::E0202,
                "expecting: } instead got: end of file",
                loc,
            ),
            kind => {
                let got = match kind {
                    SyntaxKind::EOF
                    | SyntaxKind::INTEGER
                    | SyntaxKind::FLOAT
                    | SyntaxKind::STRING
                    | SyntaxKind::DOC_COMMENT => kind.describe(),
                    _ => self.current_text(),
                };
                self.error(
                    ErrorCode::E0201,
                    format!("expecting: {expected} instead got: {got}"),
                    loc,
                )
            }
        }
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// Schema = Include* Declaration*
    fn parse_schema(&mut self) -> PResult<Vec<Item>> {
        let mut items = Vec::new();
        loop {
            let item = match self.current_kind() {
                SyntaxKind::EOF => break,
                SyntaxKind::INCLUDE_KW | SyntaxKind::NATIVE_INCLUDE_KW => {
                    if self.seen_declaration {
                        return Err(self
                            .error(
                                ErrorCode::E0503,
                                "includes must come before declarations",
                                self.current_loc(),
                            )
                            .with_hint("move the include to the top of the file"));
                    }
                    match self.parse_include()? {
                        Some(include) => Item::Include(include),
                        None => continue,
                    }
                }
                SyntaxKind::SEMICOLON => {
                    self.bump();
                    continue;
                }
                _ => {
                    self.seen_declaration = true;
                    self.parse_declaration()?
                }
            };
            items.push(item);
        }
        Ok(items)
    }

    /// Include = ('include' | 'native_include') String ';'
    ///
    /// `native_include` only matters to code generators and is dropped.
    fn parse_include(&mut self) -> PResult<Option<IncludeDecl>> {
        let native = self.at(SyntaxKind::NATIVE_INCLUDE_KW);
        self.bump();
        let path = self.parse_string()?;
        self.expect(SyntaxKind::SEMICOLON)?;
        if native {
            return Ok(None);
        }
        Ok(Some(IncludeDecl {
            path: path.value,
            loc: path.loc,
        }))
    }

    /// Declaration = Namespace | Attribute | Table | Enum | Union | RpcService
    ///             | RootType | FileIdentifier | FileExtension
    fn parse_declaration(&mut self) -> PResult<Item> {
        match self.current_kind() {
            SyntaxKind::NAMESPACE_KW => self.parse_namespace().map(Item::Namespace),
            SyntaxKind::ATTRIBUTE_KW => self.parse_attribute_decl().map(Item::Attribute),
            SyntaxKind::TABLE_KW | SyntaxKind::STRUCT_KW => self.parse_struct().map(Item::Struct),
            SyntaxKind::ENUM_KW | SyntaxKind::UNION_KW => self.parse_enum().map(Item::Enum),
            SyntaxKind::RPC_SERVICE_KW => self.parse_service().map(Item::Service),
            SyntaxKind::ROOT_TYPE_KW => {
                self.bump();
                let ty = self.parse_type()?;
                self.expect(SyntaxKind::SEMICOLON)?;
                Ok(Item::RootType(ty))
            }
            SyntaxKind::FILE_IDENTIFIER_KW => {
                self.bump();
                let value = self.parse_string()?;
                self.expect(SyntaxKind::SEMICOLON)?;
                Ok(Item::FileIdentifier(value))
            }
            SyntaxKind::FILE_EXTENSION_KW => {
                self.bump();
                let value = self.parse_string()?;
                self.expect(SyntaxKind::SEMICOLON)?;
                Ok(Item::FileExtension(value))
            }
            SyntaxKind::ERROR => Err(self.unexpected("a declaration")),
            _ => Err(self.error(
                ErrorCode::E0203,
                format!("expecting a declaration instead got: {}", self.current_text()),
                self.current_loc(),
            )),
        }
    }

    /// Namespace = 'namespace' (Ident ('.' Ident)*)? ';'
    fn parse_namespace(&mut self) -> PResult<NamespaceDecl> {
        let loc = self.current_loc();
        self.bump();
        let components = if self.at(SyntaxKind::SEMICOLON) {
            Vec::new()
        } else {
            self.parse_path()?
        };
        self.expect(SyntaxKind::SEMICOLON)?;
        Ok(NamespaceDecl { components, loc })
    }

    /// Attribute = 'attribute' (String | Ident) ';'
    fn parse_attribute_decl(&mut self) -> PResult<AttributeDecl> {
        let doc = self.take_doc();
        self.bump();
        let name = if self.at(SyntaxKind::STRING) {
            let lit = self.parse_string()?;
            Name {
                text: SmolStr::new(lit.value),
                loc: lit.loc,
            }
        } else {
            self.parse_name()?
        };
        self.expect(SyntaxKind::SEMICOLON)?;
        Ok(AttributeDecl { name, doc })
    }

    /// Table = ('table' | 'struct') Ident Metadata? '{' Field* '}'
    fn parse_struct(&mut self) -> PResult<StructDecl> {
        let doc = self.take_doc();
        let is_table = self.at(SyntaxKind::TABLE_KW);
        self.bump();
        let name = self.parse_name()?;
        let attributes = self.parse_metadata()?;
        self.expect(SyntaxKind::L_BRACE)?;

        let mut fields = Vec::new();
        while !self.eat(SyntaxKind::R_BRACE) {
            if !self.at_name() {
                return Err(self.unexpected("}"));
            }
            fields.push(self.parse_field()?);
        }

        Ok(StructDecl {
            name,
            is_table,
            doc,
            attributes,
            fields,
        })
    }

    /// Field = Ident ':' Type ('=' Constant)? Metadata? ';'
    fn parse_field(&mut self) -> PResult<FieldDecl> {
        let doc = self.take_doc();
        let name = self.parse_name()?;
        self.expect(SyntaxKind::COLON)?;
        let ty = self.parse_type()?;
        let default = if self.eat(SyntaxKind::EQ) {
            Some(self.parse_constant()?)
        } else {
            None
        };
        let attributes = self.parse_metadata()?;
        self.expect(SyntaxKind::SEMICOLON)?;
        Ok(FieldDecl {
            name,
            ty,
            default,
            attributes,
            doc,
        })
    }

    /// Enum = 'enum' Ident (':' Type)? Metadata? '{' EnumVal (',' EnumVal)* ','? '}'
    /// Union = 'union' Ident Metadata? '{' UnionMember (',' UnionMember)* ','? '}'
    fn parse_enum(&mut self) -> PResult<EnumDecl> {
        let doc = self.take_doc();
        let is_union = self.at(SyntaxKind::UNION_KW);
        self.bump();
        let name = self.parse_name()?;
        let underlying = if !is_union && self.eat(SyntaxKind::COLON) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let attributes = self.parse_metadata()?;
        self.expect(SyntaxKind::L_BRACE)?;

        let mut values = Vec::new();
        while !self.eat(SyntaxKind::R_BRACE) {
            let value = if is_union {
                self.parse_union_member()?
            } else {
                self.parse_enum_value()?
            };
            values.push(value);
            if !self.eat(SyntaxKind::COMMA) {
                self.expect(SyntaxKind::R_BRACE)?;
                break;
            }
        }

        Ok(EnumDecl {
            name,
            is_union,
            underlying,
            doc,
            attributes,
            values,
        })
    }

    /// EnumVal = Ident ('=' IntegerConstant)?
    fn parse_enum_value(&mut self) -> PResult<EnumValueDecl> {
        let doc = self.take_doc();
        if !self.at_name() {
            return Err(self.unexpected("}"));
        }
        let name = self.parse_name()?;
        let value = self.parse_value_assignment()?;
        Ok(EnumValueDecl {
            name,
            value,
            member: None,
            doc,
        })
    }

    /// UnionMember = (Ident ':')? Type ('=' IntegerConstant)?
    fn parse_union_member(&mut self) -> PResult<EnumValueDecl> {
        let doc = self.take_doc();
        if !self.at_name() {
            return Err(self.unexpected("}"));
        }
        let first = self.parse_type()?;
        let alias = match first.path() {
            Some([alias]) if self.at(SyntaxKind::COLON) => Some(Name {
                text: alias.clone(),
                loc: first.span.start,
            }),
            _ => None,
        };
        let (name, member) = match alias {
            Some(alias) => {
                self.bump();
                (alias, self.parse_type()?)
            }
            None => {
                let text = first.path().map(|path| path.join("_")).unwrap_or_default();
                let name = Name {
                    text: SmolStr::new(text),
                    loc: first.span.start,
                };
                (name, first)
            }
        };
        let value = self.parse_value_assignment()?;
        Ok(EnumValueDecl {
            name,
            value,
            member: Some(member),
            doc,
        })
    }

    fn parse_value_assignment(&mut self) -> PResult<Option<Literal>> {
        if !self.eat(SyntaxKind::EQ) {
            return Ok(None);
        }
        let value = self.parse_constant()?;
        if value.kind != LiteralKind::Integer {
            return Err(self.error(
                ErrorCode::E0103,
                format!("enum value must be an integer constant: {}", value.text),
                value.loc,
            ));
        }
        Ok(Some(value))
    }

    /// RpcService = 'rpc_service' Ident Metadata? '{' RpcMethod* '}'
    fn parse_service(&mut self) -> PResult<ServiceDecl> {
        let doc = self.take_doc();
        self.bump();
        let name = self.parse_name()?;
        let attributes = self.parse_metadata()?;
        self.expect(SyntaxKind::L_BRACE)?;

        let mut methods = Vec::new();
        while !self.eat(SyntaxKind::R_BRACE) {
            if !self.at_name() {
                return Err(self.unexpected("}"));
            }
            methods.push(self.parse_method()?);
        }

        Ok(ServiceDecl {
            name,
            doc,
            attributes,
            methods,
        })
    }

    /// RpcMethod = Ident '(' Type ')' ':' Type Metadata? ';'
    fn parse_method(&mut self) -> PResult<MethodDecl> {
        let doc = self.take_doc();
        let name = self.parse_name()?;
        self.expect(SyntaxKind::L_PAREN)?;
        let request = self.parse_type()?;
        self.expect(SyntaxKind::R_PAREN)?;
        self.expect(SyntaxKind::COLON)?;
        let response = self.parse_type()?;
        let attributes = self.parse_metadata()?;
        self.expect(SyntaxKind::SEMICOLON)?;
        Ok(MethodDecl {
            name,
            request,
            response,
            attributes,
            doc,
        })
    }

    /// Metadata = '(' Ident (':' Constant)? (',' Ident (':' Constant)?)* ')'
    fn parse_metadata(&mut self) -> PResult<Vec<AttributeUse>> {
        let mut attributes = Vec::new();
        if !self.eat(SyntaxKind::L_PAREN) {
            return Ok(attributes);
        }
        loop {
            let name = self.parse_name()?;
            let value = if self.eat(SyntaxKind::COLON) {
                Some(self.parse_constant()?)
            } else {
                None
            };
            attributes.push(AttributeUse { name, value });
            if !self.eat(SyntaxKind::COMMA) {
                self.expect(SyntaxKind::R_PAREN)?;
                break;
            }
        }
        Ok(attributes)
    }

    /// Type = Path | '[' Type ']' | '[' Type ':' Integer ']'
    fn parse_type(&mut self) -> PResult<TypeExpr> {
        self.parse_nested_type(0)
    }

    fn parse_nested_type(&mut self, depth: usize) -> PResult<TypeExpr> {
        let start = self.current_offset();
        let kind = if self.at(SyntaxKind::L_BRACKET) {
            if depth >= MAX_TYPE_DEPTH {
                return Err(self.error(
                    ErrorCode::E0204,
                    format!("type nesting exceeds {MAX_TYPE_DEPTH} levels"),
                    self.current_loc(),
                ));
            }
            self.bump();
            let element = self.parse_nested_type(depth + 1)?;
            if self.eat(SyntaxKind::COLON) {
                let length = self.parse_array_length()?;
                self.expect(SyntaxKind::R_BRACKET)?;
                TypeExprKind::Array(Box::new(element), length)
            } else {
                self.expect(SyntaxKind::R_BRACKET)?;
                TypeExprKind::Vector(Box::new(element))
            }
        } else {
            TypeExprKind::Named(self.parse_path()?)
        };
        let end = self.prev_end;
        Ok(TypeExpr {
            kind,
            span: SourceSpan::new(self.loc(start), self.loc(end)),
            source: self.slice(start, end).to_string(),
        })
    }

    fn parse_array_length(&mut self) -> PResult<u32> {
        if !self.at(SyntaxKind::INTEGER) {
            return Err(self.unexpected("integer constant"));
        }
        let loc = self.current_loc();
        let text = self.current_text();
        let length = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => text.parse::<u32>().ok(),
        };
        match length {
            Some(length) if length > 0 && length <= u32::from(u16::MAX) => {
                self.bump();
                Ok(length)
            }
            _ => Err(self.error(
                ErrorCode::E0103,
                format!("fixed-length array size must be between 1 and 65535: {text}"),
                loc,
            )),
        }
    }

    /// Constant = ('+' | '-')? (Integer | Float | Ident) | 'true' | 'false' | String
    fn parse_constant(&mut self) -> PResult<Literal> {
        let loc = self.current_loc();
        let sign = match self.current_kind() {
            SyntaxKind::MINUS | SyntaxKind::PLUS => {
                let sign = self.current_text();
                self.bump();
                sign
            }
            _ => "",
        };
        let kind = match self.current_kind() {
            SyntaxKind::INTEGER => LiteralKind::Integer,
            SyntaxKind::FLOAT => LiteralKind::Float,
            SyntaxKind::IDENT => LiteralKind::Ident,
            SyntaxKind::TRUE_KW | SyntaxKind::FALSE_KW if sign.is_empty() => LiteralKind::Bool,
            SyntaxKind::STRING if sign.is_empty() => {
                let lit = self.parse_string()?;
                return Ok(Literal {
                    kind: LiteralKind::String,
                    text: lit.value,
                    loc,
                });
            }
            _ => return Err(self.unexpected("constant")),
        };
        let text = format!("{sign}{}", self.current_text());
        self.bump();
        Ok(Literal { kind, text, loc })
    }

    /// Ident, where keywords are allowed as names
    fn parse_name(&mut self) -> PResult<Name> {
        if !self.at_name() {
            return Err(self.unexpected("identifier"));
        }
        let name = Name {
            text: SmolStr::new(self.current_text()),
            loc: self.current_loc(),
        };
        self.bump();
        Ok(name)
    }

    /// Path = Ident ('.' Ident)*
    fn parse_path(&mut self) -> PResult<Vec<SmolStr>> {
        let mut path = vec![self.parse_name()?.text];
        while self.eat(SyntaxKind::DOT) {
            path.push(self.parse_name()?.text);
        }
        Ok(path)
    }

    fn parse_string(&mut self) -> PResult<StringLit> {
        if !self.at(SyntaxKind::STRING) {
            return Err(self.unexpected("string constant"));
        }
        let loc = self.current_loc();
        let raw = self.current_text();
        let value = unescape(&raw[1..raw.len() - 1]);
        self.bump();
        Ok(StringLit { value, loc })
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(text: &str) -> SchemaFile {
        match parse_file(text, "") {
            Ok(file) => file,
            Err(err) => panic!("unexpected parse error: {err}"),
        }
    }

    fn parse_err(text: &str) -> SchemaError {
        match parse_file(text, "") {
            Ok(file) => panic!("expected an error, got {:?}", file.items),
            Err(err) => err,
        }
    }

    #[test]
    fn test_parse_table_with_field() {
        let file = parse_ok("table T { x:int; }");
        let [Item::Struct(decl)] = file.items.as_slice() else {
            panic!("expected a single struct item");
        };
        assert!(decl.is_table);
        assert_eq!(decl.name.text, "T");
        assert_eq!(decl.name.loc, SourceLoc::new(1, 6));
        assert_eq!(decl.fields.len(), 1);
        assert_eq!(decl.fields[0].ty.source, "int");
    }

    #[test]
    fn test_doc_comments_attach_to_next_declaration() {
        let file = parse_ok("/// first\n/// second\ntable T {\n  /// field doc\n  x: int;\n}\n");
        let [Item::Struct(decl)] = file.items.as_slice() else {
            panic!("expected a single struct item");
        };
        assert_eq!(decl.doc, vec![" first".to_string(), " second".to_string()]);
        assert_eq!(decl.fields[0].doc, vec![" field doc".to_string()]);
    }

    #[test]
    fn test_type_expression_keeps_source_text() {
        let file = parse_ok("struct S { a: [ubyte : 4]; }");
        let [Item::Struct(decl)] = file.items.as_slice() else {
            panic!("expected a single struct item");
        };
        let ty = &decl.fields[0].ty;
        assert_eq!(ty.source, "[ubyte : 4]");
        assert_eq!(ty.span.start, SourceLoc::new(1, 14));
        assert_eq!(ty.span.end, SourceLoc::new(1, 25));
        assert!(matches!(ty.kind, TypeExprKind::Array(_, 4)));
    }

    #[test]
    fn test_union_member_alias() {
        let file = parse_ok("union U { A, Pic: media.Image }");
        let [Item::Enum(decl)] = file.items.as_slice() else {
            panic!("expected a single enum item");
        };
        assert!(decl.is_union);
        assert_eq!(decl.values[0].name.text, "A");
        assert_eq!(decl.values[1].name.text, "Pic");
        assert_eq!(
            decl.values[1].member.as_ref().map(|m| m.source.as_str()),
            Some("media.Image")
        );
    }

    #[test]
    fn test_unterminated_body_reports_end_of_file() {
        let err = parse_err("table T { x:int;");
        assert_eq!(err.code, ErrorCode::E0202);
        assert_eq!(err.message, "expecting: } instead got: end of file");
    }

    #[test]
    fn test_include_after_declaration_is_rejected() {
        let err = parse_err("table T {}\ninclude \"a.fbs\";");
        assert_eq!(err.code, ErrorCode::E0503);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_native_include_is_dropped() {
        let file = parse_ok("native_include \"x.h\";\ninclude \"a.fbs\";");
        assert_eq!(file.includes().count(), 1);
    }

    #[test]
    fn test_negative_default_and_metadata() {
        let file = parse_ok("table T { hp: short = -5 (id: 0, deprecated); }");
        let [Item::Struct(decl)] = file.items.as_slice() else {
            panic!("expected a single struct item");
        };
        let field = &decl.fields[0];
        assert_eq!(field.default.as_ref().map(|d| d.text.as_str()), Some("-5"));
        assert_eq!(field.attributes.len(), 2);
        assert_eq!(field.attributes[1].name.text, "deprecated");
    }

    #[test]
    fn test_deeply_nested_type_is_rejected() {
        let text = format!("table T {{ x: {}int{}; }}", "[".repeat(5_000), "]".repeat(5_000));
        let err = parse_err(&text);
        assert_eq!(err.code, ErrorCode::E0204);
        assert_eq!((err.line, err.col), (1, 13 + MAX_TYPE_DEPTH as u32));
        assert!(parse_file("table T { x: [[[int]]]; }", "").is_ok());
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(unescape(r#"a\"b\\c\n"#), "a\"b\\c\n");
    }
}
