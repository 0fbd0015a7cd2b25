//! Logos-based lexer for FlatBuffers schemas
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//([^/\n][^\n]*)?")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"///[^\n]*")]
    DocComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    // =========================================================================
    // KEYWORDS (longest match wins in logos)
    // =========================================================================
    #[token("attribute")]
    AttributeKw,
    #[token("enum")]
    EnumKw,
    #[token("false")]
    FalseKw,
    #[token("file_extension")]
    FileExtensionKw,
    #[token("file_identifier")]
    FileIdentifierKw,
    #[token("include")]
    IncludeKw,
    #[token("namespace")]
    NamespaceKw,
    #[token("native_include")]
    NativeIncludeKw,
    #[token("root_type")]
    RootTypeKw,
    #[token("rpc_service")]
    RpcServiceKw,
    #[token("struct")]
    StructKw,
    #[token("table")]
    TableKw,
    #[token("true")]
    TrueKw,
    #[token("union")]
    UnionKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            DocComment => SyntaxKind::DOC_COMMENT,

            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            Float => SyntaxKind::FLOAT,
            String => SyntaxKind::STRING,

            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Eq => SyntaxKind::EQ,
            Dot => SyntaxKind::DOT,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,

            AttributeKw => SyntaxKind::ATTRIBUTE_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            FileExtensionKw => SyntaxKind::FILE_EXTENSION_KW,
            FileIdentifierKw => SyntaxKind::FILE_IDENTIFIER_KW,
            IncludeKw => SyntaxKind::INCLUDE_KW,
            NamespaceKw => SyntaxKind::NAMESPACE_KW,
            NativeIncludeKw => SyntaxKind::NATIVE_INCLUDE_KW,
            RootTypeKw => SyntaxKind::ROOT_TYPE_KW,
            RpcServiceKw => SyntaxKind::RPC_SERVICE_KW,
            StructKw => SyntaxKind::STRUCT_KW,
            TableKw => SyntaxKind::TABLE_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            UnionKw => SyntaxKind::UNION_KW,
        }
    }
}
