//! Token kinds for FlatBuffers schema text
//!
//! The parser works directly on the token stream, so only token kinds exist
//! here; there are no composite node kinds.

/// All token kinds produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - skipped by the parser)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    /// `///` comment; attached to the next declaration, not trivia
    DOC_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier
    INTEGER, // 42, 0x2A
    FLOAT,   // 3.14, 1e9
    STRING,  // "hello"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,   // {
    R_BRACE,   // }
    L_BRACKET, // [
    R_BRACKET, // ]
    L_PAREN,   // (
    R_PAREN,   // )
    SEMICOLON, // ;
    COLON,     // :
    COMMA,     // ,
    EQ,        // =
    DOT,       // .
    PLUS,      // +
    MINUS,     // -

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ATTRIBUTE_KW,
    ENUM_KW,
    FALSE_KW,
    FILE_EXTENSION_KW,
    FILE_IDENTIFIER_KW,
    INCLUDE_KW,
    NAMESPACE_KW,
    NATIVE_INCLUDE_KW,
    ROOT_TYPE_KW,
    RPC_SERVICE_KW,
    STRUCT_KW,
    TABLE_KW,
    TRUE_KW,
    UNION_KW,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    ERROR,
    EOF,
}

impl SyntaxKind {
    /// Check if this is trivia (whitespace or a plain comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ATTRIBUTE_KW as u16) && (self as u16) <= (Self::UNION_KW as u16)
    }

    /// Human-readable description used in "expecting" diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::LINE_COMMENT | Self::BLOCK_COMMENT => "comment",
            Self::DOC_COMMENT => "doc comment",
            Self::IDENT => "identifier",
            Self::INTEGER => "integer constant",
            Self::FLOAT => "float constant",
            Self::STRING => "string constant",
            Self::L_BRACE => "{",
            Self::R_BRACE => "}",
            Self::L_BRACKET => "[",
            Self::R_BRACKET => "]",
            Self::L_PAREN => "(",
            Self::R_PAREN => ")",
            Self::SEMICOLON => ";",
            Self::COLON => ":",
            Self::COMMA => ",",
            Self::EQ => "=",
            Self::DOT => ".",
            Self::PLUS => "+",
            Self::MINUS => "-",
            Self::ATTRIBUTE_KW => "attribute",
            Self::ENUM_KW => "enum",
            Self::FALSE_KW => "false",
            Self::FILE_EXTENSION_KW => "file_extension",
            Self::FILE_IDENTIFIER_KW => "file_identifier",
            Self::INCLUDE_KW => "include",
            Self::NAMESPACE_KW => "namespace",
            Self::NATIVE_INCLUDE_KW => "native_include",
            Self::ROOT_TYPE_KW => "root_type",
            Self::RPC_SERVICE_KW => "rpc_service",
            Self::STRUCT_KW => "struct",
            Self::TABLE_KW => "table",
            Self::TRUE_KW => "true",
            Self::UNION_KW => "union",
            Self::ERROR => "invalid token",
            Self::EOF => "end of file",
        }
    }
}
