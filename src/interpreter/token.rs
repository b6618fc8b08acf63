use std::fmt;

/// The kind of a lexical token.
///
/// Literal kinds carry their decoded value; every other kind is identified by
/// its variant alone.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// Identifier tokens; variable names such as `x` or `total`.
    Identifier(String),
    /// String literal tokens. Holds the text between the quotes.
    String(String),
    /// Numeric literal tokens, such as `42` or `3.14`.
    Number(f64),
    /// `and`
    And,
    /// `break`
    Break,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `for`
    For,
    /// `fun`
    Fun,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,
    /// End of input. Always the last token of a scanned source.
    Eof,
}

impl TokenKind {
    /// Whether a token of this kind can only appear at the start of a
    /// statement. The parser resumes at such tokens after a syntax error.
    #[must_use]
    pub const fn begins_statement(&self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }

    /// A short, stable name for the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Question => "QUESTION",
            Self::Colon => "COLON",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier(_) => "IDENTIFIER",
            Self::String(_) => "STRING",
            Self::Number(_) => "NUMBER",
            Self::And => "AND",
            Self::Break => "BREAK",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Fun => "FUN",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the lexer.
///
/// Tokens are immutable once created. The lexeme is the exact source text
/// the token was scanned from (quotes included for strings); the line is the
/// 1-based line scanning had reached when the token ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The exact source substring.
    pub lexeme: String,
    /// The 1-based source line.
    pub line:   usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }

    /// Creates the end-of-input marker for `line`.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: String::new(),
               line }
    }

    /// Whether this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Eof => write!(f, "{}: {}", self.line, self.kind),
            kind => write!(f, "{}: {} {}", self.line, kind, self.lexeme),
        }
    }
}
