use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`.
    ///
    /// The carried value is the raw bytes between the quotes. No escape
    /// sequences are interpreted, so `"a\nb"` holds a backslash and an `n`.
    #[regex(r#""[^"]*""#, read_string)]
    String(std::string::String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    ///
    /// Digits are not part of identifiers, so `foo123` lexes as the
    /// identifier `foo` followed by the integer `123`. Keyword spellings are
    /// matched by their dedicated tokens above and never reach this rule.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(std::string::String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Newlines are plain whitespace but advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`, which turns the slice
///   into an illegal token.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extracts the contents of a string literal from the current token slice.
///
/// Strips the surrounding quotes and keeps the inner bytes untouched.
/// Newlines inside the literal are counted so later error messages still
/// carry the right line number.
fn read_string(lex: &mut logos::Lexer<Token>) -> std::string::String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];
    lex.extras.line += inner.chars().filter(|&c| c == '\n').count();
    inner.to_string()
}

impl Token {
    /// Returns a human-readable description of the token, used in parse
    /// error messages.
    #[must_use]
    pub fn describe(&self) -> std::string::String {
        match self {
            Self::Integer(value) => format!("integer '{value}'"),
            Self::String(value) => format!("string \"{value}\""),
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Function => "'fn'".to_string(),
            Self::Let => "'let'".to_string(),
            Self::True => "'true'".to_string(),
            Self::False => "'false'".to_string(),
            Self::If => "'if'".to_string(),
            Self::Else => "'else'".to_string(),
            Self::Return => "'return'".to_string(),
            Self::Assign => "'='".to_string(),
            Self::Plus => "'+'".to_string(),
            Self::Minus => "'-'".to_string(),
            Self::Bang => "'!'".to_string(),
            Self::Star => "'*'".to_string(),
            Self::Slash => "'/'".to_string(),
            Self::Less => "'<'".to_string(),
            Self::Greater => "'>'".to_string(),
            Self::EqualEqual => "'=='".to_string(),
            Self::BangEqual => "'!='".to_string(),
            Self::Comma => "','".to_string(),
            Self::Semicolon => "';'".to_string(),
            Self::Colon => "':'".to_string(),
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
            Self::LBrace => "'{'".to_string(),
            Self::RBrace => "'}'".to_string(),
            Self::LBracket => "'['".to_string(),
            Self::RBracket => "']'".to_string(),
            Self::NewLine | Self::Ignored => "whitespace".to_string(),
        }
    }
}

/// Tokenizes a complete source string.
///
/// Produces the token stream as `(token, line)` pairs along with any lexical
/// errors. Bytes the lexer cannot match become
/// [`ParseError::IllegalToken`](crate::error::ParseError) entries; lexing
/// continues after them so a single stray character does not hide later
/// errors. The end of the vector is the end of input.
///
/// # Example
/// ```
/// use mk::interpreter::lexer::{Token, tokenize};
///
/// let (tokens, errors) = tokenize("let five = 5;");
///
/// assert!(errors.is_empty());
/// assert_eq!(tokens[0].0, Token::Let);
/// assert_eq!(tokens[2].0, Token::Assign);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<(Token, usize)>, Vec<crate::error::ParseError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(()) => {
                errors.push(crate::error::ParseError::IllegalToken { token: lexer.slice()
                                                                                 .to_string(),
                                                                     line:  lexer.extras.line, });
            },
        }
    }

    (tokens, errors)
}

#[cfg(test)]
mod tests {
    use super::{Token, tokenize};

    fn tokens(source: &str) -> Vec<Token> {
        let (tokens, errors) = tokenize(source);
        assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
        tokens.into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn operators_and_delimiters() {
        assert_eq!(tokens("=+-!*/<>==!=,;:(){}[]"),
                   vec![Token::Assign,
                        Token::Plus,
                        Token::Minus,
                        Token::Bang,
                        Token::Star,
                        Token::Slash,
                        Token::Less,
                        Token::Greater,
                        Token::EqualEqual,
                        Token::BangEqual,
                        Token::Comma,
                        Token::Semicolon,
                        Token::Colon,
                        Token::LParen,
                        Token::RParen,
                        Token::LBrace,
                        Token::RBrace,
                        Token::LBracket,
                        Token::RBracket]);
    }

    #[test]
    fn keywords_are_not_identifiers() {
        assert_eq!(tokens("fn let true false if else return"),
                   vec![Token::Function,
                        Token::Let,
                        Token::True,
                        Token::False,
                        Token::If,
                        Token::Else,
                        Token::Return]);
    }

    #[test]
    fn keyword_prefixes_stay_identifiers() {
        assert_eq!(tokens("letter iffy fnord"),
                   vec![Token::Identifier("letter".into()),
                        Token::Identifier("iffy".into()),
                        Token::Identifier("fnord".into())]);
    }

    #[test]
    fn digits_do_not_extend_identifiers() {
        assert_eq!(tokens("foo123"),
                   vec![Token::Identifier("foo".into()), Token::Integer(123)]);
    }

    #[test]
    fn two_char_operators_win_over_single() {
        assert_eq!(tokens("a == b != c = d ! e"),
                   vec![Token::Identifier("a".into()),
                        Token::EqualEqual,
                        Token::Identifier("b".into()),
                        Token::BangEqual,
                        Token::Identifier("c".into()),
                        Token::Assign,
                        Token::Identifier("d".into()),
                        Token::Bang,
                        Token::Identifier("e".into())]);
    }

    #[test]
    fn string_literals_keep_raw_bytes() {
        assert_eq!(tokens(r#""hello, world" "a\nb""#),
                   vec![Token::String("hello, world".into()),
                        Token::String(r"a\nb".into())]);
    }

    #[test]
    fn lines_are_counted() {
        let (tokens, errors) = tokenize("let a = 1;\nlet b = 2;");
        assert!(errors.is_empty());
        assert_eq!(tokens.first().map(|(_, line)| *line), Some(1));
        assert_eq!(tokens.last().map(|(_, line)| *line), Some(2));
    }

    #[test]
    fn illegal_bytes_are_reported_and_skipped() {
        let (tokens, errors) = tokenize("1 @ 2");
        assert_eq!(errors.len(), 1);
        assert_eq!(tokens.into_iter().map(|(token, _)| token).collect::<Vec<_>>(),
                   vec![Token::Integer(1), Token::Integer(2)]);
    }

    #[test]
    fn unterminated_string_is_illegal() {
        let (_, errors) = tokenize("\"never closed");
        assert!(!errors.is_empty());
    }

    #[test]
    fn oversized_integer_literal_is_illegal() {
        let (_, errors) = tokenize("92233720368547758089");
        assert_eq!(errors.len(), 1);
    }
}
