use logos::Logos;

use crate::ParseError;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")] // Fields are separated by any run of whitespace
pub(crate) enum Token {
    #[regex(r"[-+]?[0-9]+", priority = 3)]
    Integer,
    #[regex(r"[-+]?([0-9]+\.[0-9]*|\.[0-9]+)([eE][-+]?[0-9]+)?", priority = 3)]
    Decimal,
    // Station ids, column names, the copyright text. Control characters are rejected.
    #[regex(r"[^\x00-\x20\x7F]+", priority = 1)]
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field<'a> {
    pub kind: Token,
    pub text: &'a str,
}

/// Split one line into its whitespace-delimited fields.
pub(crate) fn fields(line: &str, line_number: usize) -> Result<Vec<Field<'_>>, ParseError> {
    let mut lexer = Token::lexer(line);
    let mut fields = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(kind) => fields.push(Field {
                kind,
                text: lexer.slice(),
            }),
            Err(()) => {
                return Err(ParseError::Lexing {
                    line: line_number,
                    slice: lexer.slice().to_string(),
                })
            }
        }
    }

    Ok(fields)
}
