use pascalc::errors::{PascalError, PascalResult};
use pascalc::frontend::lexer::{scan, Lexer};
use pascalc::frontend::token::TokenKind;
use pascalc::frontend::SourceContext;

fn kinds_at(source: &str) -> PascalResult<Vec<(TokenKind, usize, usize)>> {
    Ok(scan(source)?
        .into_iter()
        .map(|t| (t.kind, t.line, t.column))
        .collect())
}

#[test]
fn test_small_program_token_stream() -> PascalResult<()> {
    let tokens = kinds_at("program p; var x : integer; begin x := 1; end.")?;
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Program, 1, 1),
            (TokenKind::Ident("p".to_string()), 1, 9),
            (TokenKind::Semicolon, 1, 10),
            (TokenKind::Var, 1, 12),
            (TokenKind::Ident("x".to_string()), 1, 16),
            (TokenKind::Colon, 1, 18),
            (TokenKind::Integer, 1, 20),
            (TokenKind::Semicolon, 1, 27),
            (TokenKind::Begin, 1, 29),
            (TokenKind::Ident("x".to_string()), 1, 35),
            (TokenKind::Assign, 1, 37),
            (TokenKind::IntConst(1), 1, 40),
            (TokenKind::Semicolon, 1, 41),
            (TokenKind::End, 1, 43),
            (TokenKind::Dot, 1, 46),
        ]
    );
    Ok(())
}

#[test]
fn test_number_literals() -> PascalResult<()> {
    let tokens = kinds_at("123 0 2.75 10.0")?;
    assert_eq!(
        tokens,
        vec![
            (TokenKind::IntConst(123), 1, 1),
            (TokenKind::IntConst(0), 1, 5),
            (TokenKind::RealConst(2.75), 1, 7),
            (TokenKind::RealConst(10.0), 1, 12),
        ]
    );
    Ok(())
}

#[test]
fn test_trailing_dot_is_not_a_real() -> PascalResult<()> {
    let tokens = kinds_at("1.")?;
    assert_eq!(tokens, vec![(TokenKind::IntConst(1), 1, 1), (TokenKind::Dot, 1, 2)]);
    Ok(())
}

#[test]
fn test_integer_overflow_is_lexical_error() {
    let result = scan("99999999999999999999");
    assert!(matches!(result, Err(PascalError::Lexical { line: 1, col: 1, .. })));
}

#[test]
fn test_mixed_case_keywords() -> PascalResult<()> {
    let tokens = scan("BEGIN Begin begin DownTo MOD")?;
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Begin,
            TokenKind::Begin,
            TokenKind::Begin,
            TokenKind::Downto,
            TokenKind::Mod,
        ]
    );
    Ok(())
}

#[test]
fn test_identifiers_keep_case() -> PascalResult<()> {
    let tokens = scan("Total _tmp x1")?;
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident("Total".to_string()),
            TokenKind::Ident("_tmp".to_string()),
            TokenKind::Ident("x1".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_boolean_literals() -> PascalResult<()> {
    let tokens = scan("true FALSE True")?;
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::BoolConst(true),
            TokenKind::BoolConst(false),
            TokenKind::BoolConst(true),
        ]
    );
    Ok(())
}

#[test]
fn test_two_char_operators_win() -> PascalResult<()> {
    let tokens = kinds_at(":= : <> <= < >= > =")?;
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Assign, 1, 1),
            (TokenKind::Colon, 1, 4),
            (TokenKind::NotEqual, 1, 6),
            (TokenKind::LessThanEqual, 1, 9),
            (TokenKind::LessThan, 1, 12),
            (TokenKind::GreaterThanEqual, 1, 14),
            (TokenKind::GreaterThan, 1, 17),
            (TokenKind::Equal, 1, 19),
        ]
    );
    Ok(())
}

#[test]
fn test_adjacent_operators() -> PascalResult<()> {
    let tokens = scan("a:=-(b*c)/d;")?;
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident("a".to_string()),
            TokenKind::Assign,
            TokenKind::Minus,
            TokenKind::LParen,
            TokenKind::Ident("b".to_string()),
            TokenKind::Mult,
            TokenKind::Ident("c".to_string()),
            TokenKind::RParen,
            TokenKind::Divide,
            TokenKind::Ident("d".to_string()),
            TokenKind::Semicolon,
        ]
    );
    Ok(())
}

#[test]
fn test_single_line_comment() -> PascalResult<()> {
    let tokens = kinds_at("x { a comment } y")?;
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Ident("x".to_string()), 1, 1),
            (TokenKind::Ident("y".to_string()), 1, 17),
        ]
    );
    Ok(())
}

#[test]
fn test_multi_line_comment_advances_lines() -> PascalResult<()> {
    let tokens = kinds_at("x {a\nb} y")?;
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Ident("x".to_string()), 1, 1),
            (TokenKind::Ident("y".to_string()), 2, 4),
        ]
    );
    assert!(scan("{ one\ntwo }")?.is_empty());
    Ok(())
}

#[test]
fn test_columns_reset_after_newline() -> PascalResult<()> {
    let tokens = kinds_at("begin\n\tx := 1\nend")?;
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Begin, 1, 1),
            (TokenKind::Ident("x".to_string()), 2, 2),
            (TokenKind::Assign, 2, 4),
            (TokenKind::IntConst(1), 2, 7),
            (TokenKind::End, 3, 1),
        ]
    );
    Ok(())
}

#[test]
fn test_crlf_line_endings() -> PascalResult<()> {
    let tokens = kinds_at("begin\r\n  x := 1\r\nend")?;
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Begin, 1, 1),
            (TokenKind::Ident("x".to_string()), 2, 3),
            (TokenKind::Assign, 2, 5),
            (TokenKind::IntConst(1), 2, 8),
            (TokenKind::End, 3, 1),
        ]
    );
    Ok(())
}

#[test]
fn test_lone_carriage_return_is_rejected() {
    let result = scan("x := 1;\ry := 2");
    assert!(matches!(result, Err(PascalError::Lexical { line: 1, col: 8, .. })));
}

#[test]
fn test_invalid_char_location() {
    let result = scan("program p;\nbegin x := @ end.");
    match result {
        Err(PascalError::Lexical { line, col, message }) => {
            assert_eq!((line, col), (2, 12));
            assert!(message.contains("'@'"), "message was: {}", message);
        }
        other => panic!("Expected a lexical error, but got: {:?}", other),
    }
}

#[test]
fn test_unterminated_comment() {
    let result = scan("x := 1; { never closed\n");
    assert!(matches!(result, Err(PascalError::Lexical { line: 1, col: 9, .. })));
}

#[test]
fn test_lexer_is_lazy_and_restartable() -> PascalResult<()> {
    let mut lexer = Lexer::new(SourceContext::new("a b\nc"));
    let first = lexer.next().transpose()?.map(|t| t.lexeme);
    assert_eq!(first.as_deref(), Some("a"));
    lexer.reset();
    let all: Vec<_> = lexer.collect::<PascalResult<Vec<_>>>()?;
    assert_eq!(all.len(), 3);
    assert_eq!((all[2].line, all[2].column), (2, 1));
    Ok(())
}

#[test]
fn test_token_values_and_names() -> PascalResult<()> {
    let tokens = scan("x 2.5 true begin")?;
    let names: Vec<_> = tokens.iter().map(|t| t.kind.name()).collect();
    assert_eq!(names, vec!["ID", "REAL_CONST", "BOOL_CONST", "BEGIN"]);
    assert_eq!(tokens[3].lexeme, "begin");
    Ok(())
}
