use super::*;
use pretty_assertions::assert_eq;

// === Discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(TokenKind::LeftParen as u8, 0);
    assert_eq!(TokenKind::Dot as u8, 17);
    assert_eq!(TokenKind::LessEqual as u8, 18);
    assert_eq!(TokenKind::AmpAmp as u8, 23);
    assert_eq!(TokenKind::If as u8, 24);
    assert_eq!(TokenKind::False as u8, 36);
    assert_eq!(TokenKind::IntLit as u8, 37);
    assert_eq!(TokenKind::Ident as u8, 39);
    assert_eq!(TokenKind::Error as u8, 40);
    assert_eq!(TokenKind::Eof as u8, 41);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn all_is_in_discriminant_order() {
    for (index, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(*kind as usize, index, "{kind:?} is out of place");
    }
}

#[test]
fn from_u8_round_trips_every_kind() {
    for &kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_u8(kind as u8), Some(kind));
        assert_eq!(TokenKind::try_from(kind as u8), Ok(kind));
    }
}

#[test]
fn from_u8_rejects_out_of_range() {
    assert_eq!(TokenKind::from_u8(42), None);
    assert_eq!(TokenKind::from_u8(255), None);
    assert_eq!(TokenKind::try_from(200u8), Err(200));
}

// === Names ===

#[test]
fn names_follow_trace_spelling() {
    assert_eq!(TokenKind::LeftParen.name(), "TOKEN_LEFT_PAREN");
    assert_eq!(TokenKind::Modulo.name(), "TOKEN_MODULO");
    assert_eq!(TokenKind::LessEqual.name(), "TOKEN_LE");
    assert_eq!(TokenKind::BangEqual.name(), "TOKEN_NE");
    assert_eq!(TokenKind::PipePipe.name(), "TOKEN_OR");
    assert_eq!(TokenKind::AmpAmp.name(), "TOKEN_AND");
    assert_eq!(TokenKind::Size.name(), "TOKEN_SIZE");
    assert_eq!(TokenKind::FloatLit.name(), "TOKEN_FLOAT_LIT");
    assert_eq!(TokenKind::Ident.name(), "TOKEN_IDENT");
    assert_eq!(TokenKind::Eof.name(), "TOKEN_EOF");
}

#[test]
fn names_are_unique() {
    let mut names: Vec<_> = TokenKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TokenKind::ALL.len());
}

#[test]
fn display_uses_name() {
    assert_eq!(TokenKind::While.to_string(), "TOKEN_WHILE");
}

#[test]
fn token_kind_name_covers_set_and_fallback() {
    assert_eq!(token_kind_name(0), "TOKEN_LEFT_PAREN");
    assert_eq!(token_kind_name(41), "TOKEN_EOF");
    assert_eq!(token_kind_name(42), UNRECOGNIZED_KIND_NAME);
    assert_eq!(token_kind_name(u8::MAX), "Unrecognized token type");
}

// === Fixed lexemes ===

#[test]
fn fixed_lexeme_operators() {
    assert_eq!(TokenKind::Plus.fixed_lexeme(), Some("+"));
    assert_eq!(TokenKind::Modulo.fixed_lexeme(), Some("%"));
    assert_eq!(TokenKind::GreaterEqual.fixed_lexeme(), Some(">="));
    assert_eq!(TokenKind::AmpAmp.fixed_lexeme(), Some("&&"));
}

#[test]
fn fixed_lexeme_keywords() {
    assert_eq!(TokenKind::Return.fixed_lexeme(), Some("return"));
    assert_eq!(TokenKind::New.fixed_lexeme(), Some("new"));
}

#[test]
fn fixed_lexeme_none_for_variable_tokens() {
    for kind in [
        TokenKind::IntLit,
        TokenKind::FloatLit,
        TokenKind::Ident,
        TokenKind::Error,
        TokenKind::Eof,
    ] {
        assert_eq!(kind.fixed_lexeme(), None, "{kind:?}");
    }
}

// === Categories ===

#[test]
fn categories_partition_fixed_kinds() {
    for &kind in TokenKind::ALL {
        let fixed = kind.fixed_lexeme().is_some();
        assert_eq!(
            fixed,
            kind.is_operator() || kind.is_keyword(),
            "{kind:?} category mismatch"
        );
        assert!(!(kind.is_operator() && kind.is_keyword()), "{kind:?}");
    }
}

#[test]
fn literal_kinds() {
    assert!(TokenKind::IntLit.is_literal());
    assert!(TokenKind::FloatLit.is_literal());
    assert!(TokenKind::True.is_literal());
    assert!(!TokenKind::Ident.is_literal());
    assert!(!TokenKind::Int.is_literal());
}
