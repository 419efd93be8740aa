use pktdef_syntax::{tokenize, validate, validate_tokens};

#[test]
fn test_well_formed_document() {
    let diagnostics = validate("packet Foo { a: int }");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_empty_document_is_valid() {
    assert!(validate("").is_empty());
    assert!(validate("   \n\t\n").is_empty());
}

#[test]
fn test_comment_only_document_is_valid() {
    let source = "// header comment\n/* block\ncomment */";
    assert!(validate(source).is_empty());
}

#[test]
fn test_multiple_declarations() {
    let source = "packet Ping { seq: u32 }\npacket Pong { seq: u32 ack: bool }";
    assert!(validate(source).is_empty());
}

#[test]
fn test_empty_packet_body() {
    assert!(validate("packet Marker { }").is_empty());
}

#[test]
fn test_missing_colon() {
    let diagnostics = validate("packet Foo { a int }");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "expected \":\"");
    // Anchored at the `int` token.
    assert_eq!(diagnostics[0].range.start.line, 1);
    assert_eq!(diagnostics[0].range.start.column, 16);
    assert_eq!(diagnostics[0].range.end.column, 19);
}

#[test]
fn test_missing_colon_does_not_cascade() {
    let source = "packet Foo { a int }\npacket Bar { x: y }";
    let diagnostics = validate(source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "expected \":\"");
    assert_eq!(diagnostics[0].range.start.line, 1);
}

#[test]
fn test_missing_packet_name() {
    let source = "packet { }\npacket Bar { x: y }";
    let diagnostics = validate(source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "expected packet name");
    assert_eq!(diagnostics[0].range.start.line, 1);
    assert_eq!(diagnostics[0].range.start.column, 8);
}

#[test]
fn test_missing_opening_brace() {
    let diagnostics = validate("packet Foo a: int }");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "expected \"{\"");
    assert_eq!(diagnostics[0].range.start.column, 12);
}

#[test]
fn test_missing_field_type_keeps_closing_brace() {
    let diagnostics = validate("packet Foo { a: }");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "expected field type");
    assert_eq!(diagnostics[0].range.start.column, 17);
}

#[test]
fn test_missing_field_type_then_next_declaration() {
    let source = "packet Foo { a: }\npacket Bar { x: y }";
    let diagnostics = validate(source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "expected field type");
}

#[test]
fn test_missing_keyword_at_document_start() {
    let source = "record Foo { a: int }\npacket Bar { x: y }";
    let diagnostics = validate(source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "expected \"packet\" keyword");
    assert_eq!(diagnostics[0].range.start.column, 1);
}

#[test]
fn test_comments_are_transparent_to_grammar() {
    let source = "packet /* name next */ Foo { // fields\n    a: /* typed */ int\n}";
    assert!(validate(source).is_empty());
}

#[test]
fn test_validation_is_idempotent() {
    let source = "packet Foo { a int }\npacket { }\npacket Bar { x: y }";

    let first = validate(source);
    let second = validate(source);
    assert_eq!(first, second);
}

#[test]
fn test_validate_tokens_matches_validate() {
    let source = "packet Foo { a: }";
    let tokens = tokenize(source);

    assert_eq!(validate_tokens(&tokens), validate(source));
}

#[test]
fn test_diagnostics_in_source_order() {
    let source = "packet { }\npacket Bar { x y }";
    let diagnostics = validate(source);

    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics[0].range.start.line < diagnostics[1].range.start.line);
    assert_eq!(diagnostics[0].message, "expected packet name");
    assert_eq!(diagnostics[1].message, "expected \":\"");
}
