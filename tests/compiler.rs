//! End-to-end compilation of pyhtml documents

use pretty_assertions::assert_eq;
use pyhtml::compile;
use pyhtml::parsing::{ParseError, TemplateSyntaxError};
use pyhtml::CompileError;
use rstest::rstest;

#[rstest]
#[case::header_only("div1:", "<div1>\n</div1>")]
#[case::header_with_newline("div1:\n", "<div1>\n</div1>")]
#[case::nested_header("div1:\n    div2:\n", "<div1>\n    <div2>\n    </div2>\n</div1>")]
#[case::block_attribute(
    "div1:\n    class = \"window\"\n",
    "<div1 class='window'>\n</div1>"
)]
#[case::inline_attribute("div1 class = \"window\":\n", "<div1 class='window'>\n</div1>")]
#[case::block_attributes(
    "div1:\n    class = \"window\"\n    style = \"position: absolute; left: 10px; top 10px;\"\n",
    "<div1 class='window' style='position: absolute; left: 10px; top 10px;'>\n</div1>"
)]
#[case::inline_attributes(
    "div1 class = \"window\" style = \"position: absolute; left: 10px; top 10px;\":\n",
    "<div1 class='window' style='position: absolute; left: 10px; top 10px;'>\n</div1>"
)]
#[case::nested_inline_attributes(
    "div1 class = \"window\" style = \"position: absolute; left: 10px; top 10px;\":\n    div2 class = \"window\":\n",
    "<div1 class='window' style='position: absolute; left: 10px; top 10px;'>\n    <div2 class='window'>\n    </div2>\n</div1>"
)]
#[case::nested_text(
    "div1 class = \"window\" style = \"position: absolute; left: 10px; top 10px;\":\n    div2 class = \"window\":\n        << \"test123\"\n",
    "<div1 class='window' style='position: absolute; left: 10px; top 10px;'>\n    <div2 class='window'>\ntest123\n    </div2>\n</div1>"
)]
#[case::text("div1:\n    << \"test123456\"\n", "<div1>\ntest123456\n</div1>")]
#[case::sibling_texts(
    "div1:\n    << \"test123\"\n    << \"test123456\"\n",
    "<div1>\ntest123\ntest123456\n</div1>"
)]
#[case::text_then_element(
    "div1:\n    << \"test123\"\n    div2:\n        << \"test123456\"\n",
    "<div1>\ntest123\n    <div2>\ntest123456\n    </div2>\n</div1>"
)]
#[case::sibling_elements(
    "div1:\n    << \"test123\"\n    div2:\n        << \"test123456\"\n    div3:\n        << \"test123456789\"\n",
    "<div1>\ntest123\n    <div2>\ntest123456\n    </div2>\n    <div3>\ntest123456789\n    </div3>\n</div1>"
)]
#[case::multiline_text(
    "div1:\n    << \"test123\ntest123456\"\n",
    "<div1>\ntest123\ntest123456\n</div1>"
)]
fn compiles(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(compile(source).unwrap(), expected);
}

#[test]
fn compiles_mixed_document() {
    let source = r#"div1:
        style="position: absolute;"
        div2:
            << "test"
            class = "window"
            style = "background-color: blue"
            div3:
                << "test123"
            div4:
                << "test123456"
"#;
    let expected = "<div1 style='position: absolute;'>
        <div2 class='window' style='background-color: blue'>
test
            <div3>
test123
            </div3>
            <div4>
test123456
            </div4>
        </div2>
</div1>";
    assert_eq!(compile(source).unwrap(), expected);
}

#[test]
fn reports_position_of_dangling_assignment() {
    let source = r#"div1:
        style="position: absolute;"
        div2:
            class =
            div3:
                << "test123"

"#;
    let err = compile(source).unwrap_err();
    assert_eq!(
        err,
        CompileError::Parse(ParseError::Syntax(TemplateSyntaxError {
            line: 5,
            column: 13,
            lexeme: "div3".to_string(),
        }))
    );
    assert_eq!(err.to_string(), "unexpected token at line 5, position 13");
}

#[rstest]
#[case::inline("div1 class = \"window\" style = \"a\":\n")]
#[case::block("div1:\n    class = \"window\"\n    style = \"a\"\n")]
#[case::mixed("div1 class = \"window\":\n    style = \"a\"\n")]
fn attribute_order_is_declaration_order(#[case] source: &str) {
    assert_eq!(
        compile(source).unwrap(),
        "<div1 class='window' style='a'>\n</div1>"
    );
}

#[test]
fn values_pass_through_unescaped() {
    let source = "a href = \"/q?x=1&y=<2>\":\n    << \"<b>bold</b> & 'quoted'\"\n";
    assert_eq!(
        compile(source).unwrap(),
        "<a href='/q?x=1&y=<2>'>\n<b>bold</b> & 'quoted'\n</a>"
    );
}

#[test]
fn blank_lines_between_body_lines_are_ignored() {
    let source = "div1:\n\n    div2:\n\n        << \"x\"\n\n    div3:\n";
    assert_eq!(
        compile(source).unwrap(),
        "<div1>\n    <div2>\nx\n    </div2>\n    <div3>\n    </div3>\n</div1>"
    );
}

#[test]
fn crlf_source_compiles_like_lf() {
    assert_eq!(
        compile("div1:\r\n    div2:\r\n").unwrap(),
        compile("div1:\n    div2:\n").unwrap()
    );
}

#[test]
fn unterminated_string_is_reported() {
    let err = compile("div1:\n    << \"never closed\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unterminated string literal starting at line 2, position 8"
    );
}

#[test]
fn empty_source_is_rejected() {
    assert_eq!(
        compile("  \n\n"),
        Err(CompileError::Parse(ParseError::EmptyDocument))
    );
}

#[test]
fn compiles_long_documents() {
    let lines = 50_000;
    let mut source = String::from("div1:\n");
    for idx in 0..lines {
        source.push_str(&format!("    << \"t{idx}\"\n"));
    }
    source.push_str("    div2:\n        id = \"last\"\n");

    let html = compile(&source).unwrap();
    let rendered: Vec<&str> = html.lines().collect();
    assert_eq!(rendered.len(), lines + 4);
    assert_eq!(rendered[1], "t0");
    assert_eq!(rendered[lines], format!("t{}", lines - 1));
    assert_eq!(
        &rendered[lines + 1..],
        ["    <div2 id='last'>", "    </div2>", "</div1>"]
    );
}
