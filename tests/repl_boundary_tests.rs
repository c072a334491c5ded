//! Tests for the interactive-consumer boundaries: input readiness,
//! completion candidates, and highlighting styles.

use cljlex::repl::{line_status, Candidate, Completer, InputStatus, StaticCompleter};
use cljlex::repl::{style_for, ReadinessChecker, Style};
use cljlex::{Kind, StrSource, Token, TokenReader};

// ============================================================================
// Input readiness
// ============================================================================

#[test]
fn test_multiline_accumulation() {
    // The way a line reader uses the checker: keep appending lines and
    // re-checking the whole buffer until it is ready.
    let mut buffer = String::from("(defn greet [name]");
    assert_eq!(line_status(&buffer).unwrap(), InputStatus::NeedsMore);

    buffer.push_str("\n  (str \"hello, ");
    assert_eq!(line_status(&buffer).unwrap(), InputStatus::NeedsMore);

    buffer.push_str("\" name))");
    assert_eq!(line_status(&buffer).unwrap(), InputStatus::Ready);
}

#[test]
fn test_checker_over_explicit_tokens() {
    let mut checker = ReadinessChecker::new();
    checker.observe(&Token::bare(Kind::ListOpen, true));
    checker.observe(&Token::with_content(Kind::Symbol, "inc", true));
    assert_eq!(checker.status(), InputStatus::NeedsMore);
    checker.observe(&Token::bare(Kind::ListClose, true));
    assert_eq!(checker.status(), InputStatus::Ready);
}

#[test]
fn test_incomplete_token_sticks() {
    let mut checker = ReadinessChecker::new();
    checker.observe(&Token::with_content(Kind::String, "\"ab", false));
    checker.observe(&Token::with_content(Kind::Symbol, "x", true));
    assert_eq!(checker.status(), InputStatus::NeedsMore);
}

#[test]
fn test_comment_only_line_is_ready() {
    assert_eq!(line_status("; just a note").unwrap(), InputStatus::Ready);
}

#[test]
fn test_dangling_dispatch_waits() {
    assert_eq!(line_status("(conj #").unwrap(), InputStatus::NeedsMore);
}

// ============================================================================
// Completion
// ============================================================================

fn clojure_core_completer() -> StaticCompleter {
    let mut c = StaticCompleter::new();
    for name in ["reduce", "reduce-kv", "reductions", "map", "mapv"] {
        c.add(name, Some("clojure.core".to_string()));
    }
    c.add("reduce", Some("clojure.core.reducers".to_string()));
    c
}

#[test]
fn test_completing_the_in_progress_symbol() {
    // Lex the line, take the trailing symbol, feed it to the completer.
    let mut reader = TokenReader::new();
    let mut src = StrSource::new("(reduc");
    let mut last_symbol = None;
    loop {
        let token = reader.read_token(&mut src).unwrap();
        if token.kind == Kind::Eof {
            break;
        }
        if token.kind == Kind::Symbol {
            last_symbol = token.content.clone();
        }
    }

    let word = last_symbol.expect("line ends in a symbol");
    let found = clojure_core_completer().candidates(&word);
    let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["reduce", "reduce-kv", "reductions", "reduce"]);
}

#[test]
fn test_candidates_keep_namespace_grouping() {
    let found = clojure_core_completer().candidates("reduce");
    let namespaces: Vec<Option<&str>> = found.iter().map(|c| c.namespace.as_deref()).collect();
    assert!(namespaces.contains(&Some("clojure.core")));
    assert!(namespaces.contains(&Some("clojure.core.reducers")));
}

#[test]
fn test_candidate_equality() {
    assert_eq!(
        Candidate::new("map", Some("clojure.core".to_string())),
        Candidate::new("map", Some("clojure.core".to_string())),
    );
}

// ============================================================================
// Highlighting
// ============================================================================

#[test]
fn test_highlighting_a_lexed_line() {
    let mut reader = TokenReader::new();
    let mut src = StrSource::new("(def x \"s\") ; note");
    let mut styles = Vec::new();
    loop {
        let token = reader.read_token(&mut src).unwrap();
        if token.kind == Kind::Eof {
            break;
        }
        styles.push(style_for(token.kind));
    }
    assert_eq!(
        styles,
        vec![
            Style::Delimiter,
            Style::Plain,
            Style::Plain,
            Style::Literal,
            Style::Delimiter,
            Style::Comment,
        ]
    );
}
