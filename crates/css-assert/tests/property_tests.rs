//! Property-based tests for css-assert.
//!
//! Uses proptest to verify the check predicates behave consistently for
//! arbitrary documents and expected values.

use css_assert::prelude::*;
use proptest::prelude::*;

const SELECTORS: &[&str] = &[".a", ".b", "#x", "p", "span", "li", r#"[data-test-id="k"]"#];

fn list_body(texts: &[String]) -> String {
    let items: String = texts
        .iter()
        .map(|t| format!(r#"<li class="item">{t}</li>"#))
        .collect();
    format!("<ul>{items}</ul>")
}

fn passes(check: &Check, body: &str) -> bool {
    check
        .assert(&mut Response::html(body.to_string()), &Request::get("/"))
        .is_ok()
}

fn body_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            r#"<div class="a">a</div>"#,
            r#"<div class="b">b</div>"#,
            r#"<div id="x">x</div>"#,
            "<p>para</p>",
            "<span>s</span>",
            r#"<i data-test-id="k">k</i>"#,
        ]),
        0..5,
    )
    .prop_map(|parts| parts.concat())
}

// === Text value properties ===

proptest! {
    /// Every match is found at its own position and nowhere past the end.
    #[test]
    fn prop_nth_text_value_positional(texts in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let body = list_body(&texts);
        for (i, text) in texts.iter().enumerate() {
            prop_assert!(passes(&nth_text_value(i, ".item", text.as_str()), &body));
        }
        let past_end = nth_text_value(texts.len(), ".item", texts[0].as_str());
        prop_assert!(!passes(&past_end, &body));
    }

    /// First text value agrees with index zero.
    #[test]
    fn prop_first_equals_nth_zero(
        texts in prop::collection::vec("[a-z]{1,8}", 0..4),
        expected in "[a-z]{0,8}"
    ) {
        let body = list_body(&texts);
        prop_assert_eq!(
            passes(&first_text_value(".item", expected.as_str()), &body),
            passes(&nth_text_value(0, ".item", expected.as_str()), &body)
        );
    }

    /// Any substring of a contained value is also contained.
    #[test]
    fn prop_containment_monotonic(
        prefix in "[a-z ]{0,6}",
        value in "[a-z]{1,10}",
        suffix in "[a-z ]{0,6}",
        bounds in (0usize..10, 0usize..10)
    ) {
        let body = format!(r#"<p class="c">{prefix}{value}{suffix}</p>"#);
        prop_assert!(passes(&contains_text_value(".c", value.as_str()), &body));

        let (a, b) = bounds;
        let start = a.min(value.len());
        let end = b.min(value.len()).max(start);
        let sub = &value[start..end];
        prop_assert!(passes(&contains_text_value(".c", sub), &body));
    }
}

// === Presence properties ===

proptest! {
    /// Exists and not-exists disagree for every single selector.
    #[test]
    fn prop_exists_not_exists_duality(
        body in body_strategy(),
        selector in prop::sample::select(SELECTORS.to_vec())
    ) {
        prop_assert_ne!(
            passes(&exists([selector]), &body),
            passes(&not_exists([selector]), &body)
        );
    }

    /// A two-selector exists check is the conjunction of its parts and
    /// names the first missing selector.
    #[test]
    fn prop_multi_selector_and(
        body in body_strategy(),
        a in prop::sample::select(SELECTORS.to_vec()),
        b in prop::sample::select(SELECTORS.to_vec())
    ) {
        let has_a = passes(&exists([a]), &body);
        let has_b = passes(&exists([b]), &body);
        let combined = exists([a, b])
            .assert(&mut Response::html(body.clone()), &Request::get("/"));
        prop_assert_eq!(combined.is_ok(), has_a && has_b);

        if let Err(err) = combined {
            let missing = if has_a { b } else { a };
            prop_assert_eq!(
                err.to_string(),
                format!("expected found='true' for selector '{missing}'")
            );
        }
    }

    /// Re-evaluating a check against the same response gives the same outcome.
    #[test]
    fn prop_idempotent(
        body in body_strategy(),
        selector in prop::sample::select(SELECTORS.to_vec())
    ) {
        let checks = [
            exists([selector]),
            not_exists([selector]),
            first_text_value(selector, "a"),
            contains_text_value(selector, "a"),
            text_exists(selector),
        ];
        let mut response = Response::new()
            .with_reader(std::io::Cursor::new(body.clone().into_bytes()));
        let request = Request::get("/");
        for check in &checks {
            let first = check.assert(&mut response, &request).map_err(|e| e.to_string());
            let second = check.assert(&mut response, &request).map_err(|e| e.to_string());
            prop_assert_eq!(first, second);
        }
    }

    /// The data-test-id helper always yields a selector that finds its element.
    #[test]
    fn prop_data_test_id_finds_element(id in "[a-z][a-z0-9-]{0,12}") {
        let body = format!(r#"<section data-test-id="{id}">x</section>"#);
        prop_assert!(passes(&element_exists(data_test_id(&id)), &body));
    }
}
