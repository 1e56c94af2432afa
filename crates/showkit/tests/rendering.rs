//! End-to-end rendering scenarios combining the trait, containers,
//! variants, and formatting values.

use showkit::{
    pad_left, render_default, render_framed, render_framed_wrapped, render_optional,
    render_outcome, show, show_via_display, FloatFormat, PadFormat, Show,
};

#[test]
fn test_show_composes_through_structures() {
    let pairs = vec![("alpha", 1), ("beta", 2), ("gamma", 3)];
    assert_eq!(
        render_default(&pairs),
        "[(alpha, 1), (beta, 2), (gamma, 3)]"
    );
}

#[test]
fn test_wrapped_rows_align_under_first_element() {
    let out = render_framed_wrapped(",", "(", ")", &[1, 2, 3, 4, 5], 2);
    assert_eq!(out, "(1,2,\n 3,4,\n 5)");

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    // Continuation rows are indented by the prefix width (1 column).
    assert!(lines[1].starts_with(' '));
    assert!(lines[2].starts_with(' '));
}

#[test]
fn test_variant_payloads_render_recursively() {
    assert_eq!(render_optional(&Some((1, "one"))), "Just (1, one)");

    let outcome: Result<Vec<i32>, String> = Err("parse failed".to_string());
    assert_eq!(
        render_outcome(&outcome.map(|v| render_default(&v))),
        "Error parse failed"
    );
}

#[test]
fn test_column_aligned_report() {
    let label = PadFormat::right(' ', 10);
    let amount = FloatFormat::filled(' ', 9, 2);

    let rows = [("coffee", 3.5), ("sandwich", 12.25), ("tip", 2.0)];
    let report: Vec<String> = rows
        .iter()
        .map(|(name, price)| format!("{}{}", label.apply(name), amount.apply(*price)))
        .collect();

    assert_eq!(report[0], "coffee         3.50");
    assert_eq!(report[1], "sandwich      12.25");
    assert_eq!(report[2], "tip            2.00");
    // Every row comes out the same width.
    assert!(report.iter().all(|r| r.len() == 19));
}

#[test]
fn test_zero_padded_ledger_amounts() {
    let amount = FloatFormat::fixed(4, 2);
    assert_eq!(amount.apply(3.5), "0003.50");
    assert_eq!(amount.apply(-3.5), "-003.50");
    assert_eq!(amount.apply(12345.678), "12345.68");
}

#[test]
fn test_custom_type_in_container() {
    struct Commit(&'static str);

    impl std::fmt::Display for Commit {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", &self.0[..7])
        }
    }

    show_via_display!(Commit);

    let commits = [Commit("abc1234deadbeef"), Commit("9876543cafebabe")];
    assert_eq!(render_default(&commits), "[abc1234, 9876543]");
}

#[test]
fn test_json_value_inspection() {
    let payload = serde_json::json!({
        "status": "ok",
        "totals": [10, 20, 30],
    });
    assert_eq!(show(&payload), "[(status, ok), (totals, [10, 20, 30])]");
}

#[test]
fn test_framed_map_style_output() {
    let out = render_framed(" => ", "{", "}", &[("a", 1), ("b", 2)]);
    assert_eq!(out, "{(a, 1) => (b, 2)}");
}

#[test]
fn test_pad_composes_with_float_format() {
    // Further left-padding an already formatted number, sign included.
    let formatted = FloatFormat::fixed(0, 3).apply(-3.14159);
    assert_eq!(pad_left(' ', 8, &formatted), "  -3.142");
}

#[test]
fn test_formatting_values_shared_across_threads() {
    let fmt = FloatFormat::fixed(2, 1);
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || fmt.apply(i as f64)))
        .collect();
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs, vec!["00.0", "01.0", "02.0", "03.0"]);
}

#[test]
fn test_show_trait_object_compatible_via_generic() {
    fn describe<T: Show>(value: &T) -> String {
        show(value)
    }
    assert_eq!(describe(&(true, 'x')), "(true, x)");
}
