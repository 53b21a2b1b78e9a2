use miette::Diagnostic as _;
use tfplot::{Error, Manager, Settings, TransferFunction};

fn add_error(tf: &TransferFunction) -> Error {
    let settings = Settings::default().with_resolution(10).unwrap();
    let mut mgr = Manager::new(settings);
    mgr.add(tf.clone()).unwrap_err()
}

#[test]
fn label_points_at_faulty_char() {
    let tf = TransferFunction::new("s+@", "1");
    let err = add_error(&tf);
    let diag = err.to_diagnostic(&tf.expression()).unwrap();

    let labels: Vec<_> = diag.labels().unwrap().collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 3);
    assert_eq!(labels[0].len(), 1);
    assert!(diag.help().is_some());
    assert!(diag.source_code().is_some());
}

#[test]
fn imbalanced_parentheses_span_the_expression() {
    let expression = "((s+1)";
    let err = tfplot::check_expression(expression).unwrap_err();
    let diag = err.to_diagnostic(expression).unwrap();
    let labels: Vec<_> = diag.labels().unwrap().collect();
    assert_eq!(labels[0].offset(), 0);
    assert_eq!(labels[0].len(), expression.len());
}

#[test]
fn scalar_result_has_no_label() {
    let tf = TransferFunction::new("1", "2");
    let err = add_error(&tf);
    let diag = err.to_diagnostic(&tf.expression()).unwrap();
    assert!(diag.labels().is_none());
    assert!(diag.help().is_some());
}

#[test]
fn curve_errors_are_looked_through() {
    let tf = TransferFunction::new("1", "s*/2");
    let err = Error::Curve {
        index: 3,
        source: Box::new(add_error(&tf)),
    };
    let diag = err.to_diagnostic(&tf.expression()).unwrap();
    let labels: Vec<_> = diag.labels().unwrap().collect();
    assert_eq!(labels.len(), 1);

    assert!(Error::InvalidResolution(0).to_diagnostic("s").is_none());
}
