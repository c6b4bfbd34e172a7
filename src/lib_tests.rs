use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_INPUT_ERROR);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_INPUT_ERROR, EXIT_CONFIG_ERROR);
}

#[test]
fn library_renders_without_cli() {
    let request = ChartRequest::new(vec![1.0, 2.0], vec!["x".into(), "y".into()])
        .unwrap()
        .with_bounds(20, 5);
    let chart = render(&request).unwrap();
    assert_eq!(chart.lines().count(), 2);
}
