//! Integration tests for parsing emitted listings

use sdelay_emitter::{emit, emit_with, format_line, render, EmitOptions, HEADER_LINES};
use sdelay_parser::{parse_line, parse_listing, recover_configuration};
use sdelay_solver::solve;
use sdelay_spec::{DelayRequest, Line};

fn listing(delay: f64, options: &EmitOptions) -> (Vec<String>, DelayRequest) {
    let request = DelayRequest::new(10.0, 2, delay).unwrap();
    let solution = solve(&request).unwrap();
    (
        emit_with(&request, &solution.configuration, &solution.cost, options),
        request,
    )
}

#[test]
fn test_every_emitted_line_parses() {
    let (lines, _) = listing(2.0, &EmitOptions::default());
    for (i, text) in lines.iter().enumerate() {
        let line = parse_line(text, i + 1).unwrap().expect("emitted line is blank");
        // Reformatting the parsed line gives back the emitted text
        assert_eq!(&format_line(&line, "    "), text);
    }
}

#[test]
fn test_header_lines_parse_as_comments() {
    let (lines, _) = listing(0.002, &EmitOptions::default());
    let parsed = parse_listing(&render(&lines)).unwrap();
    let comments = parsed
        .iter()
        .take_while(|(_, l)| matches!(l, Line::Comment(_)))
        .count();
    assert_eq!(comments, HEADER_LINES);
}

#[test]
fn test_recover_with_custom_label() {
    let options = EmitOptions::default().with_label("wait_5ms").unwrap();
    let (lines, _) = listing(0.005, &options);
    let recovered = recover_configuration(&render(&lines)).unwrap();
    assert_eq!(recovered.label, "wait_5ms");
}

#[test]
fn test_recover_resized_listing() {
    let request = DelayRequest::new(10.0, 2, 10.0).unwrap();
    let solution = solve(&request).unwrap();
    assert!(solution.resized());

    let text = render(&emit(&request, &solution.configuration, &solution.cost));
    let recovered = recover_configuration(&text).unwrap();
    assert_eq!(recovered.configuration, solution.configuration);
    assert_eq!(recovered.initial_values, vec![0x00, 0x00, 0x00, 0xfe]);
}

#[test]
fn test_lowercase_listing_recovers() {
    let (lines, _) = listing(0.002, &EmitOptions::default());
    let text = render(&lines).to_ascii_lowercase();
    let recovered = recover_configuration(&text).unwrap();
    assert_eq!(recovered.initial_values, vec![0x00, 0xec]);
}
