//! Integration tests for the listing emitter

use sdelay_emitter::{emit, emit_lines, format_line, EmitOptions, HEADER_LINES};
use sdelay_solver::{evaluate, solve};
use sdelay_spec::{DelayRequest, Instruction, Line, LoopConfiguration, Register};

fn fixed_listing(register_count: u8, outer_repeats: u16) -> Vec<String> {
    let request = DelayRequest::new(10.0, 2, 1.0).unwrap();
    let config = LoopConfiguration::new(register_count, outer_repeats).unwrap();
    let cost = evaluate(&config, &request);
    emit(&request, &config, &cost)
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_loads_are_unindented_and_ordered() {
    let lines = fixed_listing(5, 3);
    let loads: Vec<&String> = lines.iter().filter(|l| l.contains("LOAD")).collect();
    assert_eq!(loads.len(), 5);
    for (i, load) in loads.iter().enumerate() {
        assert!(load.starts_with(&format!("LOAD S{}, ", i)));
    }
    assert_eq!(loads[4].as_str(), "LOAD S4, 0xfd");
}

#[test]
fn test_body_is_indented() {
    let lines = fixed_listing(3, 10);
    let label = lines.iter().position(|l| l == "loop:").unwrap();
    assert_eq!(label, HEADER_LINES + 3);
    assert!(lines[label + 1..].iter().all(|l| l.starts_with("    ")));
}

#[test]
fn test_hex_register_names() {
    let lines = fixed_listing(12, 1);
    assert!(lines.contains(&"LOAD Sa, 0x00".to_string()));
    assert!(lines.contains(&"LOAD Sb, 0xff".to_string()));
    assert!(lines.contains(&"    ADD Sb, 0x01".to_string()));
}

#[test]
fn test_structured_and_text_agree() {
    let request = DelayRequest::new(10.0, 2, 0.5).unwrap();
    let solution = solve(&request).unwrap();
    let options = EmitOptions::default();

    let structured = emit_lines(&request, &solution.configuration, &solution.cost, &options);
    let text = emit(&request, &solution.configuration, &solution.cost);
    let formatted: Vec<String> = structured
        .iter()
        .map(|l| format_line(l, options.indent()))
        .collect();
    assert_eq!(formatted, text);

    let last = structured.last().unwrap();
    assert_eq!(
        last,
        &Line::Instruction(Instruction::JumpNz {
            label: "loop".to_string()
        })
    );
    match &structured[structured.len() - 2] {
        Line::Instruction(add) => {
            assert_eq!(add.register(), Some(solution.configuration.outer_register()))
        }
        other => panic!("Expected the outer ADD, got {:?}", other),
    }
}

#[test]
fn test_header_reports_configuration() {
    let lines = fixed_listing(4, 100);
    assert_eq!(lines[3], "; Registers: 4, outer repeats: 100");
}

#[test]
fn test_single_register_chain() {
    let lines = fixed_listing(1, 1);
    assert_eq!(&lines[HEADER_LINES..], &["LOAD S0, 0xff", "loop:", "    ADD S0, 0x01", "    JUMP NZ, loop"]);
    assert_eq!(Register::S0.name(), "S0");
}
