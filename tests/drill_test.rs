mod common;
use common::*;
use drills::lang::Drill;
use drills::mach::Runtime;
use pretty_assertions::assert_eq;

#[test]
fn test_range() {
    let out = drill(Drill::RANGE);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "Iteration is: 1");
    assert_eq!(lines[9], "Iteration is: 10");
    for (n, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("Iteration is: {}", n + 1));
    }
}

#[test]
fn test_even_sum() {
    assert_eq!(drill(Drill::EVEN_SUM), "Sum of even numbers is: 2550\n");
}

#[test]
fn test_chars() {
    assert_eq!(drill(Drill::CHARS), "J\na\nv\na\nS\nc\nr\ni\np\nt\n");
}

#[test]
fn test_table() {
    let out = drill(Drill::TABLE);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "5 * 1 = 5");
    assert_eq!(lines[9], "5 * 10 = 50");
    for (n, line) in lines.iter().enumerate() {
        let i = n + 1;
        assert_eq!(*line, format!("5 * {} = {}", i, 5 * i));
    }
}

#[test]
fn test_all_in_source_order() {
    assert_eq!(exec(&mut Runtime::default()), expected_all());
}

#[test]
fn test_rerun_is_identical() {
    let first = exec(&mut Runtime::default());
    let second = exec(&mut Runtime::default());
    assert_eq!(first, second);
    assert_eq!(Drill::TABLE.lines().unwrap(), Drill::TABLE.lines().unwrap());
}

#[test]
fn test_output_independent_of_cycles() {
    for cycles in [1, 2, 7, 33, 5000].iter() {
        assert_eq!(exec_n(&mut Runtime::default(), *cycles), expected_all());
    }
}

#[test]
fn test_lines_match_runtime() {
    for d in Drill::all().iter() {
        let mut joined = d.lines().unwrap().join("\n");
        joined.push('\n');
        assert_eq!(drill(*d), joined);
    }
}
