#![allow(dead_code)]
use drills::lang::Drill;
use drills::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => {
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Running => {}
            Event::Print(ps) => {
                s.push_str(&ps);
            }
        }
    }
    s
}

pub fn drill(drill: Drill) -> String {
    exec(&mut Runtime::new(vec![drill]))
}

pub fn expected_all() -> String {
    let mut s = String::new();
    for i in 1..=10 {
        s.push_str(&format!("Iteration is: {}\n", i));
    }
    s.push_str("Sum of even numbers is: 2550\n");
    for ch in "JavaScript".chars() {
        s.push(ch);
        s.push('\n');
    }
    for i in 1..=10 {
        s.push_str(&format!("5 * {} = {}\n", i, 5 * i));
    }
    s
}
