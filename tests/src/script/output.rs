#![cfg(test)]
use greetr_common::config::Config;
use greetr_common::parity::{Parity, parity_line};
use greetr_common::person::Person;
use greetr_common::{greeting, script};

/// The whole default run, written to an in-memory sink.
#[test]
fn default_run_matches_literal_block() -> anyhow::Result<()> {
    let mut sink: Vec<u8> = Vec::new();
    script::run(&Config::default(), &mut sink)?;

    let text: String = String::from_utf8(sink)?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Name: Alice, Age: 30",
            "Hello, Bob!",
            "0 is even",
            "1 is odd",
            "2 is even",
            "3 is odd",
            "4 is even",
        ]
    );
    assert!(text.ends_with('\n'), "last line must be newline terminated");
    Ok(())
}

/// Lines come from the same building blocks the public API exposes.
#[test]
fn run_is_composed_of_public_operations() {
    let cfg: Config = Config::default();
    let person: Person = Person::new(cfg.person_name.clone(), cfg.person_age);

    let mut expected: Vec<String> = vec![person.display_info(), greeting::greet(&cfg.greetee)];
    expected.extend((0..=cfg.parity_limit).map(parity_line));

    assert_eq!(script::lines(&cfg), expected);
}

#[test]
fn parity_loop_covers_zero_through_four() {
    let cfg: Config = Config::default();
    let parities: Vec<Parity> = (0..=cfg.parity_limit).map(Parity::of).collect();

    assert_eq!(
        parities,
        vec![Parity::Even, Parity::Odd, Parity::Even, Parity::Odd, Parity::Even]
    );
}

#[test]
fn repeated_runs_are_identical() -> anyhow::Result<()> {
    let cfg: Config = Config::default();
    let mut first: Vec<u8> = Vec::new();
    let mut second: Vec<u8> = Vec::new();

    script::run(&cfg, &mut first)?;
    script::run(&cfg, &mut second)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn default_config_holds_literals() {
    let cfg: Config = Config::default();

    assert_eq!(cfg.person_name, "Alice");
    assert_eq!(cfg.person_age, 30);
    assert_eq!(cfg.greetee, "Bob");
    assert_eq!(cfg.parity_limit, 4);
}
