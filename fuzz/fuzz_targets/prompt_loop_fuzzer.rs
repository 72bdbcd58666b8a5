//! Fuzz target for the validated prompt retry loop
//!
//! Feeds arbitrary scripted input to a console and checks the loop contract.
//!
//! # Invariants
//!
//! - The loop MUST terminate on finite input (value or `InputExhausted`)
//! - A returned value MUST satisfy the rule
//! - Unsatisfiable rules MUST fail with `EmptyRange` or `InvalidBound` before
//!   any output
//! - Menus MUST return a selection within `1..=options`

#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use conprompt::{Console, PromptError, ValidationRule};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum FuzzRule {
    Unrestricted,
    Min(f64),
    Max(f64),
    Positive,
    Negative,
    Range(f64, f64),
    Menu(u8),
}

#[derive(Debug, Clone, Arbitrary)]
struct PromptScript {
    rule: FuzzRule,
    lines: Vec<String>,
}

fn console_for(lines: &[String]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    let mut input = String::new();
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    Console::new(Cursor::new(input.into_bytes()), Vec::new())
}

fuzz_target!(|script: PromptScript| {
    let mut console = console_for(&script.lines);

    let rule = match script.rule {
        FuzzRule::Menu(count) => {
            let labels: Vec<String> = (0..count).map(|i| format!("option {i}")).collect();
            let options: Vec<&str> = labels.iter().map(String::as_str).collect();
            match console.menu("", &options) {
                Ok(choice) => assert!((1..=options.len()).contains(&choice)),
                Err(PromptError::EmptyMenu) => assert!(options.is_empty()),
                Err(PromptError::InputExhausted) => {},
                Err(e) => panic!("unexpected menu error: {e}"),
            }
            return;
        },
        FuzzRule::Unrestricted => ValidationRule::Unrestricted,
        FuzzRule::Min(min) => ValidationRule::MinimumInclusive(min),
        FuzzRule::Max(max) => ValidationRule::MaximumInclusive(max),
        FuzzRule::Positive => ValidationRule::Positive,
        FuzzRule::Negative => ValidationRule::Negative,
        FuzzRule::Range(min, max) => ValidationRule::RangeInclusive { min, max },
    };

    match console.prompt_validated("", rule) {
        Ok(value) => assert!(rule.check(value).is_ok(), "{value} violates {rule}"),
        Err(PromptError::EmptyRange { .. } | PromptError::InvalidBound { .. }) => {
            assert!(rule.ensure_satisfiable().is_err());
            assert!(console.writer().is_empty());
        },
        Err(PromptError::InputExhausted) => {},
        Err(e) => panic!("unexpected prompt error: {e}"),
    }
});
