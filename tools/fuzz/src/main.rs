use afl::fuzz;
use esr_scan::{compute_check_digit, parse, select_candidate, ParseError};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let _ = compute_check_digit(input);

    if let Some(line) = select_candidate(input) {
        let _ = parse(line);
    }

    match parse(input) {
        Ok(code) => {
            // Validity queries and rendering must never panic on a parsed code
            let amount_valid = code.is_amount_valid();
            let reference_valid = code.is_reference_valid();
            let fields = code.to_field_map();
            assert_eq!(fields.amount_correct, amount_valid);
            assert_eq!(fields.reference_number_correct, reference_valid);
            assert_eq!(fields.amount.is_some(), code.amount().is_some());
            let _ = code.render();

            #[cfg(feature = "manual_test")]
            {
                println!("Parsed: {}", code);
            }
        }
        Err(ParseError::DelimiterNotFound) => {
            assert!(!input.contains('>'));
        }
        Err(_) => {}
    }
}
