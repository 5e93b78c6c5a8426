use bigint::{BigInt, BigIntError};
use bigint_cli::commands::bytes::{self, Endian};
use bigint_cli::commands::eval;
use bigint_cli::repl;
use std::io::Write;
use tempfile::NamedTempFile;

fn root_error(err: &anyhow::Error) -> Option<&BigIntError> {
    err.root_cause().downcast_ref::<BigIntError>()
}

// ======================================================================
// eval
// ======================================================================

#[test]
fn eval_binary_arithmetic() {
    assert_eq!(eval::evaluate("12 * -34", 10).unwrap(), "-408");
    assert_eq!(eval::evaluate("-17 / 5", 10).unwrap(), "-3");
    assert_eq!(eval::evaluate("-17 % 5", 10).unwrap(), "-2");
    assert_eq!(
        eval::evaluate("2 ** 100", 10).unwrap(),
        "1267650600228229401496703205376"
    );
    assert_eq!(eval::evaluate("12 gcd 18", 10).unwrap(), "6");
    assert_eq!(eval::evaluate("-3 max 2", 10).unwrap(), "2");
    assert_eq!(eval::evaluate("-3 cmp 2", 10).unwrap(), "-1");
}

#[test]
fn eval_bitwise_and_shifts() {
    assert_eq!(eval::evaluate("-1 & 255", 10).unwrap(), "255");
    assert_eq!(eval::evaluate("6 ^ -3", 10).unwrap(), "-5");
    assert_eq!(eval::evaluate("~ 0", 10).unwrap(), "-1");
    assert_eq!(eval::evaluate("-7 >> 1", 10).unwrap(), "-4");
    assert_eq!(eval::evaluate("1 << 64", 10).unwrap(), "18446744073709551616");
    assert_eq!(eval::evaluate("5 << -1", 10).unwrap(), "2");
}

#[test]
fn eval_unary_and_powmod() {
    assert_eq!(eval::evaluate("neg 5", 10).unwrap(), "-5");
    assert_eq!(eval::evaluate("abs -5", 10).unwrap(), "5");
    assert_eq!(eval::evaluate("inc -1", 10).unwrap(), "0");
    assert_eq!(eval::evaluate("dec 0", 10).unwrap(), "-1");
    assert_eq!(eval::evaluate("powmod 4 13 497", 10).unwrap(), "445");
}

#[test]
fn eval_output_radix() {
    assert_eq!(eval::evaluate("255 + 0", 16).unwrap(), "ff");
    assert_eq!(eval::evaluate("-5", 2).unwrap(), "-101");
    let err = eval::evaluate("1", 37).unwrap_err();
    assert!(matches!(root_error(&err), Some(BigIntError::InvalidArgument(_))));
}

#[test]
fn eval_missing_operand_is_null_argument() {
    let err = eval::evaluate("5 +", 10).unwrap_err();
    assert_eq!(root_error(&err), Some(&BigIntError::NullArgument("value")));
    let err = eval::evaluate("neg", 10).unwrap_err();
    assert_eq!(root_error(&err), Some(&BigIntError::NullArgument("value")));
}

#[test]
fn eval_errors_surface_library_kinds() {
    let err = eval::evaluate("7 / 0", 10).unwrap_err();
    assert_eq!(root_error(&err), Some(&BigIntError::DivisionByZero));
    let err = eval::evaluate("2 ** -1", 10).unwrap_err();
    assert!(matches!(root_error(&err), Some(BigIntError::InvalidArgument(_))));
    let err = eval::evaluate("abc + 1", 10).unwrap_err();
    assert!(matches!(root_error(&err), Some(BigIntError::Format(_))));
    assert!(eval::evaluate("", 10).is_err());
}

// ======================================================================
// bytes / from-bytes
// ======================================================================

#[test]
fn bytes_round_trip_through_hex() {
    for value in ["0", "127", "128", "-128", "-129", "32768", "-32769"] {
        for order in [Endian::Little, Endian::Big] {
            let hex = bytes::encode(value, order).unwrap();
            let back = bytes::decode(&hex, order).unwrap();
            assert_eq!(back, BigInt::parse(value).unwrap(), "{value} via {hex}");
        }
    }
}

#[test]
fn from_bytes_decodes_sign() {
    assert_eq!(bytes::decode("ff", Endian::Little).unwrap(), BigInt::from(-1));
    assert_eq!(bytes::decode("0x0080", Endian::Big).unwrap(), BigInt::from(128));
    assert_eq!(bytes::decode("0080", Endian::Little).unwrap(), BigInt::from(-32768));
    assert!(bytes::decode("", Endian::Little).unwrap().is_zero());
}

#[test]
fn bytes_rejects_bad_value() {
    assert!(bytes::encode("12x", Endian::Little).is_err());
}

// ======================================================================
// repl
// ======================================================================

#[test]
fn repl_evaluates_each_line() {
    let input = "1 + 2\n\n# comment\n7 / 0\n-5 * -5\n";
    let mut out = Vec::new();
    repl::run_lines(input.as_bytes(), &mut out, 10).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "3");
    assert!(lines[1].starts_with("error:"), "got {:?}", lines[1]);
    assert!(lines[1].contains("division by zero"));
    assert_eq!(lines[2], "25");
}

#[test]
fn repl_continues_after_oversized_results() {
    let input = "1 << 4611686018427387904\n3 ** 2147483647\n1 >> -4611686018427387904\n2 + 2\n";
    let mut out = Vec::new();
    repl::run_lines(input.as_bytes(), &mut out, 10).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4, "got {text:?}");
    for line in &lines[..3] {
        assert!(line.starts_with("error:"), "got {line:?}");
    }
    assert_eq!(lines[3], "4");
}

#[test]
fn eval_shift_and_pow_limits() {
    let err = eval::evaluate("1 << 4611686018427387904", 10).unwrap_err();
    assert!(matches!(root_error(&err), Some(BigIntError::InvalidArgument(_))));
    assert_eq!(eval::evaluate("-5 >> 4611686018427387904", 10).unwrap(), "-1");
    assert_eq!(eval::evaluate("0 << 4611686018427387904", 10).unwrap(), "0");
    assert!(eval::evaluate("1 << 99999999999999999999", 10).is_err());
}

#[test]
fn repl_reads_from_file() {
    let mut f = NamedTempFile::new().unwrap();
    writeln!(f, "2 ** 64").unwrap();
    writeln!(f, "~ 255").unwrap();
    f.flush().unwrap();

    let result = repl::run_repl(f.path().to_str(), 16);
    assert!(result.is_ok(), "run_repl failed: {:?}", result.err());
}

#[test]
fn repl_missing_file_returns_error() {
    assert!(repl::run_repl(Some("/tmp/nonexistent_bigint_input.txt"), 10).is_err());
}
