use std::io::BufWriter;

use diff_checker::{run, CheckerError};
use proconio::source::once::OnceSource;

fn run_str(input: &str) -> Result<String, CheckerError> {
    let mut source = OnceSource::from(input);
    let mut out = Vec::new();
    run(&mut source, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn sample_cases() {
    let input = "3
3 3
1 2 5
2 3 3
1 3 8
3 3
1 2 5
2 3 3
1 3 9
4 1
1 2 0
";
    assert_eq!(run_str(input).unwrap(), "YES\nNO\nYES\n");
}

#[test]
fn contradiction_keeps_input_in_sync() {
    // the second triple contradicts, the rest of the case must still be skipped
    let input = "2
2 4
1 1 0
1 1 3
1 2 5
2 1 -5
2 2
1 2 5
2 1 -5
";
    assert_eq!(run_str(input).unwrap(), "NO\nYES\n");
}

#[test]
fn empty_and_negative() {
    let input = "3
1 0
5 4
5 4 -2
4 3 -2
3 2 -2
5 2 -6
2 1
2 1 -1000000000000
";
    assert_eq!(run_str(input).unwrap(), "YES\nYES\nYES\n");
}

#[test]
fn no_test_cases() {
    assert_eq!(run_str("0\n").unwrap(), "");
}

#[test]
fn element_out_of_range() {
    let input = "2
2 1
1 2 3
3 2
1 2 1
4 1 0
";
    match run_str(input) {
        Err(CheckerError::ElementOutOfRange { case, element, len }) => {
            assert_eq!((case, element, len), (2, 4, 3));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn earlier_verdicts_survive_out_of_range() {
    let input = "3
2 1
1 2 3
2 2
1 1 1
2 1 0
3 1
4 1 0
";
    let mut source = OnceSource::from(input);
    let mut out = BufWriter::new(Vec::new());
    let result = run(&mut source, &mut out);
    assert!(matches!(
        result,
        Err(CheckerError::ElementOutOfRange { case: 3, element: 4, len: 3 })
    ));
    // inspect the inner buffer without dropping the writer
    assert_eq!(out.get_ref().as_slice(), b"YES\nNO\n");
}

#[test]
fn zero_is_not_an_element() {
    let input = "1
3 1
0 1 0
";
    assert!(matches!(
        run_str(input),
        Err(CheckerError::ElementOutOfRange { element: 0, .. })
    ));
}
