use std::{sync::Arc, thread};

use rstest::rstest;

use kombi::{Cursor, Matchable, ParseError, lit, common::inmem, parse::parse_range};


#[rstest]
#[case::exact("abc", Ok(('a', 'b', 'c')))]
#[case::mismatch_last("abx", Err(ParseError::NoMatch))]
#[case::mismatch_first("xbc", Err(ParseError::NoMatch))]
#[case::too_short("ab", Err(ParseError::NoMatch))]
#[case::empty("", Err(ParseError::NoMatch))]
#[case::trailing("abcc", Err(ParseError::Incomplete { consumed: 3, end: 4 }))]
fn parse_abc(#[case] input: &str, #[case] expected: Result<(char, char, char), ParseError>) {
    let abc = lit('a') >> (lit('b') >> lit('c'));
    assert_eq!(inmem::parse_str(&abc, input), expected);
}

#[rstest]
#[case(0, 2, Ok(('a', 'b')))]
#[case(2, 4, Ok(('a', 'b')))]
#[case(1, 3, Err(ParseError::NoMatch))]
#[case(0, 3, Err(ParseError::Incomplete { consumed: 2, end: 3 }))]
#[case(3, 2, Err(ParseError::Bounds(kombi::Error::PosPastEnd { pos: 3, end: 2 })))]
fn ranges(#[case] pos: usize,
          #[case] end: usize,
          #[case] expected: Result<(char, char), ParseError>)
{
    let ab = lit('a') >> lit('b');
    assert_eq!(parse_range(&ab, &inmem::chars("abab"), pos, end), expected);
}

#[test]
fn shared_across_threads() {
    let rule = Arc::new(lit(b'x') >> lit(b'y') >> lit(b'z'));
    let handles: Vec<_> = (0 .. 4).map(|i| {
        let rule = Arc::clone(&rule);
        thread::spawn(move || {
            let input = if i % 2 == 0 { b"xyz".to_vec() } else { b"xyq".to_vec() };
            let mut cursor = Cursor::new(&input);
            let attr = rule.try_match(&mut cursor);
            (i, attr, cursor.pos())
        })
    }).collect();

    for handle in handles {
        let (i, attr, pos) = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!((attr, pos), (Some((b'x', b'y', b'z')), 3));
        } else {
            assert_eq!((attr, pos), (None, 0));
        }
    }
}
