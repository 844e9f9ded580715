//! Suites of tests applied across multiple crates and multiple unit types


use kombi_core::{Composable, Lit, Seq, compose};

use super::utils::{Unit, match_str, match_checked, units, same_type};


/// Checks the single-unit literal.
pub fn test_literals<U>()
    where U: Unit,
{
    let u = <U as From<u8>>::from;
    let a = Lit::new(u(b'a'));

    macro_rules! test {
        ($input:expr => $pos:expr, $expected:expr) => {
            assert_eq!(match_str::<_, U>(&a, $input), ($pos, $expected));
        };
    }

    test!("a" => 1, Some(u(b'a')));
    test!("b" => 0, None);
    test!("" => 0, None);
    test!("aa" => 1, Some(u(b'a')));
    test!("ba" => 0, None);
    test!("A" => 0, None);

    // From a later position
    let input = units::<U>("xa");
    assert_eq!(match_checked(&a, &input, 1), (2, Some(u(b'a'))));
    assert_eq!(match_checked(&a, &input, 2), (2, None));
}


/// Checks direct construction of sequences and their rollback.
pub fn test_sequences<U>()
    where U: Unit,
{
    let u = <U as From<u8>>::from;
    let l = |b| Lit::new(u(b));
    let abc = Seq::new((l(b'a'), l(b'b'), l(b'c')));
    let abc_attr = Some((u(b'a'), u(b'b'), u(b'c')));

    macro_rules! test {
        ($rule:expr, $input:expr => $pos:expr, $expected:expr) => {
            assert_eq!(match_str::<_, U>(&$rule, $input), ($pos, $expected));
        };
    }

    test!(abc, "abc" => 3, abc_attr.clone());
    test!(abc, "abcabc" => 3, abc_attr.clone());
    test!(abc, "abx" => 0, None);
    test!(abc, "axc" => 0, None);
    test!(abc, "xbc" => 0, None);
    test!(abc, "ab" => 0, None);
    test!(abc, "" => 0, None);

    let single = Seq::new((l(b'a'),));
    test!(single, "a" => 1, Some((u(b'a'),)));
    test!(single, "b" => 0, None);

    // Rolls back to where it started, not to the start of the input
    let input = units::<U>("zzabx");
    assert_eq!(match_checked(&abc, &input, 2), (2, None));
    let input = units::<U>("zzabc");
    assert_eq!(match_checked(&abc, &input, 2), (5, abc_attr));

    // Sequences given directly as elements are single elements
    let nested = Seq::new((Seq::new((l(b'a'), l(b'b'))), l(b'c')));
    test!(nested, "abc" => 3, Some(((u(b'a'), u(b'b')), u(b'c'))));
    test!(nested, "abd" => 0, None);
}


/// Checks the `>>` operator in all of its combinations, and that grouping
/// does not affect the element list nor the result.
pub fn test_composition<U>()
    where U: Unit,
{
    let u = <U as From<u8>>::from;
    let (a, b, c, d) = (Lit::new(u(b'a')), Lit::new(u(b'b')),
                        Lit::new(u(b'c')), Lit::new(u(b'd')));

    macro_rules! test {
        ($rule:expr, $input:expr => $pos:expr, $expected:expr) => {
            assert_eq!(match_str::<_, U>(&$rule, $input), ($pos, $expected));
        };
    }

    // Rule with rule
    let ab = a.clone() >> b.clone();
    test!(ab, "ab" => 2, Some((u(b'a'), u(b'b'))));
    test!(ab, "aa" => 0, None);

    // Seq with rule, and rule with Seq
    let left = (a.clone() >> b.clone()) >> c.clone();
    let right = a.clone() >> (b.clone() >> c.clone());
    same_type(&left, &right);
    assert_eq!(left, right);
    let abc_attr = Some((u(b'a'), u(b'b'), u(b'c')));
    test!(left, "abc" => 3, abc_attr.clone());
    test!(right, "abc" => 3, abc_attr);
    test!(left, "abd" => 0, None);
    test!(right, "abd" => 0, None);

    // Seq with Seq
    let abcd = (a.clone() >> b.clone()) >> (c.clone() >> d.clone());
    same_type(&abcd, &Seq::new((a.clone(), b.clone(), c.clone(), d.clone())));
    let abcd_attr = Some((u(b'a'), u(b'b'), u(b'c'), u(b'd')));
    test!(abcd, "abcd" => 4, abcd_attr.clone());
    test!(abcd, "abcx" => 0, None);

    // Every grouping of four
    let groupings = [
        ((a.clone() >> b.clone()) >> c.clone()) >> d.clone(),
        (a.clone() >> (b.clone() >> c.clone())) >> d.clone(),
        (a.clone() >> b.clone()) >> (c.clone() >> d.clone()),
        a.clone() >> ((b.clone() >> c.clone()) >> d.clone()),
        a.clone() >> (b.clone() >> (c.clone() >> d.clone())),
        compose(a.clone(), compose(compose(b.clone(), c.clone()), d.clone())),
    ];
    for g in &groupings {
        assert_eq!(g, &abcd);
        test!(g, "abcd" => 4, abcd_attr.clone());
        test!(g, "abcdx" => 4, abcd_attr.clone());
        test!(g, "abc" => 0, None);
    }

    // An action on a Seq does not change how it composes
    let acted = (a.clone() >> b.clone()).with_action(|_: &mut ()| ()) >> c.clone();
    same_type(&acted, &left);
    assert_eq!(acted, left);
    test!(acted, "abc" => 3, Some((u(b'a'), u(b'b'), u(b'c'))));
    test!(acted, "abx" => 0, None);

    // Composed sequences are reusable descriptors
    let input = units::<U>("abab");
    assert_eq!(match_checked(&ab, &input, 0), (2, Some((u(b'a'), u(b'b')))));
    assert_eq!(match_checked(&ab, &input, 2), (4, Some((u(b'a'), u(b'b')))));
}
