//! Builds a few small grammars by composition and matches them against
//! in-memory strings.  Run with `RUST_LOG=trace` to see rollbacks.

use kombi::{
    Char, Composable, Seq, lit,
    common::inmem::{chars, parse_str},
    parse::parse_prefix,
};


/// Grouping does not matter: these are the same grammar, of the same type.
fn grouping() {
    let left = (Char::<'f'> >> Char::<'o'>) >> Char::<'o'>;
    let right = Char::<'f'> >> (Char::<'o'> >> Char::<'o'>);
    assert_eq!(left, right);

    dbg!(parse_str(&left, "foo"));
    dbg!(parse_str(&right, "fob"));
    dbg!(parse_str(&right, "food"));
}

/// A failed sequence leaves nothing consumed, however far it got.
fn rollback() {
    let keyword: Seq<_> = lit('l') >> lit('e') >> lit('t');
    let input = chars("lex");
    dbg!(parse_prefix(&keyword, &input));
    dbg!(parse_prefix(&(lit('l') >> lit('e')), &input));
}

/// Actions are carried by rules, and are run by whoever consumes the results.
fn actions() {
    #[derive(Default, Debug)]
    struct Counts {
        greetings: usize,
    }

    let hi = (Char::<'h'> >> Char::<'i'>)
        .with_action(|counts: &mut Counts| counts.greetings += 1);
    let mut counts = Counts::default();
    for input in ["hi", "ho", "hi"] {
        if parse_str(&hi, input).is_ok() {
            hi.run_action(&mut counts);
        }
    }
    dbg!(counts);
}

fn main() {
    env_logger::init();

    grouping();
    rollback();
    actions();
}
