//! Shows use of only the `kombi_core` crate, with input on the stack and no
//! heap allocation, including a rule type of our own that joins the `>>`
//! algebra via `composable!`.

use kombi_core::{Byte, Composable, Cursor, Matchable, composable};


/// Matches one ASCII hexadecimal digit, and its result is the digit's value.
#[derive(Copy, Clone, Debug)]
struct HexDigit;

impl Matchable<u8> for HexDigit {
    type Attr = u8;

    fn try_match(&self, cursor: &mut Cursor<'_, u8>) -> Option<Self::Attr> {
        let value = match *cursor.peek()? {
            d @ b'0' ..= b'9' => d - b'0',
            d @ b'a' ..= b'f' => d - b'a' + 10,
            d @ b'A' ..= b'F' => d - b'A' + 10,
            _ => return None,
        };
        let _ = cursor.bump();
        Some(value)
    }
}

composable!(HexDigit);


/// A context for the action below.  Matching never runs actions, so this is
/// run explicitly after a successful match.
#[derive(Default, Debug)]
struct Stats {
    colors: u32,
}


fn main() {
    let byte = HexDigit >> HexDigit;
    let color = (Byte::<b'#'> >> byte >> byte >> byte)
        .with_action(|stats: &mut Stats| stats.colors += 1);

    let input: [u8; 14] = *b"#1e90ffxx#zz00";
    let mut cursor = Cursor::new(&input);
    let mut stats = Stats::default();

    while !cursor.is_at_end() {
        // Composition flattens, so the result is one flat 7-tuple.
        if let Some((_, r1, r0, g1, g0, b1, b0)) = color.try_match(&mut cursor) {
            color.run_action(&mut stats);
            let rgb = [r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0];
            println!("color {rgb:?} ending at {}", cursor.pos());
        } else {
            // A failed match leaves the cursor where it was, so skip a unit.
            let _ = cursor.bump();
        }
    }

    println!("{stats:?}");
}
