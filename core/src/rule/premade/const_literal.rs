//! Literals whose unit is a const generic parameter, so that the unit is part
//! of the type and instances carry no data.

use crate::{Cursor, Matchable};


/// Matches the single `char` `C`.  The result is `C`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Char<const C: char>;

impl<const C: char> Matchable<char> for Char<C> {
    type Attr = char;

    #[inline]
    fn try_match(&self, cursor: &mut Cursor<'_, char>) -> Option<Self::Attr> {
        if cursor.peek() == Some(&C) {
            let _ = cursor.bump();
            Some(C)
        } else {
            None
        }
    }
}

crate::composable!([const C: char] Char<C>);


/// Matches the single byte `B`.  The result is `B`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Byte<const B: u8>;

impl<const B: u8> Matchable<u8> for Byte<B> {
    type Attr = u8;

    #[inline]
    fn try_match(&self, cursor: &mut Cursor<'_, u8>) -> Option<Self::Attr> {
        if cursor.peek() == Some(&B) {
            let _ = cursor.bump();
            Some(B)
        } else {
            None
        }
    }
}

crate::composable!([const B: u8] Byte<B>);


#[cfg(test)]
mod tests {
    use super::*;

    fn attr_of<R: Matchable<U>, U>(_: &R) -> Option<R::Attr> { None }

    #[test]
    fn char_attr_is_char() {
        let _: Option<char> = attr_of::<_, char>(&Char::<'a'>);
    }

    #[test]
    fn char() {
        let input = ['a', 'b'];
        let mut c = Cursor::new(&input);
        assert_eq!(Char::<'b'>.try_match(&mut c), None);
        assert_eq!(c.pos(), 0);
        assert_eq!(Char::<'a'>.try_match(&mut c), Some('a'));
        assert_eq!(c.pos(), 1);
    }

    #[test]
    fn byte() {
        let mut c = Cursor::new(b"ab");
        assert_eq!(Byte::<b'a'>.try_match(&mut c), Some(b'a'));
        assert_eq!(Byte::<b'a'>.try_match(&mut c), None);
        assert_eq!(c.pos(), 1);
        assert_eq!(Byte::<b'b'>.try_match(&mut c), Some(b'b'));
        assert_eq!(Byte::<b'b'>.try_match(&mut c), None);
        assert_eq!(c.pos(), 2);
    }
}
