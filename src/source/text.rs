use super::IntoEnumerator;
use crate::{Enumerator, exit::Flow};

/// Characters of a string, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chars<S>(S);

impl<S: AsRef<str>> Enumerator for Chars<S> {
    type Item = char;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(char) -> Flow,
    {
        for c in self.0.as_ref().chars() {
            emit(c)?;
        }
        Ok(())
    }
}

impl<'a> IntoEnumerator for &'a str {
    type Item = char;
    type IntoEnum = Chars<&'a str>;

    fn into_enumerator(self) -> Chars<&'a str> {
        Chars(self)
    }
}

impl IntoEnumerator for String {
    type Item = char;
    type IntoEnum = Chars<String>;

    fn into_enumerator(self) -> Chars<String> {
        Chars(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Enumerator;
    use crate::source::from;

    #[test]
    fn test_chars_not_bytes() {
        assert_eq!(from("añ").to_vec().unwrap(), vec!['a', 'ñ']);
    }

    #[test]
    fn test_owned_string() {
        let digits = from(String::from("2718")).map(|c| c.to_digit(10).unwrap_or(0));
        assert_eq!(digits.to_vec().unwrap(), vec![2, 7, 1, 8]);
    }
}
