use super::op::codepoints;
use super::{Error, Op, Sequence};

impl Sequence {
    /// Runs this sequence against the base string `s` and returns the edited
    /// string, whose codepoint length is [`target_len`](Sequence::target_len).
    ///
    /// Fails with [`Error::IncompatibleLengths`] unless `s` is exactly
    /// [`base_len`](Sequence::base_len) codepoints long.
    pub fn apply(&self, s: &str) -> Result<String, Error> {
        if codepoints(s) != self.base_len() {
            return Err(Error::IncompatibleLengths);
        }

        let mut chars = s.chars();
        let mut result = String::with_capacity(s.len());

        for op in self.ops() {
            match op {
                Op::Retain(n) => result.extend(chars.by_ref().take(*n as usize)),
                Op::Delete(n) => chars.by_ref().take(*n as usize).for_each(drop),
                Op::Insert(insert) => result.push_str(insert),
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, Sequence};

    #[test]
    fn test_apply_empty() {
        assert_eq!(Sequence::new().apply(""), Ok("".to_owned()));
    }

    #[test]
    fn test_apply_mixed() {
        let seq = Sequence::new().retain(5).insert("abc").retain(2).delete(2);

        assert_eq!(seq.base_len(), 9);
        assert_eq!(seq.target_len(), 10);
        assert_eq!(seq.apply("abcdefghi"), Ok("abcdeabcfg".to_owned()));
    }

    #[test]
    fn test_apply_codepoints() {
        let seq = Sequence::new().retain(1).delete(2).insert("⚡");

        assert_eq!(seq.apply("héé"), Ok("h⚡".to_owned()));
    }

    #[test]
    fn test_apply_wrong_length() {
        let seq = Sequence::new().retain(3);

        assert_eq!(seq.apply("ab"), Err(Error::IncompatibleLengths));
        assert_eq!(seq.apply("abcd"), Err(Error::IncompatibleLengths));
    }

    #[test]
    fn test_apply_result_length() {
        let seq = Sequence::new().delete(3).insert("now");
        let result = seq.apply("old").unwrap();

        assert_eq!(result.chars().count() as u64, seq.target_len());
    }
}
