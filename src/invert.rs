use super::op::codepoints;
use super::{Error, Op, Sequence};

impl Sequence {
    /// Returns the sequence that undoes this one: applying the result to the
    /// output of `self.apply(s)` yields `s` again. Retains stay retains,
    /// inserts become deletes, and deletes become inserts of the codepoints
    /// they removed from `s`.
    ///
    /// Fails with [`Error::IncompatibleLengths`] unless `s` is exactly
    /// [`base_len`](Sequence::base_len) codepoints long.
    pub fn invert(&self, s: &str) -> Result<Sequence, Error> {
        if codepoints(s) != self.base_len() {
            return Err(Error::IncompatibleLengths);
        }

        let mut chars = s.chars();
        let mut inverse = Sequence::new();

        for op in self.ops() {
            match op {
                Op::Retain(n) => {
                    inverse.push(Op::Retain(*n));
                    chars.by_ref().take(*n as usize).for_each(drop);
                }
                Op::Insert(insert) => {
                    inverse.push(Op::Delete(codepoints(insert)));
                }
                Op::Delete(n) => {
                    inverse.push(Op::Insert(chars.by_ref().take(*n as usize).collect()));
                }
            }
        }

        Ok(inverse)
    }
}
