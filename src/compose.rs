use std::mem::take;

use super::op::split_pair;
use super::{Error, Op, Sequence};

impl Sequence {
    /// Combines this sequence with one that edits its output, returning a
    /// single sequence with the same effect as applying both in order:
    /// `a.compose(&b)?.apply(s)` equals `b.apply(&a.apply(s)?)` for every
    /// valid `s`.
    ///
    /// Fails with [`Error::IncompatibleLengths`] unless `other` consumes
    /// exactly the string this sequence produces
    /// (`self.target_len() == other.base_len()`).
    pub fn compose(&self, other: &Sequence) -> Result<Sequence, Error> {
        if self.target_len() != other.base_len() {
            return Err(Error::IncompatibleLengths);
        }

        let mut lhs = self.clone().into_iter();
        let mut rhs = other.clone().into_iter();
        let mut result = Sequence::new();

        loop {
            // A delete on the left acts on the base string before the right
            // side ever sees it.
            if let Some(op @ Op::Delete(_)) = lhs.next_mut() {
                result.push(take(op));
                continue;
            }

            // An insert on the right lands after the left side has run.
            if let Some(op @ Op::Insert(_)) = rhs.next_mut() {
                result.push(take(op));
                continue;
            }

            match (lhs.next_mut(), rhs.next_mut()) {
                (None, None) => break,
                (Some(op1), Some(op2)) => match split_pair(op1, op2) {
                    (Op::Retain(n), Op::Retain(_)) => result.push(Op::Retain(n)),
                    (Op::Retain(n), Op::Delete(_)) => result.push(Op::Delete(n)),
                    (Op::Insert(insert), Op::Retain(_)) => result.push(Op::Insert(insert)),
                    (Op::Insert(_), Op::Delete(_)) => {}
                    _ => unreachable!("delete and insert heads drained above"),
                },
                _ => return Err(Error::IncompatibleLengths),
            }
        }

        Ok(result)
    }
}
