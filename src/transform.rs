use std::mem::take;

use super::op::split_pair;
use super::{Error, Op, Sequence};

impl Sequence {
    /// Rewrites this sequence and `other`, two concurrent edits of the same
    /// base string, into a pair `(a, b)` that converges: `self.compose(&b)`
    /// and `other.compose(&a)` are the same sequence, so either replica can
    /// apply the other's rewritten edit and reach the same string.
    ///
    /// When both sides insert at the same position, this sequence's insert
    /// lands first. The rule is deterministic but not symmetric:
    /// `a.transform(&b)` and `b.transform(&a)` resolve such ties in opposite
    /// ways, so peers must agree out-of-band (typically by client id) on
    /// which operand plays which role.
    ///
    /// Fails with [`Error::IncompatibleLengths`] unless both sequences
    /// expect the same base length.
    pub fn transform(&self, other: &Sequence) -> Result<(Sequence, Sequence), Error> {
        if self.base_len() != other.base_len() {
            return Err(Error::IncompatibleLengths);
        }

        let mut lhs = self.clone().into_iter();
        let mut rhs = other.clone().into_iter();
        let mut a_prime = Sequence::new();
        let mut b_prime = Sequence::new();

        loop {
            // Inserts consume no input, so they can always go first; ours
            // wins a tie.
            if let Some(op @ Op::Insert(_)) = lhs.next_mut() {
                let insert = take(op);
                b_prime.push(Op::Retain(insert.len()));
                a_prime.push(insert);
                continue;
            }

            if let Some(op @ Op::Insert(_)) = rhs.next_mut() {
                let insert = take(op);
                a_prime.push(Op::Retain(insert.len()));
                b_prime.push(insert);
                continue;
            }

            match (lhs.next_mut(), rhs.next_mut()) {
                (None, None) => break,
                (Some(op1), Some(op2)) => match split_pair(op1, op2) {
                    (Op::Retain(n), Op::Retain(_)) => {
                        a_prime.push(Op::Retain(n));
                        b_prime.push(Op::Retain(n));
                    }
                    (Op::Retain(n), Op::Delete(_)) => {
                        b_prime.push(Op::Delete(n));
                    }
                    (Op::Delete(n), Op::Retain(_)) => {
                        a_prime.push(Op::Delete(n));
                    }
                    (Op::Delete(_), Op::Delete(_)) => {}
                    _ => unreachable!("insert heads drained above"),
                },
                _ => return Err(Error::IncompatibleLengths),
            }
        }

        Ok((a_prime, b_prime))
    }
}
