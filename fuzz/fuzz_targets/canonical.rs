#![no_main]

use libfuzzer_sys::fuzz_target;
use weft::{Op, Sequence};

fuzz_target!(|ops: Vec<Op>| {
    let seq: Sequence = ops.into_iter().collect();

    let mut base_len = 0u64;
    let mut target_len = 0u64;

    for op in seq.ops() {
        assert!(!op.is_empty());

        match op {
            Op::Retain(n) => {
                base_len = base_len.saturating_add(*n);
                target_len = target_len.saturating_add(*n);
            }
            Op::Delete(n) => base_len = base_len.saturating_add(*n),
            Op::Insert(_) => target_len = target_len.saturating_add(op.len()),
        }
    }

    assert_eq!(seq.base_len(), base_len);
    assert_eq!(seq.target_len(), target_len);

    for pair in seq.ops().windows(2) {
        assert!(!matches!(
            (&pair[0], &pair[1]),
            (Op::Retain(_), Op::Retain(_))
                | (Op::Delete(_), Op::Delete(_))
                | (Op::Insert(_), Op::Insert(_))
                | (Op::Delete(_), Op::Insert(_))
        ));
    }

    for triple in seq.ops().windows(3) {
        assert!(!matches!(
            (&triple[0], &triple[1], &triple[2]),
            (Op::Insert(_), Op::Delete(_), Op::Insert(_))
        ));
    }
});
