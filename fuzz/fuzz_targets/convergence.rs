#![no_main]

use libfuzzer_sys::fuzz_target;
use weft::Sequence;

/// Folds raw fuzz material into a sequence that consumes exactly `base_len`
/// codepoints, so every generated pair is a valid transform input.
fn edit_for(base_len: u64, steps: &[(u8, u8, String)]) -> Sequence {
    let mut seq = Sequence::new();
    let mut remaining = base_len;

    for (kind, span, text) in steps {
        let span = u64::from(*span).min(remaining);
        match kind % 3 {
            0 => {
                seq = seq.retain(span);
                remaining -= span;
            }
            1 => {
                seq = seq.delete(span);
                remaining -= span;
            }
            _ => seq = seq.insert(text.as_str()),
        }
    }

    seq.retain(remaining)
}

fuzz_target!(|data: (String, Vec<(u8, u8, String)>, Vec<(u8, u8, String)>)| {
    let (base, alice_steps, bob_steps) = data;
    let len = base.chars().count() as u64;

    let alice = edit_for(len, &alice_steps);
    let bob = edit_for(len, &bob_steps);

    let (alice_prime, bob_prime) = alice.transform(&bob).unwrap();

    let ab = alice.compose(&bob_prime).unwrap();
    let ba = bob.compose(&alice_prime).unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab.apply(&base).unwrap(), ba.apply(&base).unwrap());

    let edited = alice.apply(&base).unwrap();
    assert_eq!(edited.chars().count() as u64, alice.target_len());

    let inverse = alice.invert(&base).unwrap();
    assert_eq!(inverse.apply(&edited).unwrap(), base);
});
