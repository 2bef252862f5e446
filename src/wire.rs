use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Op, Sequence};

/// One element of the wire form. Positive integers retain, negative integers
/// delete and strings insert.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireOp {
    Span(i64),
    Text(String),
}

impl Serialize for Sequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.ops().len()))?;

        for op in self.ops() {
            match op {
                Op::Retain(n) => seq.serialize_element(n)?,
                Op::Delete(n) => seq.serialize_element(&-(*n as i64))?,
                Op::Insert(insert) => seq.serialize_element(insert)?,
            }
        }

        seq.end()
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D>(deserializer: D) -> Result<Sequence, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WireVisitor;

        impl<'de> Visitor<'de> for WireVisitor {
            type Value = Sequence;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a flat array of integers and strings")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Sequence, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut result = Sequence::new();

                // Feeding every element through the builder re-establishes
                // canonical form no matter how the producer laid the array
                // out; zero spans fall through as empty deletes.
                while let Some(op) = seq.next_element()? {
                    match op {
                        WireOp::Span(n) if n > 0 => result.push(Op::Retain(n as u64)),
                        WireOp::Span(n) => result.push(Op::Delete(n.unsigned_abs())),
                        WireOp::Text(insert) => result.push(Op::Insert(insert)),
                    }
                }

                Ok(result)
            }
        }

        deserializer.deserialize_seq(WireVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{Op, Sequence};

    #[test]
    fn test_serialize() {
        let seq = Sequence::new().retain(5).insert("abc").delete(2);

        assert_eq!(serde_json::to_string(&seq).unwrap(), r#"[5,"abc",-2]"#);
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serde_json::to_string(&Sequence::new()).unwrap(), "[]");
    }

    #[test]
    fn test_round_trip() {
        let seq = Sequence::new()
            .retain(3)
            .insert("héllo⚡")
            .delete(4)
            .retain(1);

        let json = serde_json::to_string(&seq).unwrap();
        let back: Sequence = serde_json::from_str(&json).unwrap();

        assert_eq!(back, seq);
    }

    #[test]
    fn test_deserialize_recanonicalizes() {
        let seq: Sequence = serde_json::from_str(r#"[1,2,"ab","cd",-1,-1]"#).unwrap();

        assert_eq!(
            seq.ops(),
            [Op::Retain(3), Op::Insert("abcd".to_owned()), Op::Delete(2)]
        );
    }

    #[test]
    fn test_deserialize_reorders_insert_after_delete() {
        let seq: Sequence = serde_json::from_str(r#"[-2,"x"]"#).unwrap();

        assert_eq!(seq.ops(), [Op::Insert("x".to_owned()), Op::Delete(2)]);
    }

    #[test]
    fn test_deserialize_drops_zero() {
        let seq: Sequence = serde_json::from_str(r#"[0,1,"",0,-2]"#).unwrap();

        assert_eq!(seq.ops(), [Op::Retain(1), Op::Delete(2)]);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        assert!(serde_json::from_str::<Sequence>(r#"[true]"#).is_err());
        assert!(serde_json::from_str::<Sequence>(r#"[1.5]"#).is_err());
        assert!(serde_json::from_str::<Sequence>(r#"[[1]]"#).is_err());
        assert!(serde_json::from_str::<Sequence>(r#"[{"retain":1}]"#).is_err());
        assert!(serde_json::from_str::<Sequence>(r#"[18446744073709551615]"#).is_err());
        assert!(serde_json::from_str::<Sequence>(r#"{"ops":[]}"#).is_err());
    }
}
