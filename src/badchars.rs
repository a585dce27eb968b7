use crate::error::InputError;
use std::collections::BTreeSet;

/// Byte values forbidden from appearing in any byte position of either
/// solved operand. Built once per run, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteExclusionSet {
    bytes: BTreeSet<u8>,
}

impl ByteExclusionSet {
    pub fn new(bytes: impl IntoIterator<Item = u8>) -> Self {
        Self {
            bytes: bytes.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            bytes: BTreeSet::new(),
        }
    }

    /// Default policy: everything below `'0'` plus `'?'`. Covers NUL,
    /// whitespace and the common shell/URL delimiters.
    pub fn default_policy() -> Self {
        let mut bytes: BTreeSet<u8> = (0x00..=0x2f).collect();
        bytes.insert(b'?');
        Self { bytes }
    }

    /// Parses a packed hex list (`"000a0d"` -> {0x00, 0x0a, 0x0d}).
    /// Odd length or a non-hex digit rejects the whole list.
    pub fn from_hex_list(list: &str) -> Result<Self, InputError> {
        let list = list.trim();
        let cleaned = list.strip_prefix("0x").unwrap_or(list);
        // Digits only, up front: anything else (including multi-byte
        // characters and the signs `from_str_radix` would accept) is
        // rejected before the list is sliced into pairs.
        if let Some(bad) = cleaned.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(InputError::BadCharList {
                list: list.to_string(),
                reason: format!("non-hex digit `{bad}`"),
            });
        }
        if cleaned.len() % 2 != 0 {
            return Err(InputError::BadCharList {
                list: list.to_string(),
                reason: "odd number of hex digits".to_string(),
            });
        }
        let mut bytes = BTreeSet::new();
        for i in (0..cleaned.len()).step_by(2) {
            let pair = &cleaned[i..i + 2];
            let value = u8::from_str_radix(pair, 16).map_err(|e| InputError::BadCharList {
                list: list.to_string(),
                reason: format!("bad hex pair `{pair}`: {e}"),
            })?;
            bytes.insert(value);
        }
        Ok(Self { bytes })
    }

    pub fn contains(&self, value: u8) -> bool {
        self.bytes.contains(&value)
    }

    /// Ascending iteration keeps the generated constraint order stable.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ByteExclusionSet;

    #[test]
    fn default_policy_matches_documented_range() {
        let set = ByteExclusionSet::default_policy();
        assert_eq!(set.len(), 0x30 + 1);
        for b in 0x00..=0x2fu8 {
            assert!(set.contains(b));
        }
        assert!(set.contains(b'?'));
        assert!(!set.contains(b'0'));
        assert!(!set.contains(b'A'));
    }

    #[test]
    fn hex_list_parses_pairs() {
        let set = ByteExclusionSet::from_hex_list("000a0d20").expect("valid list");
        assert_eq!(set.len(), 4);
        assert!(set.contains(0x00));
        assert!(set.contains(0x0a));
        assert!(set.contains(0x0d));
        assert!(set.contains(0x20));
        assert!(!set.contains(0x41));
    }

    #[test]
    fn hex_list_accepts_0x_prefix_and_dedups() {
        let set = ByteExclusionSet::from_hex_list("0x0a0a0a").expect("valid list");
        assert_eq!(set.len(), 1);
        assert!(set.contains(0x0a));
    }

    #[test]
    fn hex_list_rejects_odd_length() {
        assert!(ByteExclusionSet::from_hex_list("00a").is_err());
    }

    #[test]
    fn hex_list_rejects_non_hex() {
        assert!(ByteExclusionSet::from_hex_list("zz").is_err());
    }

    #[test]
    fn hex_list_rejects_multibyte_characters_without_panicking() {
        // "0é0" is 4 bytes, so it passes the parity check; a byte-index
        // slice would land mid-character. Must reject, not panic.
        assert!(ByteExclusionSet::from_hex_list("0é0").is_err());
        assert!(ByteExclusionSet::from_hex_list("éé").is_err());
        assert!(ByteExclusionSet::from_hex_list("0x0é0").is_err());
    }

    #[test]
    fn hex_list_rejects_signed_pairs() {
        // `from_str_radix` tolerates a leading sign; the list parser
        // must not, or "+1" would smuggle in 0x01.
        assert!(ByteExclusionSet::from_hex_list("+1+2").is_err());
        assert!(ByteExclusionSet::from_hex_list("-1").is_err());
    }

    #[test]
    fn empty_list_is_allowed() {
        let set = ByteExclusionSet::from_hex_list("").expect("empty list");
        assert!(set.is_empty());
    }
}
