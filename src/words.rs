use crate::error::InputError;

/// One 32-bit chunk of the value the two solved operands must rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetWord(u32);

impl TargetWord {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TargetWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SplitOptions {
    pub is_hex: bool,
    pub big_endian: bool,
    pub strip_space: bool,
}

/// Turns the raw input into the ordered sequence of target words.
///
/// Hex mode parses a single literal and yields exactly one word; text
/// mode chunks the bytes into groups of 4, NUL-padding the tail, and
/// folds each chunk in the requested byte order.
pub fn split(input: &str, options: &SplitOptions) -> Result<Vec<TargetWord>, InputError> {
    if options.is_hex {
        return Ok(vec![parse_hex_word(input)?]);
    }

    let text = if options.strip_space {
        input.trim()
    } else {
        input
    };

    let mut words = Vec::with_capacity(text.len().div_ceil(4));
    for chunk in text.as_bytes().chunks(4) {
        let mut padded = [0u8; 4];
        padded[..chunk.len()].copy_from_slice(chunk);
        let word = if options.big_endian {
            u32::from_be_bytes(padded)
        } else {
            u32::from_le_bytes(padded)
        };
        words.push(TargetWord::new(word));
    }
    Ok(words)
}

/// Parses a hex literal (optional `0x` prefix). Values wider than 32
/// bits are reduced modulo 2^32: only the low 8 hex digits land in the
/// word, but every digit must still be valid hex.
fn parse_hex_word(raw: &str) -> Result<TargetWord, InputError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(InputError::BadHexValue {
            value: raw.to_string(),
            reason: "empty hex literal".to_string(),
        });
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(InputError::BadHexValue {
            value: raw.to_string(),
            reason: format!("non-hex digit `{bad}`"),
        });
    }
    let low = if digits.len() > 8 {
        &digits[digits.len() - 8..]
    } else {
        digits
    };
    let value = u32::from_str_radix(low, 16).map_err(|e| InputError::BadHexValue {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    Ok(TargetWord::new(value))
}
