//! Column letter codec
//!
//! Spreadsheet columns are named in bijective base-26: the digits are A–Z
//! (worth 1–26, there is no zero digit), so "A" is 1, "Z" is 26, "AA" is 27.
//! Both directions are total over their valid domains and pure.

use crate::error::{Error, Result};

/// Convert column letters to a 1-based column index ("A" = 1, "AB" = 28)
///
/// Input is case-insensitive. Fails with [`Error::InvalidFormat`] on an empty
/// string or any non-ASCII-letter character.
///
/// # Examples
/// ```
/// use gridbook_core::column;
///
/// assert_eq!(column::decode("A").unwrap(), 1);
/// assert_eq!(column::decode("ab").unwrap(), 28);
/// assert!(column::decode("A1").is_err());
/// ```
pub fn decode(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidFormat("empty column letters".into()));
    }

    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidFormat(format!(
                "invalid column letter '{}' in '{}'",
                c, letters
            )));
        }
        let rank = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        index = index
            .checked_mul(26)
            .and_then(|n| n.checked_add(rank))
            .ok_or_else(|| {
                Error::InvalidFormat(format!("column letters '{}' out of range", letters))
            })?;
    }

    Ok(index)
}

/// Convert a 1-based column index to letters (1 = "A", 28 = "AB")
///
/// Fails with [`Error::InvalidFormat`] for index 0, which has no
/// representation in a zeroless numeral system.
pub fn encode(index: u32) -> Result<String> {
    if index < 1 {
        return Err(Error::InvalidFormat(
            "column index must be >= 1".into(),
        ));
    }

    let mut letters = String::new();
    let mut n = index;
    while n > 0 {
        n -= 1;
        letters.insert(0, ((n % 26) as u8 + b'A') as char);
        n /= 26;
    }

    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode() {
        assert_eq!(decode("A").unwrap(), 1);
        assert_eq!(decode("B").unwrap(), 2);
        assert_eq!(decode("Z").unwrap(), 26);
        assert_eq!(decode("AA").unwrap(), 27);
        assert_eq!(decode("AB").unwrap(), 28);
        assert_eq!(decode("ZZ").unwrap(), 702);
        assert_eq!(decode("AAA").unwrap(), 703);
        assert_eq!(decode("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(decode("a").unwrap(), 1);
        assert_eq!(decode("aB").unwrap(), 28);
    }

    #[test]
    fn test_decode_errors() {
        assert!(decode("").is_err());
        assert!(decode("A1").is_err());
        assert!(decode("-A").is_err());
        assert!(decode("Ä").is_err());
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(1).unwrap(), "A");
        assert_eq!(encode(26).unwrap(), "Z");
        assert_eq!(encode(27).unwrap(), "AA");
        assert_eq!(encode(28).unwrap(), "AB");
        assert_eq!(encode(702).unwrap(), "ZZ");
        assert_eq!(encode(703).unwrap(), "AAA");
        assert_eq!(encode(16384).unwrap(), "XFD");
    }

    #[test]
    fn test_encode_rejects_zero() {
        assert!(encode(0).is_err());
    }

    #[test]
    fn test_roundtrip_indices() {
        for n in 1..=16384u32 {
            assert_eq!(decode(&encode(n).unwrap()).unwrap(), n);
        }
    }

    #[test]
    fn test_roundtrip_letters() {
        // Every uppercase sequence of length <= 3 survives a decode/encode trip
        let alphabet: Vec<char> = ('A'..='Z').collect();
        let mut sequences = Vec::new();
        for &a in &alphabet {
            sequences.push(a.to_string());
            for &b in &alphabet {
                sequences.push(format!("{}{}", a, b));
                for &c in &alphabet {
                    sequences.push(format!("{}{}{}", a, b, c));
                }
            }
        }
        for s in sequences {
            assert_eq!(encode(decode(&s).unwrap()).unwrap(), s);
        }
    }
}
