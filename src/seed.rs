/*
seed.rs

Copyright 2025 Hervé Quatremain

This file is part of Find the Path.

Find the Path is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Find the Path is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Find the Path. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Turn arbitrary seed values into a deterministic non-negative integer.
//!
//! The same function doubles as a cheap string hash: [`crate::saver::game`] uses it to compute
//! the checksum of saved games. It is a corruption guard only, never a security boundary.

use log::debug;

/// Seed value before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedInput<'a> {
    /// No seed. The current time is used.
    #[default]
    Absent,

    /// Integer seed, used as-is (absolute value).
    Integer(i64),

    /// Free-form text, for example from the `seed` startup parameter.
    Text(&'a str),

    /// Any other kind of value. Always normalized to `1`.
    Other,
}

impl<'a> From<Option<&'a str>> for SeedInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        match value {
            Some(text) => SeedInput::Text(text),
            None => SeedInput::Absent,
        }
    }
}

impl From<i64> for SeedInput<'_> {
    fn from(value: i64) -> Self {
        SeedInput::Integer(value)
    }
}

/// Return the current wall-clock time in milliseconds.
pub fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().unsigned_abs()
}

/// Normalize the given seed value, using the current time when the value does not carry a seed.
pub fn derive_seed(input: SeedInput) -> u64 {
    derive_seed_at(input, now_millis())
}

/// Normalize the given seed value.
///
/// `now_ms` is the time, in milliseconds, used when `input` is absent or is an empty text.
pub fn derive_seed_at(input: SeedInput, now_ms: u64) -> u64 {
    let seed: u64 = match input {
        SeedInput::Absent => now_ms,
        SeedInput::Integer(v) => v.unsigned_abs(),
        SeedInput::Text("") => now_ms,
        // Integer text beyond the i64 range is hashed like any other text
        SeedInput::Text(text) => match text.trim().parse::<i64>() {
            Ok(v) => v.unsigned_abs(),
            Err(_) => positional_checksum(text),
        },
        SeedInput::Other => 1,
    };
    debug!("Seed {input:?} -> {seed}");
    seed
}

/// Sum of `(index + 1) * code_unit` over the UTF-16 code units of the text.
pub fn positional_checksum(text: &str) -> u64 {
    text.encode_utf16()
        .zip(1u64..)
        .fold(0u64, |sum, (unit, position)| {
            sum.wrapping_add(position.wrapping_mul(u64::from(unit)))
        })
}

/// Checksum of a serialized text.
pub fn checksum(text: &str) -> u64 {
    derive_seed(SeedInput::Text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000_123;

    #[test]
    fn absent_and_empty_use_the_clock() {
        assert_eq!(derive_seed_at(SeedInput::Absent, NOW), NOW);
        assert_eq!(derive_seed_at(SeedInput::Text(""), NOW), NOW);
        assert_eq!(derive_seed_at(SeedInput::from(None), NOW), NOW);
    }

    #[test]
    fn integers_are_kept() {
        assert_eq!(derive_seed_at(SeedInput::Integer(42), NOW), 42);
        assert_eq!(derive_seed_at(SeedInput::Integer(-42), NOW), 42);
        assert_eq!(derive_seed_at(SeedInput::Integer(i64::MIN), NOW), 1 << 63);
    }

    #[test]
    fn numeric_text_is_parsed() {
        assert_eq!(derive_seed_at(SeedInput::Text("42"), NOW), 42);
        assert_eq!(derive_seed_at(SeedInput::Text("-17"), NOW), 17);
        assert_eq!(derive_seed_at(SeedInput::Text(" 8 "), NOW), 8);
    }

    #[test]
    fn other_text_is_hashed() {
        // 1 * 'a' + 2 * 'b' + 3 * 'c'
        assert_eq!(derive_seed_at(SeedInput::Text("abc"), NOW), 97 + 2 * 98 + 3 * 99);
        // Partially numeric text is not an integer
        assert_eq!(
            derive_seed_at(SeedInput::Text("4a"), NOW),
            u64::from(b'4') + 2 * u64::from(b'a')
        );
    }

    #[test]
    fn oversized_integer_text_is_hashed() {
        let text = "1234567890123456789012345";
        assert_eq!(derive_seed_at(SeedInput::Text(text), NOW), positional_checksum(text));
        assert_eq!(
            derive_seed_at(SeedInput::Text("9223372036854775807"), NOW),
            i64::MAX.unsigned_abs()
        );
    }

    #[test]
    fn hash_uses_utf16_code_units() {
        // U+00E9 is one code unit, U+1F600 is a surrogate pair
        assert_eq!(positional_checksum("é"), 0xe9);
        assert_eq!(positional_checksum("😀"), 0xd83d + 2 * 0xde00);
    }

    #[test]
    fn other_values_normalize_to_one() {
        assert_eq!(derive_seed_at(SeedInput::Other, NOW), 1);
    }

    #[test]
    fn checksum_is_stable() {
        let text = r#"{"attempt":1}"#;
        assert_eq!(checksum(text), checksum(text));
        assert_eq!(checksum(text), positional_checksum(text));
    }
}
