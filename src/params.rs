/*
params.rs

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

//! Game parameters: grid dimensions, number of hints, and seed.
//!
//! Invalid values never raise errors: they are silently replaced by the defaults.

use log::debug;
use std::ops::RangeInclusive;

use crate::config::{DEFAULT_COLUMNS, DEFAULT_HINTS, DEFAULT_ROWS, MAX_COLUMNS, MAX_ROWS};
use crate::seed::SeedInput;

/// Accepted names for each parameter in a query string, in priority order.
const COLUMNS_KEYS: &[&str] = &["columns", "col", "c", "width"];
const ROWS_KEYS: &[&str] = &["rows", "row", "r", "height"];
const HINTS_KEYS: &[&str] = &["hints", "hint", "h"];
const SEED_KEYS: &[&str] = &["seed", "s"];

const COLUMNS_RANGE: RangeInclusive<usize> = 1..=MAX_COLUMNS;
const ROWS_RANGE: RangeInclusive<usize> = 1..=MAX_ROWS;
const HINTS_RANGE: RangeInclusive<usize> = 0..=usize::MAX;

/// Parameters of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameParams {
    /// Number of columns, between 1 and [`MAX_COLUMNS`].
    pub columns: usize,

    /// Number of rows, between 1 and [`MAX_ROWS`].
    pub rows: usize,

    /// Number of hints available at the beginning of each game.
    pub hints: usize,

    /// Seed text. When None, the seed is derived from the current time.
    pub seed: Option<String>,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            hints: DEFAULT_HINTS,
            seed: None,
        }
    }
}

impl GameParams {
    /// Create a [`GameParams`] object from optional values. Missing or out of range values are
    /// replaced by the defaults.
    pub fn new(
        columns: Option<i64>,
        rows: Option<i64>,
        hints: Option<i64>,
        seed: Option<String>,
    ) -> Self {
        Self {
            columns: in_range_or(columns, COLUMNS_RANGE, DEFAULT_COLUMNS, "columns"),
            rows: in_range_or(rows, ROWS_RANGE, DEFAULT_ROWS, "rows"),
            hints: in_range_or(hints, HINTS_RANGE, DEFAULT_HINTS, "hints"),
            seed,
        }
    }

    /// Parse a query string such as `?columns=8&rows=12&seed=hello`.
    ///
    /// Keys and values are form-decoded (`+` and `%20` are both a space). Unknown keys are
    /// ignored. For numbers, the first alias with a valid value wins. For the seed, the first
    /// alias present wins.
    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(String, String)> =
            form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
                .into_owned()
                .collect();

        let int = |keys: &[&str], range: RangeInclusive<usize>| -> Option<i64> {
            keys.iter()
                .filter_map(|k| lookup(&pairs, k))
                .filter_map(|v| v.trim().parse::<i64>().ok())
                .find(|v| usize::try_from(*v).is_ok_and(|v| range.contains(&v)))
        };

        Self::new(
            int(COLUMNS_KEYS, COLUMNS_RANGE),
            int(ROWS_KEYS, ROWS_RANGE),
            int(HINTS_KEYS, HINTS_RANGE),
            SEED_KEYS
                .iter()
                .find_map(|k| lookup(&pairs, k))
                .map(str::to_owned),
        )
    }

    /// Return the seed value to normalize.
    pub fn seed_input(&self) -> SeedInput<'_> {
        SeedInput::from(self.seed.as_deref())
    }
}

/// Return the value of the first occurrence of `key` in the query pairs.
fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.as_str())
}

fn in_range_or(
    value: Option<i64>,
    range: RangeInclusive<usize>,
    default: usize,
    name: &str,
) -> usize {
    let Some(v) = value else {
        return default;
    };
    match usize::try_from(v) {
        Ok(n) if range.contains(&n) => n,
        _ => {
            debug!("Invalid {name} value {v}: using the default {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = GameParams::default();
        assert_eq!((p.columns, p.rows, p.hints), (5, 10, 2));
        assert_eq!(p.seed, None);
        assert_eq!(GameParams::from_query(""), p);
    }

    #[test]
    fn query_aliases() {
        let p = GameParams::from_query("?width=8&r=12&hint=4&s=hello+world");
        assert_eq!(p.columns, 8);
        assert_eq!(p.rows, 12);
        assert_eq!(p.hints, 4);
        assert_eq!(p.seed.as_deref(), Some("hello world"));
    }

    #[test]
    fn alias_priority() {
        let p = GameParams::from_query("c=3&columns=7");
        assert_eq!(p.columns, 7);
        let p = GameParams::from_query("s=second&seed=first");
        assert_eq!(p.seed.as_deref(), Some("first"));
    }

    #[test]
    fn invalid_alias_is_skipped() {
        let p = GameParams::from_query("columns=abc&c=7&rows=0&height=12&hint=-1&h=0");
        assert_eq!((p.columns, p.rows, p.hints), (7, 12, 0));
    }

    #[test]
    fn values_are_form_decoded() {
        let plus = GameParams::from_query("seed=find+the+path");
        let percent = GameParams::from_query("seed=find%20the%20path");
        assert_eq!(plus.seed.as_deref(), Some("find the path"));
        assert_eq!(plus, percent);
        assert_eq!(
            GameParams::from_query("s=caf%C3%A9%26co").seed.as_deref(),
            Some("café&co")
        );
    }

    #[test]
    fn dimensions_are_bounded() {
        let p = GameParams::new(Some(1 << 40), Some(1 << 40), None, None);
        assert_eq!((p.columns, p.rows), (DEFAULT_COLUMNS, DEFAULT_ROWS));
        let p = GameParams::new(Some(MAX_COLUMNS as i64), Some(MAX_ROWS as i64 + 1), None, None);
        assert_eq!((p.columns, p.rows), (MAX_COLUMNS, DEFAULT_ROWS));
        let p = GameParams::from_query("columns=1000000&width=9");
        assert_eq!(p.columns, 9);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let p = GameParams::from_query("columns=0&rows=-3&hints=many");
        assert_eq!((p.columns, p.rows, p.hints), (5, 10, 2));
        let p = GameParams::new(Some(4), None, Some(-1), None);
        assert_eq!((p.columns, p.rows, p.hints), (4, 10, 2));
    }

    #[test]
    fn zero_hints_is_allowed() {
        assert_eq!(GameParams::from_query("hints=0").hints, 0);
    }

    #[test]
    fn seed_input() {
        let p = GameParams::from_query("seed=42");
        assert_eq!(p.seed_input(), SeedInput::Text("42"));
        assert_eq!(GameParams::default().seed_input(), SeedInput::Absent);
    }
}
