// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, Days, Months, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use crate::models::Frequency;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY-MM` natural key for a calendar day.
pub fn month_of(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

/// Parse a decimal money string ("12.50") into integer minor units.
/// Amounts are always i64 cents; no floating point anywhere.
pub fn parse_cents(s: &str) -> Result<i64> {
    let s = s.trim();
    let (sign, s) = match s.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, s),
    };
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        anyhow::bail!("Invalid amount '{}'", s);
    }
    if frac.len() > 2 {
        anyhow::bail!("Invalid amount '{}': at most two decimal places", s);
    }
    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .with_context(|| format!("Invalid amount '{}'", s))?
    };
    let frac: i64 = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<2}", frac);
        padded
            .parse()
            .with_context(|| format!("Invalid amount '{}'", s))?
    };
    Ok(sign * (whole * 100 + frac))
}

pub fn fmt_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Add one period to `anchor` using calendar-aware arithmetic; month and
/// year steps clamp at month end (Jan 31 + 1 month = Feb 29/28).
pub fn next_occurrence(anchor: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Daily => anchor + Days::new(1),
        Frequency::Weekly => anchor + Days::new(7),
        Frequency::Monthly => anchor + Months::new(1),
        Frequency::Yearly => anchor + Months::new(12),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_parsing() {
        assert_eq!(parse_cents("12.50").unwrap(), 1250);
        assert_eq!(parse_cents("12.5").unwrap(), 1250);
        assert_eq!(parse_cents("12").unwrap(), 1200);
        assert_eq!(parse_cents("0.07").unwrap(), 7);
        assert_eq!(parse_cents("-3.15").unwrap(), -315);
        assert!(parse_cents("1.234").is_err());
        assert!(parse_cents("abc").is_err());
    }

    #[test]
    fn cents_formatting() {
        assert_eq!(fmt_cents(1250), "12.50");
        assert_eq!(fmt_cents(7), "0.07");
        assert_eq!(fmt_cents(-315), "-3.15");
    }

    #[test]
    fn month_end_overflow_clamps() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            next_occurrence(d, Frequency::Monthly),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        let d = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        assert_eq!(
            next_occurrence(d, Frequency::Monthly),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn leap_day_yearly_clamps() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            next_occurrence(d, Frequency::Yearly),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }
}
