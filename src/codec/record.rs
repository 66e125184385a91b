//! `;`-separated field scanning shared by both text formats

use std::str::{FromStr, Split};

use crate::competitor::Competitor;
use crate::BracketError;

/// Field separator for every record
pub const SEPARATOR: char = ';';

/// Cursor over one line's fields
#[derive(Debug)]
pub(crate) struct Fields<'a> {
    inner: Split<'a, char>,
    line: usize,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(text: &'a str, line: usize) -> Self {
        Self {
            inner: text.split(SEPARATOR),
            line,
        }
    }

    pub(crate) fn malformed(&self, reason: impl Into<String>) -> BracketError {
        BracketError::MalformedRecord {
            line: self.line,
            reason: reason.into(),
        }
    }

    /// Next field verbatim (names keep their spacing)
    pub(crate) fn text(&mut self, what: &str) -> Result<&'a str, BracketError> {
        self.inner
            .next()
            .ok_or_else(|| self.malformed(format!("missing {what}")))
    }

    /// Next field as a number, surrounding whitespace ignored
    pub(crate) fn number<T: FromStr>(&mut self, what: &str) -> Result<T, BracketError> {
        let raw = self.text(what)?.trim();
        if raw.is_empty() {
            return Err(self.malformed(format!("missing {what}")));
        }
        raw.parse()
            .map_err(|_| self.malformed(format!("{what} '{raw}' is not a number")))
    }

    /// Accept end of line, or a single trailing separator
    pub(crate) fn finish(mut self) -> Result<(), BracketError> {
        match (self.inner.next(), self.inner.next()) {
            (None, _) => Ok(()),
            (Some(rest), None) if rest.trim().is_empty() => Ok(()),
            (Some(rest), _) => Err(self.malformed(format!("unexpected trailing field '{rest}'"))),
        }
    }
}

/// Competitor fields as read, before the seed is range-checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawCompetitor {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub seed: i64,
}

impl RawCompetitor {
    /// Read `name;wins;losses;ties;seed`
    pub(crate) fn read(fields: &mut Fields<'_>) -> Result<Self, BracketError> {
        Ok(Self {
            name: fields.text("name")?.to_string(),
            wins: fields.number("wins")?,
            losses: fields.number("losses")?,
            ties: fields.number("ties")?,
            seed: fields.number("seed")?,
        })
    }

    /// Convert once the seed is known to be in range
    pub(crate) fn into_competitor(self) -> Competitor {
        Competitor::new(self.name, self.wins, self.losses, self.ties, self.seed as u32)
    }
}

/// `name;wins;losses;ties;seed`, or `;0;0;0;0` for an empty side
pub(crate) fn encode_side(side: Option<&Competitor>) -> String {
    match side {
        Some(c) => format!(
            "{name}{sep}{w}{sep}{l}{sep}{t}{sep}{seed}",
            name = c.name(),
            w = c.wins(),
            l = c.losses(),
            t = c.ties(),
            seed = c.seed(),
            sep = SEPARATOR
        ),
        None => format!("{sep}0{sep}0{sep}0{sep}0", sep = SEPARATOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_with_trailing_separator() {
        let mut fields = Fields::new("Jesuit;14;1;0;1;", 1);
        let raw = RawCompetitor::read(&mut fields).unwrap();
        fields.finish().unwrap();
        assert_eq!(raw.name, "Jesuit");
        assert_eq!((raw.wins, raw.losses, raw.ties, raw.seed), (14, 1, 0, 1));
    }

    #[test]
    fn test_missing_seed_is_malformed() {
        let mut fields = Fields::new("Jesuit;14;1;0", 3);
        let err = RawCompetitor::read(&mut fields).unwrap_err();
        assert!(matches!(err, BracketError::MalformedRecord { line: 3, ref reason } if reason == "missing seed"));
    }

    #[test]
    fn test_non_numeric_field() {
        let mut fields = Fields::new("Jesuit;many;1;0;1", 2);
        let err = RawCompetitor::read(&mut fields).unwrap_err();
        assert!(matches!(err, BracketError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_negative_seed_reads() {
        let mut fields = Fields::new("Jesuit;1;1;0;-3", 1);
        assert_eq!(RawCompetitor::read(&mut fields).unwrap().seed, -3);
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        let mut fields = Fields::new("Jesuit;1;1;0;3;extra;", 1);
        RawCompetitor::read(&mut fields).unwrap();
        assert!(fields.finish().is_err());
    }

    #[test]
    fn test_encode_side() {
        let c = Competitor::new("Lake Oswego", 9, 4, 2, 6);
        assert_eq!(encode_side(Some(&c)), "Lake Oswego;9;4;2;6");
        assert_eq!(encode_side(None), ";0;0;0;0");
    }
}
