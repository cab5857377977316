//! The input the `roster` binary drives the trees with: who accepted an offer in the first week,
//! who newly accepted in the second week, and who declined.
//!
//! The text format is three lines of whitespace-separated employee ids:
//!
//! ```text
//! 30 20 40 10
//! 25 35 50
//! 20 35
//! ```
//!
//! Any line may be blank. Each line is a set, so repeated ids on one line count once. The order the
//! ids first appear in is the order they're inserted in.

use std::collections::{BTreeSet, HashSet};
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Error;

/// The three sets of employee ids read from the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    /// Accepted in the first week.
    pub accepted: Vec<i64>,
    /// Newly accepted in the second week.
    pub newly_accepted: Vec<i64>,
    /// Declined in the second week.
    pub declined: Vec<i64>,
}

impl Roster {
    /// Parses the three-line roster format.
    ///
    /// # Errors
    ///
    /// [`Error::MissingLine`] if there are fewer than three lines and [`Error::InvalidKey`] if an
    /// id isn't an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::roster::Roster;
    ///
    /// let roster = Roster::parse("3 1 3\n2\n\n").unwrap();
    ///
    /// assert_eq!(roster.accepted, vec![3, 1]);
    /// assert_eq!(roster.newly_accepted, vec![2]);
    /// assert!(roster.declined.is_empty());
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut lines = input.lines();
        let mut next_line = |line| {
            lines
                .next()
                .ok_or(Error::MissingLine { line })
                .and_then(|text| parse_ids(line, text))
        };

        Ok(Self {
            accepted: next_line(1)?,
            newly_accepted: next_line(2)?,
            declined: next_line(3)?,
        })
    }

    /// Everyone who accepted in either week and didn't decline, in ascending order.
    pub fn finalists(&self) -> Vec<i64> {
        let declined: HashSet<_> = self.declined.iter().collect();
        self.accepted
            .iter()
            .chain(&self.newly_accepted)
            .filter(|id| !declined.contains(id))
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Picks up to `amount` distinct finalists uniformly at random. If there aren't that many
    /// finalists, all of them are returned.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, amount: usize) -> Vec<i64> {
        self.finalists()
            .choose_multiple(rng, amount)
            .copied()
            .collect()
    }
}

impl FromStr for Roster {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses one line of ids, dropping repeats but keeping the order ids first appear in.
fn parse_ids(line: usize, text: &str) -> Result<Vec<i64>, Error> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for token in text.split_whitespace() {
        let id = token.parse::<i64>().map_err(|source| Error::InvalidKey {
            line,
            token: token.to_owned(),
            source,
        })?;
        if seen.insert(id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
