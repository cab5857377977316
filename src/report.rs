//! Drives an unbalanced tree and an AVL tree through the same [`Roster`] and records what they
//! looked like along the way.
//!
//! There are three phases. The first week's acceptances are loaded, the second week's new
//! acceptances are added, then the declines are removed. After each phase the preorder of both
//! trees is snapshotted. At the end the chosen employees are located in the AVL tree.

use std::fmt;

use log::{debug, info};

use crate::avl;
use crate::error::Error;
use crate::locate::Coordinate;
use crate::roster::Roster;
use crate::unbalanced;

/// The preorder of both trees at the end of a phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Preorder of the unbalanced tree.
    pub bst: Vec<i64>,
    /// Preorder of the AVL tree.
    pub avl: Vec<i64>,
}

impl Snapshot {
    fn take(bst: &unbalanced::Tree<i64>, avl: &avl::Tree<i64>) -> Self {
        Self {
            bst: bst.preorder().copied().collect(),
            avl: avl.preorder().copied().collect(),
        }
    }
}

/// Everything the `roster` binary writes out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// After loading the first week's acceptances.
    pub week_one: Snapshot,
    /// After adding the second week's new acceptances.
    pub accepted: Snapshot,
    /// After removing the declines.
    pub finalized: Snapshot,
    /// Where each chosen employee ended up in the final AVL tree.
    pub placements: Vec<(i64, Result<Coordinate, Error>)>,
}

impl Report {
    /// Runs both trees through the three phases of `roster` and locates each of `selected` in the
    /// final AVL tree.
    ///
    /// Ids in both weeks' acceptances are inserted twice, like any other repeated key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_avl::report::Report;
    /// use bst_avl::roster::Roster;
    ///
    /// let roster = Roster::parse("1 2 3\n4\n1\n").unwrap();
    /// let report = Report::build(&roster, &[4]);
    ///
    /// assert_eq!(report.week_one.bst, vec![1, 2, 3]);
    /// assert_eq!(report.week_one.avl, vec![2, 1, 3]);
    /// assert_eq!(report.finalized.avl, vec![3, 2, 4]);
    /// ```
    pub fn build(roster: &Roster, selected: &[i64]) -> Self {
        let mut bst = unbalanced::Tree::new();
        let mut avl = avl::Tree::new();

        info!("loading {} first week acceptances", roster.accepted.len());
        for &id in &roster.accepted {
            debug!("inserting {}", id);
            bst.insert(id);
            avl.insert(id);
        }
        let week_one = Snapshot::take(&bst, &avl);

        info!("adding {} new acceptances", roster.newly_accepted.len());
        for &id in &roster.newly_accepted {
            debug!("inserting {}", id);
            bst.insert(id);
            avl.insert(id);
        }
        let accepted = Snapshot::take(&bst, &avl);

        info!("removing {} declines", roster.declined.len());
        for &id in &roster.declined {
            let (in_bst, in_avl) = (bst.delete(&id), avl.delete(&id));
            debug!("deleting {} (bst: {}, avl: {})", id, in_bst, in_avl);
        }
        let finalized = Snapshot::take(&bst, &avl);

        info!(
            "final trees hold {} nodes, bst height {}, avl height {}",
            avl.len(),
            bst.height(),
            avl.height()
        );

        let placements = selected
            .iter()
            .map(|&id| (id, avl.locate(&id)))
            .collect();

        Self {
            week_one,
            accepted,
            finalized,
            placements,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phases = [
            ("after week 1", &self.week_one),
            ("after new acceptances in week 2", &self.accepted),
            ("after removing declines", &self.finalized),
        ];
        for (phase, snapshot) in phases.iter() {
            writeln!(f, "Pre-order traversal of BST and AVL tree {}:", phase)?;
            writeln!(f, "BST: {:?}", snapshot.bst)?;
            writeln!(f, "AVL: {:?}", snapshot.avl)?;
            writeln!(f)?;
        }

        for (id, placement) in &self.placements {
            match placement {
                Ok(Coordinate { level, position }) => writeln!(
                    f,
                    "Employee #{} is present in level {} and its position is {} from the left.",
                    id, level, position
                )?,
                Err(_) => writeln!(f, "Employee #{} is not present in the tree.", id)?,
            }
        }
        Ok(())
    }
}
