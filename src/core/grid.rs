//! Board history grid
//!
//! A `JudgementGrid` is the structured form of the puzzle's persisted
//! board: one row per submitted guess, each row exactly [`WORD_LENGTH`]
//! graded cells, with `None` standing in for rows not yet played.
//!
//! The grid is rebuilt from persisted state on every validation pass and
//! never mutated in place. Validators do not walk the rows themselves;
//! they consume the derived facts exposed by [`JudgementGrid::absent_letters`]
//! and [`JudgementGrid::facts`].

use super::WORD_LENGTH;
use super::judgement::{Cell, Judgement};
use rustc_hash::FxHashSet;

/// A (letter, position) constraint derived from a graded cell
///
/// Transient: extracted fresh inside each validation pass, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFact {
    /// ASCII uppercase letter
    pub letter: u8,
    /// Board column the judgement applies to (0-based)
    pub position: usize,
}

/// Ordered rows of graded cells, one per submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JudgementGrid {
    rows: Vec<Option<[Cell; WORD_LENGTH]>>,
}

impl JudgementGrid {
    /// Build a grid by zipping board letters and judgements index-for-index
    ///
    /// `board_rows` holds the typed letters one string per row; `evaluation_rows`
    /// holds the parallel verdicts, with `None` for rows not yet played. Rows
    /// are zipped positionally; matching shapes are the storage collaborator's
    /// contract and are not validated here.
    ///
    /// # Panics
    /// Panics if a graded row is narrower than [`WORD_LENGTH`].
    #[must_use]
    pub fn from_parts(board_rows: &[String], evaluation_rows: &[Option<Vec<Judgement>>]) -> Self {
        let rows = evaluation_rows
            .iter()
            .enumerate()
            .map(|(row_index, evaluation_row)| {
                evaluation_row.as_ref().map(|judgements| {
                    let cells: Vec<Cell> = board_rows[row_index]
                        .bytes()
                        .zip(judgements.iter().copied())
                        .map(|(letter, judgement)| Cell::new(letter, judgement))
                        .collect();

                    cells
                        .try_into()
                        .expect("storage contract: graded rows are five cells wide")
                })
            })
            .collect();

        Self { rows }
    }

    /// All rows, played or not
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Option<[Cell; WORD_LENGTH]>] {
        &self.rows
    }

    /// Number of rows that have been played and graded
    #[must_use]
    pub fn rows_known(&self) -> usize {
        self.rows.iter().filter(|row| row.is_some()).count()
    }

    /// True when no graded rows exist
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows_known() == 0
    }

    /// The set of letters judged [`Judgement::Absent`] anywhere on the board
    #[must_use]
    pub fn absent_letters(&self) -> FxHashSet<u8> {
        let mut letters = FxHashSet::default();
        for row in self.rows.iter().flatten() {
            for cell in row {
                if cell.judgement() == Judgement::Absent {
                    letters.insert(cell.letter());
                }
            }
        }
        letters
    }

    /// All (letter, position) facts carrying the given judgement
    ///
    /// Duplicate facts from repeated guesses collapse to one entry.
    #[must_use]
    pub fn facts(&self, judgement: Judgement) -> Vec<LetterFact> {
        let mut seen = FxHashSet::default();
        let mut facts = Vec::new();

        for row in self.rows.iter().flatten() {
            for (position, cell) in row.iter().enumerate() {
                if cell.judgement() != judgement {
                    continue;
                }

                let fact = LetterFact {
                    letter: cell.letter(),
                    position,
                };
                if seen.insert(fact) {
                    facts.push(fact);
                }
            }
        }

        facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_fixture() -> JudgementGrid {
        // Row 0: A absent, B present, C correct, D absent, E absent
        // Row 1: not yet played
        let board_rows = vec!["abcde".to_string(), String::new()];
        let evaluation_rows = vec![
            Some(vec![
                Judgement::Absent,
                Judgement::Present,
                Judgement::Correct,
                Judgement::Absent,
                Judgement::Absent,
            ]),
            None,
        ];
        JudgementGrid::from_parts(&board_rows, &evaluation_rows)
    }

    #[test]
    fn from_parts_zips_letters_with_judgements() {
        let grid = grid_fixture();
        let row = grid.rows()[0].unwrap();

        assert_eq!(row[0].letter(), b'A');
        assert_eq!(row[0].judgement(), Judgement::Absent);
        assert_eq!(row[2].letter(), b'C');
        assert_eq!(row[2].judgement(), Judgement::Correct);
    }

    #[test]
    fn from_parts_keeps_unplayed_rows_empty() {
        let grid = grid_fixture();

        assert_eq!(grid.rows().len(), 2);
        assert!(grid.rows()[1].is_none());
        assert_eq!(grid.rows_known(), 1);
    }

    #[test]
    fn empty_grid_has_no_facts() {
        let grid = JudgementGrid::default();

        assert!(grid.is_empty());
        assert!(grid.absent_letters().is_empty());
        assert!(grid.facts(Judgement::Correct).is_empty());
        assert!(grid.facts(Judgement::Present).is_empty());
    }

    #[test]
    fn all_null_rows_count_as_empty() {
        let board_rows = vec![String::new(), String::new()];
        let evaluation_rows = vec![None, None];
        let grid = JudgementGrid::from_parts(&board_rows, &evaluation_rows);

        assert!(grid.is_empty());
        assert_eq!(grid.rows().len(), 2);
    }

    #[test]
    fn absent_letters_collects_across_row() {
        let grid = grid_fixture();
        let absent = grid.absent_letters();

        assert_eq!(absent.len(), 3);
        assert!(absent.contains(&b'A'));
        assert!(absent.contains(&b'D'));
        assert!(absent.contains(&b'E'));
        assert!(!absent.contains(&b'B'));
        assert!(!absent.contains(&b'C'));
    }

    #[test]
    fn facts_filters_by_judgement() {
        let grid = grid_fixture();

        let correct = grid.facts(Judgement::Correct);
        assert_eq!(
            correct,
            vec![LetterFact {
                letter: b'C',
                position: 2
            }]
        );

        let present = grid.facts(Judgement::Present);
        assert_eq!(
            present,
            vec![LetterFact {
                letter: b'B',
                position: 1
            }]
        );
    }

    #[test]
    fn facts_dedupe_repeated_judgements() {
        // Same letter judged present at the same spot in two rows
        let board_rows = vec!["bxxxx".to_string(), "byyyy".to_string()];
        let judgements = |first: Judgement| {
            Some(vec![
                first,
                Judgement::Absent,
                Judgement::Absent,
                Judgement::Absent,
                Judgement::Absent,
            ])
        };
        let evaluation_rows = vec![judgements(Judgement::Present), judgements(Judgement::Present)];
        let grid = JudgementGrid::from_parts(&board_rows, &evaluation_rows);

        let present = grid.facts(Judgement::Present);
        assert_eq!(
            present,
            vec![LetterFact {
                letter: b'B',
                position: 0
            }]
        );
    }

    #[test]
    fn grid_uppercases_board_letters() {
        let board_rows = vec!["crane".to_string()];
        let evaluation_rows = vec![Some(vec![Judgement::Absent; 5])];
        let grid = JudgementGrid::from_parts(&board_rows, &evaluation_rows);

        let absent = grid.absent_letters();
        assert!(absent.contains(&b'C'));
        assert!(absent.contains(&b'E'));
        assert!(!absent.contains(&b'c'));
    }

    #[test]
    #[should_panic(expected = "storage contract")]
    fn short_board_row_breaks_the_shape_contract() {
        let board_rows = vec!["abc".to_string()];
        let evaluation_rows = vec![Some(vec![Judgement::Absent; 5])];
        let _ = JudgementGrid::from_parts(&board_rows, &evaluation_rows);
    }
}
