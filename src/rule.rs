//! Decoding of rule numbers into lookup tables.
//!
//! A rule number is a truth table packed into an integer. For a 1-D automaton
//! the neighborhood `(left, center, right)` read as the 3-bit number
//! `4 * left + 2 * center + right` selects one of 8 bits. Written as the usual
//! zero-padded, most-significant-first string this is the character at index
//! `7 - key`, so `"000"` reads the last character and `"111"` the first.
//!
//! For a 2-D automaton with `n` neighbors the table has `2 * (n + 1)` entries,
//! least-significant bit first, addressed by `2 * neighbor_sum + center`.

use crate::{Error, Neighborhood, Result, Rule1D, Rule2D};
use ndarray::{ArrayView1, ArrayView2};
use std::convert::TryFrom;

/// Largest valid 1-D rule number.
pub const MAX_RULE_1D: u32 = 255;

/// Number of entries in the lookup table of a 2-D rule.
#[inline]
pub fn table_len(neighborhood: Neighborhood) -> usize {
    2 * (neighborhood.count() + 1)
}

/// Largest rule number whose table fits `neighborhood`.
#[inline]
pub fn max_rule_number(neighborhood: Neighborhood) -> u32 {
    ((1u64 << table_len(neighborhood)) - 1) as u32
}

/// Value of a cell as a single bit.
#[inline]
pub(crate) fn bit(cell: f64) -> u8 {
    (cell != 0.0) as u8
}

fn check_1d(rule: u32) -> Result<()> {
    if rule > MAX_RULE_1D {
        return Err(Error::RuleNumberOutOfRange {
            rule,
            max: MAX_RULE_1D,
        });
    }
    Ok(())
}

fn check_2d(rule: u32, neighborhood: Neighborhood) -> Result<()> {
    let max = max_rule_number(neighborhood);
    if rule > max {
        return Err(Error::RuleNumberOutOfRange { rule, max });
    }
    Ok(())
}

/// Next value of a 1-D cell given its neighborhood, each cell 0 or 1.
///
/// Any non-zero cell argument is treated as 1.
pub fn decode_1d(rule: u32, left: u8, center: u8, right: u8) -> Result<u8> {
    check_1d(rule)?;
    let key = 4 * (left != 0) as u32 + 2 * (center != 0) as u32 + (right != 0) as u32;
    Ok(((rule >> key) & 1) as u8)
}

/// Next value of a 2-D cell given the number of live neighbors and its own value.
pub fn decode_2d(rule: u32, neighbor_count: usize, neighbor_sum: usize, center: u8) -> Result<u8> {
    let neighborhood = Neighborhood::try_from(neighbor_count)?;
    check_2d(rule, neighborhood)?;
    if neighbor_sum > neighbor_count {
        return Err(Error::NeighborSumOutOfRange {
            sum: neighbor_sum,
            max: neighbor_count,
        });
    }
    let index = 2 * neighbor_sum + (center != 0) as usize;
    Ok(((rule >> index) & 1) as u8)
}

/// A 1-D rule number unpacked into its 8 outcomes.
///
/// Cells beyond either end of the row are read as 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RuleTable1D {
    rule: u8,
    table: [bool; 8],
}

impl RuleTable1D {
    pub fn new(rule: u32) -> Result<Self> {
        check_1d(rule)?;
        let mut table = [false; 8];
        for (key, out) in table.iter_mut().enumerate() {
            *out = (rule >> key) & 1 == 1;
        }
        Ok(Self {
            rule: rule as u8,
            table,
        })
    }

    #[inline]
    pub fn rule(&self) -> u8 {
        self.rule
    }

    /// Outcome for the neighborhood `(left, center, right)`.
    ///
    /// Any non-zero cell argument is treated as 1.
    #[inline]
    pub fn lookup(&self, left: u8, center: u8, right: u8) -> bool {
        let key = 4 * (left != 0) as usize + 2 * (center != 0) as usize + (right != 0) as usize;
        self.table[key]
    }
}

impl Rule1D for RuleTable1D {
    #[inline]
    fn alive(&self, ix: usize, row: ArrayView1<'_, f64>) -> bool {
        let left = ix.checked_sub(1).map_or(0, |l| bit(row[l]));
        let right = row.get(ix + 1).copied().map_or(0, bit);
        self.lookup(left, bit(row[ix]), right)
    }
}

/// A 2-D rule number unpacked for one neighborhood.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable2D {
    rule: u32,
    neighborhood: Neighborhood,
    table: Vec<bool>,
}

impl RuleTable2D {
    pub fn new(rule: u32, neighborhood: Neighborhood) -> Result<Self> {
        check_2d(rule, neighborhood)?;
        let table = (0..table_len(neighborhood))
            .map(|index| (rule >> index) & 1 == 1)
            .collect();
        Ok(Self {
            rule,
            neighborhood,
            table,
        })
    }

    /// Build from a raw neighbor count, rejecting anything but 4 or 8.
    pub fn with_count(rule: u32, neighbor_count: usize) -> Result<Self> {
        Self::new(rule, Neighborhood::try_from(neighbor_count)?)
    }

    #[inline]
    pub fn rule(&self) -> u32 {
        self.rule
    }

    #[inline]
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Outcome for `neighbor_sum` live neighbors around a `center` cell.
    ///
    /// Any non-zero `center` is treated as 1. Panics if `neighbor_sum` exceeds the
    /// neighbor count.
    #[inline]
    pub fn lookup(&self, neighbor_sum: usize, center: u8) -> bool {
        self.table[2 * neighbor_sum + (center != 0) as usize]
    }
}

impl Rule2D for RuleTable2D {
    #[inline]
    fn alive(&self, window: ArrayView2<'_, f64>) -> bool {
        self.lookup(self.neighborhood.live_sum(window), bit(window[(1, 1)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, Array2};
    use proptest::prelude::*;

    /// Character-indexed reading of the MSB-first binary rendering.
    fn string_decode_1d(rule: u32, l: u8, c: u8, r: u8) -> u8 {
        let rendered = format!("{:08b}", rule);
        let key = (4 * l + 2 * c + r) as usize;
        rendered.as_bytes()[7 - key] - b'0'
    }

    #[test]
    fn rule_two() {
        assert_eq!(decode_1d(2, 0, 0, 0).unwrap(), 0);
        assert_eq!(decode_1d(2, 1, 1, 1).unwrap(), 0);
        assert_eq!(decode_1d(2, 0, 0, 1).unwrap(), 1);
        assert_eq!(decode_1d(2, 0, 1, 0).unwrap(), 0);
    }

    #[test]
    fn rule_thirty() {
        // 00011110: 100, 011, 010 and 001 live.
        let live = [(1, 0, 0), (0, 1, 1), (0, 1, 0), (0, 0, 1)];
        for l in 0..2 {
            for c in 0..2 {
                for r in 0..2 {
                    let expected = live.contains(&(l, c, r)) as u8;
                    assert_eq!(decode_1d(30, l, c, r).unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn rejects_wide_1d_rules() {
        assert!(matches!(
            decode_1d(256, 0, 0, 0),
            Err(Error::RuleNumberOutOfRange { rule: 256, max: 255 })
        ));
        assert!(RuleTable1D::new(746).is_err());
        assert!(RuleTable1D::new(255).is_ok());
    }

    #[test]
    fn decode_2d_rejects_bad_counts() {
        assert!(matches!(
            decode_2d(746, 6, 0, 0),
            Err(Error::InvalidNeighborCount(6))
        ));
        assert!(matches!(
            decode_2d(746, 4, 5, 0),
            Err(Error::NeighborSumOutOfRange { sum: 5, max: 4 })
        ));
        assert!(matches!(
            decode_2d(1 << 10, 4, 0, 0),
            Err(Error::RuleNumberOutOfRange { max: 1023, .. })
        ));
        assert!(decode_2d(1 << 10, 8, 0, 0).is_ok());
    }

    #[test]
    fn rule_746_moore() {
        // 746 = 0b10_1110_1010, least significant bit first: 0101011101.
        let expected = [0, 1, 0, 1, 0, 1, 1, 1, 0, 1];
        for (index, want) in expected.iter().enumerate() {
            let got = decode_2d(746, 8, index / 2, (index % 2) as u8).unwrap();
            assert_eq!(got, *want, "index {}", index);
        }
        for index in expected.len()..table_len(Neighborhood::Moore) {
            assert_eq!(decode_2d(746, 8, index / 2, (index % 2) as u8).unwrap(), 0);
        }
    }

    #[test]
    fn table_limits() {
        assert_eq!(table_len(Neighborhood::VonNeumann), 10);
        assert_eq!(table_len(Neighborhood::Moore), 18);
        assert_eq!(max_rule_number(Neighborhood::VonNeumann), 1023);
        assert_eq!(max_rule_number(Neighborhood::Moore), (1 << 18) - 1);
    }

    #[test]
    fn table_1d_treats_non_zero_as_live() {
        let table = RuleTable1D::new(2).unwrap();
        assert!(!table.lookup(2, 2, 2));
        assert!(table.lookup(0, 0, 9));
        for rule in [30u32, 90, 110, 255].iter() {
            let table = RuleTable1D::new(*rule).unwrap();
            assert_eq!(table.lookup(7, 0, 3), decode_1d(*rule, 7, 0, 3).unwrap() == 1);
        }
    }

    #[test]
    fn table_1d_pads_edges_with_zero() {
        // Rule 1 only fires on 000.
        let table = RuleTable1D::new(1).unwrap();
        let row = arr1(&[0.0, 1.0, 0.0, 0.0]);
        let next: Vec<bool> = (0..4).map(|ix| table.alive(ix, row.view())).collect();
        assert_eq!(next, vec![false, false, false, true]);
    }

    #[test]
    fn table_2d_reads_window() {
        let table = RuleTable2D::with_count(746, 8).unwrap();
        let lone = Array2::from_shape_fn((3, 3), |ix| (ix == (1, 1)) as u8 as f64);
        assert!(table.alive(lone.view()));
        let touching = Array2::from_shape_fn((3, 3), |ix| (ix == (0, 0)) as u8 as f64);
        assert!(!table.alive(touching.view()));
    }

    proptest! {
        #[test]
        fn decode_1d_matches_string_indexing(rule in 0u32..=255, l in 0u8..2, c in 0u8..2, r in 0u8..2) {
            let want = string_decode_1d(rule, l, c, r);
            prop_assert_eq!(decode_1d(rule, l, c, r).unwrap(), want);
            prop_assert_eq!(RuleTable1D::new(rule).unwrap().lookup(l, c, r), want == 1);
        }

        #[test]
        fn decode_2d_index_stays_in_table(rule in any::<u32>()) {
            for neighborhood in Neighborhood::all() {
                let n = neighborhood.count();
                let rule = rule & max_rule_number(neighborhood);
                let rendered: Vec<u8> = format!("{:0width$b}", rule, width = table_len(neighborhood))
                    .bytes()
                    .rev()
                    .map(|b| b - b'0')
                    .collect();
                let table = RuleTable2D::new(rule, neighborhood).unwrap();
                for sum in 0..=n {
                    for center in 0..2u8 {
                        let index = 2 * sum + center as usize;
                        prop_assert!(index < rendered.len());
                        let got = decode_2d(rule, n, sum, center).unwrap();
                        prop_assert_eq!(got, rendered[index]);
                        prop_assert_eq!(table.lookup(sum, center), got == 1);
                    }
                }
            }
        }
    }
}
