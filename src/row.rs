use crate::rule::RuleTable1D;
use crate::{cell, Result, Rule1D};
use itertools::Itertools;
use log::{debug, trace};
use ndarray::{Array1, ArrayView1};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::fmt;

/// How the first row of an [`Automaton1D`] is filled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "persist", derive(serde::Serialize, serde::Deserialize))]
pub enum InitMode {
    /// Every cell independently 0 or 1 with equal odds. A seed makes the row reproducible.
    Random { seed: Option<u64> },
    /// Every cell 0.
    Zeros,
    /// Every cell 0 except a single live cell at `width / 2`.
    Default,
}

impl Default for InitMode {
    fn default() -> Self {
        InitMode::Default
    }
}

/// A single row of cells advanced one generation at a time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "persist", derive(serde::Serialize, serde::Deserialize))]
pub struct Automaton1D {
    width: usize,
    cells: Array1<f64>,
}

impl Automaton1D {
    /// Make a new row of `width` cells.
    ///
    /// A `custom` row of exactly `width` cells takes precedence over `init`; any non-zero
    /// value in it becomes a live cell. A custom row of any other length is ignored and the
    /// row starts with a single centered live cell instead.
    pub fn new(width: usize, init: InitMode, custom: Option<ArrayView1<'_, f64>>) -> Self {
        let cells = match custom {
            Some(row) if row.len() == width => row.mapv(|c| cell(c != 0.0)),
            Some(row) => {
                debug!(
                    "ignoring custom row of {} cells for automaton of width {}",
                    row.len(),
                    width
                );
                Self::centered(width)
            }
            None => match init {
                InitMode::Random { seed } => {
                    let mut rng = match seed {
                        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                        None => ChaCha8Rng::from_entropy(),
                    };
                    Array1::from_shape_fn(width, |_| cell(rng.gen_bool(0.5)))
                }
                InitMode::Zeros => Array1::zeros(width),
                InitMode::Default => Self::centered(width),
            },
        };
        Self { width, cells }
    }

    /// Make a row from existing cells, taking its width from them.
    pub fn from_cells(cells: Array1<f64>) -> Self {
        Self {
            width: cells.len(),
            cells: cells.mapv_into(|c| cell(c != 0.0)),
        }
    }

    fn centered(width: usize) -> Array1<f64> {
        Array1::from_shape_fn(width, |ix| cell(ix == width / 2))
    }

    /// Advance one generation with an arbitrary rule.
    ///
    /// Every new cell is computed from the row as it was before this call. If `replace` is
    /// set the row is overwritten; the new row is returned either way.
    pub fn step<R>(&mut self, rule: &R, replace: bool) -> Array1<f64>
    where
        R: Rule1D + ?Sized,
    {
        let current = self.cells.view();
        let next = Array1::from_shape_fn(self.width, |ix| cell(rule.alive(ix, current)));
        self.finish(next, replace)
    }

    /// Advance one generation and compute the cells in parallel.
    pub fn step_parallel<R>(&mut self, rule: &R, replace: bool) -> Array1<f64>
    where
        R: Rule1D + Sync + ?Sized,
    {
        let current = self.cells.view();
        let next: Vec<f64> = (0..self.width)
            .into_par_iter()
            .map(|ix| cell(rule.alive(ix, current)))
            .collect();
        self.finish(Array1::from(next), replace)
    }

    /// Advance one generation with an 8-bit rule number.
    ///
    /// Cells past either end of the row read as 0; there is no wraparound.
    pub fn step_rule_number(&mut self, rule: u32, replace: bool) -> Result<Array1<f64>> {
        let table = RuleTable1D::new(rule)?;
        Ok(self.step(&table, replace))
    }

    fn finish(&mut self, next: Array1<f64>, replace: bool) -> Array1<f64> {
        if replace {
            self.cells.assign(&next);
        }
        trace!("advanced row of width {}", self.width);
        next
    }

    /// Iterate over the next `generations` rows, replacing the row at every step.
    pub fn evolve<'a, R>(
        &'a mut self,
        rule: &'a R,
        generations: usize,
    ) -> impl Iterator<Item = Array1<f64>> + 'a
    where
        R: Rule1D + ?Sized,
    {
        (0..generations).map(move |_| self.step(rule, true))
    }

    /// Get the current row.
    #[inline]
    pub fn cells(&self) -> ArrayView1<'_, f64> {
        self.cells.view()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
}

impl fmt::Display for Automaton1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.cells.iter().map(|&c| c as u8).join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::invert;
    use ndarray::arr1;

    #[test]
    fn default_centers_single_cell() {
        let row = Automaton1D::new(5, InitMode::Default, None);
        assert_eq!(row.cells(), arr1(&[0.0, 0.0, 1.0, 0.0, 0.0]));
        let row = Automaton1D::new(4, InitMode::Default, None);
        assert_eq!(row.cells(), arr1(&[0.0, 0.0, 1.0, 0.0]));
    }

    #[test]
    fn mismatched_custom_falls_back_to_default() {
        let custom = arr1(&[1.0, 1.0]);
        let centered = arr1(&[0.0, 0.0, 1.0, 0.0]);
        for &init in [
            InitMode::Default,
            InitMode::Zeros,
            InitMode::Random { seed: Some(5) },
            InitMode::Random { seed: None },
        ]
        .iter()
        {
            let row = Automaton1D::new(4, init, Some(custom.view()));
            assert_eq!(row.cells(), centered, "{:?}", init);
        }
    }

    #[test]
    fn matching_custom_overrides_mode() {
        let custom = arr1(&[1.0, 0.0, 3.0]);
        let row = Automaton1D::new(3, InitMode::Zeros, Some(custom.view()));
        assert_eq!(row.cells(), arr1(&[1.0, 0.0, 1.0]));
    }

    #[test]
    fn zeros_and_seeded_random() {
        let row = Automaton1D::new(16, InitMode::Zeros, None);
        assert!(row.cells().iter().all(|&c| c == 0.0));

        let a = Automaton1D::new(64, InitMode::Random { seed: Some(7) }, None);
        let b = Automaton1D::new(64, InitMode::Random { seed: Some(7) }, None);
        assert_eq!(a, b);
        assert!(a.cells().iter().all(|&c| c == 0.0 || c == 1.0));
    }

    #[test]
    fn rule_two_shifts_left() {
        let mut row = Automaton1D::new(5, InitMode::Default, None);
        let next = row.step_rule_number(2, true).unwrap();
        assert_eq!(next, arr1(&[0.0, 1.0, 0.0, 0.0, 0.0]));
        assert_eq!(row.cells(), next);
    }

    #[test]
    fn rule_ninety_sierpinski() {
        let mut row = Automaton1D::new(7, InitMode::Default, None);
        let rows: Vec<_> = (0..3).map(|_| row.step_rule_number(90, true).unwrap()).collect();
        assert_eq!(rows[0], arr1(&[0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0]));
        assert_eq!(rows[1], arr1(&[0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]));
        assert_eq!(rows[2], arr1(&[1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]));
    }

    #[test]
    fn without_replace_keeps_row() {
        let mut row = Automaton1D::new(5, InitMode::Default, None);
        let next = row.step(&invert, false);
        assert_eq!(next, arr1(&[1.0, 1.0, 0.0, 1.0, 1.0]));
        assert_eq!(row.cells(), arr1(&[0.0, 0.0, 1.0, 0.0, 0.0]));
    }

    #[test]
    fn out_of_range_rule_leaves_row() {
        let mut row = Automaton1D::new(5, InitMode::Default, None);
        assert!(row.step_rule_number(256, true).is_err());
        assert_eq!(row.cells(), arr1(&[0.0, 0.0, 1.0, 0.0, 0.0]));
    }

    #[test]
    fn parallel_matches_serial() {
        let table = RuleTable1D::new(30).unwrap();
        let mut serial = Automaton1D::new(101, InitMode::Random { seed: Some(3) }, None);
        let mut parallel = serial.clone();
        for _ in 0..20 {
            assert_eq!(serial.step(&table, true), parallel.step_parallel(&table, true));
        }
    }

    #[test]
    fn evolve_yields_each_generation() {
        let mut row = Automaton1D::new(4, InitMode::Zeros, None);
        let rows: Vec<_> = row.evolve(&invert, 3).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], arr1(&[1.0; 4]));
        assert_eq!(rows[1], arr1(&[0.0; 4]));
        assert_eq!(rows[2], arr1(&[1.0; 4]));
        assert_eq!(row.cells(), arr1(&[1.0; 4]));
    }

    #[test]
    fn display_renders_bits() {
        let row = Automaton1D::new(3, InitMode::Default, None);
        assert_eq!(row.to_string(), "[0 1 0]");
    }
}
