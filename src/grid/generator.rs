use rand::distributions::WeightedIndex;
use rand::prelude::*;

use crate::alphabet::LETTER_FREQUENCIES;
use crate::error::GridError;
use crate::grid::Grid;

pub struct GridGenerator;

impl GridGenerator {
    /// Random single-letter grid drawn from English letter frequencies.
    pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid, GridError> {
        let dist = WeightedIndex::new(LETTER_FREQUENCIES.iter().map(|&(_, weight)| weight))
            .expect("letter frequencies are positive");

        let cells = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| LETTER_FREQUENCIES[dist.sample(rng)].0.to_string())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        Grid::new(cells)
    }
}
