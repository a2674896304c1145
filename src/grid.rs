// Copyright (C) 2024  Johannes Kepler University Linz, Institute of Networks and Security
// Copyright (C) 2024  CDL Digidow <https://www.digidow.eu/>
//
// Licensed under the EUPL, Version 1.2 or – as soon they will be approved by
// the European Commission - subsequent versions of the EUPL (the "Licence").
// You may not use this work except in compliance with the Licence.
//
// You should have received a copy of the European Union Public License along
// with this program.  If not, you may obtain a copy of the Licence at:
// <https://joinup.ec.europa.eu/software/page/eupl>
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the Licence is distributed on an "AS IS" basis,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the Licence for the specific language governing permissions and
// limitations under the Licence.

/// Thresholds evenly spaced from the highest score down to the lowest one.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdGrid {
    thresholds: Vec<f64>,
}

impl ThresholdGrid {
    /// `bins` points from `start` to `stop`, both included. The last point is
    /// exactly `stop`; with a single bin the grid only holds `start`.
    pub fn descending(start: f64, stop: f64, bins: usize) -> Self {
        let step = if bins > 1 {
            (stop - start) / (bins - 1) as f64
        } else {
            0.
        };
        let thresholds = (0..bins)
            .map(|i| match i {
                i if i > 0 && i == bins - 1 => stop,
                i => start + i as f64 * step,
            })
            .collect();
        Self { thresholds }
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.thresholds.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.thresholds
    }
}

impl<'a> IntoIterator for &'a ThresholdGrid {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Index<usize> for ThresholdGrid {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.thresholds[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_bins_hit_both_ends() {
        let grid = ThresholdGrid::descending(0.9, 0.1, 2);
        assert_eq!(&[0.9, 0.1], grid.as_slice());
    }

    #[test]
    fn test_single_bin_is_start() {
        let grid = ThresholdGrid::descending(0.9, 0.1, 1);
        assert_eq!(&[0.9], grid.as_slice());
    }

    #[test]
    fn test_spacing_is_linear() {
        let grid = ThresholdGrid::descending(1., 0., 5);
        assert_eq!(5, grid.len());
        for (got, want) in grid.iter().zip([1., 0.75, 0.5, 0.25, 0.]) {
            assert!((got - want).abs() < 1e-12);
        }
        assert_eq!(0., grid[4]);
    }

    #[test]
    fn test_flat_range() {
        let grid = ThresholdGrid::descending(0.3, 0.3, 4);
        assert!(grid.iter().all(|t| *t == 0.3));
    }
}
