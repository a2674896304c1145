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

use serde::Serialize;

/// Equal-width histogram. Bins are half-open `[lo, hi)` except the last one,
/// which also holds its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges, ascending
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Counts `values` into `bins` bins spanning `[lo, hi]`. Values outside the
    /// range are ignored. An empty range is widened by 0.5 on both sides.
    pub fn new(values: impl IntoIterator<Item = f64>, bins: usize, lo: f64, hi: f64) -> Self {
        let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| match i {
                i if i == bins => hi,
                i => lo + i as f64 * width,
            })
            .collect();

        let mut counts = vec![0; bins];
        for value in values {
            if bins == 0 || !(lo..=hi).contains(&value) {
                continue;
            }
            // bin of the last edge at or below the value, so a value on an edge opens that bin
            let idx = edges.partition_point(|e| *e <= value).saturating_sub(1);
            counts[idx.min(bins - 1)] += 1;
        }

        Self { edges, counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|e| (e[0] + e[1]) / 2.).collect()
    }
}

/// Score histograms of both classes over the same range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub inliers: Histogram,
    pub outliers: Histogram,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_bin_is_closed() {
        let h = Histogram::new([0., 0.5, 1.], 2, 0., 1.);
        assert_eq!(vec![1, 2], h.counts);
        assert_eq!(vec![0., 0.5, 1.], h.edges);
    }

    #[test]
    fn test_value_on_interior_edge_opens_next_bin() {
        let h = Histogram::new([0.1, 0.26, 0.9], 5, 0.1, 0.9);
        assert_eq!(0.26, h.edges[1]);
        assert_eq!(vec![1, 1, 0, 0, 1], h.counts);

        for bins in [2, 3, 7, 13, 30, 39] {
            let edges = Histogram::new([], bins, -0.3, 1.7).edges;
            let h = Histogram::new(edges.iter().copied(), bins, -0.3, 1.7);
            let mut want = vec![1; bins];
            want[bins - 1] = 2;
            assert_eq!(want, h.counts, "{bins} bins");
        }
    }

    #[test]
    fn test_flat_range_is_widened() {
        let h = Histogram::new([2., 2., 2.], 4, 2., 2.);
        assert_eq!(1.5, h.edges[0]);
        assert_eq!(2.5, h.edges[4]);
        assert_eq!(vec![0, 0, 3, 0], h.counts);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let h = Histogram::new([-1., 0.2, 7.], 3, 0., 1.);
        assert_eq!(1, h.total());
    }

    #[test]
    fn test_centers() {
        let h = Histogram::new([], 2, 0., 1.);
        assert_eq!(vec![0.25, 0.75], h.centers());
    }
}
