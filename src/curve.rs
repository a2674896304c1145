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

/// One point of a threshold sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,

    /// Threshold which produced this point
    pub threshold: f64,
}

/// Points of a sweep in grid order (highest threshold first).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub points: Vec<CurvePoint>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Trapezoidal area of `y` over `x`, taken in point order without sorting.
    pub fn area(&self) -> f64 {
        trapezoid(&self.ys(), &self.xs())
    }
}

impl FromIterator<CurvePoint> for Curve {
    fn from_iter<I: IntoIterator<Item = CurvePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// ROC curve, x is the false positive rate and y the true positive rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocCurve {
    pub curve: Curve,
    pub auroc: f64,
}

/// Precision-recall curve, x is the recall and y the precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecisionRecallCurve {
    pub curve: Curve,
    pub aupr: f64,
}

/// Risk-coverage curve, x is the coverage and y the risk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskCoverageCurve {
    pub curve: Curve,

    /// Amount of true outliers with a score at or below each threshold
    pub outliers_left: Vec<usize>,
}

/// Integrates `y` over `x` with the trapezoidal rule.
///
/// `x` need not be monotonic, segments where it decreases count negative.
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(x, y)| (x[1] - x[0]) * (y[1] + y[0]) / 2.)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trapezoid_unit_diagonal() {
        assert_eq!(0.5, trapezoid(&[0., 1.], &[0., 1.]));
    }

    #[test]
    fn test_trapezoid_short_input() {
        assert_eq!(0., trapezoid(&[], &[]));
        assert_eq!(0., trapezoid(&[3.], &[1.]));
    }

    #[test]
    fn test_trapezoid_backwards_is_negative() {
        assert_eq!(-2., trapezoid(&[2., 2.], &[1., 0.]));
    }

    #[test]
    fn test_trapezoid_nan_propagates() {
        assert!(trapezoid(&[f64::NAN, 1.], &[0., 1.]).is_nan());
    }

    #[test]
    fn test_curve_area() {
        let curve: Curve = [(0., 1.), (0.5, 1.), (1., 0.)]
            .into_iter()
            .map(|(x, y)| CurvePoint {
                x,
                y,
                threshold: 0.,
            })
            .collect();
        assert_eq!(3, curve.len());
        assert_eq!(0.75, curve.area());
    }
}
