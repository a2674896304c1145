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

use itertools::{izip, Itertools, MinMaxResult};
use serde::Serialize;

use crate::confusion::ConfusionMatrix;
use crate::curve::{Curve, CurvePoint, PrecisionRecallCurve, RiskCoverageCurve, RocCurve};
use crate::error::{Error, Result};
use crate::grid::ThresholdGrid;
use crate::histogram::{Distribution, Histogram};
use crate::plot::{Chart, Plot, Series};

pub const DEFAULT_HISTOGRAM_BINS: usize = 30;
pub const DEFAULT_CURVE_BINS: usize = 500;

/// Threshold-sweep evaluation of an anomaly detector.
///
/// Holds borrowed views of three aligned sample sequences: the anomaly score,
/// the label the detector predicted and the true label. A sample counts as an
/// outlier when its true label equals `outlier`. Nothing is computed up front;
/// every curve is recomputed from the samples on each call.
#[derive(Debug, Clone)]
pub struct ThresholdSweepMetrics<'a, L> {
    scores: &'a [f64],
    predicted: &'a [L],
    truth: &'a [L],
    outlier: L,

    /// Lowest and highest score
    range: (f64, f64),
}

/// Areas under the ROC and precision-recall curves for one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub bins: usize,
    pub auroc: f64,
    pub aupr: f64,
}

impl<'a, L: PartialEq> ThresholdSweepMetrics<'a, L> {
    /// Creates a new `ThresholdSweepMetrics`.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if the three sequences differ in length, are empty, contain a
    /// non-finite score or if no true label equals `outlier`
    pub fn new(scores: &'a [f64], predicted: &'a [L], truth: &'a [L], outlier: L) -> Result<Self> {
        if scores.len() != predicted.len() || scores.len() != truth.len() {
            return Err(Error::InvalidInput(format!(
                "length mismatch: {} scores, {} predicted labels, {} true labels",
                scores.len(),
                predicted.len(),
                truth.len()
            )));
        }
        if let Some(idx) = scores.iter().position(|s| !s.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "score {} at index {idx} is not finite",
                scores[idx]
            )));
        }
        let range = match scores.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => {
                return Err(Error::InvalidInput("empty sample set".into()));
            }
            MinMaxResult::OneElement(s) => (s, s),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        if !truth.contains(&outlier) {
            return Err(Error::InvalidInput(
                "outlier label does not occur in the true labels".into(),
            ));
        }

        Ok(Self {
            scores,
            predicted,
            truth,
            outlier,
            range,
        })
    }

    /// Amount of samples
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn outlier(&self) -> &L {
        &self.outlier
    }

    /// `bins` thresholds from the highest score down to the lowest one.
    pub fn thresholds(&self, bins: usize) -> Result<ThresholdGrid> {
        if bins == 0 {
            return Err(Error::InvalidInput("at least one bin is required".into()));
        }
        let (min, max) = self.range;
        Ok(ThresholdGrid::descending(max, min, bins))
    }

    fn confusion_sweep(&self, bins: usize) -> Result<Vec<(f64, ConfusionMatrix)>> {
        Ok(self
            .thresholds(bins)?
            .iter()
            .map(|&th| {
                (
                    th,
                    ConfusionMatrix::at(th, self.scores, self.truth, &self.outlier),
                )
            })
            .collect())
    }

    /// Score histograms of inliers and outliers, both over the full score range.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if `bins` is 0
    /// - `Error::EmptyGroup` if there are no inliers or no outliers
    pub fn distribution(&self, bins: usize) -> Result<Distribution> {
        if bins == 0 {
            return Err(Error::InvalidInput("at least one bin is required".into()));
        }
        let (inliers, outliers): (Vec<f64>, Vec<f64>) = self
            .scores
            .iter()
            .zip(self.truth)
            .partition_map(|(&score, label)| match *label == self.outlier {
                false => itertools::Either::Left(score),
                true => itertools::Either::Right(score),
            });
        if inliers.is_empty() {
            return Err(Error::EmptyGroup("inliers"));
        }
        if outliers.is_empty() {
            return Err(Error::EmptyGroup("outliers"));
        }

        let (min, max) = self.range;
        Ok(Distribution {
            inliers: Histogram::new(inliers, bins, min, max),
            outliers: Histogram::new(outliers, bins, min, max),
        })
    }

    /// False positive rate against true positive rate at every threshold.
    ///
    /// A rate stays 0 while its numerator is 0, even if the denominator is 0 as well. The area
    /// is integrated in threshold order, so it is only an approximation when the rates are not
    /// monotonic.
    pub fn roc_curve(&self, bins: usize) -> Result<RocCurve> {
        let curve: Curve = self
            .confusion_sweep(bins)?
            .into_iter()
            .map(|(threshold, m)| CurvePoint {
                x: m.false_positive_rate(),
                y: m.true_positive_rate(),
                threshold,
            })
            .collect();
        let auroc = curve.area();
        log::debug!("roc: {} samples, {bins} bins, auroc {auroc}", self.len());

        Ok(RocCurve { curve, auroc })
    }

    /// Recall against precision at every threshold.
    ///
    /// Without a true positive, precision is 1 and recall is 0.
    pub fn precision_recall_curve(&self, bins: usize) -> Result<PrecisionRecallCurve> {
        let curve: Curve = self
            .confusion_sweep(bins)?
            .into_iter()
            .map(|(threshold, m)| CurvePoint {
                x: m.recall(),
                y: m.precision(),
                threshold,
            })
            .collect();
        let aupr = curve.area();
        log::debug!("pr: {} samples, {bins} bins, aupr {aupr}", self.len());

        Ok(PrecisionRecallCurve { curve, aupr })
    }

    /// Coverage against risk when every sample scoring above the threshold is rejected.
    ///
    /// Coverage is the share of kept samples, risk the share of kept samples whose predicted
    /// label is wrong. With nothing kept, the risk is NaN.
    pub fn risk_coverage_curve(&self, bins: usize) -> Result<RiskCoverageCurve> {
        let grid = self.thresholds(bins)?;
        let total = self.len() as f64;

        let mut points = Vec::with_capacity(grid.len());
        let mut outliers_left = Vec::with_capacity(grid.len());
        for &th in &grid {
            let mut kept = 0;
            let mut wrong = 0;
            let mut outliers = 0;
            for (score, predicted, truth) in izip!(self.scores, self.predicted, self.truth) {
                if *score > th {
                    continue;
                }
                kept += 1;
                if predicted != truth {
                    wrong += 1;
                }
                if *truth == self.outlier {
                    outliers += 1;
                }
            }

            let risk = wrong as f64 / kept as f64;
            if risk.is_nan() {
                log::warn!("no sample at or below threshold {th}, risk is undefined");
            }
            points.push(CurvePoint {
                x: kept as f64 / total,
                y: risk,
                threshold: th,
            });
            outliers_left.push(outliers);
        }
        log::debug!("risk-coverage: {} samples, {bins} bins", self.len());

        Ok(RiskCoverageCurve {
            curve: Curve { points },
            outliers_left,
        })
    }

    pub fn summary(&self, bins: usize) -> Result<Summary> {
        Ok(Summary {
            bins,
            auroc: self.roc_curve(bins)?.auroc,
            aupr: self.precision_recall_curve(bins)?.aupr,
        })
    }

    pub fn plot_distribution(&self, bins: usize, plot: &mut impl Plot) -> Result<()> {
        let dist = self.distribution(bins)?;
        let series = |label: &str, h: &Histogram| Series {
            label: label.into(),
            x: h.centers(),
            y: h.counts.iter().map(|&c| c as f64).collect(),
        };

        plot.plot(&Chart {
            title: "score distribution".into(),
            x_label: "Anomaly score".into(),
            y_label: "count".into(),
            series: vec![
                series("inliers", &dist.inliers),
                series("outliers", &dist.outliers),
            ],
        })
    }

    pub fn plot_roc_curve(&self, bins: usize, plot: &mut impl Plot) -> Result<()> {
        let roc = self.roc_curve(bins)?;
        plot.plot(&Chart {
            title: format!("area under curve = {:.3}", roc.auroc),
            x_label: "FPR".into(),
            y_label: "TPR".into(),
            series: vec![Series {
                label: "roc".into(),
                x: roc.curve.xs(),
                y: roc.curve.ys(),
            }],
        })
    }

    pub fn plot_precision_recall_curve(&self, bins: usize, plot: &mut impl Plot) -> Result<()> {
        let pr = self.precision_recall_curve(bins)?;
        plot.plot(&Chart {
            title: format!("area under PR-curve = {:.3}", pr.aupr),
            x_label: "recall".into(),
            y_label: "precision".into(),
            series: vec![Series {
                label: "precision-recall".into(),
                x: pr.curve.xs(),
                y: pr.curve.ys(),
            }],
        })
    }

    pub fn plot_risk_coverage_curve(&self, bins: usize, plot: &mut impl Plot) -> Result<()> {
        let rc = self.risk_coverage_curve(bins)?;
        plot.plot(&Chart {
            title: "risk vs coverage".into(),
            x_label: "coverage".into(),
            y_label: "risk".into(),
            series: vec![Series {
                label: "risk-coverage".into(),
                x: rc.curve.xs(),
                y: rc.curve.ys(),
            }],
        })
    }
}
