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

//! Threshold-sweep evaluation of anomaly detectors: score distributions, ROC, precision-recall
//! and risk-coverage curves.

pub mod confusion;
pub mod curve;
pub mod error;
pub mod grid;
pub mod histogram;
pub mod input;
pub mod metrics;
pub mod plot;

pub use crate::confusion::ConfusionMatrix;
pub use crate::curve::{
    trapezoid, Curve, CurvePoint, PrecisionRecallCurve, RiskCoverageCurve, RocCurve,
};
pub use crate::error::{Error, Result};
pub use crate::grid::ThresholdGrid;
pub use crate::histogram::{Distribution, Histogram};
pub use crate::input::Samples;
pub use crate::metrics::{
    Summary, ThresholdSweepMetrics, DEFAULT_CURVE_BINS, DEFAULT_HISTOGRAM_BINS,
};
pub use crate::plot::{Chart, CsvPlot, JsonPlot, Plot, Report, Series};
