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

use std::process::ExitCode;

use pico_args::Arguments;
use scoresweep::{
    CsvPlot, Error, JsonPlot, Plot, Report, Samples, ThresholdSweepMetrics, DEFAULT_CURVE_BINS,
    DEFAULT_HISTOGRAM_BINS,
};

const USAGE: &str = "usage: scoresweep --samples <file> --outlier <label> \
[--action distribution|roc|pr|risk-coverage|summary] [--bins <n>] [--format csv|json]";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}\n{usage}", usage = USAGE)]
    Args(#[from] pico_args::Error),

    #[error(transparent)]
    Metrics(#[from] Error),

    #[error("unknown {0} `{1}`\n{usage}", usage = USAGE)]
    Unknown(&'static str, String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    Distribution,
    Roc,
    PrecisionRecall,
    RiskCoverage,
    Summary,
}

impl Action {
    fn parse(name: &str) -> Result<Self, CliError> {
        match name {
            "distribution" => Ok(Self::Distribution),
            "roc" => Ok(Self::Roc),
            "pr" => Ok(Self::PrecisionRecall),
            "risk-coverage" => Ok(Self::RiskCoverage),
            "summary" => Ok(Self::Summary),
            other => Err(CliError::Unknown("action", other.into())),
        }
    }

    fn default_bins(&self) -> usize {
        match self {
            Self::Distribution => DEFAULT_HISTOGRAM_BINS,
            _ => DEFAULT_CURVE_BINS,
        }
    }
}

fn draw<P: Plot + Report>(
    metrics: &ThresholdSweepMetrics<'_, String>,
    action: Action,
    bins: usize,
    plot: &mut P,
) -> Result<(), CliError> {
    match action {
        Action::Distribution => match metrics.plot_distribution(bins, plot) {
            Err(Error::EmptyGroup(group)) => {
                log::warn!("No {group} among the samples, skipping the distribution plot");
            }
            res => res?,
        },
        Action::Roc => metrics.plot_roc_curve(bins, plot)?,
        Action::PrecisionRecall => metrics.plot_precision_recall_curve(bins, plot)?,
        Action::RiskCoverage => metrics.plot_risk_coverage_curve(bins, plot)?,
        Action::Summary => {
            plot.report(&metrics.summary(bins)?)?;
        }
    }
    Ok(())
}

fn run(mut args: Arguments) -> Result<(), CliError> {
    let path: String = args.value_from_str("--samples")?;
    let outlier: String = args.value_from_str("--outlier")?;
    let action = match args.opt_value_from_str::<&str, String>("--action")? {
        Some(a) => Action::parse(&a)?,
        None => Action::Summary,
    };
    let bins = args
        .opt_value_from_str("--bins")?
        .unwrap_or_else(|| action.default_bins());
    let format = args
        .opt_value_from_str::<&str, String>("--format")?
        .unwrap_or_else(|| "csv".into());

    let samples = Samples::from_path(&path)?;
    let metrics =
        ThresholdSweepMetrics::new(&samples.scores, &samples.predicted, &samples.truth, outlier)?;

    let stdout = std::io::stdout().lock();
    match format.as_str() {
        "csv" => draw(&metrics, action, bins, &mut CsvPlot::new(stdout)),
        "json" => draw(&metrics, action, bins, &mut JsonPlot::new(stdout)),
        other => Err(CliError::Unknown("format", other.into())),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Arguments::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
