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

use thiserror::Error;

#[derive(Debug, Error)]
/// All possible errors of the metric computation and its sinks.
pub enum Error {
    /// Bad arguments: mismatched lengths, unknown outlier label, `bins == 0`, ...
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// One class has no samples, so its histogram is degenerate
    #[error("no {0} in the sample set")]
    EmptyGroup(&'static str),

    /// Sample file could not be read or a chart could not be written as CSV
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Chart could not be serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
