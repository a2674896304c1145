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

use std::{io::Read, path::Path};

use serde::Deserialize;

use crate::error::Result;

#[derive(Deserialize, Debug)]
/// One row of a sample file
struct Record {
    score: f64,
    predicted: String,
    truth: String,
}

/// Detector output read from a `;` separated file with the header
/// `score;predicted;truth`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Samples {
    pub scores: Vec<f64>,
    pub predicted: Vec<String>,
    pub truth: Vec<String>,
}

impl Samples {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = builder().from_path(path)?;
        Self::collect(reader)
    }

    pub fn from_reader(rdr: impl Read) -> Result<Self> {
        Self::collect(builder().from_reader(rdr))
    }

    fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut samples = Self::default();
        for record in reader.deserialize() {
            let record: Record = record?;
            samples.scores.push(record.score);
            samples.predicted.push(record.predicted);
            samples.truth.push(record.truth);
        }

        log::info!("Loaded {} samples", samples.scores.len());
        Ok(samples)
    }
}

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.delimiter(b';').trim(csv::Trim::All);
    builder
}
