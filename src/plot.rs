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

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// A labeled sequence of points, drawn in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Everything a chart component needs to draw one figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

/// Receives finished charts. Implement this to hook up an actual charting
/// library.
pub trait Plot {
    fn plot(&mut self, chart: &Chart) -> Result<()>;
}

/// Sinks that also take flat records, e.g. a metric summary.
pub trait Report {
    fn report<T: Serialize>(&mut self, record: &T) -> Result<()>;
}

/// Keeps every chart in memory.
impl Plot for Vec<Chart> {
    fn plot(&mut self, chart: &Chart) -> Result<()> {
        self.push(chart.clone());
        Ok(())
    }
}

/// Writes charts as `;` separated values: a `series;<x label>;<y label>`
/// header, then one row per point.
pub struct CsvPlot<W: Write> {
    out: W,
}

impl<W: Write> CsvPlot<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Plot for CsvPlot<W> {
    fn plot(&mut self, chart: &Chart) -> Result<()> {
        log::info!("{}", chart.title);

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_writer(&mut self.out);
        writer.write_record(["series", chart.x_label.as_str(), chart.y_label.as_str()])?;
        for series in &chart.series {
            for (x, y) in series.x.iter().zip(&series.y) {
                writer.serialize((&series.label, x, y))?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

/// A header row named after the record's fields, then the record.
impl<W: Write> Report for CsvPlot<W> {
    fn report<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_writer(&mut self.out);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }
}

/// Writes each chart as a single line of JSON.
pub struct JsonPlot<W: Write> {
    out: W,
}

impl<W: Write> JsonPlot<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Plot for JsonPlot<W> {
    fn plot(&mut self, chart: &Chart) -> Result<()> {
        serde_json::to_writer(&mut self.out, chart)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Report for JsonPlot<W> {
    fn report<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Summary;

    const SUMMARY: Summary = Summary {
        bins: 2,
        auroc: 0.5,
        aupr: 0.75,
    };

    fn chart() -> Chart {
        Chart {
            title: "area under curve = 0.500".into(),
            x_label: "FPR".into(),
            y_label: "TPR".into(),
            series: vec![Series {
                label: "roc".into(),
                x: vec![0., 1.],
                y: vec![0., 1.],
            }],
        }
    }

    #[test]
    fn test_csv_rows() {
        let mut plot = CsvPlot::new(Vec::new());
        plot.plot(&chart()).unwrap();
        let text = String::from_utf8(plot.into_inner()).unwrap();
        assert_eq!("series;FPR;TPR\nroc;0.0;0.0\nroc;1.0;1.0\n", text);
    }

    #[test]
    fn test_json_line() {
        let mut plot = JsonPlot::new(Vec::new());
        plot.plot(&chart()).unwrap();
        plot.plot(&chart()).unwrap();
        let text = String::from_utf8(plot.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(2, lines.len());
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!("FPR", value["x_label"]);
        assert_eq!(1., value["series"][0]["y"][1]);
    }

    #[test]
    fn test_vec_keeps_charts() {
        let mut charts: Vec<Chart> = Vec::new();
        charts.plot(&chart()).unwrap();
        assert_eq!(vec![chart()], charts);
    }

    #[test]
    fn test_csv_report() {
        let mut plot = CsvPlot::new(Vec::new());
        plot.report(&SUMMARY).unwrap();
        let text = String::from_utf8(plot.into_inner()).unwrap();
        assert_eq!("bins;auroc;aupr\n2;0.5;0.75\n", text);
    }

    #[test]
    fn test_json_report() {
        let mut plot = JsonPlot::new(Vec::new());
        plot.report(&SUMMARY).unwrap();
        let text = String::from_utf8(plot.into_inner()).unwrap();
        assert_eq!("{\"bins\":2,\"auroc\":0.5,\"aupr\":0.75}\n", text);
    }
}
