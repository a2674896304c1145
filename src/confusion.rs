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

/// Confusion counts of the rule "score above threshold means outlier".
///
/// Both comparisons are strict: a sample whose score equals the threshold is
/// neither flagged nor accepted and shows up in none of the four counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// true-positives
    pub tp: usize,

    /// false-negatives
    pub fne: usize,

    /// true-negatives
    pub tn: usize,

    /// false-positives
    pub fp: usize,
}

impl ConfusionMatrix {
    pub fn at<L: PartialEq>(threshold: f64, scores: &[f64], truth: &[L], outlier: &L) -> Self {
        let mut counts = Self {
            tp: 0,
            fne: 0,
            tn: 0,
            fp: 0,
        };
        for (score, label) in scores.iter().zip(truth) {
            let is_outlier = label == outlier;
            if *score > threshold {
                match is_outlier {
                    true => counts.tp += 1,
                    false => counts.fp += 1,
                }
            } else if *score < threshold {
                match is_outlier {
                    true => counts.fne += 1,
                    false => counts.tn += 1,
                }
            }
        }
        counts
    }

    pub fn amount_false(&self) -> usize {
        self.fne + self.fp
    }

    /// `fp / (tn + fp)`, or 0 as long as there is no false positive.
    pub fn false_positive_rate(&self) -> f64 {
        if self.fp > 0 {
            self.fp as f64 / (self.tn + self.fp) as f64
        } else {
            0.
        }
    }

    /// `tp / (tp + fn)`, or 0 as long as there is no true positive.
    pub fn true_positive_rate(&self) -> f64 {
        if self.tp > 0 {
            self.tp as f64 / (self.tp + self.fne) as f64
        } else {
            0.
        }
    }

    /// `tp / (tp + fp)`, or 1 as long as there is no true positive.
    pub fn precision(&self) -> f64 {
        if self.tp > 0 {
            self.tp as f64 / (self.tp + self.fp) as f64
        } else {
            1.
        }
    }

    /// Same as the true positive rate.
    pub fn recall(&self) -> f64 {
        self.true_positive_rate()
    }
}
