/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! text bar chart rendering of binned histograms, e.g.
//! ```text
//!                              Histogram - Modified moon
//! Values                                  Bin Counts
//! [0-15]    ██████████████(1,024)
//! [16-31]   ██████████████████████████████████████████████████████████████████████(5,120)
//! ```

use std::fmt::Write as _;
use num_format::{Locale, ToFormattedString};
use crate::{Sample, config::ContrastConfig, histogram::{Bin, sample_bins}};

const BAR_CHAR: char = '█';
const REPORT_WIDTH: usize = 90; // the title is centered within this
const LABEL_TAB: usize = 10; // bars start at the next multiple of this after the label
const COUNTS_COLUMN: usize = 39;

/// pad `s` with blanks up to the next tab stop, which is at least one column away
fn pad_to_tab_stop (s: &mut String, len: usize, tab: usize) {
    let stop = (len / tab + 1) * tab;
    for _ in len..stop { s.push(' ') }
}

pub fn render_histogram (title: &str, bins: &[Bin], bar_width: usize)->String {
    let mut s = String::with_capacity( 256 + bins.len() * (bar_width + 32));

    let title = format!("Histogram - {title}\n");
    let indent = (REPORT_WIDTH as f64 - title.chars().count() as f64) / 2.0;
    let indent = indent.round_ties_even().max(0.0) as usize;
    for _ in 0..indent { s.push(' ') }
    s.push_str( &title);

    let _ = writeln!( s, "{:<COUNTS_COLUMN$} Bin Counts", "Values ");

    let max_count = bins.iter().map( |b| b.count).max().unwrap_or(0);
    for bin in bins {
        let label = format!("[{}]", bin.label());
        let len = label.chars().count();
        s.push_str( &label);
        pad_to_tab_stop( &mut s, len, LABEL_TAB);

        let n_chars = if max_count > 0 {
            ((bin.count as f64 * bar_width as f64) / max_count as f64).round_ties_even() as usize
        } else {
            0
        };
        for _ in 0..n_chars { s.push( BAR_CHAR) }

        let _ = writeln!( s, "({})", bin.count.to_formatted_string( &Locale::en));
    }

    s
}

/// bin `samples` according to `config` and render them
pub fn render_sample_histogram (title: &str, samples: &[Sample], config: &ContrastConfig)->String {
    let bins = sample_bins( samples, config.report_bins);
    render_histogram( title, &bins, config.bar_width)
}
