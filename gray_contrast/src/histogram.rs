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

use std::fmt;
use crate::Sample;

/// per-level sample counts over `0..=max(samples)`. Empty for an empty sample sequence
pub fn level_histogram (samples: &[Sample])->Vec<u64> {
    let len = samples.iter().copied().max().map( |m| m as usize + 1).unwrap_or(0);
    let mut hist = vec![0u64; len];
    for s in samples {
        hist[*s as usize] += 1;
    }
    hist
}

/// the cumulative distribution function (running sum) of `hist`
pub fn cumulative (hist: &[u64])->Vec<u64> {
    let mut cdf = Vec::with_capacity( hist.len());
    let mut sum = 0u64;
    for c in hist {
        sum += c;
        cdf.push( sum);
    }
    cdf
}

/// number of occupied levels
pub fn distinct_levels (hist: &[u64])->usize {
    hist.iter().filter( |c| **c > 0).count()
}

/// lowest and highest occupied level
pub fn level_range (hist: &[u64])->Option<(usize,usize)> {
    let lo = hist.iter().position( |c| *c > 0)?;
    let hi = hist.iter().rposition( |c| *c > 0)?;
    Some( (lo,hi) )
}

/// a contiguous range of gray levels `lo..=hi` and the number of samples within
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Bin {
    pub lo: usize,
    pub hi: usize,
    pub count: u64,
}

impl Bin {
    pub fn label (&self)->String { format!("{}-{}", self.lo, self.hi) }
}

impl fmt::Display for Bin {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "[{}-{}]: {}", self.lo, self.hi, self.count)
    }
}

/// partition `min..=max` into `n_bins` equal width ranges and sum up the `hist` counts within each of them.
/// The last bin absorbs the remainder if the level span is not a multiple of `n_bins`, we never
/// create more bins than there are levels in the span
pub fn bin_histogram (hist: &[u64], min: usize, max: usize, n_bins: usize)->Vec<Bin> {
    if min > max { return Vec::new() }

    let span = max - min + 1;
    let n = n_bins.clamp( 1, span);
    let width = span / n;

    (0..n).map( |i| {
        let lo = min + i * width;
        let hi = if i == n-1 { max } else { lo + width - 1 };
        let count = (lo..=hi).map( |l| hist.get(l).copied().unwrap_or(0)).sum();
        Bin { lo, hi, count }
    }).collect()
}

/// bins over the observed level range of `samples`
pub fn sample_bins (samples: &[Sample], n_bins: usize)->Vec<Bin> {
    let hist = level_histogram( samples);
    match level_range( &hist) {
        Some((min,max)) => bin_histogram( &hist, min, max, n_bins),
        None => Vec::new()
    }
}
