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

//! the contrast engine: choose between histogram equalization and a signed square root stretch
//! based on the shape of the gray level distribution, then remap all samples.
//! All rounding is round-half-to-even

use std::{fmt, str::FromStr};
use tracing::{debug,warn};

use crate::{
    Sample, Stats, config::ContrastConfig,
    errors::{ContrastError, Result},
    histogram::{Bin, bin_histogram, cumulative, distinct_levels, level_histogram, level_range},
};

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Strategy {
    /// CDF based histogram equalization, for peaked or skewed distributions
    Equalize,
    /// signed square root stretch, for distributions that are already flat
    SquareRoot,
}

impl fmt::Display for Strategy {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            Strategy::Equalize => write!( f, "histogram equalization"),
            Strategy::SquareRoot => write!( f, "square root contrast"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ContrastError;

    fn from_str (s: &str)->Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "equalize" | "cdf" => Ok( Strategy::Equalize ),
            "sqrt" | "root" => Ok( Strategy::SquareRoot ),
            _ => Err( ContrastError::IllegalArgument( format!("unknown strategy '{s}' (use 'equalize' or 'sqrt')")))
        }
    }
}

/* #region strategy selection ****************************************************************************************/

/// mean over sample standard deviation of the bin counts. This is infinite for perfectly uniform
/// distributions (zero deviation) and if there are not enough bins to compute a deviation
pub fn shape_ratio (bins: &[Bin])->f64 {
    if bins.len() < 2 { return f64::INFINITY }

    let mut stats = Stats::<f64>::new();
    for bin in bins { stats.add( bin.count as f64) }

    let sd = stats.sample_stddev();
    if sd == 0.0 { f64::INFINITY } else { stats.mean / sd }
}

/// pick the transform for `samples`: near degenerate histograms (few occupied levels) and histograms
/// that are already roughly uniform get the square root stretch, everything else is equalized
pub fn select_strategy (samples: &[Sample], config: &ContrastConfig)->Strategy {
    let hist = level_histogram( samples);

    let n_levels = distinct_levels( &hist);
    if n_levels < config.min_distinct_levels {
        debug!("{} distinct levels below threshold {}", n_levels, config.min_distinct_levels);
        return Strategy::SquareRoot
    }

    let bins = match level_range( &hist) {
        Some((min,max)) => bin_histogram( &hist, min, max, config.shape_bins),
        None => return Strategy::SquareRoot
    };
    let ratio = shape_ratio( &bins);
    debug!("{} distinct levels, bin mean/stddev ratio {:.3} (threshold {})", n_levels, ratio, config.uniformity_ratio);

    if ratio > config.uniformity_ratio { Strategy::SquareRoot } else { Strategy::Equalize }
}

/* #endregion strategy selection */

/* #region histogram equalization ************************************************************************************/

/// the lookup table that maps each level of `hist` onto its normalized CDF value, scaled to the
/// max level of `hist`
pub fn equalization_lut (hist: &[u64])->Result<Vec<Sample>> {
    let cdf = cumulative( hist);

    // the cdf is non-decreasing
    let (cdf_min, cdf_max) = match (cdf.first(), cdf.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err( ContrastError::DegenerateImage( "no samples".into()))
    };
    let range = cdf_max - cdf_min;
    if range == 0 {
        return Err( ContrastError::DegenerateImage( "zero cumulative distribution range".into()))
    }

    let max_level = (hist.len() - 1) as f64;
    let lut = cdf.iter().map( |c| {
        let norm = (c - cdf_min) as f64 / range as f64;
        (max_level * norm).round_ties_even() as Sample
    }).collect();

    Ok(lut)
}

/// remap `samples` through their normalized cumulative distribution function. Images with a single
/// gray level cannot be equalized and result in a `DegenerateImage` error
pub fn cdf_equalize (samples: &[Sample])->Result<Vec<Sample>> {
    let hist = level_histogram( samples);
    if distinct_levels( &hist) < 2 {
        return Err( ContrastError::DegenerateImage( "image has a single gray level".into()))
    }

    let lut = equalization_lut( &hist)?;
    Ok( samples.iter().map( |s| lut[*s as usize]).collect() )
}

/* #endregion histogram equalization */

/* #region square root contrast **************************************************************************************/

/// square root that keeps the sign of negative arguments
#[inline]
pub fn signed_sqrt (x: f64)->f64 {
    if x >= 0.0 { x.sqrt() } else { -(-x).sqrt() }
}

fn min_max<T: PartialOrd + Copy> (vs: impl IntoIterator<Item=T>)->Option<(T,T)> {
    vs.into_iter().fold( None, |acc, v| match acc {
        None => Some((v,v)),
        Some((lo,hi)) => Some(( if v < lo {v} else {lo}, if v > hi {v} else {hi} ))
    })
}

/// normalize samples to [-1,1], take signed square roots and scale the renormalized result back to
/// the max sample value. Images with a single gray level result in a `DegenerateImage` error
pub fn sqrt_contrast (samples: &[Sample])->Result<Vec<Sample>> {
    let (min,max) = min_max( samples.iter().copied())
        .ok_or_else( || ContrastError::DegenerateImage( "no samples".into()))?;
    if min == max {
        return Err( ContrastError::DegenerateImage( format!("all samples have level {min}")))
    }

    let (min, max) = (min as f64, max as f64);
    let roots: Vec<f64> = samples.iter().map( |s| {
        let norm = (*s as f64 - min) / (max - min);
        signed_sqrt( 2.0 * norm - 1.0)
    }).collect();

    let (r_min, r_max) = match min_max( roots.iter().copied()) {
        Some((lo,hi)) if hi > lo => (lo,hi),
        _ => return Err( ContrastError::DegenerateImage( "zero square root range".into()))
    };

    Ok( roots.iter().map( |r| (max * ((r - r_min) / (r_max - r_min))).round_ties_even() as Sample).collect() )
}

/* #endregion square root contrast */

/* #region enhancement driver ****************************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Outcome {
    Transformed(Strategy),
    /// the image was degenerate (e.g. blank) and is returned as is
    Unchanged,
}

impl fmt::Display for Outcome {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            Outcome::Transformed(strategy) => write!( f, "{strategy}"),
            Outcome::Unchanged => write!( f, "unchanged (degenerate image)"),
        }
    }
}

#[derive(Debug,Clone)]
pub struct Enhancement {
    pub outcome: Outcome,
    pub samples: Vec<Sample>,
}

/// select a strategy for `samples` and apply it
pub fn enhance (samples: &[Sample], config: &ContrastConfig)->Result<Enhancement> {
    let strategy = select_strategy( samples, config);
    enhance_with( samples, strategy)
}

/// apply `strategy` to `samples`. A degenerate image is not an error here but yields the
/// unchanged input samples
pub fn enhance_with (samples: &[Sample], strategy: Strategy)->Result<Enhancement> {
    let res = match strategy {
        Strategy::Equalize => cdf_equalize( samples),
        Strategy::SquareRoot => sqrt_contrast( samples),
    };

    match res {
        Ok(new_samples) => Ok( Enhancement { outcome: Outcome::Transformed(strategy), samples: new_samples } ),
        Err(ContrastError::DegenerateImage(msg)) => {
            warn!("cannot apply {}, leaving image unchanged: {}", strategy, msg);
            Ok( Enhancement { outcome: Outcome::Unchanged, samples: samples.to_vec() } )
        }
        Err(e) => Err(e)
    }
}

/* #endregion enhancement driver */
