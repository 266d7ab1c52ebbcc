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

//! contrast enhancement of plain PGM grayscale images
//! this reads P2 images, picks histogram equalization or a square root stretch depending on the
//! gray level distribution, and reports text histograms before and after the transformation

use std::{ops::{Add,Div,Mul,Sub}, path::Path};
use num::{Zero,Bounded};
use tracing::info;
use tracing_subscriber::EnvFilter;
use gray_common::fs::filestem;

mod errors;
pub use errors::{Result,ContrastError};

pub mod config;
pub use config::ContrastConfig;

pub mod histogram;
pub use histogram::{Bin, level_histogram, cumulative, bin_histogram, sample_bins};

pub mod contrast;
pub use contrast::{Strategy, Outcome, Enhancement, select_strategy, cdf_equalize, sqrt_contrast, enhance, enhance_with};

pub mod pgm;
pub use pgm::{GrayImage, read_pgm, write_pgm, parse_pgm, format_pgm};

pub mod report;
pub use report::{render_histogram, render_sample_histogram};

/// a single gray level. Plain PGM max values are limited to 65535
pub type Sample = u16;

/// incremental min/max/mean/variance accumulator (Welford)
pub struct Stats<T> {
    pub min: T,
    pub max: T,
    pub mean: f64,
    pub variance: f64,

    pub s: f64,
    pub n: usize
}

impl <T> Stats<T>
    where T: Add<T,Output=T> + Sub<T,Output=T> + Div<T,Output=T> + Mul<T,Output=T> +
             Bounded + PartialOrd + PartialEq + Zero + Into<f64> + Copy
{
    pub fn new ()->Self {
        let min = T::max_value();
        let max = T::min_value();
        let mean: f64 = 0.0;
        let variance: f64 = 0.0;

        Stats{min,max,mean,variance, s: 0.0, n: 0}
    }

    pub fn add (&mut self, v: T) {
        self.n += 1;

        if v < self.min { self.min = v }
        if v > self.max { self.max = v }

        let prev_mean = self.mean;
        let v: f64 = v.into();
        let n = self.n as f64;

        self.mean = (v + (n * prev_mean) - prev_mean) / n;
        self.s = self.s + (v - prev_mean) * (v - self.mean);
        self.variance = self.s / n;
    }

    /// the unbiased (n-1) variance, 0 for less than two observations
    pub fn sample_variance (&self)->f64 {
        if self.n > 1 { self.s / (self.n - 1) as f64 } else { 0.0 }
    }

    pub fn sample_stddev (&self)->f64 {
        self.sample_variance().sqrt()
    }
}

/// install a stderr fmt subscriber whose level is set by RUST_LOG.
/// This is a no-op if there already is a global subscriber
pub fn init_tracing () {
    let _ = tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .with_writer( std::io::stderr)
        .try_init();
}

/// what `enhance_file` did
#[derive(Debug)]
pub struct EnhanceReport {
    pub outcome: Outcome,
    pub before: String, // rendered histogram of the input image
    pub after: String, // rendered histogram of the output image
    pub image: GrayImage, // what got written
}

/// read the PGM at `in_path`, enhance it with either the `forced` or the automatically selected strategy,
/// and write the result to `out_path`. Nothing is written if reading or transforming fails.
/// Degenerate (e.g. blank) images are written as read, including their header max value
pub fn enhance_file (in_path: impl AsRef<Path>, out_path: impl AsRef<Path>, config: &ContrastConfig, forced: Option<Strategy>)->Result<EnhanceReport> {
    let in_path = in_path.as_ref();
    let out_path = out_path.as_ref();
    let name = filestem( &in_path).unwrap_or("image");

    let input = read_pgm( in_path)?;
    info!("read {}x{} image {:?} (max value {})", input.width, input.height, in_path, input.max_value);
    let before = render_sample_histogram( &format!("Pixel Intensity Values: {name}"), &input.samples, config);

    let enhancement = match forced {
        Some(strategy) => enhance_with( &input.samples, strategy)?,
        None => enhance( &input.samples, config)?
    };
    info!("contrast transform: {}", enhancement.outcome);

    // degenerate images keep their header, transformed ones get the max of the new samples
    let image = match enhancement.outcome {
        Outcome::Unchanged => input,
        Outcome::Transformed(_) => input.with_samples( enhancement.samples)?
    };
    let after = render_sample_histogram( &format!("Modified {name}"), &image.samples, config);

    write_pgm( out_path, &image)?;
    info!("wrote {:?}", out_path);

    Ok( EnhanceReport { outcome: enhancement.outcome, before, after, image } )
}
