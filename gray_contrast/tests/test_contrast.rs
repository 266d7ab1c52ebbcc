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
#![allow(unused)]

use gray_contrast::{
    Sample, Stats, ContrastConfig, ContrastError,
    contrast::{Strategy, Outcome, shape_ratio, select_strategy, cdf_equalize, sqrt_contrast, signed_sqrt,
               equalization_lut, enhance, enhance_with},
    histogram::{level_histogram, bin_histogram, sample_bins},
};

// run with "cargo test test_xx -- --nocapture"

/// deterministic pseudo random samples in 0..=max (LCG)
fn lcg_samples (n: usize, max: Sample, seed: u64)->Vec<Sample> {
    let mut x = seed;
    (0..n).map( |_| {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((x >> 33) % (max as u64 + 1)) as Sample
    }).collect()
}

fn skewed_samples ()->Vec<Sample> {
    // mostly dark with a thin bright tail
    (0..2000u32).map( |i| if i % 10 == 0 { (100 + (i % 150)) as Sample } else { (i % 40) as Sample }).collect()
}

fn test_sequences ()->Vec<Vec<Sample>> {
    vec![
        (0..=255).collect(),
        (0..=1000).map( |i| (i / 3) as Sample).collect(),
        lcg_samples( 4096, 255, 42),
        lcg_samples( 1000, 4095, 7),
        skewed_samples(),
        [vec![0;50], vec![255;50]].concat(),
        vec![3, 200, 3, 7, 9, 150, 150, 3],
    ]
}

#[test]
fn test_lengths_and_range () {
    let config = ContrastConfig::default();

    for samples in test_sequences() {
        let max = *samples.iter().max().unwrap();

        for res in [cdf_equalize( &samples), sqrt_contrast( &samples)] {
            let out = res.unwrap();
            assert_eq!( out.len(), samples.len());
            assert!( out.iter().all( |v| *v <= max));
        }

        let e = enhance( &samples, &config).unwrap();
        println!("{} samples (max {}) -> {}", samples.len(), max, e.outcome);
        assert_eq!( e.samples.len(), samples.len());
        assert!( e.samples.iter().all( |v| *v <= max));
    }
}

#[test]
fn test_select_two_levels () {
    let samples: Vec<Sample> = [vec![0;50], vec![255;50]].concat();
    assert_eq!( select_strategy( &samples, &ContrastConfig::default()), Strategy::SquareRoot);
}

#[test]
fn test_select_perfectly_uniform () {
    let samples: Vec<Sample> = (0..=255).collect();
    let hist = level_histogram( &samples);
    let bins = bin_histogram( &hist, 0, 255, 16);

    assert_eq!( bins.len(), 16);
    assert!( bins.iter().all( |b| b.count == 16));
    assert!( shape_ratio( &bins).is_infinite());
    assert_eq!( select_strategy( &samples, &ContrastConfig::default()), Strategy::SquareRoot);
}

#[test]
fn test_select_spike_plus_spread () {
    let mut samples: Vec<Sample> = vec![10; 900];
    samples.extend( (0..100u32).map( |i| (i * 255 / 99) as Sample));

    // levels 0..=255 in 16 bins of width 16: the first bin holds the spike (900) plus 7 spread samples,
    // the remaining 93 are distributed over the other 15 bins. Mean is 62.5, the sample stddev is > 200
    let hist = level_histogram( &samples);
    let bins = bin_histogram( &hist, 0, 255, 16);
    assert_eq!( bins[0].count, 907);
    assert_eq!( bins.iter().map( |b| b.count).sum::<u64>(), 1000);

    let ratio = shape_ratio( &bins);
    println!("shape ratio: {ratio}");
    assert!( ratio < 0.3);

    assert_eq!( select_strategy( &samples, &ContrastConfig::default()), Strategy::Equalize);
}

#[test]
fn test_select_flat_random () {
    // many levels and a roughly flat but not perfectly uniform histogram
    let samples = lcg_samples( 4096, 255, 42);
    let bins = sample_bins( &samples, 16);

    let ratio = shape_ratio( &bins);
    println!("shape ratio: {ratio}");
    assert!( ratio.is_finite());
    assert!( ratio > 5.0);

    assert_eq!( select_strategy( &samples, &ContrastConfig::default()), Strategy::SquareRoot);
}

#[test]
fn test_select_distinct_level_threshold () {
    // a dominant dark level plus one sample for each of the other levels
    let skewed = |n_levels: Sample| -> Vec<Sample> {
        let mut samples = vec![0; 1000];
        samples.extend( 1..n_levels);
        samples
    };
    let config = ContrastConfig::default();

    assert_eq!( select_strategy( &skewed(9), &config), Strategy::SquareRoot);
    assert_eq!( select_strategy( &skewed(10), &config), Strategy::Equalize);
}

#[test]
fn test_select_configurable_thresholds () {
    let samples: Vec<Sample> = (0..=255).collect();

    // fewer levels than required
    let config = ContrastConfig { min_distinct_levels: 2000, ..ContrastConfig::default() };
    assert_eq!( select_strategy( &lcg_samples( 4096, 1023, 3), &config), Strategy::SquareRoot);

    // a ratio threshold nothing can exceed still cannot beat a zero stddev
    let config = ContrastConfig { uniformity_ratio: f64::MAX, ..ContrastConfig::default() };
    assert_eq!( select_strategy( &samples, &config), Strategy::SquareRoot);
    assert_eq!( select_strategy( &skewed_samples(), &config), Strategy::Equalize);
}

#[test]
fn test_single_spike_is_degenerate () {
    let samples: Vec<Sample> = vec![128; 64];

    match cdf_equalize( &samples) {
        Err(ContrastError::DegenerateImage(msg)) => println!("cdf: {msg}"),
        other => panic!("expected DegenerateImage, got {other:?}")
    }
    assert!( sqrt_contrast( &samples).unwrap_err().is_degenerate());

    let e = enhance( &samples, &ContrastConfig::default()).unwrap();
    assert_eq!( e.outcome, Outcome::Unchanged);
    assert_eq!( e.samples, samples);

    let e = enhance_with( &samples, Strategy::Equalize).unwrap();
    assert_eq!( e.outcome, Outcome::Unchanged);
}

#[test]
fn test_empty_is_degenerate () {
    assert!( cdf_equalize( &[]).unwrap_err().is_degenerate());
    assert!( sqrt_contrast( &[]).unwrap_err().is_degenerate());
    assert!( equalization_lut( &[]).unwrap_err().is_degenerate());

    let e = enhance( &[], &ContrastConfig::default()).unwrap();
    assert_eq!( e.outcome, Outcome::Unchanged);
    assert!( e.samples.is_empty());
}

#[test]
fn test_equalize_uniform_is_stable () {
    let samples: Vec<Sample> = (0..1024).map( |i| (i % 256) as Sample).collect();
    let out = cdf_equalize( &samples).unwrap();

    let before = sample_bins( &samples, 16);
    let after = sample_bins( &out, 16);
    assert_eq!( before.len(), after.len());
    for (b,a) in before.iter().zip( after.iter()) {
        assert!( b.count.abs_diff( a.count) <= 4, "{b} vs {a}");
    }
}

#[test]
fn test_equalization_lut () {
    // levels 0..=4 with counts 1,0,2,0,1 -> cdf 1,1,3,3,4
    let lut = equalization_lut( &[1,0,2,0,1]).unwrap();
    // (cdf-1)/3 * 4 = 0, 0, 2.67, 2.67, 4
    assert_eq!( lut, vec![0,0,3,3,4]);
    assert!( lut.windows(2).all( |w| w[0] <= w[1]));
}

#[test]
fn test_rounding_is_half_even () {
    // levels 0,1,2 map to -1,0,1 and back to 0,1,2
    assert_eq!( sqrt_contrast( &[0,1,2]).unwrap(), vec![0,1,2]);

    // cdf 1,2,3,3,3,3 -> level 1 normalizes to 0.5, times max level 5 is 2.5
    let lut = equalization_lut( &[1,1,1,0,0,0]).unwrap();
    assert_eq!( lut, vec![0,2,5,5,5,5]);

    // cdf 1,2,3,3 -> level 1 normalizes to 0.5, times max level 3 is 1.5
    let lut = equalization_lut( &[1,1,1,0]).unwrap();
    assert_eq!( lut, vec![0,2,3,3]);
}

#[test]
fn test_signed_sqrt () {
    assert_eq!( signed_sqrt( 0.25), 0.5);
    assert_eq!( signed_sqrt( -0.25), -0.5);
    assert_eq!( signed_sqrt( 0.0), 0.0);
    assert_eq!( signed_sqrt( -1.0), -1.0);
}

#[test]
fn test_sqrt_monotonic_within_halves () {
    let samples = lcg_samples( 2000, 255, 99);
    let out = sqrt_contrast( &samples).unwrap();

    let mut sorted = samples.clone();
    sorted.sort();
    let median = sorted[sorted.len() / 2];

    let mut pairs: Vec<(Sample,Sample)> = samples.iter().copied().zip( out.iter().copied()).collect();
    pairs.sort();

    let lower: Vec<Sample> = pairs.iter().filter( |(s,_)| *s <= median).map( |(_,o)| *o).collect();
    let upper: Vec<Sample> = pairs.iter().filter( |(s,_)| *s >= median).map( |(_,o)| *o).collect();
    assert!( lower.windows(2).all( |w| w[0] <= w[1]));
    assert!( upper.windows(2).all( |w| w[0] <= w[1]));
}

#[test]
fn test_4x4_end_to_end () {
    let samples: Vec<Sample> = [vec![10;12], vec![200;4]].concat();

    let e = enhance( &samples, &ContrastConfig::default()).unwrap();
    assert_eq!( e.outcome, Outcome::Transformed(Strategy::SquareRoot));
    assert_eq!( e.samples, [vec![0;12], vec![200;4]].concat());

    // cdf at level 10 is 12 of 16 samples
    let out = cdf_equalize( &samples).unwrap();
    assert_eq!( out, [vec![150;12], vec![200;4]].concat());
}

#[test]
fn test_strategy_from_str () {
    assert_eq!( "equalize".parse::<Strategy>().unwrap(), Strategy::Equalize);
    assert_eq!( "SQRT".parse::<Strategy>().unwrap(), Strategy::SquareRoot);
    assert!( matches!( "clahe".parse::<Strategy>(), Err(ContrastError::IllegalArgument(_))));
}

#[test]
fn test_stats () {
    let mut stats = Stats::<f64>::new();
    for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] { stats.add(v) }

    assert_eq!( stats.n, 8);
    assert_eq!( stats.min, 2.0);
    assert_eq!( stats.max, 9.0);
    assert!( (stats.mean - 5.0).abs() < 1e-12);
    assert!( (stats.variance - 4.0).abs() < 1e-12);
    assert!( (stats.sample_variance() - 32.0/7.0).abs() < 1e-12);
}
