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

use gray_common::{define_cli, check_cli, fs::filestem};
use gray_contrast::{init_tracing, read_pgm, render_sample_histogram, select_strategy, ContrastConfig};
use anyhow::Result;

define_cli! { ARGS [about="print the gray level histogram of a plain PGM (P2) image"] =
    bins: Option<usize> [help="number of histogram bins (overrides config)", long, short],
    config: Option<String> [help="pathname of RON config", long, short],
    input: String [help="pathname of plain PGM input image"]
}

fn main()->Result<()> {
    init_tracing();
    check_cli!(ARGS);

    let mut config = ContrastConfig::load_or_default( ARGS.config.as_ref())?;
    if let Some(n) = ARGS.bins { config.report_bins = n }

    let img = read_pgm( &ARGS.input)?;
    let name = filestem( &ARGS.input).unwrap_or("image");

    println!("{}", render_sample_histogram( &format!("Pixel Intensity Values: {name}"), &img.samples, &config));
    println!("{}x{} pixels, max value {}, suggested transform: {}", img.width, img.height, img.max_value, select_strategy( &img.samples, &config));

    Ok(())
}
