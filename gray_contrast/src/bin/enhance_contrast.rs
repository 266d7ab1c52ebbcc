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

use std::path::PathBuf;
use gray_common::{define_cli, check_cli, fs::derived_path};
use gray_contrast::{enhance_file, init_tracing, ContrastConfig, Strategy};
use anyhow::Result;

define_cli! { ARGS [about="enhance the contrast of a plain PGM (P2) image and print its histograms"] =
    output: Option<String> [help="output pathname (default is ❬input-stem❭_new.pgm next to the input)", long, short],
    config: Option<String> [help="pathname of RON config with selection thresholds", long, short],
    strategy: Option<String> [help="transform to use instead of automatic selection (equalize, sqrt)", long, short],
    input: String [help="pathname of plain PGM input image"]
}

fn main()->Result<()> {
    init_tracing();
    check_cli!(ARGS);

    if let Err(e) = run() {
        eprintln!("please enter a valid pgm file path as an argument. For example:\n    enhance_contrast /path/filename.pgm");
        return Err(e)
    }
    Ok(())
}

fn run()->Result<()> {
    let config = ContrastConfig::load_or_default( ARGS.config.as_ref())?;
    let forced = match &ARGS.strategy {
        Some(s) => Some( s.parse::<Strategy>()?),
        None => None
    };
    let out_path = match &ARGS.output {
        Some(path) => PathBuf::from( path),
        None => derived_path( &ARGS.input, "_new", "pgm")
    };

    let report = enhance_file( &ARGS.input, &out_path, &config, forced)?;

    println!("{}", report.before);
    println!("{}", report.after);
    println!("applied {}, output written to {}", report.outcome, out_path.display());

    Ok(())
}
