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
use gray_common::{define_cli, check_cli, fs::{derived_path, extension}};
use gray_contrast::{init_tracing, pgm::convert_to_pgm, ContrastError};
use anyhow::Result;

define_cli! { ARGS [about="convert a compressed (png, jpeg, ..) image into a plain PGM (P2) grayscale image"] =
    output: Option<String> [help="output pathname (default is ❬input-stem❭.pgm next to the input, ❬input-stem❭_gray.pgm for pgm inputs)", long, short],
    input: String [help="pathname of image to convert"]
}

fn main()->Result<()> {
    init_tracing();
    check_cli!(ARGS);

    let out_path = match &ARGS.output {
        Some(path) => PathBuf::from( path),
        None if extension( &ARGS.input) == Some("pgm") => derived_path( &ARGS.input, "_gray", "pgm"),
        None => derived_path( &ARGS.input, "", "pgm")
    };
    if extension( &out_path) != Some("pgm") {
        return Err( ContrastError::IllegalArgument( format!("output has to be a *.pgm file: {}", out_path.display())).into())
    }

    let img = convert_to_pgm( &ARGS.input, &out_path)?;
    println!("wrote {}x{} image with max value {} to {}", img.width, img.height, img.max_value, out_path.display());

    Ok(())
}
