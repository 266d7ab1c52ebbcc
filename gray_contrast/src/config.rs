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

use std::path::Path;
use serde::{Serialize,Deserialize};
use gray_common::fs::load_config_path;
use crate::errors::Result;

/// tuning values for strategy selection and histogram reporting.
/// Fields missing in a config file fall back to their defaults, e.g. `( uniformity_ratio: 4.0 )` is a valid config
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct ContrastConfig {
    pub min_distinct_levels: usize, // fewer occupied gray levels select the square root transform
    pub uniformity_ratio: f64, // coarse bin mean/stddev above this is considered already equalized
    pub shape_bins: usize, // number of coarse bins for the distribution shape test
    pub report_bins: usize, // number of bins in printed histograms
    pub bar_width: usize, // max number of bar chars in printed histograms
}

impl Default for ContrastConfig {
    fn default()->Self {
        ContrastConfig {
            min_distinct_levels: 10,
            uniformity_ratio: 5.0,
            shape_bins: 16,
            report_bins: 16,
            bar_width: 70,
        }
    }
}

impl ContrastConfig {
    pub fn load (path: impl AsRef<Path>)->Result<Self> {
        Ok( load_config_path( path)? )
    }

    /// default config if there is no path
    pub fn load_or_default (maybe_path: Option<impl AsRef<Path>>)->Result<Self> {
        match maybe_path {
            Some(path) => Self::load( path),
            None => Ok( Self::default() )
        }
    }
}
