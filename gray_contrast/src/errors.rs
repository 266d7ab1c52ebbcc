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

use gray_common::{define_error, fs::ConfigError};

pub type Result<T> = std::result::Result<T, ContrastError>;

define_error!{ pub ContrastError =
    MalformedInput(String) : "malformed input: {0}",
    DegenerateImage(String) : "degenerate image: {0}",
    IllegalArgument(String) : "illegal argument: {0}",
    IOFailure(String, #[source] std::io::Error) : "IO failure on {0}: {1}",
    ImageError(#[from] image::ImageError) : "image error: {0}",
    ConfigError(#[from] ConfigError) : "config error: {0}"
}

impl ContrastError {
    pub fn is_degenerate (&self)->bool {
        matches!( self, ContrastError::DegenerateImage(_))
    }
}

pub(crate) fn malformed (msg: impl Into<String>)->ContrastError {
    ContrastError::MalformedInput( msg.into())
}

pub(crate) fn io_failure (path: &std::path::Path, e: std::io::Error)->ContrastError {
    ContrastError::IOFailure( path.display().to_string(), e)
}
