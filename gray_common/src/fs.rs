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

use std::fs;
use std::path::{Path,PathBuf};
use serde::Deserialize;

use crate::{define_error,map_to_opaque_error};

define_error!{ pub ConfigError =
    IOError( String, #[source] std::io::Error) : "failed to read config {0}: {1}",
    ParseError(String) : "invalid config: {0}"
}

map_to_opaque_error!{ ron::error::SpannedError => ConfigError::ParseError }

pub fn extension<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().extension().and_then(|ostr| ostr.to_str())
}

pub fn filestem <'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_stem().and_then(|ostr| ostr.to_str())
}

/// sibling path of `path` with filename "❬stem❭❬suffix❭.❬ext❭"
/// `derived_path("img/moon.pgm", "_new", "pgm")` yields "img/moon_new.pgm". A path without a stem
/// (e.g. "/" or "..") uses "out" as stem
pub fn derived_path (path: impl AsRef<Path>, suffix: &str, ext: &str)->PathBuf {
    let path = path.as_ref();
    let stem = filestem( &path).unwrap_or("out");
    let fname = format!("{stem}{suffix}.{ext}");

    match path.parent() {
        Some(dir) => dir.join( fname),
        None => PathBuf::from( fname)
    }
}

/// read a RON file into the config struct `C`
pub fn load_config_path<C,P> (path: P)->Result<C,ConfigError> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let path = path.as_ref();
    let data = fs::read( path).map_err(|e| ConfigError::IOError( path.display().to_string(), e))?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}
