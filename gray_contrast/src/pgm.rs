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

//! reading and writing of plain (ASCII) PGM images:
//! ```text
//! P2
//! # optional comments up to the end of the line
//! ❬width❭ ❬height❭
//! ❬max value❭
//! ❬width*height whitespace separated samples❭
//! ```

use std::{fs::{self,File}, io::{BufWriter,Write}, path::Path, str::SplitWhitespace};
use image::{DynamicImage,GenericImageView};
use crate::{Sample, errors::{ContrastError,Result,malformed,io_failure}};

pub const PGM_MAGIC: &str = "P2";

const EXPECTED_FORM: &str = "expected 'P2 ❬width❭ ❬height❭ ❬max value❭ ❬samples..❭'";

/// a single channel image with row-major samples in `0..=max_value`
#[derive(Debug,Clone,PartialEq)]
pub struct GrayImage {
    pub width: u32,
    pub height: u32,
    pub max_value: Sample,
    pub samples: Vec<Sample>,
}

impl GrayImage {
    pub fn new (width: u32, height: u32, max_value: Sample, samples: Vec<Sample>)->Result<Self> {
        let img = GrayImage { width, height, max_value, samples };
        img.check()?;
        Ok(img)
    }

    pub fn n_pixels (&self)->usize { self.width as usize * self.height as usize }

    /// image with our dimensions but new samples. The max value is the max of the new samples
    /// (at least 1 since a zero max value is not a valid PGM header)
    pub fn with_samples (&self, samples: Vec<Sample>)->Result<Self> {
        let max_value = samples.iter().copied().max().unwrap_or(0).max(1);
        GrayImage::new( self.width, self.height, max_value, samples)
    }

    fn check (&self)->Result<()> {
        if self.max_value == 0 {
            return Err( malformed( "max value has to be in 1..=65535"))
        }
        if self.samples.len() != self.n_pixels() {
            return Err( malformed( format!("{}x{} image requires {} samples, got {}", self.width, self.height, self.n_pixels(), self.samples.len())))
        }
        if let Some(s) = self.samples.iter().find( |s| **s > self.max_value) {
            return Err( malformed( format!("sample {} exceeds max value {}", s, self.max_value)))
        }
        Ok(())
    }
}

/* #region reading ***************************************************************************************************/

pub fn read_pgm (path: impl AsRef<Path>)->Result<GrayImage> {
    let path = path.as_ref();
    let text = fs::read_to_string( path).map_err( |e| io_failure( path, e))?;
    parse_pgm( &text)
}

pub fn parse_pgm (text: &str)->Result<GrayImage> {
    let content = strip_comments( text);
    let mut tokens = content.split_whitespace();

    match tokens.next() {
        Some(PGM_MAGIC) => {}
        Some(other) => return Err( malformed( format!("not a plain PGM (magic '{other}'), {EXPECTED_FORM}"))),
        None => return Err( malformed( format!("empty input, {EXPECTED_FORM}")))
    }

    let width: u32 = next_value( &mut tokens, "width")?;
    let height: u32 = next_value( &mut tokens, "height")?;
    let max_value: Sample = next_value( &mut tokens, "max value")?;

    let len = width as usize * height as usize;
    let mut samples: Vec<Sample> = Vec::with_capacity( len.min( content.len()));
    for tok in tokens {
        samples.push( parse_token( tok, "sample")?);
    }

    GrayImage::new( width, height, max_value, samples)
}

/// remove everything from '#' to the end of the respective line
fn strip_comments (text: &str)->String {
    let mut s = String::with_capacity( text.len());
    for line in text.lines() {
        let data = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line
        };
        s.push_str( data);
        s.push('\n');
    }
    s
}

fn next_value<T: std::str::FromStr> (tokens: &mut SplitWhitespace, what: &str)->Result<T> {
    let tok = tokens.next().ok_or_else( || malformed( format!("missing {what}, {EXPECTED_FORM}")))?;
    parse_token( tok, what)
}

fn parse_token<T: std::str::FromStr> (tok: &str, what: &str)->Result<T> {
    tok.parse::<T>().map_err( |_| malformed( format!("invalid {what} '{tok}', {EXPECTED_FORM}")))
}

/* #endregion reading */

/* #region writing ***************************************************************************************************/

pub fn format_pgm (img: &GrayImage)->String {
    use std::fmt::Write as _;

    let mut s = String::with_capacity( 16 + img.samples.len() * 4);
    let _ = write!( s, "{}\n{} {}\n{}\n", PGM_MAGIC, img.width, img.height, img.max_value);
    for v in &img.samples {
        let _ = writeln!( s, "{v}");
    }
    s
}

/// write `img` as plain PGM. Inconsistent images are rejected before the file is created
pub fn write_pgm (path: impl AsRef<Path>, img: &GrayImage)->Result<()> {
    let path = path.as_ref();
    img.check()?;

    let file = File::create( path).map_err( |e| io_failure( path, e))?;
    let mut w = BufWriter::new( file);
    w.write_all( format_pgm( img).as_bytes()).map_err( |e| io_failure( path, e))?;
    w.flush().map_err( |e| io_failure( path, e))
}

/* #endregion writing */

/* #region conversion ************************************************************************************************/

/// turn a decoded (compressed) image into a plain gray image. Color images are reduced to luma,
/// the max value is the brightest pixel
pub fn to_gray_image (img: &DynamicImage)->Result<GrayImage> {
    let (width, height) = img.dimensions();
    let luma = img.to_luma8();
    let samples: Vec<Sample> = luma.as_raw().iter().map( |v| *v as Sample).collect();
    let max_value = samples.iter().copied().max().unwrap_or(0).max(1);

    GrayImage::new( width, height, max_value, samples)
}

fn is_same_file (a: &Path, b: &Path)->bool {
    match (fs::canonicalize( a), fs::canonicalize( b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false
    }
}

/// convert a compressed image file (png, jpeg, ..) into a plain PGM file. The input file is never overwritten
pub fn convert_to_pgm (in_path: impl AsRef<Path>, out_path: impl AsRef<Path>)->Result<GrayImage> {
    let (in_path, out_path) = (in_path.as_ref(), out_path.as_ref());
    if is_same_file( in_path, out_path) {
        return Err( ContrastError::IllegalArgument( format!("output would overwrite input {}", in_path.display())))
    }

    let input_img = image::open( in_path)?;
    let gray_img = to_gray_image( &input_img)?;
    write_pgm( out_path, &gray_img)?;
    Ok( gray_img )
}

/* #endregion conversion */
