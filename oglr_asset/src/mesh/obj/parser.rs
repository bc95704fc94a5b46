use std::fs;
use std::io::{self, BufRead};
use std::{num, path::Path};

use log::{debug, info, warn};

use super::{builder::*, meta::ObjMeta};

#[derive(thiserror::Error, Debug)]
pub enum ParserError {
    #[error("Failed to parse float.")]
    ParseFloat(#[from] num::ParseFloatError),
    #[error("Failed to parse integer.")]
    ParseInt(#[from] num::ParseIntError),
    #[error("Failed to read model.")]
    Io(#[from] io::Error),
    #[error("Failed to parse face.")]
    ParseFace,
    #[error("Expected {expected} numbers, found {found}.")]
    MissingComponents { expected: usize, found: usize },
    #[error("Invalid face index {0}.")]
    InvalidIndex(i64),
}

// parses wavefront obj (https://en.wikipedia.org/wiki/Wavefront_.obj_file)
// the implementation is very forgiving and should work with most .obj files
pub(crate) fn parse(filepath: &Path, meta: ObjMeta) -> Result<ObjMeshBuilder, ParserError> {
    let file = fs::File::open(filepath)?;
    info!("Loading mesh: {}", filepath.display());
    parse_reader(io::BufReader::new(file), meta)
}

pub(crate) fn parse_reader(
    reader: impl BufRead,
    meta: ObjMeta,
) -> Result<ObjMeshBuilder, ParserError> {
    let mut builder = ObjMeshBuilder::new(meta);

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!("Parsing: \"{}\"", line);

        let (token, value) = split_statement(line);
        parse_token(token, value, &mut builder)?;
    }

    Ok(builder)
}

/// Splits a line into its leading keyword and the rest.
pub(super) fn split_statement(line: &str) -> (&str, &str) {
    if line.starts_with('#') {
        return ("#", line[1..].trim());
    }
    match line.split_once(char::is_whitespace) {
        Some((token, value)) => (token, value.trim()),
        None => (line, ""),
    }
}

fn parse_token(token: &str, value: &str, builder: &mut ObjMeshBuilder) -> Result<(), ParserError> {
    match token {
        // comment
        "#" => debug!("Comment: {:?}", value),
        // material library
        "mtllib" => builder.add_library(value),
        // material of the following faces
        "usemtl" => builder.use_material(value),
        // name
        "o" => builder.set_name(value),
        // group
        "g" => builder.set_group(value),
        // vertex
        "v" => builder.push_vertex(parse_vertex(value)?),
        // texture coordinates
        "vt" => builder.push_uv(parse_numbers(value)?),
        // vertex normals
        "vn" => builder.push_normal(parse_numbers(value)?),
        "f" => builder.push_face(parse_face(value)?)?,
        // parameter space vertices
        "vp" => warn!("Parameter space vertices not supported. Ignoring."),
        // smoothing groups
        "s" => warn!("Smoothing groups not supported. Ignoring."),
        _ => warn!("Found invalid token: \"{}\"", token),
    };

    Ok(())
}

// the position; a trailing vertex colour is ignored
fn parse_vertex(value: &str) -> Result<[f32; 3], ParserError> {
    let numbers = parse_floats(value)?;
    if numbers.len() == 6 {
        debug!("Ignoring vertex colour");
    }
    take(&numbers)
}

/// Parses the first `N` whitespace separated numbers; extra ones are ignored.
pub(super) fn parse_numbers<const N: usize>(value: &str) -> Result<[f32; N], ParserError> {
    take(&parse_floats(value)?)
}

fn parse_floats(value: &str) -> Result<Vec<f32>, num::ParseFloatError> {
    value.split_whitespace().map(|x| x.parse()).collect()
}

fn take<const N: usize>(numbers: &[f32]) -> Result<[f32; N], ParserError> {
    if numbers.len() < N {
        return Err(ParserError::MissingComponents {
            expected: N,
            found: numbers.len(),
        });
    }
    let mut out = [0.0; N];
    out.copy_from_slice(&numbers[..N]);
    Ok(out)
}

// parses face indices separated by whitespace, each a triplet separated by slashes
fn parse_face(value: &str) -> Result<ObjFace, ParserError> {
    let face_i = value
        .split_whitespace()
        .map(parse_face_index)
        .collect::<Result<_, _>>()?;
    Ok(ObjFace { face_i })
}

// parses a single face index separated by slashes
fn parse_face_index(value: &str) -> Result<ObjFaceIndex, ParserError> {
    let triplet = parse_triplet(value)?;

    Ok(ObjFaceIndex {
        vert_i: triplet[0].ok_or(ParserError::ParseFace)?,
        uv_i: triplet[1],
        normal_i: triplet[2],
    })
}

// parse a triplet separated by slashes
fn parse_triplet(value: &str) -> Result<Vec<Option<i64>>, num::ParseIntError> {
    let mut ret = vec![None; 3];

    for (a, b) in ret.iter_mut().zip(value.split('/')) {
        *a = if b.is_empty() { None } else { Some(b.parse()?) }
    }

    Ok(ret)
}
