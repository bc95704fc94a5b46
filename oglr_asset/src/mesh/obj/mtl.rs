use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use log::{debug, info, warn};
use oglr_format::Material;

use super::parser::{parse_numbers, split_statement, ParserError};

#[derive(thiserror::Error, Debug)]
pub enum MaterialError {
    #[error("Failed to read material library.")]
    Io(#[from] io::Error),
    #[error("Invalid value for \"{token}\".")]
    Value {
        token: String,
        #[source]
        source: ParserError,
    },
}

/// Reads all materials of a `.mtl` file, in file order.
pub(crate) fn load(filepath: &Path) -> Result<Vec<Material>, MaterialError> {
    let file = fs::File::open(filepath)?;
    info!("Loading material library: {}", filepath.display());
    parse_reader(io::BufReader::new(file))
}

pub(crate) fn parse_reader(reader: impl BufRead) -> Result<Vec<Material>, MaterialError> {
    let mut materials: Vec<Material> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (token, value) = split_statement(line);
        if token == "newmtl" {
            materials.push(Material::named(value));
            continue;
        }
        if token == "#" {
            continue;
        }

        let material = match materials.last_mut() {
            Some(material) => material,
            None => {
                warn!("\"{}\" outside of a material. Ignoring.", token);
                continue;
            }
        };
        parse_token(token, value, material).map_err(|source| MaterialError::Value {
            token: token.into(),
            source,
        })?;
    }

    Ok(materials)
}

fn parse_token(token: &str, value: &str, material: &mut Material) -> Result<(), ParserError> {
    match token {
        "Kd" => material.diffuse_color = parse_numbers(value)?,
        "Ks" => material.specular_color = parse_numbers(value)?,
        "Ns" => {
            let [shininess] = parse_numbers(value)?;
            material.shininess = shininess;
        }
        "map_Kd" => material.diffuse_texture = Some(value.into()),
        "map_Ks" => material.specular_texture = Some(value.into()),
        // ambient, emissive, transparency, optical density and illumination model
        "Ka" | "Ke" | "d" | "Tr" | "Ni" | "illum" => debug!("Ignoring \"{}\"", token),
        _ => warn!("Unsupported material token: \"{}\"", token),
    };
    Ok(())
}
