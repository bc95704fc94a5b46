mod builder;
mod meta;
mod mtl;
mod normals;
mod parser;

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use oglr_format::{asset::EXTENSION, Material, MeshAsset};

use self::{builder::ObjMeshBuilder, meta::ObjMeta};
use crate::utils;

/// Converts one `.obj` file into an `.oglm` asset inside `output_dir`.
pub(crate) fn process(path: &Path, output_dir: &Path) -> Result<()> {
    let asset = load(path)?;
    save(path, output_dir, &asset)
}

pub(crate) fn load(path: &Path) -> Result<MeshAsset> {
    let meta = parse_meta(path)?;
    let builder = parser::parse(path, meta)
        .with_context(|| format!("Could not parse model: {}", path.display()))?;
    let library = load_libraries(path, &builder);

    let (name, raw, materials) = builder.build_mesh(&library);
    let mesh = oglr::mesh::build(&raw)
        .with_context(|| format!("Could not build mesh: {}", path.display()))?;
    info!(
        "Built {}: {} vertices, {} triangles, {} material ranges",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.material_ranges.len()
    );

    Ok(MeshAsset::new(name, mesh, materials))
}

fn save(path: &Path, output_dir: &Path, asset: &MeshAsset) -> Result<()> {
    let target = utils::combine_path(output_dir, utils::file_name(path)?, EXTENSION);
    let bytes = asset
        .to_bytes()
        .with_context(|| format!("Could not serialize asset: {}", path.display()))?;
    utils::write_file(&target, &bytes)?;
    debug!("Wrote {}", target.display());
    Ok(())
}

/// Reads `<model>.toml`, falling back to `obj.toml` in the same folder.
fn parse_meta(path: &Path) -> Result<ObjMeta> {
    let candidates = [
        path.with_extension("toml"),
        path.with_file_name("obj.toml"),
    ];

    match candidates.iter().find(|c| c.is_file()) {
        Some(candidate) => {
            debug!("Using meta file: {}", candidate.display());
            ObjMeta::parse(candidate)
        }
        None => Ok(ObjMeta::default()),
    }
}

// a library that can't be read leaves its materials at their defaults
fn load_libraries(path: &Path, builder: &ObjMeshBuilder) -> Vec<Material> {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut materials = Vec::new();

    for library in &builder.libraries {
        let library_path = dir.join(library);
        match mtl::load(&library_path) {
            Ok(loaded) => materials.extend(loaded),
            Err(err) => warn!(
                "Could not load material library {}: {}",
                library_path.display(),
                err
            ),
        }
    }
    materials
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{fs, path::PathBuf};

    const CUBE_FACE: &str = "o panel\n\
                             mtllib panel.mtl\n\
                             v 0 0 0\n\
                             v 1 0 0\n\
                             v 1 1 0\n\
                             v 0 1 0\n\
                             vt 0 0\n\
                             vt 1 0\n\
                             vt 1 1\n\
                             vt 0 1\n\
                             vn 0 0 1\n\
                             usemtl front\n\
                             f 1/1/1 2/2/1 3/3/1 4/4/1\n\
                             usemtl back\n\
                             f 4/4/1 3/3/1 2/2/1\n";

    fn scratch_dir(name: &str) -> Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!("oglr_asset_{}_{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    #[test]
    fn test_process() -> Result<()> {
        let dir = scratch_dir("process")?;
        fs::write(dir.join("panel.obj"), CUBE_FACE)?;
        fs::write(dir.join("panel.mtl"), "newmtl back\nKd 0 0 1\n")?;
        fs::write(dir.join("panel.toml"), "flip_uvs = true\n")?;

        process(&dir.join("panel.obj"), &dir)?;
        let asset = MeshAsset::from_file(&dir.join("panel.oglm"))?;

        assert_eq!(asset.name, Some("panel".into()));
        assert_eq!(asset.mesh.vertex_count(), 4);
        assert_eq!(asset.mesh.indices, vec![0, 1, 2, 0, 2, 3, 3, 2, 1]);
        assert_eq!(asset.mesh.material_ranges.len(), 2);
        assert_eq!(asset.materials[0], Material::named("front"));
        assert_eq!(asset.materials[1].diffuse_color, [0.0, 0.0, 1.0]);
        // flipped v of the first texcoord
        assert_eq!(asset.mesh.vertex(0).map(|v| v[7]), Some(1.0));

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_missing_library_and_folder_meta() -> Result<()> {
        let dir = scratch_dir("folder_meta")?;
        fs::write(dir.join("panel.obj"), CUBE_FACE)?;
        fs::write(dir.join("obj.toml"), "triangulate = false\n")?;

        let err = load(&dir.join("panel.obj")).err();
        let message = err.map(|e| format!("{:#}", e)).unwrap_or_default();
        assert!(message.contains("Could not build mesh"), "{}", message);
        assert!(message.contains("4 corners"), "{}", message);

        fs::write(dir.join("obj.toml"), "generate_normals = true\n")?;
        let asset = load(&dir.join("panel.obj"))?;
        assert_eq!(asset.materials[1], Material::named("back"));

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_bad_index_is_reported() -> Result<()> {
        let dir = scratch_dir("bad_index")?;
        fs::write(dir.join("broken.obj"), "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n")?;

        assert!(load(&dir.join("broken.obj")).is_err());

        fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
