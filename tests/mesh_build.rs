use oglr::mesh::{build, Corner, Face, MeshError, MeshField, RawMesh};

fn corner(position: u32, normal: u32, texcoord: u32) -> Corner {
    Corner::new(position, Some(normal), Some(texcoord))
}

fn grid(size: u32) -> RawMesh {
    let row = size + 1;
    let mut raw = RawMesh {
        normals: Some(vec![[0.0, 0.0, 1.0]]),
        texcoords: Some(Vec::new()),
        material_count: 2,
        ..RawMesh::default()
    };
    for y in 0..row {
        for x in 0..row {
            raw.positions.push([x as f32, y as f32, 0.0]);
            raw.texcoords
                .get_or_insert_with(Vec::new)
                .push([x as f32 / size as f32, y as f32 / size as f32]);
        }
    }
    for y in 0..size {
        for x in 0..size {
            let i = y * row + x;
            let material = Some((y * size + x) % 2);
            let (a, b, c, d) = (i, i + 1, i + row + 1, i + row);
            raw.faces.push(Face::triangle(
                [corner(a, 0, a), corner(b, 0, b), corner(c, 0, c)],
                material,
            ));
            raw.faces.push(Face::triangle(
                [corner(c, 0, c), corner(d, 0, d), corner(a, 0, a)],
                material,
            ));
        }
    }
    raw
}

#[test]
fn test_unshared_corners_emit_a_vertex_each() -> Result<(), MeshError> {
    let raw = RawMesh {
        positions: vec![[0.0; 3]; 6],
        faces: vec![
            Face::triangle(
                [
                    Corner::new(0, None, None),
                    Corner::new(1, None, None),
                    Corner::new(2, None, None),
                ],
                None,
            ),
            Face::triangle(
                [
                    Corner::new(3, None, None),
                    Corner::new(4, None, None),
                    Corner::new(5, None, None),
                ],
                None,
            ),
        ],
        ..RawMesh::default()
    };

    let mesh = build(&raw)?;
    assert_eq!(mesh.vertex_count(), 3 * raw.face_count());
    assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn test_grid_is_welded() -> Result<(), MeshError> {
    let raw = grid(4);
    let mesh = build(&raw)?;

    assert_eq!(mesh.vertex_count(), 25);
    assert_eq!(mesh.indices.len(), 4 * 4 * 6);
    assert_eq!(mesh.indices.len() % 3, 0);
    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertex_count()));
    Ok(())
}

#[test]
fn test_ranges_partition_the_index_buffer() -> Result<(), MeshError> {
    let mesh = build(&grid(3))?;

    let mut next = 0;
    for range in &mesh.material_ranges {
        assert_eq!(range.index_start, next);
        assert!(range.index_count > 0);
        assert_eq!(range.index_count % 3, 0);
        next = range.index_end().expect("range end fits in u32");
    }
    assert_eq!(next as usize, mesh.indices.len());

    // every quad flips the material, so no two neighbours share one
    assert_eq!(mesh.material_ranges.len(), 9);
    for pair in mesh.material_ranges.windows(2) {
        assert_ne!(pair[0].material, pair[1].material);
    }
    Ok(())
}

#[test]
fn test_build_is_deterministic() -> Result<(), MeshError> {
    let raw = grid(5);
    assert_eq!(build(&raw)?, build(&raw)?);
    Ok(())
}

#[test]
fn test_errors_name_the_face() {
    let mut raw = grid(2);
    raw.faces[5].corners[1].texcoord = Some(100);

    assert_eq!(
        build(&raw),
        Err(MeshError::MalformedMesh {
            face_index: 5,
            field: MeshField::Texcoord,
        })
    );

    let mut raw = grid(2);
    raw.faces[2].corners.pop();
    assert_eq!(
        build(&raw),
        Err(MeshError::UnsupportedTopology {
            face_index: 2,
            corner_count: 2,
        })
    );
}
