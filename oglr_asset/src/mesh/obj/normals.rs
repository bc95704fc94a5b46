use glam::Vec3;
use oglr::mesh::RawMesh;

/// Fills in smooth per-position normals.
///
/// Each face contributes its unnormalised normal (so larger faces weigh
/// more) to every position it touches; the sums are normalised and every
/// corner is pointed at the normal of its position. Counter-clockwise
/// winding faces towards the viewer.
pub(crate) fn generate(raw: &mut RawMesh) {
    let mut normals = vec![Vec3::ZERO; raw.positions.len()];
    let position = |index: u32| raw.positions.get(index as usize).copied().map(Vec3::from);

    for face in &raw.faces {
        if face.corners.len() < 3 {
            continue;
        }
        let first = face.corners[0].position;
        let p0 = match position(first) {
            Some(p) => p,
            None => continue,
        };

        for i in 2..face.corners.len() {
            let (a, b) = (face.corners[i - 1].position, face.corners[i].position);
            let (p1, p2) = match (position(a), position(b)) {
                (Some(p1), Some(p2)) => (p1, p2),
                _ => continue,
            };
            let normal = (p1 - p0).cross(p2 - p0);

            for index in [first, a, b] {
                normals[index as usize] += normal;
            }
        }
    }

    for face in raw.faces.iter_mut() {
        for corner in face.corners.iter_mut() {
            corner.normal = Some(corner.position);
        }
    }
    raw.normals = Some(
        normals
            .into_iter()
            .map(|n| n.normalize_or_zero().to_array())
            .collect(),
    );
}

#[cfg(test)]
mod test {
    use super::*;
    use oglr::mesh::{Corner, Face};

    fn corner(position: u32) -> Corner {
        Corner::new(position, None, None)
    }

    #[test]
    fn test_flat_quad() {
        let mut raw = RawMesh {
            positions: vec![
                [0.0, 0.0, 0.0],
                [2.0, 0.0, 0.0],
                [2.0, 2.0, 0.0],
                [0.0, 2.0, 0.0],
            ],
            faces: vec![
                Face::triangle([corner(0), corner(1), corner(2)], None),
                Face::triangle([corner(2), corner(3), corner(0)], None),
            ],
            ..RawMesh::default()
        };

        generate(&mut raw);

        assert_eq!(raw.normals, Some(vec![[0.0, 0.0, 1.0]; 4]));
        assert_eq!(raw.faces[1].corners[1].normal, Some(3));
    }

    #[test]
    fn test_edge_between_two_planes() {
        let mut raw = RawMesh {
            positions: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            faces: vec![
                Face::triangle([corner(0), corner(1), corner(2)], None),
                Face::triangle([corner(0), corner(3), corner(1)], None),
            ],
            ..RawMesh::default()
        };

        generate(&mut raw);

        let normals = raw.normals.unwrap_or_default();
        let expected = 1.0 / 2.0f32.sqrt();
        assert!((normals[0][1] - expected).abs() < 1e-6);
        assert!((normals[0][2] - expected).abs() < 1e-6);
        assert_eq!(normals[2], [0.0, 0.0, 1.0]);
        assert_eq!(normals[3], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_positions_are_skipped() {
        let mut raw = RawMesh {
            positions: vec![[0.0; 3]; 2],
            faces: vec![Face::triangle([corner(0), corner(1), corner(9)], None)],
            ..RawMesh::default()
        };

        generate(&mut raw);
        assert_eq!(raw.normals, Some(vec![[0.0; 3]; 2]));
    }
}
