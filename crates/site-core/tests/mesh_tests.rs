use glam::Vec3;
use site_core::mesh::{Mesh, MeshError, MESH_MAGIC};

fn blob_from(mesh: &Mesh) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&MESH_MAGIC);
    out.extend_from_slice(&(mesh.positions.len() as u32).to_le_bytes());
    out.extend_from_slice(&(mesh.indices.len() as u32).to_le_bytes());
    for p in &mesh.positions {
        for v in p.to_array() {
            out.extend_from_slice(&v.to_le_bytes());
        }
    }
    for n in &mesh.normals {
        for v in n.to_array() {
            out.extend_from_slice(&v.to_le_bytes());
        }
    }
    for i in &mesh.indices {
        out.extend_from_slice(&i.to_le_bytes());
    }
    out
}

fn triangle() -> Mesh {
    Mesh {
        positions: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        normals: vec![Vec3::Z; 3],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn parses_a_wellformed_blob() {
    let mesh = Mesh::from_blob(&blob_from(&triangle())).unwrap();
    assert_eq!(mesh.positions.len(), 3);
    assert_eq!(mesh.normals.len(), 3);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.positions[1], Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn rejects_bad_magic() {
    let mut blob = blob_from(&triangle());
    blob[0] = b'X';
    assert!(matches!(Mesh::from_blob(&blob), Err(MeshError::BadMagic)));
}

#[test]
fn rejects_truncated_blob() {
    let blob = blob_from(&triangle());
    let cut = &blob[..blob.len() - 5];
    assert!(matches!(
        Mesh::from_blob(cut),
        Err(MeshError::Truncated { .. })
    ));
}

#[test]
fn rejects_header_counts_larger_than_the_blob() {
    // A 16-byte blob claiming u32::MAX vertices must fail the length check
    // without ever allocating for the claimed count.
    let mut blob = Vec::new();
    blob.extend_from_slice(&MESH_MAGIC);
    blob.extend_from_slice(&u32::MAX.to_le_bytes());
    blob.extend_from_slice(&0u32.to_le_bytes());
    assert!(matches!(
        Mesh::from_blob(&blob),
        Err(MeshError::Truncated { .. })
    ));

    let mut blob = blob_from(&triangle());
    let index_count_at = 8;
    blob[index_count_at..index_count_at + 4].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(
        Mesh::from_blob(&blob),
        Err(MeshError::Truncated { .. })
    ));
}

#[test]
fn rejects_out_of_range_index() {
    let mut mesh = triangle();
    mesh.indices[2] = 9;
    assert!(matches!(
        Mesh::from_blob(&blob_from(&mesh)),
        Err(MeshError::IndexOutOfRange { index: 9, .. })
    ));
}

#[test]
fn torus_knot_topology_is_consistent() {
    let knot = Mesh::torus_knot(1.0, 0.3, 100, 16, 2, 3);
    assert_eq!(knot.positions.len(), 101 * 17);
    assert_eq!(knot.normals.len(), knot.positions.len());
    assert_eq!(knot.indices.len(), 100 * 16 * 6);
    let max = *knot.indices.iter().max().unwrap();
    assert!((max as usize) < knot.positions.len());
    for n in &knot.normals {
        assert!((n.length() - 1.0).abs() < 1e-3);
    }
}

#[test]
fn normalize_centers_and_fits_width() {
    let mut knot = Mesh::torus_knot(1.0, 0.3, 60, 8, 2, 3);
    knot.normalize_to_width(6.0);
    let (min, max) = knot.bounds();
    assert!((max.x - min.x - 6.0).abs() < 1e-3);
    let center = (min + max) * 0.5;
    assert!(center.length() < 1e-3);
}
