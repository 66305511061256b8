//! Unit-cube geometry shared by both renderers.

/// Vertices per cube (6 faces x 2 triangles).
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Unit cube centered at the origin, extents -0.5..0.5 per axis.
///
/// Each vertex is `[px, py, pz, nx, ny, nz, u, v]`. The top face maps uv to
/// the XZ footprint so the bill artwork lands face-up; side faces map v along
/// the height so the edge hairlines stack vertically.
pub fn unit_cube_vertices() -> Vec<[f32; 8]> {
    let mut out = Vec::with_capacity(CUBE_VERTEX_COUNT);
    // corners in draw order, two triangles per face
    let mut face = |corners: [([f32; 3], [f32; 2]); 4], normal: [f32; 3]| {
        for &i in &[0usize, 1, 2, 0, 2, 3] {
            let (p, uv) = corners[i];
            out.push([p[0], p[1], p[2], normal[0], normal[1], normal[2], uv[0], uv[1]]);
        }
    };

    let h = 0.5f32;
    // top (+Y)
    face(
        [
            ([-h, h, -h], [0.0, 0.0]),
            ([h, h, -h], [1.0, 0.0]),
            ([h, h, h], [1.0, 1.0]),
            ([-h, h, h], [0.0, 1.0]),
        ],
        [0.0, 1.0, 0.0],
    );
    // bottom (-Y)
    face(
        [
            ([-h, -h, h], [0.0, 0.0]),
            ([h, -h, h], [1.0, 0.0]),
            ([h, -h, -h], [1.0, 1.0]),
            ([-h, -h, -h], [0.0, 1.0]),
        ],
        [0.0, -1.0, 0.0],
    );
    // front (+Z)
    face(
        [
            ([-h, -h, h], [0.0, 0.0]),
            ([h, -h, h], [1.0, 0.0]),
            ([h, h, h], [1.0, 1.0]),
            ([-h, h, h], [0.0, 1.0]),
        ],
        [0.0, 0.0, 1.0],
    );
    // back (-Z)
    face(
        [
            ([h, -h, -h], [0.0, 0.0]),
            ([-h, -h, -h], [1.0, 0.0]),
            ([-h, h, -h], [1.0, 1.0]),
            ([h, h, -h], [0.0, 1.0]),
        ],
        [0.0, 0.0, -1.0],
    );
    // right (+X)
    face(
        [
            ([h, -h, h], [0.0, 0.0]),
            ([h, -h, -h], [1.0, 0.0]),
            ([h, h, -h], [1.0, 1.0]),
            ([h, h, h], [0.0, 1.0]),
        ],
        [1.0, 0.0, 0.0],
    );
    // left (-X)
    face(
        [
            ([-h, -h, -h], [0.0, 0.0]),
            ([-h, -h, h], [1.0, 0.0]),
            ([-h, h, h], [1.0, 1.0]),
            ([-h, h, -h], [0.0, 1.0]),
        ],
        [-1.0, 0.0, 0.0],
    );

    out
}
