use std::collections::{BTreeSet, HashMap};

use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Icosahedron of `radius`, with `detail` rounds of midpoint subdivision
    /// pushed back out onto the sphere.
    pub fn icosahedron(radius: f32, detail: u32) -> Self {
        let t = (1.0 + 5f32.sqrt()) / 2.0;
        let mut vertices: Vec<Vec3> = [
            (-1.0, t, 0.0), (1.0, t, 0.0), (-1.0, -t, 0.0), (1.0, -t, 0.0),
            (0.0, -1.0, t), (0.0, 1.0, t), (0.0, -1.0, -t), (0.0, 1.0, -t),
            (t, 0.0, -1.0), (t, 0.0, 1.0), (-t, 0.0, -1.0), (-t, 0.0, 1.0),
        ]
        .iter()
        .map(|&(x, y, z)| Vec3::new(x, y, z).normalize())
        .collect();

        let mut faces: Vec<[usize; 3]> = vec![
            [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
            [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
            [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
            [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
        ];

        for _ in 0..detail {
            let mut midpoints: HashMap<(usize, usize), usize> = HashMap::new();
            let mut midpoint = |a: usize, b: usize, vertices: &mut Vec<Vec3>| -> usize {
                let key = (a.min(b), a.max(b));
                *midpoints.entry(key).or_insert_with(|| {
                    let mid = ((vertices[a] + vertices[b]) * 0.5).normalize();
                    vertices.push(mid);
                    vertices.len() - 1
                })
            };

            let mut next = Vec::with_capacity(faces.len() * 4);
            for [a, b, c] in faces {
                let ab = midpoint(a, b, &mut vertices);
                let bc = midpoint(b, c, &mut vertices);
                let ca = midpoint(c, a, &mut vertices);
                next.extend([[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
            }
            faces = next;
        }

        for v in &mut vertices {
            *v *= radius;
        }
        Self { vertices, faces }
    }

    /// Unique undirected edges, lower index first.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut set = BTreeSet::new();
        for &[a, b, c] in &self.faces {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                set.insert((p.min(q), p.max(q)));
            }
        }
        set.into_iter().collect()
    }
}

/// `count` points uniformly inside a cube of side `extent` centred on the origin.
pub fn star_field(count: usize, extent: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    let half = extent / 2.0;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn base_icosahedron() {
        let mesh = Mesh::icosahedron(1.0, 0);
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.faces.len(), 20);
        assert_eq!(mesh.edges().len(), 30);
    }

    #[test]
    fn one_subdivision_matches_hero_mesh() {
        let mesh = Mesh::icosahedron(1.0, 1);
        assert_eq!(mesh.vertices.len(), 42);
        assert_eq!(mesh.faces.len(), 80);
        assert_eq!(mesh.edges().len(), 120);
    }

    #[test]
    fn vertices_sit_on_the_sphere() {
        let mesh = Mesh::icosahedron(2.5, 1);
        for v in &mesh.vertices {
            assert!((v.length() - 2.5).abs() < 1e-5);
        }
    }

    #[test]
    fn stars_stay_inside_the_cube() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = star_field(600, 30.0, &mut rng);
        assert_eq!(stars.len(), 600);
        assert!(stars.iter().all(|s| s.abs().max_element() <= 15.0));
    }
}
