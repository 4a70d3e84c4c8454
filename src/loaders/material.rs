use glam::{Mat3, Mat4};

use super::gltf::{MeshData, ModelScene, NodeVisitor, Primitive, SceneNode};
use crate::renderer::mesh::{MeshGeometry, Vertex};

/// Model ready for upload: every shadeable primitive, baked into model space
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedModel {
    pub name: String,
    pub meshes: Vec<MeshGeometry>,
    /// Labels of meshes dropped for lacking positions or normals
    pub skipped: Vec<String>,
}

impl PreparedModel {
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(MeshGeometry::triangle_count).sum()
    }
}

/// Visitor that binds the scene's shading to each mesh primitive
///
/// Lighting needs both positions and normals; primitives without them are
/// skipped with a warning and the rest of the model still loads.
pub struct MaterialBinder {
    color: [f32; 3],
    meshes: Vec<MeshGeometry>,
    skipped: Vec<String>,
}

impl MaterialBinder {
    /// `color` is the linear RGB given to every bound mesh
    pub fn new(color: [f32; 3]) -> Self {
        Self {
            color,
            meshes: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn bind(model: &ModelScene, color: [f32; 3]) -> PreparedModel {
        let mut binder = Self::new(color);
        model.traverse(&mut binder);

        let prepared = PreparedModel {
            name: model.name.clone(),
            meshes: binder.meshes,
            skipped: binder.skipped,
        };
        if prepared.meshes.is_empty() {
            log::warn!("Model '{}' has no drawable meshes", prepared.name);
        }
        prepared
    }

    fn bake(&self, label: &str, primitive: &Primitive, world: Mat4) -> Option<MeshGeometry> {
        let (Some(positions), Some(normals)) = (&primitive.positions, &primitive.normals) else {
            return None;
        };
        if positions.len() != normals.len() {
            return None;
        }

        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
        let vertices = positions
            .iter()
            .zip(normals)
            .map(|(&p, &n)| {
                Vertex::new(
                    world.transform_point3(p).to_array(),
                    (normal_matrix * n).normalize_or_zero().to_array(),
                )
            })
            .collect::<Vec<_>>();

        let vertex_count = vertices.len() as u32;
        let mut indices = match &primitive.indices {
            Some(indices) => indices.clone(),
            None => (0..vertex_count).collect(),
        };
        indices.truncate(indices.len() - indices.len() % 3);
        if indices.iter().any(|&i| i >= vertex_count) {
            log::warn!("Mesh {} has out-of-range indices", label);
            return None;
        }

        Some(MeshGeometry {
            name: label.to_string(),
            vertices,
            indices,
            color: self.color,
        })
    }
}

impl NodeVisitor for MaterialBinder {
    fn visit_mesh(&mut self, node: &SceneNode, mesh: &MeshData, world: Mat4) {
        let label = node.label();
        for primitive in &mesh.primitives {
            match self.bake(label, primitive, world) {
                Some(geometry) => self.meshes.push(geometry),
                None => {
                    log::warn!("Skipping mesh without normals or position attributes: {}", label);
                    self.skipped.push(label.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::gltf::NodeKind;
    use glam::Vec3;

    fn triangle(normals: bool, indices: Option<Vec<u32>>) -> Primitive {
        Primitive {
            positions: Some(vec![Vec3::ZERO, Vec3::X, Vec3::Z]),
            normals: normals.then(|| vec![Vec3::Y; 3]),
            indices,
        }
    }

    fn model(primitives: Vec<Primitive>, local: Mat4) -> ModelScene {
        ModelScene {
            name: "block".to_string(),
            roots: vec![SceneNode {
                name: Some("cube".to_string()),
                local,
                kind: NodeKind::Mesh(MeshData {
                    name: None,
                    primitives,
                }),
                children: vec![],
            }],
        }
    }

    #[test]
    fn test_binds_shaded_primitive_with_scene_color() {
        let color = [0.4, 0.4, 0.4];
        let prepared = MaterialBinder::bind(&model(vec![triangle(true, None)], Mat4::IDENTITY), color);

        assert_eq!(prepared.meshes.len(), 1);
        assert!(prepared.skipped.is_empty());
        let mesh = &prepared.meshes[0];
        assert_eq!(mesh.color, color);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.name, "cube");
    }

    #[test]
    fn test_skips_primitive_without_normals() {
        let prepared = MaterialBinder::bind(
            &model(vec![triangle(false, None), triangle(true, Some(vec![2, 1, 0]))], Mat4::IDENTITY),
            [1.0; 3],
        );

        assert_eq!(prepared.meshes.len(), 1);
        assert_eq!(prepared.meshes[0].indices, vec![2, 1, 0]);
        assert_eq!(prepared.skipped, vec!["cube".to_string()]);
    }

    #[test]
    fn test_bakes_node_transform() {
        let local = Mat4::from_scale_rotation_translation(
            Vec3::splat(2.0),
            glam::Quat::IDENTITY,
            Vec3::new(0.0, 1.0, 0.0),
        );
        let prepared = MaterialBinder::bind(&model(vec![triangle(true, None)], local), [1.0; 3]);

        let mesh = &prepared.meshes[0];
        assert_eq!(mesh.vertices[1].position, [2.0, 1.0, 0.0]);
        // Uniform scale keeps normals unit length after renormalizing
        assert_eq!(mesh.vertices[1].normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_rejects_out_of_range_indices() {
        let prepared =
            MaterialBinder::bind(&model(vec![triangle(true, Some(vec![0, 1, 7]))], Mat4::IDENTITY), [1.0; 3]);
        assert!(prepared.meshes.is_empty());
        assert_eq!(prepared.skipped.len(), 1);
    }

    #[test]
    fn test_drops_trailing_partial_triangle() {
        let prepared =
            MaterialBinder::bind(&model(vec![triangle(true, Some(vec![0, 1, 2, 0]))], Mat4::IDENTITY), [1.0; 3]);
        assert_eq!(prepared.meshes[0].indices, vec![0, 1, 2]);
        assert_eq!(prepared.triangle_count(), 1);
    }
}
