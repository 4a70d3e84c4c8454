use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use std::path::Path;

/// A loaded model as a tree of typed nodes
#[derive(Debug, Clone, PartialEq)]
pub struct ModelScene {
    pub name: String,
    pub roots: Vec<SceneNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: Option<String>,
    /// Transform relative to the parent node
    pub local: Mat4,
    pub kind: NodeKind,
    pub children: Vec<SceneNode>,
}

/// The closed set of node variants a model can contain
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Group,
    Mesh(MeshData),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub name: Option<String>,
    pub primitives: Vec<Primitive>,
}

/// One triangle list and its attributes; any attribute may be missing
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub positions: Option<Vec<Vec3>>,
    pub normals: Option<Vec<Vec3>>,
    pub indices: Option<Vec<u32>>,
}

/// Visitor over a model's nodes in depth-first order
///
/// `world` is the node's transform relative to the model root.
pub trait NodeVisitor {
    fn visit_group(&mut self, _node: &SceneNode, _world: Mat4) {}

    fn visit_mesh(&mut self, node: &SceneNode, mesh: &MeshData, world: Mat4);
}

impl SceneNode {
    pub fn label(&self) -> &str {
        match &self.kind {
            NodeKind::Mesh(MeshData { name: Some(name), .. }) => name.as_str(),
            _ => self.name.as_deref().unwrap_or("unnamed"),
        }
    }

    fn walk<V: NodeVisitor + ?Sized>(&self, parent: Mat4, visitor: &mut V) {
        let world = parent * self.local;
        match &self.kind {
            NodeKind::Group => visitor.visit_group(self, world),
            NodeKind::Mesh(mesh) => visitor.visit_mesh(self, mesh, world),
        }
        for child in &self.children {
            child.walk(world, visitor);
        }
    }
}

impl ModelScene {
    pub fn traverse<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        for root in &self.roots {
            root.walk(Mat4::IDENTITY, visitor);
        }
    }

    pub fn node_count(&self) -> usize {
        struct Count(usize);
        impl NodeVisitor for Count {
            fn visit_group(&mut self, _node: &SceneNode, _world: Mat4) {
                self.0 += 1;
            }
            fn visit_mesh(&mut self, _node: &SceneNode, _mesh: &MeshData, _world: Mat4) {
                self.0 += 1;
            }
        }

        let mut count = Count(0);
        self.traverse(&mut count);
        count.0
    }

    pub fn mesh_count(&self) -> usize {
        struct Count(usize);
        impl NodeVisitor for Count {
            fn visit_mesh(&mut self, _node: &SceneNode, _mesh: &MeshData, _world: Mat4) {
                self.0 += 1;
            }
        }

        let mut count = Count(0);
        self.traverse(&mut count);
        count.0
    }
}

/// Loads a glTF or GLB file into a typed node tree
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelScene> {
    let path = path.as_ref();
    log::info!("Loading model: {:?}", path);

    let (document, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .with_context(|| format!("glTF file has no scenes: {:?}", path))?;

    let roots = scene
        .nodes()
        .map(|node| convert_node(&node, &buffers))
        .collect::<Result<Vec<_>>>()?;

    let name = scene
        .name()
        .map(str::to_owned)
        .or_else(|| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "model".to_string());

    let model = ModelScene { name, roots };
    log::info!(
        "Model '{}' loaded: {} nodes, {} meshes",
        model.name,
        model.node_count(),
        model.mesh_count()
    );
    Ok(model)
}

/// Recursively converts glTF nodes
fn convert_node(node: &gltf::Node, buffers: &[gltf::buffer::Data]) -> Result<SceneNode> {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());

    let kind = match node.mesh() {
        Some(mesh) => NodeKind::Mesh(convert_mesh(&mesh, buffers)?),
        None => NodeKind::Group,
    };

    let children = node
        .children()
        .map(|child| convert_node(&child, buffers))
        .collect::<Result<Vec<_>>>()?;

    Ok(SceneNode {
        name: node.name().map(str::to_owned),
        local,
        kind,
        children,
    })
}

fn convert_mesh(mesh: &gltf::Mesh, buffers: &[gltf::buffer::Data]) -> Result<MeshData> {
    let mut primitives = Vec::new();

    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            log::warn!(
                "Skipping non-triangle primitive ({:?}) in mesh {:?}",
                primitive.mode(),
                mesh.name()
            );
            continue;
        }

        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions = reader
            .read_positions()
            .map(|iter| iter.map(Vec3::from_array).collect::<Vec<_>>());
        let normals = reader
            .read_normals()
            .map(|iter| iter.map(Vec3::from_array).collect::<Vec<_>>());
        let indices = reader
            .read_indices()
            .map(|indices| indices.into_u32().collect::<Vec<_>>());

        primitives.push(Primitive {
            positions,
            normals,
            indices,
        });
    }

    Ok(MeshData {
        name: mesh.name().map(str::to_owned),
        primitives,
    })
}
