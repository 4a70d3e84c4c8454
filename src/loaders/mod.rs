pub mod gltf;
pub mod material;
pub mod pending;

pub use gltf::{load_model, MeshData, ModelScene, NodeKind, NodeVisitor, Primitive, SceneNode};
pub use material::{MaterialBinder, PreparedModel};
pub use pending::{LoadPoll, PendingModel};
