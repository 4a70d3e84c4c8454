/// Vertex layout shared by the ground and the model
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side triangle mesh with a flat color
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGeometry {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Linear RGB
    pub color: [f32; 3],
}

impl MeshGeometry {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Square plane of side `size`, horizontal at height `y`, facing up
pub fn ground_plane(size: f32, y: f32, color: [f32; 3]) -> MeshGeometry {
    let h = size * 0.5;
    let up = [0.0, 1.0, 0.0];
    let vertices = vec![
        Vertex::new([-h, y, -h], up),
        Vertex::new([h, y, -h], up),
        Vertex::new([h, y, h], up),
        Vertex::new([-h, y, h], up),
    ];
    // Counter-clockwise seen from above
    let indices = vec![0, 2, 1, 0, 3, 2];

    MeshGeometry {
        name: "ground".to_string(),
        vertices,
        indices,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_vertex_stride() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::layout().array_stride, 24);
    }

    #[test]
    fn test_ground_plane_extent() {
        let ground = ground_plane(100.0, -1.0, [0.0, 1.0, 0.0]);
        assert_eq!(ground.triangle_count(), 2);
        for v in &ground.vertices {
            assert_eq!(v.position[1], -1.0);
            assert_eq!(v.position[0].abs(), 50.0);
            assert_eq!(v.position[2].abs(), 50.0);
        }
    }

    #[test]
    fn test_ground_triangles_face_up() {
        let ground = ground_plane(10.0, 0.0, [1.0; 3]);
        for tri in ground.indices.chunks(3) {
            let a = Vec3::from_array(ground.vertices[tri[0] as usize].position);
            let b = Vec3::from_array(ground.vertices[tri[1] as usize].position);
            let c = Vec3::from_array(ground.vertices[tri[2] as usize].position);
            assert!((b - a).cross(c - a).y > 0.0);
        }
    }
}
