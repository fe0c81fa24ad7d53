use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Floats per vertex: position (3), uv (2), texture layer (1).
pub const VERTEX_STRIDE: usize = 6;
/// Vertices emitted per visible face (two triangles, no index buffer).
pub const VERTICES_PER_FACE: usize = 6;

/// Typed view over one vertex of a [`ChunkMesh`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub layer: f32,
}

/// Flat triangle-list geometry for one chunk, ready for upload.
///
/// The buffer is only grown a whole vertex at a time, so its length is always
/// a multiple of [`VERTEX_STRIDE`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    vertices: Vec<f32>,
    vertex_count: usize,
}

impl ChunkMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_vertex(&mut self, position: Vec3, uv: Vec2, layer: u32) {
        self.vertices.extend_from_slice(&[
            position.x,
            position.y,
            position.z,
            uv.x,
            uv.y,
            layer as f32,
        ]);
        self.vertex_count += 1;
    }

    /// Interleaved `(x, y, z, u, v, layer)` floats.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.vertex_count = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    pub fn face_count(&self) -> usize {
        self.vertex_count / VERTICES_PER_FACE
    }

    /// Raw bytes of the vertex buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertices_as(&self) -> &[MeshVertex] {
        bytemuck::cast_slice(&self.vertices)
    }
}
