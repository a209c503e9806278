//! Vertex type for uploading the outline

use bytemuck::{Pod, Zeroable};

/// 2D outline vertex in viewport pixels
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct OutlineVertex {
    pub position: [f32; 2],
}

impl OutlineVertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    /// Raw bytes of a vertex slice, ready for a buffer upload
    pub fn as_bytes(vertices: &[OutlineVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }

    /// Flat `[x0, y0, x1, y1, ...]` view, for hosts that take float arrays
    pub fn as_floats(vertices: &[OutlineVertex]) -> &[f32] {
        bytemuck::cast_slice(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<OutlineVertex>(), 8);
        let verts = [OutlineVertex::new(1.0, 2.0), OutlineVertex::new(3.0, 4.0)];
        assert_eq!(OutlineVertex::as_bytes(&verts).len(), 16);
        assert_eq!(OutlineVertex::as_floats(&verts), &[1.0, 2.0, 3.0, 4.0]);
    }
}
