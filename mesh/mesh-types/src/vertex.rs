//! Vertex type.

use nalgebra::Point3;

/// A vertex in a triangle mesh.
///
/// Vertices carry only a position. A vertex is identified by its index in
/// the mesh's vertex list; it has no identity of its own.
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, Vertex};
///
/// let v = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// assert!((v.position.y - 2.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in 3D space.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Create a vertex at the given position.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Create a vertex from individual coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert!((v.position.z - 3.0).abs() < f64::EPSILON);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Coordinates as an `[x, y, z]` array.
    #[inline]
    #[must_use]
    pub fn coords(&self) -> [f64; 3] {
        [self.position.x, self.position.y, self.position.z]
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new(Point3::origin())
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vertex {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::from_coords(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_from_coords() {
        let v = Vertex::from_coords(1.0, 2.0, 3.0);
        assert_eq!(v.coords(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn vertex_from_tuple() {
        let v: Vertex = (1.0, 2.0, 3.0).into();
        assert_eq!(v, Vertex::from_coords(1.0, 2.0, 3.0));
    }

    #[test]
    fn vertex_from_array() {
        let v: Vertex = [4.0, 5.0, 6.0].into();
        assert_eq!(v.coords(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Vertex::default().coords(), [0.0, 0.0, 0.0]);
    }
}
