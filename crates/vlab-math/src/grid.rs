//! Regular horizontal grid of vertices in the XZ plane.

/// A `cells x cells` grid of square cells centred on the origin.
///
/// Vertices are stored row-major: row `r` runs along +X at
/// `z = -half + r * spacing`. There are `(cells + 1)²` vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneGrid {
    pub cells: usize,
    pub spacing: f64,
}

impl PlaneGrid {
    pub fn new(cells: usize, spacing: f64) -> Self {
        Self { cells, spacing }
    }

    /// Vertices per row (and per column).
    #[inline]
    pub fn side(&self) -> usize {
        self.cells + 1
    }

    /// Total vertex count.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.side() * self.side()
    }

    /// Edge length of the whole grid.
    #[inline]
    pub fn extent(&self) -> f64 {
        self.cells as f64 * self.spacing
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.side() + col
    }

    /// `(x, z)` of vertex `i`.
    pub fn vertex(&self, i: usize) -> (f64, f64) {
        let side = self.side();
        let half = self.extent() / 2.0;
        let row = i / side;
        let col = i % side;
        (
            -half + col as f64 * self.spacing,
            -half + row as f64 * self.spacing,
        )
    }

    /// Iterate over `(x, z)` of every vertex in storage order.
    pub fn vertices(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.vertex_count()).map(move |i| self.vertex(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_counts() {
        let g = PlaneGrid::new(100, 0.15);
        assert_eq!(g.side(), 101);
        assert_eq!(g.vertex_count(), 10_201);
        assert_relative_eq!(g.extent(), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_grid_is_centred() {
        let g = PlaneGrid::new(4, 0.5);
        let (x0, z0) = g.vertex(0);
        let (x1, z1) = g.vertex(g.vertex_count() - 1);
        assert_relative_eq!(x0, -1.0);
        assert_relative_eq!(z0, -1.0);
        assert_relative_eq!(x1, 1.0);
        assert_relative_eq!(z1, 1.0);

        let (xc, zc) = g.vertex(g.index(2, 2));
        assert!(xc.abs() < 1e-12 && zc.abs() < 1e-12);
    }

    #[test]
    fn test_vertices_row_major() {
        let g = PlaneGrid::new(2, 1.0);
        let v: Vec<_> = g.vertices().collect();
        assert_eq!(v.len(), 9);
        assert_eq!(v[1], (0.0, -1.0));
        assert_eq!(v[3], (-1.0, 0.0));
    }
}
