//! Costmap access contract and the grid/world coordinate mapper.
//!
//! The planner consumes traversal costs through the [`Costmap`] trait, which
//! also provides the bidirectional affine mapping between world coordinates
//! and cell indices. [`GridCostmap`] is a plain in-memory implementation for
//! callers that own their grid directly (and for tests).

use crate::core::{GridCoord, WorldPoint};

/// Well-known cell cost values.
pub mod cost_values {
    /// Fully traversable cell, no penalty.
    pub const FREE_SPACE: u8 = 0;
    /// Cell inside the inflated robot footprint; treated as blocking.
    pub const INSCRIBED_INFLATED_OBSTACLE: u8 = 253;
    /// Definite obstacle.
    pub const LETHAL_OBSTACLE: u8 = 254;
    /// Cell never observed by any sensor.
    pub const NO_INFORMATION: u8 = 255;
}

/// Read-mostly view of a 2D traversal-cost grid with a fixed world mapping.
///
/// The grid origin is the world position of cell (0, 0); cells are square
/// with side `resolution` meters. Apart from the planner clearing the cell
/// the robot stands on, the grid is never written during a planning call.
pub trait Costmap {
    /// Grid width in cells.
    fn width(&self) -> usize;

    /// Grid height in cells.
    fn height(&self) -> usize;

    /// Cell side length in meters.
    fn resolution(&self) -> f32;

    /// World x coordinate of cell (0, 0).
    fn origin_x(&self) -> f32;

    /// World y coordinate of cell (0, 0).
    fn origin_y(&self) -> f32;

    /// Traversal cost of a cell.
    fn cost_at(&self, coord: GridCoord) -> u8;

    /// Overwrite the traversal cost of a cell.
    fn set_cost(&mut self, coord: GridCoord, value: u8);

    /// Convert a world point to the nearest cell index.
    ///
    /// Returns `None` if the point lies below the origin on either axis or
    /// the rounded index falls outside the grid. A `Some` result is always
    /// strictly inside `[0, width) x [0, height)`.
    fn world_to_grid(&self, point: WorldPoint) -> Option<GridCoord> {
        if point.x < self.origin_x() || point.y < self.origin_y() {
            return None;
        }

        let x = ((point.x - self.origin_x()) / self.resolution()).round() as i32;
        let y = ((point.y - self.origin_y()) / self.resolution()).round() as i32;

        if x >= 0 && (x as usize) < self.width() && y >= 0 && (y as usize) < self.height() {
            Some(GridCoord::new(x, y))
        } else {
            None
        }
    }

    /// Convert a cell index to world coordinates.
    ///
    /// Exact inverse of the affine map; the index is assumed already
    /// validated and is not bounds-checked.
    fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin_x() + coord.x as f32 * self.resolution(),
            self.origin_y() + coord.y as f32 * self.resolution(),
        )
    }
}

/// Owned flat-array costmap.
#[derive(Clone, Debug)]
pub struct GridCostmap {
    width: usize,
    height: usize,
    resolution: f32,
    origin: WorldPoint,
    costs: Vec<u8>,
}

impl GridCostmap {
    /// Create a costmap with every cell free.
    pub fn new(width: usize, height: usize, resolution: f32, origin: WorldPoint) -> Self {
        Self {
            width,
            height,
            resolution,
            origin,
            costs: vec![cost_values::FREE_SPACE; width * height],
        }
    }

    /// Create a costmap with every cell set to `value`.
    pub fn filled(width: usize, height: usize, resolution: f32, origin: WorldPoint, value: u8) -> Self {
        Self {
            costs: vec![value; width * height],
            ..Self::new(width, height, resolution, origin)
        }
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl Costmap for GridCostmap {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn resolution(&self) -> f32 {
        self.resolution
    }

    fn origin_x(&self) -> f32 {
        self.origin.x
    }

    fn origin_y(&self) -> f32 {
        self.origin.y
    }

    fn cost_at(&self, coord: GridCoord) -> u8 {
        match self.index(coord) {
            Some(idx) => self.costs[idx],
            None => cost_values::LETHAL_OBSTACLE,
        }
    }

    fn set_cost(&mut self, coord: GridCoord, value: u8) {
        if let Some(idx) = self.index(coord) {
            self.costs[idx] = value;
        }
    }
}
