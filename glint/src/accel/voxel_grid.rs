use super::Accelerator;
use crate::{
    geometry::{Geometries, Hit},
    math::{Bounds3, Point3, Ray, Vec3},
};

use itertools::iproduct;
use std::collections::{HashMap, HashSet};

// Amanatides, Woo: A Fast Voxel Traversal Algorithm for Ray Tracing
// http://www.cse.yorku.ca/~amana/research/grid.pdf

/// Default number of cells per bounded geometry.
pub const DEFAULT_DENSITY: f32 = 4.0;

/// Upper limit for the cell count along a single axis.
const MAX_RESOLUTION: usize = 256;

/// A sparse uniform grid over the bounded geometries.
///
/// Each cell lists the geometries whose bounds overlap it, a geometry spanning several
/// cells is listed in each of them. Empty cells aren't stored. Unbounded geometries
/// are kept aside and tested for every ray.
pub struct VoxelGrid {
    geometries: Geometries,
    /// `None` when there are no bounded geometries
    bounds: Option<Bounds3<f32>>,
    res: [usize; 3],
    cell_size: Vec3<f32>,
    cells: HashMap<usize, Vec<usize>>,
    unbounded: Vec<usize>,
}

impl VoxelGrid {
    /// Creates a new `VoxelGrid` with roughly `density` cells per bounded geometry.
    pub fn new(geometries: Geometries, density: f32) -> Self {
        let density = if density > 0.0 {
            density
        } else {
            glint_warn!(
                "VoxelGrid: Invalid density {}, using {}",
                density,
                DEFAULT_DENSITY
            );
            DEFAULT_DENSITY
        };

        let mut bounded = Vec::new();
        let mut unbounded = Vec::new();
        for (i, g) in geometries.iter().enumerate() {
            match g.world_bound() {
                Some(b) => bounded.push((i, b)),
                None => unbounded.push(i),
            }
        }

        let bounds = bounded
            .iter()
            .map(|&(_, b)| b)
            .reduce(|acc, b| acc.union_b(b))
            .map(padded);

        let (res, cell_size) = match bounds {
            Some(bounds) => {
                let res = resolution(&bounds, bounded.len(), density);
                let d = bounds.diagonal();
                let cell_size = Vec3::new(
                    d.x / (res[0] as f32),
                    d.y / (res[1] as f32),
                    d.z / (res[2] as f32),
                );
                (res, cell_size)
            }
            None => ([1, 1, 1], Vec3::zeros()),
        };

        let mut ret = Self {
            geometries,
            bounds,
            res,
            cell_size,
            cells: HashMap::new(),
            unbounded,
        };

        for (i, b) in bounded {
            ret.add_object(i, &b);
        }

        glint_debug!(
            "VoxelGrid: Resolution {}x{}x{}, {} occupied cells, {} unbounded geometries",
            ret.res[0],
            ret.res[1],
            ret.res[2],
            ret.cells.len(),
            ret.unbounded.len()
        );

        ret
    }

    /// Returns the per-axis cell counts.
    pub fn resolution(&self) -> [usize; 3] {
        self.res
    }

    /// Returns the number of cells that reference at least one geometry.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns the bounds covered by the cells.
    pub fn bounds(&self) -> Option<Bounds3<f32>> {
        self.bounds
    }

    /// Returns the indices of the geometries listed in the cell at `cell`.
    pub fn cell(&self, cell: [usize; 3]) -> &[usize] {
        self.cells
            .get(&self.flat_index(cell))
            .map_or(&[], |c| c.as_slice())
    }

    /// Returns the cells visited by `ray` in traversal order.
    pub fn walk(&self, ray: &Ray<f32>) -> CellWalk {
        match self.bounds {
            Some(bounds) => CellWalk::new(ray, &bounds, self.res, self.cell_size),
            None => CellWalk::empty(),
        }
    }

    /// Lists geometry `index` in every cell `bounds` overlaps.
    fn add_object(&mut self, index: usize, bounds: &Bounds3<f32>) {
        let grid_bounds = match self.bounds {
            Some(b) => b,
            None => return,
        };
        let c_min = cell_coords(bounds.p_min, &grid_bounds, self.res, self.cell_size);
        let c_max = cell_coords(bounds.p_max, &grid_bounds, self.res, self.cell_size);

        for (z, y, x) in iproduct!(c_min[2]..=c_max[2], c_min[1]..=c_max[1], c_min[0]..=c_max[0]) {
            let flat = self.flat_index([x, y, z]);
            self.cells.entry(flat).or_default().push(index);
        }
    }

    #[inline]
    fn flat_index(&self, cell: [usize; 3]) -> usize {
        cell[0] + self.res[0] * (cell[1] + self.res[1] * cell[2])
    }
}

impl Accelerator for VoxelGrid {
    fn geometries(&self) -> &Geometries {
        &self.geometries
    }

    fn nearest_hit(&self, ray: &Ray<f32>) -> Option<Hit<'_>> {
        let mut best: Option<Hit<'_>> = None;
        let mut tested = HashSet::new();

        for (cell, t_enter, _) in self.walk(ray) {
            // Cells come in order of entry distance so no later cell can have a closer hit
            if best.map_or(false, |h| t_enter > h.t) {
                break;
            }

            let indices = match self.cells.get(&cell) {
                Some(indices) => indices,
                None => continue,
            };
            for &i in indices {
                if !tested.insert(i) {
                    continue;
                }
                let t_max = best.map_or(f32::INFINITY, |h| h.t);
                if let Some(hit) = self.geometries.get(i).and_then(|g| g.nearest(ray, t_max)) {
                    if best.map_or(true, |h| hit.t < h.t) {
                        best = Some(hit);
                    }
                }
            }
        }

        for &i in &self.unbounded {
            let t_max = best.map_or(f32::INFINITY, |h| h.t);
            if let Some(hit) = self.geometries.get(i).and_then(|g| g.nearest(ray, t_max)) {
                if best.map_or(true, |h| hit.t < h.t) {
                    best = Some(hit);
                }
            }
        }

        best
    }

    fn all_hits(&self, ray: &Ray<f32>, t_max: f32) -> Vec<Hit<'_>> {
        let mut hits = Vec::new();
        let mut tested = HashSet::new();

        for (cell, t_enter, _) in self.walk(ray) {
            if t_enter > t_max {
                break;
            }

            if let Some(indices) = self.cells.get(&cell) {
                for &i in indices {
                    if tested.insert(i) {
                        if let Some(g) = self.geometries.get(i) {
                            hits.extend(g.intersect(ray, t_max));
                        }
                    }
                }
            }
        }

        for &i in &self.unbounded {
            if let Some(g) = self.geometries.get(i) {
                hits.extend(g.intersect(ray, t_max));
            }
        }

        hits
    }
}

/// Grows `bounds` slightly so that flat scenes still get cells with a volume and
/// geometry on the boundary doesn't fall outside.
fn padded(bounds: Bounds3<f32>) -> Bounds3<f32> {
    let d = bounds.diagonal();
    let pad = Vec3::from(d.max_comp() * 1e-4 + 1e-4);
    Bounds3::new(bounds.p_min - pad, bounds.p_max + pad)
}

/// Picks the per-axis resolution so that the total cell count is roughly
/// `density * object_count` with cells as close to cubes as possible.
fn resolution(bounds: &Bounds3<f32>, object_count: usize, density: f32) -> [usize; 3] {
    let d = bounds.diagonal();
    let volume = d.x * d.y * d.z;
    let cells_per_unit = (density * (object_count as f32) / volume).cbrt();

    let mut res = [1; 3];
    for (i, r) in res.iter_mut().enumerate() {
        let cells = (d[i] * cells_per_unit).round();
        *r = if cells.is_finite() {
            (cells as usize).clamp(1, MAX_RESOLUTION)
        } else {
            1
        };
    }
    res
}

/// Returns the clamped cell coordinates containing `p`.
fn cell_coords(
    p: Point3<f32>,
    bounds: &Bounds3<f32>,
    res: [usize; 3],
    cell_size: Vec3<f32>,
) -> [usize; 3] {
    let mut ret = [0; 3];
    for (i, c) in ret.iter_mut().enumerate() {
        let f = ((p[i] - bounds.p_min[i]) / cell_size[i]).floor();
        *c = if f <= 0.0 {
            0
        } else {
            (f as usize).min(res[i] - 1)
        };
    }
    ret
}

/// 3D-DDA iterator over the grid cells pierced by a ray.
///
/// Yields `(flat cell index, t_enter, t_exit)` with non-decreasing `t_enter`.
pub struct CellWalk {
    res: [usize; 3],
    cell: [isize; 3],
    step: [isize; 3],
    t_next: [f32; 3],
    t_delta: [f32; 3],
    t_enter: f32,
    t_end: f32,
    done: bool,
}

impl CellWalk {
    fn new(ray: &Ray<f32>, bounds: &Bounds3<f32>, res: [usize; 3], cell_size: Vec3<f32>) -> Self {
        let (t0, t1) = match bounds.intersect(ray) {
            Some(ts) => ts,
            None => return Self::empty(),
        };
        let t_start = t0.max(0.0);
        let start = cell_coords(ray.point(t_start), bounds, res, cell_size);

        let mut cell = [0isize; 3];
        let mut step = [0isize; 3];
        let mut t_next = [f32::INFINITY; 3];
        let mut t_delta = [f32::INFINITY; 3];
        for i in 0..3 {
            cell[i] = start[i] as isize;
            let d = ray.d[i];
            if d > 0.0 {
                step[i] = 1;
                let boundary = bounds.p_min[i] + ((start[i] + 1) as f32) * cell_size[i];
                t_next[i] = (boundary - ray.o[i]) / d;
                t_delta[i] = cell_size[i] / d;
            } else if d < 0.0 {
                step[i] = -1;
                let boundary = bounds.p_min[i] + (start[i] as f32) * cell_size[i];
                t_next[i] = (boundary - ray.o[i]) / d;
                t_delta[i] = -cell_size[i] / d;
            }
        }

        Self {
            res,
            cell,
            step,
            t_next,
            t_delta,
            t_enter: t_start,
            t_end: t1,
            done: false,
        }
    }

    fn empty() -> Self {
        Self {
            res: [1; 3],
            cell: [0; 3],
            step: [0; 3],
            t_next: [f32::INFINITY; 3],
            t_delta: [f32::INFINITY; 3],
            t_enter: 0.0,
            t_end: 0.0,
            done: true,
        }
    }
}

impl Iterator for CellWalk {
    type Item = (usize, f32, f32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let axis = if self.t_next[0] < self.t_next[1] {
            if self.t_next[0] < self.t_next[2] {
                0
            } else {
                2
            }
        } else if self.t_next[1] < self.t_next[2] {
            1
        } else {
            2
        };

        let flat = (self.cell[0] as usize)
            + self.res[0] * ((self.cell[1] as usize) + self.res[1] * (self.cell[2] as usize));
        let t_exit = self.t_next[axis].min(self.t_end);
        let ret = (flat, self.t_enter, t_exit);

        // Step to the neighbour across the closest boundary
        self.t_enter = self.t_enter.max(self.t_next[axis]);
        self.cell[axis] += self.step[axis];
        self.t_next[axis] += self.t_delta[axis];
        if self.step[axis] == 0
            || self.cell[axis] < 0
            || self.cell[axis] >= self.res[axis] as isize
            || self.t_enter > self.t_end
        {
            self.done = true;
        }

        Some(ret)
    }
}
