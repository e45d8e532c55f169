/// A bounded 2D grid addressed by chunk coordinates.
///
/// Cell `(0, 0)` corresponds to chunk `(origin_x, origin_z)`; the grid does
/// not wrap.
#[derive(Clone, Debug)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    pub origin_x: i32,
    pub origin_z: i32,
    data: Vec<T>,
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            origin_x: 0,
            origin_z: 0,
            data: vec![value; width * height],
        }
    }

    /// Square grid centered on chunk (0, 0), covering `-radius..radius`.
    pub fn centered(radius: usize, value: T) -> Self {
        let side = radius * 2;
        let mut map = Self::new_with(side, side, value);
        map.origin_x = -(radius as i32);
        map.origin_z = -(radius as i32);
        map
    }

    /// Grid cell for a chunk, if the chunk lies inside the grid.
    pub fn cell_of(&self, chunk_x: i32, chunk_z: i32) -> Option<(usize, usize)> {
        let x = chunk_x.checked_sub(self.origin_x)?;
        let y = chunk_z.checked_sub(self.origin_z)?;
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Chunk coordinates of a grid cell.
    pub fn chunk_of(&self, x: usize, y: usize) -> (i32, i32) {
        (self.origin_x + x as i32, self.origin_z + y as i32)
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = y * self.width + x;
        self.data[idx] = value;
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }
}
