/// A 2D tilemap grid with bounded edges (battlemaps do not wrap).
#[derive(Clone)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Fill the entire map with a value.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Get 4-connected neighbors (up, down, left, right).
    /// Edge cells return fewer than 4.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(4);

        if x > 0 {
            result.push((x - 1, y));
        }
        if x < self.width - 1 {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y < self.height - 1 {
            result.push((x, y + 1));
        }

        result
    }

    /// Get 8-connected neighbors (including diagonals).
    /// Edge cells return fewer than 8.
    pub fn neighbors_8(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(8);

        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if self.in_bounds(nx, ny) {
                    result.push((nx as usize, ny as usize));
                }
            }
        }

        result
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (x, y, val)
        })
    }

    /// Iterate mutably over all cells with their coordinates.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let width = self.width;
        self.data.iter_mut().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_with_default() {
        let map: Tilemap<u8> = Tilemap::new(4, 3);
        assert_eq!(map.width, 4);
        assert_eq!(map.height, 3);
        assert!(map.iter().all(|(_, _, &v)| v == 0));
    }

    #[test]
    fn test_set_and_get() {
        let mut map = Tilemap::new_with(5, 5, 0u8);
        map.set(2, 3, 7);
        assert_eq!(*map.get(2, 3), 7);
        assert_eq!(*map.get(3, 2), 0);
    }

    #[test]
    fn test_neighbors_do_not_wrap() {
        let map: Tilemap<u8> = Tilemap::new(5, 5);

        // Corner cell has exactly 2 cardinal neighbors
        let corner = map.neighbors(0, 0);
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&(1, 0)));
        assert!(corner.contains(&(0, 1)));
        assert!(!corner.contains(&(4, 0)));

        // Interior cell has all 4
        assert_eq!(map.neighbors(2, 2).len(), 4);
    }

    #[test]
    fn test_neighbors_8_at_corner() {
        let map: Tilemap<u8> = Tilemap::new(5, 5);
        assert_eq!(map.neighbors_8(0, 0).len(), 3);
        assert_eq!(map.neighbors_8(4, 4).len(), 3);
        assert_eq!(map.neighbors_8(2, 2).len(), 8);
    }

    #[test]
    fn test_iter_coordinates() {
        let mut map = Tilemap::new_with(3, 2, 0u8);
        map.set(2, 1, 9);

        let found: Vec<(usize, usize)> = map
            .iter()
            .filter(|(_, _, &v)| v == 9)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(found, vec![(2, 1)]);
    }
}
