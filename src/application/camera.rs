/// World-space framing of a grid, computed once from its dimensions.
///
/// Cell `(x, y)` sits at world position `(x, -y)`. Halves are integer halves
/// of the grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewFrame {
    pub center: (f32, f32),
    /// Half the visible extent in world units
    pub half_extent: f32,
}

impl ViewFrame {
    pub fn fit(grid_width: usize, grid_height: usize) -> Self {
        Self {
            center: (
                (grid_width / 2) as f32 - 0.5,
                -((grid_height / 2) as f32) - 0.5,
            ),
            half_extent: (grid_width.max(grid_height) / 2 + 1) as f32,
        }
    }
}

/// Camera maps between screen pixels and grid cells
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = one cell is `cell_size` pixels
}

impl Camera {
    /// Place the camera so `frame` fills a viewport of the given pixel size
    pub fn framed(frame: ViewFrame, viewport_width: f32, viewport_height: f32, cell_size: f32) -> Self {
        let pixels_per_cell = viewport_width.min(viewport_height) / (2.0 * frame.half_extent);
        let (center_x, center_y) = frame.center;
        Self {
            offset_x: viewport_width / 2.0 - (center_x + 0.5) * pixels_per_cell,
            offset_y: viewport_height / 2.0 + (center_y - 0.5) * pixels_per_cell,
            zoom: pixels_per_cell / cell_size,
        }
    }

    /// Convert screen coordinates to grid coordinates
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> (i32, i32) {
        let grid_x = ((screen_x - self.offset_x) / (cell_size * self.zoom)).floor() as i32;
        let grid_y = ((screen_y - self.offset_y) / (cell_size * self.zoom)).floor() as i32;
        (grid_x, grid_y)
    }

    /// Convert grid coordinates to screen coordinates (top-left corner of the cell)
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize, cell_size: f32) -> (f32, f32) {
        let screen_x = grid_x as f32 * cell_size * self.zoom + self.offset_x;
        let screen_y = grid_y as f32 * cell_size * self.zoom + self.offset_y;
        (screen_x, screen_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_uses_integer_halves() {
        let frame = ViewFrame::fit(10, 6);
        assert_eq!(frame.center, (4.5, -3.5));
        assert_eq!(frame.half_extent, 6.0);

        let frame = ViewFrame::fit(7, 9);
        assert_eq!(frame.center, (2.5, -4.5));
        assert_eq!(frame.half_extent, 5.0);
    }

    #[test]
    fn test_framed_camera_fits_grid_horizontally() {
        let camera = Camera::framed(ViewFrame::fit(10, 6), 600.0, 600.0, 10.0);
        assert_eq!(camera.zoom, 5.0);
        assert_eq!(camera.grid_to_screen(0, 0, 10.0).0, 50.0);
        assert_eq!(camera.grid_to_screen(10, 0, 10.0).0, 550.0);
    }

    #[test]
    fn test_screen_grid_round_trip() {
        let camera = Camera::framed(ViewFrame::fit(20, 20), 800.0, 600.0, 10.0);
        let (sx, sy) = camera.grid_to_screen(7, 13, 10.0);
        let half_cell = 5.0 * camera.zoom;
        assert_eq!(camera.screen_to_grid(sx + half_cell, sy + half_cell, 10.0), (7, 13));
    }

    #[test]
    fn test_left_of_grid_is_negative() {
        let camera = Camera::framed(ViewFrame::fit(10, 6), 600.0, 600.0, 10.0);
        assert_eq!(camera.screen_to_grid(49.0, 200.0, 10.0).0, -1);
    }
}
