//! PNG export of the wall snapshot

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{MAX_IMAGE_PIXELS, MIN_CELL_SIZE, PASSAGE_COLOR, WALL_COLOR};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::grid::Grid;
use crate::spatial::walls::wall_grid;

fn pixel_extent(cells: usize, cell_size: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(cell_size))
        .and_then(|pixels| pixels.checked_add(1))
        .ok_or_else(|| {
            invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("{cells} cells of this size overflow the image dimensions"),
            )
        })
}

fn paint(img: &mut RgbaImage, x: u32, y: u32) {
    if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
        *pixel = Rgba(WALL_COLOR);
    }
}

/// Draw the maze with one-pixel walls on a passage-colored background
///
/// Each cell occupies `cell_size` pixels per side plus a shared border line,
/// so the image is `width * cell_size + 1` by `height * cell_size + 1`.
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is below `MIN_CELL_SIZE`, the
/// image dimensions would overflow, or the image would exceed
/// `MAX_IMAGE_PIXELS`.
pub fn render_maze_image<P>(grid: &Grid<P>, cell_size: u32) -> Result<RgbaImage> {
    if cell_size < MIN_CELL_SIZE {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("must be at least {MIN_CELL_SIZE} pixels"),
        ));
    }

    let width = pixel_extent(grid.width(), cell_size)?;
    let height = pixel_extent(grid.height(), cell_size)?;
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_IMAGE_PIXELS {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("a {width}x{height} image exceeds {MAX_IMAGE_PIXELS} pixels"),
        ));
    }
    let mut img = ImageBuffer::from_pixel(width, height, Rgba(PASSAGE_COLOR));

    for ((row, col), walls) in wall_grid(grid).indexed_iter() {
        let left = col as u32 * cell_size;
        let top = row as u32 * cell_size;
        let right = left + cell_size;
        let bottom = top + cell_size;

        for x in left..=right {
            if walls.up {
                paint(&mut img, x, top);
            }
            if walls.down {
                paint(&mut img, x, bottom);
            }
        }
        for y in top..=bottom {
            if walls.left {
                paint(&mut img, left, y);
            }
            if walls.right {
                paint(&mut img, right, y);
            }
        }
    }

    Ok(img)
}

/// Render the maze and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The cell size is invalid (see [`render_maze_image`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png<P>(grid: &Grid<P>, cell_size: u32, output_path: &Path) -> Result<()> {
    let img = render_maze_image(grid, cell_size)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
