use crate::pattern::Pattern;

/// Logical cells shown along one side of a toolbar icon.
pub const ICON_CELLS: i32 = 16;

/// Display pixels along one side of a toolbar icon.
pub const ICON_PIXELS: i32 = 40;

/// Draws `pattern` centered on a square icon of `icon_px` display pixels
/// representing `icon_cells` logical cells per side.
///
/// Returns a row-major 0/1 byte buffer of `icon_px * icon_px` entries. Each
/// logical cell is `icon_px / icon_cells` display units wide (2.5 at the
/// default 40 px / 16 cells), and every live pattern cell is painted as a
/// `round(cell_w)`-pixel square anchored at `floor(cell * cell_w)`. The
/// half-cell centering offsets are fractional on purpose; changing the
/// floor/round combination moves blocks by a pixel and breaks the fixtures.
/// Blocks that land outside the icon are clipped.
pub fn rasterize_icon(pattern: &Pattern, icon_cells: i32, icon_px: i32) -> Vec<u8> {
    assert!(
        icon_cells > 0 && icon_px > 0,
        "icon dimensions must be positive, got {icon_cells} cells on {icon_px}px"
    );

    let cell_w = f64::from(icon_px) / f64::from(icon_cells);
    let block = cell_w.round() as i32;

    // Logical coordinates of the pattern's top-left corner, placing its
    // center on the icon's center.
    let start_x = f64::from(icon_cells) / 2.0 - f64::from(pattern.width()) / 2.0;
    let start_y = f64::from(icon_cells) / 2.0 - f64::from(pattern.height()) / 2.0;

    let mut buf = vec![0_u8; (icon_px * icon_px) as usize];

    for y in 0..pattern.height() {
        for x in 0..pattern.width() {
            if !pattern.get(x, y) {
                continue;
            }

            let px = ((start_x + f64::from(x)) * cell_w).floor() as i32;
            let py = ((start_y + f64::from(y)) * cell_w).floor() as i32;

            for dy in 0..block {
                for dx in 0..block {
                    let ix = px + dx;
                    let iy = py + dy;
                    if ix >= 0 && ix < icon_px && iy >= 0 && iy < icon_px {
                        buf[(ix + iy * icon_px) as usize] = 1;
                    }
                }
            }
        }
    }

    buf
}
