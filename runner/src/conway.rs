use std::time::{Duration, Instant};

use life::{catalog, rasterize_icon, Life, ICON_CELLS, ICON_PIXELS};

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Scale, ScaleMode, Window, WindowOptions};
use rand::{rngs::SmallRng, SeedableRng};

const INK_DEAD: u32 = 0x0f_0f_23;
const INK_ALIVE: u32 = 0xff_ff_66;
const TOOLBAR_BG: u32 = 0x1f_1f_3a;
const TOOLBAR_BG_SELECTED: u32 = 0x3a_3a_66;
const TOOLBAR_INK: u32 = 0xc8_c8_dc;

fn main() {
    const COLUMNS: i32 = 256;
    const ROWS: i32 = 192;
    const GENERATIONS_PER_SECOND: u32 = 15;

    // Toolbar strip across the top, grid surface below it
    const TOOLBAR_HEIGHT: usize = ICON_PIXELS as usize;
    const WIDTH: usize = 640;
    const GRID_HEIGHT: usize = 480;
    const HEIGHT: usize = TOOLBAR_HEIGHT + GRID_HEIGHT;

    let patterns = catalog();
    let icons: Vec<Vec<u8>> = patterns
        .iter()
        .map(|pattern| rasterize_icon(pattern, ICON_CELLS, ICON_PIXELS))
        .collect();

    let mut pixels = vec![INK_DEAD; WIDTH * HEIGHT];
    let mut window = Window::new(
        "Conway's Game of Life",
        WIDTH,
        HEIGHT,
        WindowOptions {
            title: true,
            resize: true,
            scale: Scale::X1,
            scale_mode: ScaleMode::Stretch,

            ..WindowOptions::default()
        },
    )
    .expect("Failed to create a window");

    window.set_target_fps(60);

    let mut life = Life::new(COLUMNS, ROWS);
    let mut selected = 0_usize;

    let mut is_animating = false;
    let mut was_mouse_down = false;
    let mut rng = SmallRng::from_seed(core::array::from_fn(|_| 7));

    // Generations run on their own clock, redraws on the window's.
    let step_interval = Duration::from_secs(1) / GENERATIONS_PER_SECOND;
    let mut next_step = Instant::now();

    draw_toolbar(&mut pixels, WIDTH, &icons, selected);
    let mut cells_were_updated = true;

    while window.is_open() {
        if window.is_key_pressed(Key::Escape, KeyRepeat::No)
            || window.is_key_pressed(Key::Q, KeyRepeat::No)
        {
            break;
        }

        if window.is_key_pressed(Key::Space, KeyRepeat::No) {
            is_animating ^= true;
        }

        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            life.clear();

            cells_were_updated = true;
        } else if window.is_key_pressed(Key::R, KeyRepeat::No) {
            life.clear_random(&mut rng);

            cells_were_updated = true;
        }

        // One stamp (or one toolbar pick) per press, not per held frame
        let mouse_down = window.get_mouse_down(MouseButton::Left);
        if mouse_down && !was_mouse_down {
            if let Some((mouse_x, mouse_y)) = window.get_mouse_pos(MouseMode::Discard) {
                let (mouse_x, mouse_y) = (mouse_x as i32, mouse_y as i32);

                if mouse_y < TOOLBAR_HEIGHT as i32 {
                    let slot = mouse_x.div_euclid(ICON_PIXELS);
                    if slot >= 0 && (slot as usize) < patterns.len() {
                        selected = slot as usize;
                        draw_toolbar(&mut pixels, WIDTH, &icons, selected);
                    }
                } else {
                    // The grid surface's size is read here, per click, so a
                    // resized layout keeps mapping correctly.
                    life.place_pattern(
                        &patterns[selected],
                        mouse_x,
                        mouse_y - TOOLBAR_HEIGHT as i32,
                        WIDTH as i32,
                        GRID_HEIGHT as i32,
                    );

                    cells_were_updated = true;
                }
            }
        }
        was_mouse_down = mouse_down;

        if is_animating {
            let now = Instant::now();
            while next_step <= now {
                cells_were_updated |= life.step() != 0;
                next_step += step_interval;
            }
        } else {
            // Don't burst through missed generations on unpause
            next_step = Instant::now();
        }

        // Copy any updated cells to the framebuffer
        if cells_were_updated {
            for y in 0..GRID_HEIGHT {
                let (_, cell_y) =
                    life.pixel_to_cell(0, y as i32, WIDTH as i32, GRID_HEIGHT as i32);
                for x in 0..WIDTH {
                    let (cell_x, _) =
                        life.pixel_to_cell(x as i32, 0, WIDTH as i32, GRID_HEIGHT as i32);
                    pixels[x + (y + TOOLBAR_HEIGHT) * WIDTH] = if life.get(cell_x, cell_y) {
                        INK_ALIVE
                    } else {
                        INK_DEAD
                    };
                }
            }

            cells_were_updated = false;
        }

        // Present the framebuffer, updated or otherwise, to the screen
        match window.update_with_buffer(&pixels, WIDTH, HEIGHT) {
            Ok(()) => {}
            Err(err) => {
                println!("[ERROR] minifb encountered an error updating the framebuffer: {err:#?}")
            }
        }
    }
}

/// Paints the pattern palette across the top of the framebuffer, one icon
/// per catalog entry, with the selected slot tinted.
fn draw_toolbar(pixels: &mut [u32], stride: usize, icons: &[Vec<u8>], selected: usize) {
    let icon_px = ICON_PIXELS as usize;

    // Background for the whole strip, including any slack past the icons
    for pixel in pixels[..stride * icon_px].iter_mut() {
        *pixel = TOOLBAR_BG;
    }

    for (slot, icon) in icons.iter().enumerate() {
        let background = if slot == selected {
            TOOLBAR_BG_SELECTED
        } else {
            TOOLBAR_BG
        };

        let x0 = slot * icon_px;
        for y in 0..icon_px {
            for x in 0..icon_px {
                pixels[x0 + x + y * stride] = if icon[x + y * icon_px] == 1 {
                    TOOLBAR_INK
                } else {
                    background
                };
            }
        }
    }
}
