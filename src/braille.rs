use crate::particles::ParticleField;

/// Braille character rendering for high-resolution terminal graphics.
/// Each Braille character represents a 2x4 grid of dots (8 dots total).
///
/// Dot positions and their bit values:
/// ```text
/// (0,0)=0x01  (1,0)=0x08
/// (0,1)=0x02  (1,1)=0x10
/// (0,2)=0x04  (1,2)=0x20
/// (0,3)=0x40  (1,3)=0x80
/// ```
///
/// Unicode Braille patterns: U+2800 to U+28FF (256 patterns)
const BRAILLE_BASE: u32 = 0x2800;

/// Dot position to bit mapping for Braille characters
const BRAILLE_DOTS: [[u8; 4]; 2] = [
    [0x01, 0x02, 0x04, 0x40], // Left column (x=0): rows 0,1,2,3
    [0x08, 0x10, 0x20, 0x80], // Right column (x=1): rows 0,1,2,3
];

/// A single rendered Braille cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrailleCell {
    pub x: u16,
    pub y: u16,
    pub char: char,
}

/// Rasterize every particle as a filled disc into Braille cells.
///
/// The field lives in virtual pixels; the canvas is `canvas_width` x
/// `canvas_height` terminal cells. Only cells with at least one dot are
/// returned.
pub fn render_to_braille(field: &ParticleField, canvas_width: u16, canvas_height: u16) -> Vec<BrailleCell> {
    let dots_w = canvas_width as usize * 2;
    let dots_h = canvas_height as usize * 4;
    if dots_w == 0 || dots_h == 0 || field.width <= 0.0 || field.height <= 0.0 {
        return Vec::new();
    }

    // Pixel -> dot scale factors
    let scale_x = dots_w as f32 / field.width;
    let scale_y = dots_h as f32 / field.height;

    let mut patterns = vec![0u8; canvas_width as usize * canvas_height as usize];
    let mut plot = |dx: isize, dy: isize| {
        if dx < 0 || dy < 0 || dx as usize >= dots_w || dy as usize >= dots_h {
            return;
        }
        let (dx, dy) = (dx as usize, dy as usize);
        let idx = (dy / 4) * canvas_width as usize + dx / 2;
        patterns[idx] |= BRAILLE_DOTS[dx % 2][dy % 4];
    };

    for particle in &field.particles {
        let cx = particle.x * scale_x;
        let cy = particle.y * scale_y;
        let rx = particle.size * scale_x;
        let ry = particle.size * scale_y;

        // Center dot always lands so sub-dot particles stay visible
        plot(cx.floor() as isize, cy.floor() as isize);

        let x0 = (cx - rx).floor() as isize;
        let x1 = (cx + rx).ceil() as isize;
        let y0 = (cy - ry).floor() as isize;
        let y1 = (cy + ry).ceil() as isize;
        for dy in y0..=y1 {
            for dx in x0..=x1 {
                let nx = (dx as f32 + 0.5 - cx) / rx.max(f32::EPSILON);
                let ny = (dy as f32 + 0.5 - cy) / ry.max(f32::EPSILON);
                if nx * nx + ny * ny <= 1.0 {
                    plot(dx, dy);
                }
            }
        }
    }

    patterns
        .iter()
        .enumerate()
        .filter(|&(_, &pattern)| pattern != 0)
        .map(|(idx, &pattern)| BrailleCell {
            x: (idx % canvas_width as usize) as u16,
            y: (idx / canvas_width as usize) as u16,
            char: char::from_u32(BRAILLE_BASE + pattern as u32).unwrap_or(' '),
        })
        .collect()
}

/// Virtual pixel size of a terminal canvas
pub fn canvas_pixels(columns: u16, rows: u16, cell_width_px: u16, cell_height_px: u16) -> (f32, f32) {
    (
        columns as f32 * cell_width_px as f32,
        rows as f32 * cell_height_px as f32,
    )
}

/// Map a terminal cell to the virtual pixel at its center
pub fn cell_center_pixels(column: u16, row: u16, cell_width_px: u16, cell_height_px: u16) -> (f32, f32) {
    (
        (column as f32 + 0.5) * cell_width_px as f32,
        (row as f32 + 0.5) * cell_height_px as f32,
    )
}
