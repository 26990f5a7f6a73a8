//! Raster rendering of the knight graph and of path sets.
//!
//! Both renderers lay the board out the usual way: column `a` on the left,
//! row 1 at the bottom, one `cell_size`×`cell_size` cell per square.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::board::Board;
use crate::core::square::Square;
use crate::error::ExportError;
use crate::graph::KnightGraph;
use crate::search::PathSet;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const LIGHT_SQUARE: Rgb<u8> = Rgb([240, 217, 181]);
pub const DARK_SQUARE: Rgb<u8> = Rgb([181, 136, 99]);
pub const NODE_FILL: Rgb<u8> = Rgb([135, 206, 235]);
pub const EDGE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
pub const PATH_COLOR: Rgb<u8> = Rgb([220, 20, 20]);

/// Smallest cell edge the renderers draw with.
pub const MIN_CELL_SIZE: u32 = 8;

/// Largest cell edge the renderers draw with.
pub const MAX_CELL_SIZE: u32 = 256;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Edge length of one board cell in pixels, clamped to
    /// `MIN_CELL_SIZE..=MAX_CELL_SIZE` when drawing.
    pub cell_size: u32,
}

impl RenderOptions {
    fn cell(&self) -> u32 {
        self.cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { cell_size: 64 }
    }
}

/// Pixel centre of a square's cell.
pub fn cell_center(board: &Board, sq: Square, opts: RenderOptions) -> (u32, u32) {
    let c = board.coord_of(sq);
    let n = board.size() as u32;
    let cs = opts.cell();
    let x = c.col as u32 * cs + cs / 2;
    let y = (n - 1 - c.row as u32) * cs + cs / 2;
    (x, y)
}

/// Full-graph preview: every square as a node, every knight move as a line.
pub fn render_graph(graph: &KnightGraph, opts: RenderOptions) -> RgbImage {
    let board = graph.board();
    let side = board.size() as u32 * opts.cell();
    let mut img = RgbImage::from_pixel(side, side, BACKGROUND);

    for (a, b) in graph.edges() {
        let p = cell_center(board, a, opts);
        let q = cell_center(board, b, opts);
        draw_line(&mut img, p, q, EDGE_COLOR);
    }

    let r = (opts.cell() / 4).max(1) as i64;
    for sq in graph.squares() {
        let c = cell_center(board, sq, opts);
        fill_circle(&mut img, c, r, NODE_FILL);
        draw_ring(&mut img, c, r, EDGE_COLOR);
    }

    img
}

/// Path overlay: a checkerboard with an arrow for every move of every path and
/// a ring around the source and target squares.
pub fn render_paths(board: &Board, paths: &PathSet, opts: RenderOptions) -> RgbImage {
    let n = board.size() as u32;
    let cs = opts.cell();
    let mut img = RgbImage::from_pixel(n * cs, n * cs, BACKGROUND);

    for sq in board.squares() {
        let c = board.coord_of(sq);
        // a1 is a dark square.
        let color = if (c.row + c.col) % 2 == 0 {
            DARK_SQUARE
        } else {
            LIGHT_SQUARE
        };
        let x0 = c.col as u32 * cs;
        let y0 = (n - 1 - c.row as u32) * cs;
        fill_rect(&mut img, x0, y0, cs, cs, color);
    }

    for path in paths {
        for (from, to) in path.steps() {
            draw_arrow(
                &mut img,
                cell_center(board, from, opts),
                cell_center(board, to, opts),
                (cs / 5).max(2) as f32,
                PATH_COLOR,
            );
        }
    }

    let r = (cs * 3 / 10).max(1) as i64;
    for sq in [paths.source(), paths.target()] {
        draw_ring(&mut img, cell_center(board, sq, opts), r, PATH_COLOR);
    }

    img
}

/// Encode `img` as PNG at `file`.
pub fn save_png(img: &RgbImage, file: &Path) -> Result<(), ExportError> {
    img.save_with_format(file, ImageFormat::Png)
        .map_err(|e| ExportError::Image {
            path: file.display().to_string(),
            error: e.to_string(),
        })?;
    tracing::info!(
        path = %file.display(),
        width = img.width(),
        height = img.height(),
        "wrote image"
    );
    Ok(())
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgb<u8>) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            put(img, x as i64, y as i64, color);
        }
    }
}

/// Bresenham line, two pixels thick.
fn draw_line(img: &mut RgbImage, p: (u32, u32), q: (u32, u32), color: Rgb<u8>) {
    let (mut x0, mut y0) = (p.0 as i64, p.1 as i64);
    let (x1, y1) = (q.0 as i64, q.1 as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(img, x0, y0, color);
        put(img, x0 + 1, y0, color);
        put(img, x0, y0 + 1, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

fn draw_arrow(img: &mut RgbImage, from: (u32, u32), to: (u32, u32), head: f32, color: Rgb<u8>) {
    draw_line(img, from, to, color);

    let dx = to.0 as f32 - from.0 as f32;
    let dy = to.1 as f32 - from.1 as f32;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return;
    }
    let (ux, uy) = (dx / len, dy / len);
    let (sin, cos) = 0.45f32.sin_cos();

    for s in [sin, -sin] {
        // Rotate the reversed direction by ±0.45 rad.
        let wx = -ux * cos + uy * s;
        let wy = -uy * cos - ux * s;
        let tip_x = to.0 as f32 + wx * head;
        let tip_y = to.1 as f32 + wy * head;
        if tip_x >= 0.0 && tip_y >= 0.0 {
            draw_line(img, to, (tip_x.round() as u32, tip_y.round() as u32), color);
        }
    }
}

fn fill_circle(img: &mut RgbImage, c: (u32, u32), r: i64, color: Rgb<u8>) {
    let (cx, cy) = (c.0 as i64, c.1 as i64);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn draw_ring(img: &mut RgbImage, c: (u32, u32), r: i64, color: Rgb<u8>) {
    let (cx, cy) = (c.0 as i64, c.1 as i64);
    let inner = (r - 2).max(0);
    for dy in -r..=r {
        for dx in -r..=r {
            let d2 = dx * dx + dy * dy;
            if d2 <= r * r && d2 > inner * inner {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}
