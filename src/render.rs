use crate::domain::BoundingDomain;
use crate::error::GenError;
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Ordered color list cycled over first-seen labels, plus the fixed color
/// reserved for the outlier label
#[derive(Debug, Clone)]
pub struct Palette {
    pub colors: Vec<Rgb>,
    pub outlier: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Rgb::new(255, 0, 0),     // red
                Rgb::new(0, 255, 0),     // green
                Rgb::new(0, 0, 255),     // blue
                Rgb::new(255, 0, 255),   // magenta
                Rgb::new(0, 255, 255),   // cyan
                Rgb::new(255, 255, 0),   // yellow
                Rgb::new(128, 128, 128), // gray
                Rgb::new(255, 200, 0),   // orange
            ],
            outlier: Rgb::BLACK,
        }
    }
}

/// Deterministic first-seen-label to palette-slot mapping.
///
/// The outlier label `-1` always maps to the palette's fixed outlier color;
/// every other label claims the next slot the first time it appears, cycling
/// when the palette runs out.
pub struct LabelColorMap<'a> {
    palette: &'a Palette,
    assigned: HashMap<i64, Rgb>,
    next_slot: usize,
}

impl<'a> LabelColorMap<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        let mut assigned = HashMap::new();
        assigned.insert(-1, palette.outlier);
        Self {
            palette,
            assigned,
            next_slot: 0,
        }
    }

    pub fn color_for(&mut self, label: i64) -> Rgb {
        if let Some(&c) = self.assigned.get(&label) {
            return c;
        }
        let c = self.palette.colors[self.next_slot % self.palette.colors.len()];
        self.next_slot += 1;
        self.assigned.insert(label, c);
        c
    }
}

/// A plain RGB raster: white background, black one-pixel border, one pixel
/// per rendered point. Encoding/persistence is a collaborator's concern.
#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    fn new(width: usize, height: usize) -> Self {
        let mut raster = Self {
            width,
            height,
            pixels: vec![Rgb::WHITE; width * height],
        };
        for x in 0..width {
            raster.set(x, 0, Rgb::BLACK);
            raster.set(x, height - 1, Rgb::BLACK);
        }
        for y in 0..height {
            raster.set(0, y, Rgb::BLACK);
            raster.set(width - 1, y, Rgb::BLACK);
        }
        raster
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.pixels[y * self.width + x] = color;
    }
}

/// Render a labeled dataset onto a 2-D raster spanning the domain's first
/// two dimensions. Higher dimensions are projected away.
///
/// # Errors
///
/// Returns `GenError::StreamLengthMismatch` when points and labels disagree
/// in length, and `GenError::InvalidDomain` for a one-dimensional domain.
pub fn render_raster(
    points: &Array2<i64>,
    labels: &Array1<i64>,
    domain: &BoundingDomain,
    palette: &Palette,
) -> Result<Raster, GenError> {
    if points.nrows() != labels.len() {
        return Err(GenError::StreamLengthMismatch {
            data_rows: points.nrows(),
            label_rows: labels.len(),
        });
    }
    if domain.dimensionality() < 2 {
        return Err(GenError::InvalidDomain(
            "Rendering needs at least two dimensions".to_string(),
        ));
    }

    let inf_x = domain.inf()[0];
    let inf_y = domain.inf()[1];
    let width = (domain.sup()[0] - inf_x + 1) as usize;
    let height = (domain.sup()[1] - inf_y + 1) as usize;

    let mut raster = Raster::new(width, height);
    let mut color_map = LabelColorMap::new(palette);

    for (row, &label) in points.rows().into_iter().zip(labels.iter()) {
        let x = row[0] - inf_x;
        let y = row[1] - inf_y;
        if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
            continue;
        }
        let color = color_map.color_for(label);
        raster.set(x as usize, y as usize, color);
    }

    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_color_map_first_seen_cycling() {
        let palette = Palette::default();
        let mut map = LabelColorMap::new(&palette);

        // Slots are claimed in first-seen order, not label order
        assert_eq!(map.color_for(5), palette.colors[0]);
        assert_eq!(map.color_for(2), palette.colors[1]);
        assert_eq!(map.color_for(5), palette.colors[0]);

        // The ninth distinct label wraps around to slot 0
        for l in 10..16 {
            map.color_for(l);
        }
        assert_eq!(map.color_for(99), palette.colors[0]);
    }

    #[test]
    fn test_color_map_outlier_fixed() {
        let palette = Palette::default();
        let mut map = LabelColorMap::new(&palette);

        assert_eq!(map.color_for(-1), palette.outlier);
        map.color_for(0);
        assert_eq!(map.color_for(-1), palette.outlier);
    }

    #[test]
    fn test_render_pixels_and_background() {
        let domain = BoundingDomain::new(vec![0, 0], vec![9, 9]).unwrap();
        let points = array![[5, 5], [3, 4]];
        let labels = array![0, -1];
        let palette = Palette::default();

        let raster = render_raster(&points, &labels, &domain, &palette).unwrap();
        assert_eq!(raster.width(), 10);
        assert_eq!(raster.height(), 10);
        assert_eq!(raster.pixel(5, 5), palette.colors[0]);
        assert_eq!(raster.pixel(3, 4), palette.outlier);
        assert_eq!(raster.pixel(5, 4), Rgb::WHITE);
        // Border
        assert_eq!(raster.pixel(0, 7), Rgb::BLACK);
        assert_eq!(raster.pixel(9, 0), Rgb::BLACK);
    }

    #[test]
    fn test_render_offset_domain() {
        let domain = BoundingDomain::new(vec![100, 200], vec![109, 209]).unwrap();
        let points = array![[105, 205]];
        let labels = array![3];
        let palette = Palette::default();

        let raster = render_raster(&points, &labels, &domain, &palette).unwrap();
        assert_eq!(raster.pixel(5, 5), palette.colors[0]);
    }

    #[test]
    fn test_render_length_mismatch() {
        let domain = BoundingDomain::hypercube(2, 10).unwrap();
        let points = array![[1, 1]];
        let labels = array![0, 1];

        let result = render_raster(&points, &labels, &domain, &Palette::default());
        assert!(matches!(result, Err(GenError::StreamLengthMismatch { .. })));
    }

    #[test]
    fn test_render_one_dimensional_domain() {
        let domain = BoundingDomain::hypercube(1, 10).unwrap();
        let points = Array2::<i64>::zeros((0, 1));
        let labels = Array1::<i64>::zeros(0);

        let result = render_raster(&points, &labels, &domain, &Palette::default());
        assert!(matches!(result, Err(GenError::InvalidDomain(_))));
    }
}
