/// Sprite silhouette as a dense boolean bitmap, one bit per pixel, built
/// once from the alpha channel of the painted sprite art.
#[derive(Clone, Debug)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    pub fn from_alpha(width: usize, height: usize, rgba: &[u8]) -> Mask {
        let bits = rgba.chunks(4).map(|px| px[3] > 0).collect();
        Mask { width, height, bits }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn solid(&self, x: i32, y: i32) -> bool {
        self.bits[y as usize * self.width + x as usize]
    }

    /// True if any opaque pixel of `self` coincides with an opaque pixel of
    /// `other`, with `other` placed at `offset` relative to `self`'s top
    /// left corner. Scans only the intersection of the two rectangles.
    pub fn overlaps(&self, other: &Mask, offset: (i32, i32)) -> bool {
        let (dx, dy) = offset;
        let x_from = dx.max(0);
        let y_from = dy.max(0);
        let x_to = (other.width as i32 + dx).min(self.width as i32);
        let y_to = (other.height as i32 + dy).min(self.height as i32);

        for y in y_from..y_to {
            for x in x_from..x_to {
                if self.solid(x, y) && other.solid(x - dx, y - dy) {
                    return true;
                }
            }
        }
        false
    }
}
