/// A decoded RGBA8 texture: contiguous pixels in row-major order.
///
/// Decoding happens at the loader boundary only; everything downstream
/// treats the pixel data as opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Surface {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * 4,
            "data length must equal width * height * 4"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the surface holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 16]; // 2x2 RGBA
        let surface = Surface::new(data.clone(), 2, 2);
        assert_eq!(surface.width(), 2);
        assert_eq!(surface.height(), 2);
        assert_eq!(surface.data(), &data[..]);
    }

    #[test]
    fn test_is_empty() {
        assert!(Surface::new(Vec::new(), 0, 0).is_empty());
        assert!(!Surface::new(vec![255u8; 4], 1, 1).is_empty());
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 4")]
    fn test_mismatched_data_length_panics_in_debug() {
        let data = vec![0u8; 10]; // wrong size for 2x2 RGBA
        Surface::new(data, 2, 2);
    }
}
