//! Pixel-level data model: 2D grids of samples, scalars, and booleans
//!
//! All three grid types are plain owned buffers in row-major order. A
//! classification borrows them for one pass and nothing retains a
//! reference afterwards.

/// A 2D grid of 3-component RGB samples, one decoded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    /// Row-major RGB triples
    data: Vec<[u8; 3]>,
}

impl PixelGrid {
    /// Create a pixel grid from row-major RGB triples.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height`; constructing a grid with
    /// inconsistent dimensions is a programming error.
    pub fn new(width: u32, height: u32, data: Vec<[u8; 3]>) -> Self {
        assert_eq!(
            data.len(),
            (width as usize) * (height as usize),
            "pixel buffer length must match grid dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = &[u8; 3]> {
        self.data.iter()
    }
}

/// A 2D grid of scalar channel values (hue, saturation, or value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ChannelGrid {
    /// Create a channel grid from row-major scalar values.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            (width as usize) * (height as usize),
            "channel buffer length must match grid dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a grid with the same value in every cell
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self::new(width, height, vec![value; (width as usize) * (height as usize)])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check that another grid has identical dimensions
    pub fn same_dimensions(&self, other: &ChannelGrid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Iterate over values in row-major order
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.iter().copied()
    }
}

/// A 2D grid of booleans marking region membership, same dimensions as its
/// source channel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Mask {
    pub(crate) fn new(width: u32, height: u32, data: Vec<bool>) -> Self {
        assert_eq!(
            data.len(),
            (width as usize) * (height as usize),
            "mask buffer length must match grid dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of cells where the predicate held
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&set| set).count()
    }
}
