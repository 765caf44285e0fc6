//! Ordered color palettes.

use std::fmt::{self, Debug};

use crate::error::{ColorForgeError, Result};

/// Index of a color within a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorId(usize);

impl ColorId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A finite ordered set of distinct colors.
///
/// Palette order is the default order in which the search tries colors.
/// Colors are compared only for identity.
///
/// # Example
///
/// ```
/// use colorforge_core::Palette;
///
/// let palette = Palette::new(["red", "green", "blue"]).unwrap();
/// assert_eq!(palette.len(), 3);
///
/// let two = palette.truncated(2);
/// assert_eq!(two.colors(), &["red", "green"]);
///
/// assert!(Palette::new(["red", "red"]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Palette<C> {
    colors: Vec<C>,
}

impl<C: Clone + PartialEq + Debug> Palette<C> {
    /// Creates a palette, rejecting duplicate colors.
    pub fn new(colors: impl IntoIterator<Item = C>) -> Result<Self> {
        let colors: Vec<C> = colors.into_iter().collect();
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(ColorForgeError::InvalidPalette(format!(
                    "color {color:?} appears more than once"
                )));
            }
        }
        Ok(Self { colors })
    }

    /// Returns the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this palette.
    pub fn color(&self, id: ColorId) -> &C {
        &self.colors[id.0]
    }

    /// Returns the id of a color, if present.
    pub fn id_of(&self, color: &C) -> Option<ColorId> {
        self.colors.iter().position(|c| c == color).map(ColorId)
    }

    /// Iterates color ids in palette order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = ColorId> {
        (0..self.colors.len()).map(ColorId)
    }

    pub fn colors(&self) -> &[C] {
        &self.colors
    }

    /// Returns a palette with only the first `count` colors.
    ///
    /// A `count` larger than the palette keeps every color.
    pub fn truncated(&self, count: usize) -> Self {
        let count = count.min(self.colors.len());
        Self {
            colors: self.colors[..count].to_vec(),
        }
    }
}

impl<C: Debug> Debug for Palette<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.colors).finish()
    }
}
