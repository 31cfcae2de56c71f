//! The palette of selected colors.
//!
//! A [`PaletteStore`] keeps the colors a user selected, in order of selection.
//! It maintains two invariants:
//!
//!   * No two entries have the same 24-bit source coordinates. Selecting a
//!     color again does not add another entry.
//!   * At most one entry is selected, namely the most recently added one.
//!
//! ```
//! # use eyedrop::ColorValue;
//! # use eyedrop::store::{PaletteStore, Selection};
//! let mut palette = PaletteStore::new();
//! let red = ColorValue::from_24bit(255, 0, 0);
//!
//! assert_eq!(palette.select(red.clone()), Selection::Added(0));
//! assert_eq!(palette.select(red), Selection::Duplicate(0));
//! assert_eq!(palette.len(), 1);
//! ```

use crate::core::{ColorMath, Space};
use crate::error::FormatError;
use crate::format::FormatConfig;
use crate::{ColorValue, Converter};

/// An entry in the palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    color: ColorValue,
    is_selected: bool,
}

impl Entry {
    /// Get the entry's color.
    pub fn color(&self) -> &ColorValue {
        &self.color
    }

    /// Determine whether the entry is selected.
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }
}

/// The outcome of selecting a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The color was added at the given index and is selected.
    Added(usize),
    /// The color already is in the palette at the given index. The palette is
    /// unchanged.
    Duplicate(usize),
}

impl Selection {
    /// Get the index of the color in the palette.
    pub fn index(&self) -> usize {
        match *self {
            Self::Added(index) | Self::Duplicate(index) => index,
        }
    }

    /// Determine whether the selected color was a duplicate.
    pub fn is_duplicate(&self) -> bool {
        matches!(*self, Self::Duplicate(_))
    }
}

/// An ordered palette of unique colors.
#[derive(Clone, Debug, Default)]
pub struct PaletteStore {
    entries: Vec<Entry>,
}

impl PaletteStore {
    /// Create a new, empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the index of the entry with the same source coordinates as the
    /// given color.
    fn position(&self, color: &ColorValue) -> Option<usize> {
        let rgb = color.to_24bit();
        self.entries
            .iter()
            .position(|entry| entry.color.to_24bit() == rgb)
    }

    /// Select the color.
    ///
    /// If the palette already contains a color with the same source
    /// coordinates, this method leaves the palette as is and returns the
    /// existing entry's index as a duplicate. Otherwise, it appends a new,
    /// selected entry and deselects all other entries.
    pub fn select(&mut self, color: ColorValue) -> Selection {
        if let Some(index) = self.position(&color) {
            return Selection::Duplicate(index);
        }

        for entry in self.entries.iter_mut() {
            entry.is_selected = false;
        }

        self.entries.push(Entry {
            color,
            is_selected: true,
        });
        Selection::Added(self.entries.len() - 1)
    }

    /// Remove the entry with the same source coordinates as the given color.
    /// The order of the remaining entries is unchanged. If there is no such
    /// entry, this method does nothing.
    pub fn remove(&mut self, color: &ColorValue) -> Option<Entry> {
        self.position(color).map(|index| self.entries.remove(index))
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the selected entry.
    pub fn selected(&self) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.is_selected)
    }

    /// Determine whether the palette contains a color with the same source
    /// coordinates.
    pub fn contains(&self, color: &ColorValue) -> bool {
        self.position(color).is_some()
    }

    /// Get the entry at the given index.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Get an iterator over the entries in order of selection.
    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format every color in the given space and serialize the result as a
    /// JSON array of strings.
    ///
    /// # Errors
    ///
    /// This method returns [`FormatError::UnsupportedSpace`] if the color
    /// space has no notation for the configured syntax.
    pub fn to_json<M: ColorMath>(
        &self,
        converter: &Converter<M>,
        space: Space,
        config: FormatConfig,
    ) -> Result<String, FormatError> {
        let texts = self
            .entries
            .iter()
            .map(|entry| converter.format(&entry.color, space, config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(serde_json::Value::from(texts).to_string())
    }
}

impl<'a> IntoIterator for &'a PaletteStore {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ====================================================================================================================
