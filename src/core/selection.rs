//! Player selection of up to four words
//!
//! A Selection preserves the order words were picked in and never holds more
//! than [`GROUP_SIZE`] entries.

/// Number of words in a group (and the selection capacity)
pub const GROUP_SIZE: usize = 4;

/// Result of toggling a word in the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// Selection already holds four words; the word was not added
    Full,
}

/// Words currently selected by the player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    words: Vec<String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: Vec::with_capacity(GROUP_SIZE),
        }
    }

    /// Toggle a word in or out of the selection
    ///
    /// A selected word is always removed regardless of the current size.
    /// An unselected word is added only while fewer than four are selected.
    ///
    /// # Examples
    /// ```
    /// use gridconnect::core::{Selection, Toggle};
    ///
    /// let mut selection = Selection::new();
    /// assert_eq!(selection.toggle("BASS"), Toggle::Added);
    /// assert_eq!(selection.toggle("BASS"), Toggle::Removed);
    /// assert!(selection.is_empty());
    /// ```
    pub fn toggle(&mut self, word: &str) -> Toggle {
        if let Some(index) = self.words.iter().position(|w| w == word) {
            self.words.remove(index);
            Toggle::Removed
        } else if self.words.len() < GROUP_SIZE {
            self.words.push(word.to_string());
            Toggle::Added
        } else {
            Toggle::Full
        }
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.words.len() == GROUP_SIZE
    }

    /// Selected words in pick order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The selection as a submittable group, if exactly four words are selected
    #[must_use]
    pub fn as_group(&self) -> Option<[String; GROUP_SIZE]> {
        self.words.clone().try_into().ok()
    }
}
