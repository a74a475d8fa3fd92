//! Item: The atomic unit of a reconciled list.
//!
//! An [`Item`] carries one stable identity key and three content fields.
//! The split matters: identity (`id`) decides whether two snapshots refer
//! to the same row entity, while `name`, `image`, and `description` decide
//! whether that entity's visible content changed. The diff engine never
//! mixes the two questions.

use std::fmt;

/// Stable identity key for a list entry.
///
/// Ids are long-lived across data refreshes and are used ONLY for entity
/// identity, never for content comparison. They must be unique within any
/// single sequence snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Create an id from its raw 64-bit key.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw 64-bit key.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a visual asset (e.g. `"rose.png"`).
///
/// The core never loads or draws the asset; it only compares references.
/// An item without an image (`None`) is rendered with a placeholder asset
/// by the render boundary.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    /// Create an image reference from an asset name or path.
    #[inline]
    pub fn new(asset: impl Into<String>) -> Self {
        Self(asset.into())
    }

    /// Get the asset reference as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    #[inline]
    fn from(asset: &str) -> Self {
        Self(asset.to_owned())
    }
}

impl From<String> for ImageRef {
    #[inline]
    fn from(asset: String) -> Self {
        Self(asset)
    }
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image({})", self.0)
    }
}

/// One list entry: a stable identity plus displayable content.
///
/// Built in the builder style:
///
/// ```
/// use rebind::{ImageRef, Item};
///
/// let rose = Item::new(1, "Rose")
///     .with_image(ImageRef::new("rose.png"))
///     .with_description("red");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable identity key.
    id: ItemId,
    /// Display name shown in the row.
    name: String,
    /// Optional visual asset; `None` means the placeholder.
    image: Option<ImageRef>,
    /// Longer text used for content comparison, not rendered in the row.
    description: String,
}

impl Item {
    /// Create an item with the given identity and display name.
    ///
    /// Image defaults to `None` (placeholder) and description to empty.
    #[inline]
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
            description: String::new(),
        }
    }

    /// Set the image reference (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the description (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Get the identity key.
    #[inline]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Get the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the image reference, if any.
    #[inline]
    pub const fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Get the description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the display name.
    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the image reference (`None` reverts to the placeholder).
    #[inline]
    pub fn set_image(&mut self, image: Option<ImageRef>) {
        self.image = image;
    }

    /// Replace the description.
    #[inline]
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Whether `self` and `other` refer to the same row entity.
    ///
    /// Identity is equality of `id`, independent of every other field.
    #[inline]
    pub fn same_entity(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Whether `self` and `other` carry equal content.
    ///
    /// Compares `name`, `image`, and `description`; never `id`.
    #[inline]
    pub fn same_content(&self, other: &Self) -> bool {
        self.name == other.name && self.image == other.image && self.description == other.description
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("image", &self.image)
            .field("description", &self.description)
            .finish()
    }
}
