//! Change payload: Field-level delta attached to an in-place update.
//!
//! When the diff engine matches an entity whose content changed, the render
//! boundary should patch only the affected visual fields rather than
//! reconstruct the whole row. A [`ChangePayload`] names exactly the
//! payload-eligible fields that differ and carries their new values.
//!
//! `description` participates in content comparison but is deliberately not
//! payload-eligible: it is never rendered in the row, so a description-only
//! change surfaces as an update with an *empty* payload and the boundary
//! falls back to a full rebind.

use bitflags::bitflags;

use super::item::{ImageRef, Item};

bitflags! {
    /// Payload-eligible item fields.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use rebind::FieldMask;
    /// let changed = FieldMask::NAME | FieldMask::IMAGE;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FieldMask: u8 {
        /// The display name changed.
        const NAME = 0b0000_0001;
        /// The image reference changed (possibly to the placeholder).
        const IMAGE = 0b0000_0010;
    }
}

impl std::fmt::Debug for FieldMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Field-level delta for one updated row.
///
/// Constructed by the diff engine per changed entity pair, consumed by the
/// render boundary, then discarded. An empty payload means "content changed
/// but no payload-eligible field did"; the boundary should fully rebind the
/// row in that case.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ChangePayload {
    fields: FieldMask,
    name: Option<String>,
    image: Option<ImageRef>,
}

impl ChangePayload {
    /// Compute the payload between two snapshots of the same entity.
    ///
    /// Enumerates exactly the payload-eligible fields that differ; the
    /// result is empty when only the description changed.
    pub fn between(old: &Item, new: &Item) -> Self {
        let mut payload = Self::default();
        if old.name() != new.name() {
            payload.fields |= FieldMask::NAME;
            payload.name = Some(new.name().to_owned());
        }
        if old.image() != new.image() {
            payload.fields |= FieldMask::IMAGE;
            payload.image = new.image().cloned();
        }
        payload
    }

    /// Which payload-eligible fields changed.
    #[inline]
    pub const fn fields(&self) -> FieldMask {
        self.fields
    }

    /// Whether the given field is part of this payload.
    #[inline]
    pub const fn has(&self, field: FieldMask) -> bool {
        self.fields.contains(field)
    }

    /// Whether no payload-eligible field changed.
    ///
    /// An empty payload still arrives attached to an update operation when
    /// only the description changed; see the module docs.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The new display name, when [`FieldMask::NAME`] is set.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The new image reference, when [`FieldMask::IMAGE`] is set.
    ///
    /// `None` with the flag set means the image was cleared and the row
    /// should show the placeholder; check [`ChangePayload::has`] to tell
    /// the two cases apart.
    #[inline]
    pub const fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Apply the payload to an item in place, patching only named fields.
    pub fn apply_to(&self, item: &mut Item) {
        if self.has(FieldMask::NAME) {
            if let Some(name) = self.name.as_deref() {
                item.set_name(name);
            }
        }
        if self.has(FieldMask::IMAGE) {
            item.set_image(self.image.clone());
        }
    }
}

impl std::fmt::Debug for ChangePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePayload")
            .field("fields", &self.fields)
            .field("name", &self.name)
            .field("image", &self.image)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_items_yield_empty_payload() {
        let a = Item::new(1, "Rose").with_description("red");
        let payload = ChangePayload::between(&a, &a.clone());

        assert!(payload.is_empty());
        assert_eq!(payload.fields(), FieldMask::empty());
    }

    #[test]
    fn test_image_only_change() {
        let old = Item::new(1, "Rose").with_description("red");
        let new = old.clone().with_image(ImageRef::new("rose.png"));

        let payload = ChangePayload::between(&old, &new);
        assert_eq!(payload.fields(), FieldMask::IMAGE);
        assert_eq!(payload.image().map(ImageRef::as_str), Some("rose.png"));
        assert_eq!(payload.name(), None);
    }

    #[test]
    fn test_image_cleared_still_flags_image() {
        let old = Item::new(1, "Rose").with_image(ImageRef::new("rose.png"));
        let mut new = old.clone();
        new.set_image(None);

        let payload = ChangePayload::between(&old, &new);
        assert!(payload.has(FieldMask::IMAGE));
        assert_eq!(payload.image(), None);
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_description_change_is_not_payload_eligible() {
        let old = Item::new(1, "Rose").with_description("red");
        let new = Item::new(1, "Rose").with_description("crimson");

        let payload = ChangePayload::between(&old, &new);
        assert!(payload.is_empty());
    }

    #[test]
    fn test_apply_patches_only_named_fields() {
        let old = Item::new(1, "Rose")
            .with_image(ImageRef::new("rose.png"))
            .with_description("red");
        let new = Item::new(1, "Tulip")
            .with_image(ImageRef::new("rose.png"))
            .with_description("red");

        let payload = ChangePayload::between(&old, &new);
        assert_eq!(payload.fields(), FieldMask::NAME);

        let mut patched = old.clone();
        payload.apply_to(&mut patched);
        assert_eq!(patched.name(), "Tulip");
        assert_eq!(patched.image().map(ImageRef::as_str), Some("rose.png"));
    }
}
