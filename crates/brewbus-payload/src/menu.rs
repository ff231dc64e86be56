//! UI menu payloads.
//!
//! The coordinator pushes list contents to display nodes one window at a
//! time: a window header naming the list and scroll position, then up to
//! [`MAX_MENU_ITEMS`] fixed 27-byte item records.

use bytes::{BufMut, BytesMut};

use brewbus_wire::{MsgType, MAX_PAYLOAD};

use crate::dispatch::Payload;
use crate::error::{PayloadError, Result};

/// Fixed width of the item text field, in bytes.
pub const MENU_TEXT_SIZE: usize = 24;

/// Most items one frame can carry after the four-byte window header.
pub const MAX_MENU_ITEMS: usize = (MAX_PAYLOAD - 4) / MenuItem::SIZE;

/// Item is currently highlighted.
pub const ITEM_SELECTED: u8 = 0x01;

/// Item cannot be activated.
pub const ITEM_DISABLED: u8 = 0x02;

/// Item navigates back up the menu tree.
pub const ITEM_IS_BACK: u8 = 0x04;

/// Item pages forward through a long list.
pub const ITEM_IS_NEXT: u8 = 0x08;

/// One menu entry.
///
/// Wire layout (27 bytes): item id u8, icon id u8, flags u8, then a
/// 24-byte NUL-padded UTF-8 text field. Text longer than the field is
/// truncated at a character boundary on encode; roughly 12 Cyrillic
/// characters fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Sent back in the input event when the item is activated.
    pub item_id: u8,
    /// 0 = no icon.
    pub icon_id: u8,
    /// Flag bits (`ITEM_SELECTED`, `ITEM_DISABLED`, ...).
    pub flags: u8,
    pub text: String,
}

impl MenuItem {
    pub const SIZE: usize = 3 + MENU_TEXT_SIZE;

    /// Append the 27-byte wire encoding to `dst`.
    pub fn encode(&self, dst: &mut BytesMut) {
        dst.reserve(Self::SIZE);
        dst.put_u8(self.item_id);
        dst.put_u8(self.icon_id);
        dst.put_u8(self.flags);

        let text = self.wire_text();
        dst.put_slice(text);
        dst.put_bytes(0, MENU_TEXT_SIZE - text.len());
    }

    /// Decode an item from the front of `src`.
    pub fn decode(src: &[u8]) -> Option<Self> {
        if src.len() < Self::SIZE {
            return None;
        }
        let raw = &src[3..Self::SIZE];
        let end = raw.iter().position(|&b| b == 0).unwrap_or(MENU_TEXT_SIZE);
        Some(Self {
            item_id: src[0],
            icon_id: src[1],
            flags: src[2],
            text: String::from_utf8_lossy(&raw[..end]).into_owned(),
        })
    }

    // Text clipped to the field width without splitting a character.
    fn wire_text(&self) -> &[u8] {
        let bytes = self.text.as_bytes();
        if bytes.len() <= MENU_TEXT_SIZE {
            return bytes;
        }
        let mut end = MENU_TEXT_SIZE;
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }
        &bytes[..end]
    }
}

/// One window of a list, pushed to a display node.
///
/// Wire layout: list id u8, total item count u8 (for scrollbar math),
/// start index u8, window item count u8, then the item records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuWindow {
    /// Context id echoed by input events from this list.
    pub list_id: u8,
    /// Items in the whole list, not just this window.
    pub total_items: u8,
    /// Index of the first item in this window.
    pub start_index: u8,
    pub items: Vec<MenuItem>,
}

impl Payload for MenuWindow {
    const MESSAGE_TYPE: MsgType = MsgType::CmdUiMenu;

    fn encoded_len(&self) -> usize {
        4 + self.items.len() * MenuItem::SIZE
    }

    fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        if self.items.len() > MAX_MENU_ITEMS {
            return Err(PayloadError::TooManyItems {
                count: self.items.len(),
                max: MAX_MENU_ITEMS,
            });
        }
        dst.reserve(self.encoded_len());
        dst.put_u8(self.list_id);
        dst.put_u8(self.total_items);
        dst.put_u8(self.start_index);
        dst.put_u8(self.items.len() as u8);
        for item in &self.items {
            item.encode(dst);
        }
        Ok(())
    }

    fn decode(src: &[u8]) -> Option<Self> {
        if src.len() < 4 {
            return None;
        }
        let count = src[3] as usize;
        if src.len() < 4 + count * MenuItem::SIZE {
            return None;
        }

        let mut items = Vec::with_capacity(count);
        for i in 0..count {
            let offset = 4 + i * MenuItem::SIZE;
            items.push(MenuItem::decode(&src[offset..])?);
        }
        Some(Self {
            list_id: src[0],
            total_items: src[1],
            start_index: src[2],
            items,
        })
    }
}
