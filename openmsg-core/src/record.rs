//! Packed records
//!
//! A record is a `#[repr(C)]` struct built from [`EndianWrapper`] fields,
//! [`ArrayCharacter`] buffers and arrays of those. Every such field has an
//! alignment of 1, so the struct has no padding and its bytes are the
//! concatenation of its fields' bytes in declaration order. Deriving
//! [`bytemuck::Pod`] checks that at compile time.
//!
//! ```
//! use bytemuck::{Pod, Zeroable};
//! use openmsg_core::{ArrayChar, Be, Optionull, PackedRecord};
//!
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! #[repr(C)]
//! struct Quote {
//!     id: Be<u32>,
//!     size: Be<Optionull<u16>>,
//!     venue: ArrayChar<4>,
//! }
//!
//! impl PackedRecord for Quote {}
//!
//! let quote = Quote {
//!     id: Be::new(7),
//!     size: Be::default(),
//!     venue: ArrayChar::from_str("XNAS"),
//! };
//! assert_eq!(quote.as_bytes(), b"\0\0\0\x07\xff\xffXNAS");
//! ```
//!
//! [`EndianWrapper`]: crate::EndianWrapper
//! [`ArrayCharacter`]: crate::ArrayCharacter

use bytes::{BufMut, Bytes};
use bytemuck::Pod;

use crate::error::LayoutError;

#[cfg(feature = "logging")]
use tracing::debug;

/// A fixed, padding-free layout that can be viewed as bytes
pub trait PackedRecord: Pod {
    /// Size of the record in bytes
    fn size() -> usize {
        core::mem::size_of::<Self>()
    }

    /// The record's bytes, borrowed
    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// The record's bytes, copied
    fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }

    /// Append the record's bytes to `buf`
    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(self.as_bytes());
    }

    /// Borrow `bytes` as a record
    fn ref_from_bytes(bytes: &[u8]) -> Result<&Self, LayoutError> {
        check_size::<Self>(bytes)?;
        bytemuck::try_from_bytes(bytes)
            .map_err(|_| LayoutError::Misaligned(core::mem::align_of::<Self>()))
    }

    /// Copy `bytes` into a record
    fn read_from_bytes(bytes: &[u8]) -> Result<Self, LayoutError> {
        check_size::<Self>(bytes)?;
        Ok(bytemuck::pod_read_unaligned(bytes))
    }
}

fn check_size<T: Pod>(bytes: &[u8]) -> Result<(), LayoutError> {
    let expected = core::mem::size_of::<T>();
    if bytes.len() != expected {
        #[cfg(feature = "logging")]
        debug!(expected, actual = bytes.len(), "rejecting record view");
        return Err(LayoutError::SizeMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array_char::ArrayChar;
    use crate::endian_wrapper::{Be, Le};
    use crate::field::Optionull;
    use bytemuck::Zeroable;
    use bytes::BytesMut;

    #[derive(Clone, Copy, Pod, Zeroable)]
    #[repr(C)]
    struct Header {
        kind: Be<u8>,
        length: Be<u16>,
        sequence: Le<Optionull<u32>>,
        tag: ArrayChar<3, true>,
    }

    impl PackedRecord for Header {}

    fn sample() -> Header {
        Header {
            kind: Be::new(0x01),
            length: Be::new(0x0203),
            sequence: Le::default(),
            tag: ArrayChar::from_str("abc"),
        }
    }

    #[test]
    fn test_layout_has_no_padding() {
        assert_eq!(Header::size(), 1 + 2 + 4 + 3);
        assert_eq!(
            sample().as_bytes(),
            &[0x01, 0x02, 0x03, 0xFF, 0xFF, 0xFF, 0xFF, b'a', b'b', 0]
        );
    }

    #[test]
    fn test_read_back() {
        let bytes = sample().to_bytes();
        let header = Header::read_from_bytes(&bytes).unwrap();
        assert_eq!(header.length.get(), 0x0203);
        assert!(header.sequence.is_not_set());
        assert_eq!(header.tag.view(), b"ab");

        let view = Header::ref_from_bytes(&bytes).unwrap();
        assert_eq!(view.kind.get(), 1);
    }

    #[test]
    fn test_size_mismatch() {
        let bytes = sample().to_bytes();
        assert_eq!(
            Header::read_from_bytes(&bytes[..9]).err(),
            Some(LayoutError::SizeMismatch {
                expected: 10,
                actual: 9
            })
        );
        assert!(Header::ref_from_bytes(&[0u8; 11]).is_err());
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buf = BytesMut::new();
        sample().write_to(&mut buf);
        sample().write_to(&mut buf);
        assert_eq!(buf.len(), 20);
        assert_eq!(&buf[10..], sample().as_bytes());
    }
}
