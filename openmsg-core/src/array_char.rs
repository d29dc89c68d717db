//! Fixed-capacity character buffers
//!
//! Text fields carry single-byte code units only; multi-byte code unit
//! encodings (UTF-16, UTF-32) are deliberately not supported, which keeps
//! text free of byte order concerns.
//!
//! Copying a source of `S` bytes into a buffer of capacity `N`:
//! 1. copies `min(N, S)` bytes verbatim,
//! 2. zero-fills the remaining `N - S` bytes when `S < N`,
//! 3. forces byte `N - 1` to zero when the buffer is zero-terminated, which
//!    truncates the last copied byte when `S >= N`.

use core::cmp::Ordering;
use core::ffi::CStr;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::Utf8Error;

#[cfg(feature = "logging")]
use tracing::trace;

/// `N` bytes of text; when `Z` is true byte `N - 1` is always zero.
///
/// Comparison is byte-wise over the first `min(N, M)` bytes of the two
/// buffers, so buffers of different capacity that agree on that prefix
/// compare equal. Compare [`to_string_view`](Self::to_string_view) results
/// for logical string equality.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct ArrayCharacter<const N: usize, const Z: bool> {
    elems: [u8; N],
}

/// Text buffer, not zero-terminated unless asked
pub type ArrayChar<const N: usize, const Z: bool = false> = ArrayCharacter<N, Z>;

const fn copy_truncated<const N: usize>(src: &[u8], zero_terminated: bool) -> [u8; N] {
    let mut elems = [0u8; N];
    let count = if src.len() < N { src.len() } else { N };
    let mut i = 0;
    while i < count {
        elems[i] = src[i];
        i += 1;
    }
    if zero_terminated && N > 0 {
        elems[N - 1] = 0;
    }
    elems
}

impl<const N: usize, const Z: bool> ArrayCharacter<N, Z> {
    /// Capacity in bytes
    pub const SIZE: usize = N;

    /// Whether the last byte is reserved for a terminating zero
    pub const IS_ZERO_TERMINATED: bool = Z;

    const CAPACITY_CHECK: () = assert!(
        N > 0 || !Z,
        "a zero-terminated buffer needs a capacity of at least one byte"
    );

    /// All bytes zero
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self { elems: [0; N] }
    }

    /// Every byte set to `c` (except a terminating zero)
    pub const fn filled(c: u8) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        let mut elems = [c; N];
        if Z && N > 0 {
            elems[N - 1] = 0;
        }
        Self { elems }
    }

    /// Copy a counted byte sequence, truncating or zero-padding to `N`.
    ///
    /// Const constructors truncate without logging; use
    /// [`assign_bytes`](Self::assign_bytes) to get the `trace!` event.
    pub const fn from_bytes(src: &[u8]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self {
            elems: copy_truncated::<N>(src, Z),
        }
    }

    /// Copy a fixed-size array or literal
    pub const fn from_array<const S: usize>(src: &[u8; S]) -> Self {
        Self::from_bytes(src)
    }

    /// Copy UTF-8 text, byte for byte
    #[allow(clippy::should_implement_trait)]
    pub const fn from_str(src: &str) -> Self {
        Self::from_bytes(src.as_bytes())
    }

    /// Copy another buffer of any capacity and termination
    pub const fn convert<const M: usize, const Y: bool>(src: &ArrayCharacter<M, Y>) -> Self {
        Self::from_bytes(&src.elems)
    }

    /// Copy at most `max` bytes of `src`, stopping at the first zero byte
    pub fn from_array_pointer(src: &[u8], max: usize) -> Self {
        let mut out = Self::new();
        out.assign_array_pointer(src, max);
        out
    }

    /// Copy a C string (without its terminator)
    pub fn from_c_str(src: &CStr) -> Self {
        Self::from_array_pointer(src.to_bytes(), usize::MAX)
    }

    /// Replace the contents with a counted byte sequence
    pub fn assign_bytes(&mut self, src: &[u8]) -> &mut Self {
        #[cfg(feature = "logging")]
        if Self::truncates(src.len()) {
            trace!(capacity = N, source_len = src.len(), "truncating text field");
        }
        self.elems = copy_truncated::<N>(src, Z);
        self
    }

    /// True when copying `len` bytes loses source bytes
    pub const fn truncates(len: usize) -> bool {
        len > N || (Z && N > 0 && len == N)
    }

    /// Replace the contents with UTF-8 text
    pub fn assign_str(&mut self, src: &str) -> &mut Self {
        self.assign_bytes(src.as_bytes())
    }

    /// Replace the contents with another buffer
    pub fn assign<const M: usize, const Y: bool>(&mut self, src: &ArrayCharacter<M, Y>) -> &mut Self {
        self.assign_bytes(&src.elems)
    }

    /// Replace the contents with at most `max` bytes of `src`, stopping at
    /// the first zero byte
    pub fn assign_array_pointer(&mut self, src: &[u8], max: usize) -> &mut Self {
        let limit = max.min(src.len());
        let count = memchr::memchr(0, &src[..limit]).unwrap_or(limit);
        self.assign_bytes(&src[..count])
    }

    /// Length up to the first zero byte when `trim`, capacity otherwise
    pub fn length(&self, trim: bool) -> usize {
        if trim {
            memchr::memchr(0, &self.elems).unwrap_or(N)
        } else {
            N
        }
    }

    /// True when the first byte is zero
    pub const fn empty(&self) -> bool {
        N == 0 || self.elems[0] == 0
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        self.elems = [0; N];
    }

    /// Borrowed text, trimmed at the first zero byte or full capacity
    pub fn to_string_view(&self, trim: bool) -> &[u8] {
        &self.elems[..self.length(trim)]
    }

    /// Trimmed text
    pub fn view(&self) -> &[u8] {
        self.to_string_view(true)
    }

    /// Borrowed text as UTF-8
    pub fn to_str(&self, trim: bool) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.to_string_view(trim))
    }

    /// All `N` bytes
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.elems
    }
}

impl<const N: usize, const Z: bool> Default for ArrayCharacter<N, Z> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const Z: bool> From<&str> for ArrayCharacter<N, Z> {
    fn from(src: &str) -> Self {
        let mut out = Self::new();
        out.assign_str(src);
        out
    }
}

impl<const N: usize, const Z: bool> From<&[u8]> for ArrayCharacter<N, Z> {
    fn from(src: &[u8]) -> Self {
        let mut out = Self::new();
        out.assign_bytes(src);
        out
    }
}

impl<const N: usize, const Z: bool, const S: usize> From<&[u8; S]> for ArrayCharacter<N, Z> {
    fn from(src: &[u8; S]) -> Self {
        let mut out = Self::new();
        out.assign_bytes(src);
        out
    }
}

fn compare_prefix(lhs: &[u8], rhs: &[u8]) -> Ordering {
    let m = lhs.len().min(rhs.len());
    lhs[..m].cmp(&rhs[..m])
}

impl<const N: usize, const Z: bool, const M: usize, const Y: bool> PartialEq<ArrayCharacter<M, Y>>
    for ArrayCharacter<N, Z>
{
    fn eq(&self, other: &ArrayCharacter<M, Y>) -> bool {
        compare_prefix(&self.elems, &other.elems) == Ordering::Equal
    }
}

impl<const N: usize, const Z: bool> Eq for ArrayCharacter<N, Z> {}

impl<const N: usize, const Z: bool, const M: usize, const Y: bool> PartialOrd<ArrayCharacter<M, Y>>
    for ArrayCharacter<N, Z>
{
    fn partial_cmp(&self, other: &ArrayCharacter<M, Y>) -> Option<Ordering> {
        Some(compare_prefix(&self.elems, &other.elems))
    }
}

impl<const N: usize, const Z: bool> Ord for ArrayCharacter<N, Z> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.elems.cmp(&other.elems)
    }
}

impl<const N: usize, const Z: bool> Hash for ArrayCharacter<N, Z> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elems.hash(state);
    }
}

impl<const N: usize, const Z: bool> fmt::Debug for ArrayCharacter<N, Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayCharacter<{}>(\"{}\")", N, self.view().escape_ascii())
    }
}

// SAFETY: `repr(transparent)` over `[u8; N]`; every bit pattern is valid
// memory. A zero-terminated buffer viewed from foreign bytes may carry a
// non-zero last byte, which only affects `length(true)`.
unsafe impl<const N: usize, const Z: bool> bytemuck::Zeroable for ArrayCharacter<N, Z> {}

// SAFETY: see `Zeroable` above.
unsafe impl<const N: usize, const Z: bool> bytemuck::Pod for ArrayCharacter<N, Z> {}
