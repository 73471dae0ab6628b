use crate::indices::{DecodedIndices, PageOffset, TableIndex};
use crate::layout::LinearAddressLayout;
use crate::page_size::{PageSize, PageSizeMode};
use core::fmt;

/// Virtual (linear) memory address.
///
/// A thin wrapper around a `u64`. It does not validate canonicality; every
/// 64-bit pattern decodes, and bits `[63:48]` are simply ignored by the index
/// accessors.
///
/// ### Examples
/// ```rust
/// # use kernel_page_indices::*;
/// let va = VirtualAddress::new(0xFFFF_FFFF_8020_0000);
/// assert_eq!(va.pml4_index().as_u16(), 511);
/// assert_eq!(va.pdpt_index().as_u16(), 511);
/// assert_eq!(va.pd_index().as_u16(), 1);
/// assert_eq!(va.offset::<Size2M>().as_u64(), 0);
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VirtualAddress(u64);

impl VirtualAddress {
    #[inline]
    #[must_use]
    pub const fn new(v: u64) -> Self {
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0)
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Bit-field view of this address.
    #[inline]
    #[must_use]
    pub const fn layout(self) -> LinearAddressLayout {
        LinearAddressLayout::from_bits(self.0)
    }

    /// Extract the PML4 index (bits 47-39 of the virtual address).
    #[inline]
    #[must_use]
    pub const fn pml4_index(self) -> TableIndex {
        TableIndex::new(self.layout().pml4_index())
    }

    /// Extract the PDPT index (bits 38-30 of the virtual address).
    #[inline]
    #[must_use]
    pub const fn pdpt_index(self) -> TableIndex {
        TableIndex::new(self.layout().pdpt_index())
    }

    /// Extract the PD index (bits 29-21 of the virtual address).
    #[inline]
    #[must_use]
    pub const fn pd_index(self) -> TableIndex {
        TableIndex::new(self.layout().pd_index())
    }

    /// Extract the PT index (bits 20-12 of the virtual address).
    ///
    /// Only meaningful for 4 KiB mappings; for 2 MiB pages these bits are part
    /// of the page offset.
    #[inline]
    #[must_use]
    pub const fn pt_index(self) -> TableIndex {
        TableIndex::new(self.layout().pt_index())
    }

    /// The offset within a page of size `S`.
    #[inline]
    #[must_use]
    pub const fn offset<S: PageSize>(self) -> PageOffset {
        self.page_offset(S::MODE)
    }

    /// The offset within a page of the given `mode`.
    #[inline]
    #[must_use]
    pub const fn page_offset(self, mode: PageSizeMode) -> PageOffset {
        PageOffset::new(self.0 & mode.offset_mask())
    }

    /// Decode the index path for pages of size `S`.
    #[inline]
    #[must_use]
    pub const fn decode<S: PageSize>(self) -> DecodedIndices {
        self.decode_as(S::MODE)
    }

    /// Decode the index path for pages of the given `mode`.
    ///
    /// The PML4, PDPT and PD indices are identical for both modes; only the
    /// width of the offset changes.
    #[inline]
    #[must_use]
    pub const fn decode_as(self, mode: PageSizeMode) -> DecodedIndices {
        DecodedIndices::new(
            mode,
            self.pml4_index(),
            self.pdpt_index(),
            self.pd_index(),
            self.page_offset(mode),
        )
    }
}

impl fmt::Debug for VirtualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VA(0x{:016X})", self.as_u64())
    }
}

impl fmt::Display for VirtualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016X}", self.as_u64())
    }
}

impl From<u64> for VirtualAddress {
    #[inline]
    fn from(v: u64) -> Self {
        Self::new(v)
    }
}
