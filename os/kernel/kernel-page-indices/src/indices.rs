use crate::page_size::PageSizeMode;
use core::fmt;

/// Index into one of the 512-entry paging structures (PML4, PDPT, PD or PT).
///
/// Always in `0..512`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TableIndex(u16);

impl TableIndex {
    /// Number of entries in every paging structure.
    pub const ENTRIES: u16 = 512;

    /// Construct an index from a raw `u16`.
    ///
    /// ### Panics / Debug assertions
    /// - Debug builds assert `v < 512`.
    #[inline]
    #[must_use]
    pub const fn new(v: u16) -> Self {
        debug_assert!(v < Self::ENTRIES);
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Return the index as `usize` for array indexing.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TableIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for TableIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableIndex({})", self.0)
    }
}

/// Byte offset within a page of the [`PageSizeMode`] it was decoded for.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PageOffset(u64);

impl PageOffset {
    #[inline]
    #[must_use]
    pub const fn new(v: u64) -> Self {
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PageOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for PageOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageOffset(0x{:X})", self.0)
    }
}

/// The index path of a linear address through the upper three paging levels,
/// plus the remaining in-page offset.
///
/// The PT index of a 4 KiB walk is not part of this record; use
/// [`VirtualAddress::pt_index`](crate::VirtualAddress::pt_index) if needed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DecodedIndices {
    mode: PageSizeMode,
    pml4: TableIndex,
    pdpt: TableIndex,
    pd: TableIndex,
    page_offset: PageOffset,
}

impl DecodedIndices {
    #[inline]
    #[must_use]
    pub const fn new(
        mode: PageSizeMode,
        pml4: TableIndex,
        pdpt: TableIndex,
        pd: TableIndex,
        page_offset: PageOffset,
    ) -> Self {
        debug_assert!(page_offset.as_u64() <= mode.offset_mask());
        Self {
            mode,
            pml4,
            pdpt,
            pd,
            page_offset,
        }
    }

    /// The page size this record was decoded for.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> PageSizeMode {
        self.mode
    }

    /// Level-4 index, bits `[47:39]`.
    #[inline]
    #[must_use]
    pub const fn pml4(&self) -> TableIndex {
        self.pml4
    }

    /// Level-3 index, bits `[38:30]`.
    #[inline]
    #[must_use]
    pub const fn pdpt(&self) -> TableIndex {
        self.pdpt
    }

    /// Level-2 index, bits `[29:21]`.
    #[inline]
    #[must_use]
    pub const fn pd(&self) -> TableIndex {
        self.pd
    }

    /// Bits `[11:0]` for 4 KiB pages, bits `[20:0]` for 2 MiB pages.
    #[inline]
    #[must_use]
    pub const fn page_offset(&self) -> PageOffset {
        self.page_offset
    }
}
