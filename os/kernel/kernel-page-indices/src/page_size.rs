use core::fmt;
use core::hash::Hash;

/// Sealed trait pattern to restrict `PageSize` impls to our markers.
mod sealed {
    pub trait Sealed {}
}

/// Runtime page-size selector for decoding.
///
/// A 2 MiB page terminates the walk one level earlier than a 4 KiB page: the
/// PD entry maps the region directly and the nine bits that would otherwise
/// select a PT entry become part of the in-page offset.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PageSizeMode {
    /// 4 KiB pages, 12 offset bits.
    FourKiB,
    /// 2 MiB large pages, 21 offset bits.
    TwoMiB,
}

impl PageSizeMode {
    /// All supported modes, in presentation order.
    pub const ALL: [Self; 2] = [Self::FourKiB, Self::TwoMiB];

    /// log2 of the page size, i.e., number of low bits used for the offset.
    #[inline]
    #[must_use]
    pub const fn shift(self) -> u32 {
        match self {
            Self::FourKiB => Size4K::SHIFT,
            Self::TwoMiB => Size2M::SHIFT,
        }
    }

    /// Page size in bytes.
    #[inline]
    #[must_use]
    pub const fn size(self) -> u64 {
        1 << self.shift()
    }

    /// Mask selecting the in-page offset bits (`0xFFF` or `0x1F_FFFF`).
    #[inline]
    #[must_use]
    pub const fn offset_mask(self) -> u64 {
        self.size() - 1
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FourKiB => "4K",
            Self::TwoMiB => "2M",
        }
    }
}

impl fmt::Display for PageSizeMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for PageSizeMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

/// Marker trait for supported page sizes.
pub trait PageSize:
    sealed::Sealed + Clone + Copy + Eq + PartialEq + Ord + PartialOrd + Hash + fmt::Display + fmt::Debug
{
    /// Page size in bytes (power of two).
    const SIZE: u64;
    /// log2(SIZE), i.e., number of low bits used for the offset.
    const SHIFT: u32;
    /// The runtime mode corresponding to this marker.
    const MODE: PageSizeMode;

    #[must_use]
    fn as_str() -> &'static str {
        Self::MODE.as_str()
    }
}

/// 4 KiB page (4096 bytes).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size4K;
impl sealed::Sealed for Size4K {}
impl PageSize for Size4K {
    const SIZE: u64 = 4096;
    const SHIFT: u32 = 12;
    const MODE: PageSizeMode = PageSizeMode::FourKiB;
}

/// 2 MiB page (`2_097_152` bytes).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size2M;
impl sealed::Sealed for Size2M {}
impl PageSize for Size2M {
    const SIZE: u64 = 2 * 1024 * 1024;
    const SHIFT: u32 = 21;
    const MODE: PageSizeMode = PageSizeMode::TwoMiB;
}

impl fmt::Display for Size4K {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(Self::as_str())
    }
}

impl fmt::Display for Size2M {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(Self::as_str())
    }
}

impl fmt::Debug for Size4K {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl fmt::Debug for Size2M {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}
