//! # Linear Address to Page-Table Indices
//!
//! Decodes a 64-bit x86-64 linear address into the index path through the
//! 4-level paging hierarchy for both 4 KiB and 2 MiB pages.
//!
//! ## Overview
//!
//! | Type | Description |
//! |------|-------------|
//! | [`VirtualAddress`] | The raw 64-bit linear address. Not checked for canonical form. |
//! | [`PageSizeMode`] / [`PageSize`] | Runtime and type-level page size selectors. |
//! | [`LinearAddressLayout`] | Bit-field view of the address (`bitfield-struct`). |
//! | [`DecodedIndices`] | PML4, PDPT and PD indices plus the in-page offset. |
//!
//! The PML4 (`[47:39]`), PDPT (`[38:30]`) and PD (`[29:21]`) indices do not
//! depend on the page size. A 4 KiB page keeps `[11:0]` as the offset, a
//! 2 MiB page `[20:0]`.
//!
//! ## Typical Usage
//!
//! ```rust
//! # use kernel_page_indices::*;
//! let va: VirtualAddress = "0xffffffff80200000".parse().unwrap();
//! let [small, large] = decode_both(va);
//!
//! assert_eq!(small.pml4().as_u16(), 511);
//! assert_eq!(small.pdpt().as_u16(), 511);
//! assert_eq!(small.pd().as_u16(), 1);
//! assert_eq!(small.page_offset().as_u64(), 0);
//! assert_eq!(large.mode(), PageSizeMode::TwoMiB);
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]

mod indices;
mod layout;
mod page_size;
mod parse;
mod virtual_address;

pub use crate::indices::{DecodedIndices, PageOffset, TableIndex};
pub use crate::layout::LinearAddressLayout;
pub use crate::page_size::{PageSize, PageSizeMode, Size2M, Size4K};
pub use crate::parse::{ParseAddressError, parse_address};
pub use crate::virtual_address::VirtualAddress;

/// Decode `va` for pages of the given `mode`.
#[must_use]
pub fn decode(va: VirtualAddress, mode: PageSizeMode) -> DecodedIndices {
    let decoded = va.decode_as(mode);
    log::trace!("decoded {va} for {mode} pages: {decoded:?}");
    decoded
}

/// Decode `va` for every supported page size, in [`PageSizeMode::ALL`] order.
#[must_use]
pub fn decode_both(va: VirtualAddress) -> [DecodedIndices; 2] {
    PageSizeMode::ALL.map(|mode| decode(va, mode))
}
