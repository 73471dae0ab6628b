//! # 4-Level Linear Address Layout
//!
//! Bit-field view of a 64-bit linear address under x86-64 4-level paging
//! (9-9-9-9-12):
//!
//! | Bits    | Field                                   |
//! |---------|-----------------------------------------|
//! | `11:0`  | byte offset within a 4 KiB page         |
//! | `20:12` | PT index (L1)                           |
//! | `29:21` | PD index (L2)                           |
//! | `38:30` | PDPT index (L3)                         |
//! | `47:39` | PML4 index (L4)                         |
//! | `63:48` | sign extension of bit 47 (not checked)  |

use bitfield_struct::bitfield;

/// Decomposed linear address.
///
/// Any 64-bit pattern is a valid layout; the sign-extension bits are carried
/// through as-is and never validated.
#[bitfield(u64)]
#[derive(PartialEq, Eq, Hash)]
pub struct LinearAddressLayout {
    /// Bits 0–11 — offset within a 4 KiB page.
    #[bits(12)]
    pub page_offset_4k: u16,

    /// Bits 12–20 — index into the page table (PT, L1).
    #[bits(9)]
    pub pt_index: u16,

    /// Bits 21–29 — index into the page directory (PD, L2).
    #[bits(9)]
    pub pd_index: u16,

    /// Bits 30–38 — index into the page-directory-pointer table (PDPT, L3).
    #[bits(9)]
    pub pdpt_index: u16,

    /// Bits 39–47 — index into the PML4 (L4).
    #[bits(9)]
    pub pml4_index: u16,

    /// Bits 48–63 — copies of bit 47 in a canonical address.
    #[bits(16)]
    pub sign_extension: u16,
}
