use kernel_page_indices::{
    PageSizeMode, Size2M, Size4K, VirtualAddress, decode, decode_both, parse_address,
};

/// Deterministic xorshift64 sequence, seeded with a few edge patterns.
fn sample_addresses() -> impl Iterator<Item = u64> {
    let edges = [
        0,
        1,
        0xFFF,
        0x1000,
        0x1F_FFFF,
        0x20_0000,
        0x0000_7FFF_FFFF_FFFF,
        0xFFFF_8000_0000_0000,
        0xFFFF_FFFF_8020_0000,
        u64::MAX,
    ];

    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let random = core::iter::repeat_with(move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    })
    .take(4096);

    edges.into_iter().chain(random)
}

#[test]
fn indices_are_shift_and_mask() {
    for a in sample_addresses() {
        let va = VirtualAddress::new(a);
        for d in decode_both(va) {
            assert_eq!(u64::from(d.pml4().as_u16()), (a >> 39) & 0x1FF, "{va}");
            assert_eq!(u64::from(d.pdpt().as_u16()), (a >> 30) & 0x1FF, "{va}");
            assert_eq!(u64::from(d.pd().as_u16()), (a >> 21) & 0x1FF, "{va}");
            assert!(d.pml4().as_usize() < 512);
            assert!(d.pdpt().as_usize() < 512);
            assert!(d.pd().as_usize() < 512);
        }
    }
}

#[test]
fn offsets_follow_page_size() {
    for a in sample_addresses() {
        let va = VirtualAddress::new(a);
        let small = decode(va, PageSizeMode::FourKiB).page_offset().as_u64();
        let large = decode(va, PageSizeMode::TwoMiB).page_offset().as_u64();
        assert_eq!(small, a & 0xFFF);
        assert_eq!(large, a & 0x1F_FFFF);
        assert!(small <= 4095);
        assert!(large <= 2_097_151);
        assert_eq!(va.offset::<Size4K>().as_u64(), small);
        assert_eq!(va.offset::<Size2M>().as_u64(), large);
    }
}

#[test]
fn decoding_is_idempotent() {
    for a in sample_addresses() {
        let va = VirtualAddress::new(a);
        assert_eq!(decode_both(va), decode_both(va));
    }
}

#[test]
fn higher_half_kernel_base() {
    let va = parse_address("0xffffffff80200000").unwrap();
    let [small, large] = decode_both(va);
    for d in [small, large] {
        assert_eq!(d.pml4().as_u16(), 511);
        assert_eq!(d.pdpt().as_u16(), 511);
        assert_eq!(d.pd().as_u16(), 1);
        assert_eq!(d.page_offset().as_u64(), 0);
    }
}

#[test]
fn zero_decodes_to_zero() {
    let va = parse_address("0x0").unwrap();
    for d in decode_both(va) {
        assert_eq!(d.pml4().as_u16(), 0);
        assert_eq!(d.pdpt().as_u16(), 0);
        assert_eq!(d.pd().as_u16(), 0);
        assert_eq!(d.page_offset().as_u64(), 0);
    }
}

#[test]
fn non_canonical_addresses_still_decode() {
    let va = VirtualAddress::new(0x1234_8000_0000_0000);
    assert_eq!(va.layout().sign_extension(), 0x1234);
    assert_eq!(va.pml4_index().as_u16(), 256);
}
