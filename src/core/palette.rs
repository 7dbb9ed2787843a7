/// Default pastel bar palette.
pub const PALETTE: [&str; 10] = [
    "#E9D5FF", // Lavender
    "#BFDBFE", // Baby Blue
    "#BBF7D0", // Mint
    "#FEF9C3", // Lemon
    "#FDE1D3", // Peach
    "#FBCFE8", // Blush
    "#E0F2FE", // Sky
    "#F5D0FE", // Mauve
    "#D1FAE5", // Sage
    "#F5E7C6", // Sand
];

/// FNV-1a 64-bit. Stable across runs and platforms, unlike the standard
/// library's randomized default hasher.
fn fnv1a64(input: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Deterministic, content-addressed palette pick: repeated imports of the
/// same title/subtitle pair get the same color, independent of item order.
#[must_use]
pub fn palette_color(title: &str, subtitle: &str) -> &'static str {
    let mut key = String::with_capacity(title.len() + subtitle.len());
    key.push_str(title);
    key.push_str(subtitle);

    let index = (fnv1a64(&key) % PALETTE.len() as u64) as usize;
    PALETTE[index]
}

/// Accepts `#RRGGBB` with case-insensitive hex digits.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}
