/// Add unsigned and signed 32-bit numbers. Overflows will wrap.
pub fn add_unsigned(a: u32, b: i32) -> u32 {
    a.wrapping_add(b as u32)
}

#[cfg(test)]
mod tests {
    use super::add_unsigned;

    #[test]
    fn mixed_sign_addition() {
        assert_eq!(add_unsigned(8, -4), 4);
        assert_eq!(add_unsigned(8, 4), 12);
        assert_eq!(add_unsigned(0, -1), u32::MAX);
        assert_eq!(add_unsigned(u32::MAX, 1), 0);
        assert_eq!(add_unsigned(0x1000, i32::MIN), 0x8000_1000);
    }
}
