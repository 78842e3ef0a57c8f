//! Tests for weight construction, parsing and seed-range coverage

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use traitloom::catalog::weights::{
        MAX_UINT256, Weight, covers_seed_range, total_weight,
    };

    // Tests the 256-bit ceiling value
    // Verified by shifting by 255 instead of 256
    #[test]
    fn test_max_uint256_value() {
        assert_eq!(MAX_UINT256.bits(), 256);
        assert_eq!(&*MAX_UINT256 + 1_u32, BigUint::from(1_u32) << 256_usize);
    }

    // Tests exact fifths partition the seed range
    // Verified by rounding the division up
    #[test]
    fn test_fraction_fifths_cover_range() {
        let Ok(fifth) = Weight::fraction(1, 5) else {
            unreachable!("1/5 is a valid fraction");
        };
        let weights = vec![fifth; 5];

        assert_eq!(total_weight(&weights), *MAX_UINT256);
        assert!(covers_seed_range(&weights));
    }

    // Tests truncating division leaves fourteenths short of the range
    // Verified by multiplying after dividing
    #[test]
    fn test_fraction_fourteenths_fall_short() {
        let Ok(share) = Weight::fraction(1, 14) else {
            unreachable!("1/14 is a valid fraction");
        };
        let weights = vec![share; 14];

        assert!(total_weight(&weights) < *MAX_UINT256);
        assert!(!covers_seed_range(&weights));
    }

    // Tests zero denominator is rejected
    // Verified by removing the denominator check
    #[test]
    fn test_fraction_zero_denominator() {
        assert!(Weight::fraction(1, 0).is_err());
    }

    // Tests all three textual weight forms
    // Verified by parsing hex as decimal
    #[test]
    fn test_weight_parsing_forms() {
        assert_eq!("1/4".parse::<Weight>().ok(), Weight::fraction(1, 4).ok());
        assert_eq!(" 3 / 8 ".parse::<Weight>().ok(), Weight::fraction(3, 8).ok());
        assert_eq!("0xff".parse::<Weight>().ok(), Some(Weight::from(255)));
        assert_eq!("0XFF".parse::<Weight>().ok(), Some(Weight::from(255)));
        assert_eq!("100".parse::<Weight>().ok(), Some(Weight::from(100)));
    }

    // Tests malformed weights are rejected
    // Verified by defaulting unparsable input to zero
    #[test]
    fn test_weight_parsing_rejects_garbage() {
        assert!("abc".parse::<Weight>().is_err());
        assert!("1/0".parse::<Weight>().is_err());
        assert!("1/x".parse::<Weight>().is_err());
        assert!("-5".parse::<Weight>().is_err());
        assert!("0xzz".parse::<Weight>().is_err());
    }

    // Tests expected share of a quarter weight
    // Verified by dividing by the seed width instead of range
    #[test]
    fn test_expected_share() {
        let Ok(quarter) = Weight::fraction(1, 4) else {
            unreachable!("1/4 is a valid fraction");
        };
        assert!((quarter.expected_share() - 0.25).abs() < 1e-12);
        assert!(Weight::from(0).is_zero());
        assert!(Weight::from(0).expected_share().abs() < f64::EPSILON);
    }

    // Tests display renders the decimal value
    // Verified by rendering hex
    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::from(1234).to_string(), "1234");
        assert_eq!(Weight::new(BigUint::from(7_u32)).value(), &BigUint::from(7_u32));
    }
}
