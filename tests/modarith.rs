use bignum::modarith;

#[test]
fn ext_gcd_bezout_identity_holds_for_several_pairs() {
    for (a, b) in [(240, 46), (17, 5), (-12, 18), (1071, 462)] {
        let (g, x, y) = modarith::ext_gcd(a, b);
        assert_eq!(a * x + b * y, g);
    }
}

#[test]
fn mod_inv_produces_a_true_inverse_or_zero() {
    assert_eq!(modarith::mod_mul(modarith::mod_inv(17, 3120), 17, 3120), 1);
    assert_eq!(modarith::mod_inv(6, 9), 0);
}

#[test]
fn mod_pow_matches_naive_for_small_exponents() {
    for &(base, exp, m) in &[(3i64, 13u64, 1000i64), (7, 0, 11), (0, 0, 5)] {
        let expected = {
            let mut acc = 1i64 % m;
            for _ in 0..exp {
                acc = (acc * base) % m;
            }
            acc
        };
        assert_eq!(modarith::mod_pow(base, exp, m), expected);
    }
}

#[test]
fn miller_rabin_known_primes_and_composites() {
    assert!(modarith::is_probable_prime(1_000_000_007, 50));
    assert!(modarith::is_probable_prime(2, modarith::DEFAULT_ROUNDS));
    assert!(!modarith::is_probable_prime(1, modarith::DEFAULT_ROUNDS));
    assert!(!modarith::is_probable_prime(561, modarith::DEFAULT_ROUNDS));
    assert!(!modarith::is_probable_prime(-17, modarith::DEFAULT_ROUNDS));

    let small_primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];
    for p in small_primes {
        assert!(modarith::is_probable_prime(p, modarith::DEFAULT_ROUNDS));
    }

    let small_composites = [4, 6, 8, 9, 10, 15, 21, 25, 27];
    for c in small_composites {
        assert!(!modarith::is_probable_prime(c, modarith::DEFAULT_ROUNDS));
    }
}
