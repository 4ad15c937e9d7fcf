use big_radix::{to_int, BigInt, RadixInt};

const SAMPLES: [i64; 14] = [0, 1, -1, 2, -3, 4, 5, -5, 24, 25, -126, 9482, -18964, 65536];

#[test]
fn round_trip_through_i64() {
    for n in (-2000..2000).chain([i64::MAX, i64::MIN, i64::MAX - 1, i64::MIN + 1]) {
        assert_eq!(to_int(&BigInt::from(n)), n);
        assert_eq!(to_int(&RadixInt::<2>::from(n)), n);
        assert_eq!(to_int(&RadixInt::<10>::from(n)), n);
        assert_eq!(to_int(&RadixInt::<127>::from(n)), n);
    }
}

#[test]
fn add_sub_laws() {
    for &x in &SAMPLES {
        for &y in &SAMPLES {
            let a = BigInt::from(x);
            let b = BigInt::from(y);
            assert_eq!(&a + &b, &b + &a, "{} + {}", x, y);
            assert_eq!(&a - &b, -(&b - &a), "{} - {}", x, y);
            assert_eq!((&a + &b) - &b, a, "({} + {}) - {}", x, y, y);
            assert_eq!((&a + &b).to_i64(), x + y);
            assert_eq!((&a - &b).to_i64(), x - y);
        }
        let a = BigInt::from(x);
        let sum = &a + &(-&a);
        assert!(sum.is_zero());
        assert!(sum.sign());
    }
}

#[test]
fn results_stay_canonical() {
    for &x in &SAMPLES {
        for &y in &SAMPLES {
            let a = RadixInt::<3>::from(x);
            let b = RadixInt::<3>::from(y);
            for res in [&a + &b, &a - &b, &a * &b, &a >> 2] {
                let digits = res.digits();
                assert!(!digits.is_empty());
                assert!(digits.len() == 1 || *digits.last().unwrap() != 0);
                assert!(digits.iter().all(|&d| d < 3));
                if res.is_zero() {
                    assert!(res.sign());
                }
            }
        }
    }
}

#[test]
fn shift_laws() {
    for n in 0..300i64 {
        let a = BigInt::from(n);
        assert_eq!(&a << 1, &a + &a);
        assert_eq!((&a << 1) >> 1, a);
        assert_eq!((&a >> 1).to_i64(), n >> 1);
        assert_eq!((&a << 7).to_i64(), n << 7);

        let b = RadixInt::<10>::from(n);
        assert_eq!((&b << 3).to_i64(), n << 3);
        assert_eq!((&b >> 3).to_i64(), n >> 3);
    }
}

#[test]
fn mul_matches_repeated_addition() {
    for &x in &SAMPLES {
        let a = BigInt::from(x);
        for y in 0..12i64 {
            let mut slow = BigInt::zero();
            for _ in 0..y {
                slow += &a;
            }
            assert_eq!(&a * &BigInt::from(y), slow, "{} * {}", x, y);
        }
    }
    assert_eq!(BigInt::from(7) * BigInt::from(3), BigInt::from(21));
}

#[test]
fn mul_matches_native() {
    for &x in &SAMPLES {
        for &y in &SAMPLES {
            assert_eq!((BigInt::from(x) * BigInt::from(y)).to_i64(), x * y, "{} * {}", x, y);
            assert_eq!((RadixInt::<2>::from(x) * RadixInt::<2>::from(y)).to_i64(), x * y);
        }
        assert!((BigInt::from(x) * BigInt::zero()).is_zero());
    }

    let a = BigInt::from(9482);
    let b = BigInt::from(18964);
    assert_eq!(to_int(&(&a * &b)), 179_816_648);
    assert_eq!(to_int(&(&a * &b)), to_int(&a) * to_int(&b));
}

#[test]
fn ordering_matches_native() {
    for &x in &SAMPLES {
        for &y in &SAMPLES {
            let a = BigInt::from(x);
            let b = BigInt::from(y);
            assert_eq!(a.cmp(&b), x.cmp(&y), "{} cmp {}", x, y);
            assert_eq!(a < b, x < y);
            assert_eq!(a <= b, x <= y);
            assert_eq!(a > b, x > y);
            assert_eq!(a >= b, x >= y);
            assert_eq!(a == b, x == y);
            assert_eq!(a != b, x != y);
        }
    }
    assert!(BigInt::from(-5) < BigInt::from(3));
    assert!(BigInt::from(-9482) < BigInt::from(-1));
}

#[test]
fn inc_dec_round_trip() {
    for &x in &SAMPLES {
        let mut a = BigInt::from(x);
        let before = a.post_inc();
        assert_eq!(before.to_i64(), x);
        assert_eq!(a.to_i64(), x + 1);
        let before = a.post_dec();
        assert_eq!(before.to_i64(), x + 1);
        assert_eq!(a, BigInt::from(x));

        assert_eq!(a.inc().to_i64(), x + 1);
        assert_eq!(a.dec().to_i64(), x);
    }
}

#[test]
fn zero_handling() {
    let zero = BigInt::from(0);
    assert!(zero.is_zero());
    assert!((BigInt::from(0) - BigInt::from(0)).is_zero());
    assert_eq!(-&zero, zero);
    assert_eq!(BigInt::default(), zero);
    assert_eq!(BigInt::from(-9482) * zero.clone(), zero);
    assert_eq!(zero.clone() * BigInt::from(-9482), zero);
}
