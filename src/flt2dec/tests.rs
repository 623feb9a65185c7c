use std::string::String;

use super::{to_shortest_exp_str, to_shortest_str, DecodableFloat, Formatted, Part, Sign,
            MAX_SIG_DIGITS};

fn render(formatted: Formatted<'_>) -> String {
    let mut out = vec![0; formatted.len()];
    assert_eq!(formatted.write(&mut out), Some(out.len()));
    // one byte short never fits
    if !out.is_empty() {
        assert_eq!(formatted.write(&mut vec![0; out.len() - 1]), None);
    }
    String::from_utf8(out).unwrap()
}

fn shortest_str<T: DecodableFloat>(v: T, sign: Sign, frac_digits: usize) -> String {
    let mut buf = [0; MAX_SIG_DIGITS];
    let mut parts = [Part::Zero(0); 4];
    render(to_shortest_str(v, sign, frac_digits, &mut buf, &mut parts))
}

fn shortest_exp_str<T: DecodableFloat>(v: T, sign: Sign, dec_bounds: (i16, i16),
                                       upper: bool) -> String {
    let mut buf = [0; MAX_SIG_DIGITS];
    let mut parts = [Part::Zero(0); 5];
    render(to_shortest_exp_str(v, sign, dec_bounds, upper, &mut buf, &mut parts))
}

#[test]
fn test_part_len_and_write() {
    assert_eq!(Part::Zero(3).len(), 3);
    assert_eq!(Part::Num(0).len(), 1);
    assert_eq!(Part::Num(9).len(), 1);
    assert_eq!(Part::Num(10).len(), 2);
    assert_eq!(Part::Num(65535).len(), 5);
    assert_eq!(Part::Copy(b"abc").len(), 3);
    assert!(Part::Zero(0).is_empty());

    let mut out = [b'x'; 6];
    assert_eq!(Part::Num(308).write(&mut out), Some(3));
    assert_eq!(&out, b"308xxx");
    assert_eq!(Part::Zero(4).write(&mut out[2..]), Some(4));
    assert_eq!(&out, b"300000");
    assert_eq!(Part::Copy(b"1234567").write(&mut out), None);
}

#[test]
fn test_to_shortest_str_special() {
    assert_eq!(shortest_str(0.0f64, Sign::Minus, 0), "0");
    assert_eq!(shortest_str(0.0f64, Sign::Minus, 3), "0.000");
    assert_eq!(shortest_str(-0.0f64, Sign::Minus, 0), "-0");
    assert_eq!(shortest_str(0.0f64, Sign::MinusPlus, 0), "+0");
    assert_eq!(shortest_str(-0.0f32, Sign::MinusPlus, 1), "-0.0");

    assert_eq!(shortest_str(f64::INFINITY, Sign::Minus, 0), "inf");
    assert_eq!(shortest_str(f64::INFINITY, Sign::MinusPlus, 5), "+inf");
    assert_eq!(shortest_str(f32::NEG_INFINITY, Sign::Minus, 0), "-inf");
    assert_eq!(shortest_str(f64::NAN, Sign::Minus, 0), "NaN");
    assert_eq!(shortest_str(f32::NAN, Sign::MinusPlus, 3), "NaN");
}

#[test]
fn test_to_shortest_str() {
    assert_eq!(shortest_str(0.1f64, Sign::Minus, 0), "0.1");
    assert_eq!(shortest_str(0.1f64, Sign::Minus, 3), "0.100");
    assert_eq!(shortest_str(0.1f32, Sign::Minus, 0), "0.1");
    assert_eq!(shortest_str(-0.1f32, Sign::MinusPlus, 0), "-0.1");
    assert_eq!(shortest_str(3.14f64, Sign::Minus, 0), "3.14");
    assert_eq!(shortest_str(3.14f64, Sign::Minus, 1), "3.14");
    assert_eq!(shortest_str(3.14f64, Sign::MinusPlus, 5), "+3.14000");
    assert_eq!(shortest_str(100.0f64, Sign::Minus, 0), "100");
    assert_eq!(shortest_str(100.0f64, Sign::Minus, 1), "100.0");
    assert_eq!(shortest_str(1.0e23f64, Sign::Minus, 0), "100000000000000000000000");
    assert_eq!(shortest_str(7.5e-11f64, Sign::Minus, 0), "0.000000000075");
    assert_eq!(shortest_str(7.5e-11f64, Sign::Minus, 15), "0.000000000075000");
    assert_eq!(shortest_str(1.0f64 / 3.0, Sign::Minus, 0), "0.3333333333333333");

    assert_eq!(shortest_str(f32::MAX, Sign::Minus, 0),
               format!("34028235{}", "0".repeat(31)));
    assert_eq!(shortest_str(f64::MAX, Sign::Minus, 0),
               format!("17976931348623157{}", "0".repeat(292)));
    assert_eq!(shortest_str(f64::from_bits(1), Sign::Minus, 0),
               format!("0.{}5", "0".repeat(323)));
    assert_eq!(shortest_str(f32::from_bits(1), Sign::Minus, 50),
               format!("0.{}1{}", "0".repeat(44), "0".repeat(5)));
}

#[test]
fn test_to_shortest_exp_str_special() {
    assert_eq!(shortest_exp_str(0.0f64, Sign::Minus, (-4, 16), false), "0");
    assert_eq!(shortest_exp_str(0.0f64, Sign::Minus, (1, 2), false), "0e0");
    assert_eq!(shortest_exp_str(0.0f64, Sign::Minus, (1, 2), true), "0E0");
    assert_eq!(shortest_exp_str(-0.0f64, Sign::MinusPlus, (-4, 16), false), "-0");
    assert_eq!(shortest_exp_str(0.0f32, Sign::MinusPlus, (-4, 16), false), "+0");

    assert_eq!(shortest_exp_str(f64::NEG_INFINITY, Sign::Minus, (-4, 16), false), "-inf");
    assert_eq!(shortest_exp_str(f32::INFINITY, Sign::MinusPlus, (-4, 16), true), "+inf");
    assert_eq!(shortest_exp_str(f64::NAN, Sign::MinusPlus, (-4, 16), false), "NaN");
}

#[test]
fn test_to_shortest_exp_str() {
    assert_eq!(shortest_exp_str(1.0f64, Sign::Minus, (-4, 16), false), "1");
    assert_eq!(shortest_exp_str(1.0f64, Sign::Minus, (1, 2), false), "1e0");
    assert_eq!(shortest_exp_str(0.1f64, Sign::Minus, (-4, 16), false), "0.1");
    assert_eq!(shortest_exp_str(0.1f64, Sign::Minus, (0, 16), false), "1e-1");
    assert_eq!(shortest_exp_str(123.456f64, Sign::Minus, (-4, 16), false), "123.456");
    assert_eq!(shortest_exp_str(123.456f64, Sign::Minus, (-4, 2), false), "1.23456e2");
    assert_eq!(shortest_exp_str(123.456f64, Sign::Minus, (-4, 2), true), "1.23456E2");
    assert_eq!(shortest_exp_str(-1.5f64, Sign::MinusPlus, (-4, 16), false), "-1.5");
    assert_eq!(shortest_exp_str(1.5f64, Sign::MinusPlus, (-4, 16), false), "+1.5");
    assert_eq!(shortest_exp_str(1.0e23f64, Sign::Minus, (-4, 16), false), "1e23");
    assert_eq!(shortest_exp_str(f64::MAX, Sign::Minus, (-4, 16), false),
               "1.7976931348623157e308");
    assert_eq!(shortest_exp_str(f64::MIN_POSITIVE, Sign::Minus, (-4, 16), false),
               "2.2250738585072014e-308");
    assert_eq!(shortest_exp_str(f64::from_bits(1), Sign::Minus, (-4, 16), false), "5e-324");
    assert_eq!(shortest_exp_str(f32::MAX, Sign::Minus, (-4, 16), false), "3.4028235e38");
    assert_eq!(shortest_exp_str(f32::from_bits(1), Sign::Minus, (-4, 16), true), "1E-45");
}

#[test]
fn test_exp_form_agrees_with_std() {
    use rand::Rng;

    // std breaks exact ties differently, so only the length has to agree
    let mut rng = rand::thread_rng();
    for _ in 0..10_000 {
        let v = f64::from_bits(rng.gen::<u64>() & 0x7fef_ffff_ffff_ffff);
        let ours = shortest_exp_str(v, Sign::Minus, (0, 0), false);
        let theirs = format!("{:e}", v);
        assert_eq!(ours.parse::<f64>(), Ok(v), "{}", theirs);
        assert_eq!(ours.len(), theirs.len(), "{} vs {}", ours, theirs);
    }
}
