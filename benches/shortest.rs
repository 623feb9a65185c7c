//! Shortest conversion of a few representative values, against `std`.

use divan::{black_box, Bencher};
use teju::flt2dec::strategy::teju::format_shortest;
use teju::flt2dec::{decode, to_shortest_str, FullDecoded, Part, Sign, MAX_SIG_DIGITS};
use teju::{convert, BinaryFloat, Ieee32, Ieee64};

fn main() {
    divan::main();
}

fn finite<T: teju::flt2dec::DecodableFloat>(v: T) -> BinaryFloat<<T::Format as teju::Format>::Limb> {
    match decode(v).1 {
        FullDecoded::Finite(binary) => binary,
        _ => unreachable!(),
    }
}

#[divan::bench(args = [3.141592f64, 1.0e23, 0.1, f64::MAX, f64::MIN_POSITIVE])]
fn convert_f64(bencher: Bencher, v: f64) {
    let binary = finite(v);
    bencher.bench(|| convert::<Ieee64>(black_box(binary)));
}

#[divan::bench(args = [3.141592f32, 0.1, f32::MAX, f32::MIN_POSITIVE])]
fn convert_f32(bencher: Bencher, v: f32) {
    let binary = finite(v);
    bencher.bench(|| convert::<Ieee32>(black_box(binary)));
}

#[divan::bench]
fn small_integer(bencher: Bencher) {
    let binary = finite(1024.0f64);
    bencher.bench(|| convert::<Ieee64>(black_box(binary)));
}

#[divan::bench]
fn digits_f64(bencher: Bencher) {
    let binary = finite(3.141592f64);
    let mut buf = [0; MAX_SIG_DIGITS];
    bencher.bench_local(|| format_shortest::<Ieee64>(black_box(&binary), &mut buf));
}

#[divan::bench]
fn to_str_f64(bencher: Bencher) {
    bencher.bench(|| {
        let mut buf = [0; MAX_SIG_DIGITS];
        let mut parts = [Part::Zero(0); 4];
        to_shortest_str(black_box(3.141592f64), Sign::Minus, 0, &mut buf, &mut parts).len()
    });
}

#[divan::bench]
fn std_display_f64(bencher: Bencher) {
    bencher.bench(|| black_box(3.141592f64).to_string());
}
