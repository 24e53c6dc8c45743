mod util;
use util::core_cycles;

use gfbn254::field::GFbn254;
use gfbn254::hash2field::hash_to_base;

fn mkelem() -> GFbn254 {
    let z = core_cycles();
    GFbn254::from_w64le([ z, z.wrapping_mul(3), z.wrapping_mul(5),
        z.wrapping_mul(7) ])
}

fn bench_gfbn254_add() -> (f64, u8) {
    let mut x = mkelem();
    let mut y = x + GFbn254::ONE;
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..10000 {
            x += y;
            y += x;
            x += y;
            y += x;
            x += y;
            y += x;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[4] as f64) / 60000.0, x.encode()[31])
}

fn bench_gfbn254_mul() -> (f64, u8) {
    let mut x = mkelem();
    let mut y = x + GFbn254::ONE;
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..10000 {
            x *= y;
            y *= x;
            x *= y;
            y *= x;
            x *= y;
            y *= x;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[4] as f64) / 60000.0, x.encode()[31])
}

fn bench_gfbn254_square() -> (f64, u8) {
    let mut x = mkelem();
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..60000 {
            x.set_square();
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[4] as f64) / 60000.0, x.encode()[31])
}

fn bench_gfbn254_invert() -> (f64, u8) {
    let mut x = mkelem();
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..1000 {
            x = x.invert() + GFbn254::ONE;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[4] as f64) / 1000.0, x.encode()[31])
}

fn bench_gfbn254_sqrt() -> (f64, u8) {
    let mut x = mkelem();
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..1000 {
            x = x.sqrt() + GFbn254::ONE;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[4] as f64) / 1000.0, x.encode()[31])
}

fn bench_gfbn254_legendre() -> (f64, u8) {
    let mut x = mkelem();
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..1000 {
            let ls = x.legendre();
            x += GFbn254::from_i32(ls + 2);
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[4] as f64) / 1000.0, x.encode()[31])
}

fn bench_hash_to_base() -> (f64, u8) {
    let mut buf = mkelem().encode();
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..1000 {
            buf = hash_to_base(&buf).encode();
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    ((tt[4] as f64) / 1000.0, buf[31])
}

fn main() {
    let mut bx = 0u8;

    let (v, x) = bench_gfbn254_add();
    bx ^= x;
    println!("GFbn254 add:           {:11.2}", v);
    let (v, x) = bench_gfbn254_mul();
    bx ^= x;
    println!("GFbn254 mul:           {:11.2}", v);
    let (v, x) = bench_gfbn254_square();
    bx ^= x;
    println!("GFbn254 square:        {:11.2}", v);
    let (v, x) = bench_gfbn254_invert();
    bx ^= x;
    println!("GFbn254 invert:        {:11.2}", v);
    let (v, x) = bench_gfbn254_sqrt();
    bx ^= x;
    println!("GFbn254 sqrt:          {:11.2}", v);
    let (v, x) = bench_gfbn254_legendre();
    bx ^= x;
    println!("GFbn254 legendre:      {:11.2}", v);
    let (v, x) = bench_hash_to_base();
    bx ^= x;
    println!("hash_to_base:          {:11.2}", v);

    println!("{}", bx);
}
