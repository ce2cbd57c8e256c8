#![cfg(feature = "complex")]

use dynmat::{Complex, Matrixz64, Vector, Vectorz64};

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-12;

fn assert_complex_near(a: C, b: C, msg: &str) {
    assert!(
        (a.re - b.re).abs() < TOL && (a.im - b.im).abs() < TOL,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

#[test]
fn complex_default_fill() {
    let v = Vectorz64::new(3).unwrap();
    assert!(v.iter().all(|z| *z == C::default()));
}

#[test]
fn complex_dot() {
    let a = Vector::from_slice(&[c(1.0, 1.0), c(0.0, 2.0)]).unwrap();
    let b = Vector::from_slice(&[c(2.0, 0.0), c(0.0, 1.0)]).unwrap();
    // (1+i)*2 + 2i*i = 2 + 2i - 2
    assert_complex_near(a.dot(&b).unwrap(), c(0.0, 2.0), "dot");
}

#[test]
fn complex_scalar_ops() {
    let a = Vector::from_slice(&[c(1.0, 0.0), c(0.0, 1.0)]).unwrap();
    let b = &a * c(0.0, 1.0);
    assert_complex_near(b[0], c(0.0, 1.0), "b[0]");
    assert_complex_near(b[1], c(-1.0, 0.0), "b[1]");
    let d = &a + c(1.0, 1.0);
    assert_complex_near(d[1], c(1.0, 2.0), "d[1]");
}

#[test]
fn complex_matrix_multiply() {
    // Rotation by i: [[0, -1], [1, 0]] with complex entries.
    let r = Matrixz64::from_fn(2, |i, j| match (i, j) {
        (0, 1) => c(-1.0, 0.0),
        (1, 0) => c(1.0, 0.0),
        _ => c(0.0, 0.0),
    })
    .unwrap();
    let r2 = r.try_mul(&r).unwrap();
    assert_complex_near(r2[(0, 0)], c(-1.0, 0.0), "r2[0][0]");
    assert_complex_near(r2[(1, 1)], c(-1.0, 0.0), "r2[1][1]");
    assert_complex_near(r2[(0, 1)], c(0.0, 0.0), "r2[0][1]");

    let x = Vector::from_slice(&[c(1.0, 2.0), c(3.0, -1.0)]).unwrap();
    let y = r.mul_vector(&x).unwrap();
    assert_complex_near(y[0], c(-3.0, 1.0), "y[0]");
    assert_complex_near(y[1], c(1.0, 2.0), "y[1]");
}

#[test]
fn complex_matrix_add_sub() {
    let a = Matrixz64::from_fn(2, |i, j| c(i as f64, j as f64)).unwrap();
    let b = Matrixz64::from_fn(2, |i, j| c(j as f64, i as f64)).unwrap();
    let s = a.try_add(&b).unwrap();
    let d = a.try_sub(&b).unwrap();
    assert_complex_near(s[(1, 0)], c(1.0, 1.0), "s[1][0]");
    assert_complex_near(d[(1, 0)], c(1.0, -1.0), "d[1][0]");
    assert_eq!(d.try_add(&b).unwrap(), a);
}
