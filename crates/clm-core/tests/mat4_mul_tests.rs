// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use clm_core::math::{Mat4, Vec3, Vec4};

const EPS: f32 = 1e-5;

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn sample(offset: f32) -> Mat4 {
    let mut data = [0.0; 16];
    for (i, slot) in data.iter_mut().enumerate() {
        *slot = offset + i as f32 * 0.5 - 3.0;
    }
    Mat4::new(data)
}

#[test]
fn identity_layout_is_column_major_diagonal() {
    let id = Mat4::identity().to_array();
    for (i, v) in id.iter().enumerate() {
        let expected = if i % 5 == 0 { 1.0 } else { 0.0 };
        assert_eq!(*v, expected, "index {i}");
    }
}

#[test]
fn identity_is_two_sided_neutral() {
    let m = sample(1.0);
    assert_eq!(Mat4::identity().multiply(&m), m);
    assert_eq!(m.multiply(&Mat4::identity()), m);
}

#[test]
fn multiply_follows_flat_index_formula() {
    let a = sample(0.0).to_array();
    let b = sample(2.0).to_array();
    let got = Mat4::new(a).multiply(&Mat4::new(b)).to_array();
    for i in 0..16 {
        let row = i % 4;
        let col = (i / 4) * 4;
        let mut expected = 0.0;
        for k in 0..4 {
            expected += a[row + 4 * k] * b[col + k];
        }
        assert!((got[i] - expected).abs() <= EPS, "index {i}");
    }
}

#[test]
fn multiply_in_place_overwrites_first_operand() {
    let t = Mat4::translation(1.0, 2.0, 3.0);
    let s = Mat4::scale(2.0, 3.0, 4.0);
    let mut acc = t;
    acc.multiply_in_place(&s);
    assert_eq!(acc, t.multiply(&s));
    assert_ne!(acc, t);
}

#[test]
fn multiply_in_place_with_itself() {
    let mut m = Mat4::translation(1.0, 2.0, 3.0);
    let copy = m;
    m.multiply_in_place(&copy);
    approx_eq16(m.to_array(), Mat4::translation(2.0, 4.0, 6.0).to_array());
}

#[test]
fn multiplication_is_not_commutative_for_translate_and_scale() {
    let t = Mat4::translation(1.0, 0.0, 0.0);
    let s = Mat4::scale(2.0, 2.0, 2.0);
    // T*S keeps the translation; S*T scales it.
    assert_eq!((t * s)[12], 1.0);
    assert_eq!((s * t)[12], 2.0);
}

#[test]
fn mul_operators_match_method() {
    let a = Mat4::rotation_axis_angle(Vec3::UNIT_Z, 0.3);
    let b = Mat4::translation(4.0, 5.0, 6.0);
    approx_eq16((a * b).to_array(), a.multiply(&b).to_array());
    approx_eq16((&a * &b).to_array(), a.multiply(&b).to_array());

    let mut owned = a;
    owned *= b;
    approx_eq16(owned.to_array(), a.multiply(&b).to_array());
    let mut borrowed = a;
    borrowed *= &b;
    approx_eq16(borrowed.to_array(), a.multiply(&b).to_array());
}

#[test]
fn multiply_vector_overwrites_and_matches_transform() {
    let m = sample(0.25);
    let v = Vec4::new(1.0, -2.0, 3.0, 1.0);
    let mut w = v;
    m.multiply_vector(&mut w);
    assert_eq!(w, m.transform(&v));
    assert_eq!(w, m * v);

    let a = m.to_array();
    let vv = v.to_array();
    let got = w.to_array();
    for i in 0..4 {
        let expected: f32 = (0..4).map(|k| a[4 * k + i] * vv[k]).sum();
        assert!((got[i] - expected).abs() <= EPS, "index {i}");
    }
}

#[test]
fn accessors_read_column_major_storage() {
    let m = Mat4::translation(7.0, 8.0, 9.0);
    assert_eq!(m.get(0, 3), 7.0);
    assert_eq!(m.get(2, 3), 9.0);
    assert_eq!(m[13], 8.0);
    assert_eq!(m.column(3).to_array(), [7.0, 8.0, 9.0, 1.0]);
    assert_eq!(m.row(1).to_array(), [0.0, 1.0, 0.0, 8.0]);
    assert_eq!(m.transpose().row(3).to_array(), [7.0, 8.0, 9.0, 1.0]);
    assert_eq!(m.transpose().transpose(), m);
    assert_eq!(m.as_array()[14], 9.0);
}
