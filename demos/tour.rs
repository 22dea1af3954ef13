//! A quick tour of the crate's surface. Run with:
//!
//! ```text
//! RUST_LOG=trace cargo run --example tour
//! ```

use vecmat::*;

fn main() {
    env_logger::init();

    let v = vec3(1.0, 1.0, 1.0);

    let mut rotated = v;
    rotated.rotate(Angle::Degrees(90.0), 0.0);
    println!("{v} rotated a quarter turn around z: {rotated}");
    println!("dot with the original: {}", v.dot(rotated));

    for component in &v {
        println!("component: {component}");
    }

    println!(
        "angle to the i axis: {} rad",
        v.between_axis(Axis::I).unwrap()
    );

    let mut seg = Vec3::ZERO;
    seg.segvec([1.0, 1.0, 1.0], [2.0, 2.0, 2.0]);
    println!("segment vector: {seg}");

    let u = vec3(1.0, 1.0, 1.0);
    let s = span_vector(u);
    println!("[2, 2, 2] in span of {u}: {}", collinear(&s, [2.0, 2.0, 2.0]));
    println!("zero vector in R^3: {}", zeros(3));

    // matrices
    let m1 = vstack(&[&[1.0, 2.0, 3.0, 4.0], &[4.0, 3.0, 2.0, 1.0]]).unwrap();
    println!("stacked: {m1}");
    println!("transposed: {}", m1.clone().transpose());

    let mut square = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    println!("determinant: {}", square.determinant().unwrap());
    println!("inverse: {}", square.inverse().unwrap());
    println!("reduced: {}", square.rref());

    let transformed = vec2(1.0, 2.0)
        .transform(&Matrix::from([[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]))
        .unwrap();
    println!("lifted into 3D: {transformed:?}");

    // vec utils
    let x = linspace(0.0, 1.0, 11);
    println!("linspace: {x}");
    println!("concatenated: {}", hstack(&[&[1.0, 2.0], &[3.0, 4.0]]));
}
