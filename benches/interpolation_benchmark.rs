use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndface::collection::ElementCollection;
use ndface::element::FaceLagrangeElement;
use ndface::interpolation::InterpolationOptions;

pub fn interpolation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");
    group.sample_size(20);

    for degree in [2, 4, 8] {
        let target = FaceLagrangeElement::create(3, degree).unwrap();
        let source = FaceLagrangeElement::create(3, degree + 1).unwrap();

        group.bench_function(
            format!("Face interpolation matrix of degree {} from {}", degree, degree + 1),
            |b| b.iter(|| black_box(target.face_interpolation_matrix(&source).unwrap())),
        );
        group.bench_function(
            format!("Subface interpolation matrix of degree {} from {}", degree, degree + 1),
            |b| b.iter(|| black_box(target.subface_interpolation_matrix(&source, 3).unwrap())),
        );
    }

    let mut collection = ElementCollection::new();
    for degree in 1..9 {
        collection.push(&FaceLagrangeElement::create(3, degree).unwrap());
    }
    let options = InterpolationOptions::default();
    group.bench_function("All face interpolation matrices for degrees 1 to 8", |b| {
        b.iter(|| black_box(collection.face_interpolation_matrices(&options).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, interpolation_benchmark);
criterion_main!(benches);
