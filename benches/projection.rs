use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tilemath::{GeoBBox, LonLat, Pixel, Srs, SrsBBox, SphericalMercator};

fn bench_px(c: &mut Criterion) {
	let mercator = SphericalMercator::default();
	c.bench_function("px lon/lat to pixel", |b| {
		b.iter(|| mercator.px(black_box(&LonLat::new(13.4, 52.5)), black_box(12)))
	});
}

fn bench_ll(c: &mut Criterion) {
	let mercator = SphericalMercator::default();
	c.bench_function("ll pixel to lon/lat", |b| {
		b.iter(|| mercator.ll(black_box(&Pixel::new(563310.0, 342763.0)), black_box(12)))
	});
}

fn bench_bbox(c: &mut Criterion) {
	let mercator = SphericalMercator::default();
	c.bench_function("bbox of tile", |b| {
		b.iter(|| mercator.bbox(black_box(2200), black_box(1342), black_box(12), false, Srs::Wgs84))
	});
}

fn bench_xyz(c: &mut Criterion) {
	let mercator = SphericalMercator::default();
	let bbox = SrsBBox::Wgs84(GeoBBox::new(-10.0, -5.0, 10.0, 5.0));
	c.bench_function("xyz tile range of bbox", |b| {
		b.iter(|| mercator.xyz(black_box(&bbox), black_box(12), false))
	});
}

criterion_group!(benches, bench_px, bench_ll, bench_bbox, bench_xyz);
criterion_main!(benches);
