use criterion::{black_box, Criterion};
use nkoch::raster::{DevicePolygon, PixelRounding};
use nkoch::{subdivide, subdivide_once};
use crate::common::samples::POLYGONS;

pub fn once(c: &mut Criterion) {
    c.bench_function("subdivide_once", |b| {
        for polygon in POLYGONS.iter() {
            b.iter(|| black_box(subdivide_once(polygon)))
        }
    });
}

pub fn depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivide");
    for depth in [1, 3, 5] {
        group.bench_function(format!("triangle/{}", depth), |b| {
            b.iter(|| black_box(subdivide(&POLYGONS.TRIANGLE, depth)))
        });
    }
    group.finish();
}

pub fn raster(c: &mut Criterion) {
    let snowflake = subdivide(&POLYGONS.TRIANGLE, 5).expect("within vertex limit");
    c.bench_function("raster", |b| {
        b.iter(|| black_box(DevicePolygon::from_polygon(&snowflake, PixelRounding::Truncate)))
    });
}

pub fn all(c: &mut Criterion) {
    once(c);
    depth(c);
    //raster(c);
}
