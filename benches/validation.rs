use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dbus_validate::{validate_body, validate_signature, Endianness, ObjectPath, Signature};

fn build_int_array_body(len: u32) -> Vec<u8> {
    let mut body = (len * 4).to_le_bytes().to_vec();

    for n in 0..len {
        body.extend_from_slice(&n.to_le_bytes());
    }

    body
}

fn build_struct_array_body(len: u32) -> Vec<u8> {
    let mut body = (len * 8).to_le_bytes().to_vec();
    // Padding up to the first 8-aligned struct.
    body.extend_from_slice(&[0, 0, 0, 0]);

    for n in 0..len {
        body.extend_from_slice(&n.to_le_bytes());
        body.extend_from_slice(&n.to_le_bytes());
    }

    body
}

fn bench_signatures(c: &mut Criterion) {
    c.bench_function("validate_signature/flat", |b| {
        b.iter(|| validate_signature(black_box(b"yyuuxxddssoogv")))
    });

    c.bench_function("validate_signature/nested", |b| {
        b.iter(|| validate_signature(black_box(b"a(ii(ss)a(yv))aaai")))
    });

    c.bench_function("validate_signature/long", |b| {
        b.iter(|| validate_signature(black_box(&[b'i'; 255])))
    });
}

fn bench_bodies(c: &mut Criterion) {
    let int_array = build_int_array_body(1024);
    let sig = Signature::new_const(b"ai");

    c.bench_function("validate_body/int_array_1024", |b| {
        b.iter(|| validate_body(black_box(sig), Endianness::LITTLE, black_box(&int_array)))
    });

    let struct_array = build_struct_array_body(512);
    let sig = Signature::new_const(b"a(uu)");

    c.bench_function("validate_body/struct_array_512", |b| {
        b.iter(|| validate_body(black_box(sig), Endianness::LITTLE, black_box(&struct_array)))
    });

    let variant = [1, b'i', 0, 0, 7, 0, 0, 0];
    let sig = Signature::VARIANT;

    c.bench_function("validate_body/variant", |b| {
        b.iter(|| validate_body(black_box(sig), Endianness::LITTLE, black_box(&variant)))
    });
}

fn bench_names(c: &mut Criterion) {
    c.bench_function("object_path/is_valid", |b| {
        b.iter(|| ObjectPath::is_valid(black_box(b"/org/freedesktop/DBus/Local/Deep/Path")))
    });
}

criterion_group!(benches, bench_signatures, bench_bodies, bench_names);
criterion_main!(benches);
