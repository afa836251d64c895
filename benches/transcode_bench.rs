use criterion::{Criterion, criterion_group, criterion_main};
use jschomp::{Options, transcode_one};

fn bench_transcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode_one");
    let cases = vec![
        r#"{a:1}"#,
        r#"{'hello': 'world', 'my': {'master': 'of Orion'}, 'test': 'xx'}"#,
        r#"var data = {price: '12,90', qty: 0x10, tags: [1, 2, 3,]};"#,
        r#"{"a": /*c*/ "X", regex: /a[^d]{1,12}/i, cb: function(){ return 1; }}"#,
        r#"[12, -323, 0.32, -32.22, .2, - 4, 12_12, 0b111]"#,
    ];
    let opts = Options::default();
    for (i, s) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{}", i), |b| {
            b.iter(|| {
                let out = transcode_one(std::hint::black_box(s), &opts).unwrap();
                std::hint::black_box(out);
            })
        });
    }

    // one larger, deeply mixed document
    let mut big = String::from("window.__STATE__ = {items: [");
    for i in 0..512 {
        big.push_str(&format!("{{id: {i}, name: 'item {i}', ok: true}},"));
    }
    big.push_str("]};");
    group.bench_function("big_object", |b| {
        b.iter(|| {
            let out = transcode_one(std::hint::black_box(&big), &opts).unwrap();
            std::hint::black_box(out);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_transcode);
criterion_main!(benches);
