// benches/decode.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cricstat::specs::career_averages::extract_tokens;
use cricstat::{compile, decode};

/// A results page with a split table of `cols` categories.
fn synthetic_page(cols: usize) -> String {
    let mut html = String::from("<table class=\"engineTable\">\n<caption>Career averages</caption>\n<tr>\n<th>&nbsp;</th>\n");
    for i in 0..cols {
        html.push_str(&format!("<th>Cat{i}</th>\n"));
    }
    for label in ["unfiltered", "filtered"] {
        html.push_str(&format!("</tr>\n<tr>\n<td><b>{label}</b></td>\n"));
        for i in 0..cols {
            html.push_str(&format!("<td>{}</td>\n", i * 7));
        }
    }
    html.push_str("</tr>\n</table>\n");
    html
}

fn bench_compile(c: &mut Criterion) {
    c.bench_function("compile_full_request", |b| {
        b.iter(|| {
            let q = compile(black_box(
                "sachin tendulkar, vs australia, in india, at home, format tests, year Mar 1996-Dec 2003",
            ));
            black_box(q.map(|q| q.encoded.len()).unwrap_or(0))
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let page = synthetic_page(14);
    let tokens = extract_tokens(&page).unwrap_or_default();

    c.bench_function("extract_tokens", |b| {
        b.iter(|| black_box(extract_tokens(black_box(&page)).map(|t| t.len())))
    });

    c.bench_function("decode_split", |b| {
        b.iter(|| black_box(decode(black_box(&tokens), false).map(|t| t.dropped)))
    });
}

criterion_group!(benches, bench_compile, bench_decode);
criterion_main!(benches);
