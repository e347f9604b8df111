//! HTTP/1.x head parsing benchmarks
//!
//! This benchmark suite measures:
//! - Request head parsing (small, typical browser, many headers)
//! - Response head parsing
//! - Header block scanning with long values (8-byte fast path)
//! - Re-parsing cost when a head arrives in pieces
//!
//! Run with: cargo bench --bench h1_parse

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use h1scan::http::{parse_headers, Request, Response, EMPTY_HEADER, MAX_HEADERS};

const SMALL_REQUEST: &[u8] = b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n";

const BROWSER_REQUEST: &[u8] = b"GET /wp-content/uploads/2010/03/hello-kitty-darth-vader-pink.jpg HTTP/1.1\r\n\
Host: www.kittyhell.com\r\n\
User-Agent: Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10.6; ja-JP-mac; rv:1.9.2.3) Gecko/20100401 Firefox/3.6.3 Pathtraq/0.9\r\n\
Accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8\r\n\
Accept-Language: ja,en-us;q=0.7,en;q=0.3\r\n\
Accept-Encoding: gzip,deflate\r\n\
Accept-Charset: Shift_JIS,utf-8;q=0.7,*;q=0.7\r\n\
Keep-Alive: 115\r\n\
Connection: keep-alive\r\n\
Cookie: wp_ozh_wsa_visits=2; wp_ozh_wsa_visit_lasttime=xxxxxxxxxx; __utma=xxxxxxxxx.xxxxxxxxxx.xxxxxxxxxx.xxxxxxxxxx.xxxxxxxxxx.x\r\n\r\n";

const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
Date: Mon, 19 Oct 2026 10:00:00 GMT\r\n\
Server: h1scan-bench\r\n\
Content-Type: text/html; charset=utf-8\r\n\
Content-Length: 1024\r\n\
Cache-Control: max-age=3600, public\r\n\r\n";

fn many_headers(count: usize) -> Vec<u8> {
    let mut buf = b"GET /many HTTP/1.1\r\n".to_vec();
    for i in 0..count {
        buf.extend_from_slice(format!("X-Header-{}: value-{}\r\n", i, i).as_bytes());
    }
    buf.extend_from_slice(b"\r\n");
    buf
}

fn long_value_block(value_len: usize) -> Vec<u8> {
    let mut buf = b"X-Long: ".to_vec();
    buf.extend(std::iter::repeat(b'a').take(value_len));
    buf.extend_from_slice(b"\r\n\r\n");
    buf
}

// ========== Request Benchmarks ==========

fn bench_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("request");

    for (name, buf) in [("small", SMALL_REQUEST), ("browser", BROWSER_REQUEST)] {
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut headers = [EMPTY_HEADER; 16];
                let mut req = Request::new(&mut headers);
                black_box(req.parse(black_box(buf)).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_request_header_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_header_count");

    for count in [1, 8, 32, 64] {
        let buf = many_headers(count);
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &buf, |b, buf| {
            b.iter(|| {
                let mut headers = [EMPTY_HEADER; MAX_HEADERS];
                let mut req = Request::new(&mut headers);
                black_box(req.parse(black_box(buf)).unwrap());
            });
        });
    }

    group.finish();
}

// ========== Response Benchmarks ==========

fn bench_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("response");
    group.throughput(Throughput::Bytes(RESPONSE.len() as u64));

    group.bench_function("typical", |b| {
        b.iter(|| {
            let mut headers = [EMPTY_HEADER; 16];
            let mut res = Response::new(&mut headers);
            black_box(res.parse(black_box(RESPONSE)).unwrap());
        });
    });

    group.finish();
}

// ========== Header Block Benchmarks ==========

fn bench_header_value_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_value_length");

    for len in [7, 64, 512, 4096] {
        let buf = long_value_block(len);
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &buf, |b, buf| {
            b.iter(|| {
                let mut storage = [EMPTY_HEADER; 1];
                let mut headers = &mut storage[..];
                black_box(parse_headers(black_box(buf), &mut headers).unwrap());
            });
        });
    }

    group.finish();
}

// ========== Incremental Benchmarks ==========

fn bench_incremental_reparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_reparse");

    for read_size in [16, 64, 256] {
        group.bench_with_input(
            BenchmarkId::from_parameter(read_size),
            &read_size,
            |b, &read_size| {
                b.iter(|| {
                    let mut end = 0;
                    loop {
                        end = (end + read_size).min(BROWSER_REQUEST.len());
                        let mut headers = [EMPTY_HEADER; 16];
                        let mut req = Request::new(&mut headers);
                        if req.parse(black_box(&BROWSER_REQUEST[..end])).unwrap().is_complete() {
                            break;
                        }
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_request,
    bench_request_header_count,
    bench_response,
    bench_header_value_length,
    bench_incremental_reparse,
);
criterion_main!(benches);
