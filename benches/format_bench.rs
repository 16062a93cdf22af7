use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ustid::{interpret_response, validate_format};

const MIXED_IDS: [(&str, &str); 8] = [
    ("ATU12345678", ""),
    ("BE-0123.456.749", ""),
    ("FR1X123456789", ""),
    ("NL123456789B01", ""),
    ("SE123456789001", ""),
    ("12345678", "AT"),
    ("XX123456789", ""),
    ("", ""),
];

const VALID_PAGE: &str = "<html>\r\n<head><title>VIES VAT number validation</title></head>\r\n\
    <body>\r\n<table border=\"0\"><tr><td class=\"validStyle\">Yes, valid VAT number</td></tr>\
    </table>\r\n</body>\r\n</html>";

const DRIFTED_PAGE: &str = "<html><body><p>The service you requested is temporarily \
    unavailable, please try again later.</p></body></html>";

fn bench_validate_format(c: &mut Criterion) {
    c.bench_function("validate_format/mixed", |b| {
        b.iter(|| {
            for (number, member_state) in MIXED_IDS {
                let _ = validate_format(black_box(number), black_box(member_state));
            }
        });
    });
}

fn bench_interpret_response(c: &mut Criterion) {
    c.bench_function("interpret_response/confirmed", |b| {
        b.iter(|| interpret_response(black_box(VALID_PAGE)));
    });

    // Worst case: the full page is scanned and echoed back
    c.bench_function("interpret_response/drifted", |b| {
        b.iter(|| interpret_response(black_box(DRIFTED_PAGE)));
    });
}

criterion_group!(benches, bench_validate_format, bench_interpret_response);
criterion_main!(benches);
