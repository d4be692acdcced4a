// Criterion benchmarks for metaphone3.
//
// Run:
//   cargo bench -p metaphone3

use criterion::{Criterion, criterion_group, criterion_main};
use metaphone3::{EncoderOptions, EncoderPool, EncodingCache, Metaphone3, encode};

const WORDS: &[&str] = &[
    "Smith", "Schmidt", "Johnson", "Williams", "Jones", "Brown", "Davis", "Miller", "Wilson",
    "Moore", "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson",
    "Garcia", "Martinez", "Robinson", "Clark", "Rodriguez", "Lewis", "Lee", "Walker", "Hall",
    "Allen", "Young", "Hernandez", "King", "Wright", "Lopez", "Hill", "Scott", "Green", "Adams",
    "Baker", "Gonzalez", "Nelson", "Carter", "Mitchell", "Perez", "Roberts", "Turner", "Phillips",
    "Campbell", "Parker", "Evans", "Edwards", "Collins", "Stewart", "Sanchez", "Morris", "Rogers",
    "Reed", "Cook", "Morgan", "Bell", "Murphy", "Bailey", "Rivera", "Cooper", "Richardson",
    "Cox", "Howard", "Ward", "Torres", "Peterson", "Gray", "Ramirez", "James", "Watson",
    "Brooks", "Kelly", "Sanders", "Price", "Bennett", "Wood", "Barnes", "Ross", "Henderson",
    "Coleman", "Jenkins", "Perry", "Powell", "Long", "Patterson", "Hughes", "Flores",
    "Washington", "Butler", "Simmons", "Foster", "Gonzales", "Bryant", "Alexander", "Russell",
    "Griffin", "Diaz", "Hayes", "Kowalewski", "Gorecki", "Focaccia", "Architect", "Accident",
];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// One engine reused for every word.
fn bench_engine_reuse(c: &mut Criterion) {
    let mut engine = Metaphone3::new(EncoderOptions::default());
    c.bench_function("engine_reuse", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(engine.encode(word));
            }
        });
    });
}

/// A throwaway engine per word.
fn bench_one_off(c: &mut Criterion) {
    c.bench_function("one_off", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(encode(word, EncoderOptions::default()));
            }
        });
    });
}

/// Vowel encoding on, which exercises the E rules.
fn bench_vowels(c: &mut Criterion) {
    let mut engine = Metaphone3::new(EncoderOptions::new().with_encode_vowels(true));
    c.bench_function("engine_vowels", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(engine.encode(word));
            }
        });
    });
}

fn bench_pool(c: &mut Criterion) {
    let pool = EncoderPool::default();
    c.bench_function("pool", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(pool.encode(word));
            }
        });
    });
}

/// Warm cache: every lookup is a hit after the first iteration.
fn bench_cache(c: &mut Criterion) {
    let mut cache = EncodingCache::new(EncoderOptions::default(), 1024);
    c.bench_function("cache_warm", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(cache.encode(word));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_engine_reuse,
    bench_one_off,
    bench_vowels,
    bench_pool,
    bench_cache,
);
criterion_main!(benches);
