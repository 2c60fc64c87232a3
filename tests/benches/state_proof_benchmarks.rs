//! # State Proof Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | V5 signature file decode | < 10μs |
//! | Quorum over 30 nodes (parallel) | < 10ms |
//! | Full `verify` over 10 nodes | < 10ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use state_proof::test_utils::{
    filled_hash, public_key_hex, signed_v5_artifact, signed_v5_file, test_key,
};
use state_proof::{
    AddressBook, QuorumVerifier, SignatureArtifacts, SignatureFileDecoder, StateProofApi,
    StateProofService, VerifierConfig,
};
use state_proof_tests::integration::fixtures::{
    LineAddressBookParser, LineRecordFileParser, ProofBuilder, SignatureFormat,
};
use std::time::Duration;

fn node(i: usize) -> String {
    format!("0.0.{:03}", i)
}

fn quorum_inputs(nodes: usize) -> (AddressBook, SignatureArtifacts) {
    let hash = filled_hash(0x11);
    let book = (0..nodes)
        .map(|i| (node(i), public_key_hex(test_key(i))))
        .collect();
    let artifacts = (0..nodes)
        .map(|i| (node(i), signed_v5_artifact(test_key(i), &hash, &filled_hash(0xAA))))
        .collect();
    (book, artifacts)
}

fn bench_signature_file_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature-file-decode");

    let file = signed_v5_file(test_key(0), &filled_hash(0x11), &filled_hash(0xAA));
    let decoder = SignatureFileDecoder::default();

    group.throughput(Throughput::Bytes(file.len() as u64));
    group.bench_function("v5", |b| {
        b.iter(|| decoder.decode_file(black_box(&file)))
    });

    group.finish();
}

fn bench_quorum(c: &mut Criterion) {
    let mut group = c.benchmark_group("quorum-verification");
    group.measurement_time(Duration::from_secs(10));

    for nodes in [4usize, 10, 30] {
        let (book, artifacts) = quorum_inputs(nodes);
        group.throughput(Throughput::Elements(nodes as u64));

        for parallel in [false, true] {
            let verifier = QuorumVerifier::new(&VerifierConfig {
                parallel_verification: parallel,
                ..Default::default()
            });
            let label = if parallel { "parallel" } else { "sequential" };

            group.bench_with_input(BenchmarkId::new(label, nodes), &nodes, |b, _| {
                b.iter(|| verifier.verify_quorum(black_box(&book), black_box(&artifacts)))
            });
        }
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("state-proof-verify");

    let hash = filled_hash(0x11);
    let mut proof = ProofBuilder::new(10, hash).transaction("0_0_100_1614556800_123456789");
    for i in 0..10 {
        proof = proof.signed(i, hash, SignatureFormat::V5);
    }
    let payload = proof.payload();
    let service = StateProofService::new(LineAddressBookParser, LineRecordFileParser);

    group.bench_function("10-nodes", |b| {
        b.iter(|| service.verify(black_box("0.0.100@1614556800.123456789"), black_box(&payload)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_signature_file_decode,
    bench_quorum,
    bench_verify
);
criterion_main!(benches);
