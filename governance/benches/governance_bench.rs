use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use agora_governance::{AnyCaller, EngineParams, GovernanceEngine, TableWeightOracle};
use agora_store::MemoryProposalStore;
use agora_types::{AccountAddress, ProposalDraft, Timestamp, VoteWeight};

fn voter_address(n: u32) -> AccountAddress {
    AccountAddress::new(format!("agr_{:0>40}", n))
}

fn bench_draft() -> ProposalDraft {
    ProposalDraft {
        title: "Adjust the treasury split".to_string(),
        description: String::new(),
        duration_secs: 1_000_000,
        minimum_votes: 1_000_000,
        option_a: "Yes".to_string(),
        option_b: "No".to_string(),
        proposer: voter_address(0),
    }
}

fn make_engine(voters: u32) -> GovernanceEngine<MemoryProposalStore> {
    let oracle: TableWeightOracle = (0..voters)
        .map(|n| (voter_address(n), n as VoteWeight + 1))
        .collect();
    GovernanceEngine::new(
        MemoryProposalStore::new(),
        EngineParams::default(),
        Box::new(oracle),
        Box::new(AnyCaller),
    )
}

fn bench_cast_vote(c: &mut Criterion) {
    let mut group = c.benchmark_group("cast_vote");

    for voter_count in [64u32, 1024, 16384] {
        group.bench_with_input(
            BenchmarkId::new("fresh_ballots", voter_count),
            &voter_count,
            |b, &voter_count| {
                b.iter_batched(
                    || {
                        let mut engine = make_engine(voter_count);
                        let id = engine
                            .create_proposal(bench_draft(), Timestamp::new(0))
                            .unwrap();
                        (engine, id)
                    },
                    |(mut engine, id)| {
                        for n in 0..voter_count {
                            engine
                                .cast_vote(
                                    id,
                                    &voter_address(n),
                                    n % 2 == 0,
                                    black_box(Timestamp::new(1)),
                                )
                                .unwrap();
                        }
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_active_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("active_scan");

    for proposal_count in [10usize, 100, 1000] {
        let mut engine = make_engine(1);
        for _ in 0..proposal_count {
            engine
                .create_proposal(bench_draft(), Timestamp::new(0))
                .unwrap();
        }
        let now = Timestamp::new(500);

        group.bench_with_input(
            BenchmarkId::new("active", proposal_count),
            &proposal_count,
            |b, _| {
                b.iter(|| black_box(engine.query().active(black_box(now))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_cast_vote, bench_active_scan);
criterion_main!(benches);
