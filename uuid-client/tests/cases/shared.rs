use std::collections::HashSet;

use ruuid_client::{GeneratorConfig, SharedGenerator, UuidGenerator};

use crate::harness::{logger::init_logger, uuid_format::check_v4_format};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_get_distinct_ids() -> anyhow::Result<()> {
    init_logger();
    let shared = SharedGenerator::new(UuidGenerator::new(GeneratorConfig::with_seed(2024)));

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let shared = shared.clone();
        tasks.push(tokio::spawn(async move {
            (0..50).map(|_| shared.create()).collect::<Result<Vec<_>, _>>()
        }));
    }

    let mut seen = HashSet::new();
    for task in tasks {
        for text in task.await?? {
            check_v4_format(&text)?;
            assert!(seen.insert(text), "duplicate id {text}");
        }
    }
    assert_eq!(seen.len(), 200);
    assert_eq!(shared.generated(), 200);
    Ok(())
}

#[test]
fn shared_reseed_replays_sequence() -> anyhow::Result<()> {
    let shared: SharedGenerator = UuidGenerator::new(GeneratorConfig::with_seed(5)).into();
    let first = shared.create_uuid()?;
    shared.reseed(5);
    assert_eq!(shared.clone().create_uuid()?, first);
    Ok(())
}
