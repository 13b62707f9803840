use custom_dns_application::ports::{RecordStore, UpsertOutcome};
use custom_dns_application::use_cases::ResolveQueryUseCase;
use custom_dns_domain::{
    CustomDnsQuery, DnsQuestion, RecordData, RecordType, RecordValues,
};
use custom_dns_infrastructure::database::create_pool;
use custom_dns_infrastructure::repositories::SqliteRecordStore;
use sqlx::SqlitePool;
use std::sync::Arc;

async fn create_test_db() -> SqlitePool {
    create_pool("sqlite::memory:", 1).await.unwrap()
}

fn values(record_type: RecordType, texts: &[&str]) -> RecordValues {
    let texts: Vec<String> = texts.iter().map(|s| s.to_string()).collect();
    RecordValues::parse(record_type, &texts).unwrap()
}

#[tokio::test]
async fn test_upsert_and_find_a_record() {
    let store = SqliteRecordStore::new(create_test_db().await);

    let outcome = store
        .upsert("web.example.com", 300, values(RecordType::A, &["10.0.0.1", "10.0.0.2"]))
        .await
        .unwrap();
    assert_eq!(outcome, UpsertOutcome::Created);

    let record = store
        .find_by_key_and_type("web.example.com", RecordType::A)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.key, "web.example.com");
    assert_eq!(record.ttl, 300);
    assert_eq!(record.values.to_text(), vec!["10.0.0.1", "10.0.0.2"]);
}

#[tokio::test]
async fn test_high_ipv4_survives_storage() {
    let store = SqliteRecordStore::new(create_test_db().await);

    store
        .upsert("high.example.com", 60, values(RecordType::A, &["255.255.255.254"]))
        .await
        .unwrap();

    let record = store
        .find_by_key_and_type("high.example.com", RecordType::A)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.values, RecordValues::A(vec![0xFFFF_FFFE]));
}

#[tokio::test]
async fn test_aaaa_halves_with_sign_bit() {
    let store = SqliteRecordStore::new(create_test_db().await);

    store
        .upsert(
            "v6.example.com",
            60,
            values(RecordType::AAAA, &["ffff:ffff::1", "2001:db8::8000:0:0:1"]),
        )
        .await
        .unwrap();

    let record = store
        .find_by_key_and_type("v6.example.com", RecordType::AAAA)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        record.values.to_text(),
        vec!["ffff:ffff::1", "2001:db8::8000:0:0:1"]
    );
}

#[tokio::test]
async fn test_upsert_replaces_values_and_ttl() {
    let store = SqliteRecordStore::new(create_test_db().await);

    store
        .upsert("t.example.com", 300, values(RecordType::TXT, &["a", "b", "c"]))
        .await
        .unwrap();
    let outcome = store
        .upsert("t.example.com", 30, values(RecordType::TXT, &["only"]))
        .await
        .unwrap();
    assert_eq!(outcome, UpsertOutcome::Updated);

    let record = store
        .find_by_key_and_type("t.example.com", RecordType::TXT)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.ttl, 30);
    assert_eq!(record.values, RecordValues::Txt(vec!["only".to_string()]));
}

#[tokio::test]
async fn test_record_without_values() {
    let store = SqliteRecordStore::new(create_test_db().await);

    store
        .upsert("empty.example.com", 60, RecordValues::empty(RecordType::A))
        .await
        .unwrap();

    let record = store
        .find_by_key_and_type("empty.example.com", RecordType::A)
        .await
        .unwrap()
        .unwrap();
    assert!(record.values.is_empty());
}

#[tokio::test]
async fn test_types_are_independent() {
    let store = SqliteRecordStore::new(create_test_db().await);

    store
        .upsert("both.example.com", 60, values(RecordType::A, &["1.1.1.1"]))
        .await
        .unwrap();
    store
        .upsert("both.example.com", 60, values(RecordType::TXT, &["hi"]))
        .await
        .unwrap();

    assert!(store
        .delete_by_key_and_type("both.example.com", RecordType::A)
        .await
        .unwrap());

    assert!(store
        .find_by_key_and_type("both.example.com", RecordType::A)
        .await
        .unwrap()
        .is_none());
    assert!(store
        .find_by_key_and_type("both.example.com", RecordType::TXT)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_delete_missing_returns_false() {
    let store = SqliteRecordStore::new(create_test_db().await);

    let deleted = store
        .delete_by_key_and_type("nothing.example.com", RecordType::AAAA)
        .await
        .unwrap();

    assert!(!deleted);
}

#[tokio::test]
async fn test_delete_removes_values() {
    let pool = create_test_db().await;
    let store = SqliteRecordStore::new(pool.clone());

    store
        .upsert("gone.example.com", 60, values(RecordType::A, &["1.1.1.1", "2.2.2.2"]))
        .await
        .unwrap();
    store
        .delete_by_key_and_type("gone.example.com", RecordType::A)
        .await
        .unwrap();

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM record_a_values")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_keys_are_stored_verbatim() {
    let store = SqliteRecordStore::new(create_test_db().await);

    store
        .upsert("*.example.com", 60, values(RecordType::A, &["2.2.2.2"]))
        .await
        .unwrap();
    store
        .upsert("domain:example.com", 60, values(RecordType::A, &["3.3.3.3"]))
        .await
        .unwrap();

    assert!(store
        .find_by_key_and_type("*.example.com", RecordType::A)
        .await
        .unwrap()
        .is_some());
    assert!(store
        .find_by_key_and_type("example.com", RecordType::A)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_list_all_counts_values() {
    let store = SqliteRecordStore::new(create_test_db().await);

    store
        .upsert("b.example.com", 60, values(RecordType::A, &["1.1.1.1", "1.1.1.2"]))
        .await
        .unwrap();
    store
        .upsert("a.example.com", 120, values(RecordType::TXT, &["x"]))
        .await
        .unwrap();

    let summaries = store.list_all().await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].key, "a.example.com");
    assert_eq!(summaries[0].record_type, RecordType::TXT);
    assert_eq!(summaries[0].ttl, 120);
    assert_eq!(summaries[0].value_count, 1);
    assert_eq!(summaries[1].value_count, 2);
}

#[tokio::test]
async fn test_resolves_through_sqlite_store() {
    let store = Arc::new(SqliteRecordStore::new(create_test_db().await));
    store
        .upsert("domain:corp.example", 45, values(RecordType::A, &["10.1.2.3"]))
        .await
        .unwrap();
    let use_case = ResolveQueryUseCase::new(store);

    let response = use_case
        .execute(&CustomDnsQuery::single(
            9,
            DnsQuestion::in_class("Deep.Host.Corp.Example.", RecordType::A),
        ))
        .await
        .unwrap();

    assert_eq!(response.answers.len(), 1);
    assert_eq!(response.answers[0].name, "Deep.Host.Corp.Example.");
    assert_eq!(response.answers[0].ttl, 45);
    assert_eq!(
        response.answers[0].data,
        RecordData::A("10.1.2.3".parse().unwrap())
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_find_never_mixes_ttl_and_values_across_writes() {
    let store = Arc::new(SqliteRecordStore::new(create_test_db().await));
    store
        .upsert("flip.example.com", 60, values(RecordType::A, &["10.0.0.1"]))
        .await
        .unwrap();

    let writer = {
        let store = store.clone();
        tokio::spawn(async move {
            for i in 0..200 {
                let (ttl, ips): (u32, &[&str]) = if i % 2 == 0 {
                    (300, &["10.0.0.2", "10.0.0.3"])
                } else {
                    (60, &["10.0.0.1"])
                };
                store
                    .upsert("flip.example.com", ttl, values(RecordType::A, ips))
                    .await
                    .unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    for _ in 0..200 {
        let record = store
            .find_by_key_and_type("flip.example.com", RecordType::A)
            .await
            .unwrap()
            .unwrap();
        match record.ttl {
            60 => assert_eq!(record.values.to_text(), vec!["10.0.0.1"]),
            300 => assert_eq!(record.values.to_text(), vec!["10.0.0.2", "10.0.0.3"]),
            other => panic!("unexpected ttl {}", other),
        }
        tokio::task::yield_now().await;
    }

    writer.await.unwrap();
}
