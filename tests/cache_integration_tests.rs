//! Integration Tests for the Instrumented Cache
//!
//! Exercises the public API end to end on the in-memory store, and against
//! a live Redis server when `REDIS_URL` is set (ignored by default).

use redis_basic::cache::{to_int, Cache, STORE_METHOD};
use redis_basic::instrument::{call_history, count_calls, method, replay, Method};
use redis_basic::store::{MemoryStore, RedisStore, Store};
use redis_basic::Error;

// == Helper Functions ==

fn history(store: &mut dyn Store, key: &str) -> Vec<String> {
    store
        .lrange(key, 0, -1)
        .unwrap()
        .into_iter()
        .map(|raw| String::from_utf8(raw).unwrap())
        .collect()
}

fn exercise_cache<S: Store>(store: S) {
    let mut cache = Cache::new(store).unwrap();

    let keys = vec![
        cache.store("foo").unwrap(),
        cache.store(b"bar".to_vec()).unwrap(),
        cache.store(42).unwrap(),
    ];

    assert_eq!(cache.get_str(&keys[0]).unwrap(), "foo");
    assert_eq!(cache.get_raw(&keys[1]).unwrap(), Some(b"bar".to_vec()));
    assert_eq!(cache.get_int(&keys[2]).unwrap(), 42);
    assert_eq!(cache.get(STORE_METHOD, to_int).unwrap(), 3);

    let store = cache.store_handle();
    assert_eq!(
        history(store, "Cache::store:inputs"),
        vec![r#"("foo",)"#, r#"(b"bar",)"#, "(42,)"]
    );
    assert_eq!(history(store, "Cache::store:outputs"), keys);

    let replay = cache.replay().unwrap();
    assert_eq!(replay.calls, 3);
    let rendered = replay.to_string();
    assert_eq!(rendered.lines().count(), 4);
    assert!(rendered.contains(&format!("Cache::store(*(42,)) -> {}", keys[2])));
}

// == In-Memory Store ==

#[test]
fn test_cache_roundtrip_and_history() {
    exercise_cache(MemoryStore::new());
}

#[test]
fn test_new_cache_starts_from_clean_slate() {
    let mut store = MemoryStore::new();
    {
        let mut cache = Cache::new(&mut store).unwrap();
        cache.store("first session").unwrap();
    }
    assert!(!store.is_empty());

    let mut cache = Cache::new(&mut store).unwrap();
    assert_eq!(cache.replay().unwrap().calls, 0);
    cache.store("second session").unwrap();
    assert_eq!(cache.replay().unwrap().calls, 1);
}

#[test]
fn test_custom_method_shares_key_derivation() {
    let mut store = MemoryStore::new();
    let mut greet = call_history(count_calls(method(
        "Greeter::greet",
        |store: &mut dyn Store, (name,): (String,)| {
            store.incr("greetings")?;
            Ok(format!("hello {}", name))
        },
    )));

    greet.call(&mut store, ("ada".to_string(),)).unwrap();
    greet.call(&mut store, ("grace".to_string(),)).unwrap();

    let replay = replay(&mut store, greet.qualified_name()).unwrap();
    assert_eq!(replay.calls, 2);
    assert_eq!(
        replay.to_string(),
        "Greeter::greet was called 2 times:\n\
         Greeter::greet(*(\"ada\",)) -> hello ada\n\
         Greeter::greet(*(\"grace\",)) -> hello grace"
    );
    assert_eq!(store.get("greetings").unwrap(), Some(b"2".to_vec()));
}

#[test]
fn test_conversion_error_propagates() {
    let mut cache = Cache::new(MemoryStore::new()).unwrap();
    let key = cache.store("forty-two").unwrap();

    assert!(matches!(cache.get_int(&key), Err(Error::Conversion(_))));
    // The raw value is untouched by the failed conversion.
    assert_eq!(cache.get_str(&key).unwrap(), "forty-two");
}

// == Redis Store ==

#[test]
#[ignore = "requires a Redis server at REDIS_URL"]
fn test_cache_on_redis() {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string());
    exercise_cache(RedisStore::open(&url).unwrap());
}

#[test]
#[ignore = "requires a Redis server at REDIS_URL"]
fn test_redis_store_contract() {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string());
    let mut store = RedisStore::open(&url).unwrap();
    store.flushall().unwrap();

    assert_eq!(store.get("missing").unwrap(), None);
    assert_eq!(store.incr("n").unwrap(), 1);
    assert_eq!(store.incr("n").unwrap(), 2);
    assert_eq!(store.rpush("l", b"a").unwrap(), 1);
    assert_eq!(store.rpush("l", b"b").unwrap(), 2);
    assert_eq!(store.lrange("l", 0, -1).unwrap(), vec![b"a".to_vec(), b"b".to_vec()]);
    store.setex("t", 10, b"v").unwrap();
    assert_eq!(store.get("t").unwrap(), Some(b"v".to_vec()));

    store.flushall().unwrap();
}

#[test]
fn test_redis_store_unreachable() {
    let result = RedisStore::open("redis://127.0.0.1:1/");
    assert!(matches!(result, Err(Error::Store(_))));
}
