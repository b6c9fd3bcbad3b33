use std::fs;
use syllable_core::core::engine::DictionaryStatus;
use syllable_core::persistence::{load_cache, load_dictionary};
use syllable_core::{Config, SyllableEngine, SyllableFields, Tone};

const CSV: &str = "word,_word_,description\n\
con mèo,_con_mèo_,\"[{'danh từ': ['loài thú nhỏ, nuôi để bắt chuột']}]\"\n\
mèo mả gà đồng,_mèo_mả_gà_đồng_,\"[{'thành ngữ': ['kẻ lang bạt']}]\"\n\
gà,_gà_,\"[{'danh từ': ['loài chim nuôi']}, {'động từ': ['mách nước']}]\"\n";

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        dictionary_path: dir.join("tu_dien.csv"),
        cache_path: Some(dir.join("tu_dien.bin")),
        ..Config::default()
    }
}

#[test]
fn engine_loads_csv_and_describes_results() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.dictionary_path, CSV).unwrap();

    let mut engine = SyllableEngine::from_config_blocking(config);
    assert_eq!(engine.status(), &DictionaryStatus::Ready);
    assert_eq!(engine.dictionary().len(), 3);

    engine.set_fields(SyllableFields::new("g", "a", Tone::Huyen, ""));
    let found: Vec<_> = engine.results().map(|e| e.display.clone()).collect();
    assert_eq!(found, vec!["mèo mả gà đồng", "gà"]);

    engine.select(1);
    assert_eq!(
        engine.descriptions(),
        vec![
            "\"gà\" ﹣ danh từ: loài chim nuôi".to_string(),
            "\"gà\" ﹣ động từ: mách nước".to_string(),
        ]
    );
}

#[test]
fn loading_writes_a_reusable_cache() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.dictionary_path, CSV).unwrap();

    let from_source = load_dictionary(&config).unwrap();
    let cached = load_cache(config.cache_path().unwrap()).unwrap();
    assert_eq!(cached, from_source);
}

#[test]
fn json_sources_load_too() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        dictionary_path: dir.path().join("tu_dien.json"),
        cache_path: None,
        ..Config::default()
    };
    fs::write(
        &config.dictionary_path,
        r#"[{"word": "mèo", "_word_": "_mèo_", "description": "[{'danh từ': ['mèo']}]"}]"#,
    )
    .unwrap();

    let dictionary = load_dictionary(&config).unwrap();
    assert_eq!(dictionary.search("mèo"), vec![0]);
}

#[test]
fn missing_dictionary_leaves_a_working_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        cache_path: None,
        ..config_in(dir.path())
    };

    let mut engine = SyllableEngine::from_config_blocking(config);
    assert!(matches!(engine.status(), DictionaryStatus::Unavailable(_)));

    engine.set_fields(SyllableFields::new("m", "eo", Tone::Huyen, ""));
    assert_eq!(engine.syllable(), "mèo");
    assert_eq!(engine.results().count(), 0);
    assert!(engine.descriptions().is_empty());
}

#[test]
fn empty_cache_path_disables_caching() {
    let config = Config::from_toml_str("cache_path = \"\"").unwrap();
    assert!(config.cache_path().is_none());
}
