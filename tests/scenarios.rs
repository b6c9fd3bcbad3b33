use rand::rngs::StdRng;
use rand::SeedableRng;
use syllable_core::core::tone::{base_vowels, decompose_tone, strip_tones};
use syllable_core::{
    apply_tone, compose, decompose, search, Config, Dictionary, DictionaryEntry, Key,
    SyllableEngine, SyllableFields, Tone,
};

fn type_keys(engine: &mut SyllableEngine, keys: &str) {
    for ch in keys.chars() {
        engine.handle_key(&Key::Char(ch));
    }
}

fn engine_with(entries: Vec<DictionaryEntry>) -> SyllableEngine {
    let mut engine = SyllableEngine::with_rng(Config::default(), StdRng::seed_from_u64(11));
    engine.install_dictionary(Ok(Dictionary::from_entries(entries)));
    engine
}

#[test]
fn tone_placement_examples() {
    assert_eq!(apply_tone("a", Tone::Sac), "á");
    assert_eq!(apply_tone("oa", Tone::Huyen), "oà");
    assert_eq!(apply_tone("uyê", Tone::Nang), "uyệ");
}

#[test]
fn every_base_and_tone_round_trips() {
    for base in base_vowels() {
        for tone in Tone::ALL {
            let marked: Vec<char> = apply_tone(&base.to_string(), tone).chars().collect();
            assert_eq!(marked.len(), 1);
            assert_eq!(decompose_tone(marked[0]), Some((base, tone)));
        }
    }
}

#[test]
fn ngang_and_idempotence_hold_for_all_inventory_nuclei() {
    for nucleus in syllable_core::core::inventory::NUCLEI {
        assert_eq!(apply_tone(nucleus, Tone::Ngang), strip_tones(nucleus));
        for tone in Tone::ALL {
            let once = apply_tone(nucleus, tone);
            assert_eq!(apply_tone(&once, tone), once, "{nucleus} {tone}");
            assert_eq!(apply_tone(&once, Tone::Ngang), nucleus);
        }
    }
}

#[test]
fn decomposing_nghieng() {
    let fields = decompose("nghiêng");
    assert_eq!(fields, SyllableFields::new("ngh", "iê", Tone::Ngang, "ng"));
}

#[test]
fn decompose_then_compose_restores_dictionary_words() {
    for word in ["nghiêng", "trường", "khuyết", "người", "hoà", "chuyện", "mèo", "đồng"] {
        assert_eq!(compose(&decompose(word)), word);
    }
}

#[test]
fn search_needs_the_marked_token() {
    let dict = Dictionary::from_entries(vec![DictionaryEntry::new("con_mèo", "[]")]);
    assert_eq!(search(&dict, "mèo").len(), 1);
    assert!(search(&dict, "meo").is_empty());
    assert!(search(&dict, "").is_empty());
}

#[test]
fn pre_macro_through_the_engine() {
    let mut engine = engine_with(Vec::new());
    type_keys(&mut engine, "PRE_b");
    assert_eq!(engine.buffer(), "PRE_b");
    engine.handle_key(&Key::from_symbol("@"));
    assert_eq!(engine.fields().initial, "b");
    assert_eq!(engine.buffer(), "");
}

#[test]
fn building_a_word_from_macros_selects_the_first_match() {
    let mut engine = engine_with(vec![
        DictionaryEntry::new("_thương_yêu_", "[{'động từ': ['yêu thương']}]"),
        DictionaryEntry::new("_yêu_", "[{'động từ': ['có tình cảm']}]"),
        DictionaryEntry::new("_yếu_", "[]"),
    ]);
    type_keys(&mut engine, "VOW_y0_e6_u0@");
    assert_eq!(engine.syllable(), "yêu");
    assert_eq!(engine.selected_index(), Some(0));
    assert_eq!(
        engine.results().map(|e| e.display.as_str()).collect::<Vec<_>>(),
        vec!["thương yêu", "yêu"]
    );

    engine.handle_key(&Key::ArrowDown);
    assert_eq!(engine.descriptions(), vec!["\"yêu\" ﹣ động từ: có tình cảm".to_string()]);
    engine.handle_key(&Key::ArrowDown);
    assert_eq!(engine.selected_index(), Some(0));
    engine.handle_key(&Key::ArrowUp);
    assert_eq!(engine.selected_index(), Some(0));
}

#[test]
fn selection_is_none_exactly_when_results_are_empty() {
    let mut engine = engine_with(vec![DictionaryEntry::new("_bà_", "[]")]);
    let mut rng_keys = String::new();
    for _ in 0..30 {
        rng_keys.push('\\');
        rng_keys.push('/');
    }
    for ch in rng_keys.chars() {
        engine.handle_key(&Key::Char(ch));
        let results = engine.results().count();
        match engine.selected_index() {
            Some(i) => assert!(i < results),
            None => assert_eq!(results, 0),
        }
        assert_eq!(engine.buffer(), "");
    }
}

#[test]
fn reserved_keys_are_acknowledged() {
    let mut engine = engine_with(Vec::new());
    for symbol in ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "\\", "/", "@"] {
        assert!(engine.handle_key(&Key::from_symbol(symbol)).prevent_default, "{symbol}");
    }
    for symbol in ["a", "_", "Enter", "Shift"] {
        assert!(!engine.handle_key(&Key::from_symbol(symbol)).prevent_default, "{symbol}");
    }
}
