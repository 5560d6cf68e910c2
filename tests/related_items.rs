//! End-to-end tests over the public API: tokenize a corpus, build the
//! vectorizer, score every item and rank related items.

use related_items::{
    build_vectorizer, compute_vector, related, tokenize, Document, Error, RawFields,
    SectionWeights, TFIDFVectorizer,
};

const NO_TAGS: [&str; 0] = [];

fn blog() -> Vec<RawFields> {
    vec![
        RawFields::new(
            "Ownership in Rust",
            "How the borrow checker keeps memory safe",
            &["rust", "memory"],
        ),
        RawFields::new(
            "Async Rust in practice",
            "Futures, executors and the borrow checker",
            &["rust", "async"],
        ),
        RawFields::new(
            "Baking sourdough bread",
            "A starter, flour and patience",
            &["cooking", "bread"],
        ),
        RawFields::new(
            "Memory layout of Rust structs",
            "Padding, alignment and repr(C)",
            &["rust", "memory"],
        ),
        RawFields::new("Pizza dough", "Flour, water and a hot oven", &["cooking"]),
    ]
}

fn documents(items: &[RawFields]) -> Vec<Document> {
    items.iter().map(|item| item.tokenize().unwrap()).collect()
}

#[test]
fn related_items_share_topics() {
    let docs = documents(&blog());
    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::new(&docs);
    let vectors = vectorizer.compute_vectors(&docs);

    let hits = related(&vectors, 0, 2).unwrap();
    let keys: Vec<usize> = hits.keys().copied().collect();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&3), "rust memory posts should be related: {hits:#?}");
    assert!(!keys.contains(&2) && !keys.contains(&4));

    let hits = related(&vectors, 2, 1).unwrap();
    assert_eq!(hits.list[0].key, 4);
}

#[test]
fn tokenizer_output_is_case_insensitive_and_clean() {
    assert_eq!(tokenize("Hello", "", &NO_TAGS), tokenize("HELLO", "", &NO_TAGS));

    let doc = tokenize("C# and F#", "The best of .NET", &["dotnet"]);
    assert!(doc.iter().all(|t| t.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())));
    assert!(doc.iter().any(|t| t == "c"));
    assert!(doc.iter().any(|t| t == "net"));
    assert!(!doc.iter().any(|t| t == "and" || t == "the" || t == "of"));
}

#[test]
fn idf_follows_document_frequency() {
    let docs = vec![
        tokenize("Dog", "", &["pet"]),
        tokenize("Cat", "", &["pet"]),
        tokenize("Fish", "", &["pet"]),
        tokenize("Dog walking", "", &["outdoor"]),
    ];
    let vectorizer = build_vectorizer(&docs);

    assert_eq!(vectorizer.idf("title"), 0.0);
    assert!((vectorizer.idf("cat") - 4f64.ln()).abs() < 1e-12);
    assert!((vectorizer.idf("dog") - 2f64.ln()).abs() < 1e-12);
    assert!((vectorizer.idf("pet") - (4.0f64 / 3.0).ln()).abs() < 1e-12);
    assert!(vectorizer.idf("cat") > vectorizer.idf("dog"));
    assert!(vectorizer.idf("dog") > vectorizer.idf("pet"));
    assert_eq!(vectorizer.idf("unknown"), 0.0);
}

#[test]
fn pet_scenario() {
    let docs: Vec<Document> = vec![
        "title dog short description pet tags animal".split(' ').collect(),
        "title cat short description pet tags animal".split(' ').collect(),
    ];
    let vectorizer = build_vectorizer(&docs);
    let vector = compute_vector(&vectorizer, Some(&docs[0][..])).unwrap();

    assert_eq!(vector.score("pet"), 0.0);
    assert_eq!(vector.score("animal"), 0.0);
    assert!(vector.score("dog") > 0.0);
    assert!(vector.iter().all(|(_, score)| score > 0.0));
}

#[test]
fn absent_inputs_are_invalid_arguments() {
    let vectorizer = build_vectorizer(&documents(&blog()));
    assert!(matches!(
        compute_vector::<&str>(&vectorizer, None),
        Err(Error::InvalidArgument(_))
    ));

    let items: Vec<RawFields> = serde_json::from_str(
        r#"[{"title": "Ok", "shortDescription": "", "tags": []},
            {"title": null, "shortDescription": "missing title", "tags": ["x"]}]"#,
    )
    .unwrap();
    assert!(items[0].tokenize().is_ok());
    assert!(matches!(items[1].tokenize(), Err(Error::InvalidArgument(_))));
}

#[test]
fn weights_change_ranking_only_through_sections() {
    let docs = documents(&blog());
    let flat = SectionWeights {
        title: 1.0,
        short_description: 1.0,
        tags: 1.0,
        default: 1.0,
    };
    let weighted: TFIDFVectorizer = TFIDFVectorizer::new(&docs);
    let unweighted: TFIDFVectorizer = TFIDFVectorizer::with_weights(&docs, flat).unwrap();

    let a = weighted.compute_vector(&docs[0]);
    let b = unweighted.compute_vector(&docs[0]);
    assert_eq!(a.len(), b.len());
    assert!((a.score("ownership") / b.score("ownership") - 3.0).abs() < 1e-12);
    assert!((a.score("checker") / b.score("checker") - 2.0).abs() < 1e-12);
}

#[test]
fn marker_words_in_titles_move_section_bounds() {
    let tags_title = tokenize("Tags rust", "desc", &["x"]);
    let short_title = tokenize("Short stories", "tales", &["books"]);
    let docs = vec![
        tags_title.clone(),
        short_title.clone(),
        tokenize("Other", "words", &["y"]),
    ];
    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::new(&docs);

    // the title's "tags" is the first tags: rust stays in the title (3.0),
    // desc falls after the tags bound (1.5)
    let v = vectorizer.compute_vector(&tags_title);
    assert!((v.score("rust") / v.score("desc") - 2.0).abs() < 1e-12);
    assert!((v.score("x") / v.score("desc") - 1.0).abs() < 1e-12);

    // the title's "short" is the first short: stories and tales are both
    // short description (2.0), books is tags (1.5)
    let v = vectorizer.compute_vector(&short_title);
    assert!((v.score("stories") / v.score("tales") - 1.0).abs() < 1e-12);
    assert!((v.score("stories") / v.score("books") - 2.0 / 1.5).abs() < 1e-12);
}

#[test]
fn shared_vectorizer_across_threads() {
    let docs = documents(&blog());
    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::new(&docs);
    let expected = vectorizer.compute_vectors(&docs);

    let shared = &vectorizer;
    std::thread::scope(|s| {
        let handles: Vec<_> = docs
            .iter()
            .map(|doc| s.spawn(move || shared.compute_vector(doc)))
            .collect();
        for (handle, expected) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
