use engine::{build_index, top_docs, MemCorpus, NoiseWords, Occurrence, RESULT_LIMIT};

fn fruit_corpus() -> MemCorpus {
    MemCorpus::new()
        .with_doc("doc1.txt", "Apple apple APPLE! the")
        .with_doc("doc2.txt", "apple, banana banana banana banana banana?")
        .with_doc("doc3.txt", "banana banana!! is the")
}

fn noise() -> NoiseWords {
    NoiseWords::from_words(["the", "is"])
}

#[test]
fn it_builds_frequency_ordered_postings() {
    let index = build_index(&fruit_corpus(), &noise()).unwrap();

    assert_eq!(index.doc_count(), 3);
    assert_eq!(
        index.postings("apple").to_vec(),
        vec![Occurrence::new("doc1.txt", 3), Occurrence::new("doc2.txt", 1)]
    );
    assert_eq!(
        index.postings("banana").to_vec(),
        vec![Occurrence::new("doc2.txt", 5), Occurrence::new("doc3.txt", 2)]
    );
}

#[test]
fn it_excludes_noise_words_from_the_index() {
    let index = build_index(&fruit_corpus(), &noise()).unwrap();
    assert!(!index.contains("the"));
    assert!(!index.contains("is"));
    assert_eq!(index.keyword_count(), 2);
}

#[test]
fn it_answers_a_two_keyword_search_best_first() {
    let index = build_index(&fruit_corpus(), &noise()).unwrap();
    assert_eq!(
        top_docs(&index, "apple", "banana", RESULT_LIMIT),
        vec!["doc2.txt", "doc1.txt", "doc3.txt"]
    );
}

#[test]
fn it_indexes_nothing_for_all_noise_documents() {
    let corpus = MemCorpus::new()
        .with_doc("noise-only.txt", "the the is")
        .with_doc("empty.txt", "");
    let index = build_index(&corpus, &noise()).unwrap();

    assert_eq!(index.doc_count(), 2);
    assert!(index.is_empty());
    assert!(top_docs(&index, "anything", "else", RESULT_LIMIT).is_empty());
}

#[test]
fn it_fails_the_build_on_an_unreadable_document() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("docs.txt"), "present.txt\nmissing.txt\n").unwrap();
    std::fs::write(dir.path().join("present.txt"), "hello world").unwrap();

    let corpus = engine::FsCorpus::from_manifest(dir.path().join("docs.txt"));
    let err = build_index(&corpus, &noise()).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn it_indexes_a_manifest_corpus_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("docs.txt"), "a.txt\nb.txt\n").unwrap();
    std::fs::write(dir.path().join("a.txt"), "Tiger, tiger! burning bright").unwrap();
    std::fs::write(dir.path().join("b.txt"), "the tiger sleeps").unwrap();

    let corpus = engine::FsCorpus::from_manifest(dir.path().join("docs.txt"));
    let index = build_index(&corpus, &noise()).unwrap();

    assert_eq!(
        index.postings("tiger").to_vec(),
        vec![Occurrence::new("a.txt", 2), Occurrence::new("b.txt", 1)]
    );
    assert_eq!(
        top_docs(&index, "tiger", "bright", RESULT_LIMIT),
        vec!["a.txt", "b.txt"]
    );
}

#[test]
fn it_keeps_duplicate_manifest_entries_as_separate_merges() {
    let corpus = MemCorpus::new()
        .with_doc("twice.txt", "echo echo")
        .with_doc("twice.txt", "echo echo");
    let index = build_index(&corpus, &NoiseWords::default()).unwrap();

    assert_eq!(index.doc_count(), 2);
    assert_eq!(
        index.postings("echo").to_vec(),
        vec![Occurrence::new("twice.txt", 2), Occurrence::new("twice.txt", 2)]
    );
    // The query still reports the document once.
    assert_eq!(
        top_docs(&index, "echo", "echo", RESULT_LIMIT),
        vec!["twice.txt"]
    );
}
