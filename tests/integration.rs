use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn roko_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("roko");
    path
}

const LIBRARY: &str = r#"{
  "gita_verses": [
    {
      "id": "bg-3-19", "chapter": 3, "verse": 19,
      "sanskrit": "tasmad asaktah", "transliteration": "tasmād asaktaḥ",
      "translation_en": "Therefore, without attachment, perform the work that has to be done.",
      "translation_hi": "इसलिए आसक्ति रहित होकर कर्म करो।"
    },
    {
      "id": "bg-2-47", "chapter": 2, "verse": 47,
      "sanskrit": "karmany evadhikaras te", "transliteration": "karmaṇy evādhikāras te",
      "translation_en": "You have a right to perform your prescribed duty, but not to the fruits of action.",
      "translation_hi": "कर्म करने में ही तुम्हारा अधिकार है।",
      "commentary": "Let go of attachment to outcomes."
    },
    {
      "id": "bg-2-14", "chapter": 2, "verse": 14,
      "sanskrit": "matra-sparsas tu", "transliteration": "mātrā-sparśhās tu",
      "translation_en": "Heat and cold, pleasure and pain, come and go. Endure them.",
      "translation_hi": "सुख-दुःख आते जाते हैं।"
    }
  ],
  "bible_verses": [
    { "id": "jhn-3-16", "book": "John", "chapter": 3, "verse": 16,
      "text": "For God so loved the world", "testament": "New" },
    { "id": "psa-23-1", "book": "Psalm", "chapter": 23, "verse": 1,
      "text": "The Lord is my shepherd; I shall not want.", "testament": "Old" },
    { "id": "1co-13-4", "book": "1 Corinthians", "chapter": 13, "verse": 4,
      "text": "Love is patient, love is kind.", "testament": "New" }
  ],
  "quran_ayahs": [
    { "id": 160, "surah_no": 2, "surah_name_en": "The Cow", "surah_name_roman": "Al-Baqarah",
      "ayah_no_surah": 153, "ayah_ar": "",
      "ayah_en": "Seek help through patience and prayer." }
  ],
  "quiz_questions": [
    { "id": "q1", "religion": "gita", "question": "Who teaches Arjuna?",
      "option_a": "Bhishma", "option_b": "Krishna", "option_c": "Drona", "option_d": "Karna",
      "correct_answer": "B", "explanation": "Krishna guides Arjuna.", "difficulty": "easy" },
    { "id": "q2", "religion": "gita", "question": "How many chapters?",
      "option_a": "12", "option_b": "16", "option_c": "18", "option_d": "24",
      "correct_answer": "C", "difficulty": "easy" },
    { "id": "q3", "religion": "gita", "question": "Chapter 3 is the yoga of?",
      "option_a": "Action", "option_b": "Devotion", "option_c": "Knowledge", "option_d": "Meditation",
      "correct_answer": "A", "difficulty": "medium" },
    { "id": "q4", "religion": "gita", "question": "Where is the Gita spoken?",
      "option_a": "Ayodhya", "option_b": "Dwarka", "option_c": "Mathura", "option_d": "Kurukshetra",
      "correct_answer": "D", "difficulty": "easy" },
    { "id": "q5", "religion": "gita", "question": "2:47 grants a right to?",
      "option_a": "Fruits", "option_b": "Duty", "option_c": "Rest", "option_d": "Victory",
      "correct_answer": "B", "difficulty": "hard" }
  ],
  "daily_verses": [
    { "date": "2025-01-01", "verse_type": "gita", "verse_id": "bg-2-47" }
  ]
}"#;

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();

    fs::write(data_dir.join("library.json"), LIBRARY).unwrap();

    let config_content = format!(
        r#"[library]
path = "{}/data/library.json"

[server]
bind = "127.0.0.1:7341"

[logging]
filter = "warn"
"#,
        root.display()
    );

    let config_path = config_dir.join("roko.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_roko(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    run_roko_with_input(config_path, args, "")
}

fn run_roko_with_input(config_path: &Path, args: &[&str], input: &str) -> (String, String, bool) {
    let binary = roko_binary();
    let mut child = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to run roko binary at {:?}: {}", binary, e));

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

// ============ Text pipeline (no library needed) ============

#[test]
fn test_ask_reference_moral() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, stderr, success) = run_roko(&config_path, &["ask", "Give moral from Gita 2:47"]);
    assert!(success, "ask failed: {}", stderr);
    assert_eq!(
        stdout.trim_end(),
        "Gita 2:47\n\nMoral: Effort is your responsibility; outcome is not always in your control."
    );
}

#[test]
fn test_ask_json_reports_kind_and_mode() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko(&config_path, &["ask", "--json", "Explain karma yoga"]);
    assert!(success);
    let reply: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(reply["kind"], "concept");
    assert_eq!(reply["mode"], "full");
    assert!(reply["text"].as_str().unwrap().starts_with("Karma Yoga"));
}

#[test]
fn test_ask_works_without_config() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");
    let (stdout, stderr, success) = run_roko(&missing, &["ask", "hello"]);
    assert!(success, "ask without config failed: {}", stderr);
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_sentiment_text_and_json() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko(&config_path, &["sentiment", "I am so happy today!"]);
    assert!(success);
    assert_eq!(stdout.trim(), "positive (score: 1.00, confidence: 1.00)");

    let (stdout, _, success) =
        run_roko(&config_path, &["sentiment", "--json", "I am not happy"]);
    assert!(success);
    let score: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(score["sentiment"], "negative");
    assert_eq!(score["score"], -1.0);

    let (stdout, _, success) = run_roko(&config_path, &["sentiment", "I feel sad and lonely."]);
    assert!(success);
    assert_eq!(stdout.trim(), "neutral (score: 0.00, confidence: 0.00)");
}

#[test]
fn test_intent_and_parse_ref() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko(&config_path, &["intent", "play relaxing music"]);
    assert!(success);
    assert!(stdout.contains("intent: music"));
    assert!(stdout.contains("Playing relaxing music for you. Enjoy!"));

    let (stdout, _, success) = run_roko(&config_path, &["parse-ref", "James 1:5"]);
    assert!(success);
    assert_eq!(stdout.trim(), "Bible James 1:5");

    let (stdout, _, success) = run_roko(&config_path, &["parse-ref", "nothing to see"]);
    assert!(success);
    assert_eq!(stdout.trim(), "No reference found.");
}

#[test]
fn test_converse_requires_wake_word() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko_with_input(
        &config_path,
        &["converse"],
        "play music\nhey roko\nplay relaxing music\n",
    );
    assert!(success);
    let replies: Vec<&str> = stdout.lines().filter(|l| l.starts_with("Roko: ")).collect();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[1], "Roko: Playing relaxing music for you. Enjoy!");
}

// ============ Library commands ============

#[test]
fn test_verse_get() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, stderr, success) = run_roko(&config_path, &["verse", "get", "2", "47"]);
    assert!(success, "verse get failed: {}", stderr);
    assert!(stdout.starts_with("Bhagavad Gita 2:47"));
    assert!(stdout.contains("English:    You have a right to perform your prescribed duty"));
    assert!(stdout.contains("Commentary: Let go of attachment to outcomes."));
}

#[test]
fn test_verse_get_rejects_bad_chapter() {
    let (_tmp, config_path) = setup_test_env();
    let (_, stderr, success) = run_roko(&config_path, &["verse", "get", "19", "1"]);
    assert!(!success);
    assert!(stderr.contains("Chapter must be 1-18"), "stderr: {}", stderr);
}

#[test]
fn test_verse_get_missing_sloka() {
    let (_tmp, config_path) = setup_test_env();
    let (_, stderr, success) = run_roko(&config_path, &["verse", "get", "4", "7"]);
    assert!(!success);
    assert!(stderr.contains("Sloka not found for Chapter 4, Verse 7"));
}

#[test]
fn test_verse_chapter_sorted() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko(&config_path, &["verse", "chapter", "2"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Chapter 2 (2 verses)");
    assert!(lines[1].contains("2.14"));
    assert!(lines[2].contains("2.47"));
}

#[test]
fn test_verse_all_with_limit() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko(&config_path, &["verse", "all", "--limit", "2"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_verse_search() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko(&config_path, &["verse", "search", "attachment"]);
    assert!(success);
    assert!(stdout.starts_with("2 result(s) for \"attachment\":"));

    let (stdout, _, success) = run_roko(&config_path, &["verse", "search", "zebra"]);
    assert!(success);
    assert_eq!(stdout.trim(), "No results.");

    let (_, stderr, success) = run_roko(&config_path, &["verse", "search", "a"]);
    assert!(!success);
    assert!(stderr.contains("at least 2 characters"));
}

#[test]
fn test_verse_bible_normalizes_book() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, stderr, success) =
        run_roko(&config_path, &["verse", "bible", "1 corinthians", "13", "4"]);
    assert!(success, "verse bible failed: {}", stderr);
    assert!(stdout.starts_with("1 Corinthians 13:4 (New Testament)"));
    assert!(stdout.contains("Love is patient"));
}

#[test]
fn test_verse_quran() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko(&config_path, &["verse", "quran", "2", "153"]);
    assert!(success);
    assert!(stdout.starts_with("Quran 2:153 (Al-Baqarah, The Cow)"));

    let (_, stderr, success) = run_roko(&config_path, &["verse", "quran", "2", "154"]);
    assert!(!success);
    assert!(stderr.contains("Verse not found: Quran 2:154"));
}

#[test]
fn test_verse_quran_search() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko(&config_path, &["verse", "quran-search", "PATIENCE"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("2:153"));

    let (stdout, _, success) =
        run_roko(&config_path, &["verse", "quran-search", "--surah", "3"]);
    assert!(success);
    assert_eq!(stdout.trim(), "No results.");
}

#[test]
fn test_library_commands_need_config() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");
    let (_, _, success) = run_roko(&missing, &["verse", "get", "2", "47"]);
    assert!(!success);
}

#[test]
fn test_daily_curated_and_fallback() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko(&config_path, &["daily", "--date", "2025-01-01"]);
    assert!(success);
    assert!(stdout.starts_with("Verse of the day for 2025-01-01"));
    assert!(!stdout.contains("chosen by date"));
    assert!(stdout.contains("Bhagavad Gita 2:47"));

    // Even seed: Bible first; 20240314 % 3 == 1 picks the second Bible verse.
    let (stdout, _, success) = run_roko(&config_path, &["daily", "--date", "2024-03-14"]);
    assert!(success);
    assert!(stdout.contains("chosen by date"));
    assert!(stdout.contains("Psalm 23:1"));
}

#[test]
fn test_quiz_over_stdin() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, stderr, success) = run_roko_with_input(
        &config_path,
        &["quiz", "--religion", "gita", "--count", "5", "--seed", "0"],
        "B\nC\nA\nD\nB\n",
    );
    assert!(success, "quiz failed: {}", stderr);
    assert!(stdout.contains("Question 1 of 5 (score 0)"));
    assert!(stdout.contains("Who teaches Arjuna?"));
    assert!(stdout.contains("Krishna guides Arjuna."));
    assert!(stdout.contains("Quiz Complete! 100%"));
    assert!(stdout.contains("You answered 5 out of 5 questions correctly."));
}

#[test]
fn test_quiz_no_questions() {
    let (_tmp, config_path) = setup_test_env();
    let (stdout, _, success) = run_roko(&config_path, &["quiz", "--religion", "quran"]);
    assert!(success);
    assert!(stdout.contains("No quran questions found"));
}
