use renskrift::application::ports::LanguageDetector;
use renskrift::infrastructure::language::WhatlangDetector;

#[tokio::test]
async fn given_english_text_when_detecting_then_returns_english_code() {
    let detector = WhatlangDetector;

    let tag = detector
        .detect("The quick brown fox jumps over the lazy dog and keeps running through the quiet forest.")
        .await
        .unwrap();

    assert_eq!(tag.as_str(), "eng");
}

#[tokio::test]
async fn given_french_text_when_detecting_then_returns_french_code() {
    let detector = WhatlangDetector;

    let tag = detector
        .detect("Bonjour tout le monde, il fait très beau aujourd'hui et les oiseaux chantent dans les arbres.")
        .await
        .unwrap();

    assert_eq!(tag.as_str(), "fra");
}

#[tokio::test]
async fn given_text_without_letters_when_detecting_then_fails() {
    let detector = WhatlangDetector;

    let result = detector.detect("12345 67890 --- !!!").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn given_empty_text_when_detecting_then_fails() {
    let detector = WhatlangDetector;

    let result = detector.detect("").await;

    assert!(result.is_err());
}
