//! コマンドラインからサイト全体を動かす統合テスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use clap::Parser;
use foss4gov_site::cli::{
    self,
    Cli,
    CliError,
};
use foss4gov_site::submission::FormError;
use googletest::prelude::*;
use tempfile::TempDir;

const COMPANIES_CSV: &str = "name,english_name,website,info_email,linkedin,github,other_repo\n\
\"Acme, Inc\",\"Acme\",\"https://acme.test\",,,\"https://github.com/acme\",\"\n\
\"X\",,,,,,\n\
Beta Oy,Beta Ltd,https://beta.test,info@beta.test,,,\n";

/// テスト用のサイトを作成する
fn create_site() -> TempDir {
    let site = TempDir::new().unwrap();
    fs::write(site.path().join(".foss4gov.json"), r#"{"repository": "acme/directory"}"#).unwrap();
    fs::write(site.path().join("companies.csv"), COMPANIES_CSV).unwrap();
    fs::create_dir(site.path().join("lang")).unwrap();
    fs::write(
        site.path().join("lang/german.yaml"),
        "app:\n  tagline: Offene Software für Behörden\nnavigation:\n  skip_to_form: Zum Formular\n",
    )
    .unwrap();
    site
}

/// コマンドを実行し、標準出力の内容を返す
async fn run_in(root: &Path, args: &[&str]) -> std::result::Result<String, CliError> {
    let root = root.to_str().unwrap();
    let argv = ["foss4gov", "--root", root].into_iter().chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).unwrap();

    let mut out = Vec::new();
    cli::run(cli, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn render_writes_translated_page() {
    let site = create_site();

    run_in(site.path(), &["render", "--lang", "de"]).await.unwrap();

    let page = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert_that!(page, contains_substring("<html lang=\"de\""));
    assert_that!(page, contains_substring(">Offene Software für Behörden</p>"));
    assert_that!(page, contains_substring(">Zum Formular</a>"));
    assert_that!(page, contains_substring(">Acme, Inc</a></h3>"));
    assert_that!(page, contains_substring(">Beta Oy</a></h3>"));
    assert_that!(page, contains_substring("https://github.com/acme/directory/issues/new"));
    assert_that!(page.matches("<div class=\"card\">").count(), eq(2));
}

#[tokio::test]
async fn render_without_overlays_uses_builtin_text() {
    let site = create_site();

    let page = run_in(site.path(), &["render", "--lang", "de", "--no-overlays", "-o", "-"])
        .await
        .unwrap();

    assert_that!(page, contains_substring(">Skip to submission form</a>"));
    assert_that!(page, not(contains_substring("Offene Software")));
    assert!(!site.path().join("index.html").exists());
}

#[tokio::test]
async fn render_all_writes_one_page_per_language() {
    let site = create_site();

    run_in(site.path(), &["render", "--all", "-o", "out/site.html"]).await.unwrap();

    for code in ["en", "fr", "de", "nl", "es", "it"] {
        let page = fs::read_to_string(site.path().join(format!("out/site.{code}.html"))).unwrap();
        assert_that!(page, contains_substring(format!("<html lang=\"{code}\"")));
    }
}

#[tokio::test]
async fn render_with_missing_csv_shows_sample_data() {
    let site = create_site();
    fs::remove_file(site.path().join("companies.csv")).unwrap();

    let page = run_in(site.path(), &["render", "-o", "-"]).await.unwrap();

    assert_that!(page, contains_substring("Using fallback sample data (CSV fetch failed)"));
    assert_that!(page, contains_substring(">Example Company</a></h3>"));
}

#[tokio::test]
async fn accept_language_picks_initial_language() {
    let site = create_site();

    let text = run_in(site.path(), &["--accept-language", "pt-BR,it;q=0.8", "lookup", "nav.companies"])
        .await
        .unwrap();

    assert_that!(text, eq("Aziende\n"));
}

#[tokio::test]
async fn lookup_prefers_overlay_then_falls_back_to_english() {
    let site = create_site();

    let overlay = run_in(site.path(), &["--lang", "de", "lookup", "app.tagline"]).await.unwrap();
    let fallback =
        run_in(site.path(), &["--lang", "de", "lookup", "form.validation.invalid_email"])
            .await
            .unwrap();

    assert_that!(overlay, eq("Offene Software für Behörden\n"));
    assert_that!(fallback, eq("Please enter a valid email address.\n"));
}

#[tokio::test]
async fn lookup_unknown_key_fails() {
    let site = create_site();

    let result = run_in(site.path(), &["lookup", "nav.nowhere"]).await;

    assert!(matches!(result, Err(CliError::MissingKey(key)) if key == "nav.nowhere"));
}

#[tokio::test]
async fn keys_lists_every_english_key() {
    let site = create_site();

    let text = run_in(site.path(), &["--lang", "nl", "keys"]).await.unwrap();

    assert_that!(text, contains_substring("footer.report_issues\tReport accessibility issues\n"));
    assert_that!(text, contains_substring("nav.companies\tBedrijven\n"));
}

#[tokio::test]
async fn issue_prints_link_for_configured_repository() {
    let site = create_site();

    let text = run_in(
        site.path(),
        &["issue", "--name", "Acme", "--website", "https://acme.test", "--email", "info@acme.test"],
    )
    .await
    .unwrap();

    assert_that!(
        text,
        starts_with("https://github.com/acme/directory/issues/new?title=Add+Acme+to+FOSS4Gov&body=")
    );
    assert_that!(text, contains_substring("Info+email%3A+info%40acme.test"));
}

#[tokio::test]
async fn issue_rejects_invalid_website() {
    let site = create_site();

    let result = run_in(site.path(), &["issue", "--name", "Acme", "--website", "acme.test"]).await;

    assert!(matches!(result, Err(CliError::Form(FormError::InvalidUrl { field: "website", .. }))));
}

#[tokio::test]
async fn csv_row_is_fully_quoted() {
    let site = create_site();

    let text = run_in(
        site.path(),
        &["csv-row", "--name", "Acme, Inc", "--website", "https://acme.test", "--english", "Acme"],
    )
    .await
    .unwrap();

    assert_that!(text, eq("\"Acme, Inc\",\"Acme\",\"https://acme.test\",\"\",\"\",\"\",\"\"\n"));
}

#[tokio::test]
async fn companies_prints_parsed_records() {
    let site = create_site();

    let text = run_in(site.path(), &["companies"]).await.unwrap();
    let companies: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();

    assert_that!(companies.len(), eq(2));
    assert_that!(companies[0]["name"].as_str(), some(eq("Acme, Inc")));
    assert_that!(companies[1]["info_email"].as_str(), some(eq("info@beta.test")));
}

#[tokio::test]
async fn set_language_is_remembered() {
    let site = create_site();

    let text = run_in(site.path(), &["set-language", "nl"]).await.unwrap();
    let languages = run_in(site.path(), &["languages"]).await.unwrap();

    assert_that!(text, eq("Language set to Nederlands\n"));
    assert_that!(languages, contains_substring("* nl\tNederlands\tdutch.yaml\n"));
    assert_that!(languages, contains_substring("  en\tEnglish\tenglish.yaml\n"));
    let saved = fs::read_to_string(site.path().join(".foss4gov-preference.json")).unwrap();
    assert_that!(saved, contains_substring("\"preferredLanguage\": \"nl\""));
}

#[tokio::test]
async fn set_language_rejects_unknown_code() {
    let site = create_site();

    let result = run_in(site.path(), &["set-language", "pt"]).await;

    assert!(matches!(result, Err(CliError::UnsupportedLanguage(code)) if code == "pt"));
}

#[test]
fn invalid_config_is_reported() {
    let site = create_site();
    fs::write(site.path().join(".foss4gov.json"), r#"{"repository": "not a repo"}"#).unwrap();

    let result = tokio_test::block_on(run_in(site.path(), &["languages"]));

    match result {
        Err(CliError::Config(error)) => {
            assert_that!(error.to_string(), contains_substring("repository"));
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }
}
