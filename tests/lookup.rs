use std::{collections::HashMap, num::NonZeroUsize};

use async_trait::async_trait;
use wikilead::{
    configuration::{HttpSettings, LookupSettings, DEFAULT_FALLBACK_MESSAGE},
    domain::QueryOutcome,
    services::{
        build_client, FetchError, PageFetcher, ReqwestFetcher, SearchError, SearchProvider,
        SearchQuery, WikiLookup,
    },
};

const ARTICLE_URL: &str = "https://tr.wikipedia.org/wiki/Mustafa_Kemal_Atat%C3%BCrk";

const ARTICLE: &str = r#"
<!DOCTYPE html>
<html lang="tr">
<head><title>Mustafa Kemal Atatürk - Vikipedi</title></head>
<body>
  <div id="siteNotice"><p>Bağış kampanyası.</p></div>
  <div id="content">
    <h1>Mustafa Kemal Atatürk</h1>
    <div id="bodyContent">
      <div id="mw-content-text">
        <div class="mw-parser-output">
          <p class="mw-empty-elt">
          </p>
          <p><b>Mustafa Kemal Atatürk</b> (1881 - 10 Kasım 1938), Türk asker ve devlet adamı.</p>
          <p>Türkiye Cumhuriyeti'nin kurucusudur</p>
          <p>İlk cumhurbaşkanıdır. Soyadı Kanunu ile Atatürk soyadını almıştır.</p>
        </div>
      </div>
    </div>
  </div>
</body>
</html>
"#;

struct StaticSearch(Vec<String>);

#[async_trait]
impl SearchProvider for StaticSearch {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<String>, SearchError> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

struct StaticPages(HashMap<&'static str, &'static str>);

#[async_trait]
impl PageFetcher for StaticPages {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.0
            .get(url)
            .map(|page| page.to_string())
            .ok_or(FetchError::Status {
                url: url.to_string(),
                status: 503,
            })
    }
}

fn wiki_lookup(links: Vec<&'static str>, min_sentences: usize) -> WikiLookup {
    WikiLookup::new(
        LookupSettings {
            min_sentences: NonZeroUsize::new(min_sentences).unwrap(),
            ..LookupSettings::default()
        },
        Box::new(StaticSearch(links.into_iter().map(String::from).collect())),
        Box::new(StaticPages(HashMap::from([(ARTICLE_URL, ARTICLE)]))),
    )
}

#[tokio::test]
async fn no_matching_result_gives_fallback_without_url() {
    let lookup = wiki_lookup(
        vec![
            "https://en.wikipedia.org/wiki/Mustafa_Kemal_Atat%C3%BCrk",
            "https://www.britannica.com/biography/Kemal-Ataturk",
        ],
        10,
    );

    let outcome = lookup.run("Atatürk").await;

    assert_eq!(
        outcome,
        QueryOutcome {
            content: DEFAULT_FALLBACK_MESSAGE.to_string(),
            url: None,
        }
    );
}

#[tokio::test]
async fn unreachable_threshold_consumes_every_paragraph() {
    let lookup = wiki_lookup(vec![ARTICLE_URL], 100);

    let outcome = lookup.run("Atatürk").await;

    assert_eq!(
        outcome.content,
        "Mustafa Kemal Atatürk (1881 - 10 Kasım 1938), Türk asker ve devlet adamı.\n\
         Türkiye Cumhuriyeti'nin kurucusudur\n\
         İlk cumhurbaşkanıdır. Soyadı Kanunu ile Atatürk soyadını almıştır.\n"
    );
    assert_eq!(outcome.url.as_deref(), Some(ARTICLE_URL));
}

#[tokio::test]
async fn low_threshold_returns_lead_paragraph_only() {
    let lookup = wiki_lookup(vec![ARTICLE_URL], 2);

    let outcome = lookup.run("Atatürk").await;

    assert_eq!(
        outcome.content,
        "Mustafa Kemal Atatürk (1881 - 10 Kasım 1938), Türk asker ve devlet adamı.\n"
    );
}

#[tokio::test]
async fn fetch_failure_keeps_resolved_url() {
    let lookup = wiki_lookup(vec!["https://tr.wikipedia.org/wiki/Yok"], 10);

    let outcome = lookup.run("Yok").await;

    assert_eq!(outcome.content, DEFAULT_FALLBACK_MESSAGE);
    assert_eq!(
        outcome.url.as_deref(),
        Some("https://tr.wikipedia.org/wiki/Yok")
    );
}

#[tokio::test]
async fn repeated_runs_are_identical() {
    let lookup = wiki_lookup(vec![ARTICLE_URL], 3);

    let first = lookup.run("Atatürk").await;
    let second = lookup.run("Atatürk").await;

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_value(&first).unwrap()["url"],
        serde_json::json!(ARTICLE_URL)
    );
}

#[tokio::test]
async fn http_error_page_falls_back_with_resolved_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/wiki/Yok")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("<div id=\"bodyContent\"><p>Sunucu hatası.</p></div>")
        .expect(1)
        .create_async()
        .await;

    // The matched link only needs to contain the target domain.
    let url = format!("{}/wiki/Yok?host=tr.wikipedia.org", server.url());
    let client = build_client(&HttpSettings::default()).unwrap();
    let lookup = WikiLookup::new(
        LookupSettings::default(),
        Box::new(StaticSearch(vec![url.clone()])),
        Box::new(ReqwestFetcher::new(client)),
    );

    let outcome = lookup.run("Yok").await;

    mock.assert_async().await;
    assert_eq!(
        outcome,
        QueryOutcome {
            content: DEFAULT_FALLBACK_MESSAGE.to_string(),
            url: Some(url),
        }
    );
}
