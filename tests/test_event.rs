use std::fs;

use crisis_site::event::media::{find_local_file, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use crisis_site::event::resolver::external_search;
use crisis_site::event::topics::{canonical_topic, normalize, topic_page};
use crisis_site::event::{ContentType, Destination, EventQuery, EventResolver, Topic};
use crisis_site::http::router::RouteOutcome;
use tempfile::TempDir;
use url::Url;

fn site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for folder in ["html", "imgs", "videos"] {
        fs::create_dir(dir.path().join(folder)).unwrap();
    }
    dir
}

fn resolver(dir: &TempDir) -> EventResolver {
    EventResolver::new(dir.path(), Url::parse("http://localhost:5012").unwrap())
}

async fn redirect(resolver: &EventResolver, keyword: &str, content_type: ContentType) -> String {
    match resolver.resolve(&EventQuery::new(keyword, content_type)).await.unwrap() {
        RouteOutcome::Redirect(location) => location,
        other => panic!("expected a redirect, got {:?}", other),
    }
}

#[test]
fn test_content_type_from_param() {
    assert_eq!(ContentType::from_param("text"), ContentType::Text);
    assert_eq!(ContentType::from_param("Image"), ContentType::Image);
    assert_eq!(ContentType::from_param("VIDEO"), ContentType::Video);
    assert_eq!(ContentType::from_param("audio"), ContentType::Other);
    assert_eq!(ContentType::from_param(""), ContentType::Other);
}

#[test]
fn test_content_type_is_not_trimmed() {
    assert_eq!(ContentType::from_param(" image"), ContentType::Other);
    assert_eq!(ContentType::from_param("video "), ContentType::Other);
}

#[test]
fn test_keyword_aliases() {
    assert_eq!(canonical_topic("famine"), Some(Topic::Famine));
    assert_eq!(canonical_topic(" FAMINE "), Some(Topic::Famine));
    assert_eq!(canonical_topic("مجاعة"), Some(Topic::Famine));
    assert_eq!(canonical_topic("Displacement"), Some(Topic::Displacement));
    assert_eq!(canonical_topic("نزوح"), Some(Topic::Displacement));
    assert_eq!(canonical_topic("flood"), None);
    assert_eq!(canonical_topic(""), None);
}

#[test]
fn test_normalize() {
    assert_eq!(normalize("  Famine\t"), "famine");
}

#[test]
fn test_topic_pages_follow_alias_language() {
    assert_eq!(topic_page("famine"), Some("html/famine_crisis.html"));
    assert_eq!(topic_page("مجاعة"), Some("html/famine_crisis_ar.html"));
    assert_eq!(topic_page("DISPLACEMENT"), Some("html/event_displacement_en.html"));
    assert_eq!(topic_page("نزوح"), Some("html/event_displacement_ar.html"));
    assert_eq!(topic_page("drought"), None);
}

#[test]
fn test_external_search_urls() {
    let q = |kw: &str, ct| EventQuery::new(kw, ct);

    assert_eq!(
        external_search(&q("food crisis", ContentType::Text)),
        "https://www.aljazeera.com/search/food%20crisis"
    );
    assert_eq!(
        external_search(&q("food crisis", ContentType::Image)),
        "https://www.google.com/search?q=food+crisis&udm=2"
    );
    assert_eq!(
        external_search(&q("food crisis", ContentType::Video)),
        "https://www.youtube.com/results?search_query=food+crisis"
    );
    assert_eq!(
        external_search(&q("food crisis", ContentType::Other)),
        "https://www.google.com/search?q=food+crisis"
    );
}

#[tokio::test]
async fn test_find_local_file_single_match() {
    let dir = site();
    fs::write(dir.path().join("imgs/Famine_Photo.JPG"), b"x").unwrap();
    fs::write(dir.path().join("imgs/displacement.txt"), b"x").unwrap();

    let found = find_local_file(dir.path(), "imgs", "famine", IMAGE_EXTENSIONS)
        .await
        .unwrap();
    assert_eq!(found.as_deref(), Some("imgs/Famine_Photo.JPG"));

    let none = find_local_file(dir.path(), "imgs", "displacement", IMAGE_EXTENSIONS)
        .await
        .unwrap();
    assert_eq!(none, None);
}

#[tokio::test]
async fn test_find_local_file_arabic_keyword() {
    let dir = site();
    fs::write(dir.path().join("videos/displacement_camp.mp4"), b"x").unwrap();

    let found = find_local_file(dir.path(), "videos", "نزوح", VIDEO_EXTENSIONS)
        .await
        .unwrap();
    assert_eq!(found.as_deref(), Some("videos/displacement_camp.mp4"));
}

#[tokio::test]
async fn test_find_local_file_unmapped_keyword() {
    let dir = site();
    fs::write(dir.path().join("imgs/flood.png"), b"x").unwrap();

    let found = find_local_file(dir.path(), "imgs", "flood", IMAGE_EXTENSIONS)
        .await
        .unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn test_find_local_file_missing_folder() {
    let dir = tempfile::tempdir().unwrap();

    let found = find_local_file(dir.path(), "imgs", "famine", IMAGE_EXTENSIONS)
        .await
        .unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn test_text_event_local_page() {
    let dir = site();
    fs::write(dir.path().join("html/famine_crisis.html"), "<p>famine</p>").unwrap();
    let resolver = resolver(&dir);

    assert_eq!(
        redirect(&resolver, "famine", ContentType::Text).await,
        "http://localhost:5012/html/famine_crisis.html"
    );
}

#[tokio::test]
async fn test_text_event_normalization() {
    let dir = site();
    fs::write(dir.path().join("html/famine_crisis.html"), "<p>famine</p>").unwrap();
    let resolver = resolver(&dir);

    let plain = redirect(&resolver, "famine", ContentType::Text).await;
    assert_eq!(redirect(&resolver, " Famine ", ContentType::Text).await, plain);
    assert_eq!(redirect(&resolver, "FAMINE", ContentType::Text).await, plain);
}

#[tokio::test]
async fn test_text_event_missing_page_goes_external() {
    let dir = site();
    let resolver = resolver(&dir);

    assert_eq!(
        redirect(&resolver, "نزوح", ContentType::Text).await,
        "https://www.aljazeera.com/search/نزوح"
    );
}

#[tokio::test]
async fn test_image_event_local_file() {
    let dir = site();
    fs::write(dir.path().join("imgs/famine_photo.jpg"), b"jpg").unwrap();
    let resolver = resolver(&dir);

    assert_eq!(
        redirect(&resolver, "famine", ContentType::Image).await,
        "http://localhost:5012/imgs/famine_photo.jpg"
    );
}

#[tokio::test]
async fn test_image_event_empty_folder_goes_external() {
    let dir = site();
    let resolver = resolver(&dir);

    let location = redirect(&resolver, "famine", ContentType::Image).await;
    assert!(location.starts_with("https://www.google.com/search?q="));
    assert!(location.contains("famine"));
}

#[tokio::test]
async fn test_image_event_wrong_topic_goes_external() {
    let dir = site();
    fs::write(dir.path().join("imgs/famine_photo.jpg"), b"jpg").unwrap();
    fs::write(dir.path().join("imgs/displacement_notes.txt"), b"txt").unwrap();
    let resolver = resolver(&dir);

    let location = redirect(&resolver, "displacement", ContentType::Image).await;
    assert_eq!(location, "https://www.google.com/search?q=displacement&udm=2");
}

#[tokio::test]
async fn test_video_event() {
    let dir = site();
    fs::write(dir.path().join("videos/famine_report.mp4"), b"mp4").unwrap();
    let resolver = resolver(&dir);

    assert_eq!(
        redirect(&resolver, "مجاعة", ContentType::Video).await,
        "http://localhost:5012/videos/famine_report.mp4"
    );
    assert_eq!(
        redirect(&resolver, "displacement", ContentType::Video).await,
        "https://www.youtube.com/results?search_query=displacement"
    );
}

#[tokio::test]
async fn test_other_type_ignores_local_content() {
    let dir = site();
    fs::write(dir.path().join("imgs/famine_photo.jpg"), b"jpg").unwrap();
    let resolver = resolver(&dir);

    assert_eq!(
        redirect(&resolver, "famine", ContentType::Other).await,
        "https://www.google.com/search?q=famine"
    );
}

#[tokio::test]
async fn test_local_file_name_is_url_encoded() {
    let dir = site();
    fs::write(dir.path().join("imgs/famine camp.png"), b"png").unwrap();
    let resolver = resolver(&dir);

    let destination = resolver
        .destination(&EventQuery::new("famine", ContentType::Image))
        .await
        .unwrap();
    assert_eq!(destination, Destination::Local("imgs/famine camp.png".to_string()));
    assert_eq!(
        resolver.location(&destination).unwrap(),
        "http://localhost:5012/imgs/famine%20camp.png"
    );
}

#[tokio::test]
async fn test_resolution_is_idempotent() {
    let dir = site();
    fs::write(dir.path().join("videos/displacement.mp4"), b"mp4").unwrap();
    let resolver = resolver(&dir);
    let query = EventQuery::new("displacement", ContentType::Video);

    let first = resolver.resolve(&query).await.unwrap();
    let second = resolver.resolve(&query).await.unwrap();
    assert_eq!(first, second);
}
