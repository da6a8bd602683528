use rs_htmlinfo::{HtmlInfo, Options};

const PAGE_URL: &str = "https://example.com/blog/post";

fn offline() -> Options {
    Options {
        allow_oembed_fetching: false,
        allow_main_content_extraction: false,
        ..Options::default()
    }
}

fn parse(html: &str, page_url: Option<&str>) -> HtmlInfo {
    let mut info = HtmlInfo::with_options(offline());
    info.parse_document(html.as_bytes(), page_url, None)
        .expect("parse failed");
    info
}

#[test]
fn head_metadata_is_extracted() {
    let html = r#"<html><head>
        <title>Post Title</title>
        <meta name="description" content="What the post is about">
        <meta name="author" content="Jane Doe">
        <link rel="canonical" href="/blog/post">
    </head><body></body></html>"#;

    let info = parse(html, Some(PAGE_URL));

    assert_eq!(info.title, "Post Title");
    assert_eq!(info.description, "What the post is about");
    assert_eq!(info.author_name, "Jane Doe");
    assert_eq!(info.canonical_url, "https://example.com/blog/post");
}

#[test]
fn shortcut_icon_with_two_sizes() {
    let html = r#"<html><head>
        <link rel="shortcut icon" sizes="16x16 32x32" href="/fav.ico">
    </head></html>"#;

    let info = parse(html, Some(PAGE_URL));

    assert_eq!(info.favicon_url, "https://example.com/fav.ico");
    assert_eq!(info.touch_icons.len(), 2);
    for icon in &info.touch_icons {
        assert_eq!(icon.url, "https://example.com/fav.ico");
        assert_eq!(icon.rel_type, "icon");
        assert!(!icon.is_scalable);
    }
    assert_eq!(info.touch_icons[0].width, 16);
    assert_eq!(info.touch_icons[1].height, 32);
}

#[test]
fn touch_icon_first_dimension_is_height() {
    let html = r#"<html><head>
        <link rel="apple-touch-icon" sizes="120x180" href="/touch.png">
    </head></html>"#;

    let info = parse(html, Some(PAGE_URL));

    assert_eq!(info.favicon_url, "");
    assert_eq!(info.touch_icons.len(), 1);
    let icon = &info.touch_icons[0];
    assert_eq!(icon.rel_type, "apple-touch-icon");
    assert_eq!(icon.height, 120);
    assert_eq!(icon.width, 180);
}

#[test]
fn scalable_icon() {
    let html = r#"<html><head>
        <link rel="icon" sizes="any" href="/icon.svg">
    </head></html>"#;

    let info = parse(html, Some(PAGE_URL));

    assert_eq!(info.touch_icons.len(), 1);
    assert!(info.touch_icons[0].is_scalable);
    assert_eq!(info.touch_icons[0].width, 0);
    assert_eq!(info.touch_icons[0].height, 0);
}

#[test]
fn icon_without_sizes_yields_zero_dimensions() {
    let html = r#"<html><head><link rel="icon" href="/favicon.png"></head></html>"#;

    let info = parse(html, Some(PAGE_URL));

    assert_eq!(info.touch_icons.len(), 1);
    assert_eq!(info.touch_icons[0].width, 0);
    assert_eq!(info.touch_icons[0].height, 0);
    assert!(!info.touch_icons[0].is_scalable);
}

#[test]
fn oembed_link_resolved_without_network() {
    let html = r#"<html><head>
        <link rel="alternate" type="application/json+oembed" href="/oembed?url=x">
    </head></html>"#;

    let mut info = HtmlInfo::with_options(offline());
    info.parse_document(html.as_bytes(), Some("https://example.com/p"), None)
        .expect("parse failed");

    assert_eq!(info.oembed_json_url, "https://example.com/oembed?url=x");
    assert!(info.oembed.is_none());
}

#[tokio::test]
async fn parse_with_fetching_disabled_makes_no_request() {
    let html = r#"<html><head>
        <link rel="alternate" type="application/json+oembed" href="http://127.0.0.1:9/oembed">
    </head></html>"#;

    let mut info = HtmlInfo::with_options(offline());
    let result = info.parse(html.as_bytes(), Some(PAGE_URL), None).await;

    assert!(result.is_ok());
    assert_eq!(info.oembed_json_url, "http://127.0.0.1:9/oembed");
    assert!(info.oembed.is_none());
}

#[tokio::test]
async fn parse_without_page_url_keeps_links_relative() {
    let html = r#"<html><head>
        <link rel="canonical" href="/x">
        <link rel="alternate" type="application/json+oembed" href="/oembed.json">
    </head></html>"#;

    let mut info = HtmlInfo::new();
    let result = info.parse(html.as_bytes(), None, None).await;

    assert!(result.is_ok());
    assert_eq!(info.canonical_url, "/x");
    assert_eq!(info.oembed_json_url, "/oembed.json");
    assert!(info.oembed.is_none());
}

#[test]
fn opengraph_properties_are_collected() {
    let html = r#"<html><head>
        <meta property="og:title" content="OG Title">
        <meta property="og:site_name" content="Example">
        <meta property="og:image" content="https://example.com/og.jpg">
        <meta property="og:image:width" content="800">
        <meta property="og:image:height" content="600">
        <meta property="article:author" content="https://example.com/jane">
    </head></html>"#;

    let info = parse(html, Some(PAGE_URL));
    let og = &info.opengraph;

    assert_eq!(og.title, "OG Title");
    assert_eq!(og.site_name, "Example");
    let image = og.first_image().expect("no image");
    assert_eq!(image.url, "https://example.com/og.jpg");
    assert_eq!(image.width, 800);
    assert_eq!(image.height, 600);
    let article = og.article.as_ref().expect("no article");
    assert_eq!(article.authors, vec!["https://example.com/jane".to_string()]);
}

#[test]
fn malformed_markup_is_tolerated() {
    let html = r#"<html><head><title>Broken<link rel="icon" href=></head><body><p>text<div>more"#;
    let mut info = HtmlInfo::with_options(offline());
    assert!(info
        .parse_document(html.as_bytes(), Some(PAGE_URL), None)
        .is_ok());
}

#[test]
fn octet_stream_content_type_is_parsed() {
    let html = b"<html><head><title>Hi</title></head><body></body></html>";
    let mut info = HtmlInfo::with_options(offline());
    info.parse_document(&html[..], Some(PAGE_URL), Some("application/octet-stream"))
        .expect("parse failed");
    assert_eq!(info.title, "Hi");
}

#[test]
fn undeclared_latin1_is_decoded() {
    let html = b"<html><head><title>Caf\xE9 cr\xE8me</title></head></html>";
    let mut info = HtmlInfo::with_options(offline());
    info.parse_document(&html[..], None, None)
        .expect("parse failed");
    assert_eq!(info.title, "Café crème");
}

#[test]
fn charset_from_content_type_is_used() {
    let html = b"<html><head><title>Caf\xE9</title></head></html>";
    let mut info = HtmlInfo::with_options(offline());
    info.parse_document(&html[..], None, Some("text/html; charset=ISO-8859-1"))
        .expect("parse failed");
    assert_eq!(info.title, "Café");
}

#[test]
fn meta_charset_is_used() {
    let html = b"<html><head><meta charset=\"windows-1252\"><title>\x93Quoted\x94</title></head></html>";
    let mut info = HtmlInfo::with_options(offline());
    info.parse_document(&html[..], None, None)
        .expect("parse failed");
    assert_eq!(info.title, "\u{201c}Quoted\u{201d}");
}

#[test]
fn serialized_field_names() {
    let info = parse("<html><head><title>T</title></head></html>", Some(PAGE_URL));
    let value: serde_json::Value =
        serde_json::from_str(&info.to_json().expect("serialize failed")).expect("invalid json");
    let object = value.as_object().expect("not an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = vec![
        "title",
        "description",
        "author_name",
        "canonical_url",
        "oembed_json_url",
        "oembed_xml_url",
        "favicon_url",
        "touch_icons",
        "image_src_url",
        "main_content",
        "opengraph",
        "oembed",
    ];
    expected.sort_unstable();

    assert_eq!(keys, expected);
    assert_eq!(object["title"], "T");
}

#[test]
fn touch_icon_serializes_rel_as_type() {
    let html = r#"<html><head><link rel="icon" sizes="16x16" href="/f.ico"></head></html>"#;
    let info = parse(html, Some(PAGE_URL));
    let value: serde_json::Value =
        serde_json::from_str(&info.to_json().expect("serialize failed")).expect("invalid json");
    let icon = &value["touch_icons"][0];

    assert_eq!(icon["type"], "icon");
    assert_eq!(icon["url"], "https://example.com/f.ico");
    assert_eq!(icon["is_scalable"], false);
}

#[cfg(feature = "readability")]
#[test]
fn main_content_is_extracted() {
    let body = "<p>This paragraph has enough words to be considered part of the main content of \
                the article, which the readability pass should keep around.</p>"
        .repeat(6);
    let html = format!(
        "<html><head><title>Article</title></head><body>\
         <nav><a href=\"/\">Home</a></nav>\
         <article><h1>Article</h1>{body}<img src=\"/figure.png\" class=\"wide\"></article>\
         </body></html>"
    );

    let mut info = HtmlInfo::with_options(Options {
        allow_oembed_fetching: false,
        ..Options::default()
    });
    info.parse_document(html.as_bytes(), Some(PAGE_URL), None)
        .expect("parse failed");

    assert!(info.main_content.contains("enough words"));
    assert!(!info.main_content.contains("class="));
}

#[cfg(feature = "readability")]
#[test]
fn main_content_as_text() {
    let body = "<p>Plain text paragraphs are kept without any markup when tags are not requested \
                by the caller of the parser.</p>"
        .repeat(6);
    let html = format!("<html><head></head><body><article>{body}</article></body></html>");

    let mut info = HtmlInfo::with_options(Options {
        allow_oembed_fetching: false,
        leave_main_content_tags: false,
        ..Options::default()
    });
    info.parse_document(html.as_bytes(), Some(PAGE_URL), None)
        .expect("parse failed");

    assert!(info.main_content.contains("Plain text paragraphs"));
    assert!(!info.main_content.contains('<'));
}
