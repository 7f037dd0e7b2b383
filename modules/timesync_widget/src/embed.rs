// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use url::Url;

use crate::{config::WidgetConfig, Result};

pub const DEFAULT_ORIGIN: &str = "https://timesync.app";

const IFRAME_STYLE: &str = "border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.1);";
const RESPONSIVE_MAX_WIDTH: u32 = 1200;

/// Build the `/embed` URL that reproduces `config` when parsed back.
///
/// City names are spelled with `+` for spaces. `showTimeDiff` and `time` are
/// only written when set.
pub fn embed_url(origin: &str, config: &WidgetConfig) -> Result<Url> {
    let mut url = Url::parse(origin)?.join("/embed")?;
    let cities = config
        .cities
        .iter()
        .map(|place| url_label(&place.label))
        .collect::<Vec<_>>()
        .join(",");

    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("cities", &cities)
            .append_pair("theme", config.theme.as_str())
            .append_pair("size", config.size.as_str())
            .append_pair("layout", config.layout.as_str())
            .append_pair("showDate", bool_str(config.show_date))
            .append_pair("showSeconds", bool_str(config.show_seconds))
            .append_pair("use24Hour", bool_str(config.use_24_hour));

        if let Some(reference) = &config.reference {
            query.append_pair("ref", &url_label(&reference.label));
        }
        if config.show_time_diff {
            query.append_pair("showTimeDiff", "true");
        }
        if let Some(time) = &config.time {
            query.append_pair("time", &time.to_rfc3339());
        }
    }
    Ok(url)
}

/// Copy-paste HTML for embedding the widget in a page.
pub fn iframe_snippet(origin: &str, config: &WidgetConfig) -> Result<String> {
    let url = embed_url(origin, config)?;
    let height = config.size.height();
    let html = match config.size.width() {
        None => format!(
            r#"<!-- TimeSync Responsive Widget -->
<div style="width: 100%; max-width: {RESPONSIVE_MAX_WIDTH}px; margin: 0 auto;">
  <iframe
    src="{url}"
    width="100%"
    height="{height}"
    frameborder="0"
    style="{IFRAME_STYLE} width: 100%; display: block;"
    title="TimeSync World Clock Widget"
    allow="autoplay"
    loading="lazy">
  </iframe>
</div>"#
        ),
        Some(width) => format!(
            r#"<!-- TimeSync Widget -->
<div style="width: 100%; max-width: {width}px; margin: 0 auto;">
  <iframe
    src="{url}"
    width="100%"
    height="{height}"
    frameborder="0"
    style="{IFRAME_STYLE} width: 100%; max-width: {width}px; display: block;"
    title="TimeSync World Clock Widget"
    allow="autoplay"
    loading="lazy">
  </iframe>
</div>"#
        ),
    };
    Ok(html)
}

fn url_label(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join("+")
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url_shape() {
        let config =
            WidgetConfig::from_query("cities=New+York,Tokyo&ref=London&showTimeDiff=true")
                .unwrap();
        let url = embed_url(DEFAULT_ORIGIN, &config).unwrap();
        assert_eq!(url.path(), "/embed");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("cities".into(), "New+York,Tokyo".into()));
        assert!(pairs.contains(&("ref".into(), "London".into())));
        assert!(pairs.contains(&("showTimeDiff".into(), "true".into())));
        assert!(!pairs.iter().any(|(key, _)| key == "time"));
    }

    #[test]
    fn test_reference_kept_without_difference() {
        let config = WidgetConfig::from_query("cities=Tokyo&ref=Hong+Kong").unwrap();
        let url = embed_url(DEFAULT_ORIGIN, &config).unwrap();
        assert!(url.query_pairs().any(|(key, value)| key == "ref" && value == "Hong+Kong"));
        assert!(!url.query_pairs().any(|(key, _)| key == "showTimeDiff"));
    }

    #[test]
    fn test_origin_path_is_replaced() {
        let config = WidgetConfig::from_query("cities=Paris").unwrap();
        let url = embed_url("http://localhost:5173/some/page", &config).unwrap();
        assert!(url.as_str().starts_with("http://localhost:5173/embed?cities=Paris"));
        assert!(embed_url("localhost", &config).is_err());
    }

    #[test]
    fn test_iframe_snippet_fixed_size() {
        let config = WidgetConfig::from_query("cities=Paris&size=large").unwrap();
        let html = iframe_snippet(DEFAULT_ORIGIN, &config).unwrap();
        assert!(html.starts_with("<!-- TimeSync Widget -->"));
        assert!(html.contains("max-width: 720px; margin: 0 auto;"));
        assert!(html.contains(r#"height="380""#));
        assert!(html.contains(r#"title="TimeSync World Clock Widget""#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn test_iframe_snippet_responsive() {
        let config = WidgetConfig::from_query("cities=Paris&size=full").unwrap();
        let html = iframe_snippet(DEFAULT_ORIGIN, &config).unwrap();
        assert!(html.starts_with("<!-- TimeSync Responsive Widget -->"));
        assert!(html.contains("max-width: 1200px"));
        assert!(html.contains(r#"height="220""#));
    }
}
