//! HTML documents carrying frame-protocol meta tags.

use frame_usage_core::FRAME_VERSION;
use frame_usage_render::markup::Element;

/// A frame page: an image, one optional button and the URL clients post
/// button presses to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePage {
    pub title: String,
    pub image_url: String,
    pub post_url: String,
    pub button: Option<String>,
    /// Visible heading for browsers that open the page directly.
    pub heading: Option<String>,
}

fn meta(property: &'static str, content: &str) -> Element {
    Element::new("meta").attr("property", property).attr("content", content)
}

impl FramePage {
    /// Page shown before the first interaction.
    #[must_use]
    pub fn landing(base_url: &str) -> Self {
        Self {
            title: "User Info Frame".to_owned(),
            image_url: format!("{base_url}/landing.png"),
            post_url: format!("{base_url}/action"),
            button: Some("Click to view usage".to_owned()),
            heading: Some("frame-userinfo".to_owned()),
        }
    }

    /// Page returned after an action, pointing at a freshly rendered chart.
    #[must_use]
    pub fn usage(base_url: &str, image_url: String) -> Self {
        Self {
            title: "Protocol Usage".to_owned(),
            image_url,
            post_url: format!("{base_url}/action"),
            button: Some("Reload".to_owned()),
            heading: None,
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(Element::new("title").text(self.title.as_str()))
            .child(meta("og:title", &self.title))
            .child(meta("og:image", &self.image_url))
            .child(meta("fc:frame", FRAME_VERSION))
            .child(meta("fc:frame:image", &self.image_url))
            .child(meta("fc:frame:post_url", &self.post_url));
        if let Some(button) = &self.button {
            head = head.child(meta("fc:frame:button:1", button));
        }
        let body = match &self.heading {
            Some(heading) => Element::new("body").child(Element::new("h1").text(heading.as_str())),
            None => Element::new("body").text(""),
        };
        let html = Element::new("html").attr("lang", "en").child(head).child(body);
        format!("<!DOCTYPE html>{html}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_meta_tags() {
        let html = FramePage::landing("https://frame.example.com").to_html();
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.contains(r#"<meta property="fc:frame" content="vNext"/>"#));
        assert!(html.contains(
            r#"<meta property="fc:frame:image" content="https://frame.example.com/landing.png"/>"#
        ));
        assert!(html.contains(
            r#"<meta property="fc:frame:post_url" content="https://frame.example.com/action"/>"#
        ));
        assert!(
            html.contains(r#"<meta property="fc:frame:button:1" content="Click to view usage"/>"#)
        );
        assert!(html.contains("<h1>frame-userinfo</h1>"));
    }

    #[test]
    fn test_usage_page_escapes_image_url() {
        let page = FramePage::usage(
            "https://f.example",
            "https://f.example/image?data=x&date=1".to_owned(),
        );
        let html = page.to_html();
        assert!(html.contains(r#"content="https://f.example/image?data=x&amp;date=1""#));
        assert!(html.contains(r#"<meta property="og:title" content="Protocol Usage"/>"#));
        assert!(html.contains(r#"<meta property="fc:frame:button:1" content="Reload"/>"#));
        assert!(html.contains("<body></body>"));
    }
}
