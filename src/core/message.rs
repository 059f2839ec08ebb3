use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_LINK_LABEL, DEFAULT_SUCCESS_BODY};
use crate::core::severity::Severity;

/// One attachment field. `short` is always false so Slack renders it full width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub value: String,
    pub short: bool,
}

/// Colored attachment carrying exactly one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub fallback: String,
    pub color: String,
    pub fields: [Field; 1],
}

/// Top-level webhook payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub username: String,
    pub icon_emoji: String,
    pub unfurl_links: bool,
    pub attachments: [Attachment; 1],
}

impl Envelope {
    pub fn new(display_name: &str, display_icon: &str, attachments: [Attachment; 1]) -> Self {
        Self {
            username: display_name.to_string(),
            icon_emoji: format!(":{display_icon}:"),
            unfurl_links: true,
            attachments,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Builds the one-line summary shown in notifications and as the first line of the field.
///
/// The trailing `(<link|label>)` part is only rendered when `link` is non-empty and the
/// resolved label is non-empty. An absent label resolves to `"link"`; an explicitly empty
/// label drops the whole link part.
pub fn compose_fallback(
    icon: &str,
    title: &str,
    link: Option<&str>,
    link_label: Option<&str>,
) -> String {
    let label = link_label.unwrap_or(DEFAULT_LINK_LABEL);
    match link {
        Some(link) if !link.is_empty() && !label.is_empty() => {
            format!(" :{icon}: *{title}*: (<{link}|{label}>)")
        }
        _ => format!(" :{icon}: *{title}*"),
    }
}

pub fn compose_attachment(color: &str, fallback: &str, body: &str) -> [Attachment; 1] {
    [Attachment {
        fallback: fallback.to_string(),
        color: color.to_string(),
        fields: [Field {
            value: format!("{fallback}\n{body}"),
            short: false,
        }],
    }]
}

/// Per-call message input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRequest {
    pub title: String,
    pub body: Option<String>,
    pub link: Option<String>,
    pub link_label: Option<String>,
}

impl MessageRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn link_label(mut self, label: impl Into<String>) -> Self {
        self.link_label = Some(label.into());
        self
    }

    /// Body to render for `tier`. Success falls back to "Success!", other tiers to "".
    pub fn resolved_body(&self, tier: Severity) -> &str {
        match (&self.body, tier) {
            (Some(body), _) => body.as_str(),
            (None, Severity::Success) => DEFAULT_SUCCESS_BODY,
            (None, _) => "",
        }
    }

    pub fn attachments(&self, tier: Severity) -> [Attachment; 1] {
        let fallback = compose_fallback(
            tier.icon(),
            &self.title,
            self.link.as_deref(),
            self.link_label.as_deref(),
        );
        compose_attachment(tier.color(), &fallback, self.resolved_body(tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_without_link() {
        assert_eq!(
            compose_fallback("warning", "Disk almost full", None, None),
            " :warning: *Disk almost full*"
        );
        // label is ignored when there is no link
        assert_eq!(
            compose_fallback("warning", "Disk almost full", None, Some("graph")),
            " :warning: *Disk almost full*"
        );
    }

    #[test]
    fn fallback_with_link_and_label() {
        assert_eq!(
            compose_fallback("x", "Build", Some("L"), Some("T")),
            " :x: *Build*: (<L|T>)"
        );
    }

    #[test]
    fn fallback_link_without_label_uses_default_label() {
        assert_eq!(
            compose_fallback("x", "Build", Some("https://ci/1"), None),
            " :x: *Build*: (<https://ci/1|link>)"
        );
    }

    #[test]
    fn empty_label_drops_link_part() {
        assert_eq!(
            compose_fallback("x", "Build", Some("L"), Some("")),
            " :x: *Build*"
        );
    }

    #[test]
    fn empty_link_is_treated_as_absent() {
        assert_eq!(
            compose_fallback("x", "Build", Some(""), Some("T")),
            " :x: *Build*"
        );
    }

    #[test]
    fn attachment_has_single_full_width_field() {
        let [att] = compose_attachment("#7799b9", " :information_source: *Hi*", "body");
        assert_eq!(att.color, "#7799b9");
        assert_eq!(att.fallback, " :information_source: *Hi*");
        let [field] = att.fields;
        assert!(!field.short);
        assert_eq!(field.value, " :information_source: *Hi*\nbody");
    }

    #[test]
    fn envelope_wraps_icon_in_colons() {
        let env = Envelope::new("bot", "robot_face", compose_attachment("#fff000", "f", "b"));
        assert_eq!(env.icon_emoji, ":robot_face:");
        assert!(env.unfurl_links);

        let json: serde_json::Value = serde_json::from_str(&env.to_json().unwrap()).unwrap();
        assert_eq!(json["username"], "bot");
        assert_eq!(json["unfurl_links"], true);
        assert_eq!(json["attachments"].as_array().unwrap().len(), 1);
        assert_eq!(json["attachments"][0]["fields"].as_array().unwrap().len(), 1);
        assert_eq!(json["attachments"][0]["fields"][0]["short"], false);
    }

    #[test]
    fn envelope_json_keeps_wire_field_order() {
        let env = Envelope::new("n", "i", compose_attachment("#000000", "f", "b"));
        assert_eq!(
            env.to_json().unwrap(),
            r##"{"username":"n","icon_emoji":":i:","unfurl_links":true,"attachments":[{"fallback":"f","color":"#000000","fields":[{"value":"f\nb","short":false}]}]}"##
        );
    }

    #[test]
    fn success_body_defaults() {
        let req = MessageRequest::new("Deploy OK");
        assert_eq!(req.resolved_body(Severity::Success), "Success!");
        assert_eq!(req.resolved_body(Severity::Info), "");
        let req = req.body("done");
        assert_eq!(req.resolved_body(Severity::Success), "done");
    }

    #[test]
    fn request_attachments_use_tier_presentation() {
        let req = MessageRequest::new("Deploy failed")
            .body("exit code 1")
            .link("https://ci/123")
            .link_label("build log");
        let [att] = req.attachments(Severity::Error);
        assert_eq!(att.color, "#ef0000");
        assert_eq!(
            att.fields[0].value,
            " :x: *Deploy failed*: (<https://ci/123|build log>)\nexit code 1"
        );
    }
}
