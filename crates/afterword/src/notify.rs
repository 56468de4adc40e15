//! Outbound webhook notifications for new comments.
//!
//! Each stored comment is relayed to a configured webhook as a
//! components-style chat message. Delivery happens inline with the
//! submission request and is never retried.

use serde_json::{Value, json};

use crate::error::CommentError;

/// Component type for a plain text block.
const COMPONENT_TEXT_DISPLAY: u8 = 10;
/// Component type for a container wrapping other components.
const COMPONENT_CONTAINER: u8 = 17;
/// Accent color rendered along the container edge.
const CONTAINER_ACCENT_COLOR: u32 = 14_483_615;
/// Message flag opting in to the components message layout.
const FLAG_COMPONENTS_V2: u32 = 1 << 15;

/// Build the webhook message for one comment.
///
/// A leading text block names the slug; the author and body follow in
/// an accented container, the author under a `##` heading marker. All
/// three strings are embedded verbatim.
pub fn comment_message(slug: &str, author: &str, body: &str) -> Value {
    json!({
        "components": [
            { "type": COMPONENT_TEXT_DISPLAY, "content": format!("New comment on {slug}") },
            {
                "type": COMPONENT_CONTAINER,
                "accent_color": CONTAINER_ACCENT_COLOR,
                "spoiler": false,
                "components": [
                    { "type": COMPONENT_TEXT_DISPLAY, "content": format!("## {author}") },
                    { "type": COMPONENT_TEXT_DISPLAY, "content": body },
                ],
            },
        ],
        "flags": FLAG_COMPONENTS_V2,
    })
}

/// Deliver the notification for a freshly stored comment.
///
/// The response status is not inspected; only transport failures
/// surface as errors.
pub async fn comment_posted(
    client: &reqwest::Client,
    webhook_url: &str,
    slug: &str,
    author: &str,
    body: &str,
) -> Result<(), CommentError> {
    let message = comment_message(slug, author, body);

    client
        .post(webhook_url)
        .query(&[("with_components", "true")])
        .json(&message)
        .send()
        .await?;

    Ok(())
}
