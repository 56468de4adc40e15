//! HTML rendering for the comment widget.
//!
//! One page: the submission form followed by every stored comment for
//! a slug. Rendering uses [maud](https://maud.lambda.xyz/) for
//! compile-time HTML generation with automatic escaping of all dynamic
//! values; the stylesheet and the inline script are trusted constants.

use maud::{Markup, PreEscaped, html};

use crate::query::Comment;

/// Stylesheet served at `/main.css`.
///
/// Flat design, no borders beyond hairline separators. Dark mode via
/// media query.
pub const MAIN_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--accent:#9900CC;--accent-hover:#7a00a3;--surface:#fff;--border:rgba(153,0,204,.15)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);max-width:680px;margin:0 auto;padding:1.5rem 1rem;display:flex;flex-direction:column;gap:.75rem}
input,textarea{font:inherit;color:var(--fg);background:var(--surface);border:1px solid var(--border);border-radius:8px;padding:.55rem .75rem;width:100%}
textarea{min-height:90px;resize:vertical}
input:focus,textarea:focus{outline:2px solid var(--accent);outline-offset:-1px}
button{font:inherit;font-weight:500;align-self:flex-start;padding:.55rem 1.1rem;background:var(--accent);color:#fff;border:none;border-radius:6px;cursor:pointer;transition:background .15s}
button:hover{background:var(--accent-hover)}
p{padding:.85rem 0 0;border-top:1px solid var(--border);white-space:pre-wrap;word-break:break-word}
strong{display:block;font-weight:600;color:var(--fg2)}
@media(prefers-color-scheme:dark){
:root{--bg:#0a0a0f;--fg:#e5e5e5;--fg2:#a0a0a0;--accent:#d946ef;--accent-hover:#e879f9;--surface:#111118;--border:rgba(191,0,255,.2)}
}
"#;

/// Leading half of the inline submission script. The page renderer
/// splices the escaped slug between the halves to form the POST URL.
const SUBMIT_SCRIPT_HEAD: &str = r#"
const authorField = document.querySelector("input");
const bodyField = document.querySelector("textarea");
const submit = document.querySelector("button[type=submit]");

submit.addEventListener("click", async () => {
  if (
    authorField.value.match(/^\s*$/) ||
    bodyField.value.match(/^\s*$/)
  ) {
    return;
  }

  await fetch("/postComment/"#;

/// Trailing half of the inline submission script.
const SUBMIT_SCRIPT_TAIL: &str = r#"", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({
      author: authorField.value,
      body: bodyField.value,
    }),
  });

  authorField.value = "";
  bodyField.value = "";
  window.location.reload();
});
"#;

/// Render one stored comment: author in bold, body below it.
fn comment_block(comment: &Comment) -> Markup {
    html! {
        p {
            strong { (comment.author) }
            br;
            (comment.body)
        }
    }
}

/// Render the complete widget page for a slug.
///
/// The document carries the submission form, one block per comment in
/// the given order (no re-sorting), and the inline script that posts
/// the form back. Pure formatting, no validation.
pub fn comments_page(slug: &str, comments: &[Comment]) -> Markup {
    html! {
        (maud::DOCTYPE)
        html {
            head {
                link rel="stylesheet" href="/main.css";
            }
            body {
                input type="text" placeholder="Your Name";
                textarea placeholder="Leave a comment" {}
                button type="submit" { "Submit" }

                @for comment in comments {
                    (comment_block(comment))
                }

                script {
                    (PreEscaped(SUBMIT_SCRIPT_HEAD))
                    (slug)
                    (PreEscaped(SUBMIT_SCRIPT_TAIL))
                }
            }
        }
    }
}
